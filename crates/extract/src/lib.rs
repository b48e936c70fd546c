//! Style extraction: computed values grouped into categories, with
//! uninteresting defaults filtered out.

#![forbid(unsafe_code)]

mod category;
mod filter;
mod snapshot;

pub use category::{Category, category_properties};
pub use filter::should_include;
pub use snapshot::{ExtractError, StyleSnapshot, extract, extract_at, group_values};
