//! Filtering out default values that would only add noise.

/// Exact default values excluded per property.
const EXCLUDED_DEFAULTS: &[(&str, &str)] = &[
    ("position", "static"),
    ("display", "inline"),
    ("opacity", "1"),
    ("z-index", "auto"),
    ("transform", "none"),
    ("transition", "all 0s ease 0s"),
    ("animation", "none"),
    ("background-image", "none"),
    ("border-style", "none"),
    ("border-width", "0px"),
    ("box-shadow", "none"),
    ("outline", "none"),
    ("margin", "0px"),
    ("padding", "0px"),
];

/// Whether a property/value pair is interesting enough to keep.
///
/// Empty values, per-property defaults, and zero margins or paddings of
/// any side are dropped.
pub fn should_include(property: &str, value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if EXCLUDED_DEFAULTS
        .iter()
        .any(|(name, default)| *name == property && *default == value)
    {
        return false;
    }
    if (property.starts_with("margin") || property.starts_with("padding")) && value == "0px" {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::should_include;
    use std::error::Error;

    #[test]
    fn drops_per_property_defaults() -> Result<(), Box<dyn Error>> {
        if should_include("display", "inline") {
            return Err("default display should be dropped".into());
        }
        if should_include("transition", "all 0s ease 0s") {
            return Err("default transition should be dropped".into());
        }
        if !should_include("display", "flex") {
            return Err("non-default display should be kept".into());
        }
        Ok(())
    }

    #[test]
    fn drops_zero_box_sides() -> Result<(), Box<dyn Error>> {
        if should_include("margin-left", "0px") {
            return Err("zero margin side should be dropped".into());
        }
        if should_include("padding-top", "0px") {
            return Err("zero padding side should be dropped".into());
        }
        if !should_include("margin-left", "4px") {
            return Err("non-zero margin side should be kept".into());
        }
        Ok(())
    }

    #[test]
    fn keeps_zero_values_outside_box_sides() -> Result<(), Box<dyn Error>> {
        if !should_include("letter-spacing", "0px") {
            return Err("zero letter-spacing should be kept".into());
        }
        Ok(())
    }

    #[test]
    fn drops_empty_values() -> Result<(), Box<dyn Error>> {
        if should_include("color", "") {
            return Err("empty value should be dropped".into());
        }
        Ok(())
    }
}
