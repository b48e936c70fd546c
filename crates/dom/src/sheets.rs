//! Stylesheet attachments and their provenance.

use crate::DomError;

/// Where a stylesheet came from, which decides whether its text may be
/// read back out (for cloning into a detached surface).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SheetProvenance {
    /// A `<style>` block or equivalent; always readable.
    Inline,
    /// A linked stylesheet. Cross-origin sheets still apply to the
    /// document but refuse to enumerate their rules.
    External { url: String, cross_origin: bool },
}

/// A stylesheet attached to a document, in attachment order.
#[derive(Clone, Debug)]
pub struct StylesheetAttachment {
    text: String,
    provenance: SheetProvenance,
}

impl StylesheetAttachment {
    pub(crate) fn new(text: String, provenance: SheetProvenance) -> Self {
        Self { text, provenance }
    }

    /// Raw CSS text, as used by the document's own style resolution.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// CSS text for re-hosting elsewhere.
    ///
    /// # Errors
    /// Returns [`DomError::CrossOriginStylesheet`] for cross-origin sheets.
    pub fn readable_text(&self) -> Result<&str, DomError> {
        match &self.provenance {
            SheetProvenance::External { url, cross_origin } if *cross_origin => {
                Err(DomError::CrossOriginStylesheet { url: url.clone() })
            }
            SheetProvenance::Inline | SheetProvenance::External { .. } => Ok(&self.text),
        }
    }

    #[inline]
    pub fn provenance(&self) -> &SheetProvenance {
        &self.provenance
    }
}
