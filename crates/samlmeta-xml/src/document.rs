#![forbid(unsafe_code)]

//! Owned XML document wrapper over roxmltree.

use samlmeta_core::Error;
use std::path::Path;

/// An owned, validated XML document.
///
/// The text is checked for well-formedness once, at construction. To walk
/// the tree, call [`XmlDocument::parse_doc`], which returns a temporary
/// `roxmltree::Document` borrowing from the stored text. The stored text is
/// never mutated, so one `XmlDocument` can be shared across threads and
/// walked concurrently.
#[derive(Debug, Clone)]
pub struct XmlDocument {
    text: String,
    allow_dtd: bool,
}

impl XmlDocument {
    /// Read and validate the XML file at `path`.
    pub fn load(path: &Path, allow_dtd: bool) -> Result<Self, Error> {
        let data = std::fs::read(path)
            .map_err(|e| Error::DocumentLoad(format!("{}: {e}", path.display())))?;
        let doc = Self::parse_bytes(&data, allow_dtd).map_err(|e| match e {
            Error::DocumentLoad(msg) => Error::DocumentLoad(format!("{}: {msg}", path.display())),
            other => other,
        })?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "loaded XML document");
        Ok(doc)
    }

    /// Parse and validate XML from a string, taking ownership.
    pub fn parse(text: String, allow_dtd: bool) -> Result<Self, Error> {
        roxmltree::Document::parse_with_options(&text, crate::parsing_options(allow_dtd))
            .map_err(|e| Error::DocumentLoad(e.to_string()))?;
        Ok(Self { text, allow_dtd })
    }

    /// Parse and validate XML from bytes.
    pub fn parse_bytes(data: &[u8], allow_dtd: bool) -> Result<Self, Error> {
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::DocumentLoad(format!("invalid UTF-8: {e}")))?
            .to_owned();
        Self::parse(text, allow_dtd)
    }

    /// Get the raw XML text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parse the document and return a temporary `roxmltree::Document`.
    ///
    /// The text was validated at construction, so this only fails if the
    /// parser itself changes behaviour between calls.
    pub fn parse_doc(&self) -> Result<roxmltree::Document<'_>, Error> {
        roxmltree::Document::parse_with_options(&self.text, crate::parsing_options(self.allow_dtd))
            .map_err(|e| Error::XmlParse(e.to_string()))
    }
}
