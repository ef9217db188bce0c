#![forbid(unsafe_code)]

//! Extractor configuration.

/// Options controlling how a metadata document is parsed and queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractorOptions {
    /// Accept documents with a DTD (internal entity declarations only).
    pub allow_dtd: bool,
    /// In `list_idps` / `list_sps`, skip entities whose role descriptor lacks
    /// a mandatory endpoint or key instead of failing the whole listing.
    /// Single-entity queries always report the error.
    pub skip_malformed_roles: bool,
}

impl ExtractorOptions {
    /// Create options with every knob off.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_dtd(mut self, allow: bool) -> Self {
        self.allow_dtd = allow;
        self
    }

    pub fn with_skip_malformed_roles(mut self, skip: bool) -> Self {
        self.skip_malformed_roles = skip;
        self
    }
}
