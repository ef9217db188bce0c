#![forbid(unsafe_code)]

/// Errors produced while loading or querying a SAML metadata document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be read, was not UTF-8, or is not well-formed XML.
    #[error("unreadable or malformed document: {0}")]
    DocumentLoad(String),

    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// A role descriptor is present but carries no SSO / ACS endpoint.
    #[error("missing required endpoint: {0}")]
    MissingEndpoint(String),

    /// An IdP role descriptor is present but carries no KeyDescriptor.
    #[error("missing required key: {0}")]
    MissingKey(String),

    #[error("missing required element: {0}")]
    MissingElement(String),

    #[error("base64 decode error: {0}")]
    Base64(String),

    #[error("certificate error: {0}")]
    Certificate(String),
}

impl Error {
    /// True for the data-integrity faults raised by a present-but-incomplete role.
    pub fn is_malformed_role(&self) -> bool {
        matches!(self, Self::MissingEndpoint(_) | Self::MissingKey(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
