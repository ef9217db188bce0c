#![forbid(unsafe_code)]

//! SAML 2.0 binding URIs.
//!
//! Each constant is the value that appears in the `Binding` attribute of an
//! endpoint element.

pub const HTTP_REDIRECT: &str = "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-Redirect";
pub const HTTP_POST: &str = "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-POST";
pub const HTTP_ARTIFACT: &str = "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-Artifact";
pub const SOAP: &str = "urn:oasis:names:tc:SAML:2.0:bindings:SOAP";
pub const PAOS: &str = "urn:oasis:names:tc:SAML:2.0:bindings:PAOS";

/// Short display name for a known binding URI (`HTTP-POST`, `SOAP`, ...).
pub fn short_name(uri: &str) -> Option<&'static str> {
    match uri {
        HTTP_REDIRECT => Some("HTTP-Redirect"),
        HTTP_POST => Some("HTTP-POST"),
        HTTP_ARTIFACT => Some("HTTP-Artifact"),
        SOAP => Some("SOAP"),
        PAOS => Some("PAOS"),
        _ => None,
    }
}
