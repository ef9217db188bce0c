#![forbid(unsafe_code)]

//! XML namespace constants used across the library.

/// SAML 2.0 metadata namespace
pub const MD: &str = "urn:oasis:names:tc:SAML:2.0:metadata";

/// XML Digital Signature namespace
pub const DSIG: &str = "http://www.w3.org/2000/09/xmldsig#";

// ── Element names ────────────────────────────────────────────────────

pub mod node {
    // Metadata elements
    pub const ENTITY_DESCRIPTOR: &str = "EntityDescriptor";
    pub const IDP_SSO_DESCRIPTOR: &str = "IDPSSODescriptor";
    pub const SP_SSO_DESCRIPTOR: &str = "SPSSODescriptor";
    pub const SINGLE_SIGN_ON_SERVICE: &str = "SingleSignOnService";
    pub const ASSERTION_CONSUMER_SERVICE: &str = "AssertionConsumerService";
    pub const KEY_DESCRIPTOR: &str = "KeyDescriptor";

    // DSig elements
    pub const KEY_INFO: &str = "KeyInfo";
    pub const X509_DATA: &str = "X509Data";
    pub const X509_CERTIFICATE: &str = "X509Certificate";
}

// ── Attribute names ──────────────────────────────────────────────────

pub mod attr {
    pub const ENTITY_ID: &str = "entityID";
    pub const BINDING: &str = "Binding";
    pub const LOCATION: &str = "Location";
    pub const INDEX: &str = "index";
    pub const USE: &str = "use";
}

// ── KeyDescriptor `use` values ───────────────────────────────────────

pub const USE_SIGNING: &str = "signing";
pub const USE_ENCRYPTION: &str = "encryption";
