#![forbid(unsafe_code)]

//! `<md:KeyDescriptor>` processing.
//!
//! A KeyDescriptor wraps a `<ds:KeyInfo>`; only the first
//! `KeyInfo/X509Data/X509Certificate` is read. The `use` attribute decides
//! what the certificate may be used for:
//!
//! - absent: signing and encryption
//! - `signing` / `encryption`: that purpose only
//! - anything else: neither

use samlmeta_core::{ns, Error};
use samlmeta_xml::query;
use serde::Serialize;

/// Characters removed from embedded certificate text.
pub const CERT_WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Collapse embedded certificate text into a single base64 token.
pub fn normalize_certificate(raw: &str) -> String {
    raw.chars().filter(|c| !CERT_WHITESPACE.contains(c)).collect()
}

/// The kind of key material carried by a [`KeyDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KeyType {
    X509Certificate,
}

/// A certificate published in a role descriptor, with its permitted uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyDescriptor {
    #[serde(rename = "type")]
    pub key_type: KeyType,
    /// Whitespace-free base64 certificate, `None` if the element was absent or empty.
    #[serde(rename = "X509Certificate")]
    pub certificate: Option<String>,
    pub signing: bool,
    pub encryption: bool,
}

impl KeyDescriptor {
    /// Build a descriptor from a `<md:KeyDescriptor>` element.
    pub fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let (signing, encryption) = usage_flags(node.attribute(ns::attr::USE));

        let certificate = query::descend(
            node,
            &[
                (ns::DSIG, ns::node::KEY_INFO),
                (ns::DSIG, ns::node::X509_DATA),
                (ns::DSIG, ns::node::X509_CERTIFICATE),
            ],
        )
        .map(|cert| normalize_certificate(&query::direct_text(cert)))
        .filter(|cert| !cert.is_empty());

        Self {
            key_type: KeyType::X509Certificate,
            certificate,
            signing,
            encryption,
        }
    }

    /// Decode the certificate to DER.
    pub fn certificate_der(&self) -> Result<Vec<u8>, Error> {
        use base64::Engine;
        let b64 = self
            .certificate
            .as_deref()
            .ok_or_else(|| Error::MissingElement(ns::node::X509_CERTIFICATE.into()))?;
        base64::engine::general_purpose::STANDARD
            .decode(b64)
            .map_err(|e| Error::Base64(format!("{}: {e}", ns::node::X509_CERTIFICATE)))
    }

    /// Decode and parse the certificate.
    pub fn x509_certificate(&self) -> Result<x509_cert::Certificate, Error> {
        use der::Decode;
        let der = self.certificate_der()?;
        x509_cert::Certificate::from_der(&der)
            .map_err(|e| Error::Certificate(format!("failed to parse certificate: {e}")))
    }
}

/// Map the `use` attribute to `(signing, encryption)`.
fn usage_flags(key_use: Option<&str>) -> (bool, bool) {
    match key_use {
        None => (true, true),
        Some(ns::USE_SIGNING) => (true, false),
        Some(ns::USE_ENCRYPTION) => (false, true),
        Some(_) => (false, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CERT: &str = "MIIBgDCCASegAwIBAgIUbCNC9gOYEl95Z+R1lERko2lYoPIwCgYIKoZIzj0EAwIw\
FjEUMBIGA1UEAwwLaWRwLmV4YW1wbGUwHhcNMjYxMDE5MTIwMTUwWhcNMzYxMDE2\
MTIwMTUwWjAWMRQwEgYDVQQDDAtpZHAuZXhhbXBsZTBZMBMGByqGSM49AgEGCCqG\
SM49AwEHA0IABI/SiOooTzOznmKaTpZWpOLT6G6cEj2gDUwqkBzi36jcvGs+YCLz\
HFNEHp3pjbz8dNfZQVdpkk0jjkriYODvNOSjUzBRMB0GA1UdDgQWBBQ2v1H1pp3R\
KyBLfg1/jPwtlzux4TAfBgNVHSMEGDAWgBQ2v1H1pp3RKyBLfg1/jPwtlzux4TAP\
BgNVHRMBAf8EBTADAQH/MAoGCCqGSM49BAMCA0cAMEQCIHBDHe72KJic9jYAwnlt\
HoK4uudjIgBIUvVOAs4EHJxxAiBYhhW6u/Ieku5OkQs9DqKsOe0OaUrPoyGi/qr2\
SJimDg==";

    fn key_descriptor(attrs: &str, body: &str) -> KeyDescriptor {
        let xml = format!(
            r#"<md:KeyDescriptor xmlns:md="urn:oasis:names:tc:SAML:2.0:metadata" xmlns:ds="http://www.w3.org/2000/09/xmldsig#" {attrs}>{body}</md:KeyDescriptor>"#
        );
        let doc = roxmltree::Document::parse(&xml).unwrap();
        KeyDescriptor::from_node(doc.root_element())
    }

    fn x509(text: &str) -> String {
        format!("<ds:KeyInfo><ds:X509Data><ds:X509Certificate>{text}</ds:X509Certificate></ds:X509Data></ds:KeyInfo>")
    }

    #[test]
    fn test_absent_use_allows_both() {
        let kd = key_descriptor("", &x509("QUJD"));
        assert!(kd.signing);
        assert!(kd.encryption);
        assert_eq!(kd.key_type, KeyType::X509Certificate);
        assert_eq!(kd.certificate.as_deref(), Some("QUJD"));
    }

    #[test]
    fn test_explicit_use_sets_one_flag() {
        let kd = key_descriptor(r#"use="signing""#, &x509("QUJD"));
        assert!(kd.signing);
        assert!(!kd.encryption);

        let kd = key_descriptor(r#"use="encryption""#, &x509("QUJD"));
        assert!(!kd.signing);
        assert!(kd.encryption);
    }

    #[test]
    fn test_unknown_use_sets_neither() {
        let kd = key_descriptor(r#"use="Signing""#, &x509("QUJD"));
        assert!(!kd.signing);
        assert!(!kd.encryption);

        let kd = key_descriptor(r#"use="""#, &x509("QUJD"));
        assert!(!kd.signing);
        assert!(!kd.encryption);
    }

    #[test]
    fn test_certificate_whitespace_stripped() {
        let kd = key_descriptor("", &x509("\n   MIIC\tAAAA\r\n   BBBB \n"));
        assert_eq!(kd.certificate.as_deref(), Some("MIICAAAABBBB"));
    }

    #[test]
    fn test_missing_or_empty_certificate_is_none() {
        assert_eq!(key_descriptor("", "").certificate, None);
        assert_eq!(key_descriptor("", "<ds:KeyInfo/>").certificate, None);
        assert_eq!(key_descriptor("", &x509("")).certificate, None);
        assert_eq!(key_descriptor("", &x509(" \n\t ")).certificate, None);
    }

    #[test]
    fn test_certificate_requires_dsig_namespace() {
        let body = r#"<KeyInfo><X509Data><X509Certificate>QUJD</X509Certificate></X509Data></KeyInfo>"#;
        assert_eq!(key_descriptor("", body).certificate, None);
    }

    #[test]
    fn test_only_first_certificate_is_read() {
        let body = "<ds:KeyInfo><ds:X509Data>\
            <ds:X509Certificate>Rk1SU1Q=</ds:X509Certificate>\
            <ds:X509Certificate>U0VDT05E</ds:X509Certificate>\
            </ds:X509Data></ds:KeyInfo>";
        assert_eq!(key_descriptor("", body).certificate.as_deref(), Some("Rk1SU1Q="));
    }

    #[test]
    fn test_certificate_der_and_x509() {
        let kd = key_descriptor(r#"use="signing""#, &x509(CERT));
        let der = kd.certificate_der().unwrap();
        assert_eq!(der[0], 0x30);

        let cert = kd.x509_certificate().unwrap();
        assert_eq!(cert.tbs_certificate.subject.to_string(), "CN=idp.example");
    }

    #[test]
    fn test_certificate_der_errors() {
        let kd = key_descriptor("", "");
        assert!(matches!(kd.certificate_der(), Err(Error::MissingElement(_))));

        let kd = key_descriptor("", &x509("not*base64"));
        assert!(matches!(kd.certificate_der(), Err(Error::Base64(_))));

        // valid base64, not DER
        let kd = key_descriptor("", &x509("aGVsbG8="));
        assert!(matches!(kd.x509_certificate(), Err(Error::Certificate(_))));
    }

    #[test]
    fn test_serialized_field_names() {
        let kd = key_descriptor("", &x509("QUJD"));
        let json = serde_json::to_value(&kd).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "X509Certificate",
                "X509Certificate": "QUJD",
                "signing": true,
                "encryption": true,
            })
        );
    }

    proptest! {
        #[test]
        fn normalize_removes_all_cert_whitespace(raw in "[A-Za-z0-9+/= \\t\\n\\r\\x00\\x0B]{0,200}") {
            let out = normalize_certificate(&raw);
            prop_assert!(!out.chars().any(|c| CERT_WHITESPACE.contains(&c)));
            let kept: String = raw.chars().filter(|c| !CERT_WHITESPACE.contains(c)).collect();
            prop_assert_eq!(out, kept);
        }

        #[test]
        fn normalize_is_idempotent(raw in "[A-Za-z0-9+/= \\t\\n\\r\\x00\\x0B]{0,200}") {
            let once = normalize_certificate(&raw);
            prop_assert_eq!(normalize_certificate(&once), once.clone());
        }
    }
}
