#![forbid(unsafe_code)]

//! Typed records returned by the extractor.
//!
//! Field names serialize as the SAML element and attribute names
//! (`SingleSignOnService`, `Binding`, `Location`, ...) so the JSON form can be
//! handed to consumers that expect the metadata vocabulary.

use crate::key::KeyDescriptor;
use samlmeta_core::{binding, ns};
use serde::Serialize;

/// A `Binding` / `Location` pair from an endpoint element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    #[serde(rename = "Binding")]
    pub binding: String,
    #[serde(rename = "Location")]
    pub location: String,
}

impl Endpoint {
    pub(crate) fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        Self {
            binding: node.attribute(ns::attr::BINDING).unwrap_or("").to_owned(),
            location: node.attribute(ns::attr::LOCATION).unwrap_or("").to_owned(),
        }
    }

    /// Short name of the binding (`HTTP-POST`, ...) if it is a SAML 2.0 binding.
    pub fn binding_name(&self) -> Option<&'static str> {
        binding::short_name(&self.binding)
    }
}

/// An endpoint with a SAML `index`, as used by `<md:AssertionConsumerService>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedEndpoint {
    #[serde(rename = "Binding")]
    pub binding: String,
    #[serde(rename = "Location")]
    pub location: String,
    pub index: i64,
}

impl IndexedEndpoint {
    pub(crate) fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let Endpoint { binding, location } = Endpoint::from_node(node);
        Self {
            binding,
            location,
            index: parse_index(node.attribute(ns::attr::INDEX)),
        }
    }

    pub fn binding_name(&self) -> Option<&'static str> {
        binding::short_name(&self.binding)
    }
}

/// Missing or non-numeric indexes read as 0.
fn parse_index(value: Option<&str>) -> i64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

/// Identity-provider configuration of one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdpRecord {
    #[serde(rename = "entityID")]
    pub entity_id: String,
    #[serde(rename = "SingleSignOnService")]
    pub single_sign_on_services: Vec<Endpoint>,
    pub keys: Vec<KeyDescriptor>,
}

impl IdpRecord {
    /// First SSO endpoint offering `binding` (a full binding URI).
    pub fn sso_for_binding(&self, binding: &str) -> Option<&Endpoint> {
        self.single_sign_on_services
            .iter()
            .find(|ep| ep.binding == binding)
    }

    /// Keys that may be used to verify the IdP's signatures.
    pub fn signing_keys(&self) -> impl Iterator<Item = &KeyDescriptor> {
        self.keys.iter().filter(|k| k.signing)
    }

    /// Keys that may be used to encrypt data for the IdP.
    pub fn encryption_keys(&self) -> impl Iterator<Item = &KeyDescriptor> {
        self.keys.iter().filter(|k| k.encryption)
    }
}

/// Service-provider configuration of one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpRecord {
    #[serde(rename = "entityID")]
    pub entity_id: String,
    #[serde(rename = "AssertionConsumerService")]
    pub assertion_consumer_services: Vec<IndexedEndpoint>,
}

impl SpRecord {
    /// The ACS endpoint carrying `index`.
    pub fn acs_by_index(&self, index: i64) -> Option<&IndexedEndpoint> {
        self.assertion_consumer_services
            .iter()
            .find(|ep| ep.index == index)
    }

    /// The ACS endpoint with the lowest index, first in document order on ties.
    pub fn default_acs(&self) -> Option<&IndexedEndpoint> {
        self.assertion_consumer_services
            .iter()
            .min_by_key(|ep| ep.index)
    }
}
