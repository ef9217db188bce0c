#![forbid(unsafe_code)]

//! Role-descriptor traversal shared by the IdP and SP queries.
//!
//! Both lookup paths (one entity by ID, every entity in order) go through
//! [`RoleRecord::extract`], so the endpoint and key rules cannot drift
//! between them.

use crate::key::KeyDescriptor;
use crate::record::{Endpoint, IdpRecord, IndexedEndpoint, SpRecord};
use samlmeta_core::{ns, Error};
use samlmeta_xml::query;

/// An entity role the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// `<md:IDPSSODescriptor>`
    Idp,
    /// `<md:SPSSODescriptor>`
    Sp,
}

impl Role {
    /// Local name of the role descriptor element.
    pub fn descriptor_name(self) -> &'static str {
        match self {
            Self::Idp => ns::node::IDP_SSO_DESCRIPTOR,
            Self::Sp => ns::node::SP_SSO_DESCRIPTOR,
        }
    }

    /// Local name of the endpoint element the role must carry.
    pub fn endpoint_name(self) -> &'static str {
        match self {
            Self::Idp => ns::node::SINGLE_SIGN_ON_SERVICE,
            Self::Sp => ns::node::ASSERTION_CONSUMER_SERVICE,
        }
    }

    /// The role descriptor directly under `entity`, if the entity has this role.
    pub fn descriptor<'a, 'input: 'a>(
        self,
        entity: roxmltree::Node<'a, 'input>,
    ) -> Option<roxmltree::Node<'a, 'input>> {
        query::find_child_element(entity, ns::MD, self.descriptor_name())
    }

    /// Endpoint elements of a role descriptor, in document order.
    ///
    /// A role without any endpoint is malformed: SSO cannot proceed without
    /// at least one binding.
    pub(crate) fn endpoints<'a, 'input: 'a>(
        self,
        entity_id: &str,
        descriptor: roxmltree::Node<'a, 'input>,
    ) -> Result<Vec<roxmltree::Node<'a, 'input>>, Error> {
        let found: Vec<_> = query::child_elements(descriptor, ns::MD, self.endpoint_name()).collect();
        if found.is_empty() {
            return Err(Error::MissingEndpoint(format!(
                "{entity_id}: no {} in {}",
                self.endpoint_name(),
                self.descriptor_name()
            )));
        }
        Ok(found)
    }

    /// Key descriptors of a role descriptor, in document order.
    ///
    /// A role without any KeyDescriptor cannot establish trust.
    pub(crate) fn keys(
        self,
        entity_id: &str,
        descriptor: roxmltree::Node<'_, '_>,
    ) -> Result<Vec<KeyDescriptor>, Error> {
        let keys: Vec<_> = query::child_elements(descriptor, ns::MD, ns::node::KEY_DESCRIPTOR)
            .map(KeyDescriptor::from_node)
            .collect();
        if keys.is_empty() {
            return Err(Error::MissingKey(format!(
                "{entity_id}: no {} in {}",
                ns::node::KEY_DESCRIPTOR,
                self.descriptor_name()
            )));
        }
        Ok(keys)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idp => write!(f, "IdP"),
            Self::Sp => write!(f, "SP"),
        }
    }
}

/// A record built from one role descriptor of one entity.
pub trait RoleRecord: Sized {
    const ROLE: Role;

    /// Build the record from the role descriptor element of `entity_id`.
    fn extract(entity_id: &str, descriptor: roxmltree::Node<'_, '_>) -> Result<Self, Error>;
}

impl RoleRecord for IdpRecord {
    const ROLE: Role = Role::Idp;

    fn extract(entity_id: &str, descriptor: roxmltree::Node<'_, '_>) -> Result<Self, Error> {
        let single_sign_on_services = Self::ROLE
            .endpoints(entity_id, descriptor)?
            .into_iter()
            .map(Endpoint::from_node)
            .collect();
        let keys = Self::ROLE.keys(entity_id, descriptor)?;
        Ok(Self {
            entity_id: entity_id.to_owned(),
            single_sign_on_services,
            keys,
        })
    }
}

impl RoleRecord for SpRecord {
    const ROLE: Role = Role::Sp;

    fn extract(entity_id: &str, descriptor: roxmltree::Node<'_, '_>) -> Result<Self, Error> {
        let assertion_consumer_services = Self::ROLE
            .endpoints(entity_id, descriptor)?
            .into_iter()
            .map(IndexedEndpoint::from_node)
            .collect();
        Ok(Self {
            entity_id: entity_id.to_owned(),
            assertion_consumer_services,
        })
    }
}
