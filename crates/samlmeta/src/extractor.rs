#![forbid(unsafe_code)]

//! The metadata extractor: one loaded document, read-only queries over it.

use crate::options::ExtractorOptions;
use crate::record::{IdpRecord, SpRecord};
use crate::role::RoleRecord;
use samlmeta_core::{ns, Error};
use samlmeta_xml::{query, XmlDocument};
use std::path::Path;

/// Query surface over a SAML 2.0 metadata document.
///
/// The document is loaded and checked once. Every query walks a fresh,
/// short-lived view of the unmodified text, so queries are independent of
/// each other and an extractor can be shared between threads without a lock.
///
/// Entity descriptors are found anywhere in the document (a bare
/// `EntityDescriptor` root or nested `EntitiesDescriptor` groups) and
/// matched on their resolved namespace, whatever prefix the document uses.
#[derive(Debug, Clone)]
pub struct MetadataExtractor {
    document: XmlDocument,
    options: ExtractorOptions,
}

impl MetadataExtractor {
    /// Read and parse the metadata file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::load_with_options(path, ExtractorOptions::default())
    }

    pub fn load_with_options(
        path: impl AsRef<Path>,
        options: ExtractorOptions,
    ) -> Result<Self, Error> {
        let document = XmlDocument::load(path.as_ref(), options.allow_dtd)?;
        Ok(Self { document, options })
    }

    /// Parse metadata held in memory.
    pub fn parse(text: impl Into<String>) -> Result<Self, Error> {
        Self::parse_with_options(text, ExtractorOptions::default())
    }

    pub fn parse_with_options(
        text: impl Into<String>,
        options: ExtractorOptions,
    ) -> Result<Self, Error> {
        let document = XmlDocument::parse(text.into(), options.allow_dtd)?;
        Ok(Self { document, options })
    }

    /// Parse metadata from raw bytes, which must be UTF-8.
    pub fn parse_bytes(data: &[u8]) -> Result<Self, Error> {
        let document = XmlDocument::parse_bytes(data, false)?;
        Ok(Self {
            document,
            options: ExtractorOptions::default(),
        })
    }

    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    pub fn document(&self) -> &XmlDocument {
        &self.document
    }

    /// The `entityID` of every entity descriptor, in document order.
    ///
    /// Descriptors without an `entityID` attribute are left out.
    pub fn entity_ids(&self) -> Result<Vec<String>, Error> {
        let doc = self.document.parse_doc()?;
        let ids = query::descendants(&doc, ns::MD, ns::node::ENTITY_DESCRIPTOR)
            .filter_map(|e| e.attribute(ns::attr::ENTITY_ID))
            .map(str::to_owned)
            .collect();
        Ok(ids)
    }

    /// Every entity with an IdP role, in document order.
    pub fn list_idps(&self) -> Result<Vec<IdpRecord>, Error> {
        self.list()
    }

    /// Every entity with an SP role, in document order.
    pub fn list_sps(&self) -> Result<Vec<SpRecord>, Error> {
        self.list()
    }

    /// The IdP configuration of `entity_id`.
    ///
    /// Returns `Ok(None)` when no entity has that ID or the entity has no IdP
    /// role. The ID is compared for exact string equality.
    pub fn get_idp(&self, entity_id: &str) -> Result<Option<IdpRecord>, Error> {
        self.get(entity_id)
    }

    /// The SP configuration of `entity_id`, `Ok(None)` if unknown.
    pub fn get_sp(&self, entity_id: &str) -> Result<Option<SpRecord>, Error> {
        self.get(entity_id)
    }

    fn list<R: RoleRecord>(&self) -> Result<Vec<R>, Error> {
        let doc = self.document.parse_doc()?;
        let role = R::ROLE;
        let mut records = Vec::new();

        for entity in query::descendants(&doc, ns::MD, ns::node::ENTITY_DESCRIPTOR) {
            let Some(descriptor) = role.descriptor(entity) else {
                continue;
            };
            let entity_id = entity.attribute(ns::attr::ENTITY_ID).unwrap_or("");
            tracing::trace!(entity_id, role = %role, "extracting role descriptor");

            match R::extract(entity_id, descriptor) {
                Ok(record) => records.push(record),
                Err(e) if self.options.skip_malformed_roles && e.is_malformed_role() => {
                    tracing::warn!(entity_id, role = %role, error = %e, "skipping malformed role");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::debug!(role = %role, count = records.len(), "listed entities");
        Ok(records)
    }

    fn get<R: RoleRecord>(&self, entity_id: &str) -> Result<Option<R>, Error> {
        let doc = self.document.parse_doc()?;
        let role = R::ROLE;

        let found = query::descendants(&doc, ns::MD, ns::node::ENTITY_DESCRIPTOR)
            .filter(|e| e.attribute(ns::attr::ENTITY_ID) == Some(entity_id))
            .find_map(|e| role.descriptor(e));

        match found {
            Some(descriptor) => R::extract(entity_id, descriptor).map(Some),
            None => {
                tracing::debug!(entity_id, role = %role, "entity not found");
                Ok(None)
            }
        }
    }
}
