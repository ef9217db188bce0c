#![forbid(unsafe_code)]

//! XML document abstraction for samlmeta.
//!
//! Provides an owned document over `roxmltree` plus the namespace-aware
//! lookups the metadata extractor is built from. Lookups compare element
//! names and attribute values directly; no query strings are ever built
//! from document or caller data.

pub mod document;
pub mod query;

pub use document::XmlDocument;

/// Return roxmltree parsing options.
///
/// DTDs are rejected unless `allow_dtd` is set. roxmltree never fetches
/// external entities, so enabling them only admits internal declarations.
pub fn parsing_options(allow_dtd: bool) -> roxmltree::ParsingOptions {
    roxmltree::ParsingOptions {
        allow_dtd,
        ..roxmltree::ParsingOptions::default()
    }
}
