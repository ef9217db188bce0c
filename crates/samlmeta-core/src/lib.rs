#![forbid(unsafe_code)]

//! Shared building blocks for samlmeta: the error type and the SAML
//! metadata / XML-DSig names the extractor matches against.

pub mod binding;
pub mod error;
pub mod ns;

pub use error::{Error, Result};
