#![forbid(unsafe_code)]

//! samlmeta: extract identity-provider and service-provider configuration
//! from SAML 2.0 metadata.
//!
//! ```no_run
//! use samlmeta::MetadataExtractor;
//!
//! # fn main() -> samlmeta::Result<()> {
//! let metadata = MetadataExtractor::load("federation.xml")?;
//! if let Some(idp) = metadata.get_idp("https://idp.example/")? {
//!     for key in idp.signing_keys() {
//!         println!("{:?}", key.certificate);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub use samlmeta_core as core;
pub use samlmeta_xml as xml;

pub mod extractor;
pub mod key;
pub mod options;
pub mod record;
pub mod role;

pub use extractor::MetadataExtractor;
pub use key::{normalize_certificate, KeyDescriptor, KeyType};
pub use options::ExtractorOptions;
pub use record::{Endpoint, IdpRecord, IndexedEndpoint, SpRecord};
pub use role::{Role, RoleRecord};
pub use samlmeta_core::{binding, Error, Result};
