//! Herald Partners - partner catalog and scope resolution
//!
//! Maps integration scopes mentioned in changelog text to the partners
//! that depend on them. The bundled catalog is embedded at compile time
//! and parsed once; a config-supplied JSON file can replace it.

mod catalog;
mod error;
mod scopes;

pub use catalog::{PartnerCatalog, PartnerRecord};
pub use error::{CatalogError, Result};
pub use scopes::extract_scopes;
