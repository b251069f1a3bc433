//! Core value tables for the datafactory test data generator.
//!
//! This crate provides the read-only data that generators draw from:
//!
//! - [`NameValues`] - first names, last names, prefixes and suffixes
//! - [`AddressValues`] - street names, street suffixes and cities
//! - [`ContentValues`] - corpus words, business types, email hosts and TLDs
//! - [`ValueTables`] - all three groups, loadable from YAML
//!
//! # Architecture
//!
//! ```text
//! datafactory-core (this crate)
//!    │
//!    ├─── NameTable / AddressTable / ContentTable   (default implementations)
//!    │
//!    └─── datafactory-generator  (draws from any NameValues/AddressValues/ContentValues)
//! ```
//!
//! Tables are plain values. They are validated lazily: an empty table is
//! accepted here and only reported when a generator tries to draw from it.
//!
//! # Example
//!
//! ```rust
//! use datafactory_core::{ContentValues, ValueTables};
//!
//! let tables = ValueTables::from_yaml(r#"
//! content:
//!   words: [alpha, beta, gamma]
//! "#).unwrap();
//!
//! assert_eq!(tables.content.words().len(), 3);
//! // Sections that are not overridden keep the defaults
//! assert!(!tables.content.tlds().is_empty());
//! ```

pub mod defaults;
pub mod tables;
pub mod values;

// Re-exports for convenience
pub use tables::{TablesError, ValueTables};
pub use values::{AddressTable, AddressValues, ContentTable, ContentValues, NameTable, NameValues};
