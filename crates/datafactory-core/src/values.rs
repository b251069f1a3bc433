//! Data-source capabilities and their table-backed implementations.
//!
//! Each trait is a small capability ("supplies first names", "supplies
//! corpus words", ...). Callers can substitute any conforming type; the
//! `*Table` structs are the default implementation and double as the
//! serde shape of the YAML configuration.

use crate::defaults;
use serde::{Deserialize, Serialize};

/// Supplies person name parts.
pub trait NameValues: Send + Sync {
    fn first_names(&self) -> &[String];
    fn last_names(&self) -> &[String];
    /// Honorifics such as `Mr` or `Dr`.
    fn prefixes(&self) -> &[String];
    /// Generational or professional suffixes such as `Jr` or `PhD`.
    fn suffixes(&self) -> &[String];
}

/// Supplies street address parts.
pub trait AddressValues: Send + Sync {
    fn street_names(&self) -> &[String];
    fn street_suffixes(&self) -> &[String];
    fn cities(&self) -> &[String];
}

/// Supplies free-text content.
pub trait ContentValues: Send + Sync {
    /// The corpus used for word and text synthesis.
    fn words(&self) -> &[String];
    fn business_types(&self) -> &[String];
    fn email_hosts(&self) -> &[String];
    fn tlds(&self) -> &[String];
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Name table
// ============================================================================

/// Table-backed [`NameValues`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameTable {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
}

impl Default for NameTable {
    fn default() -> Self {
        Self {
            first_names: owned(defaults::FIRST_NAMES),
            last_names: owned(defaults::LAST_NAMES),
            prefixes: owned(defaults::PREFIXES),
            suffixes: owned(defaults::SUFFIXES),
        }
    }
}

impl NameValues for NameTable {
    fn first_names(&self) -> &[String] {
        &self.first_names
    }

    fn last_names(&self) -> &[String] {
        &self.last_names
    }

    fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

// ============================================================================
// Address table
// ============================================================================

/// Table-backed [`AddressValues`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressTable {
    pub street_names: Vec<String>,
    pub street_suffixes: Vec<String>,
    pub cities: Vec<String>,
}

impl Default for AddressTable {
    fn default() -> Self {
        Self {
            street_names: owned(defaults::STREET_NAMES),
            street_suffixes: owned(defaults::STREET_SUFFIXES),
            cities: owned(defaults::CITIES),
        }
    }
}

impl AddressValues for AddressTable {
    fn street_names(&self) -> &[String] {
        &self.street_names
    }

    fn street_suffixes(&self) -> &[String] {
        &self.street_suffixes
    }

    fn cities(&self) -> &[String] {
        &self.cities
    }
}

// ============================================================================
// Content table
// ============================================================================

/// Table-backed [`ContentValues`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentTable {
    pub words: Vec<String>,
    pub business_types: Vec<String>,
    pub email_hosts: Vec<String>,
    pub tlds: Vec<String>,
}

impl ContentTable {
    /// Create a content table with a custom corpus and default everything else.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

impl Default for ContentTable {
    fn default() -> Self {
        Self {
            words: owned(defaults::WORDS),
            business_types: owned(defaults::BUSINESS_TYPES),
            email_hosts: owned(defaults::EMAIL_HOSTS),
            tlds: owned(defaults::TLDS),
        }
    }
}

impl ContentValues for ContentTable {
    fn words(&self) -> &[String] {
        &self.words
    }

    fn business_types(&self) -> &[String] {
        &self.business_types
    }

    fn email_hosts(&self) -> &[String] {
        &self.email_hosts
    }

    fn tlds(&self) -> &[String] {
        &self.tlds
    }
}
