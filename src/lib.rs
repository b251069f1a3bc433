//! DataFactory Library
//!
//! Seeded generation of plausible test data: names, addresses, words, text,
//! numbers, dates, business names and email addresses.
//!
//! # Crates
//!
//! - `datafactory_core` - value tables and their YAML configuration
//! - `datafactory_generator` - random streams, text synthesis and the `DataFactory`
//!
//! # CLI Usage
//!
//! ```bash
//! # Ten person records as JSON lines
//! datafactory records --count 10 --seed 42
//!
//! # Records drawn from custom tables, as YAML
//! datafactory records --count 3 --tables tables.yaml --format yaml
//!
//! # Five pieces of text between 20 and 80 characters
//! datafactory text --min 20 --max 80 --count 5
//! ```

use anyhow::Context;
use clap::Parser;
use datafactory_core::ValueTables;
use std::path::PathBuf;

pub mod generate;

pub use datafactory_core as tables;
pub use datafactory_generator::{DataFactory, GeneratorError, DEFAULT_SEED};

#[derive(Parser, Clone, Debug, Default)]
pub struct FactoryOpts {
    /// Seed for the random stream (defaults to the built-in seed)
    #[arg(long, env = "DATAFACTORY_SEED")]
    pub seed: Option<i64>,

    /// YAML file overriding the built-in value tables
    #[arg(long, value_name = "PATH", env = "DATAFACTORY_TABLES")]
    pub tables: Option<PathBuf>,
}

impl FactoryOpts {
    /// Build a factory from these options.
    pub fn build(&self) -> anyhow::Result<DataFactory> {
        let seed = self.seed.unwrap_or(DEFAULT_SEED);
        let mut factory = DataFactory::with_seed(seed);

        if let Some(path) = &self.tables {
            let tables = ValueTables::from_file(path)
                .with_context(|| format!("Failed to load tables file: {path:?}"))?;
            tracing::info!("Loaded value tables from {}", path.display());
            factory = factory.with_tables(tables);
        }

        tracing::debug!(seed, "Built data factory");
        Ok(factory)
    }
}
