//! Record and text generation command handlers.

use crate::FactoryOpts;
use chrono::NaiveDate;
use clap::ValueEnum;
use datafactory_generator::{DataFactory, GeneratorError, RandomSource};
use serde::Serialize;
use std::io::Write;

/// Percent chance that a record carries a name prefix.
const PREFIX_CHANCE: i32 = 10;
/// Percent chance that a record carries a second address line.
const ADDRESS_LINE2_CHANCE: i32 = 30;

/// Output format for generated records.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Jsonl,
    /// A YAML sequence
    Yaml,
}

/// A synthetic person record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub index: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    pub company: String,
    pub birth_date: NaiveDate,
    pub phone: String,
    pub bio: String,
}

/// Generate one record.
pub fn generate_record<R: RandomSource>(
    factory: &mut DataFactory<R>,
    index: u64,
) -> Result<Record, GeneratorError> {
    Ok(Record {
        index,
        prefix: factory.prefix(PREFIX_CHANCE)?,
        name: factory.name()?,
        email: factory.email_address()?,
        address: factory.address()?,
        address_line2: factory.address_line2_with_probability(ADDRESS_LINE2_CHANCE)?,
        city: factory.city()?,
        company: factory.business_name()?,
        birth_date: factory.birth_date()?,
        phone: factory.number_text(10)?,
        bio: factory.text_between(40, 120)?,
    })
}

/// Run the records command.
pub fn run_records<W: Write>(
    opts: &FactoryOpts,
    count: u64,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    tracing::info!("Generating {} records", count);
    tracing::info!("Format: {:?}", format);

    let mut factory = opts.build()?;
    let records = (0..count)
        .map(|index| generate_record(&mut factory, index))
        .collect::<Result<Vec<_>, _>>()?;

    match format {
        OutputFormat::Jsonl => {
            for record in &records {
                writeln!(out, "{}", serde_json::to_string(record)?)?;
            }
        }
        OutputFormat::Yaml => {
            write!(out, "{}", serde_yaml::to_string(&records)?)?;
        }
    }

    tracing::info!("Generated {} records", records.len());
    Ok(())
}

/// Run the text command.
pub fn run_text<W: Write>(
    opts: &FactoryOpts,
    min: usize,
    max: usize,
    count: u64,
    out: &mut W,
) -> anyhow::Result<()> {
    tracing::info!("Generating {} texts of {}-{} characters", count, min, max);

    let mut factory = opts.build()?;
    for _ in 0..count {
        writeln!(out, "{}", factory.text_between(min, max)?)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_record_fields() {
        let mut factory = DataFactory::with_seed(42);
        let record = generate_record(&mut factory, 7).unwrap();

        assert_eq!(record.index, 7);
        assert!(record.name.contains(' '));
        assert!(record.email.contains('@'));
        assert_eq!(record.phone.len(), 10);
        assert!((40..=120).contains(&record.bio.chars().count()));
    }

    #[test]
    fn test_run_records_jsonl() {
        let opts = FactoryOpts {
            seed: Some(42),
            tables: None,
        };
        let mut out = Vec::new();
        run_records(&opts, 3, OutputFormat::Jsonl, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);

        for (i, line) in lines.iter().enumerate() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["index"], i as u64);
            assert!(value["birth_date"].is_string());
        }
    }

    #[test]
    fn test_run_records_yaml() {
        let opts = FactoryOpts {
            seed: Some(42),
            tables: None,
        };
        let mut out = Vec::new();
        run_records(&opts, 2, OutputFormat::Yaml, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let parsed: Vec<serde_yaml::Value> = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_run_text_rejects_inverted_range() {
        let mut out = Vec::new();
        let result = run_text(&FactoryOpts::default(), 10, 2, 1, &mut out);

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeneratorError>(),
            Some(GeneratorError::InvalidRange { min: 10, max: 2 })
        ));
        assert!(out.is_empty());
    }
}
