use clap::Parser;
use datafactory::{FactoryOpts, DEFAULT_SEED};
use std::io::Write;

#[test]
fn test_factory_opts_parsing() {
    let opts =
        FactoryOpts::try_parse_from(["datafactory", "--seed", "42", "--tables", "t.yaml"]).unwrap();

    assert_eq!(opts.seed, Some(42));
    assert_eq!(opts.tables, Some("t.yaml".into()));
}

#[test]
fn test_factory_opts_rejects_non_numeric_seed() {
    let result = FactoryOpts::try_parse_from(["datafactory", "--seed", "abc"]);
    assert!(result.is_err());
}

#[test]
fn test_default_seed_matches_create() {
    let mut built = FactoryOpts::default().build().unwrap();
    let mut seeded = datafactory::DataFactory::with_seed(DEFAULT_SEED);

    assert_eq!(built.name().unwrap(), seeded.name().unwrap());
}

#[test]
fn test_build_with_tables_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "names:\n  first_names: [Ada]\n  last_names: [Lovelace]\ncontent:\n  business_types: [Engines]"
    )
    .unwrap();

    let opts = FactoryOpts {
        seed: Some(1),
        tables: Some(file.path().to_path_buf()),
    };
    let mut factory = opts.build().unwrap();

    assert_eq!(factory.name().unwrap(), "Ada Lovelace");
    assert!(factory.business_name().unwrap().ends_with(" Engines"));
}

#[test]
fn test_build_with_missing_tables_file() {
    let opts = FactoryOpts {
        seed: None,
        tables: Some("/nonexistent/tables.yaml".into()),
    };

    let err = opts.build().err().unwrap();
    assert!(format!("{err:#}").contains("Failed to load tables file"));
}
