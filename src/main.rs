//! Command-line interface for datafactory
//!
//! # Usage Examples
//!
//! ## Records
//! ```bash
//! # Person records as JSON lines
//! datafactory records --count 100 --seed 42
//!
//! # Records as YAML, drawing from custom value tables
//! datafactory records --count 5 --tables tables.yaml --format yaml
//! ```
//!
//! ## Text
//! ```bash
//! # Ten lines of pseudo-English between 20 and 80 characters
//! datafactory text --min 20 --max 80 --count 10
//! ```
//!
//! Log output goes to stderr and is controlled by `RUST_LOG`.

use clap::{Parser, Subcommand};
use datafactory::generate::{run_records, run_text, OutputFormat};
use datafactory::FactoryOpts;

#[derive(Parser)]
#[command(name = "datafactory")]
#[command(about = "Generate reproducible test data from a seeded random stream")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate synthetic person records
    Records {
        /// Number of records to generate
        #[arg(long, default_value = "10")]
        count: u64,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Jsonl)]
        format: OutputFormat,

        /// Generator options
        #[command(flatten)]
        factory: FactoryOpts,
    },

    /// Generate pseudo-English text, one piece per line
    Text {
        /// Minimum length in characters
        #[arg(long, default_value = "0")]
        min: usize,

        /// Maximum length in characters
        #[arg(long)]
        max: usize,

        /// Number of pieces to generate
        #[arg(long, default_value = "1")]
        count: u64,

        /// Generator options
        #[command(flatten)]
        factory: FactoryOpts,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for generated data
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Records {
            count,
            format,
            factory,
        } => run_records(&factory, count, format, &mut out),
        Commands::Text {
            min,
            max,
            count,
            factory,
        } => run_text(&factory, min, max, count, &mut out),
    }
}
