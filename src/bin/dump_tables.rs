//! Print a JSON overview of the ATRAC9 tables
//!
//! Usage: dump_tables [--pretty]
//!
//! Builds the shared table bundle, logs construction progress according to
//! `RUST_LOG` and writes the summary to stdout.

use std::process;

use atrac9_tables::{tables, SampleRateProfile};
use serde::Serialize;

#[derive(Serialize)]
struct Dump {
    generated_at: chrono::DateTime<chrono::Utc>,
    crate_version: &'static str,
    summary: atrac9_tables::TableSummary,
    sample_rates: Vec<SampleRateProfile>,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let pretty = match std::env::args().nth(1).as_deref() {
        None => false,
        Some("--pretty") => true,
        Some(other) => {
            eprintln!("Unknown argument: {}", other);
            eprintln!("Usage: dump_tables [--pretty]");
            process::exit(1);
        }
    };

    let tables = tables();
    let sample_rates = match (0..16)
        .map(|index| tables.sample_rate_profile(index))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(profiles) => profiles,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    let dump = Dump {
        generated_at: chrono::Utc::now(),
        crate_version: env!("CARGO_PKG_VERSION"),
        summary: tables.summary(),
        sample_rates,
    };

    let output = if pretty {
        serde_json::to_string_pretty(&dump)
    } else {
        serde_json::to_string(&dump)
    };
    match output {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}
