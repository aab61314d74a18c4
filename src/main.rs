//! BESS sizing calculator entry point: input loading, validation, and output.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bess_sizing::SizingError;
use bess_sizing::cli::{CliArgs, OutputFormat};
use bess_sizing::io::export::{write_csv, write_json};
use bess_sizing::sizing::size_system;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = CliArgs::parse();
    init_logging(cli.verbose);

    // Load inputs: --inputs takes priority, then --preset, then baseline
    let mut config = match cli.load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("error: {}", SizingError::from(e));
            process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    let errors = config.validate();
    if !errors.is_empty() {
        for e in errors {
            eprintln!("error: {}", SizingError::from(e));
        }
        process::exit(1);
    }

    let inputs = config.to_inputs();
    info!(
        load_mw = inputs.load_mw,
        discharge_h = inputs.discharge_h,
        "sizing storage system"
    );

    let report = match size_system(&inputs) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    if report.best_fit.is_none() {
        warn!("required capacity is zero, no configuration suggested");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = match cli.format {
        OutputFormat::Text => writeln!(out, "{report}"),
        OutputFormat::Csv => write_csv(&report, &mut out),
        OutputFormat::Json => write_json(&report, &mut out),
    };
    if let Err(e) = written {
        eprintln!("error: failed to write output: {e}");
        process::exit(1);
    }
}
