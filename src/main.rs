//! ACH Generator CLI
//!
//! Reads a transaction CSV export and writes a NACHA ACH file next to it,
//! named after the generation time.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- payments.csv [company.json]
//! cargo run -- --template <default|xero> template.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use ach_generator::{generate_from_csv, write_template, AchError, CompanyProfile, Dialect, Result};
use chrono::Local;
use log::info;
use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        None => Err(AchError::MissingArgument),
        Some("--template") => {
            let (dialect, output) = match (args.get(2), args.get(3)) {
                (Some(d), Some(o)) => (d, o),
                _ => return Err(AchError::MissingArgument),
            };
            let dialect = Dialect::from_str(dialect).map_err(AchError::InvalidArgument)?;
            write_template(dialect, File::create(output)?)?;
            println!("{}", output);
            Ok(())
        }
        Some(input) => generate(Path::new(input), args.get(2).map(Path::new)),
    }
}

fn generate(input: &Path, profile_path: Option<&Path>) -> Result<()> {
    let is_csv = input
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        return Err(AchError::UnsupportedExtension(input.display().to_string()));
    }

    let profile = match profile_path {
        Some(path) => CompanyProfile::load(path)?,
        None => CompanyProfile::default(),
    };

    let now = Local::now().naive_local();
    let reader = BufReader::new(File::open(input)?);
    let content = generate_from_csv(&profile, reader, now)?;

    let output = output_path(input, &now.format("%Y%m%d_%H%M%S").to_string());
    fs::write(&output, content)?;
    info!("ACH file written to {}", output.display());
    println!("{}", output.display());

    Ok(())
}

/// Timestamped file in the input's directory.
fn output_path(input: &Path, stamp: &str) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(format!("{}.txt", stamp))
}
