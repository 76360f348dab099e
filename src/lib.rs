//! # ACH Generator
//!
//! Builds NACHA-format ACH payment files: fixed-width, 94-character records
//! joined with CRLF and padded to a multiple of ten lines.
//!
//! ## Design Principles
//!
//! - **Layout-driven records**: every record type is a table of
//!   [`FieldSpec`]s rendered by one formatter
//! - **Exact money**: amounts are `rust_decimal` values converted to cents
//! - **All or nothing**: any field error aborts the whole file
//! - **Explicit configuration**: the company profile is passed per call
//!
//! ## Example
//!
//! ```no_run
//! use ach_generator::{generate_from_csv, CompanyProfile};
//! use std::io::Cursor;
//!
//! let csv = "35.21,240909240000123456789,Jane Doe,REF1,INV-1\n";
//! let profile = CompanyProfile::default();
//! let file = generate_from_csv(&profile, Cursor::new(csv), chrono::Local::now().naive_local()).unwrap();
//! print!("{}", file);
//! ```

pub mod amount;
pub mod checksum;
pub mod context;
pub mod csv_input;
pub mod error;
pub mod field;
pub mod generator;
pub mod normalizer;
pub mod profile;
pub mod record;
pub mod records;
pub mod transaction;

pub use amount::{amount_to_cents, Amount};
pub use checksum::{check_digit, entry_hash, AggregateTotals, BucketStrategy};
pub use context::{BatchContext, FileContext};
pub use csv_input::{read_rows, write_template, Dialect, ValidatedRows};
pub use error::{AchError, Result};
pub use field::{FieldSpec, Padding};
pub use generator::{AchFileGenerator, LINE_TERMINATOR};
pub use normalizer::normalize;
pub use profile::CompanyProfile;
pub use record::{FieldValues, RecordLayout, RECORD_SIZE};
pub use transaction::{CanonicalTransaction, StandardEntryClass, TransactionType};

use chrono::NaiveDateTime;
use log::info;
use std::io::Read;

/// Validates a CSV export in the profile's dialect and generates the file.
///
/// The file reference code is taken from the first row's reference.
pub fn generate_from_csv<R: Read>(
    profile: &CompanyProfile,
    reader: R,
    now: NaiveDateTime,
) -> Result<String> {
    let rows = read_rows(profile.accounting_system, reader)?;
    if rows.is_empty() {
        return Err(AchError::NoRecords);
    }

    let transactions = normalize(&rows)?;
    let reference = transactions
        .first()
        .map(|tx| tx.reference.as_str())
        .unwrap_or_default();

    let generator =
        AchFileGenerator::new(profile.file_context(reference), profile.batch_context());
    let file = generator.generate_at(&transactions, now)?;
    info!(
        "Generated ACH file with {} entries for {}",
        transactions.len(),
        profile.company_name
    );
    Ok(file)
}
