//! Error types for ACH file generation.

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, AchError>;

/// Errors that can occur while building or writing an ACH file.
///
/// Every variant aborts the whole generation; no partial file is returned.
#[derive(Error, Debug)]
pub enum AchError {
    /// A mandatory, non-constant field had no value
    #[error("Mandatory field '{0}' is missing")]
    MissingMandatoryField(String),

    /// Routing number is not 8 or 9 digits
    #[error("Invalid routing number '{0}': must be 8 or 9 digits")]
    InvalidRoutingNumber(String),

    /// Amount could not be parsed, or does not fit the entry amount field
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    /// Field value contains characters outside ASCII
    #[error("Field '{field}' contains non-ASCII characters: '{value}'")]
    NonAsciiValue { field: String, value: String },

    /// Batch debit or credit total does not fit the 12-digit control field
    #[error("Batch total of {0} cents exceeds the control field")]
    TotalOutOfRange(u64),

    /// CSV input failed validation; one message per issue
    #[error("CSV validation failed:\n{}", .0.join("\n"))]
    Validation(Vec<String>),

    /// Validated input contained no transaction rows
    #[error("The CSV file contains no records")]
    NoRecords,

    /// Failed to open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Company profile could not be parsed
    #[error("Company profile error: {0}")]
    Profile(#[from] serde_json::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: ach-generator <input.csv> [profile.json]")]
    MissingArgument,

    /// Unrecognised command-line value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input path does not have a .csv extension
    #[error("Unsupported input file '{0}': expected a .csv file")]
    UnsupportedExtension(String),
}
