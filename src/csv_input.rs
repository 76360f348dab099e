//! CSV intake for the two supported export dialects.
//!
//! Rows are validated before anything else sees them: [`read_rows`] either
//! returns every issue found in the file or a [`ValidatedRows`] value, which
//! is the only input the normalizer accepts.

use crate::amount::Amount;
use crate::error::{AchError, Result};
use crate::transaction::TransactionType;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

/// Column order of a Xero export (no header row).
pub const XERO_COLUMNS: [&str; 5] = [
    "Amount",
    "Receiver Bank Details",
    "Receiver Name",
    "Reference",
    "Transaction Identifier",
];

/// Columns a Xero row must fill.
pub const XERO_MANDATORY: [&str; 3] = ["Amount", "Receiver Bank Details", "Receiver Name"];

/// Header row of the generic template.
pub const GENERIC_COLUMNS: [&str; 6] = [
    "Receiver Name",
    "Receiver Account Number",
    "Receiver Routing Number",
    "Amount",
    "Transaction Identifier",
    "Reference",
];

/// Headers and values a generic file must carry.
pub const GENERIC_MANDATORY: [&str; 4] = [
    "Receiver Name",
    "Receiver Account Number",
    "Receiver Routing Number",
    "Amount",
];

/// Accounting-system export format of a transaction CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Dialect {
    /// Header row with named columns.
    #[serde(rename = "Default", alias = "default", alias = "Generic", alias = "generic")]
    Generic,
    /// Fixed column order, no header row.
    #[default]
    #[serde(rename = "Xero", alias = "xero", alias = "XERO")]
    Xero,
}

impl Dialect {
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Dialect::Generic => &GENERIC_COLUMNS,
            Dialect::Xero => &XERO_COLUMNS,
        }
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" | "generic" => Ok(Dialect::Generic),
            "xero" => Ok(Dialect::Xero),
            other => Err(format!("unknown accounting system '{}'", other)),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Generic => write!(f, "Default"),
            Dialect::Xero => write!(f, "Xero"),
        }
    }
}

/// One row of a generic (header-mapped) export.
///
/// Columns beyond the six of the template are optional and let a file set
/// the transaction type, entry class and description per row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenericRow {
    #[serde(rename = "Receiver Name", default)]
    pub receiver_name: String,
    #[serde(rename = "Receiver Account Number", default)]
    pub receiver_account_number: String,
    #[serde(rename = "Receiver Routing Number", default)]
    pub receiver_routing_number: String,
    #[serde(rename = "Amount", default)]
    pub amount: String,
    #[serde(rename = "Transaction Identifier", default)]
    pub transaction_identifier: String,
    #[serde(rename = "Reference", default)]
    pub reference: String,
    #[serde(rename = "Transaction Type", default)]
    pub transaction_type: Option<String>,
    #[serde(rename = "Standard Entry Class Code", default)]
    pub standard_entry_class: Option<String>,
    #[serde(rename = "Entry Description", default)]
    pub entry_description: Option<String>,
}

impl GenericRow {
    fn value(&self, column: &str) -> &str {
        match column {
            "Receiver Name" => &self.receiver_name,
            "Receiver Account Number" => &self.receiver_account_number,
            "Receiver Routing Number" => &self.receiver_routing_number,
            "Amount" => &self.amount,
            "Transaction Identifier" => &self.transaction_identifier,
            "Reference" => &self.reference,
            _ => "",
        }
    }
}

/// One row of a Xero export.
#[derive(Debug, Clone, Default)]
pub struct XeroRow {
    pub amount: String,
    /// Routing number immediately followed by the account number
    pub bank_details: String,
    pub receiver_name: String,
    pub reference: String,
    pub transaction_identifier: String,
}

impl XeroRow {
    fn from_record(record: &StringRecord) -> Self {
        let field = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();
        XeroRow {
            amount: field(0),
            bank_details: field(1),
            receiver_name: field(2),
            reference: field(3),
            transaction_identifier: field(4),
        }
    }

    fn value(&self, column: &str) -> &str {
        match column {
            "Amount" => &self.amount,
            "Receiver Bank Details" => &self.bank_details,
            "Receiver Name" => &self.receiver_name,
            "Reference" => &self.reference,
            "Transaction Identifier" => &self.transaction_identifier,
            _ => "",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum SourceRows {
    Generic(Vec<GenericRow>),
    Xero(Vec<XeroRow>),
}

/// Rows that passed validation, in file order.
#[derive(Debug, Clone)]
pub struct ValidatedRows {
    pub(crate) rows: SourceRows,
}

impl ValidatedRows {
    pub fn dialect(&self) -> Dialect {
        match self.rows {
            SourceRows::Generic(_) => Dialect::Generic,
            SourceRows::Xero(_) => Dialect::Xero,
        }
    }

    pub fn len(&self) -> usize {
        match &self.rows {
            SourceRows::Generic(rows) => rows.len(),
            SourceRows::Xero(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Appends an issue when the amount is not a positive number that fits an
/// Entry Detail record.
fn check_amount(value: &str, row: usize, issues: &mut Vec<String>) {
    match Amount::from_str(value) {
        Ok(amount) if !amount.is_positive() => {
            issues.push(format!("Row {}: 'Amount' must be greater than 0.", row))
        }
        Ok(amount) if amount.cents().is_err() => issues.push(format!(
            "Row {}: 'Amount' must not exceed 99999999.99.",
            row
        )),
        Ok(_) => {}
        Err(_) => issues.push(format!(
            "Row {}: 'Amount' must be a valid numeric value.",
            row
        )),
    }
}

fn check_mandatory<'a>(
    columns: &[&str],
    row: usize,
    value: impl Fn(&str) -> &'a str,
    issues: &mut Vec<String>,
) {
    for &column in columns {
        let v = value(column).trim();
        if v.is_empty() {
            issues.push(format!("Row {}: Missing value for '{}'", row, column));
        } else if column == "Amount" {
            check_amount(v, row, issues);
        }
    }
}

fn validate_generic<R: Read>(reader: R) -> Result<(Vec<GenericRow>, Vec<String>)> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut issues = Vec::new();
    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        issues.push("File is empty or missing headers.".to_string());
        return Ok((Vec::new(), issues));
    }

    let missing: Vec<&str> = GENERIC_MANDATORY
        .iter()
        .copied()
        .filter(|h| !headers.iter().any(|found| found == *h))
        .collect();
    if !missing.is_empty() {
        issues.push(format!("Missing mandatory headers: {}", missing.join(", ")));
    }

    let mut rows = Vec::new();
    for (row_idx, result) in csv_reader.deserialize::<GenericRow>().enumerate() {
        let row_num = row_idx + 2; // 1-indexed, accounting for header row

        let row = match result {
            Ok(row) => row,
            Err(e) => {
                issues.push(format!("Row {}: {}", row_num, e));
                continue;
            }
        };

        check_mandatory(&GENERIC_MANDATORY, row_num, |c| row.value(c), &mut issues);
        if let Some(kind) = row.transaction_type.as_deref() {
            if !kind.trim().is_empty() && TransactionType::from_str(kind).is_err() {
                issues.push(format!(
                    "Row {}: 'Transaction Type' must be Credit or Debit.",
                    row_num
                ));
            }
        }
        rows.push(row);
    }

    Ok((rows, issues))
}

fn validate_xero<R: Read>(reader: R) -> Result<(Vec<XeroRow>, Vec<String>)> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut issues = Vec::new();
    let mut rows = Vec::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        let row_num = row_idx + 1; // no header row
        let row = XeroRow::from_record(&result?);
        check_mandatory(&XERO_MANDATORY, row_num, |c| row.value(c), &mut issues);
        rows.push(row);
    }

    Ok((rows, issues))
}

/// Reads and validates a CSV export.
///
/// Returns [`AchError::Validation`] with every issue found when any row or
/// header is unacceptable.
pub fn read_rows<R: Read>(dialect: Dialect, reader: R) -> Result<ValidatedRows> {
    let (rows, issues) = match dialect {
        Dialect::Generic => {
            let (rows, issues) = validate_generic(reader)?;
            (SourceRows::Generic(rows), issues)
        }
        Dialect::Xero => {
            let (rows, issues) = validate_xero(reader)?;
            (SourceRows::Xero(rows), issues)
        }
    };

    if !issues.is_empty() {
        for issue in &issues {
            warn!("{}", issue);
        }
        return Err(AchError::Validation(issues));
    }

    let validated = ValidatedRows { rows };
    debug!("Validated {} {} rows", validated.len(), dialect);
    Ok(validated)
}

/// Writes an empty template: the dialect's columns as one header line.
pub fn write_template<W: Write>(dialect: Dialect, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(dialect.columns())?;
    csv_writer.flush()?;
    Ok(())
}
