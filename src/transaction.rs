//! Canonical transaction model consumed by the entry builders.

use crate::amount::Amount;
use std::fmt;
use std::str::FromStr;

/// Direction of funds for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionType {
    Credit,
    #[default]
    Debit,
}

impl TransactionType {
    /// Two-digit entry transaction code (checking account).
    pub fn transaction_code(&self) -> &'static str {
        match self {
            TransactionType::Credit => "22",
            TransactionType::Debit => "27",
        }
    }

    /// Batch service class code for a batch of this type.
    pub fn service_class_code(&self) -> &'static str {
        match self {
            TransactionType::Credit => "220",
            TransactionType::Debit => "225",
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "credit" => Ok(TransactionType::Credit),
            "debit" => Ok(TransactionType::Debit),
            other => Err(format!("unknown transaction type '{}'", other)),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Credit => write!(f, "Credit"),
            TransactionType::Debit => write!(f, "Debit"),
        }
    }
}

/// Standard entry class of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StandardEntryClass {
    /// Prearranged Payment and Deposit Entries
    #[default]
    Ppd,
    /// Corporate Credit or Debit Entries
    Ccd,
}

impl StandardEntryClass {
    pub fn code(&self) -> &'static str {
        match self {
            StandardEntryClass::Ppd => "PPD",
            StandardEntryClass::Ccd => "CCD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StandardEntryClass::Ppd => "Prearranged Payment and Deposit Entries",
            StandardEntryClass::Ccd => "Corporate Credit or Debit Entries",
        }
    }

    /// Resolves a code or long label; anything unrecognised is PPD.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("CCD")
            || label.eq_ignore_ascii_case(StandardEntryClass::Ccd.label())
        {
            StandardEntryClass::Ccd
        } else {
            StandardEntryClass::Ppd
        }
    }
}

/// Entry description used when a source does not carry one.
pub const DEFAULT_ENTRY_DESCRIPTION: &str = "VENDOR";

/// A single payment instruction in canonical form.
///
/// Built once by the normalizer (or directly from form input) and consumed by
/// the entry detail builder.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CanonicalTransaction {
    pub receiver_name: String,
    pub receiver_account_number: String,
    pub receiver_routing_number: String,
    pub transaction_type: TransactionType,
    /// Positive dollar amount
    pub amount: Amount,
    pub transaction_identifier: String,
    pub reference: String,
    pub standard_entry_class: StandardEntryClass,
    pub entry_description: String,
}
