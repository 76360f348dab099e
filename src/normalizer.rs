//! Maps validated export rows onto [`CanonicalTransaction`].

use crate::amount::Amount;
use crate::csv_input::{GenericRow, SourceRows, ValidatedRows, XeroRow};
use crate::error::Result;
use crate::transaction::{
    CanonicalTransaction, StandardEntryClass, TransactionType, DEFAULT_ENTRY_DESCRIPTION,
};
use std::str::FromStr;

/// Digits in a full routing number.
const ROUTING_NUMBER_LEN: usize = 9;

/// Splits combined bank details into routing and account numbers.
///
/// Separators are dropped; the first nine digits are the routing number and
/// the rest the account number. With fewer than nine digits the routing
/// number is left empty so that entry generation rejects it.
pub fn split_bank_details(details: &str) -> (String, String) {
    let digits: String = details.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < ROUTING_NUMBER_LEN {
        return (String::new(), digits);
    }
    let (routing, account) = digits.split_at(ROUTING_NUMBER_LEN);
    (routing.to_string(), account.to_string())
}

/// Normalizes one Xero row. Xero exports carry no type or class, so the
/// defaults (Debit, PPD, "VENDOR") apply.
pub fn normalize_xero(row: &XeroRow) -> Result<CanonicalTransaction> {
    let (routing, account) = split_bank_details(&row.bank_details);
    Ok(CanonicalTransaction {
        receiver_name: row.receiver_name.clone(),
        receiver_account_number: account,
        receiver_routing_number: routing,
        transaction_type: TransactionType::default(),
        amount: Amount::from_str(&row.amount)?,
        transaction_identifier: row.transaction_identifier.clone(),
        reference: row.reference.clone(),
        standard_entry_class: StandardEntryClass::default(),
        entry_description: DEFAULT_ENTRY_DESCRIPTION.to_string(),
    })
}

/// Normalizes one generic row; optional columns override the defaults.
pub fn normalize_generic(row: &GenericRow) -> Result<CanonicalTransaction> {
    let non_blank = |v: &Option<String>| {
        v.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let transaction_type = non_blank(&row.transaction_type)
        .and_then(|t| TransactionType::from_str(&t).ok())
        .unwrap_or_default();
    let standard_entry_class = non_blank(&row.standard_entry_class)
        .map(|s| StandardEntryClass::from_label(&s))
        .unwrap_or_default();
    let entry_description = non_blank(&row.entry_description)
        .unwrap_or_else(|| DEFAULT_ENTRY_DESCRIPTION.to_string());

    Ok(CanonicalTransaction {
        receiver_name: row.receiver_name.clone(),
        receiver_account_number: row.receiver_account_number.clone(),
        receiver_routing_number: row.receiver_routing_number.clone(),
        transaction_type,
        amount: Amount::from_str(&row.amount)?,
        transaction_identifier: row.transaction_identifier.clone(),
        reference: row.reference.clone(),
        standard_entry_class,
        entry_description,
    })
}

/// Converts validated rows into canonical transactions, preserving order.
pub fn normalize(rows: &ValidatedRows) -> Result<Vec<CanonicalTransaction>> {
    match &rows.rows {
        SourceRows::Generic(rows) => rows.iter().map(normalize_generic).collect(),
        SourceRows::Xero(rows) => rows.iter().map(normalize_xero).collect(),
    }
}
