//! Routing-number check digits, entry hash and debit/credit totals.

use crate::error::{AchError, Result};
use crate::transaction::{CanonicalTransaction, TransactionType};

/// Largest total the 12-digit control total fields can hold.
pub const MAX_TOTAL_CENTS: u64 = 999_999_999_999;

const CHECK_DIGIT_WEIGHTS: [u32; 9] = [3, 7, 1, 3, 7, 1, 3, 7, 1];

fn digits(routing: &str) -> Result<Vec<u32>> {
    routing
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| AchError::InvalidRoutingNumber(routing.to_string()))
}

/// Returns the check digit for a routing number.
///
/// An 8-digit prefix gets its check digit computed with the 3-7-1 weights;
/// a full 9-digit routing number returns its last digit unchanged.
pub fn check_digit(routing: &str) -> Result<u32> {
    let mut digits = digits(routing.trim())?;
    match digits.len() {
        9 => Ok(digits[8]),
        8 => {
            digits.push(0);
            let sum: u32 = digits
                .iter()
                .zip(CHECK_DIGIT_WEIGHTS.iter())
                .map(|(d, w)| d * w)
                .sum();
            Ok((10 - sum % 10) % 10)
        }
        _ => Err(AchError::InvalidRoutingNumber(routing.to_string())),
    }
}

/// First 8 digits of a routing number, identifying the receiving DFI.
pub fn dfi_prefix(routing: &str) -> &str {
    let routing = routing.trim();
    match routing.char_indices().nth(8) {
        Some((idx, _)) => &routing[..idx],
        None => routing,
    }
}

/// Sums the 8-digit DFI prefixes of the given routing numbers.
///
/// The result is zero-padded to 10 digits but never reduced modulo 10^10;
/// a larger sum renders longer and is cut by the record field.
pub fn entry_hash<'a, I>(routing_numbers: I) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut total: u128 = 0;
    for routing in routing_numbers {
        let prefix = dfi_prefix(routing);
        let value: u64 = prefix
            .parse()
            .map_err(|_| AchError::InvalidRoutingNumber(routing.to_string()))?;
        total += u128::from(value);
    }
    Ok(format!("{:010}", total))
}

/// How entries are classified as debits or credits when totalling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BucketStrategy {
    /// Use the explicit transaction type of each entry.
    #[default]
    TransactionType,
    /// Negative amounts are debits, positive amounts credits.
    AmountSign,
}

/// Totals derived from one batch of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateTotals {
    pub entry_count: usize,
    pub entry_hash: String,
    pub total_debit_cents: u64,
    pub total_credit_cents: u64,
}

impl AggregateTotals {
    /// Computes counts, hash and cent totals over all transactions.
    pub fn compute(transactions: &[CanonicalTransaction], strategy: BucketStrategy) -> Result<Self> {
        let entry_hash = entry_hash(
            transactions
                .iter()
                .map(|tx| tx.receiver_routing_number.as_str()),
        )?;

        let mut total_debit_cents: u64 = 0;
        let mut total_credit_cents: u64 = 0;
        for tx in transactions {
            let cents = tx.amount.cents()?;
            let is_debit = match strategy {
                BucketStrategy::TransactionType => tx.transaction_type == TransactionType::Debit,
                BucketStrategy::AmountSign => cents < 0,
            };
            let total = if is_debit {
                &mut total_debit_cents
            } else {
                &mut total_credit_cents
            };
            *total = add_to_total(*total, cents.unsigned_abs())?;
        }

        Ok(AggregateTotals {
            entry_count: transactions.len(),
            entry_hash,
            total_debit_cents,
            total_credit_cents,
        })
    }
}

fn add_to_total(total: u64, cents: u64) -> Result<u64> {
    let sum = total.saturating_add(cents);
    if sum > MAX_TOTAL_CENTS {
        return Err(AchError::TotalOutOfRange(sum));
    }
    Ok(sum)
}
