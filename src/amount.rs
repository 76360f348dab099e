//! Monetary amounts and their conversion to cents.
//!
//! Uses `rust_decimal` internally so that values such as `35.21` convert to
//! cents without floating-point error.

use crate::error::{AchError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// A transaction amount in dollars.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use ach_generator::Amount;
///
/// let amount = Amount::from_str("35.21").unwrap();
/// assert_eq!(amount.cents().unwrap(), 3521);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

/// Largest magnitude the 10-digit Entry Detail amount field can hold.
pub const MAX_ENTRY_CENTS: i64 = 9_999_999_999;

impl Amount {
    /// Rounds to 2 places (half away from zero), scales by 100 and truncates.
    ///
    /// The sign is preserved. Fails with [`AchError::InvalidAmount`] when the
    /// magnitude exceeds [`MAX_ENTRY_CENTS`].
    pub fn cents(&self) -> Result<i64> {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.trunc().to_i64())
            .filter(|cents| cents.unsigned_abs() <= MAX_ENTRY_CENTS as u64)
            .ok_or_else(|| AchError::InvalidAmount(self.0.to_string()))
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }
}

impl FromStr for Amount {
    type Err = AchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(Amount)
            .map_err(|_| AchError::InvalidAmount(s.to_string()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Parses a decimal string and converts it to whole cents.
pub fn amount_to_cents(value: &str) -> Result<i64> {
    Amount::from_str(value)?.cents()
}
