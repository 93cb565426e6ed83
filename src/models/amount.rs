//! Amount type for expense values
//!
//! Wraps an `f64` so the ledger keeps the exact value the user typed. Two
//! renderings exist: a human one rounded to cents with a currency symbol, and
//! a storage one that is unrounded and parses back to the same bits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg};
use std::str::FromStr;

use crate::error::ExpenseError;

/// A monetary amount as a decimal number
///
/// Always finite. Negative and zero amounts are valid expenses.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Wrap a raw value
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Amount;
    /// let amount = Amount::new(12.5);
    /// assert_eq!(amount.to_string(), "$12.50");
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Parse an amount as typed by a user or read from the expenses file
    ///
    /// Surrounding whitespace is ignored. Accepts a sign, a fraction and an
    /// exponent ("12.50", "-3", "1e2"). Anything else, including "NaN" and
    /// "inf", is rejected.
    pub fn parse(s: &str) -> Result<Self, ExpenseError> {
        let trimmed = s.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self(value)),
            _ => Err(ExpenseError::invalid_amount(s)),
        }
    }

    /// Render for the expenses file: the natural decimal form, never rounded
    ///
    /// Whole numbers keep a trailing `.0` so the field always reads as decimal.
    pub fn to_storage_string(&self) -> String {
        let text = self.0.to_string();
        if text.contains('.') {
            text
        } else {
            format!("{}.0", text)
        }
    }

    /// Format rounded to cents with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{:.2}", symbol, self.0.abs())
        } else {
            format!("{}{:.2}", symbol, self.0)
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl FromStr for Amount {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}
