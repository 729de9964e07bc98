//! Amount type for representing currency quantities
//!
//! Expense shares are computed with exact division (an amount of 100 split
//! three ways is 33.333...), so amounts are kept as `f64` in currency units
//! rather than integer cents. Rounding to cents happens only when a value
//! leaves the ledger engine: in suggested settlements and on display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Balances within this distance of zero are considered settled
pub const SETTLED_TOLERANCE: f64 = 0.01;

/// A signed currency amount in whole units (e.g. 12.5 = twelve and a half)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a unit value
    ///
    /// # Examples
    /// ```
    /// use splitly::models::Amount;
    /// let amount = Amount::new(10.5);
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is a finite number
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Check if the amount is within the settled tolerance of zero
    pub fn is_settled(&self) -> bool {
        self.0.abs() <= SETTLED_TOLERANCE
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// The smaller of two amounts
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Round half away from zero to two decimal places
    pub fn round_cents(&self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }

    /// Divide into `parts` equal shares without rounding
    ///
    /// Returns `None` when `parts` is zero.
    pub fn share(&self, parts: usize) -> Option<Self> {
        if parts == 0 {
            None
        } else {
            Some(Self(self.0 / parts as f64))
        }
    }

    /// Parse an amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "1,250.00"
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let rest = rest
            .trim_start_matches(|c: char| !c.is_ascii_digit() && c != '.')
            .replace(',', "");

        if rest.is_empty() {
            return Err(AmountParseError::InvalidFormat(s.to_string()));
        }

        let value: f64 = rest
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::InvalidFormat(s.to_string()));
        }

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.round_cents().0;
        if rounded < 0.0 {
            format!("-{}{:.2}", symbol, rounded.abs())
        } else {
            format!("{}{:.2}", symbol, rounded.abs())
        }
    }

    /// Format as a signed balance: "+ 12.50", "- 12.50" or " 0.00" when settled
    pub fn format_balance(&self, symbol: &str) -> String {
        if self.0 > SETTLED_TOLERANCE {
            format!("+ {}{:.2}", symbol, self.0)
        } else if self.0 < -SETTLED_TOLERANCE {
            format!("- {}{:.2}", symbol, self.0.abs())
        } else {
            format!(" {}0.00", symbol)
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol(""))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
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

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + *a)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
