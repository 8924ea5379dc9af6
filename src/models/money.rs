//! Money amounts held in integer cents
//!
//! Whole-cent storage sidesteps floating point rounding. Parsing,
//! formatting, and arithmetic for amounts all live here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount as a signed number of cents
///
/// Using i64 cents keeps totals exact no matter how many amounts are
/// summed, and supports amounts up to approximately 92 quadrillion units
/// in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Build an amount directly from cents
    ///
    /// # Examples
    /// ```
    /// use outlay::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    ///
    /// # Examples
    /// ```
    /// use outlay::models::Money;
    /// let amount = Money::from_units(10, 50); // 10.50
    /// ```
    pub const fn from_units(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// The zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Cents past the whole unit (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check whether the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check whether the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check whether the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Absolute value of the amount
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse an amount from text
    ///
    /// Accepts "10.50", "-10.50", "$10.50", and whole-unit forms like
    /// "10". The decimal separator is always '.', regardless of locale;
    /// digits past the second decimal place are dropped. Anything else is
    /// an error, including amounts too large for the cent representation.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let original = input.trim();
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let (negative, rest) = match original.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, original),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (rest, ""),
        };

        // Past the sign and symbol only digits and one separator may
        // remain; this also keeps the fraction slice on a char boundary
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: i64 = whole.parse().map_err(|_| invalid())?;
        let fraction_cents = if fraction.is_empty() {
            0
        } else {
            let digits = &fraction[..fraction.len().min(2)];
            let parsed: i64 = digits.parse().map_err(|_| invalid())?;
            if digits.len() == 1 {
                parsed * 10
            } else {
                parsed
            }
        };

        // 17-digit inputs survive the i64 parse above but not the scale
        // to cents, so the arithmetic must be checked
        let cents = units
            .checked_mul(100)
            .and_then(|scaled| scaled.checked_add(fraction_cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format the amount with a specific currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error returned when amount text cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
