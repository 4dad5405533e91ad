use crate::Result;

use std::fmt;

use thiserror::Error;

/// Number of stored sub-units per whole currency unit
const SCALE: i64 = 10_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point amount of currency, stored in ten-thousandths of a unit
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// Whole currency units, saturating at the representable bounds
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(SCALE))
    }

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents.saturating_mul(SCALE / 100))
    }

    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        if digits.split('.').count() > 2 {
            Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
        }

        let mut parts = digits.split('.');
        let units = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();

        if units.is_empty() && fraction.is_empty() {
            Err(MoneyError::Parse("No digits found", string.to_string()))?
        }

        if !units.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            Err(MoneyError::Parse("Unexpected character", string.to_string()))?
        }

        if fraction.len() > 4 {
            Err(MoneyError::Parse("More than four decimal places", string.to_string()))?
        }

        let units: i64 = if units.is_empty() { 0 } else { units.parse()? };
        let fraction: i64 = format!("{:0<4}", fraction).parse()?;

        let value = units
            .checked_mul(SCALE)
            .and_then(|value| value.checked_add(fraction))
            .ok_or_else(|| MoneyError::Parse("Amount out of range", string.to_string()))?;

        return Ok(Money(if negative { -value } else { value }));
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds `other` in place. On failure the value is left untouched.
    pub fn add(&mut self, other: &Self) -> std::result::Result<(), MoneyError> {
        self.0 = match self.0.checked_add(other.0) {
            Some(sum) => sum,
            None if other.0 > 0 => return Err(MoneyError::Overflow("add", *self, *other)),
            None => return Err(MoneyError::Underflow("add", *self, *other)),
        };

        Ok(())
    }

    /// Sum clamped to the representable bounds
    pub fn saturating_add(&self, other: &Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Subtracts `other` in place. On failure the value is left untouched.
    pub fn sub(&mut self, other: &Self) -> std::result::Result<(), MoneyError> {
        self.0 = match self.0.checked_sub(other.0) {
            Some(difference) => difference,
            None if other.0 < 0 => return Err(MoneyError::Overflow("sub", *self, *other)),
            None => return Err(MoneyError::Underflow("sub", *self, *other)),
        };

        Ok(())
    }
}

/// Two decimal places, rounded half away from zero
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cents = (self.0.unsigned_abs() + 50) / 100;
        let sign = if self.0 < 0 && cents > 0 { "-" } else { "" };

        return write!(f, "{sign}{}.{:02}", cents / 100, cents % 100);
    }
}
