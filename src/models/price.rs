//! Price type for representing unit prices
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides parsing from user input and fixed two-decimal formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// A unit price stored as cents (hundredths of the currency unit)
///
/// Prices are never negative: `parse` rejects negative input and the
/// constructors take unsigned cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a Price from cents
    ///
    /// # Examples
    /// ```
    /// use estoque::models::Price;
    /// let price = Price::from_cents(350); // 3.50
    /// ```
    pub const fn from_cents(cents: u32) -> Self {
        Self(cents as i64)
    }

    /// Create a zero price
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the price is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Total value of `quantity` units at this price, in cents
    pub const fn total(&self, quantity: u64) -> i64 {
        self.0 * quantity as i64
    }

    /// Parse a price from a string
    ///
    /// Accepts formats: "3.50", "3.5", "3". Negative amounts are rejected.
    pub fn parse(s: &str) -> Result<Self, PriceParseError> {
        let s = s.trim();

        if s.starts_with('-') {
            return Err(PriceParseError::Negative(s.to_string()));
        }

        let cents = if let Some((units, frac)) = s.split_once('.') {
            let units: i64 = units
                .parse()
                .map_err(|_| PriceParseError::InvalidFormat(s.to_string()))?;

            if !frac.chars().all(|c| c.is_ascii_digit()) {
                return Err(PriceParseError::InvalidFormat(s.to_string()));
            }

            // Pad or truncate the fractional part to 2 digits
            let frac_cents: i64 = match frac.len() {
                0 => 0,
                1 => {
                    frac.parse::<i64>()
                        .map_err(|_| PriceParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => frac[..2]
                    .parse()
                    .map_err(|_| PriceParseError::InvalidFormat(s.to_string()))?,
            };

            units * 100 + frac_cents
        } else {
            s.parse::<i64>()
                .map_err(|_| PriceParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(cents))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = PriceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Errors that can occur when parsing a price
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceParseError {
    InvalidFormat(String),
    Negative(String),
}

impl fmt::Display for PriceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid price format: '{}'", s),
            Self::Negative(s) => write!(f, "Price cannot be negative: '{}'", s),
        }
    }
}

impl std::error::Error for PriceParseError {}
