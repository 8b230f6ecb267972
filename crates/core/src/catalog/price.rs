//! Fixed-point monetary amounts.
//!
//! Prices are held as an integer number of cents so that equality and
//! arithmetic are exact. On the wire they are plain JSON numbers with at
//! most two decimals (`1.2`, `3.3`), matching what API clients expect.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A monetary amount with two decimal places of precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    /// Creates a price from whole units and cents, e.g. `Price::new(1, 20)` is `1.20`.
    ///
    /// `cents` is added to `units * 100` as-is, so values above 99 carry over.
    pub fn new(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Creates a price from a total amount in cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the total amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the amount as a floating point number of units.
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Converts a decimal amount to a price, rounding to the nearest cent.
    ///
    /// Returns `None` for non-finite values or amounts outside the `i64` cent range.
    pub fn from_f64(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let cents = (amount * 100.0).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = f64::deserialize(deserializer)?;
        Price::from_f64(amount)
            .ok_or_else(|| de::Error::custom(format!("invalid price amount: {amount}")))
    }
}
