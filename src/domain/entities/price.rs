//! Monetary amounts in minor currency units.

use serde::{Deserialize, Serialize};

/// Marker printed in front of every formatted amount.
pub const CURRENCY_MARKER: &str = "$ ";

/// A non-negative amount of money, stored in cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Zero cents.
    pub const ZERO: Self = Self(0);

    /// Creates a price from an amount in cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Returns whether the price is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

/// Saturates at the largest representable amount instead of overflowing.
impl std::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, price| acc + price)
    }
}

/// Formats as `$ D.CC`: the marker, whole units, and exactly two cent digits.
impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{CURRENCY_MARKER}{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
