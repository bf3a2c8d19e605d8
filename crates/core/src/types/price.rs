//! Type-safe price representation.
//!
//! The catalog prices everything in whole rupees (INR); there are no
//! fractional list prices. Paise only appear at the payment boundary, where
//! the gateway wants minor units and the UPI link wants a two-decimal string.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount of money in whole rupees (INR).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Zero rupees.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole-rupee amount.
    #[must_use]
    pub const fn new(rupees: i64) -> Self {
        Self(rupees)
    }

    /// The amount in whole rupees.
    #[must_use]
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// The amount in paise (minor units), as payment gateways expect.
    #[must_use]
    pub const fn paise(&self) -> i64 {
        self.0.saturating_mul(100)
    }

    /// The amount as a two-decimal value, for UPI link formatting.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.paise(), 2)
    }

    /// Multiply by a line-item quantity.
    #[must_use]
    pub const fn times(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as i64))
    }

    /// Whether the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\u{20b9}{}", self.0)
    }
}
