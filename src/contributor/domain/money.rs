//! Non-negative currency amounts.

use super::ContributorDomainError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-negative decimal currency amount.
///
/// Hourly rates, commissions and wallet balances all use this type. The
/// scale is not fixed; rounding to the currency's minor unit happens only
/// where a computation needs it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a validated amount.
    ///
    /// # Errors
    ///
    /// Returns [`ContributorDomainError::NegativeAmount`] when the value is
    /// below zero.
    pub fn new(value: Decimal) -> Result<Self, ContributorDomainError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ContributorDomainError::NegativeAmount(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Returns the wrapped decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Adds two amounts, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Rounds half-up to `scale` decimal places.
    ///
    /// Amounts are never negative, so rounding midpoints away from zero is
    /// the same as rounding them up.
    #[must_use]
    pub fn round_half_up(self, scale: u32) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ContributorDomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
