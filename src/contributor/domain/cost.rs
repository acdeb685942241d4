//! Cost of a contributor performing a task.

use super::{Amount, Estimation};
use rust_decimal::Decimal;

const MINUTES_PER_HOUR: u32 = 60;

/// Breakdown of what a task costs the project when given to a contributor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCost {
    labour: Amount,
    commission: Amount,
    total: Amount,
}

impl TaskCost {
    /// Computes `round_half_up(hourly_rate * minutes / 60) + commission`.
    ///
    /// The labour part is rounded half-up to `scale` decimal places (the
    /// currency's minor unit) before the commission is added. Returns `None`
    /// when the computation overflows.
    #[must_use]
    pub fn compute(
        hourly_rate: Amount,
        estimation: Estimation,
        commission: Amount,
        scale: u32,
    ) -> Option<Self> {
        let unrounded = hourly_rate
            .value()
            .checked_mul(Decimal::from(estimation.minutes()))?
            .checked_div(Decimal::from(MINUTES_PER_HOUR))?;
        let labour = Amount::new(unrounded).ok()?.round_half_up(scale);
        let total = labour.checked_add(commission)?;
        Some(Self {
            labour,
            commission,
            total,
        })
    }

    /// Returns the rounded rate-times-time part.
    #[must_use]
    pub const fn labour(&self) -> Amount {
        self.labour
    }

    /// Returns the project manager's commission.
    #[must_use]
    pub const fn commission(&self) -> Amount {
        self.commission
    }

    /// Returns the total cost.
    #[must_use]
    pub const fn total(&self) -> Amount {
        self.total
    }

    /// Returns whether the total fits within `available` funds, inclusive.
    #[must_use]
    pub fn is_affordable(&self, available: Amount) -> bool {
        self.total <= available
    }
}
