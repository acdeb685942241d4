//! Tunables for the election engine.

use serde::{Deserialize, Serialize};

/// Configuration for [`ContributorElection`](super::ContributorElection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectionConfig {
    /// Decimal places of the currency's minor unit. Labour costs are rounded
    /// half-up to this scale.
    pub currency_scale: u32,
}

impl Default for ElectionConfig {
    fn default() -> Self {
        Self { currency_scale: 2 }
    }
}

impl ElectionConfig {
    /// Creates a configuration for a currency without a minor unit.
    #[must_use]
    pub const fn whole_units() -> Self {
        Self { currency_scale: 0 }
    }
}
