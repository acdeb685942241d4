//! Contract roles.

use super::ParseContractRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of work a contract covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContractRole {
    /// Developer: solves issues.
    Dev,
    /// Reviewer: reviews pull requests.
    Rev,
    /// Quality assurance.
    Qa,
    /// Product owner.
    Po,
    /// Architect.
    Arch,
}

impl ContractRole {
    /// Returns the canonical role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "DEV",
            Self::Rev => "REV",
            Self::Qa => "QA",
            Self::Po => "PO",
            Self::Arch => "ARCH",
        }
    }
}

impl FromStr for ContractRole {
    type Err = ParseContractRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "DEV" => Ok(Self::Dev),
            "REV" => Ok(Self::Rev),
            "QA" => Ok(Self::Qa),
            "PO" => Ok(Self::Po),
            "ARCH" => Ok(Self::Arch),
            _ => Err(ParseContractRoleError(value.to_owned())),
        }
    }
}

impl TryFrom<&str> for ContractRole {
    type Error = ParseContractRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ContractRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
