//! Contracts between contributors and projects.

use super::{Amount, ContractRole, ContributorId, ProjectScope};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a contract: one per project, contributor and role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractId {
    project: ProjectScope,
    contributor: ContributorId,
    role: ContractRole,
}

impl ContractId {
    /// Creates a contract identity.
    #[must_use]
    pub const fn new(
        project: ProjectScope,
        contributor: ContributorId,
        role: ContractRole,
    ) -> Self {
        Self {
            project,
            contributor,
            role,
        }
    }

    /// Returns the project the contract belongs to.
    #[must_use]
    pub const fn project(&self) -> &ProjectScope {
        &self.project
    }

    /// Returns the contracted contributor.
    #[must_use]
    pub const fn contributor(&self) -> &ContributorId {
        &self.contributor
    }

    /// Returns the contracted role.
    #[must_use]
    pub const fn role(&self) -> ContractRole {
        self.role
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.project, self.contributor, self.role)
    }
}

/// Agreement fixing the role and hourly rate of a contributor on a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    id: ContractId,
    hourly_rate: Amount,
}

impl Contract {
    /// Creates a contract.
    #[must_use]
    pub const fn new(id: ContractId, hourly_rate: Amount) -> Self {
        Self { id, hourly_rate }
    }

    /// Creates the contract every newly registered contributor receives:
    /// role `DEV`, hourly rate zero.
    #[must_use]
    pub const fn default_for(project: ProjectScope, contributor: ContributorId) -> Self {
        Self::new(
            ContractId::new(project, contributor, ContractRole::Dev),
            Amount::ZERO,
        )
    }

    /// Returns the contract identity.
    #[must_use]
    pub const fn id(&self) -> &ContractId {
        &self.id
    }

    /// Returns the project the contract belongs to.
    #[must_use]
    pub const fn project(&self) -> &ProjectScope {
        self.id.project()
    }

    /// Returns the contracted role.
    #[must_use]
    pub const fn role(&self) -> ContractRole {
        self.id.role()
    }

    /// Returns the hourly rate.
    #[must_use]
    pub const fn hourly_rate(&self) -> Amount {
        self.hourly_rate
    }
}
