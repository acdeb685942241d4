//! Contributor aggregate.

use super::{Contract, ContractRole, ContributorId, ProjectScope, Provider, Username};
use serde::{Deserialize, Serialize};

/// A person contributing to one or more projects, with their contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    id: ContributorId,
    contracts: Vec<Contract>,
}

impl Contributor {
    /// Creates a contributor without contracts.
    #[must_use]
    pub const fn new(id: ContributorId) -> Self {
        Self {
            id,
            contracts: Vec::new(),
        }
    }

    /// Attaches contracts to the contributor.
    #[must_use]
    pub fn with_contracts(mut self, contracts: impl IntoIterator<Item = Contract>) -> Self {
        self.contracts.extend(contracts);
        self
    }

    /// Returns the contributor identity.
    #[must_use]
    pub const fn id(&self) -> &ContributorId {
        &self.id
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        self.id.username()
    }

    /// Returns the provider the contributor works at.
    #[must_use]
    pub const fn provider(&self) -> Provider {
        self.id.provider()
    }

    /// Returns all contracts the contributor holds.
    #[must_use]
    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    /// Returns the first contract covering `role` on `project`, if any.
    #[must_use]
    pub fn contract_for(&self, project: &ProjectScope, role: ContractRole) -> Option<&Contract> {
        self.contracts
            .iter()
            .find(|contract| contract.role() == role && contract.project() == project)
    }
}
