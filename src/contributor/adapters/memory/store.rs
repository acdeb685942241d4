//! In-memory contributor and contract store.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::contributor::{
    domain::{
        Amount, Contract, ContractId, ContractRole, Contributor, ContributorId, ProjectScope,
    },
    ports::{
        ContractRegistry, ContributorRegistry, ContributorSource, RegistryError, RegistryResult,
    },
};

/// Thread-safe in-memory store backing the contributor registries.
///
/// A project's contributors are those holding at least one contract with
/// it. Contributors are returned in registration order, each with all of
/// its contracts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContributorStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    order: Vec<ContributorId>,
    known: HashSet<ContributorId>,
    contracts: HashMap<ContributorId, Vec<Contract>>,
}

impl InMemoryStoreState {
    fn insert_contributor(&mut self, id: &ContributorId) {
        if self.known.insert(id.clone()) {
            self.order.push(id.clone());
        }
    }

    fn contributor(&self, id: &ContributorId) -> Contributor {
        let contracts = self.contracts.get(id).cloned().unwrap_or_default();
        Contributor::new(id.clone()).with_contracts(contracts)
    }
}

impl InMemoryContributorStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of contracts stored for all projects.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Persistence`] when the store lock is poisoned.
    pub fn contract_count(&self) -> RegistryResult<usize> {
        let state = self.state.read().map_err(|err| {
            RegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.contracts.values().map(Vec::len).sum())
    }
}

#[async_trait]
impl ContributorRegistry for InMemoryContributorStore {
    async fn register(&self, id: &ContributorId) -> RegistryResult<Contributor> {
        let mut state = self.state.write().map_err(|err| {
            RegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.insert_contributor(id);
        Ok(state.contributor(id))
    }
}

#[async_trait]
impl ContractRegistry for InMemoryContributorStore {
    /// Stores the contract, creating the contributor record first when the
    /// identity is unknown.
    async fn add_contract(
        &self,
        project: &ProjectScope,
        contributor: &ContributorId,
        hourly_rate: Amount,
        role: ContractRole,
    ) -> RegistryResult<Contract> {
        let mut state = self.state.write().map_err(|err| {
            RegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let id = ContractId::new(project.clone(), contributor.clone(), role);
        let held = state.contracts.entry(contributor.clone()).or_default();
        if held.iter().any(|existing| *existing.id() == id) {
            return Err(RegistryError::DuplicateContract(id));
        }
        let contract = Contract::new(id, hourly_rate);
        held.push(contract.clone());
        state.insert_contributor(contributor);
        Ok(contract)
    }
}

#[async_trait]
impl ContributorSource for InMemoryContributorStore {
    async fn fetch(&self, project: &ProjectScope) -> RegistryResult<Vec<Contributor>> {
        let state = self.state.read().map_err(|err| {
            RegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let contributors = state
            .order
            .iter()
            .filter(|id| {
                state.contracts.get(*id).is_some_and(|contracts| {
                    contracts.iter().any(|contract| contract.project() == project)
                })
            })
            .map(|id| state.contributor(id))
            .collect();
        Ok(contributors)
    }
}
