//! Registry ports for persisting contributors and their contracts.

use crate::contributor::domain::{
    Amount, Contract, ContractId, ContractRole, Contributor, ContributorId, ProjectScope,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Contributor persistence contract.
#[async_trait]
pub trait ContributorRegistry: Send + Sync {
    /// Creates and persists a contributor record.
    ///
    /// Registering an identity that already exists returns the stored
    /// contributor; implementations must keep this idempotent under
    /// concurrent calls.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Persistence`] when the backing store fails.
    async fn register(&self, id: &ContributorId) -> RegistryResult<Contributor>;
}

/// Contract persistence contract.
#[async_trait]
pub trait ContractRegistry: Send + Sync {
    /// Stores a new contract between `contributor` and `project`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateContract`] when a contract with the
    /// same project, contributor and role already exists, or
    /// [`RegistryError::Persistence`] when the backing store fails.
    async fn add_contract(
        &self,
        project: &ProjectScope,
        contributor: &ContributorId,
        hourly_rate: Amount,
        role: ContractRole,
    ) -> RegistryResult<Contract>;
}

/// Errors returned by registry implementations.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// A contract with the same identity already exists.
    #[error("duplicate contract: {0}")]
    DuplicateContract(ContractId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RegistryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
