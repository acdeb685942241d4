//! Wallet port exposing a project's available funds.

use crate::contributor::domain::{Amount, ProjectScope};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

/// Read-only view of the funds a project can spend.
#[async_trait]
pub trait Wallet: Send + Sync {
    /// Returns the funds currently available to `project`.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Unavailable`] when the balance cannot be read.
    async fn available(&self, project: &ProjectScope) -> WalletResult<Amount>;
}

/// Errors returned by wallet implementations.
#[derive(Debug, Clone, Error)]
pub enum WalletError {
    /// The project has no wallet.
    #[error("no wallet for project {0}")]
    Missing(ProjectScope),

    /// The balance could not be read.
    #[error("wallet unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl WalletError {
    /// Wraps a backend error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
