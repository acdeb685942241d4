//! In-memory wallet balances keyed by project.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::contributor::{
    domain::{Amount, ProjectScope},
    ports::{Wallet, WalletError, WalletResult},
};

/// Thread-safe in-memory wallet holding one balance per project.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWallet {
    balances: Arc<RwLock<HashMap<ProjectScope, Amount>>>,
}

impl InMemoryWallet {
    /// Creates a wallet with no funded projects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the funds available to `project`.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Unavailable`] when the balance lock is poisoned.
    pub fn set_available(&self, project: ProjectScope, available: Amount) -> WalletResult<()> {
        let mut balances = self
            .balances
            .write()
            .map_err(|err| WalletError::unavailable(std::io::Error::other(err.to_string())))?;
        balances.insert(project, available);
        Ok(())
    }
}

#[async_trait]
impl Wallet for InMemoryWallet {
    async fn available(&self, project: &ProjectScope) -> WalletResult<Amount> {
        let balances = self
            .balances
            .read()
            .map_err(|err| WalletError::unavailable(std::io::Error::other(err.to_string())))?;
        balances
            .get(project)
            .copied()
            .ok_or_else(|| WalletError::Missing(project.clone()))
    }
}
