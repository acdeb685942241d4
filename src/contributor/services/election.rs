//! Election of an assignee for a task.
//!
//! Provides [`ContributorElection`], which picks one contributor able to do
//! a task: someone other than the current assignee, holding a contract with
//! the required role, whose cost the project's wallet can cover. Ties are
//! broken uniformly at random through the [`TieBreaker`] port.

use super::{DirectoryError, ElectionConfig, ProjectContributors};
use crate::contributor::{
    domain::{Contract, Contributor, Task, TaskCost},
    ports::{
        ContractRegistry, ContributorRegistry, ContributorSource, TieBreaker, Wallet, WalletError,
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned while electing a contributor.
///
/// Finding nobody eligible is not an error; see
/// [`ContributorElection::elect`].
#[derive(Debug, Error)]
pub enum ElectionError {
    /// The directory rejected the task or could not list contributors.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    /// The project's available funds could not be read.
    #[error(transparent)]
    Wallet(#[from] WalletError),
}

/// Result type for election operations.
pub type ElectionResult<T> = Result<T, ElectionError>;

/// Stateless election engine for the tasks of one project.
pub struct ContributorElection<S, G, W, T>
where
    S: ContributorSource,
    G: ContributorRegistry + ContractRegistry,
    W: Wallet,
    T: TieBreaker,
{
    directory: ProjectContributors<S, G>,
    wallet: Arc<W>,
    tie_breaker: Arc<T>,
    config: ElectionConfig,
}

impl<S, G, W, T> Clone for ContributorElection<S, G, W, T>
where
    S: ContributorSource,
    G: ContributorRegistry + ContractRegistry,
    W: Wallet,
    T: TieBreaker,
{
    fn clone(&self) -> Self {
        Self {
            directory: self.directory.clone(),
            wallet: Arc::clone(&self.wallet),
            tie_breaker: Arc::clone(&self.tie_breaker),
            config: self.config,
        }
    }
}

impl<S, G, W, T> ContributorElection<S, G, W, T>
where
    S: ContributorSource,
    G: ContributorRegistry + ContractRegistry,
    W: Wallet,
    T: TieBreaker,
{
    /// Creates an election engine with the default configuration.
    #[must_use]
    pub fn new(directory: ProjectContributors<S, G>, wallet: Arc<W>, tie_breaker: Arc<T>) -> Self {
        Self::with_config(directory, wallet, tie_breaker, ElectionConfig::default())
    }

    /// Creates an election engine with an explicit configuration.
    #[must_use]
    pub const fn with_config(
        directory: ProjectContributors<S, G>,
        wallet: Arc<W>,
        tie_breaker: Arc<T>,
        config: ElectionConfig,
    ) -> Self {
        Self {
            directory,
            wallet,
            tie_breaker,
            config,
        }
    }

    /// Returns the directory candidates are drawn from.
    #[must_use]
    pub const fn directory(&self) -> &ProjectContributors<S, G> {
        &self.directory
    }

    /// Computes what `task` would cost under `contract`.
    ///
    /// Returns `None` when the computation overflows.
    #[must_use]
    pub fn quote(&self, contract: &Contract, task: &Task) -> Option<TaskCost> {
        TaskCost::compute(
            contract.hourly_rate(),
            task.estimation(),
            task.project().manager().commission(),
            self.config.currency_scale,
        )
    }

    /// Elects a contributor for `task`.
    ///
    /// Returns `Ok(None)` when nobody is eligible. Every eligible contributor
    /// has the same chance of being chosen. The wallet is read at most once
    /// and only when some candidate holds a matching contract; a concurrent
    /// change to contributors or funds may leave the answer stale, so the
    /// result is advisory until the assignment is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`ElectionError::Directory`] when the task belongs to another
    /// project or the contributors cannot be fetched, and
    /// [`ElectionError::Wallet`] when the available funds cannot be read.
    pub async fn elect(&self, task: &Task) -> ElectionResult<Option<Contributor>> {
        let scope = task.project().scope();
        let candidates = self.directory.of_scope(scope)?.contributors().await?;

        let priced: Vec<(Contributor, TaskCost)> = candidates
            .into_iter()
            .filter(|candidate| task.assignee() != Some(candidate.id()))
            .filter_map(|candidate| self.price(candidate, task))
            .collect();
        if priced.is_empty() {
            info!(
                project = %scope,
                role = %task.role(),
                "no contributor holds a matching contract"
            );
            return Ok(None);
        }

        let available = self.wallet.available(scope).await?;
        let eligible: Vec<Contributor> = priced
            .into_iter()
            .filter_map(|(candidate, cost)| {
                if cost.is_affordable(available) {
                    return Some(candidate);
                }
                debug!(
                    contributor = %candidate.id(),
                    cost = %cost.total(),
                    %available,
                    "candidate too expensive"
                );
                None
            })
            .collect();
        if eligible.is_empty() {
            info!(project = %scope, %available, "no affordable contributor");
            return Ok(None);
        }

        let index = self.tie_breaker.pick(eligible.len());
        let elected = eligible.into_iter().nth(index);
        if let Some(contributor) = &elected {
            info!(project = %scope, contributor = %contributor.id(), "elected contributor");
        }
        Ok(elected)
    }

    fn price(&self, candidate: Contributor, task: &Task) -> Option<(Contributor, TaskCost)> {
        let Some(contract) = candidate.contract_for(task.project().scope(), task.role()) else {
            debug!(contributor = %candidate.id(), role = %task.role(), "no contract for role");
            return None;
        };
        let Some(cost) = self.quote(contract, task) else {
            warn!(contributor = %candidate.id(), "task cost overflowed");
            return None;
        };
        Some((candidate, cost))
    }
}
