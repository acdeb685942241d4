//! Shared harness for in-memory contributor integration tests.

use elector::contributor::{
    adapters::{
        memory::{InMemoryContributorStore, InMemoryWallet},
        random::RandomTieBreaker,
    },
    domain::{
        Amount, ContractRole, Contributor, ContributorId, Estimation, Project, ProjectManager,
        ProjectScope, Task,
    },
    ports::{ContractRegistry, ContributorSource, RegistryResult},
    services::{ContributorElection, ProjectContributors},
};
use async_trait::async_trait;
use rstest::fixture;
use std::sync::Arc;

pub type TestResult<T = ()> = Result<T, eyre::Report>;

/// Election engine wired to in-memory adapters.
pub type MemoryElection = ContributorElection<
    InMemoryContributorStore,
    InMemoryContributorStore,
    InMemoryWallet,
    RandomTieBreaker,
>;

/// Directory whose reads hand control back to the runtime.
pub type YieldingDirectory = ProjectContributors<YieldingSource, InMemoryContributorStore>;

/// Reads the in-memory store, then yields so concurrent registrations
/// interleave between their lookup and their write.
pub struct YieldingSource(Arc<InMemoryContributorStore>);

#[async_trait]
impl ContributorSource for YieldingSource {
    async fn fetch(&self, project: &ProjectScope) -> RegistryResult<Vec<Contributor>> {
        let contributors = self.0.fetch(project).await?;
        tokio::task::yield_now().await;
        Ok(contributors)
    }
}

/// Parses a decimal literal into an [`Amount`].
///
/// # Errors
///
/// Returns an error when the literal is not a non-negative decimal.
pub fn amount(value: &str) -> TestResult<Amount> {
    Ok(Amount::new(value.parse()?)?)
}

/// A test harness containing everything needed to register and elect.
pub struct ElectionHarness {
    pub scope: ProjectScope,
    pub store: Arc<InMemoryContributorStore>,
    pub wallet: Arc<InMemoryWallet>,
    pub election: MemoryElection,
}

impl ElectionHarness {
    /// Creates a harness for `repository` hosted at `provider`.
    ///
    /// # Errors
    ///
    /// Returns an error when the scope is invalid.
    pub fn new(repository: &str, provider: &str, seed: u64) -> TestResult<Self> {
        let scope = ProjectScope::from_parts(repository, provider)?;
        let store = Arc::new(InMemoryContributorStore::new());
        let wallet = Arc::new(InMemoryWallet::new());
        let directory =
            ProjectContributors::new(scope.clone(), Arc::clone(&store), Arc::clone(&store));
        let election = ContributorElection::new(
            directory,
            Arc::clone(&wallet),
            Arc::new(RandomTieBreaker::seeded(seed)),
        );
        Ok(Self {
            scope,
            store,
            wallet,
            election,
        })
    }

    /// Stores a `role` contract at `rate` per hour for `username`.
    ///
    /// # Errors
    ///
    /// Returns an error when the identity is invalid or storage fails.
    pub async fn hire(&self, username: &str, role: ContractRole, rate: &str) -> TestResult {
        let id = ContributorId::from_parts(username, self.scope.provider().as_str())?;
        self.store
            .add_contract(&self.scope, &id, amount(rate)?, role)
            .await?;
        Ok(())
    }

    /// Sets the project's available funds.
    ///
    /// # Errors
    ///
    /// Returns an error when the wallet rejects the balance.
    pub fn fund(&self, available: &str) -> TestResult {
        self.wallet.set_available(self.scope.clone(), amount(available)?)?;
        Ok(())
    }

    /// Builds a directory over this harness's store whose reads yield.
    pub fn yielding_directory(&self) -> YieldingDirectory {
        ProjectContributors::new(
            self.scope.clone(),
            Arc::new(YieldingSource(Arc::clone(&self.store))),
            Arc::clone(&self.store),
        )
    }

    /// Builds a task of this project.
    ///
    /// # Errors
    ///
    /// Returns an error when the commission is invalid.
    pub fn task(&self, role: ContractRole, minutes: u32, commission: &str) -> TestResult<Task> {
        Ok(Task::new(
            Project::new(self.scope.clone(), ProjectManager::new(amount(commission)?)),
            role,
            Estimation::from_minutes(minutes),
        ))
    }
}

/// Harness for a GitHub project with a fixed seed.
#[fixture]
pub fn harness() -> ElectionHarness {
    ElectionHarness::new("self-xdsd/self-web", "github", 2024)
        .unwrap_or_else(|err| panic!("harness setup failed: {err}"))
}
