//! Shared world state for contributor election BDD scenarios.

use std::sync::Arc;

use elector::contributor::{
    adapters::{
        memory::{InMemoryContributorStore, InMemoryWallet},
        random::RandomTieBreaker,
    },
    domain::{Amount, Contributor, ProjectScope},
    services::{ContributorElection, DirectoryError, ElectionError, ProjectContributors},
};
use rstest::fixture;

/// Election engine type used by the BDD world.
pub type TestElection = ContributorElection<
    InMemoryContributorStore,
    InMemoryContributorStore,
    InMemoryWallet,
    RandomTieBreaker,
>;

/// Project wiring created by the project step.
pub struct ProjectSetup {
    pub scope: ProjectScope,
    pub commission: Amount,
    pub store: Arc<InMemoryContributorStore>,
    pub wallet: Arc<InMemoryWallet>,
    pub election: TestElection,
}

impl ProjectSetup {
    /// Wires in-memory adapters for `scope`.
    #[must_use]
    pub fn new(scope: ProjectScope, commission: Amount) -> Self {
        let store = Arc::new(InMemoryContributorStore::new());
        let wallet = Arc::new(InMemoryWallet::new());
        let directory =
            ProjectContributors::new(scope.clone(), Arc::clone(&store), Arc::clone(&store));
        let election = ContributorElection::new(
            directory,
            Arc::clone(&wallet),
            Arc::new(RandomTieBreaker::from_entropy()),
        );
        Self {
            scope,
            commission,
            store,
            wallet,
            election,
        }
    }
}

/// Scenario world for contributor election behaviour tests.
#[derive(Default)]
pub struct ElectionWorld {
    pub project: Option<ProjectSetup>,
    pub last_election: Option<Result<Option<Contributor>, ElectionError>>,
    pub last_registration: Option<Result<Contributor, DirectoryError>>,
}

impl ElectionWorld {
    /// Returns the project configured by a previous step.
    ///
    /// # Errors
    ///
    /// Returns an error when no project step has run.
    pub fn project(&self) -> Result<&ProjectSetup, eyre::Report> {
        self.project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ElectionWorld {
    ElectionWorld::default()
}

/// Parses a decimal literal into an [`Amount`].
///
/// # Errors
///
/// Returns an error when the literal is not a non-negative decimal.
pub fn parse_amount(raw: &str) -> Result<Amount, eyre::Report> {
    Ok(Amount::new(raw.parse()?)?)
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
