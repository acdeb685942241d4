//! Contributor directory scoped to a single project.
//!
//! Provides [`ProjectContributors`], which looks up and registers the
//! contributors of one project. The contributor list is fetched from the
//! injected [`ContributorSource`] on every call and never cached.

use crate::contributor::{
    domain::{
        Contract, Contributor, ContributorDomainError, ContributorId, ProjectScope, Provider,
        Username,
    },
    ports::{ContractRegistry, ContributorRegistry, ContributorSource, RegistryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors returned by the contributor directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Registration was attempted with a provider other than the project's.
    #[error("only contributors working at {expected} can be registered here, got '{actual}'")]
    InvalidProvider {
        /// Provider of the project.
        expected: Provider,
        /// Provider name supplied by the caller.
        actual: String,
    },

    /// The directory was used for a project other than its own.
    #[error("already seeing the contributors of project {expected}, not {requested}")]
    ScopeMismatch {
        /// Scope of this directory.
        expected: ProjectScope,
        /// Scope requested by the caller.
        requested: String,
    },

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ContributorDomainError),

    /// Registry operation failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// View over the contributors of one project.
#[derive(Debug)]
pub struct ProjectContributors<S, G>
where
    S: ContributorSource,
    G: ContributorRegistry + ContractRegistry,
{
    scope: ProjectScope,
    source: Arc<S>,
    registry: Arc<G>,
}

impl<S, G> Clone for ProjectContributors<S, G>
where
    S: ContributorSource,
    G: ContributorRegistry + ContractRegistry,
{
    fn clone(&self) -> Self {
        Self {
            scope: self.scope.clone(),
            source: Arc::clone(&self.source),
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<S, G> ProjectContributors<S, G>
where
    S: ContributorSource,
    G: ContributorRegistry + ContractRegistry,
{
    /// Creates a directory for the project identified by `scope`.
    #[must_use]
    pub const fn new(scope: ProjectScope, source: Arc<S>, registry: Arc<G>) -> Self {
        Self {
            scope,
            source,
            registry,
        }
    }

    /// Returns the scope of the project this directory sees.
    #[must_use]
    pub const fn scope(&self) -> &ProjectScope {
        &self.scope
    }

    /// Registers a contributor with this project.
    ///
    /// Contributors already in the project are returned unchanged. A new
    /// contributor is persisted together with [`Contract::default_for`] the
    /// project. When a concurrent registration of the same identity stores
    /// that contract first, the contributor it registered is returned.
    ///
    /// `provider` must equal the project's provider name exactly.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::InvalidProvider`] when `provider` is not the
    /// project's provider, [`DirectoryError::Domain`] when `username` is
    /// empty, or [`DirectoryError::Registry`] when persistence fails.
    pub async fn register(&self, username: &str, provider: &str) -> DirectoryResult<Contributor> {
        let expected = self.scope.provider();
        if provider != expected.as_str() {
            return Err(DirectoryError::InvalidProvider {
                expected,
                actual: provider.to_owned(),
            });
        }
        let id = ContributorId::new(Username::new(username)?, expected);

        if let Some(found) = self.find(&id).await? {
            return Ok(found);
        }

        let registered = self.registry.register(&id).await?;
        let default = Contract::default_for(self.scope.clone(), id.clone());
        let stored = self
            .registry
            .add_contract(&self.scope, &id, default.hourly_rate(), default.role())
            .await;
        match stored {
            Ok(contract) => {
                info!(contributor = %id, project = %self.scope, "registered contributor");
                Ok(registered.with_contracts([contract]))
            }
            Err(RegistryError::DuplicateContract(duplicate)) if duplicate == *default.id() => {
                debug!(
                    contributor = %id,
                    project = %self.scope,
                    "contributor registered concurrently"
                );
                self.find(&id)
                    .await?
                    .ok_or(DirectoryError::Registry(RegistryError::DuplicateContract(
                        duplicate,
                    )))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Looks up a contributor by raw username and provider.
    ///
    /// Returns `Ok(None)` when no such contributor works on the project,
    /// including when the values do not form a valid identity.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Registry`] when the contributors cannot be
    /// fetched.
    pub async fn get_by_id(
        &self,
        username: &str,
        provider: &str,
    ) -> DirectoryResult<Option<Contributor>> {
        let Ok(id) = ContributorId::from_parts(username, provider) else {
            return Ok(None);
        };
        self.find(&id).await
    }

    /// Looks up a contributor by identity.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Registry`] when the contributors cannot be
    /// fetched.
    pub async fn find(&self, id: &ContributorId) -> DirectoryResult<Option<Contributor>> {
        let found = self
            .contributors()
            .await?
            .into_iter()
            .find(|contributor| contributor.id() == id);
        Ok(found)
    }

    /// Returns this directory when it belongs to the given repository and
    /// provider. Both names are compared exactly.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ScopeMismatch`] for any other project.
    pub fn of_project(&self, repository: &str, provider: &str) -> DirectoryResult<&Self> {
        let matches = repository == self.scope.repository().as_str()
            && provider == self.scope.provider().as_str();
        if matches {
            return Ok(self);
        }
        Err(DirectoryError::ScopeMismatch {
            expected: self.scope.clone(),
            requested: format!("{provider}/{repository}"),
        })
    }

    /// Returns this directory when `scope` is its own.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ScopeMismatch`] for any other scope.
    pub fn of_scope(&self, scope: &ProjectScope) -> DirectoryResult<&Self> {
        if *scope == self.scope {
            return Ok(self);
        }
        Err(DirectoryError::ScopeMismatch {
            expected: self.scope.clone(),
            requested: scope.to_string(),
        })
    }

    /// Fetches the contributors currently known for the project.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Registry`] when the source fails.
    pub async fn contributors(&self) -> DirectoryResult<Vec<Contributor>> {
        Ok(self.source.fetch(&self.scope).await?)
    }

    /// Fetches the contributors and returns an iterator over them.
    ///
    /// Each call starts a fresh fetch.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Registry`] when the source fails.
    pub async fn iter(&self) -> DirectoryResult<std::vec::IntoIter<Contributor>> {
        Ok(self.contributors().await?.into_iter())
    }
}
