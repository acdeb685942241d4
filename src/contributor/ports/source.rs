//! Fresh-fetch capability for a project's contributors.

use super::RegistryResult;
use crate::contributor::domain::{Contributor, ProjectScope};
use async_trait::async_trait;

/// Supplies the contributors currently known for a project.
///
/// Every call fetches anew; callers must not expect two calls to observe the
/// same contributors. Plain functions and closures with the signature
/// `Fn(&ProjectScope) -> RegistryResult<Vec<Contributor>>` implement this
/// trait, so a fetch function can be injected without a dedicated adapter.
#[async_trait]
pub trait ContributorSource: Send + Sync {
    /// Returns the contributors of `project`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`](super::RegistryError) when the backing store
    /// cannot be read.
    async fn fetch(&self, project: &ProjectScope) -> RegistryResult<Vec<Contributor>>;
}

#[async_trait]
impl<F> ContributorSource for F
where
    F: Fn(&ProjectScope) -> RegistryResult<Vec<Contributor>> + Send + Sync,
{
    async fn fetch(&self, project: &ProjectScope) -> RegistryResult<Vec<Contributor>> {
        self(project)
    }
}
