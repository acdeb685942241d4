//! Identity types for contributors and the projects they work on.

use super::ContributorDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported code-hosting providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// GitHub.
    #[serde(rename = "github")]
    GitHub,
    /// GitLab.
    #[serde(rename = "gitlab")]
    GitLab,
}

impl Provider {
    /// Returns provider name in canonical storage format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
        }
    }
}

impl TryFrom<&str> for Provider {
    type Error = ContributorDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "github" => Ok(Self::GitHub),
            "gitlab" => Ok(Self::GitLab),
            _ => Err(ContributorDomainError::InvalidProvider(value.to_owned())),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contributor username at a provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Creates a validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ContributorDomainError::EmptyUsername`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ContributorDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ContributorDomainError::EmptyUsername);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a contributor: the username together with its provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContributorId {
    username: Username,
    provider: Provider,
}

impl ContributorId {
    /// Creates a contributor identity from validated components.
    #[must_use]
    pub const fn new(username: Username, provider: Provider) -> Self {
        Self { username, provider }
    }

    /// Creates a contributor identity from raw external values.
    ///
    /// # Errors
    ///
    /// Returns a [`ContributorDomainError`] when any component is invalid.
    pub fn from_parts(username: &str, provider: &str) -> Result<Self, ContributorDomainError> {
        Ok(Self::new(Username::new(username)?, Provider::try_from(provider)?))
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the provider.
    #[must_use]
    pub const fn provider(&self) -> Provider {
        self.provider
    }
}

impl fmt::Display for ContributorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.username, self.provider)
    }
}

/// Normalized external repository identifier in `owner/repo` format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryFullName(String);

impl RepositoryFullName {
    /// Creates a validated repository name.
    ///
    /// # Errors
    ///
    /// Returns [`ContributorDomainError::InvalidRepository`] if the value does
    /// not contain exactly one slash-delimited owner and repository segment.
    pub fn new(value: impl Into<String>) -> Result<Self, ContributorDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        let mut segments = normalized.split('/');
        let owner = segments.next().unwrap_or_default();
        let repo = segments.next().unwrap_or_default();
        let is_valid = !owner.is_empty()
            && !repo.is_empty()
            && segments.next().is_none()
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(ContributorDomainError::InvalidRepository(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the repository name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RepositoryFullName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RepositoryFullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value identity of a project: its repository and the provider hosting it.
///
/// Two contributor views belong to the same project exactly when their scopes
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectScope {
    repository: RepositoryFullName,
    provider: Provider,
}

impl ProjectScope {
    /// Creates a project scope from validated components.
    #[must_use]
    pub const fn new(repository: RepositoryFullName, provider: Provider) -> Self {
        Self {
            repository,
            provider,
        }
    }

    /// Creates a project scope from raw external values.
    ///
    /// # Errors
    ///
    /// Returns a [`ContributorDomainError`] when any component is invalid.
    pub fn from_parts(repository: &str, provider: &str) -> Result<Self, ContributorDomainError> {
        Ok(Self::new(
            RepositoryFullName::new(repository)?,
            Provider::try_from(provider)?,
        ))
    }

    /// Returns the repository full name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryFullName {
        &self.repository
    }

    /// Returns the provider hosting the repository.
    #[must_use]
    pub const fn provider(&self) -> Provider {
        self.provider
    }
}

impl fmt::Display for ProjectScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.provider, self.repository)
    }
}
