//! Error types for contributor domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing contributor domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContributorDomainError {
    /// The provider value is unsupported.
    #[error("unsupported provider: {0}")]
    InvalidProvider(String),

    /// The repository name does not follow `owner/repo` format.
    #[error("invalid repository name '{0}', expected owner/repo")]
    InvalidRepository(String),

    /// The username is empty after trimming.
    #[error("contributor username must not be empty")]
    EmptyUsername,

    /// A currency amount was negative.
    #[error("amount must not be negative: {0}")]
    NegativeAmount(String),
}

/// Error returned while parsing a contract role.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown contract role: {0}")]
pub struct ParseContractRoleError(pub String);
