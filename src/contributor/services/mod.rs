//! Application services for contributor registration and task election.

mod config;
mod directory;
mod election;

pub use config::ElectionConfig;
pub use directory::{DirectoryError, DirectoryResult, ProjectContributors};
pub use election::{ContributorElection, ElectionError, ElectionResult};
