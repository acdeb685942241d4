//! Tasks waiting for an assignee.

use super::{ContractRole, ContributorId, Project};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time estimation of a task, in minutes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Estimation(u32);

impl Estimation {
    /// Creates an estimation of `minutes` minutes.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Returns the estimation in minutes.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Estimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}min", self.0)
    }
}

/// Unit of work derived from an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    project: Project,
    role: ContractRole,
    estimation: Estimation,
    assignee: Option<ContributorId>,
}

impl Task {
    /// Creates an unassigned task.
    #[must_use]
    pub const fn new(project: Project, role: ContractRole, estimation: Estimation) -> Self {
        Self {
            project,
            role,
            estimation,
            assignee: None,
        }
    }

    /// Sets the current assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: ContributorId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Returns the role required to work on the task.
    #[must_use]
    pub const fn role(&self) -> ContractRole {
        self.role
    }

    /// Returns the time estimation.
    #[must_use]
    pub const fn estimation(&self) -> Estimation {
        self.estimation
    }

    /// Returns the current assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&ContributorId> {
        self.assignee.as_ref()
    }
}
