//! Project value types consulted during election.

use super::{Amount, ProjectScope};
use serde::{Deserialize, Serialize};

/// Manager of a project, paid a fixed commission for every task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManager {
    commission: Amount,
}

impl ProjectManager {
    /// Creates a project manager charging `commission` per task.
    #[must_use]
    pub const fn new(commission: Amount) -> Self {
        Self { commission }
    }

    /// Returns the commission added to every task's cost.
    #[must_use]
    pub const fn commission(&self) -> Amount {
        self.commission
    }
}

/// A project: its scope and its manager.
///
/// The project's wallet is reached through the
/// [`Wallet`](crate::contributor::ports::Wallet) port, keyed by scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    scope: ProjectScope,
    manager: ProjectManager,
}

impl Project {
    /// Creates a project.
    #[must_use]
    pub const fn new(scope: ProjectScope, manager: ProjectManager) -> Self {
        Self { scope, manager }
    }

    /// Returns the project scope.
    #[must_use]
    pub const fn scope(&self) -> &ProjectScope {
        &self.scope
    }

    /// Returns the project manager.
    #[must_use]
    pub const fn manager(&self) -> &ProjectManager {
        &self.manager
    }
}
