//! Domain model for contributors, contracts and task election.
//!
//! The contributor domain models identities, contracts, projects and tasks,
//! and the pure cost computation used to decide whether a project can afford
//! a contributor. All infrastructure concerns are kept outside the domain
//! boundary.

mod contract;
mod contributor;
mod cost;
mod error;
mod ids;
mod money;
mod project;
mod role;
mod task;

pub use contract::{Contract, ContractId};
pub use contributor::Contributor;
pub use cost::TaskCost;
pub use error::{ContributorDomainError, ParseContractRoleError};
pub use ids::{ContributorId, ProjectScope, Provider, RepositoryFullName, Username};
pub use money::Amount;
pub use project::{Project, ProjectManager};
pub use role::ContractRole;
pub use task::{Estimation, Task};
