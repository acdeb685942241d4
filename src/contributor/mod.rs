//! Contributor directory and task assignee election.
//!
//! This module keeps the view of a project's contributors and elects one of
//! them for a task that needs an assignee. A candidate is eligible when it
//! holds a contract with the role the task requires and the cost of doing
//! the task fits in the project's wallet. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
