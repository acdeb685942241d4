//! Elector: contributor election for funded software projects.
//!
//! This crate decides who should work on a task derived from an issue or
//! pull request. It keeps a per-project view of contributors and their
//! contracts, prices a task against each candidate's hourly rate, and elects
//! one affordable contributor at random.
//!
//! # Architecture
//!
//! Elector follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for registries, wallets and
//!   randomness
//! - **Adapters**: Concrete implementations of ports (in-memory stores,
//!   seedable random source)
//!
//! # Modules
//!
//! - [`contributor`]: Contributor directory, contracts and task election

pub mod contributor;
