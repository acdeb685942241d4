//! Port contracts for contributor lookup, registration and election.
//!
//! Ports define infrastructure-agnostic interfaces used by the contributor
//! directory and the election engine.

pub mod registry;
pub mod source;
pub mod tie_breaker;
pub mod wallet;

pub use registry::{ContractRegistry, ContributorRegistry, RegistryError, RegistryResult};
pub use source::ContributorSource;
pub use tie_breaker::TieBreaker;
pub use wallet::{Wallet, WalletError, WalletResult};
