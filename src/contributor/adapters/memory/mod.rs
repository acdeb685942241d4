//! In-memory adapters for contributor registries and wallets.

mod store;
mod wallet;

pub use store::InMemoryContributorStore;
pub use wallet::InMemoryWallet;
