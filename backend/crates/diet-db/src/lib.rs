pub mod connection;
pub mod error;
pub mod memory;
pub mod repositories;
pub mod stores;

pub use connection::pool::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use memory::in_memory_identity_store::InMemoryIdentityStore;
pub use memory::in_memory_meal_ledger::InMemoryMealLedger;
pub use repositories::identity_repository::IdentityRepository;
pub use repositories::meal_repository::MealRepository;
pub use stores::identity_store::IdentityStore;
pub use stores::meal_ledger::MealLedger;

#[cfg(test)]
mod tests;
