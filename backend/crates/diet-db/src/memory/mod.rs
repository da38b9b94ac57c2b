//! Process-local stores with the same contracts as the SQLite repositories.
//! Nothing here survives a restart.

pub mod in_memory_identity_store;
pub mod in_memory_meal_ledger;
