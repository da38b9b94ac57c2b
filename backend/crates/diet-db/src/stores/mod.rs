//! Storage seams.
//!
//! Handlers and the session resolver only ever see these traits, so a SQLite
//! repository and an in-memory store are interchangeable.

pub mod identity_store;
pub mod meal_ledger;
