//! Declarative input contracts.
//!
//! A contract maps request field names to a kind and a list of constraints.
//! The HTTP layer checks raw JSON against a contract before anything is
//! deserialized, so core components only ever see typed, validated values.

pub mod field_contract;
pub mod field_kind;
pub mod field_rule;
pub mod input_contract;
pub mod instant;
