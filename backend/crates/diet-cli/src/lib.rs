//! diet-cli library
//!
//! Exports the HTTP client and session store for the `diet` binary and tests.

pub mod cli;
pub(crate) mod client;
pub mod commands;
pub(crate) mod session_store;


pub use client::{CliClientResult, Client, ClientError, CreatedUser};
pub use session_store::SessionStore;
