pub(crate) mod client;
pub(crate) mod error;

pub use client::{Client, CreatedUser};
pub use error::{ClientError, Result as CliClientResult};
