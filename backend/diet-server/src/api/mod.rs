pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod identities;
pub mod meals;
pub mod metrics;
