pub mod contract;
pub mod error;
pub mod metrics;
pub mod models;

pub use contract::field_contract::FieldContract;
pub use contract::field_kind::FieldKind;
pub use contract::field_rule::FieldRule;
pub use contract::input_contract::InputContract;
pub use contract::instant::parse_instant;
pub use error::{CoreError, Result};
pub use metrics::metrics_engine::MetricsEngine;
pub use models::identity::Identity;
pub use models::identity_draft::IdentityDraft;
pub use models::meal::Meal;
pub use models::meal_draft::MealDraft;
pub use models::metrics_report::MetricsReport;
pub use models::session_token::{SESSION_MAX_AGE_SECS, SessionToken};

#[cfg(test)]
mod tests;
