pub mod identity;
pub mod identity_draft;
pub mod meal;
pub mod meal_draft;
pub mod metrics_report;
pub mod session_token;
