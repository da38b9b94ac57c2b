//! Axum extractors for session handling and contract-checked bodies

pub mod caller_session;
pub mod current_identity;
pub mod validated_json;
