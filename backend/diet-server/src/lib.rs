pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_logging;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        caller_session::CallerSession,
        current_identity::CurrentIdentity,
        validated_json::{Contracted, ValidatedJson},
    },
    identities::{
        create_identity_request::CreateIdentityRequest,
        identities::{create_identity, list_identities},
        identity_dto::IdentityDto,
        identity_list_response::IdentityListResponse,
    },
    meals::{
        meal_dto::MealDto,
        meal_list_response::MealListResponse,
        meal_lookup_response::MealLookupResponse,
        meal_request::MealRequest,
        meal_response::MealResponse,
        meals::{create_meal, delete_meal, get_meal, list_meals, update_meal},
    },
    metrics::{metrics::get_metrics, metrics_response::MetricsResponse},
};
pub use app_state::AppState;

pub use crate::routes::build_router;
