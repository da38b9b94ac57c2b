use crate::{AppState, ApiError};

use diet_core::InputContract;

use std::future::Future;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Request body type with a declared input contract
pub trait Contracted {
    const CONTRACT: InputContract;
}

/// JSON body checked against `T::CONTRACT` before it is deserialized.
///
/// Unparseable JSON is `BAD_REQUEST`; a contract violation is
/// `VALIDATION_ERROR` naming the first offending field.
pub struct ValidatedJson<T>(pub T);

impl<T> FromRequest<AppState> for ValidatedJson<T>
where
    T: Contracted + DeserializeOwned + Send,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Json(value) = Json::<Value>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

            T::CONTRACT.check(&value)?;

            let parsed = serde_json::from_value(value)
                .map_err(|e| ApiError::bad_request(format!("Malformed body: {}", e)))?;

            Ok(ValidatedJson(parsed))
        }
    }
}
