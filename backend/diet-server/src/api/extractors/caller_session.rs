use crate::{AppState, ApiError};

use diet_core::SessionToken;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use http::header::COOKIE;

/// Session token presented by the caller, if any.
///
/// Never rejects: a missing or unreadable cookie is simply `None`.
pub struct CallerSession(pub Option<SessionToken>);

impl CallerSession {
    pub fn from_parts(parts: &Parts, state: &AppState) -> Self {
        let token = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|header| state.session_cookie.parse(header));

        CallerSession(token)
    }
}

impl FromRequestParts<AppState> for CallerSession {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let session = CallerSession::from_parts(parts, state);
        async move { Ok(session) }
    }
}
