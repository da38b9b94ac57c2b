use crate::{AppState, ApiError, CallerSession};

use diet_core::Identity;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Identity bound to the caller's session cookie.
///
/// Rejects with 401 when no cookie is sent and 404 when the token is unknown.
pub struct CurrentIdentity(pub Identity);

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let CallerSession(token) = CallerSession::from_parts(parts, state);
        let resolver = state.resolver.clone();

        async move {
            let identity = resolver.resolve(token.as_ref()).await?;
            log::debug!("Request authenticated as {}", identity.id);
            Ok(CurrentIdentity(identity))
        }
    }
}
