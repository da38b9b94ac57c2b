use crate::{AuthError, Registration, Result as AuthErrorResult};

use diet_core::{Identity, IdentityDraft, SessionToken};
use diet_db::IdentityStore;

use std::sync::Arc;

/// Maps a caller's session token onto an identity, and mints identities.
pub struct SessionResolver {
    identities: Arc<dyn IdentityStore>,
}

impl SessionResolver {
    pub fn new(identities: Arc<dyn IdentityStore>) -> Self {
        Self { identities }
    }

    /// Resolve the identity behind `token`.
    ///
    /// No token is `Unauthenticated`; a token nobody owns is `IdentityNotFound`.
    pub async fn resolve(&self, token: Option<&SessionToken>) -> AuthErrorResult<Identity> {
        let token = token.ok_or_else(AuthError::unauthenticated)?;

        match self.identities.find_by_token(token).await? {
            Some(identity) => Ok(identity),
            None => {
                log::debug!("No identity bound to session {}", token.redacted());
                Err(AuthError::identity_not_found())
            }
        }
    }

    /// Create an identity bound to the caller's session.
    ///
    /// A caller without a token gets a freshly minted one back in
    /// [`Registration::issued_token`]. A caller that already carries a token
    /// keeps it; if that token already belongs to someone the call fails.
    pub async fn register(
        &self,
        token: Option<SessionToken>,
        draft: IdentityDraft,
    ) -> AuthErrorResult<Registration> {
        if self.identities.find_by_email(&draft.email).await?.is_some() {
            return Err(AuthError::duplicate(format!(
                "email {} is taken",
                draft.email
            )));
        }

        let (token, issued) = match token {
            Some(existing) => {
                if self.identities.find_by_token(&existing).await?.is_some() {
                    return Err(AuthError::duplicate("session already has an identity"));
                }
                (existing, false)
            }
            None => (SessionToken::generate(), true),
        };

        let identity = Identity::new(draft, token.clone());

        // A concurrent insert of the same email or token surfaces here as a unique violation
        self.identities.insert(&identity).await?;

        log::info!(
            "Registered identity {} (session {})",
            identity.id,
            token.redacted()
        );

        Ok(Registration {
            identity,
            issued_token: issued.then_some(token),
        })
    }
}
