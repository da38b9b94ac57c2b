use crate::{IdentityDraft, SessionToken};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    /// Unique across all identities
    pub email: String,
    pub avatar_url: Option<String>,

    /// At most one live session per identity
    #[serde(skip_serializing)]
    pub session_token: Option<SessionToken>,

    // Audit
    pub created_at: DateTime<Utc>,
}

impl Identity {
    pub fn new(draft: IdentityDraft, session_token: SessionToken) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            email: draft.email,
            avatar_url: draft.avatar_url,
            session_token: Some(session_token),
            created_at: Utc::now(),
        }
    }

    pub fn owns_token(&self, token: &SessionToken) -> bool {
        self.session_token.as_ref() == Some(token)
    }
}
