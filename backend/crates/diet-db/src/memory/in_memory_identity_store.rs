use crate::{DbError, IdentityStore, Result as DbErrorResult};

use diet_core::{Identity, SessionToken};

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryIdentityStore {
    identities: RwLock<HashMap<Uuid, Identity>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn find_by_token(&self, token: &SessionToken) -> DbErrorResult<Option<Identity>> {
        let identities = self.identities.read().await;
        Ok(identities.values().find(|i| i.owns_token(token)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let identities = self.identities.read().await;
        Ok(identities.values().find(|i| i.email == email).cloned())
    }

    async fn insert(&self, identity: &Identity) -> DbErrorResult<()> {
        // Uniqueness checks and the insert share one write lock
        let mut identities = self.identities.write().await;

        if identities.contains_key(&identity.id) {
            return Err(DbError::unique("users.id"));
        }

        if identities.values().any(|i| i.email == identity.email) {
            return Err(DbError::unique("users.email"));
        }

        if let Some(token) = identity.session_token.as_ref()
            && identities.values().any(|i| i.owns_token(token))
        {
            return Err(DbError::unique("users.session_id"));
        }

        identities.insert(identity.id, identity.clone());

        Ok(())
    }

    async fn list_all(&self) -> DbErrorResult<Vec<Identity>> {
        let identities = self.identities.read().await;

        let mut all: Vec<Identity> = identities.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        Ok(all)
    }
}
