use crate::Result as DbErrorResult;

use diet_core::{Identity, SessionToken};

use async_trait::async_trait;

/// Durable session token -> identity mapping.
///
/// Identities are never updated or deleted. `insert` must reject a duplicate
/// email or session token with [`crate::DbError::UniqueViolation`].
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_by_token(&self, token: &SessionToken) -> DbErrorResult<Option<Identity>>;

    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>>;

    async fn insert(&self, identity: &Identity) -> DbErrorResult<()>;

    /// Every identity, oldest first
    async fn list_all(&self) -> DbErrorResult<Vec<Identity>>;
}
