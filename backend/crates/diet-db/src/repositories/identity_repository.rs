use crate::{DbError, IdentityStore, Result as DbErrorResult};

use diet_core::{Identity, SessionToken};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// SQLite-backed identity store over the `users` table
pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct IdentityRow {
    id: String,
    session_id: Option<String>,
    name: String,
    email: String,
    img_url: Option<String>,
    created_at: i64,
}

impl TryFrom<IdentityRow> for Identity {
    type Error = DbError;

    fn try_from(r: IdentityRow) -> DbErrorResult<Self> {
        Ok(Identity {
            id: Uuid::parse_str(&r.id).map_err(|e| {
                DbError::corrupt_row(format!("Invalid UUID in users.id: {}", e))
            })?,
            name: r.name,
            email: r.email,
            avatar_url: r.img_url,
            session_token: r.session_id.map(SessionToken::from),
            created_at: DateTime::<Utc>::from_timestamp(r.created_at, 0).ok_or_else(|| {
                DbError::corrupt_row(format!("Invalid users.created_at: {}", r.created_at))
            })?,
        })
    }
}

#[async_trait]
impl IdentityStore for IdentityRepository {
    async fn find_by_token(&self, token: &SessionToken) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
              SELECT id, session_id, name, email, img_url, created_at
              FROM users
              WHERE session_id = ?
              "#,
        )
        .bind(token.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Identity::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
              SELECT id, session_id, name, email, img_url, created_at
              FROM users
              WHERE email = ?
              "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Identity::try_from).transpose()
    }

    async fn insert(&self, identity: &Identity) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (id, session_id, name, email, img_url, created_at)
              VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(identity.id.to_string())
        .bind(identity.session_token.as_ref().map(SessionToken::as_str))
        .bind(&identity.name)
        .bind(&identity.email)
        .bind(identity.avatar_url.as_deref())
        .bind(identity.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_all(&self) -> DbErrorResult<Vec<Identity>> {
        let rows = sqlx::query_as::<_, IdentityRow>(
            r#"
              SELECT id, session_id, name, email, img_url, created_at
              FROM users
              ORDER BY created_at ASC, id ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Identity::try_from).collect()
    }
}
