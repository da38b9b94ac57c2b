use diet_auth::{SessionCookie, SessionResolver};
use diet_db::{
    IdentityRepository, IdentityStore, InMemoryIdentityStore, InMemoryMealLedger, MealLedger,
    MealRepository,
};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub identities: Arc<dyn IdentityStore>,
    pub meals: Arc<dyn MealLedger>,
    pub resolver: Arc<SessionResolver>,
    pub session_cookie: SessionCookie,
    /// Backing pool, when the stores are SQLite-backed
    pub pool: Option<SqlitePool>,
}

impl AppState {
    pub fn new(
        identities: Arc<dyn IdentityStore>,
        meals: Arc<dyn MealLedger>,
        session_cookie: SessionCookie,
    ) -> Self {
        Self {
            resolver: Arc::new(SessionResolver::new(identities.clone())),
            identities,
            meals,
            session_cookie,
            pool: None,
        }
    }

    pub fn sqlite(pool: SqlitePool, session_cookie: SessionCookie) -> Self {
        let mut state = Self::new(
            Arc::new(IdentityRepository::new(pool.clone())),
            Arc::new(MealRepository::new(pool.clone())),
            session_cookie,
        );
        state.pool = Some(pool);
        state
    }

    pub fn in_memory(session_cookie: SessionCookie) -> Self {
        Self::new(
            Arc::new(InMemoryIdentityStore::new()),
            Arc::new(InMemoryMealLedger::new()),
            session_cookie,
        )
    }
}
