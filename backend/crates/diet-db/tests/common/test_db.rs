use diet_core::Identity;
use diet_db::{IdentityRepository, IdentityStore};

use sqlx::SqlitePool;

use crate::common::create_test_identity_model;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    diet_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts an identity so meals have an owner to reference
pub async fn create_test_identity(pool: &SqlitePool, email: &str) -> Identity {
    let identity = create_test_identity_model(email);

    IdentityRepository::new(pool.clone())
        .insert(&identity)
        .await
        .expect("Failed to create test identity");

    identity
}
