use crate::Result as DbErrorResult;

use diet_core::{Identity, Meal, MealDraft};

use async_trait::async_trait;
use uuid::Uuid;

/// Per-identity meal history.
///
/// Reads and deletes are scoped to `owner`. `update` is not: it targets a meal
/// by id alone and rewrites it whoever owns it. Implementations keep that
/// asymmetry in exactly one filter so it can be closed in one place.
#[async_trait]
pub trait MealLedger: Send + Sync {
    /// Owner's meals in [`Meal::most_recent_first`] order
    async fn list_all(&self, owner: &Identity) -> DbErrorResult<Vec<Meal>>;

    /// `None` when the meal does not exist or belongs to someone else
    async fn get_one(&self, owner: &Identity, id: Uuid) -> DbErrorResult<Option<Meal>>;

    async fn create(&self, owner: &Identity, draft: MealDraft) -> DbErrorResult<Meal>;

    /// Full replace of the editable fields. `None` when no meal has this id.
    async fn update(&self, owner: &Identity, id: Uuid, draft: MealDraft)
    -> DbErrorResult<Option<Meal>>;

    /// `false` when no meal with this id belongs to `owner`
    async fn delete(&self, owner: &Identity, id: Uuid) -> DbErrorResult<bool>;
}
