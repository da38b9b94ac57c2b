use crate::{MealLedger, Result as DbErrorResult};

use diet_core::{Identity, Meal, MealDraft};

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryMealLedger {
    meals: RwLock<HashMap<Uuid, Meal>>,
}

impl InMemoryMealLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MealLedger for InMemoryMealLedger {
    async fn list_all(&self, owner: &Identity) -> DbErrorResult<Vec<Meal>> {
        let meals = self.meals.read().await;

        let mut owned: Vec<Meal> = meals
            .values()
            .filter(|m| m.user_id == owner.id)
            .cloned()
            .collect();
        owned.sort_by(Meal::most_recent_first);

        Ok(owned)
    }

    async fn get_one(&self, owner: &Identity, id: Uuid) -> DbErrorResult<Option<Meal>> {
        let meals = self.meals.read().await;
        Ok(meals.get(&id).filter(|m| m.user_id == owner.id).cloned())
    }

    async fn create(&self, owner: &Identity, draft: MealDraft) -> DbErrorResult<Meal> {
        let meal = Meal::new(owner.id, draft);
        self.meals.write().await.insert(meal.id, meal.clone());
        Ok(meal)
    }

    async fn update(
        &self,
        _owner: &Identity,
        id: Uuid,
        draft: MealDraft,
    ) -> DbErrorResult<Option<Meal>> {
        // Matches on id alone; the caller's ownership is not part of the filter.
        let mut meals = self.meals.write().await;

        Ok(meals.get_mut(&id).map(|meal| {
            meal.apply(draft);
            meal.clone()
        }))
    }

    async fn delete(&self, owner: &Identity, id: Uuid) -> DbErrorResult<bool> {
        let mut meals = self.meals.write().await;

        let owned = meals.get(&id).is_some_and(|m| m.user_id == owner.id);
        if owned {
            meals.remove(&id);
        }

        Ok(owned)
    }
}
