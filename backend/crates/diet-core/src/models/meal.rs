use crate::MealDraft;

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    pub id: Uuid,
    /// Owning identity
    pub user_id: Uuid,

    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    /// When the meal was eaten
    pub date: DateTime<Utc>,

    // Audit
    pub created_at: DateTime<Utc>,
}

impl Meal {
    pub fn new(user_id: Uuid, draft: MealDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: draft.name,
            description: draft.description,
            is_on_diet: draft.is_on_diet,
            date: draft.date,
            created_at: Utc::now(),
        }
    }

    /// Full replace of the caller-editable fields
    pub fn apply(&mut self, draft: MealDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.is_on_diet = draft.is_on_diet;
        self.date = draft.date;
    }

    /// Canonical meal order: most recent first.
    ///
    /// Ties on `date` fall back to `created_at` then `id`, so the order is total
    /// and every reader of a meal history sees the same sequence.
    pub fn most_recent_first(a: &Meal, b: &Meal) -> Ordering {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| b.id.cmp(&a.id))
    }
}
