use diet_core::Meal;

use chrono::SecondsFormat;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MealDto {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    /// RFC 3339, UTC
    pub date: String,
    pub created_at: i64,
}

impl From<Meal> for MealDto {
    fn from(meal: Meal) -> Self {
        Self {
            id: meal.id.to_string(),
            user_id: meal.user_id.to_string(),
            name: meal.name,
            description: meal.description,
            is_on_diet: meal.is_on_diet,
            date: meal.date.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            created_at: meal.created_at.timestamp(),
        }
    }
}
