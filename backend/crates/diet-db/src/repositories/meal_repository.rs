use crate::{DbError, MealLedger, Result as DbErrorResult};

use diet_core::{Identity, Meal, MealDraft};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// SQLite-backed meal ledger over the `meals` table.
///
/// `date` is persisted as UTC microseconds, `created_at` as UTC seconds. Writes
/// use `RETURNING` so callers get back exactly what was stored.
pub struct MealRepository {
    pool: SqlitePool,
}

impl MealRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MealRow {
    id: String,
    user_id: String,
    name: String,
    description: String,
    is_on_diet: bool,
    date: i64,
    created_at: i64,
}

impl TryFrom<MealRow> for Meal {
    type Error = DbError;

    fn try_from(r: MealRow) -> DbErrorResult<Self> {
        Ok(Meal {
            id: Uuid::parse_str(&r.id)
                .map_err(|e| DbError::corrupt_row(format!("Invalid UUID in meals.id: {}", e)))?,
            user_id: Uuid::parse_str(&r.user_id).map_err(|e| {
                DbError::corrupt_row(format!("Invalid UUID in meals.user_id: {}", e))
            })?,
            name: r.name,
            description: r.description,
            is_on_diet: r.is_on_diet,
            date: DateTime::<Utc>::from_timestamp_micros(r.date)
                .ok_or_else(|| DbError::corrupt_row(format!("Invalid meals.date: {}", r.date)))?,
            created_at: DateTime::<Utc>::from_timestamp(r.created_at, 0).ok_or_else(|| {
                DbError::corrupt_row(format!("Invalid meals.created_at: {}", r.created_at))
            })?,
        })
    }
}

#[async_trait]
impl MealLedger for MealRepository {
    async fn list_all(&self, owner: &Identity) -> DbErrorResult<Vec<Meal>> {
        let rows = sqlx::query_as::<_, MealRow>(
            r#"
              SELECT id, user_id, name, description, is_on_diet, date, created_at
              FROM meals
              WHERE user_id = ?
              ORDER BY date DESC, created_at DESC, id DESC
              "#,
        )
        .bind(owner.id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Meal::try_from).collect()
    }

    async fn get_one(&self, owner: &Identity, id: Uuid) -> DbErrorResult<Option<Meal>> {
        let row = sqlx::query_as::<_, MealRow>(
            r#"
              SELECT id, user_id, name, description, is_on_diet, date, created_at
              FROM meals
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(id.to_string())
        .bind(owner.id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Meal::try_from).transpose()
    }

    async fn create(&self, owner: &Identity, draft: MealDraft) -> DbErrorResult<Meal> {
        let meal = Meal::new(owner.id, draft);

        let row = sqlx::query_as::<_, MealRow>(
            r#"
              INSERT INTO meals (id, user_id, name, description, is_on_diet, date, created_at)
              VALUES (?, ?, ?, ?, ?, ?, ?)
              RETURNING id, user_id, name, description, is_on_diet, date, created_at
              "#,
        )
        .bind(meal.id.to_string())
        .bind(meal.user_id.to_string())
        .bind(&meal.name)
        .bind(&meal.description)
        .bind(meal.is_on_diet)
        .bind(meal.date.timestamp_micros())
        .bind(meal.created_at.timestamp())
        .fetch_one(&self.pool)
        .await?;

        Meal::try_from(row)
    }

    async fn update(
        &self,
        _owner: &Identity,
        id: Uuid,
        draft: MealDraft,
    ) -> DbErrorResult<Option<Meal>> {
        // Matches on id alone; the caller's ownership is not part of the filter.
        let row = sqlx::query_as::<_, MealRow>(
            r#"
              UPDATE meals
              SET name = ?, description = ?, is_on_diet = ?, date = ?
              WHERE id = ?
              RETURNING id, user_id, name, description, is_on_diet, date, created_at
              "#,
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.is_on_diet)
        .bind(draft.date.timestamp_micros())
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Meal::try_from).transpose()
    }

    async fn delete(&self, owner: &Identity, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM meals WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(owner.id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
