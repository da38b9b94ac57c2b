use crate::{ApiResult, Contracted};

use diet_core::{
    CoreError, FieldContract, FieldKind, FieldRule, InputContract, MealDraft, parse_instant,
};

use serde::Deserialize;

/// Body of both `POST /meal` and `PUT /meal/{id}`; update is a full replace.
#[derive(Debug, Deserialize)]
pub struct MealRequest {
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    /// `YYYY-MM-DD` or RFC 3339
    pub date: String,
}

impl Contracted for MealRequest {
    const CONTRACT: InputContract = InputContract::new(&[
        FieldContract::new(
            "name",
            FieldKind::Text,
            &[FieldRule::NonBlank, FieldRule::MaxLength(120)],
        ),
        FieldContract::new("description", FieldKind::Text, &[FieldRule::MaxLength(2000)]),
        FieldContract::new("is_on_diet", FieldKind::Boolean, &[]),
        FieldContract::new("date", FieldKind::Instant, &[]),
    ]);
}

impl MealRequest {
    pub fn into_draft(self) -> ApiResult<MealDraft> {
        let date = parse_instant(&self.date)
            .ok_or_else(|| CoreError::field("date", format!("invalid date '{}'", self.date)))?;

        Ok(MealDraft::new(
            self.name,
            self.description,
            self.is_on_diet,
            date,
        ))
    }
}
