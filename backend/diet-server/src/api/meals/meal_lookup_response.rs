use crate::MealDto;

use serde::Serialize;

/// `GET /meal/{id}` answers 200 either way; a miss is `{"meal": null}`
#[derive(Debug, Serialize)]
pub struct MealLookupResponse {
    pub meal: Option<MealDto>,
}
