use crate::MealDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MealListResponse {
    pub meals: Vec<MealDto>,
}
