use crate::MealDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub meal: MealDto,
}
