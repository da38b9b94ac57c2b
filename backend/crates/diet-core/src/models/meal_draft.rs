use chrono::{DateTime, SubsecRound, Utc};

/// Already-validated meal fields, shared by create and update.
///
/// `date` is held at microsecond resolution so every ledger stores it unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDraft {
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    pub date: DateTime<Utc>,
}

impl MealDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        is_on_diet: bool,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            is_on_diet,
            date: date.trunc_subsecs(6),
        }
    }
}
