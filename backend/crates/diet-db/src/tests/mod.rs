
use diet_core::{Identity, IdentityDraft, MealDraft, SessionToken};

use chrono::{TimeZone, Utc};

pub(crate) fn identity(email: &str) -> Identity {
    Identity::new(
        IdentityDraft::new("Test User", email, None),
        SessionToken::generate(),
    )
}

pub(crate) fn draft(name: &str, is_on_diet: bool, day: u32) -> MealDraft {
    MealDraft::new(
        name,
        "Ovo com pao",
        is_on_diet,
        Utc.with_ymd_and_hms(2024, 6, day, 19, 0, 0).unwrap(),
    )
}
