use diet_core::{Identity, IdentityDraft, MealDraft, SessionToken};

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Creates an identity with a fresh session token (not persisted)
pub fn create_test_identity_model(email: &str) -> Identity {
    Identity::new(
        IdentityDraft::new(
            "Caio",
            email,
            Some("https://example.com/avatar.png".to_string()),
        ),
        SessionToken::generate(),
    )
}

/// A fixed instant meals are laid out from
pub fn base_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 25, 12, 0, 0).unwrap()
}

/// Creates a meal draft `hours_offset` hours after the base instant
pub fn create_test_meal_draft(name: &str, is_on_diet: bool, hours_offset: i64) -> MealDraft {
    MealDraft::new(
        name,
        "Ovo com pao",
        is_on_diet,
        base_instant() + Duration::hours(hours_offset),
    )
}
