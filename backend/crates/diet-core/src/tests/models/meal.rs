use crate::{Meal, MealDraft};

use std::cmp::Ordering;

use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

fn draft(name: &str) -> MealDraft {
    MealDraft::new(
        name,
        "Ovo com pao",
        true,
        Utc.with_ymd_and_hms(2024, 6, 25, 19, 0, 0).unwrap(),
    )
}

#[test]
fn test_meal_new() {
    let owner = Uuid::new_v4();
    let meal = Meal::new(owner, draft("Janta"));

    assert_eq!(meal.user_id, owner);
    assert_eq!(meal.name, "Janta");
    assert_eq!(meal.description, "Ovo com pao");
    assert!(meal.is_on_diet);
}

#[test]
fn test_apply_replaces_all_editable_fields() {
    let mut meal = Meal::new(Uuid::new_v4(), draft("Janta"));
    let id = meal.id;
    let owner = meal.user_id;
    let new_date = Utc.with_ymd_and_hms(2024, 6, 26, 8, 0, 0).unwrap();

    meal.apply(MealDraft::new("Cafe", "Pao", false, new_date));

    assert_eq!(meal.id, id);
    assert_eq!(meal.user_id, owner);
    assert_eq!(meal.name, "Cafe");
    assert_eq!(meal.description, "Pao");
    assert!(!meal.is_on_diet);
    assert_eq!(meal.date, new_date);
}

#[test]
fn test_most_recent_first_orders_by_date_descending() {
    let older = Meal::new(Uuid::new_v4(), draft("older"));
    let mut newer = Meal::new(Uuid::new_v4(), draft("newer"));
    newer.date = older.date + Duration::hours(1);

    assert_eq!(Meal::most_recent_first(&newer, &older), Ordering::Less);
    assert_eq!(Meal::most_recent_first(&older, &newer), Ordering::Greater);
}

#[test]
fn test_most_recent_first_breaks_date_ties_deterministically() {
    let a = Meal::new(Uuid::new_v4(), draft("a"));
    let mut b = a.clone();
    b.id = Uuid::new_v4();

    let forward = Meal::most_recent_first(&a, &b);
    let backward = Meal::most_recent_first(&b, &a);

    assert_ne!(forward, Ordering::Equal);
    assert_eq!(forward, backward.reverse());
}

#[test]
fn test_draft_holds_date_at_microsecond_resolution() {
    let whole = Utc.with_ymd_and_hms(2024, 6, 25, 12, 0, 0).unwrap();

    let draft = MealDraft::new("Janta", "", true, whole + Duration::nanoseconds(123_456_789));

    assert_eq!(draft.date, whole + Duration::microseconds(123_456));
}
