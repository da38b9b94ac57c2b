use crate::{Contracted, MealRequest};

use chrono::{TimeZone, Utc};
use serde_json::json;

#[test]
fn test_contract_rejects_string_flag() {
    let body = json!({
        "name": "Janta",
        "description": "Ovo com pao",
        "is_on_diet": "true",
        "date": "2024-06-25"
    });

    assert!(MealRequest::CONTRACT.check(&body).is_err());
}

#[test]
fn test_contract_requires_description_but_allows_empty() {
    let missing = json!({ "name": "Janta", "is_on_diet": true, "date": "2024-06-25" });
    let empty = json!({ "name": "Janta", "description": "", "is_on_diet": true, "date": "2024-06-25" });

    assert!(MealRequest::CONTRACT.check(&missing).is_err());
    assert!(MealRequest::CONTRACT.check(&empty).is_ok());
}

#[test]
fn test_into_draft_normalises_date_to_utc() {
    let req = MealRequest {
        name: "Janta".into(),
        description: "".into(),
        is_on_diet: false,
        date: "2024-06-25T21:00:00-03:00".into(),
    };

    let draft = req.into_draft().unwrap();

    assert_eq!(draft.date, Utc.with_ymd_and_hms(2024, 6, 26, 0, 0, 0).unwrap());
    assert!(!draft.is_on_diet);
}
