use crate::{SESSION_MAX_AGE_SECS, SessionToken};

use uuid::Uuid;

#[test]
fn test_generated_tokens_are_uuid_shaped_and_distinct() {
    let a = SessionToken::generate();
    let b = SessionToken::generate();

    assert_ne!(a, b);
    assert!(Uuid::parse_str(a.as_str()).is_ok());
}

#[test]
fn test_redacted_keeps_only_prefix() {
    let token = SessionToken::from("0123456789abcdef");

    assert_eq!(token.redacted(), "01234567…");
}

#[test]
fn test_max_age_is_seven_days() {
    assert_eq!(SESSION_MAX_AGE_SECS, 604_800);
}
