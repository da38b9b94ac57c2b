use crate::{Identity, IdentityDraft, SessionToken};

#[test]
fn test_identity_new() {
    let token = SessionToken::generate();
    let draft = IdentityDraft::new("Caio", "caio@example.com", Some("https://img".to_string()));

    let identity = Identity::new(draft, token.clone());

    assert_eq!(identity.name, "Caio");
    assert_eq!(identity.email, "caio@example.com");
    assert_eq!(identity.avatar_url.as_deref(), Some("https://img"));
    assert_eq!(identity.session_token, Some(token.clone()));
    assert!(identity.owns_token(&token));
}

#[test]
fn test_identity_does_not_own_foreign_token() {
    let identity = Identity::new(
        IdentityDraft::new("Caio", "caio@example.com", None),
        SessionToken::generate(),
    );

    assert!(!identity.owns_token(&SessionToken::generate()));
}

#[test]
fn test_identity_serialization_skips_session_token() {
    let token = SessionToken::from("secret-token");
    let identity = Identity::new(IdentityDraft::new("Caio", "caio@example.com", None), token);

    let json = serde_json::to_string(&identity).unwrap();

    assert!(!json.contains("secret-token"));
    assert!(!json.contains("session_token"));
}
