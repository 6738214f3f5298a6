use crate::{PublicUser, Session, UserRole};

use uuid::Uuid;

fn sample_public_user() -> PublicUser {
    PublicUser {
        id: Uuid::new_v4(),
        email: "ada@example.com".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        role: UserRole::Attendee,
    }
}

#[test]
fn test_empty_session_is_not_authenticated() {
    let session = Session::empty();
    assert!(!session.is_authenticated());
    assert!(session.token.is_none());
}

#[test]
fn test_authenticated_session_has_identity_and_token() {
    let session = Session::authenticated(sample_public_user(), "tok-1".to_string());
    assert!(session.is_authenticated());
    assert_eq!(session.token.as_deref(), Some("tok-1"));
}
