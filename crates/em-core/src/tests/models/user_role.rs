use crate::{CoreError, UserRole};

use std::str::FromStr;

#[test]
fn test_user_role_round_trip() {
    for role in [UserRole::Admin, UserRole::Organizer, UserRole::Attendee] {
        assert_eq!(UserRole::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_user_role_default_is_attendee() {
    assert_eq!(UserRole::default(), UserRole::Attendee);
}

#[test]
fn test_user_role_rejects_unknown_value() {
    let result = UserRole::from_str("superuser");
    assert!(matches!(
        result,
        Err(CoreError::InvalidUserRole { ref value, .. }) if value == "superuser"
    ));
}

#[test]
fn test_user_role_serde_uses_snake_case() {
    let json = serde_json::to_string(&UserRole::Admin).unwrap();
    assert_eq!(json, "\"admin\"");

    let role: UserRole = serde_json::from_str("\"organizer\"").unwrap();
    assert_eq!(role, UserRole::Organizer);
}
