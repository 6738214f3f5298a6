use crate::{NewUser, PublicUser, UserRole};

fn sample_new_user() -> NewUser {
    NewUser {
        email: "ada@example.com".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        role: UserRole::Organizer,
        password: "s3cret".to_string(),
    }
}

#[test]
fn test_into_user_keeps_fields_and_assigns_id() {
    let user = sample_new_user().into_user();

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.role, UserRole::Organizer);
    assert_eq!(user.password, "s3cret");
    assert!(!user.id.is_nil());
}

#[test]
fn test_public_user_drops_password() {
    let user = sample_new_user().into_user();
    let public = PublicUser::from(&user);

    assert_eq!(public.id, user.id);
    assert_eq!(public.email, user.email);
    assert_eq!(public.display_name(), "Ada Lovelace");

    // Serialized form must never contain the password.
    let json = serde_json::to_string(&public).unwrap();
    assert!(!json.contains("s3cret"));
    assert!(!json.contains("password"));
}
