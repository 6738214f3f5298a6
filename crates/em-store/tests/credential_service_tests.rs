//! Integration tests for the credential service against a wiremock record
//! store. These cover the full auth round trip: register, login, logout,
//! and the bearer header the client attaches afterwards.

use em_auth::{AuthError, LocalStore, SessionStore, token};
use em_core::{NewUser, User, UserRole};
use em_store::{CredentialService, RecordStoreClient};

use std::sync::Arc;

use uuid::Uuid;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

fn admin_user() -> User {
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        email: "admin@example.com".to_string(),
        first_name: "Site".to_string(),
        last_name: "Admin".to_string(),
        role: UserRole::Admin,
        password: "admin123".to_string(),
    }
}

fn service(uri: &str) -> (Arc<SessionStore>, CredentialService) {
    let session = Arc::new(SessionStore::new(LocalStore::memory()));
    let client = RecordStoreClient::new(uri, session.clone());
    (session.clone(), CredentialService::new(client, session))
}

#[tokio::test]
async fn test_login_success_yields_admin_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("email", "admin@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![admin_user()]))
        .mount(&mock_server)
        .await;

    let (session, service) = service(&mock_server.uri());
    let result = service.login("admin@example.com", "admin123").await.unwrap();

    let user = result.user.unwrap();
    assert_eq!(user.role, UserRole::Admin);
    assert_eq!(user.email, "admin@example.com");

    // Session holder agrees, and the token round-trips to the same identity
    assert!(session.is_authenticated());
    let tok = session.token().unwrap();
    assert!(!tok.is_empty());
    assert_eq!(token::decode(&tok).unwrap().user.email, "admin@example.com");
}

#[tokio::test]
async fn test_login_wrong_password_leaves_session_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("email", "admin@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![admin_user()]))
        .mount(&mock_server)
        .await;

    let (session, service) = service(&mock_server.uri());
    let result = service.login("admin@example.com", "wrong").await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials { .. })));
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
}

#[tokio::test]
async fn test_login_unknown_email_fails_with_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("email", "ghost@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<User>::new()))
        .mount(&mock_server)
        .await;

    let (session, service) = service(&mock_server.uri());
    let result = service.login("ghost@example.com", "whatever").await;

    assert!(matches!(
        result,
        Err(AuthError::NotFound { ref email, .. }) if email == "ghost@example.com"
    ));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_register_success_opens_session() {
    let mock_server = MockServer::start().await;
    let created = User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000002").unwrap(),
        email: "ada@example.com".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        role: UserRole::Attendee,
        password: "s3cret".to_string(),
    };

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("email", "ada@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<User>::new()))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(created.clone()))
        .mount(&mock_server)
        .await;

    let (session, service) = service(&mock_server.uri());
    let result = service
        .register(NewUser {
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: UserRole::Attendee,
            password: "s3cret".to_string(),
        })
        .await
        .unwrap();

    let user = result.user.unwrap();
    assert_eq!(user.email, "ada@example.com");
    assert!(session.is_authenticated());
    assert!(session.token().is_some());
}

#[tokio::test]
async fn test_register_then_login_yields_same_identity() {
    let mock_server = MockServer::start().await;
    let created = User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000003").unwrap(),
        email: "grace@example.com".to_string(),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        role: UserRole::Organizer,
        password: "c0b0l".to_string(),
    };

    // First lookup (registration pre-check) finds nothing, then the record
    // exists for the login lookup
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("email", "grace@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<User>::new()))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(created.clone()))
        .mount(&mock_server)
        .await;

    let (session, service) = service(&mock_server.uri());
    let registered = service
        .register(NewUser {
            email: "grace@example.com".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            role: UserRole::Organizer,
            password: "c0b0l".to_string(),
        })
        .await
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("email", "grace@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![created.clone()]))
        .mount(&mock_server)
        .await;

    service.logout();
    let logged_in = service.login("grace@example.com", "c0b0l").await.unwrap();

    // Same identity both times, never carrying the password
    assert_eq!(registered.user, logged_in.user);
    assert_eq!(logged_in.user.unwrap().id, created.id);
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn test_register_duplicate_fails_without_mutating_store() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("email", "admin@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![admin_user()]))
        .mount(&mock_server)
        .await;

    // The create endpoint must never be hit
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (session, service) = service(&mock_server.uri());
    let result = service
        .register(NewUser {
            email: "admin@example.com".to_string(),
            first_name: "Second".to_string(),
            last_name: "Admin".to_string(),
            role: UserRole::Admin,
            password: "admin123".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthError::DuplicateIdentity { .. })));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_request_after_login_carries_stored_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("email", "admin@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![admin_user()]))
        .mount(&mock_server)
        .await;

    let (session, service) = service(&mock_server.uri());
    service.login("admin@example.com", "admin123").await.unwrap();
    let tok = session.token().unwrap();

    Mock::given(method("GET"))
        .and(path("/events"))
        .and(header("Authorization", format!("Bearer {}", tok).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<em_core::Event>::new()))
        .mount(&mock_server)
        .await;

    let client = RecordStoreClient::new(&mock_server.uri(), session);
    assert!(client.list_events().await.is_ok());
}

#[tokio::test]
async fn test_logout_clears_session_and_bearer_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("email", "admin@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![admin_user()]))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<em_core::Event>::new()))
        .mount(&mock_server)
        .await;

    let (session, service) = service(&mock_server.uri());
    service.login("admin@example.com", "admin123").await.unwrap();

    service.logout();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);

    let client = RecordStoreClient::new(&mock_server.uri(), session);
    client.list_events().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let events_request = requests
        .iter()
        .find(|r| r.url.path() == "/events")
        .unwrap();
    assert!(!events_request.headers.contains_key("authorization"));
}
