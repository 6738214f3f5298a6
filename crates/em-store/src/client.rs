use crate::{ClientError, ClientResult};

use em_auth::SessionStore;
use em_core::{Event, Feedback, Ticket, TicketStatus, User};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use uuid::Uuid;

/// HTTP client for the external record store.
///
/// The store exposes one collection per record type with query-by-field
/// filtering; this client only shapes requests and decodes responses.
pub struct RecordStoreClient {
    pub base_url: String,
    session: Arc<SessionStore>,
    http: ReqwestClient,
}

impl RecordStoreClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Record store URL (e.g., "http://localhost:3000")
    /// * `session` - Session holder consulted for the bearer token
    pub fn new(base_url: &str, session: Arc<SessionStore>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            http: ReqwestClient::new(),
        }
    }

    /// Create a client with a request timeout (from configuration).
    pub fn with_timeout(
        base_url: &str,
        session: Arc<SessionStore>,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let http = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::from_reqwest)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            http,
        })
    }

    /// Build a request, attaching the bearer credential.
    ///
    /// The token is read from the session at dispatch time; no token means
    /// the request goes out unchanged.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method, &url);

        if let Some(token) = self.session.token() {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        req
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            let message = body
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("record store rejected the request")
                .to_string();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(body)
    }

    /// Execute and decode into a typed record
    async fn fetch<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let body = self.execute(req).await?;
        serde_json::from_value(body).map_err(ClientError::from_json)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Query identity records by exact email
    pub async fn find_users_by_email(&self, email: &str) -> ClientResult<Vec<User>> {
        let req = self.request(Method::GET, &format!("/users?email={}", email));
        self.fetch(req).await
    }

    /// Create a new identity record
    pub async fn create_user(&self, user: &User) -> ClientResult<User> {
        let req = self.request(Method::POST, "/users").json(user);
        self.fetch(req).await
    }

    // =========================================================================
    // Event Operations
    // =========================================================================

    /// List all events
    pub async fn list_events(&self) -> ClientResult<Vec<Event>> {
        let req = self.request(Method::GET, "/events");
        self.fetch(req).await
    }

    /// Get an event by ID
    pub async fn get_event(&self, id: Uuid) -> ClientResult<Event> {
        let req = self.request(Method::GET, &format!("/events/{}", id));
        self.fetch(req).await
    }

    /// Create a new event
    pub async fn create_event(&self, event: &Event) -> ClientResult<Event> {
        let req = self.request(Method::POST, "/events").json(event);
        self.fetch(req).await
    }

    /// Replace an event record
    pub async fn update_event(&self, event: &Event) -> ClientResult<Event> {
        let req = self
            .request(Method::PUT, &format!("/events/{}", event.id))
            .json(event);
        self.fetch(req).await
    }

    /// Delete an event
    pub async fn delete_event(&self, id: Uuid) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/events/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // Ticket Operations
    // =========================================================================

    /// List tickets booked by a user
    pub async fn list_tickets_for_user(&self, user_id: Uuid) -> ClientResult<Vec<Ticket>> {
        let req = self.request(Method::GET, &format!("/tickets?user_id={}", user_id));
        self.fetch(req).await
    }

    /// List tickets booked for an event
    pub async fn list_tickets_for_event(&self, event_id: Uuid) -> ClientResult<Vec<Ticket>> {
        let req = self.request(Method::GET, &format!("/tickets?event_id={}", event_id));
        self.fetch(req).await
    }

    /// Create a booking
    pub async fn create_ticket(&self, ticket: &Ticket) -> ClientResult<Ticket> {
        let req = self.request(Method::POST, "/tickets").json(ticket);
        self.fetch(req).await
    }

    /// Cancel a booking (partial update of its status)
    pub async fn cancel_ticket(&self, id: Uuid) -> ClientResult<Ticket> {
        let req = self
            .request(Method::PATCH, &format!("/tickets/{}", id))
            .json(&json!({ "status": TicketStatus::Cancelled }));
        self.fetch(req).await
    }

    // =========================================================================
    // Feedback Operations
    // =========================================================================

    /// List feedback left on an event
    pub async fn list_feedback_for_event(&self, event_id: Uuid) -> ClientResult<Vec<Feedback>> {
        let req = self.request(Method::GET, &format!("/feedback?event_id={}", event_id));
        self.fetch(req).await
    }

    /// Create feedback on an event
    pub async fn create_feedback(&self, feedback: &Feedback) -> ClientResult<Feedback> {
        let req = self.request(Method::POST, "/feedback").json(feedback);
        self.fetch(req).await
    }
}
