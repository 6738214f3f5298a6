//! Record-store access and the credential service.
//!
//! The external store is a generic collection-per-type REST server; nothing
//! here assumes any server-side business logic. Authentication decisions are
//! made entirely on this side of the wire.

pub mod client;
pub mod credential_service;
pub mod error;

pub use client::RecordStoreClient;
pub use credential_service::CredentialService;
pub use error::{ClientError, ClientResult};
