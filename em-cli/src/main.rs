//! em - Event management CLI
//!
//! A command-line front end for the event-management record store. All
//! authentication runs client-side; the store itself is a generic
//! collection server.
//!
//! # Examples
//!
//! ```bash
//! # Sign in
//! em auth login --email admin@example.com --password admin123
//!
//! # Browse events
//! em event list --pretty
//!
//! # Book two seats
//! em ticket book <event-uuid> --quantity 2
//! ```

mod auth_commands;
mod cli;
mod commands;
mod error;
mod event_commands;
mod feedback_commands;
mod logger;
mod navigation;
mod ticket_commands;

use crate::{
    auth_commands::AuthCommands,
    cli::Cli,
    commands::Commands,
    error::{CliError, Result as CliResult},
    event_commands::EventCommands,
    feedback_commands::FeedbackCommands,
    ticket_commands::TicketCommands,
};

use em_auth::{GuardDecision, LocalStore, RouteTargets, SessionStore};
use em_core::{Event, Feedback, PublicUser, Ticket, UserRole};
use em_store::{CredentialService, RecordStoreClient};

use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::Parser;
use serde_json::{Value, json};
use uuid::Uuid;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load and validate configuration
    let config = match em_config::Config::load().and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    // Build the session holder, rehydrating from the durable mirror
    let session_dir = match config.session_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let session = Arc::new(SessionStore::new(LocalStore::open_or_memory(&session_dir)));

    // Access predicate runs before the command's view is entered
    let routes = RouteTargets::new(
        config.routes.sign_in_path.as_str(),
        config.routes.landing_path.as_str(),
    );
    if let GuardDecision::Redirect { target } = navigation::check_access(&cli.command, &session, &routes)
    {
        eprintln!("Navigation blocked: redirected to {}", target);
        return ExitCode::FAILURE;
    }

    let store_url = cli
        .store_url
        .clone()
        .unwrap_or_else(|| config.store.base_url.clone());
    let client = match RecordStoreClient::with_timeout(
        &store_url,
        session.clone(),
        Duration::from_secs(config.store.timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Auth { action } => run_auth(action, client, &session).await,
        Commands::Event { action } => run_event(action, &client, &session).await,
        Commands::Ticket { action } => run_ticket(action, &client, &session).await,
        Commands::Feedback { action } => run_feedback(action, &client, &session).await,
    };

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(text) => {
                    println!("{}", text);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(CliError::Auth(e)) => {
            eprintln!("Error [{}]: {}", e.error_code(), e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &em_config::Config) -> CliResult<()> {
    let log_file_path = if let Some(ref filename) = config.logging.file {
        let config_dir = em_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir).map_err(|e| CliError::Logger {
            message: format!("Failed to create log directory: {}", e),
        })?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    logger::initialize(config.logging.level, log_file_path, config.logging.colored)
}

async fn run_auth(
    action: AuthCommands,
    client: RecordStoreClient,
    session: &Arc<SessionStore>,
) -> CliResult<Value> {
    let service = CredentialService::new(client, session.clone());

    match action {
        AuthCommands::Register {
            email,
            password,
            first_name,
            last_name,
            role,
        } => {
            let role = UserRole::from_str(&role)?;
            let opened = service
                .register(em_core::NewUser {
                    email,
                    first_name,
                    last_name,
                    role,
                    password,
                })
                .await?;
            to_value(opened)
        }
        AuthCommands::Login { email, password } => {
            let opened = service.login(&email, &password).await?;
            to_value(opened)
        }
        AuthCommands::Logout => {
            service.logout();
            Ok(json!({ "signed_out": true }))
        }
        AuthCommands::Status => {
            let current = session.session();
            Ok(json!({
                "authenticated": current.is_authenticated(),
                "user": current.user,
            }))
        }
    }
}

async fn run_event(
    action: EventCommands,
    client: &RecordStoreClient,
    session: &Arc<SessionStore>,
) -> CliResult<Value> {
    match action {
        EventCommands::List => to_value(client.list_events().await?),
        EventCommands::Get { id } => to_value(client.get_event(parse_uuid(&id)?).await?),
        EventCommands::Create {
            title,
            category,
            location,
            starts_at,
            price,
            description,
            capacity,
        } => {
            let organizer = current_user(session)?;
            let mut event = Event::new(
                title,
                category,
                location,
                parse_starts_at(&starts_at)?,
                price,
                organizer.id,
            );
            event.description = description;
            event.capacity = capacity;

            to_value(client.create_event(&event).await?)
        }
        EventCommands::Update {
            id,
            title,
            category,
            location,
            starts_at,
            price,
            description,
            capacity,
        } => {
            let mut event = client.get_event(parse_uuid(&id)?).await?;

            if let Some(title) = title {
                event.title = title;
            }
            if let Some(category) = category {
                event.category = category;
            }
            if let Some(location) = location {
                event.location = location;
            }
            if let Some(starts_at) = starts_at {
                event.starts_at = parse_starts_at(&starts_at)?;
            }
            if let Some(price) = price {
                event.price = price;
            }
            if description.is_some() {
                event.description = description;
            }
            if capacity.is_some() {
                event.capacity = capacity;
            }

            to_value(client.update_event(&event).await?)
        }
        EventCommands::Delete { id } => {
            let id = parse_uuid(&id)?;
            client.delete_event(id).await?;
            Ok(json!({ "deleted_id": id }))
        }
    }
}

async fn run_ticket(
    action: TicketCommands,
    client: &RecordStoreClient,
    session: &Arc<SessionStore>,
) -> CliResult<Value> {
    match action {
        TicketCommands::List => {
            let user = current_user(session)?;
            to_value(client.list_tickets_for_user(user.id).await?)
        }
        TicketCommands::Book { event_id, quantity } => {
            let user = current_user(session)?;
            let ticket = Ticket::new(parse_uuid(&event_id)?, user.id, quantity);
            to_value(client.create_ticket(&ticket).await?)
        }
        TicketCommands::Cancel { id } => to_value(client.cancel_ticket(parse_uuid(&id)?).await?),
    }
}

async fn run_feedback(
    action: FeedbackCommands,
    client: &RecordStoreClient,
    session: &Arc<SessionStore>,
) -> CliResult<Value> {
    match action {
        FeedbackCommands::List { event_id } => {
            to_value(client.list_feedback_for_event(parse_uuid(&event_id)?).await?)
        }
        FeedbackCommands::Add {
            event_id,
            rating,
            comment,
        } => {
            let user = current_user(session)?;
            let feedback = Feedback::new(parse_uuid(&event_id)?, user.id, rating, comment)?;
            to_value(client.create_feedback(&feedback).await?)
        }
    }
}

fn to_value<T: serde::Serialize>(value: T) -> CliResult<Value> {
    serde_json::to_value(value).map_err(CliError::from)
}

/// Protected commands run behind require_session, so an identity is present.
fn current_user(session: &SessionStore) -> CliResult<PublicUser> {
    session
        .current_user()
        .ok_or_else(|| CliError::argument("no active session"))
}

fn parse_uuid(value: &str) -> CliResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| CliError::argument(format!("invalid UUID {}: {}", value, e)))
}

fn parse_starts_at(value: &str) -> CliResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CliError::argument(format!("invalid RFC 3339 time {}: {}", value, e)))
}
