use std::future::Future;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use tokio::sync::mpsc;
use tower::limit::ConcurrencyLimitLayer;
use tracing::Instrument;

use crate::github::webhook::{GitHubWebhook, WebhookSecret};
use crate::relay::event::{ChatMessage, RelayEvent};
use crate::relay::{handle_relay_event, RelayService};
use crate::utils::logging::LogError;

/// Shared server state for all axum handlers.
pub struct ServerState {
    event_queue: mpsc::Sender<RelayEvent>,
    webhook_secret: WebhookSecret,
}

impl ServerState {
    pub fn new(event_queue: mpsc::Sender<RelayEvent>, webhook_secret: WebhookSecret) -> Self {
        Self {
            event_queue,
            webhook_secret,
        }
    }

    pub fn get_webhook_secret(&self) -> &WebhookSecret {
        &self.webhook_secret
    }
}

pub type ServerStateRef = Arc<ServerState>;

pub fn create_app(state: ServerState) -> Router {
    Router::new()
        .route("/github", post(github_webhook_handler))
        .route("/chat", post(chat_message_handler))
        .route("/health", get(health_handler))
        .layer(ConcurrencyLimitLayer::new(100))
        .with_state(Arc::new(state))
}

async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "")
}

/// Axum handler that receives a webhook and sends it to the event channel.
async fn github_webhook_handler(
    State(state): State<ServerStateRef>,
    GitHubWebhook(event): GitHubWebhook,
) -> impl IntoResponse {
    match state.event_queue.send(event).await {
        Ok(_) => (StatusCode::OK, ""),
        Err(err) => {
            tracing::error!("Could not send webhook event: {err:?}");
            (StatusCode::INTERNAL_SERVER_ERROR, "")
        }
    }
}

/// Axum handler that receives an inbound chat message from the chat bridge.
async fn chat_message_handler(
    State(state): State<ServerStateRef>,
    Json(message): Json<ChatMessage>,
) -> impl IntoResponse {
    match state.event_queue.send(RelayEvent::ChatMessage(message)).await {
        Ok(_) => (StatusCode::OK, ""),
        Err(err) => {
            tracing::error!("Could not send chat message event: {err:?}");
            (StatusCode::INTERNAL_SERVER_ERROR, "")
        }
    }
}

/// Creates a future with a relay process that continuously receives decoded
/// repository events and chat messages and reacts to them.
///
/// The future owns all mutable relay state and handles events one at a time,
/// which is what keeps the policy stores free of locks.
pub fn create_relay_process(
    mut service: RelayService,
) -> (mpsc::Sender<RelayEvent>, impl Future<Output = ()>) {
    let (tx, mut rx) = mpsc::channel::<RelayEvent>(1024);

    let process = async move {
        while let Some(event) = rx.recv().await {
            let span = tracing::info_span!("RelayEvent");
            tracing::debug!("Received event: {event:#?}");
            if let Err(error) = handle_relay_event(&mut service, event, Utc::now())
                .instrument(span.clone())
                .await
            {
                span.log_error(error);
            }
        }
    };
    (tx, process)
}
