use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

use crate::github::server::ServerStateRef;
use crate::relay::event::{CommitInfo, PullRequestEvent, PushEvent, RelayEvent};

const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

#[derive(serde::Deserialize, Debug)]
struct WebhookRepository {
    name: String,
}

#[derive(serde::Deserialize, Debug)]
struct WebhookCommitAuthor {
    name: String,
}

#[derive(serde::Deserialize, Debug)]
struct WebhookCommit {
    id: String,
    message: String,
    url: String,
    author: WebhookCommitAuthor,
}

#[derive(serde::Deserialize, Debug)]
struct WebhookPush {
    #[serde(rename = "ref")]
    git_ref: String,
    compare: String,
    commits: Vec<WebhookCommit>,
    repository: WebhookRepository,
}

#[derive(serde::Deserialize, Debug)]
struct WebhookUser {
    login: String,
}

#[derive(serde::Deserialize, Debug)]
struct PullRequestInner {
    number: u64,
    html_url: String,
    title: String,
    user: WebhookUser,
}

#[derive(serde::Deserialize, Debug)]
struct WebhookPullRequest {
    action: String,
    pull_request: PullRequestInner,
    sender: WebhookUser,
    repository: WebhookRepository,
}

/// axum extractor for GitHub webhook events.
#[derive(Debug)]
pub struct GitHubWebhook(pub RelayEvent);

/// Extracts a webhook event from a HTTP request.
#[async_trait]
impl FromRequest<ServerStateRef> for GitHubWebhook {
    type Rejection = StatusCode;

    async fn from_request(
        request: Request,
        state: &ServerStateRef,
    ) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        // Eagerly load body
        let body: Bytes = axum::body::to_bytes(body, MAX_BODY_SIZE)
            .await
            .map_err(|error| {
                tracing::error!("Parsing webhook body failed: {error:?}");
                StatusCode::BAD_REQUEST
            })?;

        // Verify that the request is valid
        if !verify_gh_signature(&parts.headers, &body, state.get_webhook_secret()) {
            tracing::error!("Webhook request failed, could not authenticate webhook");
            return Err(StatusCode::BAD_REQUEST);
        }

        // Parse webhook content
        match parse_webhook_event(parts, &body) {
            Ok(Some(event)) => Ok(GitHubWebhook(event)),
            Ok(None) => Err(StatusCode::OK),
            Err(error) => {
                tracing::error!("Cannot parse webhook event: {error:?}");
                Err(StatusCode::BAD_REQUEST)
            }
        }
    }
}

fn parse_webhook_event(request: Parts, body: &[u8]) -> anyhow::Result<Option<RelayEvent>> {
    let Some(event_type) = request.headers.get("x-github-event") else {
        return Err(anyhow::anyhow!("x-github-event header not found"));
    };

    match event_type.as_bytes() {
        b"push" => {
            let payload: WebhookPush = serde_json::from_slice(body)?;
            Ok(Some(RelayEvent::Push(PushEvent {
                repository: payload.repository.name,
                git_ref: payload.git_ref,
                compare_url: payload.compare,
                commits: payload
                    .commits
                    .into_iter()
                    .map(|commit| CommitInfo {
                        id: commit.id,
                        message: commit.message,
                        url: commit.url,
                        author_name: commit.author.name,
                    })
                    .collect(),
            })))
        }
        b"pull_request" => {
            let payload: WebhookPullRequest = serde_json::from_slice(body)?;
            Ok(Some(RelayEvent::PullRequest(PullRequestEvent {
                repository: payload.repository.name,
                action: payload.action,
                number: payload.pull_request.number,
                html_url: payload.pull_request.html_url,
                title: payload.pull_request.title,
                sender_login: payload.sender.login,
                author_login: payload.pull_request.user.login,
            })))
        }
        _ => {
            tracing::debug!("Ignoring unknown event type {:?}", event_type.to_str());
            Ok(None)
        }
    }
}

type HmacSha256 = Hmac<Sha256>;

/// Verifies that the request is properly signed by GitHub with SHA-256 and the passed `secret`.
fn verify_gh_signature(
    headers: &HeaderMap<HeaderValue>,
    body: &[u8],
    secret: &WebhookSecret,
) -> bool {
    let Some(signature) = headers.get("x-hub-signature-256").map(|v| v.as_bytes()) else {
        return false;
    };
    let Some(signature) = signature
        .get(b"sha256=".len()..)
        .and_then(|v| hex::decode(v).ok())
    else {
        return false;
    };

    let Ok(mut mac) = HmacSha256::new_from_slice(secret.expose().as_bytes()) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&signature).is_ok()
}

/// Wrapper for a secret which is zeroed on drop and can be exposed only through the
/// [`WebhookSecret::expose`] method.
pub struct WebhookSecret(SecretString);

impl WebhookSecret {
    pub fn new(secret: String) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret().as_str()
    }
}
