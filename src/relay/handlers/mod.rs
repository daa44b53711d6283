use chrono::{DateTime, Utc};
use tracing::Instrument;

use crate::relay::event::RelayEvent;
use crate::relay::RelayService;

mod moderation;
mod pull_request;
mod push;

/// Executes a single relay event.
///
/// `now` is passed in by the caller so that time-dependent policy (the
/// pull request cooldown) can be driven by a simulated clock in tests.
pub async fn handle_relay_event(
    service: &mut RelayService,
    event: RelayEvent,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    match event {
        RelayEvent::Push(payload) => {
            let span = tracing::info_span!(
                "Push",
                repo = payload.repository.clone(),
                commits = payload.commits.len()
            );
            push::handle_push(service, payload).instrument(span).await?;
        }
        RelayEvent::PullRequest(payload) => {
            let span = tracing::info_span!(
                "PullRequest",
                pr = format!("{}#{}", payload.repository, payload.number)
            );
            pull_request::handle_pull_request(service, payload, now)
                .instrument(span)
                .await?;
        }
        RelayEvent::ChatMessage(message) => {
            let span = tracing::info_span!("ChatMessage");
            moderation::handle_chat_message(service, message)
                .instrument(span)
                .await?;
        }
    }
    Ok(())
}
