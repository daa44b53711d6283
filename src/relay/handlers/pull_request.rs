use chrono::{DateTime, Utc};

use crate::relay::event::PullRequestEvent;
use crate::relay::{format, identity, RelayService};

pub(super) async fn handle_pull_request(
    service: &mut RelayService,
    event: PullRequestEvent,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    if service.bans.is_banned(&event.sender_login) || service.bans.is_banned(&event.author_login) {
        tracing::debug!("Ignoring pull request event involving a banned actor");
        return Ok(());
    }

    let action = match event.action.as_str() {
        "synchronize" => "updated",
        "review_requested" => "requested a review for",
        // Nobody cares about labels
        "labeled" | "unlabeled" => return Ok(()),
        other => other,
    };

    if service.cooldown.should_suppress(event.number, now) {
        tracing::debug!("Suppressing update of PR#{} within cooldown", event.number);
        return Ok(());
    }
    // No await between the suppression check and this record, otherwise two
    // rapid updates to the same pull request could both pass the check.
    service.cooldown.record_notification(event.number, now);

    let url = service.shortener.shorten(&event.html_url).await;
    let repo_display = identity::display_repo(&service.config, &event.repository);
    let actor = identity::display_actor(&service.config, &event.sender_login);
    let line = format::pull_request_line(
        &repo_display,
        actor,
        action,
        &url,
        event.number,
        &event.title,
    );
    service.sink.report(&line).await?;
    Ok(())
}
