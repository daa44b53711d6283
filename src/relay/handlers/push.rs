use crate::relay::event::PushEvent;
use crate::relay::{format, identity, RelayService};
use crate::utils::text::first_line;

pub(super) async fn handle_push(
    service: &mut RelayService,
    event: PushEvent,
) -> anyhow::Result<()> {
    let branch = event.git_ref.rsplit('/').next().unwrap_or(&event.git_ref);
    // One shortener call per event; the report lines link the individual
    // commits, not the compare view.
    let _compare_url = service.shortener.shorten(&event.compare_url).await;
    if branch != service.config.default_branch {
        tracing::debug!("Ignoring push to branch {branch}");
        return Ok(());
    }
    if event.commits.is_empty() {
        tracing::debug!("Ignoring push without commits");
        return Ok(());
    }

    let repo_display = identity::display_repo(&service.config, &event.repository);
    let mut lines = Vec::with_capacity(event.commits.len());
    let mut staff_lines = Vec::with_capacity(event.commits.len());
    for commit in &event.commits {
        let message = first_line(&commit.message);
        // The pushing user's login is not part of the commit data; the
        // commit author's name is the best attribution available.
        let actor = identity::display_actor(&service.config, &commit.author_name);
        lines.push(format::push_line(
            &repo_display,
            &commit.url,
            &commit.id,
            &message,
            actor,
        ));
        staff_lines.push(format::push_staff_line(
            &repo_display,
            &commit.url,
            &message,
            actor,
        ));
    }

    service.sink.report(&lines.join("<br>")).await?;
    if service
        .config
        .staff_repositories
        .contains(&event.repository)
    {
        service.sink.report_staff(&staff_lines.join("<br>")).await?;
    }
    Ok(())
}
