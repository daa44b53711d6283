//! Shared test doubles for the relay.
use std::sync::{Arc, Mutex};

use axum::async_trait;

use crate::config::RelayConfig;
use crate::relay::event::{CommitInfo, PullRequestEvent, PushEvent};
use crate::relay::shorten::LinkShortener;
use crate::relay::{ChatSink, RelayService};

/// Chat sink that records every dispatched fragment.
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub reports: Mutex<Vec<String>>,
    pub staff_reports: Mutex<Vec<String>>,
    pub moderation_notes: Mutex<Vec<String>>,
}

#[async_trait]
impl ChatSink for RecordingSink {
    async fn report(&self, html: &str) -> anyhow::Result<()> {
        self.reports.lock().unwrap().push(html.to_string());
        Ok(())
    }

    async fn report_staff(&self, html: &str) -> anyhow::Result<()> {
        self.staff_reports.lock().unwrap().push(html.to_string());
        Ok(())
    }

    async fn moderation_note(&self, text: &str) -> anyhow::Result<()> {
        self.moderation_notes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Shortener that passes URLs through unchanged, standing in for the
/// external service's total-failure fallback path.
pub(crate) struct StubShortener;

#[async_trait]
impl LinkShortener for StubShortener {
    async fn shorten(&self, url: &str) -> String {
        url.to_string()
    }
}

/// Configuration with one staff-visible repository named `staff-repo`.
pub(crate) fn staff_config() -> RelayConfig {
    let mut config = RelayConfig::default();
    config.staff_repositories.insert("staff-repo".to_string());
    config
}

pub(crate) fn test_service(config: RelayConfig) -> (RelayService, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let service = RelayService::new(config, Arc::new(StubShortener), sink.clone());
    (service, sink)
}

pub(crate) fn push_event(repository: &str, git_ref: &str, commits: usize) -> PushEvent {
    PushEvent {
        repository: repository.to_string(),
        git_ref: git_ref.to_string(),
        compare_url: format!("https://github.com/example/{repository}/compare/a...b"),
        commits: (0..commits)
            .map(|i| CommitInfo {
                id: format!("{i}bcdef0123456789"),
                message: format!("Commit {i}"),
                url: format!("https://github.com/example/{repository}/commit/{i}"),
                author_name: format!("Author {i}"),
            })
            .collect(),
    }
}

pub(crate) fn pull_request_event(repository: &str, number: u64, action: &str) -> PullRequestEvent {
    PullRequestEvent {
        repository: repository.to_string(),
        action: action.to_string(),
        number,
        html_url: format!("https://github.com/example/{repository}/pull/{number}"),
        title: format!("Pull request {number}"),
        sender_login: format!("sender{number}"),
        author_login: format!("author{number}"),
    }
}
