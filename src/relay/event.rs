/// An event consumed by the relay process.
#[derive(Debug)]
pub enum RelayEvent {
    /// Commits were pushed to a repository.
    Push(PushEvent),
    /// A pull request was opened, updated, closed etc.
    PullRequest(PullRequestEvent),
    /// A message was posted in the chat room.
    ChatMessage(ChatMessage),
}

#[derive(Debug)]
pub struct PushEvent {
    pub repository: String,
    /// Full git ref, e.g. `refs/heads/master`.
    pub git_ref: String,
    pub compare_url: String,
    pub commits: Vec<CommitInfo>,
}

#[derive(Debug)]
pub struct CommitInfo {
    pub id: String,
    pub message: String,
    pub url: String,
    /// Free-text author name from the commit metadata. The pushing user's
    /// login is not available here, so this is the best attribution we have.
    pub author_name: String,
}

#[derive(Debug)]
pub struct PullRequestEvent {
    pub repository: String,
    /// Raw action string from the webhook, e.g. `opened` or `synchronize`.
    pub action: String,
    pub number: u64,
    pub html_url: String,
    pub title: String,
    /// Login of the user that triggered the event.
    pub sender_login: String,
    /// Login of the pull request's author.
    pub author_login: String,
}

/// An inbound chat room message, as forwarded by the chat bridge.
#[derive(Debug, serde::Deserialize)]
pub struct ChatMessage {
    /// Rank-prefixed username, e.g. `@Morfent`. The first character is the
    /// user's privilege rank symbol.
    pub user: String,
    pub text: String,
}
