use crate::config::RelayConfig;

/// Normalizes an actor identity for lookups: lowercased with everything
/// outside `[a-z0-9]` stripped.
pub fn normalize_identity(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Resolves the display name for an actor.
///
/// `name` can either be a login (for pull requests) or a commit author's
/// free-text name (for pushes). When the normalized identity has no alias
/// configured, falls back to the first whitespace-delimited part of the name;
/// logins cannot contain spaces, so they pass through unchanged.
pub fn display_actor<'a>(config: &'a RelayConfig, name: &'a str) -> &'a str {
    let id = normalize_identity(name);
    match config.usernames.get(&id) {
        Some(alias) => alias,
        None => name.split_whitespace().next().unwrap_or(""),
    }
}

/// Resolves the short display tag for a repository, falling back to the
/// lowercased identifier.
pub fn display_repo(config: &RelayConfig, repository: &str) -> String {
    match config.repository_names.get(repository) {
        Some(tag) => tag.clone(),
        None => repository.to_lowercase(),
    }
}
