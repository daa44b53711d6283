//! Parser for chat moderation commands.
use crate::config::{COMMAND_PREFIX, PRIVILEGED_RANKS};

#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// `.gitban <identity>`
    GitBan { identity: String },
    /// `.gitunban <identity>`
    GitUnban { identity: String },
}

/// Parses a moderation command from a chat message.
///
/// A command is only recognized when the author's rank symbol (the first
/// character of `user`) is privileged and the message starts with the command
/// prefix. Everything else returns `None` — the expected common case, since
/// most chat messages are not commands. Unknown command names are also
/// silently ignored.
pub fn parse_chat_command(user: &str, text: &str) -> Option<ChatCommand> {
    let rank = user.chars().next()?;
    if !PRIVILEGED_RANKS.contains(&rank) {
        return None;
    }
    let body = text.strip_prefix(COMMAND_PREFIX)?;
    let mut parts = body.split_whitespace();
    let command = parts.next()?;
    let identity = parts.collect::<Vec<_>>().join(" ").to_lowercase();
    match command {
        "gitban" => Some(ChatCommand::GitBan { identity }),
        "gitunban" => Some(ChatCommand::GitUnban { identity }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gitban() {
        assert_eq!(
            parse_chat_command("@Morfent", ".gitban Some Troll"),
            Some(ChatCommand::GitBan {
                identity: "some troll".to_string()
            })
        );
    }

    #[test]
    fn parses_gitunban() {
        assert_eq!(
            parse_chat_command("~Admin", ".gitunban troll"),
            Some(ChatCommand::GitUnban {
                identity: "troll".to_string()
            })
        );
    }

    #[test]
    fn argument_whitespace_is_collapsed() {
        assert_eq!(
            parse_chat_command("%Driver", ".gitban  Some   Troll "),
            Some(ChatCommand::GitBan {
                identity: "some troll".to_string()
            })
        );
    }

    #[test]
    fn unprivileged_rank_is_ignored() {
        assert_eq!(parse_chat_command("+Voice", ".gitban troll"), None);
        assert_eq!(parse_chat_command("regular", ".gitban troll"), None);
    }

    #[test]
    fn non_command_message_is_ignored() {
        assert_eq!(parse_chat_command("@Mod", "hello there"), None);
    }

    #[test]
    fn unknown_command_is_ignored() {
        assert_eq!(parse_chat_command("@Mod", ".weather tomorrow"), None);
    }

    #[test]
    fn missing_argument_yields_empty_identity() {
        assert_eq!(
            parse_chat_command("@Mod", ".gitban"),
            Some(ChatCommand::GitBan {
                identity: String::new()
            })
        );
    }

    #[test]
    fn empty_message_is_ignored() {
        assert_eq!(parse_chat_command("", ".gitban troll"), None);
        assert_eq!(parse_chat_command("@Mod", ""), None);
    }
}
