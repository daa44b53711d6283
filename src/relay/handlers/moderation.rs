use crate::relay::command::{parse_chat_command, ChatCommand};
use crate::relay::event::ChatMessage;
use crate::relay::RelayService;

pub(super) async fn handle_chat_message(
    service: &mut RelayService,
    message: ChatMessage,
) -> anyhow::Result<()> {
    let Some(command) = parse_chat_command(&message.user, &message.text) else {
        return Ok(());
    };
    match command {
        ChatCommand::GitBan { identity } => {
            let note = if service.bans.ban(&identity) {
                format!("'{identity}' was banned from being reported by this bot")
            } else {
                format!("'{identity}' is already banned from being reported")
            };
            service.sink.moderation_note(&note).await?;
        }
        ChatCommand::GitUnban { identity } => {
            let note = if service.bans.unban(&identity) {
                format!("'{identity}' was unbanned from being reported by this bot")
            } else {
                format!("'{identity}' is already allowed to be reported")
            };
            service.sink.moderation_note(&note).await?;
        }
    }
    Ok(())
}
