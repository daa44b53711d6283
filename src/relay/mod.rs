use std::sync::Arc;

use axum::async_trait;

use crate::config::RelayConfig;
use crate::relay::bans::BanList;
use crate::relay::cooldown::CooldownTracker;
use crate::relay::shorten::LinkShortener;

pub mod bans;
pub mod command;
pub mod cooldown;
pub mod event;
pub mod format;
mod handlers;
pub mod identity;
pub mod shorten;

#[cfg(test)]
pub(crate) mod testing;

pub use handlers::handle_relay_event;

/// Outbound connection to the chat room.
/// It is behind a trait to allow easier mocking in tests.
#[async_trait]
pub trait ChatSink: Send + Sync {
    /// Posts an HTML fragment to the public channel.
    async fn report(&self, html: &str) -> anyhow::Result<()>;

    /// Posts an HTML fragment to the restricted staff channel.
    async fn report_staff(&self, html: &str) -> anyhow::Result<()>;

    /// Posts a moderation acknowledgement.
    async fn moderation_note(&self, text: &str) -> anyhow::Result<()>;
}

/// Main state holder for the relay.
///
/// Owned exclusively by the single event-consuming task; events are handled
/// one at a time, so the mutable stores need no locking and the cooldown
/// check-then-record sequence stays atomic as long as no await point
/// separates the two calls.
pub struct RelayService {
    pub config: RelayConfig,
    pub shortener: Arc<dyn LinkShortener>,
    pub sink: Arc<dyn ChatSink>,
    pub(crate) bans: BanList,
    pub(crate) cooldown: CooldownTracker,
}

impl RelayService {
    pub fn new(
        config: RelayConfig,
        shortener: Arc<dyn LinkShortener>,
        sink: Arc<dyn ChatSink>,
    ) -> Self {
        Self {
            config,
            shortener,
            sink,
            bans: BanList::default(),
            cooldown: CooldownTracker::default(),
        }
    }
}
