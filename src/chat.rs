//! HTTP bridge to the chat room.
//!
//! The relay does not speak the chat protocol itself; a separate bridge
//! process holds the persistent chat session and accepts HTML fragments over
//! HTTP, one endpoint per channel.
use axum::async_trait;
use serde::Serialize;

use crate::relay::ChatSink;

#[derive(Serialize)]
struct OutboundMessage<'a> {
    message: &'a str,
}

/// [`ChatSink`] that posts each fragment as JSON to a per-channel endpoint.
pub struct HttpChatSink {
    client: reqwest::Client,
    report_url: String,
    staff_url: String,
    moderation_url: String,
}

impl HttpChatSink {
    pub fn new(report_url: String, staff_url: String, moderation_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            report_url,
            staff_url,
            moderation_url,
        }
    }

    async fn post(&self, url: &str, message: &str) -> anyhow::Result<()> {
        self.client
            .post(url)
            .json(&OutboundMessage { message })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl ChatSink for HttpChatSink {
    async fn report(&self, html: &str) -> anyhow::Result<()> {
        self.post(&self.report_url, html).await
    }

    async fn report_staff(&self, html: &str) -> anyhow::Result<()> {
        self.post(&self.staff_url, html).await
    }

    async fn moderation_note(&self, text: &str) -> anyhow::Result<()> {
        self.post(&self.moderation_url, text).await
    }
}
