use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use devbot::chat::HttpChatSink;
use devbot::config::RelayConfig;
use devbot::github::server::{create_app, create_relay_process, ServerState};
use devbot::github::WebhookSecret;
use devbot::relay::shorten::HttpShortener;
use devbot::relay::RelayService;

/// Relays GitHub activity (pushes, pull requests) into a chat room.
#[derive(clap::Parser)]
struct Opts {
    /// Secret used to authenticate webhooks.
    #[arg(long, env = "WEBHOOK_SECRET")]
    webhook_secret: String,

    /// Port on which the webhook server listens.
    #[arg(long, env = "WEBHOOK_PORT", default_value_t = 8080)]
    port: u16,

    /// Endpoint of the URL shortening service.
    #[arg(long, env = "SHORTENER_URL", default_value = "https://git.io")]
    shortener_url: String,

    /// Chat bridge endpoint for the public channel.
    #[arg(long, env = "CHAT_REPORT_URL")]
    chat_report_url: String,

    /// Chat bridge endpoint for the staff channel.
    #[arg(long, env = "CHAT_STAFF_URL")]
    chat_staff_url: String,

    /// Chat bridge endpoint for moderation notes.
    #[arg(long, env = "CHAT_MODERATION_URL")]
    chat_moderation_url: String,

    /// Path to a TOML file with the alias and repository tables.
    #[arg(long, env = "RELAY_CONFIG")]
    config: Option<PathBuf>,
}

async fn server(state: ServerState, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Cannot bind to port {port}"))?;
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

fn try_main(opts: Opts) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Cannot build tokio runtime")?;

    let config = match &opts.config {
        Some(path) => RelayConfig::load(path).context("Cannot load relay configuration")?,
        None => RelayConfig::default(),
    };

    let shortener = Arc::new(
        HttpShortener::new(opts.shortener_url).context("Cannot create shortener client")?,
    );
    let sink = Arc::new(HttpChatSink::new(
        opts.chat_report_url,
        opts.chat_staff_url,
        opts.chat_moderation_url,
    ));
    let service = RelayService::new(config, shortener, sink);

    let (tx, relay_process) = create_relay_process(service);
    let state = ServerState::new(tx, WebhookSecret::new(opts.webhook_secret));
    let server_process = server(state, opts.port);

    runtime.block_on(async move {
        tokio::select! {
            () = relay_process => {
                tracing::warn!("Relay process has ended");
                Ok(())
            },
            res = server_process => {
                tracing::warn!("Server has ended: {res:?}");
                res
            }
        }
    })?;

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    if let Err(error) = try_main(opts) {
        eprintln!("Error: {error:?}");
        std::process::exit(1);
    }
}
