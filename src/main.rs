//! Relaygram demo bot.

use std::sync::Arc;

use teloxide::adaptors::throttle::Limits;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use relaygram::actions;
use relaygram::bot::{self, BotRouter, UpdateService};
use relaygram::config::Config;
use relaygram::routing::PluginRegistry;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("relaygram=info,teloxide=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    info!("Starting Relaygram bot...");

    let config = Config::from_env()?;
    info!("Configuration loaded successfully");
    info!("Bot mode: {:?}", config.bot_mode);

    // Throttle respects Telegram's outbound rate limits
    let bot = Bot::new(&config.bot_token).throttle(Limits::default());

    let bot_username = match config.bot_username.clone() {
        Some(username) => username,
        None => bot.get_me().await?.username().to_string(),
    };
    info!("Using bot username: @{}", bot_username);

    // Routing table is built once; any defect aborts startup
    let plugins = PluginRegistry::with_defaults(bot_username)?;
    let router: BotRouter = BotRouter::build(plugins, actions::registrations())?;

    let service = UpdateService::new(Arc::new(router))
        .with_default_action(actions::default_action());

    let dispatcher = bot::build_dispatcher(bot.clone(), service);
    bot::run(&config, dispatcher, bot).await
}
