use std::sync::Arc;

use quest_checker_bot::config::Config;
use quest_checker_bot::database::{init, quests::PgQuestLog};
use quest_checker_bot::handler::Handler;
use quest_checker_bot::AppState;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().expect("Invalid configuration; check the .env file.");
    if config.allowed_users.is_empty() {
        warn!("ALLOWED_USERS is empty; every /checkquest call will be refused.");
    }
    info!(database = ?config.database, allowed_users = config.allowed_users.len(), "configuration loaded");

    let pool = init::connect_lazy(&config.database);
    let quest_log = PgQuestLog::new(pool.clone(), &config.database);
    let app_state = Arc::new(AppState::new(Arc::new(quest_log), config.allowed_users.clone()));

    // Slash commands and their components arrive with GUILDS alone.
    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler {
            guild_id: config.guild_id,
        })
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = ?e, "failed to listen for shutdown signal");
            return;
        }
        info!("Shutdown requested, closing gateway connections.");
        shard_manager.shutdown_all().await;
    });

    if let Err(why) = client.start().await {
        error!(error = ?why, "Client error");
    }
    pool.close().await;
}
