use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use tracing::{error, info};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Builds the Discord client with the gateway intents the handlers need.
pub async fn init_bot(config: Arc<Config>, db: DatabaseConnection) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_VOICE_STATES;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(db, config))
        .await?;

    Ok(client)
}

/// Runs the bot until shutdown, reconnecting after gateway failures.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", err);
            return;
        }
        info!("Shutting down");
        shard_manager.shutdown_all().await;
    });

    info!("Starting Discord bot");

    while let Err(err) = client.start().await {
        error!("Discord client error: {:?}", err);
        tokio::time::sleep(Duration::from_secs(5)).await;
    }

    Ok(())
}
