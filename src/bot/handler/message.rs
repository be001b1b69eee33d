use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};
use tracing::error;

use crate::bot::sink::{DiscordNotifier, DiscordRoleSink};
use crate::config::Config;
use crate::service::scoring::{Activity, ScoringService};

/// Handles message creation by awarding text activity XP to the author.
///
/// Message content is never inspected, only the fact that a member posted.
pub async fn handle_message(
    db: &DatabaseConnection,
    config: &Config,
    ctx: Context,
    message: Message,
) {
    // Bots (including this one) never accrue XP
    if message.author.bot {
        return;
    }

    // Only messages in the configured guild count, never DMs
    if message.guild_id.map(|id| id.get()) != Some(config.guild_id) {
        return;
    }

    let roles = DiscordRoleSink::new(ctx.http.clone(), config.guild_id);
    let notifier = DiscordNotifier::new(ctx.http.clone(), config.scoring.announce_channel_id);
    let service = ScoringService::new(db, &config.scoring, &roles, &notifier);

    if let Err(err) = service
        .apply_activity(message.author.id.get(), Activity::Message)
        .await
    {
        error!(
            "Failed to award message XP to {}: {:?}",
            message.author.id, err
        );
    }
}
