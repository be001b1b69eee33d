use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, Context, GuildId, Member, User};
use tracing::{error, info};

use crate::bot::sink::{DiscordNotifier, DiscordRoleSink};
use crate::config::Config;
use crate::service::scoring::ScoringService;

/// Handles a member joining the guild.
///
/// Posts a welcome message and converges the member's rank role. A returning
/// member keeps their stored XP, so reconciliation restores the tier they had
/// earned before leaving; a genuinely new member receives the bottom tier if
/// the table starts at zero.
pub async fn handle_guild_member_addition(
    db: &DatabaseConnection,
    config: &Config,
    ctx: Context,
    new_member: Member,
) {
    if new_member.user.bot {
        return;
    }

    if new_member.guild_id.get() != config.guild_id {
        return;
    }

    let member_id = new_member.user.id.get();

    info!("Member {} joined the guild", member_id);

    if let Some(channel) = config.welcome_channel_id {
        let greeting = format!("Welcome to the server, <@{}>!", member_id);

        if let Err(err) = ChannelId::new(channel).say(&ctx.http, greeting).await {
            error!("Failed to send welcome message for {}: {:?}", member_id, err);
        }
    }

    let roles = DiscordRoleSink::new(ctx.http.clone(), config.guild_id);
    let notifier = DiscordNotifier::new(ctx.http.clone(), config.scoring.announce_channel_id);
    let service = ScoringService::new(db, &config.scoring, &roles, &notifier);

    if let Err(err) = service.reconcile_member(member_id).await {
        error!("Failed to converge rank role for {}: {:?}", member_id, err);
    }
}

/// Handles a member leaving the guild.
///
/// Settles any voice session still open so the final interval is credited,
/// then posts a leave notice to the log channel.
pub async fn handle_guild_member_removal(
    db: &DatabaseConnection,
    config: &Config,
    ctx: Context,
    guild_id: GuildId,
    user: User,
) {
    if user.bot {
        return;
    }

    if guild_id.get() != config.guild_id {
        return;
    }

    let member_id = user.id.get();

    info!("Member {} left the guild", member_id);

    let roles = DiscordRoleSink::new(ctx.http.clone(), config.guild_id);
    let notifier = DiscordNotifier::new(ctx.http.clone(), config.scoring.announce_channel_id);
    let service = ScoringService::new(db, &config.scoring, &roles, &notifier);

    if let Err(err) = service.close_voice(member_id, Utc::now().timestamp()).await {
        error!(
            "Failed to settle voice session for departing member {}: {:?}",
            member_id, err
        );
    }

    if let Some(channel) = config.log_channel_id {
        let notice = format!("**{}** left the server.", user.name);

        if let Err(err) = ChannelId::new(channel).say(&ctx.http, notice).await {
            error!("Failed to send leave notice for {}: {:?}", member_id, err);
        }
    }
}
