use serenity::all::{ActivityData, Context, GuildId, Ready};
use tracing::{error, info};

use crate::bot::commands;
use crate::config::Config;

/// Handles the ready event when the bot connects to Discord.
///
/// Registers the slash commands against the configured guild. Guild commands
/// propagate immediately, unlike global commands which can take up to an hour.
pub async fn handle_ready(config: &Config, ctx: Context, ready: Ready) {
    info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("the XP ladder")));

    match GuildId::new(config.guild_id)
        .set_commands(&ctx.http, commands::all())
        .await
    {
        Ok(registered) => info!("Registered {} guild commands", registered.len()),
        Err(err) => error!("Failed to register guild commands: {:?}", err),
    }
}
