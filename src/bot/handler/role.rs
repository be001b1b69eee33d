//! Role lifecycle audit handlers.
//!
//! Posts role create/update/delete notices to the log channel, and checks
//! after every change that the rank table's role names still resolve in the
//! guild. The reconciler looks roles up by name, so a deleted or renamed rank
//! role silently breaks promotions until someone notices; these handlers make
//! that loud.

use serenity::all::{ChannelId, Context, GuildId, Role, RoleId};
use tracing::{error, warn};

use crate::config::Config;

/// Handles the guild_role_create event when a role is created in a guild.
pub async fn handle_guild_role_create(config: &Config, ctx: Context, new: Role) {
    if new.guild_id.get() != config.guild_id {
        return;
    }

    audit(config, &ctx, format!("New role created: **{}**", new.name)).await;
}

/// Handles the guild_role_update event when a role is updated in a guild.
///
/// A rename away from a configured rank role name breaks the table the same
/// way a deletion does, so updates run the same integrity sweep.
pub async fn handle_guild_role_update(
    config: &Config,
    ctx: Context,
    _old: Option<Role>,
    new: Role,
) {
    if new.guild_id.get() != config.guild_id {
        return;
    }

    audit(config, &ctx, format!("Role updated: **{}**", new.name)).await;

    warn_missing_rank_roles(config, &ctx, new.guild_id).await;
}

/// Handles the guild_role_delete event when a role is deleted from a guild.
pub async fn handle_guild_role_delete(
    config: &Config,
    ctx: Context,
    guild_id: GuildId,
    removed_role_id: RoleId,
    removed: Option<Role>,
) {
    if guild_id.get() != config.guild_id {
        return;
    }

    let notice = match &removed {
        Some(role) => format!("Role deleted: **{}**", role.name),
        None => format!("Role {} was deleted.", removed_role_id),
    };
    audit(config, &ctx, notice).await;

    warn_missing_rank_roles(config, &ctx, guild_id).await;
}

/// Warns about rank table entries that no longer resolve to a guild role.
async fn warn_missing_rank_roles(config: &Config, ctx: &Context, guild_id: GuildId) {
    let roles = match ctx.http.get_guild_roles(guild_id).await {
        Ok(roles) => roles,
        Err(err) => {
            error!("Failed to list guild roles for rank table check: {:?}", err);
            return;
        }
    };

    for tier in config.scoring.table.tiers() {
        if !roles.iter().any(|role| role.name == tier.role) {
            warn!(
                "Rank role '{}' no longer exists in the guild; reconciliation will fail until it is recreated",
                tier.role
            );
            audit(
                config,
                ctx,
                format!(
                    "Rank role **{}** no longer exists. Members cannot be moved into it until it is recreated.",
                    tier.role
                ),
            )
            .await;
        }
    }
}

/// Posts an audit notice to the log channel, if one is configured.
async fn audit(config: &Config, ctx: &Context, notice: String) {
    let Some(channel) = config.log_channel_id else {
        return;
    };

    if let Err(err) = ChannelId::new(channel).say(&ctx.http, notice).await {
        error!("Failed to send role audit notice: {:?}", err);
    }
}
