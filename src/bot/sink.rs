//! Serenity-backed implementations of the scoring engine's outbound seams.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{ChannelId, GuildId, RoleId, UserId};
use serenity::http::Http;
use tracing::debug;

use crate::error::AppError;
use crate::service::sink::{Notifier, RoleSink};

/// Role sink that mutates guild roles through the Discord HTTP API.
///
/// Rank tiers are configured by role name, so every mutation resolves the
/// name against the guild's current role list first.
pub struct DiscordRoleSink {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl DiscordRoleSink {
    pub fn new(http: Arc<Http>, guild_id: u64) -> Self {
        Self {
            http,
            guild_id: GuildId::new(guild_id),
        }
    }

    async fn resolve_role(&self, name: &str) -> Result<RoleId, AppError> {
        let roles = self.http.get_guild_roles(self.guild_id).await?;

        roles
            .iter()
            .find(|role| role.name == name)
            .map(|role| role.id)
            .ok_or_else(|| AppError::NotFound(format!("Role '{}' not found in guild", name)))
    }
}

#[async_trait]
impl RoleSink for DiscordRoleSink {
    async fn current_roles(&self, member_id: u64) -> Result<Vec<String>, AppError> {
        let member = self
            .http
            .get_member(self.guild_id, UserId::new(member_id))
            .await?;
        let roles = self.http.get_guild_roles(self.guild_id).await?;

        Ok(roles
            .into_iter()
            .filter(|role| member.roles.contains(&role.id))
            .map(|role| role.name)
            .collect())
    }

    async fn grant_role(&self, member_id: u64, role: &str) -> Result<(), AppError> {
        let role_id = self.resolve_role(role).await?;

        self.http
            .add_member_role(
                self.guild_id,
                UserId::new(member_id),
                role_id,
                Some("Rank threshold reached"),
            )
            .await?;

        debug!("Granted role '{}' to member {}", role, member_id);

        Ok(())
    }

    async fn revoke_role(&self, member_id: u64, role: &str) -> Result<(), AppError> {
        let role_id = self.resolve_role(role).await?;

        self.http
            .remove_member_role(
                self.guild_id,
                UserId::new(member_id),
                role_id,
                Some("Rank threshold no longer met"),
            )
            .await?;

        debug!("Revoked role '{}' from member {}", role, member_id);

        Ok(())
    }
}

/// Notifier that posts level and XP announcements to a configured channel.
///
/// Without a configured channel, announcements are dropped after a debug log
/// so the engine still runs in guilds that do not want the chatter.
pub struct DiscordNotifier {
    http: Arc<Http>,
    channel_id: Option<ChannelId>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>, channel_id: Option<u64>) -> Self {
        Self {
            http,
            channel_id: channel_id.map(ChannelId::new),
        }
    }

    async fn send(&self, content: String) -> Result<(), AppError> {
        let Some(channel_id) = self.channel_id else {
            debug!("No announcement channel configured, dropping: {}", content);
            return Ok(());
        };

        channel_id.say(&self.http, content).await?;

        Ok(())
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn level_up(&self, member_id: u64, level: i32, rank: Option<&str>) -> Result<(), AppError> {
        let content = match rank {
            Some(rank) => format!(
                "<@{}> advanced to **{}** (level {})!",
                member_id, rank, level
            ),
            None => format!("<@{}> reached level {}!", member_id, level),
        };

        self.send(content).await
    }

    async fn xp_gain(&self, member_id: u64, amount: i64, total: i32) -> Result<(), AppError> {
        self.send(format!(
            "<@{}> gained {} XP ({} total).",
            member_id, amount, total
        ))
        .await
    }
}
