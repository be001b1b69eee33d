use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, EventHandler, GuildId, Interaction, Member, Message, Ready, Role, RoleId, User,
    VoiceState,
};
use serenity::async_trait;

use crate::config::Config;

pub mod interaction;
pub mod member;
pub mod message;
pub mod ready;
pub mod role;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
}

impl Handler {
    pub fn new(db: DatabaseConnection, config: Arc<Config>) -> Self {
        Self { db, config }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.config, ctx, ready).await;
    }

    /// Called when a message is sent in a guild channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.db, &self.config, ctx, message).await;
    }

    /// Called when a member joins, leaves, or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.db, &self.config, ctx, old, new).await;
    }

    /// Called when a role is created in the guild
    async fn guild_role_create(&self, ctx: Context, new: Role) {
        role::handle_guild_role_create(&self.config, ctx, new).await;
    }

    /// Called when a role is updated in the guild
    async fn guild_role_update(&self, ctx: Context, old: Option<Role>, new: Role) {
        role::handle_guild_role_update(&self.config, ctx, old, new).await;
    }

    /// Called when a role is deleted from the guild
    async fn guild_role_delete(
        &self,
        ctx: Context,
        guild_id: GuildId,
        removed_role_id: RoleId,
        removed_role_data_if_in_cache: Option<Role>,
    ) {
        role::handle_guild_role_delete(
            &self.config,
            ctx,
            guild_id,
            removed_role_id,
            removed_role_data_if_in_cache,
        )
        .await;
    }

    /// Called when a member joins the guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.db, &self.config, ctx, new_member).await;
    }

    /// Called when a member leaves the guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        _member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(&self.db, &self.config, ctx, guild_id, user).await;
    }

    /// Called when a slash command is invoked
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.db, &self.config, ctx, interaction).await;
    }
}
