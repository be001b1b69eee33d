//! Outbound seams between the scoring engine and Discord.
//!
//! The engine never talks to the Discord API directly; it goes through these
//! traits so the business logic can be exercised in tests with recording
//! fakes. The production implementations over the Serenity HTTP client live
//! in the bot module.

use async_trait::async_trait;

use crate::error::AppError;

/// Mutates and inspects a member's guild roles.
#[async_trait]
pub trait RoleSink: Send + Sync {
    /// Role names the member currently holds.
    async fn current_roles(&self, member_id: u64) -> Result<Vec<String>, AppError>;

    /// Grants the named role to the member.
    async fn grant_role(&self, member_id: u64, role: &str) -> Result<(), AppError>;

    /// Removes the named role from the member.
    async fn revoke_role(&self, member_id: u64, role: &str) -> Result<(), AppError>;
}

/// Delivers member-facing announcements.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Announces that a member reached a new level.
    async fn level_up(&self, member_id: u64, level: i32, rank: Option<&str>)
        -> Result<(), AppError>;

    /// Announces an ordinary XP gain.
    async fn xp_gain(&self, member_id: u64, amount: i64, total: i32) -> Result<(), AppError>;
}
