use sea_orm::DatabaseConnection;
use tracing::{error, warn};

use crate::config::ScoringConfig;
use crate::data::member_xp::MemberXpRepository;
use crate::error::AppError;
use crate::model::level::xp_to_level;
use crate::model::member::{MemberStanding, NextRank, XpAdjustment};
use crate::model::rank::RolePlan;
use crate::service::reconcile::RoleReconciler;
use crate::service::sink::{Notifier, RoleSink};

/// A qualifying activity event to be converted into XP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    /// A text message observed in a tracked channel.
    Message,
    /// A completed voice session that lasted this many seconds.
    Voice { seconds: i64 },
}

/// The scoring engine.
///
/// Every XP mutation flows through `settle`, which fixes the order of
/// operations: the store is updated first with a single atomic addition, then
/// roles are converged when the change moved the member to a different rank
/// tier, then promotions are announced. Role and notification failures are
/// logged and never undo the stored XP, so a member can at worst end up with
/// lagging roles, which the next reconciliation pass repairs.
pub struct ScoringService<'a, R: RoleSink, N: Notifier> {
    db: &'a DatabaseConnection,
    config: &'a ScoringConfig,
    roles: &'a R,
    notifier: &'a N,
}

impl<'a, R: RoleSink, N: Notifier> ScoringService<'a, R, N> {
    pub fn new(
        db: &'a DatabaseConnection,
        config: &'a ScoringConfig,
        roles: &'a R,
        notifier: &'a N,
    ) -> Self {
        Self {
            db,
            config,
            roles,
            notifier,
        }
    }

    /// Awards XP for a qualifying activity event.
    ///
    /// The award amount comes from configuration: a flat amount per message,
    /// or an amount per full minute of voice presence (partial minutes earn
    /// nothing). When gain announcements are enabled, a non-zero stored gain
    /// is announced after settling, unless the gain was already announced as
    /// a promotion. Each event produces at most one announcement.
    pub async fn apply_activity(
        &self,
        member_id: u64,
        activity: Activity,
    ) -> Result<XpAdjustment, AppError> {
        let amount = match activity {
            Activity::Message => self.config.text_message_xp,
            Activity::Voice { seconds } => {
                (seconds.max(0) / 60) * self.config.voice_xp_per_minute
            }
        };

        let adjustment = self.settle(member_id, amount).await?;

        if self.config.announce_xp_gains && !adjustment.promoted && adjustment.applied_delta() > 0
        {
            if let Err(err) = self
                .notifier
                .xp_gain(member_id, adjustment.applied_delta(), adjustment.xp_after)
                .await
            {
                warn!("Failed to announce XP gain for member {}: {:?}", member_id, err);
            }
        }

        Ok(adjustment)
    }

    /// Applies a signed admin adjustment to a member's XP.
    ///
    /// Runs the same settle path as organic awards, so clamping, role
    /// convergence, and level-up announcements behave identically. Admin
    /// changes are never announced as gains.
    pub async fn admin_adjust(
        &self,
        member_id: u64,
        delta: i64,
    ) -> Result<XpAdjustment, AppError> {
        self.settle(member_id, delta).await
    }

    /// Marks the start of a voice session.
    pub async fn open_voice(&self, member_id: u64, now: i64) -> Result<(), AppError> {
        MemberXpRepository::new(self.db)
            .open_voice_session(member_id, now)
            .await?;
        Ok(())
    }

    /// Closes a member's voice session and credits the elapsed time.
    ///
    /// # Returns
    /// - `Ok(Some(XpAdjustment))` - This call owned the session and settled it
    /// - `Ok(None)` - No open session, or another close already credited it
    /// - `Err(AppError)` - Store failure
    pub async fn close_voice(
        &self,
        member_id: u64,
        now: i64,
    ) -> Result<Option<XpAdjustment>, AppError> {
        let Some(started) = MemberXpRepository::new(self.db)
            .close_voice_session(member_id)
            .await?
        else {
            return Ok(None);
        };

        let seconds = (now - started).max(0);
        let adjustment = self
            .apply_activity(member_id, Activity::Voice { seconds })
            .await?;

        Ok(Some(adjustment))
    }

    /// Converges a member's roles onto their current XP without changing it.
    ///
    /// Used when a member joins the guild and when roles may have drifted
    /// while the process was down. Unlike the settle path, sink failures
    /// propagate to the caller here since there is no stored XP to protect.
    pub async fn reconcile_member(&self, member_id: u64) -> Result<RolePlan, AppError> {
        let xp = MemberXpRepository::new(self.db).get_xp(member_id).await?;

        RoleReconciler::new(self.roles, &self.config.table)
            .reconcile(member_id, xp)
            .await
    }

    /// Assembles a member's standing for display.
    ///
    /// Members with no record read as zero XP at the bottom of the table.
    pub async fn standing(&self, member_id: u64) -> Result<MemberStanding, AppError> {
        let record = MemberXpRepository::new(self.db).find(member_id).await?;
        let (xp, in_voice) =
            record.map_or((0, false), |m| (m.xp, m.voice_joined_at.is_some()));

        let table = &self.config.table;
        let next_rank = table.next_tier(xp).map(|tier| NextRank {
            role: tier.role.clone(),
            at: tier.min,
            remaining: table.remaining_to(tier, xp),
        });

        Ok(MemberStanding {
            member_id,
            xp,
            level: xp_to_level(xp),
            rank: table.target_tier(xp).map(|tier| tier.role.clone()),
            next_rank,
            basis: table.basis(),
            in_voice,
        })
    }

    /// Wipes every XP record.
    pub async fn clear_all(&self) -> Result<u64, AppError> {
        let removed = MemberXpRepository::new(self.db).clear_all().await?;
        Ok(removed)
    }

    /// Stores an XP delta and runs the post-write pipeline.
    ///
    /// The store write is the only fallible step that aborts the operation.
    /// When the stored change moves the member to a different rank tier,
    /// roles are converged and an upward move is announced, both on a
    /// best-effort basis.
    async fn settle(&self, member_id: u64, delta: i64) -> Result<XpAdjustment, AppError> {
        let repo = MemberXpRepository::new(self.db);

        let xp_before = repo.get_xp(member_id).await?;
        let after = repo.add_xp(member_id, delta).await?;

        let table = &self.config.table;
        let adjustment = XpAdjustment {
            member_id,
            xp_before,
            xp_after: after.xp,
            level_before: xp_to_level(xp_before),
            level_after: xp_to_level(after.xp),
            rank: table.target_tier(after.xp).map(|tier| tier.role.clone()),
            promoted: table.promoted(xp_before, after.xp),
        };

        if table.target_changed(xp_before, after.xp) {
            if let Err(err) = RoleReconciler::new(self.roles, table)
                .reconcile(member_id, adjustment.xp_after)
                .await
            {
                error!(
                    "Failed to reconcile roles for member {}: {:?}",
                    member_id, err
                );
            }
        }

        if adjustment.promoted {
            if let Err(err) = self
                .notifier
                .level_up(member_id, adjustment.level_after, adjustment.rank.as_deref())
                .await
            {
                error!(
                    "Failed to announce promotion for member {}: {:?}",
                    member_id, err
                );
            }
        }

        Ok(adjustment)
    }
}
