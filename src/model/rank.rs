//! Rank threshold table and role planning.
//!
//! A guild configures an ordered list of (threshold, role name) tiers. A
//! member's target tier is the highest tier whose threshold they meet, where
//! the threshold is measured either in raw XP or in computed level depending
//! on the configured basis. Planning compares the target against the roles a
//! member currently holds and produces the minimal set of grant/revoke
//! mutations; role names that do not appear in the table are never touched.

use crate::model::level::xp_to_level;

/// What a tier threshold is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdBasis {
    /// Thresholds are raw XP totals.
    Xp,
    /// Thresholds are computed levels.
    Level,
}

/// A single rank tier: members at or above `min` qualify for `role`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTier {
    /// Inclusive threshold, in the table's basis units.
    pub min: i64,
    /// Discord role name granted for this tier.
    pub role: String,
}

impl RankTier {
    pub fn new(min: i64, role: impl Into<String>) -> Self {
        Self {
            min,
            role: role.into(),
        }
    }
}

/// Ordered rank table for a guild.
///
/// Tiers are kept sorted ascending by threshold regardless of construction
/// order, so `target_tier` can scan from the top down.
#[derive(Debug, Clone)]
pub struct RankTable {
    basis: ThresholdBasis,
    tiers: Vec<RankTier>,
}

impl RankTable {
    pub fn new(basis: ThresholdBasis, mut tiers: Vec<RankTier>) -> Self {
        tiers.sort_by_key(|tier| tier.min);
        Self { basis, tiers }
    }

    pub fn basis(&self) -> ThresholdBasis {
        self.basis
    }

    pub fn tiers(&self) -> &[RankTier] {
        &self.tiers
    }

    /// Projects an XP total onto the table's basis.
    fn measure(&self, xp: i32) -> i64 {
        match self.basis {
            ThresholdBasis::Xp => i64::from(xp),
            ThresholdBasis::Level => i64::from(xp_to_level(xp)),
        }
    }

    /// Returns the highest tier whose threshold the XP total meets.
    ///
    /// Returns `None` when the total sits below the lowest threshold, in
    /// which case the member should hold no table role at all.
    pub fn target_tier(&self, xp: i32) -> Option<&RankTier> {
        let measure = self.measure(xp);
        self.tiers.iter().rev().find(|tier| measure >= tier.min)
    }

    /// Returns the next tier above the XP total, if any, for progress display.
    pub fn next_tier(&self, xp: i32) -> Option<&RankTier> {
        let measure = self.measure(xp);
        self.tiers.iter().find(|tier| measure < tier.min)
    }

    /// Remaining distance to the next tier, in basis units.
    pub fn remaining_to(&self, tier: &RankTier, xp: i32) -> i64 {
        tier.min - self.measure(xp)
    }

    /// Whether two XP totals resolve to different target tiers.
    pub fn target_changed(&self, before: i32, after: i32) -> bool {
        self.tier_min(before) != self.tier_min(after)
    }

    /// Whether moving from `before` to `after` crossed into a higher tier.
    pub fn promoted(&self, before: i32, after: i32) -> bool {
        match (self.tier_min(before), self.tier_min(after)) {
            (None, Some(_)) => true,
            (Some(b), Some(a)) => a > b,
            _ => false,
        }
    }

    // Thresholds are strictly increasing, so the minimum identifies a tier.
    fn tier_min(&self, xp: i32) -> Option<i64> {
        self.target_tier(xp).map(|tier| tier.min)
    }

    /// Whether a role name is managed by this table.
    pub fn contains_role(&self, name: &str) -> bool {
        self.tiers.iter().any(|tier| tier.role == name)
    }

    /// Plans the role mutations that move a member onto their target tier.
    ///
    /// `held_roles` is the full set of role names the member currently has;
    /// only names that appear in the table are considered. Revocations cover
    /// every held table role other than the target, and the target is granted
    /// only when missing, so a converged member yields an empty plan.
    pub fn plan(&self, held_roles: &[String], xp: i32) -> RolePlan {
        let target = self.target_tier(xp).map(|tier| tier.role.as_str());

        let revoke: Vec<String> = held_roles
            .iter()
            .filter(|held| self.contains_role(held) && Some(held.as_str()) != target)
            .cloned()
            .collect();

        let grant = target
            .filter(|role| !held_roles.iter().any(|held| held == role))
            .map(str::to_owned);

        RolePlan { grant, revoke }
    }
}

/// The role mutations required to converge a member on their target tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolePlan {
    /// Role to grant, when the member is missing their target role.
    pub grant: Option<String>,
    /// Table roles to remove, in held order.
    pub revoke: Vec<String>,
}

impl RolePlan {
    /// True when the member already holds exactly their target role set.
    pub fn is_converged(&self) -> bool {
        self.grant.is_none() && self.revoke.is_empty()
    }
}
