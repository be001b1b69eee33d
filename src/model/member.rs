use sea_orm::DbErr;

use crate::model::level::xp_to_level;
use crate::model::rank::ThresholdBasis;

/// A member's stored XP record.
///
/// This param model is the repository-boundary view of a `member_xp` row,
/// with the string snowflake parsed into a u64 so the service layer never
/// handles database ID representations directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberXp {
    /// Discord user ID as a u64.
    pub member_id: u64,
    /// Stored XP total, already clamped to the storable range.
    pub xp: i32,
    /// Epoch seconds of the member's open voice session, if any.
    pub voice_joined_at: Option<i64>,
}

impl MemberXp {
    /// Converts an entity model to a param model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(MemberXp)` - Successfully converted param model
    /// - `Err(DbErr::Custom)` - Failed to parse member_id as u64
    pub fn from_entity(entity: entity::member_xp::Model) -> Result<Self, DbErr> {
        let member_id = entity
            .member_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse member_id: {}", e)))?;

        Ok(Self {
            member_id,
            xp: entity.xp,
            voice_joined_at: entity.voice_joined_at,
        })
    }

    /// Display level derived from the stored XP total.
    pub fn level(&self) -> i32 {
        xp_to_level(self.xp)
    }
}

/// A member's position in the rank table, assembled for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberStanding {
    pub member_id: u64,
    pub xp: i32,
    pub level: i32,
    /// Rank role the member currently qualifies for, if any.
    pub rank: Option<String>,
    /// Next tier above the member, if they have not topped the table out.
    pub next_rank: Option<NextRank>,
    /// Units `NextRank::remaining` is measured in.
    pub basis: ThresholdBasis,
    /// Whether the member has an open voice session that is still accruing.
    pub in_voice: bool,
}

/// Progress toward the tier above a member's current rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextRank {
    pub role: String,
    /// Threshold of the next tier, in basis units.
    pub at: i64,
    /// Distance still to cover, in basis units.
    pub remaining: i64,
}

/// Outcome of settling an XP change for a member.
///
/// Captures the before/after pair and whether the change crossed into a
/// higher rank tier, so callers can report the transition without re-reading
/// the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpAdjustment {
    pub member_id: u64,
    pub xp_before: i32,
    pub xp_after: i32,
    pub level_before: i32,
    pub level_after: i32,
    /// Rank role the member qualifies for after the change.
    pub rank: Option<String>,
    /// Whether the change moved the member into a higher rank tier.
    pub promoted: bool,
}

impl XpAdjustment {
    /// Net stored change, after clamping at the XP bounds.
    pub fn applied_delta(&self) -> i64 {
        i64::from(self.xp_after) - i64::from(self.xp_before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_entity_parses_snowflake() {
        let entity = entity::member_xp::Model {
            member_id: "123456789012345678".to_string(),
            xp: 250,
            voice_joined_at: Some(1_700_000_000),
        };

        let member = MemberXp::from_entity(entity).unwrap();
        assert_eq!(member.member_id, 123456789012345678);
        assert_eq!(member.xp, 250);
        assert_eq!(member.voice_joined_at, Some(1_700_000_000));
    }

    #[test]
    fn from_entity_rejects_malformed_id() {
        let entity = entity::member_xp::Model {
            member_id: "not-a-snowflake".to_string(),
            xp: 0,
            voice_joined_at: None,
        };

        assert!(MemberXp::from_entity(entity).is_err());
    }

    #[test]
    fn adjustment_reports_the_stored_delta() {
        let clamped = XpAdjustment {
            member_id: 1,
            xp_before: 9_995,
            xp_after: 10_000,
            level_before: xp_to_level(9_995),
            level_after: xp_to_level(10_000),
            rank: None,
            promoted: false,
        };

        // The delta reflects what the store kept, not what was requested.
        assert_eq!(clamped.applied_delta(), 5);
    }
}
