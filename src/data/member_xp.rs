//! Member XP repository for database operations.
//!
//! This module provides the `MemberXpRepository` for reading and mutating
//! per-member XP records and voice session stamps. XP writes clamp into the
//! storable range, and the read-modify-write operations (`add_xp`,
//! `close_voice_session`) are phrased so that concurrent gateway events cannot
//! lose updates: additions happen inside a single upsert statement and session
//! closes use a compare-and-swap on the observed timestamp.
//!
//! All methods return domain models at the repository boundary, converting
//! SeaORM entity models internally to prevent database-specific structures
//! from leaking into service and bot layers.

use migration::OnConflict;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::level::{clamp_xp, XP_MAX, XP_MIN};
use crate::model::member::MemberXp;

/// Repository for member XP database operations.
pub struct MemberXpRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> MemberXpRepository<'a> {
    /// Creates a new repository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a member's XP record.
    ///
    /// # Returns
    /// - `Ok(Some(MemberXp))` - The member's record as a domain model
    /// - `Ok(None)` - The member has never accrued XP
    /// - `Err(DbErr)` - Database error during lookup or ID conversion
    pub async fn find(&self, member_id: u64) -> Result<Option<MemberXp>, DbErr> {
        let entity = entity::prelude::MemberXp::find_by_id(member_id.to_string())
            .one(self.db)
            .await?;

        entity.map(MemberXp::from_entity).transpose()
    }

    /// Returns a member's XP total, treating unknown members as zero.
    pub async fn get_xp(&self, member_id: u64) -> Result<i32, DbErr> {
        Ok(self.find(member_id).await?.map_or(0, |member| member.xp))
    }

    /// Overwrites a member's XP total, creating the record if missing.
    ///
    /// The value is clamped into the storable range before writing. An open
    /// voice session stamp on an existing record is left untouched.
    ///
    /// # Returns
    /// - `Ok(MemberXp)` - The record after the write
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn set_xp(&self, member_id: u64, value: i64) -> Result<MemberXp, DbErr> {
        let entity = entity::prelude::MemberXp::insert(entity::member_xp::ActiveModel {
            member_id: ActiveValue::Set(member_id.to_string()),
            xp: ActiveValue::Set(clamp_xp(value)),
            voice_joined_at: ActiveValue::Set(None),
        })
        .on_conflict(
            OnConflict::column(entity::member_xp::Column::MemberId)
                .update_columns([entity::member_xp::Column::Xp])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        MemberXp::from_entity(entity)
    }

    /// Adds a signed delta to a member's XP total, creating the record if missing.
    ///
    /// The addition and clamping run inside the upsert statement itself, so
    /// concurrent awards for the same member serialize in the store and none
    /// are lost. Negative deltas saturate at the lower bound rather than
    /// going below it.
    ///
    /// # Returns
    /// - `Ok(MemberXp)` - The record after the addition
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn add_xp(&self, member_id: u64, delta: i64) -> Result<MemberXp, DbErr> {
        // Stored xp stays within [XP_MIN, XP_MAX], so any delta of larger
        // magnitude saturates anyway. Bounding the bind parameter keeps the
        // SQL addition clear of SQLite's integer overflow error.
        let delta = delta.clamp(-i64::from(XP_MAX), i64::from(XP_MAX));

        let entity = entity::prelude::MemberXp::insert(entity::member_xp::ActiveModel {
            member_id: ActiveValue::Set(member_id.to_string()),
            xp: ActiveValue::Set(clamp_xp(delta)),
            voice_joined_at: ActiveValue::Set(None),
        })
        .on_conflict(
            OnConflict::column(entity::member_xp::Column::MemberId)
                .value(
                    entity::member_xp::Column::Xp,
                    Expr::cust_with_values(
                        "MIN(MAX(\"xp\" + ?, ?), ?)",
                        [delta, i64::from(XP_MIN), i64::from(XP_MAX)],
                    ),
                )
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        MemberXp::from_entity(entity)
    }

    /// Records the start of a voice session, creating the record if missing.
    ///
    /// An already-open session is overwritten with the new timestamp, which
    /// covers sessions left dangling across process restarts.
    pub async fn open_voice_session(&self, member_id: u64, timestamp: i64) -> Result<(), DbErr> {
        entity::prelude::MemberXp::insert(entity::member_xp::ActiveModel {
            member_id: ActiveValue::Set(member_id.to_string()),
            xp: ActiveValue::Set(0),
            voice_joined_at: ActiveValue::Set(Some(timestamp)),
        })
        .on_conflict(
            OnConflict::column(entity::member_xp::Column::MemberId)
                .update_columns([entity::member_xp::Column::VoiceJoinedAt])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(())
    }

    /// Closes a member's open voice session and returns its start timestamp.
    ///
    /// The clear is guarded on the observed timestamp, so when two closes
    /// race only one of them gets the stamp back and the session is credited
    /// exactly once.
    ///
    /// # Returns
    /// - `Ok(Some(i64))` - Session start stamp; this caller owns the credit
    /// - `Ok(None)` - No open session, or a concurrent close already took it
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn close_voice_session(&self, member_id: u64) -> Result<Option<i64>, DbErr> {
        let Some(record) = self.find(member_id).await? else {
            return Ok(None);
        };
        let Some(joined_at) = record.voice_joined_at else {
            return Ok(None);
        };

        let cleared = entity::prelude::MemberXp::update_many()
            .col_expr(
                entity::member_xp::Column::VoiceJoinedAt,
                Expr::value(None::<i64>),
            )
            .filter(entity::member_xp::Column::MemberId.eq(member_id.to_string()))
            .filter(entity::member_xp::Column::VoiceJoinedAt.eq(joined_at))
            .exec(self.db)
            .await?;

        if cleared.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(joined_at))
    }

    /// Deletes every XP record.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records removed
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn clear_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::MemberXp::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
