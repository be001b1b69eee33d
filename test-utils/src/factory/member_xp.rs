//! Member XP factory for creating test XP records.
//!
//! This module provides factory methods for creating member XP entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_snowflake;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test member XP records with customizable fields.
///
/// Provides a builder pattern for creating member XP entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::member_xp::MemberXpFactory;
///
/// let member = MemberXpFactory::new(&db)
///     .member_id(123456789)
///     .xp(1_500)
///     .build()
///     .await?;
/// ```
pub struct MemberXpFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: String,
    xp: i32,
    voice_joined_at: Option<i64>,
}

impl<'a> MemberXpFactory<'a> {
    /// Creates a new MemberXpFactory with default values.
    ///
    /// Defaults:
    /// - member_id: generated unique snowflake
    /// - xp: `0`
    /// - voice_joined_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `MemberXpFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            member_id: next_snowflake().to_string(),
            xp: 0,
            voice_joined_at: None,
        }
    }

    /// Sets the Discord member ID for the record.
    pub fn member_id(mut self, member_id: u64) -> Self {
        self.member_id = member_id.to_string();
        self
    }

    /// Sets the stored XP total for the record.
    pub fn xp(mut self, xp: i32) -> Self {
        self.xp = xp;
        self
    }

    /// Sets the open voice session timestamp for the record.
    pub fn voice_joined_at(mut self, voice_joined_at: Option<i64>) -> Self {
        self.voice_joined_at = voice_joined_at;
        self
    }

    /// Builds and inserts the member XP entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member_xp::Model)` - Created member XP entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member_xp::Model, DbErr> {
        entity::member_xp::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            xp: ActiveValue::Set(self.xp),
            voice_joined_at: ActiveValue::Set(self.voice_joined_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member XP record with default values.
///
/// Shorthand for `MemberXpFactory::new(db).build().await`.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member_xp::Model, DbErr> {
    MemberXpFactory::new(db).build().await
}

/// Creates a member XP record with a specific member ID and XP total.
///
/// # Example
///
/// ```rust,ignore
/// let member = create_member_with_xp(db, 123456789, 1_500).await?;
/// ```
pub async fn create_member_with_xp(
    db: &DatabaseConnection,
    member_id: u64,
    xp: i32,
) -> Result<entity::member_xp::Model, DbErr> {
    MemberXpFactory::new(db).member_id(member_id).xp(xp).build().await
}

/// Creates a member XP record with an open voice session.
///
/// # Example
///
/// ```rust,ignore
/// let member = create_member_in_voice(db, 123456789, 500, 1_700_000_000).await?;
/// ```
pub async fn create_member_in_voice(
    db: &DatabaseConnection,
    member_id: u64,
    xp: i32,
    joined_at: i64,
) -> Result<entity::member_xp::Model, DbErr> {
    MemberXpFactory::new(db)
        .member_id(member_id)
        .xp(xp)
        .voice_joined_at(Some(joined_at))
        .build()
        .await
}
