use sea_orm::entity::prelude::*;

/// Per-member experience record.
///
/// One row per guild member that has ever produced a qualifying activity
/// event. `xp` is kept inside `[0, 10000]` by the repository on every write.
/// `voice_joined_at` (epoch seconds) is set only while the member has an open
/// voice session that has not yet been converted to XP.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "member_xp")]
pub struct Model {
    /// Discord user ID (snowflake) stored as a string.
    #[sea_orm(primary_key, auto_increment = false)]
    pub member_id: String,
    pub xp: i32,
    pub voice_joined_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
