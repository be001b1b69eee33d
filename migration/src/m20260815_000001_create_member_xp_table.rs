use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemberXp::Table)
                    .if_not_exists()
                    .col(string(MemberXp::MemberId).primary_key())
                    .col(integer(MemberXp::Xp))
                    .col(big_integer_null(MemberXp::VoiceJoinedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MemberXp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MemberXp {
    Table,
    MemberId,
    Xp,
    VoiceJoinedAt,
}
