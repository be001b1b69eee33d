use super::*;

/// Tests reading XP for a member with no record.
///
/// Verifies that members who have never produced a qualifying event read as
/// zero XP rather than an error or a missing value.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = MemberXpRepository::new(db);
    let xp = repo.get_xp(100).await?;

    assert_eq!(xp, 0);

    Ok(())
}

/// Tests reading XP for a member with a stored record.
///
/// Expected: Ok with the stored total
#[tokio::test]
async fn returns_stored_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::create_member_with_xp(db, 100, 1_500).await?;

    let repo = MemberXpRepository::new(db);
    let xp = repo.get_xp(100).await?;

    assert_eq!(xp, 1_500);

    Ok(())
}

/// Tests that reading XP never creates a record.
///
/// Expected: Ok(0) and the store stays empty
#[tokio::test]
async fn read_does_not_create_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = MemberXpRepository::new(db);
    repo.get_xp(100).await?;

    let count = entity::prelude::MemberXp::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
