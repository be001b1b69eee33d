use super::*;

/// Tests overwriting XP for a member with no existing record.
///
/// Verifies that the upsert creates the record on first write.
///
/// Expected: Ok with a record holding the new total and no voice session
#[tokio::test]
async fn creates_record_for_new_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = MemberXpRepository::new(db);
    let member = repo.set_xp(100, 500).await?;

    assert_eq!(member.member_id, 100);
    assert_eq!(member.xp, 500);
    assert!(member.voice_joined_at.is_none());

    let stored = entity::prelude::MemberXp::find_by_id("100".to_string())
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests overwriting an existing XP total.
///
/// Expected: Ok with the replacement total, not a sum
#[tokio::test]
async fn overwrites_existing_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::create_member_with_xp(db, 100, 1_000).await?;

    let repo = MemberXpRepository::new(db);
    let member = repo.set_xp(100, 250).await?;

    assert_eq!(member.xp, 250);

    Ok(())
}

/// Tests that values above the XP ceiling are clamped on write.
///
/// Expected: Ok with xp stored at the ceiling
#[tokio::test]
async fn clamps_value_above_maximum() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = MemberXpRepository::new(db);
    let member = repo.set_xp(100, 25_000).await?;

    assert_eq!(member.xp, 10_000);

    Ok(())
}

/// Tests that negative values are clamped to the XP floor on write.
///
/// Expected: Ok with xp stored as zero
#[tokio::test]
async fn clamps_negative_value_to_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = MemberXpRepository::new(db);
    let member = repo.set_xp(100, -5).await?;

    assert_eq!(member.xp, 0);

    Ok(())
}

/// Tests that overwriting XP leaves an open voice session untouched.
///
/// A member can receive an admin adjustment while sitting in voice; the
/// pending session must still be credited when they leave.
///
/// Expected: Ok with the original voice stamp preserved
#[tokio::test]
async fn preserves_open_voice_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::create_member_in_voice(db, 100, 500, 1_700_000_000).await?;

    let repo = MemberXpRepository::new(db);
    let member = repo.set_xp(100, 2_000).await?;

    assert_eq!(member.xp, 2_000);
    assert_eq!(member.voice_joined_at, Some(1_700_000_000));

    Ok(())
}
