use super::*;

/// Tests adding XP to a member with no existing record.
///
/// Verifies that the first award creates the record with the delta as the
/// starting total.
///
/// Expected: Ok with xp equal to the delta
#[tokio::test]
async fn creates_record_with_delta() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = MemberXpRepository::new(db);
    let member = repo.add_xp(100, 10).await?;

    assert_eq!(member.member_id, 100);
    assert_eq!(member.xp, 10);

    Ok(())
}

/// Tests that repeated awards accumulate.
///
/// Expected: Ok with xp equal to the sum of all deltas
#[tokio::test]
async fn accumulates_over_repeated_awards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = MemberXpRepository::new(db);
    repo.add_xp(100, 10).await?;
    repo.add_xp(100, 10).await?;
    let member = repo.add_xp(100, 5).await?;

    assert_eq!(member.xp, 25);

    Ok(())
}

/// Tests that additions saturate at the XP ceiling.
///
/// Expected: Ok with xp held at the ceiling, excess discarded
#[tokio::test]
async fn clamps_at_upper_bound() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::create_member_with_xp(db, 100, 9_995).await?;

    let repo = MemberXpRepository::new(db);
    let member = repo.add_xp(100, 10).await?;

    assert_eq!(member.xp, 10_000);

    Ok(())
}

/// Tests that negative deltas saturate at the XP floor.
///
/// Expected: Ok with xp held at zero rather than going negative
#[tokio::test]
async fn negative_delta_saturates_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::create_member_with_xp(db, 100, 5).await?;

    let repo = MemberXpRepository::new(db);
    let member = repo.add_xp(100, -10).await?;

    assert_eq!(member.xp, 0);

    Ok(())
}

/// Tests that a negative first award creates a record at the floor.
///
/// Expected: Ok with a record holding zero xp
#[tokio::test]
async fn creation_with_negative_delta_clamps_to_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = MemberXpRepository::new(db);
    let member = repo.add_xp(100, -50).await?;

    assert_eq!(member.xp, 0);

    Ok(())
}

/// Tests that extreme deltas are handled without arithmetic errors.
///
/// Expected: Ok saturating at the matching bound for both extremes
#[tokio::test]
async fn extreme_deltas_saturate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = MemberXpRepository::new(db);

    let maxed = repo.add_xp(100, i64::MAX).await?;
    assert_eq!(maxed.xp, 10_000);

    let floored = repo.add_xp(100, i64::MIN).await?;
    assert_eq!(floored.xp, 0);

    Ok(())
}

/// Tests that awarding XP leaves an open voice session untouched.
///
/// Message awards land while a member is sitting in voice; the pending
/// session must still be credited when they leave.
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
    let member = repo.add_xp(100, 10).await?;

    assert_eq!(member.xp, 510);
    assert_eq!(member.voice_joined_at, Some(1_700_000_000));

    Ok(())
}
