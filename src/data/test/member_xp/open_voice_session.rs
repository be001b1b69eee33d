use super::*;

/// Tests opening a voice session for a member with no record.
///
/// Verifies that the upsert creates the record with zero XP and the stamp.
///
/// Expected: Ok with a record holding the session stamp
#[tokio::test]
async fn creates_record_with_stamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = MemberXpRepository::new(db);
    repo.open_voice_session(100, 1_700_000_000).await?;

    let member = repo.find(100).await?.unwrap();
    assert_eq!(member.xp, 0);
    assert_eq!(member.voice_joined_at, Some(1_700_000_000));

    Ok(())
}

/// Tests opening a voice session for an existing member.
///
/// Expected: Ok with the stamp set and the XP total untouched
#[tokio::test]
async fn sets_stamp_without_touching_xp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::create_member_with_xp(db, 100, 1_234).await?;

    let repo = MemberXpRepository::new(db);
    repo.open_voice_session(100, 1_700_000_000).await?;

    let member = repo.find(100).await?.unwrap();
    assert_eq!(member.xp, 1_234);
    assert_eq!(member.voice_joined_at, Some(1_700_000_000));

    Ok(())
}

/// Tests re-opening over a session that was never closed.
///
/// A stamp can be left dangling when the process dies mid-session; the next
/// join must take over rather than crediting the stale interval later.
///
/// Expected: Ok with the newer stamp replacing the stale one
#[tokio::test]
async fn overwrites_stale_stamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::create_member_in_voice(db, 100, 500, 1_700_000_000).await?;

    let repo = MemberXpRepository::new(db);
    repo.open_voice_session(100, 1_700_009_999).await?;

    let member = repo.find(100).await?.unwrap();
    assert_eq!(member.voice_joined_at, Some(1_700_009_999));

    Ok(())
}
