use super::*;

/// Tests closing an open voice session.
///
/// Verifies that the close returns the start stamp and clears it, leaving
/// the XP total for the caller to settle.
///
/// Expected: Ok(Some(stamp)) with the stamp cleared and xp untouched
#[tokio::test]
async fn returns_stamp_and_clears_it() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::create_member_in_voice(db, 100, 500, 1_700_000_000).await?;

    let repo = MemberXpRepository::new(db);
    let stamp = repo.close_voice_session(100).await?;

    assert_eq!(stamp, Some(1_700_000_000));

    let member = repo.find(100).await?.unwrap();
    assert!(member.voice_joined_at.is_none());
    assert_eq!(member.xp, 500);

    Ok(())
}

/// Tests closing a session for a member with no record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = MemberXpRepository::new(db);
    let stamp = repo.close_voice_session(100).await?;

    assert!(stamp.is_none());

    Ok(())
}

/// Tests closing when the member has no open session.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_open_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::create_member_with_xp(db, 100, 500).await?;

    let repo = MemberXpRepository::new(db);
    let stamp = repo.close_voice_session(100).await?;

    assert!(stamp.is_none());

    Ok(())
}

/// Tests that a session yields its stamp to exactly one closer.
///
/// Discord can deliver duplicate leave events; the second close must not
/// hand the same interval out again or the session would be credited twice.
///
/// Expected: Ok(Some) on the first close, Ok(None) on the second
#[tokio::test]
async fn second_close_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::create_member_in_voice(db, 100, 0, 1_700_000_000).await?;

    let repo = MemberXpRepository::new(db);
    let first = repo.close_voice_session(100).await?;
    let second = repo.close_voice_session(100).await?;

    assert_eq!(first, Some(1_700_000_000));
    assert!(second.is_none());

    Ok(())
}
