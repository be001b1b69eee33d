use super::*;

/// Tests wiping the whole XP store.
///
/// Expected: Ok with the removed row count and an empty table afterwards
#[tokio::test]
async fn removes_every_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::create_member_with_xp(db, 100, 10).await?;
    factory::create_member_with_xp(db, 200, 20).await?;
    factory::create_member_in_voice(db, 300, 30, 1_700_000_000).await?;

    let repo = MemberXpRepository::new(db);
    let removed = repo.clear_all().await?;

    assert_eq!(removed, 3);

    let count = entity::prelude::MemberXp::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests wiping an already-empty store.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_on_empty_store() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_xp_table()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = MemberXpRepository::new(db);
    let removed = repo.clear_all().await?;

    assert_eq!(removed, 0);

    Ok(())
}
