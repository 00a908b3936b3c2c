use league::db::require_db;
use league::db::txn::with_txn;
use league::errors::domain::{ConflictKind, DomainError};
use league::repos::players;
use league::AppError;

use crate::support::build_test_state;

#[tokio::test]
async fn test_conflict_rolls_back_whole_transaction() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let res: Result<(), DomainError> = with_txn(db, |txn| {
        Box::pin(async move {
            players::create(txn, "First", "Insert", 6001, 1).await?;
            players::create(txn, "Second", "Insert", 6001, 2).await?;
            Ok(())
        })
    })
    .await;

    assert!(matches!(
        res,
        Err(DomainError::Conflict(ConflictKind::UniqueAgaId, _))
    ));
    assert!(players::list_all(db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_ok_commits_every_write() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let created = with_txn(db, |txn| {
        Box::pin(async move {
            let a = players::create(txn, "A", "Pair", 6001, 1).await?;
            let b = players::create(txn, "B", "Pair", 6002, 1).await?;
            Ok::<_, DomainError>((a.id, b.id))
        })
    })
    .await?;

    let ids: Vec<i64> = players::list_all(db).await?.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![created.0, created.1]);
    Ok(())
}
