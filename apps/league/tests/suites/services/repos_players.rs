use league::db::require_db;
use league::domain::Color;
use league::errors::domain::{DomainError, ValidationKind};
use league::repos::players;
use league::AppError;

use crate::support::build_test_state;
use crate::support::factory::{create_test_game, create_test_player, game_record};

#[tokio::test]
async fn test_lookups_by_id_and_aga_id() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let p = create_test_player(db, "Go", 4001, -12).await?;

    assert_eq!(players::find_by_id(db, p.id).await?, Some(p.clone()));
    assert_eq!(players::find_by_aga_id(db, 4001).await?, Some(p.clone()));
    assert_eq!(players::find_by_aga_id(db, 4002).await?, None);
    assert_eq!((p.first_name.as_str(), p.last_name.as_str()), ("Go", "Tester"));
    Ok(())
}

#[tokio::test]
async fn test_list_all_ordered_by_id() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let first = create_test_player(db, "Z", 4003, 1).await?;
    let second = create_test_player(db, "A", 4001, 1).await?;

    let ids: Vec<i64> = players::list_all(db).await?.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    Ok(())
}

#[tokio::test]
async fn test_game_counts_cover_both_colors() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let a = create_test_player(db, "A", 4001, 1).await?;
    let b = create_test_player(db, "B", 4002, 1).await?;
    let c = create_test_player(db, "C", 4003, 1).await?;
    create_test_game(db, game_record(a.id, b.id, Color::White)).await?;
    create_test_game(db, game_record(b.id, a.id, Color::White)).await?;

    assert_eq!(players::count_games_for_player(db, a.id).await?, 2);
    assert_eq!(players::count_games_for_player(db, c.id).await?, 0);
    assert_eq!(players::games_for_player(db, b.id).await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_delete_reports_missing_rows() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let p = create_test_player(db, "Gone", 4001, 1).await?;

    assert!(players::delete(db, p.id).await?);
    assert!(!players::delete(db, p.id).await?);
    Ok(())
}

#[tokio::test]
async fn test_storage_rank_check_backs_up_forms() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let err = players::create(db, "Bad", "Rank", 4001, 0).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::CheckViolation, _)
    ));
    Ok(())
}
