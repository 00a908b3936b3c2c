use league::db::require_db;
use league::domain::Color;
use league::errors::domain::DomainError;
use league::forms::{fields, RawForm};
use league::services::games;
use league::AppError;
use time::macros::datetime;

use crate::support::build_test_state;
use crate::support::factory::{create_game_at, create_test_player, game_record};

fn game_form(white: &str, black: &str) -> RawForm {
    RawForm::new()
        .with("white_id", white)
        .with("black_id", black)
        .with("winner", "BLACK")
        .with("handicap", "3")
        .with("komi", "0")
        .with("season", "4")
        .with("episode", "2")
}

#[tokio::test]
async fn test_create_game_defaults_played_at_to_now() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let a = create_test_player(db, "A", 2001, 1).await?;
    let b = create_test_player(db, "B", 2002, -10).await?;

    let before = time::OffsetDateTime::now_utc() - time::Duration::seconds(1);
    let game = games::create_game(db, game_form("2001", "2002")).await?;
    let after = time::OffsetDateTime::now_utc() + time::Duration::seconds(1);

    assert_eq!(game.white_id, a.id);
    assert_eq!(game.black_id, b.id);
    assert_eq!(game.winner, Color::Black);
    assert_eq!(game.winner_id(), b.id);
    assert_eq!((game.handicap, game.komi), (3, 0));
    assert_eq!((game.season, game.episode), (4, 2));
    assert!(game.played_at >= before && game.played_at <= after);
    Ok(())
}

#[tokio::test]
async fn test_self_play_reported_with_other_failures() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let raw = RawForm::new()
        .with("white_id", "7")
        .with("black_id", "7")
        .with("handicap", "1")
        .with("played_at", "yesterday");
    let err = games::create_game(db, raw).await.unwrap_err();
    let DomainError::InvalidForm(errors) = err else {
        panic!("expected form errors");
    };
    assert_eq!(errors.field("black_id"), [fields::SELF_PLAY]);
    assert_eq!(errors.field("white_id"), [fields::aga_id_unknown(7)]);
    assert_eq!(errors.field("handicap"), [fields::NOT_A_CHOICE]);
    assert_eq!(errors.field("played_at"), [fields::NOT_A_DATETIME]);
    assert_eq!(errors.field("winner"), [fields::REQUIRED]);
    assert!(games::list_games(db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_update_game_with_unknown_id() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    create_test_player(db, "A", 2001, 1).await?;
    create_test_player(db, "B", 2002, 1).await?;

    for missing in [0, 12, 50000] {
        let raw = game_form("2001", "2002").with("game_id", &missing.to_string());
        let err = games::update_game(db, raw).await.unwrap_err();
        let DomainError::InvalidForm(errors) = err else {
            panic!("expected form errors for game {missing}");
        };
        assert_eq!(errors.field("game_id"), [fields::game_missing(missing)]);
    }
    Ok(())
}

#[tokio::test]
async fn test_update_game_replaces_played_at_when_given() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let a = create_test_player(db, "A", 2001, 1).await?;
    let b = create_test_player(db, "B", 2002, 1).await?;
    let game = create_game_at(
        db,
        game_record(a.id, b.id, Color::White),
        1,
        1,
        datetime!(2017-01-10 20:00:00 +00:00),
    )
    .await?;

    let raw = game_form("2001", "2002")
        .with("game_id", &game.id.to_string())
        .with("played_at", "2017-02-01 18:15:00 +0100");
    let updated = games::update_game(db, raw).await?;
    assert_eq!(updated.id, game.id);
    assert_eq!(updated.played_at, datetime!(2017-02-01 18:15:00 +01:00));
    assert_eq!(updated.winner, Color::Black);
    assert_eq!(games::list_games(db).await?, vec![updated]);
    Ok(())
}
