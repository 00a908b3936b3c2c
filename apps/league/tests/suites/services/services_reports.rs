use league::db::require_db;
use league::domain::Color;
use league::errors::domain::DomainError;
use league::forms::{fields, RawForm};
use league::services::reports;
use league::AppError;
use time::macros::datetime;

use crate::support::build_test_state;
use crate::support::factory::{create_game_at, create_test_player, game_record};

#[tokio::test]
async fn test_report_periods() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let a = create_test_player(db, "A", 3001, 3).await?;
    let b = create_test_player(db, "B", 3002, 3).await?;
    let c = create_test_player(db, "C", 3003, 3).await?;

    let s1e1 = create_game_at(
        db,
        game_record(a.id, b.id, Color::White),
        1,
        1,
        datetime!(2017-01-03 19:00:00 -05:00),
    )
    .await?;
    let s1e2 = create_game_at(
        db,
        game_record(c.id, a.id, Color::Black),
        1,
        2,
        datetime!(2017-01-10 19:00:00 -05:00),
    )
    .await?;
    let s2e1 = create_game_at(
        db,
        game_record(b.id, c.id, Color::White),
        2,
        1,
        datetime!(2017-05-02 19:00:00 -05:00),
    )
    .await?;

    let everything = reports::generate_report(db, RawForm::new()).await?;
    assert_eq!(everything.period, None);
    assert_eq!(everything.games, vec![s1e1.clone(), s1e2.clone(), s2e1]);

    let season = reports::generate_report(db, RawForm::new().with("season", "1")).await?;
    assert_eq!(season.games, vec![s1e1, s1e2.clone()]);
    let a_tally = season
        .players
        .iter()
        .find(|t| t.player.id == a.id)
        .expect("a listed");
    assert_eq!((a_tally.games_played, a_tally.wins, a_tally.losses), (2, 2, 0));

    let episode = reports::generate_report(
        db,
        RawForm::new().with("season", "1").with("episode", "2"),
    )
    .await?;
    assert_eq!(episode.games, vec![s1e2]);
    let b_tally = episode
        .players
        .iter()
        .find(|t| t.player.id == b.id)
        .expect("b listed");
    assert_eq!(b_tally.games_played, 0);
    Ok(())
}

#[tokio::test]
async fn test_report_rejects_bad_period() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let err = reports::generate_report(
        db,
        RawForm::new().with("season", "10001").with("episode", "-1"),
    )
    .await
    .unwrap_err();
    let DomainError::InvalidForm(errors) = err else {
        panic!("expected form errors");
    };
    assert_eq!(
        errors.field("season"),
        [fields::out_of_range(&league::domain::REPORT_SEASON_RANGE)]
    );
    assert_eq!(
        errors.field("episode"),
        [fields::out_of_range(&league::domain::EPISODE_RANGE)]
    );
    Ok(())
}
