use actix_web::http::StatusCode;
use actix_web::test;
use league::db::require_db;
use league::domain::{Color, REPORT_SEASON_RANGE};
use league::forms::fields;
use league::AppError;
use league_test_support::{assert_problem_details, field_errors};
use serde_json::{json, Value};
use time::macros::datetime;

use crate::support::factory::{create_game_at, create_test_player, game_record};
use crate::support::{build_test_state, create_test_app};

/// Three games across two seasons; returns the app and the player ids.
async fn seeded_app() -> Result<
    (
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        i64,
        i64,
    ),
    AppError,
> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let a = create_test_player(db, "A", 1001, 5).await?;
    let b = create_test_player(db, "B", 1002, -3).await?;
    create_game_at(
        db,
        game_record(a.id, b.id, Color::White),
        1,
        1,
        datetime!(2017-01-03 19:00:00 +00:00),
    )
    .await?;
    create_game_at(
        db,
        game_record(b.id, a.id, Color::White),
        1,
        2,
        datetime!(2017-01-10 19:00:00 +00:00),
    )
    .await?;
    create_game_at(
        db,
        game_record(a.id, b.id, Color::Black),
        2,
        1,
        datetime!(2017-06-01 19:00:00 +00:00),
    )
    .await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    Ok((app, a.id, b.id))
}

fn tally_for(body: &Value, player_id: i64) -> Value {
    body["players"]
        .as_array()
        .expect("players array")
        .iter()
        .find(|t| t["player"]["id"] == player_id)
        .cloned()
        .expect("tally for player")
}

#[tokio::test]
async fn test_blank_query_reports_everything() -> Result<(), AppError> {
    let (app, a, b) = seeded_app().await?;

    let req = test::TestRequest::get().uri("/dashboard/reports/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["period"], Value::Null);
    assert_eq!(body["games"].as_array().map(Vec::len), Some(3));

    let ta = tally_for(&body, a);
    assert_eq!(ta["games_played"], 3);
    assert_eq!(ta["wins"], 1);
    assert_eq!(ta["losses"], 2);
    let tb = tally_for(&body, b);
    assert_eq!(tb["wins"], 2);
    assert_eq!(tb["losses"], 1);
    Ok(())
}

#[tokio::test]
async fn test_episode_zero_selects_whole_season() -> Result<(), AppError> {
    let (app, a, _) = seeded_app().await?;

    let req = test::TestRequest::get()
        .uri("/dashboard/reports/?season=1&episode=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["period"], json!({"season": 1, "episode": 0}));
    assert_eq!(body["games"].as_array().map(Vec::len), Some(2));
    assert_eq!(tally_for(&body, a)["games_played"], 2);
    Ok(())
}

#[tokio::test]
async fn test_episode_narrows_report() -> Result<(), AppError> {
    let (app, a, b) = seeded_app().await?;

    let req = test::TestRequest::get()
        .uri("/dashboard/reports/?season=1&episode=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;

    let games = body["games"].as_array().expect("games array");
    assert_eq!(games.len(), 1);
    assert_eq!(games[0]["episode"], 2);
    // b played white and white won
    assert_eq!(tally_for(&body, b)["wins"], 1);
    assert_eq!(tally_for(&body, a)["losses"], 1);
    Ok(())
}

#[tokio::test]
async fn test_players_without_games_still_listed() -> Result<(), AppError> {
    let (app, a, _) = seeded_app().await?;

    let req = test::TestRequest::get()
        .uri("/dashboard/reports/?season=9")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["games"], json!([]));
    assert_eq!(tally_for(&body, a)["games_played"], 0);
    Ok(())
}

#[tokio::test]
async fn test_season_required_once_filtering() -> Result<(), AppError> {
    let (app, _, _) = seeded_app().await?;

    let req = test::TestRequest::get()
        .uri("/dashboard/reports/?episode=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem =
        assert_problem_details(resp, StatusCode::UNPROCESSABLE_ENTITY, "FORM_INVALID", None)
            .await;
    assert_eq!(field_errors(&problem, "season"), [fields::REQUIRED]);
    Ok(())
}

#[tokio::test]
async fn test_season_zero_out_of_range() -> Result<(), AppError> {
    let (app, _, _) = seeded_app().await?;

    let req = test::TestRequest::get()
        .uri("/dashboard/reports/?season=0&episode=x")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem =
        assert_problem_details(resp, StatusCode::UNPROCESSABLE_ENTITY, "FORM_INVALID", None)
            .await;
    assert_eq!(
        field_errors(&problem, "season"),
        [fields::out_of_range(&REPORT_SEASON_RANGE)]
    );
    assert_eq!(field_errors(&problem, "episode"), [fields::NOT_AN_INTEGER]);
    Ok(())
}
