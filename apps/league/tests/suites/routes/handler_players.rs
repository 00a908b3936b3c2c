use actix_web::http::StatusCode;
use actix_web::test;
use league::db::require_db;
use league::domain::Color;
use league::forms::fields;
use league::AppError;
use league_test_support::{assert_problem_details, field_errors};
use serde_json::Value;

use crate::support::factory::{create_test_game, create_test_player, game_record};
use crate::support::{build_test_state, create_test_app, form_post};

#[tokio::test]
async fn test_list_players_empty() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/dashboard/players/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["players"], serde_json::json!([]));
    Ok(())
}

#[tokio::test]
async fn test_create_player_echoes_fields() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = form_post(
        "/dashboard/players/",
        &[
            ("first_name", "Ada"),
            ("last_name", "Lovelace"),
            ("aga_id", "1001"),
            ("aga_rank", "5"),
        ],
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Player created!");
    assert_eq!(body["player"]["first_name"], "Ada");
    assert_eq!(body["player"]["last_name"], "Lovelace");
    assert_eq!(body["player"]["aga_id"], 1001);
    assert_eq!(body["player"]["aga_rank"], 5);
    assert!(body["player"]["id"].as_i64().is_some());
    Ok(())
}

#[tokio::test]
async fn test_create_player_reports_every_field() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = form_post(
        "/dashboard/players/",
        &[
            ("first_name", "  "),
            ("aga_id", "60000"),
            ("aga_rank", "0"),
        ],
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    let problem =
        assert_problem_details(resp, StatusCode::UNPROCESSABLE_ENTITY, "FORM_INVALID", None)
            .await;

    assert_eq!(field_errors(&problem, "first_name"), [fields::REQUIRED]);
    assert_eq!(field_errors(&problem, "last_name"), [fields::REQUIRED]);
    assert_eq!(
        field_errors(&problem, "aga_id"),
        [fields::out_of_range(&league::domain::AGA_ID_RANGE)]
    );
    assert_eq!(field_errors(&problem, "aga_rank"), [fields::INVALID_RANK]);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_aga_id_is_conflict() -> Result<(), AppError> {
    let state = build_test_state().await?;
    create_test_player(require_db(&state)?, "Existing", 1001, 3).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = form_post(
        "/dashboard/players/",
        &[
            ("first_name", "Other"),
            ("last_name", "Person"),
            ("aga_id", "1001"),
            ("aga_rank", "-2"),
        ],
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        StatusCode::CONFLICT,
        "UNIQUE_AGA_ID",
        Some("Could not save changes"),
    )
    .await;
    Ok(())
}

#[tokio::test]
async fn test_player_detail_lists_derived_games() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let a = create_test_player(db, "A", 1001, 5).await?;
    let b = create_test_player(db, "B", 1002, -3).await?;
    let c = create_test_player(db, "C", 1003, 1).await?;
    create_test_game(db, game_record(a.id, b.id, Color::White)).await?;
    create_test_game(db, game_record(c.id, a.id, Color::White)).await?;
    create_test_game(db, game_record(b.id, c.id, Color::Black)).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri(&format!("/dashboard/players/{}/", a.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["player"]["aga_id"], 1001);
    let games = body["games"].as_array().expect("games array");
    assert_eq!(games.len(), 2);
    for game in games {
        let sides = [game["white_id"].as_i64(), game["black_id"].as_i64()];
        assert!(sides.contains(&Some(a.id)));
    }
    Ok(())
}

#[tokio::test]
async fn test_player_detail_unknown_id() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/dashboard/players/4242/")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        StatusCode::NOT_FOUND,
        "PLAYER_NOT_FOUND",
        Some("Player 4242 does not exist"),
    )
    .await;
    Ok(())
}

#[tokio::test]
async fn test_player_detail_rejects_non_integer_id() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/dashboard/players/abc/")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::BAD_REQUEST, "INVALID_PLAYER_ID", None).await;
    Ok(())
}

#[tokio::test]
async fn test_delete_player_without_games() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let lonely = create_test_player(db, "Lonely", 1500, 2).await?;
    let app = create_test_app(state.clone()).with_prod_routes().build().await?;

    let player_id = lonely.id.to_string();
    let req = form_post("/dashboard/players/delete/", &[("player_id", player_id.as_str())])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Player deleted!");
    assert_eq!(body["player_id"], lonely.id);

    let remaining = league::repos::players::find_by_id(require_db(&state)?, lonely.id).await?;
    assert!(remaining.is_none());
    Ok(())
}

#[tokio::test]
async fn test_delete_player_with_games_rejected() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let a = create_test_player(db, "A", 1001, 5).await?;
    let b = create_test_player(db, "B", 1002, -3).await?;
    create_test_game(db, game_record(a.id, b.id, Color::Black)).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let player_id = a.id.to_string();
    let req = form_post("/dashboard/players/delete/", &[("player_id", player_id.as_str())])
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem =
        assert_problem_details(resp, StatusCode::UNPROCESSABLE_ENTITY, "FORM_INVALID", None)
            .await;
    assert_eq!(
        field_errors(&problem, "player_id"),
        [fields::PLAYER_HAS_GAMES]
    );
    Ok(())
}

#[tokio::test]
async fn test_delete_unknown_player() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = form_post("/dashboard/players/delete/", &[("player_id", "77")]).to_request();
    let resp = test::call_service(&app, req).await;
    let problem =
        assert_problem_details(resp, StatusCode::UNPROCESSABLE_ENTITY, "FORM_INVALID", None)
            .await;
    assert_eq!(
        field_errors(&problem, "player_id"),
        [fields::player_missing(77)]
    );
    Ok(())
}
