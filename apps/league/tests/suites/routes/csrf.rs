use actix_web::cookie::Cookie;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use actix_web::test;
use league::middleware::csrf::{CSRF_COOKIE, CSRF_HEADER};
use league::AppError;
use league_test_support::assert_problem_details;

use crate::support::{build_test_state, create_test_app, form_post, CSRF_TEST_TOKEN};

const PLAYER_FORM: &str = "first_name=Ada&last_name=Lovelace&aga_id=1001&aga_rank=5";

#[tokio::test]
async fn test_safe_request_issues_token() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/dashboard/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let header = resp
        .headers()
        .get(CSRF_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("csrf header");
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == CSRF_COOKIE)
        .expect("csrf cookie");
    assert_eq!(cookie.value(), header);
    Ok(())
}

#[tokio::test]
async fn test_existing_cookie_is_echoed_not_reissued() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/dashboard/")
        .cookie(Cookie::new(CSRF_COOKIE, CSRF_TEST_TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        resp.headers().get(CSRF_HEADER).and_then(|v| v.to_str().ok()),
        Some(CSRF_TEST_TOKEN)
    );
    assert!(resp.response().cookies().all(|c| c.name() != CSRF_COOKIE));
    Ok(())
}

#[tokio::test]
async fn test_post_without_token_rejected() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state.clone()).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/dashboard/players/")
        .insert_header((CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload(PLAYER_FORM)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::FORBIDDEN, "CSRF_TOKEN_INVALID", None).await;

    // Rejected before the handler ran
    let players = league::repos::players::list_all(league::db::require_db(&state)?).await?;
    assert!(players.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_post_with_mismatched_token_rejected() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/dashboard/players/")
        .insert_header((CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .insert_header((CSRF_HEADER, "forged"))
        .cookie(Cookie::new(CSRF_COOKIE, CSRF_TEST_TOKEN))
        .set_payload(PLAYER_FORM)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::FORBIDDEN, "CSRF_TOKEN_INVALID", None).await;
    Ok(())
}

#[tokio::test]
async fn test_every_unsafe_route_is_protected() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    for uri in [
        "/dashboard/players/",
        "/dashboard/players/delete/",
        "/dashboard/games/",
        "/dashboard/games/update/",
    ] {
        let req = test::TestRequest::post().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn test_matching_token_reaches_handler() -> Result<(), AppError> {
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
    Ok(())
}
