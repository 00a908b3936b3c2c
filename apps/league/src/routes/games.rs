use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::FormBody;
use crate::repos::games::Game;
use crate::services::games;
use crate::state::app_state::AppState;

pub const GAME_CREATED: &str = "Game created!";
pub const GAME_UPDATED: &str = "Game updated!";

#[derive(Debug, Serialize)]
pub struct GameListResponse {
    pub games: Vec<Game>,
}

#[derive(Debug, Serialize)]
pub struct GameSavedResponse {
    pub message: &'static str,
    pub game: Game,
}

async fn list_games(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let games = games::list_games(db).await?;
    Ok(HttpResponse::Ok().json(GameListResponse { games }))
}

async fn create_game(
    app_state: web::Data<AppState>,
    form: FormBody,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let game = games::create_game(db, form.into_inner()).await?;
    Ok(HttpResponse::build(StatusCode::CREATED).json(GameSavedResponse {
        message: GAME_CREATED,
        game,
    }))
}

async fn update_game(
    app_state: web::Data<AppState>,
    form: FormBody,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let game = games::update_game(db, form.into_inner()).await?;
    Ok(HttpResponse::Ok().json(GameSavedResponse {
        message: GAME_UPDATED,
        game,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(list_games))
        .route("/", web::post().to(create_game))
        .route("/update/", web::post().to(update_game));
}
