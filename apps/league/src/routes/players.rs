use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{FormBody, PlayerId};
use crate::repos::players::Player;
use crate::services::players;
use crate::state::app_state::AppState;

pub const PLAYER_CREATED: &str = "Player created!";
pub const PLAYER_DELETED: &str = "Player deleted!";

#[derive(Debug, Serialize)]
pub struct PlayerListResponse {
    pub players: Vec<Player>,
}

#[derive(Debug, Serialize)]
pub struct PlayerCreatedResponse {
    pub message: &'static str,
    pub player: Player,
}

#[derive(Debug, Serialize)]
pub struct PlayerDeletedResponse {
    pub message: &'static str,
    pub player_id: i64,
}

async fn list_players(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let players = players::list_players(db).await?;
    Ok(HttpResponse::Ok().json(PlayerListResponse { players }))
}

async fn create_player(
    app_state: web::Data<AppState>,
    form: FormBody,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let player = players::create_player(db, form.into_inner()).await?;
    Ok(HttpResponse::build(StatusCode::CREATED).json(PlayerCreatedResponse {
        message: PLAYER_CREATED,
        player,
    }))
}

async fn player_detail(
    app_state: web::Data<AppState>,
    player_id: PlayerId,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let detail = players::player_detail(db, player_id.0).await?;
    Ok(HttpResponse::Ok().json(detail))
}

async fn delete_player(
    app_state: web::Data<AppState>,
    form: FormBody,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let player_id = players::delete_player(db, form.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PlayerDeletedResponse {
        message: PLAYER_DELETED,
        player_id,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // The literal delete route must be registered ahead of `{player_id}`
    cfg.route("/delete/", web::post().to(delete_player))
        .route("/", web::get().to(list_players))
        .route("/", web::post().to(create_player))
        .route("/{player_id}/", web::get().to(player_detail));
}
