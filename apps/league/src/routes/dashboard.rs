use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::db::require_db;
use crate::error::AppError;
use crate::repos::players::Player;
use crate::services::players;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub players: Vec<Player>,
}

/// Landing view: every registered player.
async fn index(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let players = players::list_players(db).await?;
    Ok(HttpResponse::Ok().json(DashboardResponse { players }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}
