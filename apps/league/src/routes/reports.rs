use actix_web::{web, HttpRequest, HttpResponse};
use tracing::debug;

use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::forms::RawForm;
use crate::services::reports;
use crate::state::app_state::AppState;

fn query_form(req: &HttpRequest) -> Result<RawForm, AppError> {
    serde_urlencoded::from_str::<RawForm>(req.query_string()).map_err(|e| {
        debug!(error = %e, "reports.query_decode_failed");
        AppError::bad_request(ErrorCode::BadRequest, format!("Invalid query string: {e}"))
    })
}

async fn report(req: HttpRequest, app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let raw = query_form(&req)?;
    let db = require_db(&app_state)?;
    let report = reports::generate_report(db, raw).await?;
    Ok(HttpResponse::Ok().json(report))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(report));
}
