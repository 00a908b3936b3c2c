use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Player primary key from the `{player_id}` route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerId(pub i64);

fn parse(req: &HttpRequest) -> Result<PlayerId, AppError> {
    let raw = req.match_info().get("player_id").ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidPlayerId, "Missing player_id parameter")
    })?;

    raw.parse::<i64>().map(PlayerId).map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidPlayerId,
            format!("Invalid player id: {raw}"),
        )
    })
}

impl FromRequest for PlayerId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse(req))
    }
}
