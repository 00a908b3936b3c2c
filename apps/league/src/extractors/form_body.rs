use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::forms::RawForm;
use crate::trace_ctx;

/// Upper bound on a submitted form body.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Submitted form fields from an `application/x-www-form-urlencoded` body,
/// or a JSON object of string values.
///
/// Decoding failures become a 400 problem response; field rules are left to
/// the forms layer.
#[derive(Debug)]
pub struct FormBody(pub RawForm);

impl FormBody {
    pub fn into_inner(self) -> RawForm {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    UrlEncoded,
    Json,
}

fn body_kind(content_type: &str) -> Option<BodyKind> {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match mime.as_str() {
        "application/x-www-form-urlencoded" | "" => Some(BodyKind::UrlEncoded),
        "application/json" => Some(BodyKind::Json),
        _ => None,
    }
}

impl FromRequest for FormBody {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        // Read the header before entering the future to avoid borrowing req across await
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("")
            .to_string();

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            let Some(kind) = body_kind(&content_type) else {
                return Err(AppError::bad_request(
                    ErrorCode::UnsupportedMediaType,
                    format!("Unsupported content type: {content_type}"),
                ));
            };

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(trace_id = %trace_id, error = %e, "Failed to read request body chunk");
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                })?;
                if body.len() + chunk.len() > MAX_BODY_BYTES {
                    return Err(AppError::bad_request(
                        ErrorCode::BadRequest,
                        "Request body too large",
                    ));
                }
                body.extend_from_slice(&chunk);
            }

            let parsed = match kind {
                BodyKind::UrlEncoded => serde_urlencoded::from_bytes::<RawForm>(&body)
                    .map_err(|e| e.to_string()),
                BodyKind::Json => {
                    serde_json::from_slice::<RawForm>(&body).map_err(|e| e.to_string())
                }
            };

            let raw = parsed.map_err(|e| {
                debug!(trace_id = %trace_id, error = %e, kind = ?kind, body_size = body.len(), "Form body decoding failed");
                AppError::bad_request(
                    ErrorCode::BadRequest,
                    "Form body could not be decoded",
                )
            })?;

            Ok(FormBody(raw))
        })
    }
}
