//! Double-submit CSRF protection.
//!
//! Every response carries the current token in the `x-csrf-token` header and
//! the `league_csrf` cookie (issued when the client has none). Unsafe
//! requests must echo the cookie value in the `x-csrf-token` request header
//! or they are rejected with 403 before reaching a handler.

use actix_web::body::{BoxBody, MessageBody};
use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::http::Method;
use actix_web::ResponseError;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::warn;
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub const CSRF_COOKIE: &str = "league_csrf";
pub const CSRF_HEADER: &str = "x-csrf-token";

fn is_safe(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS | Method::TRACE)
}

fn tokens_match(cookie: Option<&str>, header: Option<&str>) -> bool {
    match (cookie, header) {
        (Some(c), Some(h)) => !c.is_empty() && c == h,
        _ => false,
    }
}

pub struct CsrfProtect;

impl<S, B> Transform<S, ServiceRequest> for CsrfProtect
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = CsrfProtectMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CsrfProtectMiddleware { service }))
    }
}

pub struct CsrfProtectMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for CsrfProtectMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let cookie_token = req.cookie(CSRF_COOKIE).map(|c| c.value().to_string());
        let header_token = req
            .headers()
            .get(CSRF_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        if !is_safe(req.method())
            && !tokens_match(cookie_token.as_deref(), header_token.as_deref())
        {
            let method = req.method().to_string();
            let path = req.path().to_string();
            return Box::pin(async move {
                warn!(http.method = %method, url.path = %path, "csrf.rejected");
                let err = AppError::forbidden(
                    ErrorCode::CsrfTokenInvalid,
                    "Missing or invalid CSRF token",
                );
                Ok(req.into_response(err.error_response()))
            });
        }

        let (token, issue_cookie) = match cookie_token {
            Some(t) if !t.is_empty() => (t, false),
            _ => (Uuid::new_v4().simple().to_string(), true),
        };

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?.map_into_boxed_body();

            if let Ok(value) = HeaderValue::from_str(&token) {
                res.headers_mut()
                    .insert(HeaderName::from_static(CSRF_HEADER), value);
            }

            if issue_cookie {
                let mut cookie = Cookie::new(CSRF_COOKIE, token);
                cookie.set_path("/");
                cookie.set_same_site(SameSite::Strict);
                if let Err(e) = res.response_mut().add_cookie(&cookie) {
                    warn!(error = %e, "csrf.cookie_failed");
                }
            }

            Ok(res)
        })
    }
}
