//! Problem Details assertions that do not depend on application types.

use std::collections::BTreeMap;

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Mirror of the application's problem-details body.
#[derive(Debug, Deserialize, Serialize)]
pub struct ProblemDetailsLike {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

/// Assert the stable error contract and hand back the parsed body.
///
/// Checks the status, the `application/problem+json` content type, the
/// `x-trace-id` header matching the body, the code, and optionally that the
/// detail contains a substring.
pub async fn assert_problem_details(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    assert_eq!(resp.status(), expected_status);

    let headers = resp.headers().clone();
    let content_type = headers
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let body = actix_web::test::read_body(resp).await;
    let problem: ProblemDetailsLike =
        serde_json::from_slice(&body).expect("Response body should be valid ProblemDetails JSON");

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert_eq!(
        problem.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());

    if let Some(expected_detail) = expected_detail_contains {
        assert!(
            problem.detail.contains(expected_detail),
            "Expected detail to contain '{}', but got '{}'",
            expected_detail,
            problem.detail
        );
    }

    problem
}

/// Messages reported for one field, empty when the field passed.
pub fn field_errors<'a>(problem: &'a ProblemDetailsLike, field: &str) -> &'a [String] {
    problem
        .errors
        .get(field)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
