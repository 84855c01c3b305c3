use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use super::engine::EligibilityError;
use super::service::EligibilityService;
use super::validation::FactSubmission;

/// Router exposing the eligibility check over query string and JSON body.
pub fn eligibility_router(service: Arc<EligibilityService>) -> Router {
    Router::new()
        .route(
            "/api/v1/eligibility",
            get(query_handler).post(body_handler),
        )
        .with_state(service)
}

pub(crate) async fn query_handler(
    State(service): State<Arc<EligibilityService>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    respond(&service, &FactSubmission::from_query(params))
}

pub(crate) async fn body_handler(
    State(service): State<Arc<EligibilityService>>,
    axum::Json(submission): axum::Json<FactSubmission>,
) -> Response {
    respond(&service, &submission)
}

fn respond(service: &EligibilityService, submission: &FactSubmission) -> Response {
    match service.assess(submission) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub fn error_response(error: EligibilityError) -> Response {
    let status = match error {
        EligibilityError::Invalid(_) => StatusCode::BAD_REQUEST,
        EligibilityError::RuleGap(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, axum::Json(error.payload())).into_response()
}
