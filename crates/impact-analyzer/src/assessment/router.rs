use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::task::JoinError;
use tracing::{error, warn};

use super::domain::{AssessmentRequest, ImpactScore};
use super::service::{AssessmentService, ComparisonError, ComparisonResult};
use super::validation::ValidationError;

/// Router exposing the assessment endpoints.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/assess", post(assess_handler))
        .route("/assess/compare", post(compare_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ComparisonRequest {
    pub(crate) products: Vec<AssessmentRequest>,
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<AssessmentService>>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "malformed assessment payload");
            let body = ImpactScore::degraded(
                "Invalid request",
                "Request body must be a JSON object with product name and category",
            );
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    let outcome = tokio::task::spawn_blocking(move || service.assess(request)).await;
    assessment_response(outcome)
}

/// Map a finished scoring task onto the response contract: every outcome,
/// including a failed task, carries an `ImpactScore`-shaped body.
pub(crate) fn assessment_response(
    outcome: Result<Result<ImpactScore, ValidationError>, JoinError>,
) -> Response {
    match outcome {
        Ok(Ok(score)) => (StatusCode::OK, Json(score)).into_response(),
        Ok(Err(err)) => {
            warn!(error = %err, "assessment request rejected");
            (StatusCode::BAD_REQUEST, Json(err.degraded_score())).into_response()
        }
        Err(join_error) => {
            error!(error = %join_error, "assessment task failed");
            let body = ImpactScore::degraded(
                "Server error",
                "An error occurred during assessment. Please try again.",
            );
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

pub(crate) async fn compare_handler(
    State(service): State<Arc<AssessmentService>>,
    payload: Result<Json<ComparisonRequest>, JsonRejection>,
) -> Response {
    let requests = match payload {
        Ok(Json(request)) => request.products,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "malformed comparison payload");
            let payload = json!({ "error": rejection.body_text() });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let outcome = tokio::task::spawn_blocking(move || service.compare(requests)).await;
    comparison_response(outcome)
}

pub(crate) fn comparison_response(
    outcome: Result<Result<ComparisonResult, ComparisonError>, JoinError>,
) -> Response {
    match outcome {
        Ok(Ok(result)) => (StatusCode::OK, Json(result)).into_response(),
        Ok(Err(err)) => {
            warn!(error = %err, "comparison request rejected");
            let payload = json!({ "error": err.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(join_error) => {
            error!(error = %join_error, "comparison task failed");
            let payload = json!({ "error": "comparison failed" });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
