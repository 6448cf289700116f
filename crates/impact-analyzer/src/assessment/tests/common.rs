use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::assessment::{
    assessment_router, extract, AssessmentLimits, AssessmentRequest, AssessmentService,
    ScoringContext,
};

pub(super) fn with_context<T>(
    description: &str,
    location: Option<&str>,
    f: impl FnOnce(&ScoringContext<'_>) -> T,
) -> T {
    let extraction = extract(description);
    let context = ScoringContext {
        category: "Other",
        description,
        extraction: &extraction,
        location,
    };
    f(&context)
}

pub(super) fn eco_bottle() -> AssessmentRequest {
    AssessmentRequest::new(
        "Eco Bottle",
        "100% recycled aluminium, renewable energy manufacturing, carbon neutral",
        "Other",
    )
}

pub(super) fn plastic_toy() -> AssessmentRequest {
    AssessmentRequest::new(
        "Plastic Toy",
        "virgin plastic, petroleum-based, high power consumption",
        "Other",
    )
}

pub(super) fn service() -> AssessmentService {
    AssessmentService::new(AssessmentLimits::default())
}

pub(super) fn router() -> axum::Router {
    assessment_router(Arc::new(service()))
}

pub(super) fn json_post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("request builds")
}

pub(super) async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
