use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::{IntakeId, IntakeSubmission};
use super::repository::{IntakeRepository, RepositoryError};
use super::service::{IntakeServiceError, LeadIntakeService};
use crate::qualification::IntakeFormData;

/// Router builder exposing HTTP endpoints for scoring and intake.
pub fn intake_router<R>(service: Arc<LeadIntakeService<R>>) -> Router
where
    R: IntakeRepository + 'static,
{
    Router::new()
        .route("/api/v1/qualification/score", post(score_handler::<R>))
        .route("/api/v1/intake", post(submit_handler::<R>))
        .route("/api/v1/intake/:intake_id", get(status_handler::<R>))
        .route(
            "/api/v1/intake/:intake_id/rescore",
            post(rescore_handler::<R>),
        )
        .with_state(service)
}

/// Stateless scoring; the form is not validated or stored.
pub(crate) async fn score_handler<R>(
    State(service): State<Arc<LeadIntakeService<R>>>,
    Json(form): Json<IntakeFormData>,
) -> Response
where
    R: IntakeRepository + 'static,
{
    let result = service.engine().score(&form);
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<LeadIntakeService<R>>>,
    Json(submission): Json<IntakeSubmission>,
) -> Response
where
    R: IntakeRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::ACCEPTED, Json(record.status_view())).into_response(),
        Err(err) => error_response(err, None),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<LeadIntakeService<R>>>,
    Path(intake_id): Path<String>,
) -> Response
where
    R: IntakeRepository + 'static,
{
    let id = IntakeId(intake_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, Json(record.status_view())).into_response(),
        Err(err) => error_response(err, Some(&id)),
    }
}

pub(crate) async fn rescore_handler<R>(
    State(service): State<Arc<LeadIntakeService<R>>>,
    Path(intake_id): Path<String>,
) -> Response
where
    R: IntakeRepository + 'static,
{
    let id = IntakeId(intake_id);
    match service.rescore(&id) {
        Ok(record) => (StatusCode::OK, Json(record.qualification)).into_response(),
        Err(err) => error_response(err, Some(&id)),
    }
}

fn error_response(err: IntakeServiceError, id: Option<&IntakeId>) -> Response {
    match err {
        IntakeServiceError::Invalid(violation) => {
            let payload = json!({ "error": violation.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        IntakeServiceError::Repository(RepositoryError::Conflict) => {
            let payload = json!({ "error": "intake form already exists" });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        IntakeServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({
                "error": "intake form not found",
                "intake_id": id.map(|id| id.0.clone()),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        other => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
