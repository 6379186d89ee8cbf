use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{QuickScreenRequest, ScreeningId};
use super::repository::{HistoryRepository, RepositoryError};
use super::service::{ScreeningService, ScreeningServiceError};
use crate::screening::JobInput;

/// Router builder exposing screening and history endpoints.
pub fn history_router<R>(service: Arc<ScreeningService<R>>) -> Router
where
    R: HistoryRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/screenings",
            post(submit_handler::<R>)
                .get(recent_handler::<R>)
                .delete(clear_handler::<R>),
        )
        .route("/api/v1/screenings/quick", post(quick_handler::<R>))
        .route("/api/v1/screenings/:screening_id", get(fetch_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    axum::Json(job): axum::Json<JobInput>,
) -> Response
where
    R: HistoryRepository + 'static,
{
    match service.submit(job) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn quick_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    axum::Json(request): axum::Json<QuickScreenRequest>,
) -> Response
where
    R: HistoryRepository + 'static,
{
    match service.submit_text(&request.description) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recent_handler<R>(State(service): State<Arc<ScreeningService<R>>>) -> Response
where
    R: HistoryRepository + 'static,
{
    match service.recent() {
        Ok(rows) => (StatusCode::OK, axum::Json(rows)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Path(screening_id): Path<String>,
) -> Response
where
    R: HistoryRepository + 'static,
{
    let id = ScreeningId(screening_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(ScreeningServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "id": id.0,
                "error": "screening not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn clear_handler<R>(State(service): State<Arc<ScreeningService<R>>>) -> Response
where
    R: HistoryRepository + 'static,
{
    match service.clear() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ScreeningServiceError) -> Response {
    let status = match &error {
        ScreeningServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ScreeningServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ScreeningServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ScreeningServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
