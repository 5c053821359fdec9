use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::AnswerSet;
use super::history::{HistoryId, HistoryRepository, HistorySummaryView};
use super::service::AssessmentService;
use super::sessions::SessionStore;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub answers: AnswerSet,
    #[serde(default)]
    pub save: bool,
}

#[derive(Debug, Deserialize)]
pub struct SessionUpdate {
    #[serde(default)]
    pub answers: AnswerSet,
    #[serde(default)]
    pub current_index: Option<usize>,
}

/// Router exposing the questionnaire catalogue, scoring, history, and sessions.
pub fn assessment_router<H, S>(service: Arc<AssessmentService<H, S>>) -> Router
where
    H: HistoryRepository + 'static,
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/tests", get(list_tests_handler::<H, S>))
        .route("/api/v1/tests/:test_id", get(test_handler::<H, S>))
        .route("/api/v1/tests/:test_id/score", post(score_handler::<H, S>))
        .route(
            "/api/v1/history",
            get(history_handler::<H, S>).delete(clear_history_handler::<H, S>),
        )
        .route(
            "/api/v1/history/export.csv",
            get(export_csv_handler::<H, S>),
        )
        .route(
            "/api/v1/history/:id",
            get(replay_handler::<H, S>).delete(delete_history_handler::<H, S>),
        )
        .route(
            "/api/v1/sessions/:test_id",
            get(session_handler::<H, S>)
                .put(save_session_handler::<H, S>)
                .delete(discard_session_handler::<H, S>),
        )
        .with_state(service)
}

pub(crate) async fn list_tests_handler<H, S>(
    State(service): State<Arc<AssessmentService<H, S>>>,
) -> Response
where
    H: HistoryRepository + 'static,
    S: SessionStore + 'static,
{
    (StatusCode::OK, axum::Json(service.list_tests())).into_response()
}

pub(crate) async fn test_handler<H, S>(
    State(service): State<Arc<AssessmentService<H, S>>>,
    Path(test_id): Path<String>,
) -> Response
where
    H: HistoryRepository + 'static,
    S: SessionStore + 'static,
{
    match service.test(&test_id) {
        Ok(definition) => (StatusCode::OK, axum::Json(definition)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn score_handler<H, S>(
    State(service): State<Arc<AssessmentService<H, S>>>,
    Path(test_id): Path<String>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    H: HistoryRepository + 'static,
    S: SessionStore + 'static,
{
    match service.score(&test_id, &request.answers, request.save) {
        Ok(outcome) => {
            let status = if outcome.history_id.is_some() {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (status, axum::Json(outcome)).into_response()
        }
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn history_handler<H, S>(
    State(service): State<Arc<AssessmentService<H, S>>>,
) -> Response
where
    H: HistoryRepository + 'static,
    S: SessionStore + 'static,
{
    match service.history().list() {
        Ok(records) => {
            let views: Vec<HistorySummaryView> =
                records.iter().map(|record| record.summary_view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn clear_history_handler<H, S>(
    State(service): State<Arc<AssessmentService<H, S>>>,
) -> Response
where
    H: HistoryRepository + 'static,
    S: SessionStore + 'static,
{
    match service.history().clear() {
        Ok(deleted) => (StatusCode::OK, axum::Json(json!({ "deleted": deleted }))).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn export_csv_handler<H, S>(
    State(service): State<Arc<AssessmentService<H, S>>>,
) -> Response
where
    H: HistoryRepository + 'static,
    S: SessionStore + 'static,
{
    let mut buffer = Vec::new();
    match service.history().export_csv(&mut buffer) {
        Ok(_) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            buffer,
        )
            .into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn replay_handler<H, S>(
    State(service): State<Arc<AssessmentService<H, S>>>,
    Path(raw_id): Path<String>,
) -> Response
where
    H: HistoryRepository + 'static,
    S: SessionStore + 'static,
{
    let Some(id) = parse_history_id(&raw_id) else {
        return invalid_history_id(&raw_id);
    };
    match service.replay(id) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn delete_history_handler<H, S>(
    State(service): State<Arc<AssessmentService<H, S>>>,
    Path(raw_id): Path<String>,
) -> Response
where
    H: HistoryRepository + 'static,
    S: SessionStore + 'static,
{
    let Some(id) = parse_history_id(&raw_id) else {
        return invalid_history_id(&raw_id);
    };
    match service.history().delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn session_handler<H, S>(
    State(service): State<Arc<AssessmentService<H, S>>>,
    Path(test_id): Path<String>,
) -> Response
where
    H: HistoryRepository + 'static,
    S: SessionStore + 'static,
{
    match service.get_session(&test_id) {
        Ok(Some(session)) => {
            let payload = json!({
                "progress": session.progress_view(),
                "session": session,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(None) => no_session(&test_id),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn save_session_handler<H, S>(
    State(service): State<Arc<AssessmentService<H, S>>>,
    Path(test_id): Path<String>,
    axum::Json(update): axum::Json<SessionUpdate>,
) -> Response
where
    H: HistoryRepository + 'static,
    S: SessionStore + 'static,
{
    match service.save_session(&test_id, &update.answers, update.current_index) {
        Ok(session) => {
            let payload = json!({
                "progress": session.progress_view(),
                "session": session,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn discard_session_handler<H, S>(
    State(service): State<Arc<AssessmentService<H, S>>>,
    Path(test_id): Path<String>,
) -> Response
where
    H: HistoryRepository + 'static,
    S: SessionStore + 'static,
{
    match service.discard_session(&test_id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => no_session(&test_id),
        Err(error) => AppError::from(error).into_response(),
    }
}

fn parse_history_id(raw: &str) -> Option<HistoryId> {
    raw.parse().ok()
}

fn invalid_history_id(raw: &str) -> Response {
    let payload = json!({
        "error": format!("'{raw}' is not a valid history id"),
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}

fn no_session(test_id: &str) -> Response {
    let payload = json!({
        "error": "no session in progress",
        "test_id": test_id,
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}
