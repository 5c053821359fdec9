use crate::assessments::domain::AssessmentError;
use crate::assessments::history::HistoryError;
use crate::assessments::service::AssessmentServiceError;
use crate::assessments::sessions::SessionError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Assessment(AssessmentError),
    History(HistoryError),
    Session(SessionError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Assessment(AssessmentError::UnknownTest(_))
            | AppError::History(HistoryError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Assessment(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::History(HistoryError::Conflict(_)) => StatusCode::CONFLICT,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::History(_)
            | AppError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Assessment(err) => write!(f, "{}", err),
            AppError::History(err) => write!(f, "{}", err),
            AppError::Session(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Assessment(err) => Some(err),
            AppError::History(err) => Some(err),
            AppError::Session(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<AssessmentError> for AppError {
    fn from(value: AssessmentError) -> Self {
        Self::Assessment(value)
    }
}

impl From<HistoryError> for AppError {
    fn from(value: HistoryError) -> Self {
        Self::History(value)
    }
}

impl From<SessionError> for AppError {
    fn from(value: SessionError) -> Self {
        match value {
            SessionError::Invalid(err) => Self::Assessment(err),
            other => Self::Session(other),
        }
    }
}

impl From<AssessmentServiceError> for AppError {
    fn from(value: AssessmentServiceError) -> Self {
        match value {
            AssessmentServiceError::Assessment(err) => Self::Assessment(err),
            AssessmentServiceError::History(err) => Self::History(err),
            AssessmentServiceError::Session(err) => Self::Session(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessments::history::HistoryId;

    #[test]
    fn maps_domain_errors_to_statuses() {
        let unknown = AppError::from(AssessmentError::UnknownTest("disc".to_string()));
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

        let invalid = AppError::from(AssessmentError::AnswerOutOfRange { index: 1, value: 8 });
        assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(
            AppError::from(HistoryError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(HistoryError::Conflict(HistoryId(4))).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(HistoryError::Unavailable("offline".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn invalid_session_input_is_unprocessable() {
        let err = AppError::from(SessionError::Invalid(AssessmentError::QuestionOutOfRange {
            index: 50,
            count: 40,
        }));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            err.to_string(),
            "question 50 does not exist (test has 40 questions)"
        );
    }
}
