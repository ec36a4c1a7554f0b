use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;

use super::catalog::SCALE_LABELS;
use super::intake::{IntakeViolation, QuestionnaireSubmission, RawAnswer};
use super::report::views::ClassificationView;
use super::report::ReportFormat;
use super::service::{QuestionnaireService, ReportError};

/// Body accepted by the report endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportRequest {
    pub answers: BTreeMap<String, RawAnswer>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Router builder exposing the questionnaire catalog and classification endpoints.
pub fn questionnaire_router(service: Arc<QuestionnaireService>) -> Router {
    Router::new()
        .route("/api/questionnaire/questions", get(questions_handler))
        .route("/api/questionnaire/info", get(info_handler))
        .route("/api/questionnaire/submit", post(submit_handler))
        .route("/api/questionnaire/report", post(report_handler))
        .with_state(service)
}

pub(crate) async fn questions_handler(
    State(service): State<Arc<QuestionnaireService>>,
) -> Json<serde_json::Value> {
    Json(json!({
        "sections": service.sections(),
        "scale_labels": SCALE_LABELS,
    }))
}

pub(crate) async fn info_handler(
    State(service): State<Arc<QuestionnaireService>>,
) -> Json<serde_json::Value> {
    Json(json!(service.info()))
}

pub(crate) async fn submit_handler(
    State(service): State<Arc<QuestionnaireService>>,
    Json(submission): Json<QuestionnaireSubmission>,
) -> Response {
    match service.submit(&submission) {
        Ok(result) => (StatusCode::OK, Json(ClassificationView::from(&result))).into_response(),
        Err(violation) => violation_response(&violation),
    }
}

pub(crate) async fn report_handler(
    State(service): State<Arc<QuestionnaireService>>,
    Json(request): Json<ReportRequest>,
) -> Response {
    let ReportRequest {
        answers,
        timestamp,
        format,
        date,
    } = request;
    let submission = QuestionnaireSubmission { answers, timestamp };

    match service.report(&submission, format, date) {
        Ok(report) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, report.content_type().to_string())],
            report.body,
        )
            .into_response(),
        Err(ReportError::Intake(violation)) => violation_response(&violation),
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

fn violation_response(violation: &IntakeViolation) -> Response {
    let payload = match violation {
        IntakeViolation::Incomplete { missing, .. } => json!({
            "error": violation.to_string(),
            "missing": missing,
        }),
        _ => json!({
            "error": violation.to_string(),
        }),
    };
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}
