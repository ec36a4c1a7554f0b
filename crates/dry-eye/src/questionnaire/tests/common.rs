use std::sync::Arc;

use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use serde_json::Value;

use crate::questionnaire::{
    questionnaire_router, AnswerSet, ClassificationEngine, IntakePolicy, QuestionnaireService,
    QuestionnaireSubmission, SubmissionGuard,
};

pub(super) const GRADED_IDS: std::ops::RangeInclusive<u8> = 1..=7;
pub(super) const BINARY_IDS: std::ops::RangeInclusive<u8> = 8..=20;

/// Every graded item at `grade`, every binary item answered `yes`.
pub(super) fn uniform_answers(grade: u8, yes: bool) -> AnswerSet {
    let graded = GRADED_IDS.fold(AnswerSet::new(), |set, id| set.with_grade(id, grade));
    BINARY_IDS.fold(graded, |set, id| set.with_binary(id, yes))
}

/// Complete set with all graded items at zero and all binary items `no`.
pub(super) fn quiet_answers() -> AnswerSet {
    uniform_answers(0, false)
}

pub(super) fn neuropathic_answers() -> AnswerSet {
    uniform_answers(4, true)
}

/// Evaporative 16, aqueous 14, neuropathic indicator off.
pub(super) fn mixed_answers() -> AnswerSet {
    uniform_answers(3, true).with_binary(20, false)
}

/// Evaporative 12, aqueous 0.
pub(super) fn evaporative_answers() -> AnswerSet {
    quiet_answers()
        .with_grade(2, 3)
        .with_grade(3, 3)
        .with_grade(5, 3)
        .with_grade(7, 3)
}

/// Evaporative 0, aqueous 12.
pub(super) fn aqueous_answers() -> AnswerSet {
    quiet_answers()
        .with_grade(1, 4)
        .with_grade(6, 4)
        .with_binary(15, true)
        .with_binary(16, true)
}

pub(super) fn submission_pairs(pairs: &[(&'static str, &'static str)]) -> QuestionnaireSubmission {
    QuestionnaireSubmission::from_pairs(pairs.iter().copied())
}

/// Form-shaped submission: graded items as `"0"`..`"4"`, binary items as `"si"`/`"no"`.
pub(super) fn form_submission(grade: u8, yes: bool) -> QuestionnaireSubmission {
    let grade = grade.to_string();
    let tag = if yes { "si" } else { "no" };
    let graded = GRADED_IDS.map(|id| (id.to_string(), grade.clone()));
    let binary = BINARY_IDS.map(|id| (id.to_string(), tag.to_string()));
    let pairs: Vec<(String, String)> = graded.chain(binary).collect();
    QuestionnaireSubmission::from_pairs(pairs.iter().map(|(id, value)| (id.as_str(), value.as_str())))
}

pub(super) fn engine() -> ClassificationEngine {
    ClassificationEngine::standard()
}

pub(super) fn strict_guard() -> SubmissionGuard {
    SubmissionGuard::with_policy(IntakePolicy::strict())
}

pub(super) fn lenient_guard() -> SubmissionGuard {
    SubmissionGuard::with_policy(IntakePolicy::lenient())
}

pub(super) fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 5).expect("valid date")
}

pub(super) fn service(policy: IntakePolicy) -> Arc<QuestionnaireService> {
    Arc::new(QuestionnaireService::new(policy))
}

pub(super) fn router(policy: IntakePolicy) -> Router {
    questionnaire_router(service(policy))
}

pub(super) async fn read_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body readable");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_str(&body).expect("json body")
}
