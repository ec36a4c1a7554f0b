//! Dry eye self-assessment: the fixed question catalog, answer intake, the
//! classification engine, and the report artifacts built from its result.
//!
//! The engine is a pure function of an `AnswerSet`. Missing answers score zero;
//! completeness is enforced only at intake, and only when the policy asks for it.

pub mod answers;
pub mod batch;
pub mod catalog;
pub mod classification;
pub mod intake;
pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use answers::{AnswerSet, AnswerValue, BinaryAnswer, Grade};
pub use batch::{
    classify_sheets, write_classifications, AnswerSheet, AnswerSheetImporter,
    BatchClassification, BatchImportError,
};
pub use catalog::{
    Question, QuestionId, QuestionKind, QuestionnaireCatalog, QuestionnaireInfo, Section,
    SectionKey,
};
pub use classification::{
    classify, CategoryProfile, ClassificationEngine, ClassificationResult,
    ClassificationThresholds, DryEyeCategory, ScoreBreakdown, ScoreSignals,
};
pub use intake::{IntakePolicy, IntakeViolation, QuestionnaireSubmission, RawAnswer, SubmissionGuard};
pub use report::{ClassificationReport, RenderedReport, ReportFormat};
pub use router::questionnaire_router;
pub use service::{QuestionnaireService, ReportError};
