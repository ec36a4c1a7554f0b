use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use super::answers::AnswerSet;
use super::batch::{classify_sheets, AnswerSheetImporter, BatchClassification, BatchImportError};
use super::catalog::{QuestionnaireCatalog, QuestionnaireInfo, Section};
use super::classification::{ClassificationEngine, ClassificationResult};
use super::intake::{IntakePolicy, IntakeViolation, QuestionnaireSubmission, SubmissionGuard};
use super::report::{ClassificationReport, RenderedReport, ReportFormat};

/// Service composing the catalog, intake guard, and classification engine.
#[derive(Debug, Clone, Copy)]
pub struct QuestionnaireService {
    catalog: QuestionnaireCatalog,
    guard: SubmissionGuard,
    engine: ClassificationEngine,
}

impl QuestionnaireService {
    pub fn new(policy: IntakePolicy) -> Self {
        Self::with_engine(policy, ClassificationEngine::standard())
    }

    pub fn with_engine(policy: IntakePolicy, engine: ClassificationEngine) -> Self {
        Self {
            catalog: QuestionnaireCatalog::standard(),
            guard: SubmissionGuard::with_policy(policy),
            engine,
        }
    }

    pub fn sections(&self) -> &'static [Section] {
        self.catalog.sections()
    }

    pub fn info(&self) -> QuestionnaireInfo {
        self.catalog.info()
    }

    pub fn engine(&self) -> &ClassificationEngine {
        &self.engine
    }

    pub fn policy(&self) -> &IntakePolicy {
        self.guard.policy()
    }

    /// Validate a posted questionnaire and classify it.
    pub fn submit(
        &self,
        submission: &QuestionnaireSubmission,
    ) -> Result<ClassificationResult, IntakeViolation> {
        let answers = match self.guard.answers_from_submission(submission) {
            Ok(answers) => answers,
            Err(violation) => {
                warn!(%violation, answered = submission.answers.len(), "questionnaire rejected");
                return Err(violation);
            }
        };

        if let Some(timestamp) = submission.timestamp {
            debug!(%timestamp, "submission carries client timestamp");
        }

        Ok(self.classify(&answers))
    }

    pub fn classify(&self, answers: &AnswerSet) -> ClassificationResult {
        let missing = answers.missing(&self.catalog);
        if !missing.is_empty() {
            debug!(
                missing = missing.len(),
                "classifying partial answer set, gaps score zero"
            );
        }

        let result = self.engine.classify(answers);
        info!(
            category = result.category.key(),
            evaporative = result.scores.evaporative,
            aqueous_deficit = result.scores.aqueous_deficit,
            total_symptoms = result.scores.total_symptoms,
            "questionnaire classified"
        );
        result
    }

    /// Classify and render the result in the requested format.
    pub fn report(
        &self,
        submission: &QuestionnaireSubmission,
        format: ReportFormat,
        generated_on: Option<NaiveDate>,
    ) -> Result<RenderedReport, ReportError> {
        let result = self.submit(submission)?;
        let generated_on = generated_on.unwrap_or_else(|| Local::now().date_naive());
        let report = ClassificationReport::new(result, generated_on);
        Ok(report.render(format)?)
    }

    pub fn classify_csv<R: std::io::Read>(
        &self,
        reader: R,
    ) -> Result<Vec<BatchClassification>, BatchImportError> {
        let sheets = AnswerSheetImporter::new(self.guard).import_reader(reader)?;
        info!(sheets = sheets.len(), "answer sheets imported");
        Ok(classify_sheets(&self.engine, &sheets))
    }
}

impl Default for QuestionnaireService {
    fn default() -> Self {
        Self::new(IntakePolicy::default())
    }
}

/// Error raised while producing a rendered report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
