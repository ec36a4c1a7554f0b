mod categories;
mod config;
mod policy;
mod rules;

pub use categories::{CategoryProfile, DryEyeCategory};
pub use config::ClassificationThresholds;
pub use rules::ScoreSignals;

use super::answers::AnswerSet;
use super::catalog::QuestionnaireCatalog;
use policy::decide_category;
use serde::{Deserialize, Serialize};

/// Stateless engine mapping an answer set to a dry eye subtype.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationEngine {
    catalog: QuestionnaireCatalog,
    thresholds: ClassificationThresholds,
}

impl ClassificationEngine {
    pub fn new(catalog: QuestionnaireCatalog, thresholds: ClassificationThresholds) -> Self {
        Self {
            catalog,
            thresholds,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            QuestionnaireCatalog::standard(),
            ClassificationThresholds::default(),
        )
    }

    pub fn thresholds(&self) -> &ClassificationThresholds {
        &self.thresholds
    }

    /// Sub-scores and the neuropathic flag, before any category is picked.
    pub fn score(&self, answers: &AnswerSet) -> ScoreSignals {
        rules::score_answers(&self.catalog, answers)
    }

    pub fn classify(&self, answers: &AnswerSet) -> ClassificationResult {
        let signals = self.score(answers);
        let category = decide_category(&self.thresholds, &signals);
        ClassificationResult::new(category, signals.breakdown())
    }
}

impl Default for ClassificationEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Classify with the standard catalog and thresholds.
pub fn classify(answers: &AnswerSet) -> ClassificationResult {
    ClassificationEngine::standard().classify(answers)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub evaporative: u32,
    pub aqueous_deficit: u32,
    pub total_symptoms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: DryEyeCategory,
    pub description: String,
    pub recommendations: Vec<String>,
    pub scores: ScoreBreakdown,
}

impl ClassificationResult {
    fn new(category: DryEyeCategory, scores: ScoreBreakdown) -> Self {
        let profile = category.profile();
        Self {
            category,
            description: profile.description.to_string(),
            recommendations: profile
                .recommendations
                .iter()
                .map(|recommendation| recommendation.to_string())
                .collect(),
            scores,
        }
    }

    /// Display name of the category, e.g. "Occhio Secco Misto".
    pub fn name(&self) -> &'static str {
        self.category.label()
    }
}
