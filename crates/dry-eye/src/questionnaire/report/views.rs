use super::super::classification::{ClassificationResult, DryEyeCategory};
use serde::Serialize;

/// Wire shape returned to the questionnaire form.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationView {
    pub category: DryEyeCategory,
    #[serde(rename = "type")]
    pub type_label: &'static str,
    pub description: String,
    pub recommendations: Vec<String>,
    pub scores: ScoresView,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoresView {
    pub evaporative_score: u32,
    pub aqueous_score: u32,
    pub total_symptoms: u32,
}

impl From<&ClassificationResult> for ClassificationView {
    fn from(result: &ClassificationResult) -> Self {
        Self {
            category: result.category,
            type_label: result.name(),
            description: result.description.clone(),
            recommendations: result.recommendations.clone(),
            scores: ScoresView {
                evaporative_score: result.scores.evaporative,
                aqueous_score: result.scores.aqueous_deficit,
                total_symptoms: result.scores.total_symptoms,
            },
        }
    }
}
