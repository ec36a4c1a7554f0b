use super::super::answers::AnswerSet;
use super::super::catalog::{QuestionId, QuestionKind, QuestionnaireCatalog};
use super::ScoreBreakdown;

/// Points a "yes" adds to a sub-score.
pub(crate) const BINARY_YES_POINTS: u32 = 2;

pub(crate) const EVAPORATIVE_ITEMS: [QuestionId; 6] = [
    QuestionId(2),
    QuestionId(3),
    QuestionId(5),
    QuestionId(7),
    QuestionId(14),
    QuestionId(19),
];

pub(crate) const AQUEOUS_DEFICIT_ITEMS: [QuestionId; 6] = [
    QuestionId(1),
    QuestionId(6),
    QuestionId(15),
    QuestionId(16),
    QuestionId(11),
    QuestionId(18),
];

pub(crate) const NEUROPATHIC_ITEM: QuestionId = QuestionId(20);

/// Intermediate values the cascade decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSignals {
    pub evaporative: u32,
    pub aqueous_deficit: u32,
    pub total_symptoms: u32,
    pub neuropathic_indicator: bool,
}

impl ScoreSignals {
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            evaporative: self.evaporative,
            aqueous_deficit: self.aqueous_deficit,
            total_symptoms: self.total_symptoms,
        }
    }
}

pub(crate) fn score_answers(catalog: &QuestionnaireCatalog, answers: &AnswerSet) -> ScoreSignals {
    let evaporative = weighted_sum(catalog, answers, &EVAPORATIVE_ITEMS);
    let aqueous_deficit = weighted_sum(catalog, answers, &AQUEOUS_DEFICIT_ITEMS);

    let total_symptoms = catalog
        .questions()
        .filter(|question| question.kind == QuestionKind::Graded)
        .map(|question| answers.grade_points(question.id))
        .sum();

    ScoreSignals {
        evaporative,
        aqueous_deficit,
        total_symptoms,
        neuropathic_indicator: answers.is_yes(NEUROPATHIC_ITEM),
    }
}

fn weighted_sum(catalog: &QuestionnaireCatalog, answers: &AnswerSet, items: &[QuestionId]) -> u32 {
    items
        .iter()
        .map(|id| item_points(catalog, answers, *id))
        .sum()
}

fn item_points(catalog: &QuestionnaireCatalog, answers: &AnswerSet, id: QuestionId) -> u32 {
    match catalog.kind_of(id) {
        Some(QuestionKind::Graded) => answers.grade_points(id),
        Some(QuestionKind::Binary) if answers.is_yes(id) => BINARY_YES_POINTS,
        _ => 0,
    }
}
