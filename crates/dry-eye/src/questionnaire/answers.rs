use super::catalog::{QuestionId, QuestionKind, QuestionnaireCatalog, SCALE_LABELS};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Highest value on the graded scale.
pub const MAX_GRADE: u8 = 4;

/// Intensity answer on the 0..=4 scale. Out-of-range values cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Grade(u8);

impl Grade {
    pub const NEVER: Self = Self(0);
    pub const ALWAYS: Self = Self(MAX_GRADE);

    pub const fn new(value: u8) -> Option<Self> {
        if value <= MAX_GRADE {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn label(self) -> &'static str {
        SCALE_LABELS[self.0 as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryAnswer {
    Yes,
    No,
}

impl BinaryAnswer {
    /// Wire tag used by the questionnaire form.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Yes => "si",
            Self::No => "no",
        }
    }

    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "si" | "sì" | "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }
}

impl From<bool> for BinaryAnswer {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

impl Serialize for BinaryAnswer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Graded(Grade),
    Binary(BinaryAnswer),
}

impl AnswerValue {
    pub const fn kind(self) -> QuestionKind {
        match self {
            Self::Graded(_) => QuestionKind::Graded,
            Self::Binary(_) => QuestionKind::Binary,
        }
    }

    pub const fn grade(self) -> Option<Grade> {
        match self {
            Self::Graded(grade) => Some(grade),
            Self::Binary(_) => None,
        }
    }

    pub const fn binary(self) -> Option<BinaryAnswer> {
        match self {
            Self::Binary(answer) => Some(answer),
            Self::Graded(_) => None,
        }
    }
}

impl From<Grade> for AnswerValue {
    fn from(value: Grade) -> Self {
        Self::Graded(value)
    }
}

impl From<BinaryAnswer> for AnswerValue {
    fn from(value: BinaryAnswer) -> Self {
        Self::Binary(value)
    }
}

/// Answers keyed by question id. May be partial; scoring treats gaps as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the one it replaced.
    pub fn insert(&mut self, id: QuestionId, value: impl Into<AnswerValue>) -> Option<AnswerValue> {
        self.answers.insert(id, value.into())
    }

    pub fn with(mut self, id: u8, value: impl Into<AnswerValue>) -> Self {
        self.insert(QuestionId(id), value);
        self
    }

    /// Builder shortcut for graded answers; values above the scale are ignored.
    pub fn with_grade(self, id: u8, value: u8) -> Self {
        match Grade::new(value) {
            Some(grade) => self.with(id, grade),
            None => self,
        }
    }

    pub fn with_binary(self, id: u8, yes: bool) -> Self {
        self.with(id, BinaryAnswer::from(yes))
    }

    pub fn remove(&mut self, id: QuestionId) -> Option<AnswerValue> {
        self.answers.remove(&id)
    }

    pub fn get(&self, id: QuestionId) -> Option<AnswerValue> {
        self.answers.get(&id).copied()
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.answers.contains_key(&id)
    }

    /// Graded value for `id`, or zero when absent or not graded.
    pub fn grade_points(&self, id: QuestionId) -> u32 {
        self.get(id)
            .and_then(AnswerValue::grade)
            .map(|grade| u32::from(grade.value()))
            .unwrap_or(0)
    }

    pub fn is_yes(&self, id: QuestionId) -> bool {
        self.get(id)
            .and_then(AnswerValue::binary)
            .map(BinaryAnswer::is_yes)
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, AnswerValue)> + '_ {
        self.answers.iter().map(|(id, value)| (*id, *value))
    }

    /// Catalog ids that have no recorded answer, in catalog order.
    pub fn missing(&self, catalog: &QuestionnaireCatalog) -> Vec<QuestionId> {
        catalog.ids().filter(|id| !self.contains(*id)).collect()
    }

    pub fn is_complete(&self, catalog: &QuestionnaireCatalog) -> bool {
        catalog.ids().all(|id| self.contains(id))
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_rejects_values_above_scale() {
        assert_eq!(Grade::new(4).map(Grade::value), Some(4));
        assert!(Grade::new(5).is_none());
        assert_eq!(Grade::ALWAYS.label(), "Sempre");
    }

    #[test]
    fn binary_answer_accepts_form_tags() {
        assert_eq!(BinaryAnswer::parse("si"), Some(BinaryAnswer::Yes));
        assert_eq!(BinaryAnswer::parse(" Sì "), Some(BinaryAnswer::Yes));
        assert_eq!(BinaryAnswer::parse("NO"), Some(BinaryAnswer::No));
        assert_eq!(BinaryAnswer::parse("forse"), None);
    }

    #[test]
    fn mismatched_kinds_contribute_nothing() {
        let answers = AnswerSet::new().with_binary(1, true).with_grade(14, 4);

        assert_eq!(answers.grade_points(QuestionId(1)), 0);
        assert!(!answers.is_yes(QuestionId(14)));
    }

    #[test]
    fn missing_lists_unanswered_ids_in_catalog_order() {
        let catalog = QuestionnaireCatalog::standard();
        let answers: AnswerSet = catalog
            .ids()
            .filter(|id| id.get() != 9 && id.get() != 17)
            .map(|id| (id, AnswerValue::Binary(BinaryAnswer::No)))
            .collect();

        assert_eq!(answers.missing(&catalog), vec![QuestionId(9), QuestionId(17)]);
        assert!(!answers.is_complete(&catalog));
    }
}
