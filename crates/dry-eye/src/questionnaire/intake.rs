use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::answers::{AnswerSet, AnswerValue, BinaryAnswer, Grade};
use super::catalog::{QuestionId, QuestionKind, QuestionnaireCatalog};

/// Validation errors raised while turning raw form answers into an `AnswerSet`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("Questionario incompleto. Sono richieste risposte a tutte le {required} domande.")]
    Incomplete {
        answered: usize,
        required: usize,
        missing: Vec<QuestionId>,
    },
    #[error("Errore nei dati forniti: domanda sconosciuta '{0}'")]
    UnknownQuestion(String),
    #[error("Errore nei dati forniti: la domanda {id} richiede un valore da 0 a 4 (ricevuto '{value}')")]
    InvalidGraded { id: QuestionId, value: String },
    #[error("Errore nei dati forniti: la domanda {id} richiede 'si' o 'no' (ricevuto '{value}')")]
    InvalidBinary { id: QuestionId, value: String },
}

/// Answer as delivered by the form: `"0"`..`"4"`, `"si"`/`"no"`, or plain JSON numbers and booleans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Number(i64),
    Flag(bool),
    Text(String),
}

impl fmt::Display for RawAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAnswer::Number(value) => write!(f, "{value}"),
            RawAnswer::Flag(value) => write!(f, "{value}"),
            RawAnswer::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for RawAnswer {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Completed (or partial) questionnaire as posted by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireSubmission {
    pub answers: BTreeMap<String, RawAnswer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl QuestionnaireSubmission {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            answers: pairs
                .into_iter()
                .map(|(id, value)| (id.to_string(), RawAnswer::from(value)))
                .collect(),
            timestamp: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakePolicy {
    pub require_complete: bool,
}

impl IntakePolicy {
    pub const fn strict() -> Self {
        Self {
            require_complete: true,
        }
    }

    pub const fn lenient() -> Self {
        Self {
            require_complete: false,
        }
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::strict()
    }
}

/// Guard responsible for producing well-formed `AnswerSet` instances.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionGuard {
    catalog: QuestionnaireCatalog,
    policy: IntakePolicy,
}

impl Default for SubmissionGuard {
    fn default() -> Self {
        Self::with_policy(IntakePolicy::default())
    }
}

impl SubmissionGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self {
            catalog: QuestionnaireCatalog::standard(),
            policy,
        }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    pub fn answers_from_submission(
        &self,
        submission: &QuestionnaireSubmission,
    ) -> Result<AnswerSet, IntakeViolation> {
        self.answers_from_raw(
            submission
                .answers
                .iter()
                .map(|(key, raw)| (key.as_str(), raw)),
        )
    }

    /// Parse `(question key, raw answer)` pairs; keys may be `"7"` or `"q7"`.
    pub fn answers_from_raw<'a, I>(&self, raw_answers: I) -> Result<AnswerSet, IntakeViolation>
    where
        I: IntoIterator<Item = (&'a str, &'a RawAnswer)>,
    {
        let mut answers = AnswerSet::new();

        for (key, raw) in raw_answers {
            let (id, kind) = self
                .resolve_question(key)
                .ok_or_else(|| IntakeViolation::UnknownQuestion(key.to_string()))?;

            let value = match kind {
                QuestionKind::Graded => parse_grade(raw)
                    .map(AnswerValue::Graded)
                    .ok_or_else(|| IntakeViolation::InvalidGraded {
                        id,
                        value: raw.to_string(),
                    })?,
                QuestionKind::Binary => parse_binary(raw)
                    .map(AnswerValue::Binary)
                    .ok_or_else(|| IntakeViolation::InvalidBinary {
                        id,
                        value: raw.to_string(),
                    })?,
            };

            answers.insert(id, value);
        }

        if self.policy.require_complete {
            let missing = answers.missing(&self.catalog);
            if !missing.is_empty() {
                return Err(IntakeViolation::Incomplete {
                    answered: answers.len(),
                    required: self.catalog.len(),
                    missing,
                });
            }
        }

        Ok(answers)
    }

    fn resolve_question(&self, key: &str) -> Option<(QuestionId, QuestionKind)> {
        let trimmed = key.trim();
        let digits = trimmed
            .strip_prefix('q')
            .or_else(|| trimmed.strip_prefix('Q'))
            .unwrap_or(trimmed);
        let id = QuestionId(digits.parse::<u8>().ok()?);
        self.catalog.kind_of(id).map(|kind| (id, kind))
    }
}

fn parse_grade(raw: &RawAnswer) -> Option<Grade> {
    match raw {
        RawAnswer::Number(value) => u8::try_from(*value).ok().and_then(Grade::new),
        RawAnswer::Text(value) => value.trim().parse::<u8>().ok().and_then(Grade::new),
        RawAnswer::Flag(_) => None,
    }
}

fn parse_binary(raw: &RawAnswer) -> Option<BinaryAnswer> {
    match raw {
        RawAnswer::Flag(value) => Some(BinaryAnswer::from(*value)),
        RawAnswer::Text(value) => BinaryAnswer::parse(value),
        RawAnswer::Number(_) => None,
    }
}
