use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;

use super::answers::AnswerSet;
use super::classification::{ClassificationEngine, ClassificationResult};
use super::intake::{IntakeViolation, RawAnswer, SubmissionGuard};

const RESPONDENT_COLUMN: &str = "respondent";

#[derive(Debug)]
pub enum BatchImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row { line: u64, source: IntakeViolation },
}

impl std::fmt::Display for BatchImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchImportError::Io(err) => write!(f, "failed to read answer sheet export: {}", err),
            BatchImportError::Csv(err) => write!(f, "invalid answer sheet CSV data: {}", err),
            BatchImportError::Row { line, source } => {
                write!(f, "answer sheet on line {} rejected: {}", line, source)
            }
        }
    }
}

impl std::error::Error for BatchImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchImportError::Io(err) => Some(err),
            BatchImportError::Csv(err) => Some(err),
            BatchImportError::Row { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for BatchImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One respondent's answers read from a CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    pub respondent: String,
    pub answers: AnswerSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchClassification {
    pub respondent: String,
    pub result: ClassificationResult,
}

#[derive(Debug, Serialize)]
struct BatchRow<'a> {
    respondent: &'a str,
    category: &'a str,
    evaporative: u32,
    aqueous_deficit: u32,
    total_symptoms: u32,
}

/// Reads answer sheets laid out as one respondent per row and one column per question.
pub struct AnswerSheetImporter {
    guard: SubmissionGuard,
}

impl AnswerSheetImporter {
    pub fn new(guard: SubmissionGuard) -> Self {
        Self { guard }
    }

    pub fn import_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<AnswerSheet>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        self.import_reader(file)
    }

    pub fn import_reader<R: Read>(&self, reader: R) -> Result<Vec<AnswerSheet>, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let respondent_index = headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(RESPONDENT_COLUMN));

        let mut sheets = Vec::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            let line = record
                .position()
                .map(|position| position.line())
                .unwrap_or(index as u64 + 2);

            let raw: Vec<(&str, RawAnswer)> = headers
                .iter()
                .zip(record.iter())
                .enumerate()
                .filter(|(column, (_, cell))| Some(*column) != respondent_index && !cell.is_empty())
                .map(|(_, (header, cell))| (header, RawAnswer::from(cell)))
                .collect();

            let answers = self
                .guard
                .answers_from_raw(raw.iter().map(|(header, value)| (*header, value)))
                .map_err(|source| BatchImportError::Row { line, source })?;

            let respondent = respondent_index
                .and_then(|column| record.get(column))
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("row-{}", index + 1));

            sheets.push(AnswerSheet {
                respondent,
                answers,
            });
        }

        Ok(sheets)
    }
}

pub fn classify_sheets(
    engine: &ClassificationEngine,
    sheets: &[AnswerSheet],
) -> Vec<BatchClassification> {
    sheets
        .iter()
        .map(|sheet| BatchClassification {
            respondent: sheet.respondent.clone(),
            result: engine.classify(&sheet.answers),
        })
        .collect()
}

/// Write `respondent,category,evaporative,aqueous_deficit,total_symptoms` rows.
pub fn write_classifications<W: Write>(
    writer: W,
    classifications: &[BatchClassification],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in classifications {
        csv_writer.serialize(BatchRow {
            respondent: &entry.respondent,
            category: entry.result.category.key(),
            evaporative: entry.result.scores.evaporative,
            aqueous_deficit: entry.result.scores.aqueous_deficit,
            total_symptoms: entry.result.scores.total_symptoms,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
