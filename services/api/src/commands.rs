use crate::infra::{parse_answer_pair, parse_date};
use chrono::NaiveDate;
use clap::{ArgGroup, Args, ValueEnum};
use dry_eye::config::AppConfig;
use dry_eye::error::AppError;
use dry_eye::questionnaire::{
    write_classifications, BatchClassification, DryEyeCategory, IntakePolicy, QuestionKind,
    QuestionnaireCatalog, QuestionnaireService, QuestionnaireSubmission, RawAnswer, ReportFormat,
};
use dry_eye::telemetry;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Plain-text summary, ready to paste
    #[default]
    Text,
    /// Printable HTML page
    Html,
    /// JSON classification view
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Html => ReportFormat::Html,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["answers", "answer"])))]
pub(crate) struct ClassifyArgs {
    /// JSON file with the answers, either `{"answers": {...}}` or a bare `{"1": "4", ...}` map
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Inline answer as ID=VALUE (repeatable), e.g. --answer 7=3 --answer 20=si
    #[arg(long, value_parser = parse_answer_pair)]
    pub(crate) answer: Vec<(String, String)>,
    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Report date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Classify even when some questions are unanswered
    #[arg(long)]
    pub(crate) allow_incomplete: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with one answer sheet per row
    pub(crate) csv: PathBuf,
    /// Accept rows with blank cells; gaps score zero
    #[arg(long)]
    pub(crate) allow_incomplete: bool,
}

/// Accepted layouts for an answers file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswersDocument {
    Submission(QuestionnaireSubmission),
    Bare(BTreeMap<String, RawAnswer>),
}

impl From<AnswersDocument> for QuestionnaireSubmission {
    fn from(value: AnswersDocument) -> Self {
        match value {
            AnswersDocument::Submission(submission) => submission,
            AnswersDocument::Bare(answers) => QuestionnaireSubmission {
                answers,
                timestamp: None,
            },
        }
    }
}

/// Load config and install logging for one-shot commands. Logs go to stderr.
fn command_service(allow_incomplete: bool) -> Result<QuestionnaireService, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let policy = IntakePolicy {
        require_complete: config.questionnaire.require_complete && !allow_incomplete,
    };
    Ok(QuestionnaireService::new(policy))
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    print!("{}", render_questions(&QuestionnaireCatalog::standard()));
    Ok(())
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let ClassifyArgs {
        answers,
        answer,
        format,
        date,
        allow_incomplete,
    } = args;

    let service = command_service(allow_incomplete)?;
    let submission = match answers {
        Some(path) => load_submission(path)?,
        None => QuestionnaireSubmission::from_pairs(
            answer.iter().map(|(id, value)| (id.as_str(), value.as_str())),
        ),
    };

    let report = service.report(&submission, format.into(), date)?;
    println!("{}", report.body);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs {
        csv,
        allow_incomplete,
    } = args;

    let service = command_service(allow_incomplete)?;
    let file = std::fs::File::open(&csv)?;
    let results = service.classify_csv(file)?;
    if results.is_empty() {
        warn!(path = %csv.display(), "answer sheet export has no rows");
    }

    for (category, count) in category_counts(&results) {
        info!(category = category.key(), count, "batch classification summary");
    }

    write_classifications(std::io::stdout().lock(), &results)?;
    Ok(())
}

fn load_submission(path: PathBuf) -> Result<QuestionnaireSubmission, AppError> {
    let raw = std::fs::read_to_string(&path)?;
    let document: AnswersDocument = serde_json::from_str(&raw)?;
    Ok(document.into())
}

fn category_counts(results: &[BatchClassification]) -> Vec<(DryEyeCategory, usize)> {
    DryEyeCategory::ordered()
        .into_iter()
        .map(|category| {
            let count = results
                .iter()
                .filter(|entry| entry.result.category == category)
                .count();
            (category, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn render_questions(catalog: &QuestionnaireCatalog) -> String {
    let mut out = String::new();
    let info = catalog.info();
    out.push_str(&format!("{}\n", info.title));
    out.push_str(&format!(
        "{} domande, {} sezioni ({})\n",
        info.total_questions, info.sections, info.estimated_time
    ));

    for section in catalog.sections() {
        out.push_str(&format!("\n{}. {}\n", section.id, section.title));
        out.push_str(&format!("   {}\n", section.description));
        for question in section.questions {
            let hint = match question.kind {
                QuestionKind::Graded => "[0-4]",
                QuestionKind::Binary => "[si/no]",
            };
            out.push_str(&format!(
                "  {:>2}. {} {}\n",
                question.id.get(),
                question.text,
                hint
            ));
        }
    }

    out.push_str(&format!("\n{}\n", info.disclaimer));
    out
}
