mod plain;
mod printable;
pub mod views;

use super::classification::ClassificationResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const REPORT_HEADING: &str = "QUESTIONARIO OCCHIO SECCO - RISULTATO";
pub const PRINTABLE_TITLE: &str = "Risultato Questionario Occhio Secco";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl ReportFormat {
    pub fn mime(self) -> mime::Mime {
        match self {
            Self::Text => mime::TEXT_PLAIN_UTF_8,
            Self::Html => mime::TEXT_HTML_UTF_8,
            Self::Json => mime::APPLICATION_JSON,
        }
    }
}

/// A classification stamped with the day it was produced, ready to export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationReport {
    pub result: ClassificationResult,
    pub generated_on: NaiveDate,
}

/// Report body paired with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub format: ReportFormat,
    pub body: String,
}

impl RenderedReport {
    pub fn content_type(&self) -> mime::Mime {
        self.format.mime()
    }
}

impl ClassificationReport {
    pub fn new(result: ClassificationResult, generated_on: NaiveDate) -> Self {
        Self {
            result,
            generated_on,
        }
    }

    /// Short Italian date, e.g. `5/3/2026`.
    pub fn formatted_date(&self) -> String {
        self.generated_on.format("%-d/%-m/%Y").to_string()
    }

    pub fn to_plain_text(&self) -> String {
        plain::render(self)
    }

    pub fn to_printable_html(&self) -> String {
        printable::render(self)
    }

    pub fn render(&self, format: ReportFormat) -> Result<RenderedReport, serde_json::Error> {
        let body = match format {
            ReportFormat::Text => self.to_plain_text(),
            ReportFormat::Html => self.to_printable_html(),
            ReportFormat::Json => {
                serde_json::to_string_pretty(&views::ClassificationView::from(&self.result))?
            }
        };
        Ok(RenderedReport { format, body })
    }
}
