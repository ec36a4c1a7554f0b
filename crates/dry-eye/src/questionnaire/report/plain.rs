use super::super::catalog::PLAIN_TEXT_DISCLAIMER;
use super::{ClassificationReport, REPORT_HEADING};
use std::fmt::Write;

pub(super) fn render(report: &ClassificationReport) -> String {
    let result = &report.result;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{REPORT_HEADING}");
    let _ = writeln!(out, "Data: {}", report.formatted_date());
    let _ = writeln!(out);
    let _ = writeln!(out, "CLASSIFICAZIONE: {}", result.name());
    let _ = writeln!(out);
    let _ = writeln!(out, "DESCRIZIONE: {}", result.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "RACCOMANDAZIONI:");
    for (index, recommendation) in result.recommendations.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, recommendation);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "PUNTEGGI:");
    let _ = writeln!(out, "- Evaporativo: {}", result.scores.evaporative);
    let _ = writeln!(out, "- Deficit Acquoso: {}", result.scores.aqueous_deficit);
    let _ = writeln!(out, "- Sintomi Totali: {}", result.scores.total_symptoms);
    let _ = writeln!(out);
    let _ = write!(out, "DISCLAIMER: {PLAIN_TEXT_DISCLAIMER}");

    out
}
