use super::super::catalog::PRINTABLE_DISCLAIMER;
use super::{ClassificationReport, PRINTABLE_TITLE, REPORT_HEADING};
use std::fmt::Write;

const STYLES: &str = "body { font-family: Arial, sans-serif; margin: 20px; line-height: 1.6; }
      h1 { color: #2563eb; border-bottom: 2px solid #2563eb; padding-bottom: 10px; }
      .disclaimer { background: #fef3c7; border: 1px solid #f59e0b; padding: 15px; margin-top: 20px; border-radius: 5px; }";

pub(super) fn render(report: &ClassificationReport) -> String {
    let result = &report.result;
    let mut out = String::new();

    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"it\">");
    let _ = writeln!(out, "  <head>");
    let _ = writeln!(out, "    <meta charset=\"utf-8\">");
    let _ = writeln!(out, "    <title>{PRINTABLE_TITLE}</title>");
    let _ = writeln!(out, "    <style>\n      {STYLES}\n    </style>");
    let _ = writeln!(out, "  </head>");
    let _ = writeln!(out, "  <body>");
    let _ = writeln!(out, "    <h1>{REPORT_HEADING}</h1>");
    let _ = writeln!(
        out,
        "    <p><strong>Data:</strong> {}</p>",
        report.formatted_date()
    );
    let _ = writeln!(
        out,
        "    <p><strong>CLASSIFICAZIONE:</strong> {}</p>",
        escape_html(result.name())
    );
    let _ = writeln!(out, "    <h2>DESCRIZIONE:</h2>");
    let _ = writeln!(out, "    <p>{}</p>", escape_html(&result.description));
    let _ = writeln!(out, "    <h2>RACCOMANDAZIONI:</h2>");
    let _ = writeln!(out, "    <ol>");
    for recommendation in &result.recommendations {
        let _ = writeln!(out, "      <li>{}</li>", escape_html(recommendation));
    }
    let _ = writeln!(out, "    </ol>");
    let _ = writeln!(out, "    <h2>PUNTEGGI:</h2>");
    let _ = writeln!(out, "    <ul>");
    let _ = writeln!(out, "      <li>Evaporativo: {}</li>", result.scores.evaporative);
    let _ = writeln!(
        out,
        "      <li>Deficit Acquoso: {}</li>",
        result.scores.aqueous_deficit
    );
    let _ = writeln!(
        out,
        "      <li>Sintomi Totali: {}</li>",
        result.scores.total_symptoms
    );
    let _ = writeln!(out, "    </ul>");
    let _ = writeln!(out, "    <div class=\"disclaimer\">");
    let _ = writeln!(out, "      <strong>DISCLAIMER:</strong><br>");
    let _ = writeln!(out, "      {}", escape_html(PRINTABLE_DISCLAIMER));
    let _ = writeln!(out, "    </div>");
    let _ = writeln!(out, "  </body>");
    let _ = writeln!(out, "</html>");

    out
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape_html("<b>l'occhio & \"gel\"</b>"),
            "&lt;b&gt;l&#39;occhio &amp; &quot;gel&quot;&lt;/b&gt;"
        );
    }
}
