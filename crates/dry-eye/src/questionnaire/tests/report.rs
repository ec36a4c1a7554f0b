use super::common::*;
use crate::questionnaire::report::PRINTABLE_TITLE;
use crate::questionnaire::{ClassificationReport, DryEyeCategory, ReportFormat};

fn evaporative_report() -> ClassificationReport {
    ClassificationReport::new(engine().classify(&evaporative_answers()), report_date())
}

#[test]
fn plain_text_report_lists_sections_in_order() {
    let text = evaporative_report().to_plain_text();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "QUESTIONARIO OCCHIO SECCO - RISULTATO");
    assert_eq!(lines[1], "Data: 5/3/2026");
    assert_eq!(lines[3], "CLASSIFICAZIONE: Occhio Secco Evaporativo");

    let order = [
        "CLASSIFICAZIONE:",
        "DESCRIZIONE:",
        "RACCOMANDAZIONI:",
        "PUNTEGGI:",
        "DISCLAIMER:",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|marker| text.find(marker).expect("section present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    assert!(text.contains("1. Impacchi caldi sulle palpebre 2 volte al giorno"));
    assert!(text.contains("- Evaporativo: 12"));
    assert!(text.contains("- Deficit Acquoso: 0"));
    assert!(text.contains("- Sintomi Totali: 12"));
    assert!(text.ends_with("alla visita oculistica."));
}

#[test]
fn printable_report_is_a_standalone_document() {
    let html = evaporative_report().to_printable_html();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(&format!("<title>{PRINTABLE_TITLE}</title>")));
    assert!(html.contains("<strong>Data:</strong> 5/3/2026"));
    assert!(html.contains("<ol>"));
    assert!(html.contains("<li>Impacchi caldi sulle palpebre 2 volte al giorno</li>"));
    assert!(html.contains("class=\"disclaimer\""));
    assert!(html.contains("<li>Riduci l&#39;uso prolungato di schermi digitali</li>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn json_report_uses_form_field_names() {
    let rendered = evaporative_report()
        .render(ReportFormat::Json)
        .expect("json renders");

    assert_eq!(rendered.content_type(), mime::APPLICATION_JSON);
    let payload: serde_json::Value = serde_json::from_str(&rendered.body).expect("valid json");
    assert_eq!(payload["category"], "evaporative");
    assert_eq!(payload["type"], "Occhio Secco Evaporativo");
    assert_eq!(payload["scores"]["evaporativeScore"], 12);
    assert_eq!(payload["scores"]["aqueousScore"], 0);
    assert_eq!(payload["scores"]["totalSymptoms"], 12);
}

#[test]
fn render_tags_each_format_with_its_content_type() {
    let report = evaporative_report();

    let text = report.render(ReportFormat::Text).expect("text renders");
    assert_eq!(text.content_type(), mime::TEXT_PLAIN_UTF_8);
    assert_eq!(text.body, report.to_plain_text());

    let html = report.render(ReportFormat::Html).expect("html renders");
    assert_eq!(html.content_type(), mime::TEXT_HTML_UTF_8);
    assert_eq!(html.body, report.to_printable_html());
}

#[test]
fn service_report_defaults_missing_date_to_today() {
    let service = service(crate::questionnaire::IntakePolicy::strict());

    let rendered = service
        .report(&form_submission(0, false), ReportFormat::Text, None)
        .expect("report renders");

    let today = chrono::Local::now().date_naive();
    let expected = format!("Data: {}", today.format("%-d/%-m/%Y"));
    assert!(rendered.body.contains(&expected));
    assert!(rendered
        .body
        .contains(DryEyeCategory::Mild.label()));
}
