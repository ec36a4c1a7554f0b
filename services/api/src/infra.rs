use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Parse a command-line answer written as `ID=VALUE`, e.g. `7=3` or `q14=si`.
pub(crate) fn parse_answer_pair(raw: &str) -> Result<(String, String), String> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, found '{raw}'"))?;
    let (id, value) = (id.trim(), value.trim());
    if id.is_empty() || value.is_empty() {
        return Err(format!("expected ID=VALUE, found '{raw}'"));
    }
    Ok((id.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date(" 2026-03-05 "),
            Ok(NaiveDate::from_ymd_opt(2026, 3, 5).expect("valid date"))
        );
        assert!(parse_date("05/03/2026").is_err());
    }

    #[test]
    fn parse_answer_pair_splits_on_first_equals() {
        assert_eq!(
            parse_answer_pair("q7 = 3"),
            Ok(("q7".to_string(), "3".to_string()))
        );
        assert!(parse_answer_pair("7").is_err());
        assert!(parse_answer_pair("=si").is_err());
    }
}
