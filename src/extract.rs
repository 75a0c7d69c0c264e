//! Field extraction for Jenkins console logs.
//!
//! Every field is looked up independently with a case-sensitive pattern from a
//! fixed vocabulary (`Started by`, `Commit message:`, `Finished:`, `Duration:`,
//! `Build: #`, `BUILD_NUMBER`). Lookups return `Option`; sentinel defaults are
//! applied only when the [`LogRecord`] is assembled, so a console format change
//! degrades a field to its default instead of failing the run.

use crate::config::ReportConfig;
use crate::types::{BuildNumber, BuildStatus, LogRecord};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    static ref TRIGGER: Regex = Regex::new(r"Started by (.+)").unwrap();
    static ref COMMIT_MESSAGE: Regex = Regex::new(r#"Commit message: "([^"]+)""#).unwrap();
    static ref FINISHED: Regex = Regex::new(r"Finished: (\w+)").unwrap();
    static ref DURATION: Regex = Regex::new(r"Duration: ([\d.]+ sec)").unwrap();
    static ref BUILD_LINE: Regex = Regex::new(r"Build: #(\d+)").unwrap();
    static ref BUILD_NUMBER_VAR: Regex = Regex::new(r"BUILD_NUMBER.*?(\d+)").unwrap();
}

/// Return the first capture group of the first match, if any.
pub fn extract_field(text: &str, pattern: &Regex) -> Option<String> {
    pattern.captures(text).and_then(|caps| caps.get(1)).map(|m| m.as_str().to_string())
}

/// Like [`extract_field`] but falls back to `default` when nothing matches.
pub fn extract_or(text: &str, pattern: &Regex, default: &str) -> String {
    extract_field(text, pattern).unwrap_or_else(|| default.to_string())
}

/// Try several patterns in order and return the first capture found.
pub fn extract_first(text: &str, patterns: &[&Regex]) -> Option<String> {
    patterns.iter().find_map(|p| extract_field(text, p))
}

pub fn extract_trigger(text: &str) -> Option<String> {
    extract_field(text, &TRIGGER).map(|t| t.trim_end().to_string())
}

pub fn extract_status(text: &str) -> Option<BuildStatus> {
    extract_field(text, &FINISHED).map(|token| BuildStatus::from_token(&token))
}

/// `Build: #<n>` wins over a `BUILD_NUMBER` environment dump.
pub fn extract_build_number(text: &str) -> Option<BuildNumber> {
    extract_first(text, &[&*BUILD_LINE, &*BUILD_NUMBER_VAR]).map(|digits| BuildNumber::parse(&digits))
}

/// Scan the whole log and build the top-level record, applying the
/// configured sentinels for anything missing.
pub fn extract_log_record(text: &str, config: &ReportConfig) -> LogRecord {
    let defaults = &config.defaults;

    let record = LogRecord {
        trigger: extract_trigger(text).unwrap_or_else(|| defaults.trigger.clone()),
        commit_message: extract_or(text, &COMMIT_MESSAGE, &defaults.commit_message),
        status: extract_status(text).unwrap_or(BuildStatus::Unknown),
        duration: extract_or(text, &DURATION, &defaults.duration),
        build_number: extract_build_number(text).unwrap_or(BuildNumber::Unknown),
    };

    debug!("Extracted build record: #{} {}", record.build_number, record.status.as_str());
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_field_no_match_returns_none() {
        assert_eq!(extract_field("nothing here", &TRIGGER), None);
        assert_eq!(extract_or("nothing here", &TRIGGER, "fallback"), "fallback");
    }

    #[test]
    fn test_extract_field_first_match_wins() {
        let text = "Started by user alice\nStarted by timer";
        assert_eq!(extract_trigger(text).as_deref(), Some("user alice"));
    }

    #[test]
    fn test_vocabulary_is_case_sensitive() {
        assert_eq!(extract_status("finished: SUCCESS"), None);
        assert_eq!(extract_trigger("started by alice"), None);
    }

    #[test]
    fn test_extract_commit_message() {
        let text = r#"Commit message: "Fix flaky test""#;
        assert_eq!(extract_field(text, &COMMIT_MESSAGE).as_deref(), Some("Fix flaky test"));
        // Unterminated quote is not a match
        assert_eq!(extract_field(r#"Commit message: "oops"#, &COMMIT_MESSAGE), None);
    }

    #[test]
    fn test_extract_status_and_duration() {
        let text = "Duration: 7.2 sec\nFinished: FAILURE";
        assert_eq!(extract_status(text), Some(BuildStatus::Failure));
        assert_eq!(extract_field(text, &DURATION).as_deref(), Some("7.2 sec"));
    }

    #[test]
    fn test_build_number_prefers_build_line() {
        let text = "BUILD_NUMBER=3\nBuild: #42";
        assert_eq!(extract_build_number(text), Some(BuildNumber::Number(42)));
    }

    #[test]
    fn test_build_number_from_env_dump() {
        assert_eq!(extract_build_number("BUILD_NUMBER=17"), Some(BuildNumber::Number(17)));
        assert_eq!(extract_build_number("no number"), None);
    }

    #[test]
    fn test_extract_first_order() {
        let a = Regex::new(r"a=(\d+)").unwrap();
        let b = Regex::new(r"b=(\d+)").unwrap();
        assert_eq!(extract_first("b=2 a=1", &[&a, &b]).as_deref(), Some("1"));
        assert_eq!(extract_first("b=2", &[&a, &b]).as_deref(), Some("2"));
        assert_eq!(extract_first("", &[&a, &b]), None);
    }

    #[test]
    fn test_empty_log_yields_defaults() {
        let config = ReportConfig::default();
        let record = extract_log_record("", &config);
        assert_eq!(record.trigger, "Unknown");
        assert_eq!(record.commit_message, "No commit message");
        assert_eq!(record.status, BuildStatus::Unknown);
        assert_eq!(record.duration, "Unknown");
        assert_eq!(record.build_number, BuildNumber::Unknown);
    }

    #[test]
    fn test_configured_defaults_are_used() {
        let mut config = ReportConfig::default();
        config.defaults.commit_message = "n/a".to_string();
        let record = extract_log_record("Finished: SUCCESS", &config);
        assert_eq!(record.commit_message, "n/a");
        assert_eq!(record.status, BuildStatus::Success);
    }
}
