//! Report kinds and the small rating helpers shared by the renderers.

use crate::config::ReportConfig;
use crate::types::{BuildNumber, ReportData};
use std::path::{Path, PathBuf};

/// The three report flavours that can be produced from one console log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Cleaned-up Markdown build report
    Clean,
    /// Self-contained HTML dashboard
    Dashboard,
    /// Markdown summary for non-developers
    Executive,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Clean => "clean",
            ReportKind::Dashboard => "dashboard",
            ReportKind::Executive => "executive",
        }
    }

    /// Render `data` in this flavour.
    pub fn render(&self, data: &ReportData, config: &ReportConfig) -> String {
        match self {
            ReportKind::Clean => super::markdown::render_clean_report(data),
            ReportKind::Dashboard => super::dashboard::render_dashboard(data, config.commit_preview_chars),
            ReportKind::Executive => super::executive::render_executive_report(data),
        }
    }

    /// Output path used when the caller doesn't name one.
    ///
    /// - clean: next to the input, `build.txt` → `build_cleaned.md`
    ///   (`_cleaned.md` is appended when the input has no `.txt` suffix)
    /// - dashboard: `jenkins-dashboard-build-<n>.html` in the working directory
    /// - executive: `executive-report-build-<n>.md` in the working directory
    pub fn default_output_path(&self, input: &Path, build_number: BuildNumber) -> PathBuf {
        match self {
            ReportKind::Clean => {
                let name = input.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
                let stem = name.strip_suffix(".txt").unwrap_or(&name);
                input.with_file_name(format!("{}_cleaned.md", stem))
            }
            ReportKind::Dashboard => PathBuf::from(format!("jenkins-dashboard-build-{}.html", build_number)),
            ReportKind::Executive => PathBuf::from(format!("executive-report-build-{}.md", build_number)),
        }
    }
}

/// Leading number of a value like "100%" or "7.2 sec"
pub(crate) fn leading_number(value: &str) -> Option<f64> {
    let end = value.find(|c: char| !(c.is_ascii_digit() || c == '.')).unwrap_or(value.len());
    value[..end].parse().ok()
}

/// Coverage grade: EXCELLENT ≥ 90, GOOD ≥ 70, LOW otherwise
pub(crate) fn coverage_rating(percentage: &str) -> &'static str {
    match leading_number(percentage) {
        Some(p) if p >= 90.0 => "EXCELLENT",
        Some(p) if p >= 70.0 => "GOOD",
        Some(_) => "LOW",
        None => "UNKNOWN",
    }
}

/// Build speed grade from a "<seconds> sec" duration
pub(crate) fn duration_rating(duration: &str) -> &'static str {
    match leading_number(duration) {
        Some(s) if s < 60.0 => "FAST",
        Some(s) if s < 600.0 => "OK",
        Some(_) => "SLOW",
        None => "UNKNOWN",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_default_output_replaces_txt() {
        let path = ReportKind::Clean.default_output_path(Path::new("logs/console.txt"), BuildNumber::Unknown);
        assert_eq!(path, PathBuf::from("logs/console_cleaned.md"));
    }

    #[test]
    fn test_clean_default_output_never_equals_input() {
        let input = Path::new("console.log");
        let path = ReportKind::Clean.default_output_path(input, BuildNumber::Unknown);
        assert_eq!(path, PathBuf::from("console.log_cleaned.md"));
        assert_ne!(path, input);
    }

    #[test]
    fn test_build_number_in_default_names() {
        let input = Path::new("console.txt");
        assert_eq!(
            ReportKind::Dashboard.default_output_path(input, BuildNumber::Number(15)),
            PathBuf::from("jenkins-dashboard-build-15.html")
        );
        assert_eq!(
            ReportKind::Executive.default_output_path(input, BuildNumber::Unknown),
            PathBuf::from("executive-report-build-Unknown.md")
        );
    }

    #[test]
    fn test_ratings() {
        assert_eq!(coverage_rating("100%"), "EXCELLENT");
        assert_eq!(coverage_rating("75%"), "GOOD");
        assert_eq!(coverage_rating("32%"), "LOW");
        assert_eq!(coverage_rating("n/a"), "UNKNOWN");
        assert_eq!(duration_rating("7.2 sec"), "FAST");
        assert_eq!(duration_rating("120 sec"), "OK");
        assert_eq!(duration_rating("3600 sec"), "SLOW");
        assert_eq!(duration_rating("Unknown"), "UNKNOWN");
    }
}
