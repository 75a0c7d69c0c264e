//! Test, quality and artifact metrics.
//!
//! Each metric is scanned from the full log on its own; a metric whose pattern
//! doesn't match is simply absent.

use crate::config::ReportConfig;
use crate::types::{Artifact, Coverage, QualityMetrics, TestMetrics, TestRun};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    static ref UNITTEST_RUN: Regex = Regex::new(r"(?s)Ran (\d+) tests.*?in ([\d.]+)s.*?OK").unwrap();
    static ref PYTEST_RUN: Regex = Regex::new(r"(\d+) passed.*?in ([\d.]+)s").unwrap();
    // flake8: "<file>:<line>:<col>: <code> <message>"
    static ref LINT_LINE: Regex = Regex::new(r"(?m)^[^\s:]+:\d+:\d+: [A-Z]+\d+ ").unwrap();
    static ref PACKAGE: Regex = Regex::new(r"app-(\d+)\.tar\.gz").unwrap();
}

/// Pattern for the `coverage report` row of `target`:
/// name, statements, missed, percentage.
pub fn coverage_pattern(target: &str) -> Option<Regex> {
    Regex::new(&format!(r"{}\s+(\d+)\s+(\d+)\s+(\d+%)", regex::escape(target))).ok()
}

fn test_run(re: &Regex, text: &str) -> Option<TestRun> {
    let caps = re.captures(text)?;
    let count = caps.get(1)?.as_str().parse().ok()?;
    let duration = caps.get(2)?.as_str().to_string();
    Some(TestRun { count, duration })
}

pub fn extract_test_metrics(text: &str) -> TestMetrics {
    let metrics = TestMetrics { unittest: test_run(&UNITTEST_RUN, text), pytest: test_run(&PYTEST_RUN, text) };
    debug!("Test metrics: {} tests found", metrics.total_tests());
    metrics
}

pub fn extract_coverage(text: &str, target: &str) -> Option<Coverage> {
    let caps = coverage_pattern(target)?.captures(text)?;
    Some(Coverage {
        file: target.to_string(),
        statements: caps.get(1)?.as_str().parse().ok()?,
        missed: caps.get(2)?.as_str().parse().ok()?,
        percentage: caps.get(3)?.as_str().to_string(),
    })
}

/// Count flake8-style violation lines echoed into the log
pub fn count_lint_violations(text: &str) -> usize {
    LINT_LINE.find_iter(text).count()
}

pub fn extract_quality_metrics(text: &str, config: &ReportConfig) -> QualityMetrics {
    QualityMetrics {
        coverage: extract_coverage(text, &config.coverage_target),
        lint_violations: count_lint_violations(text),
    }
}

/// Archived artifacts mentioned in the log, in a fixed order
pub fn extract_artifacts(text: &str) -> Vec<Artifact> {
    let mut artifacts = Vec::new();

    if text.contains("flake8-report") {
        artifacts.push(Artifact::Flake8Report);
    }
    if text.contains("pytest-report.html") {
        artifacts.push(Artifact::PytestHtml);
    }
    if text.contains("htmlcov/index.html") {
        artifacts.push(Artifact::CoverageHtml);
    }
    if let Some(build) = PACKAGE.captures(text).and_then(|caps| caps[1].parse().ok()) {
        artifacts.push(Artifact::Package { build });
    }

    artifacts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unittest_spans_lines() {
        let text = "Ran 10 tests in 0.001s\n\nOK\n";
        let metrics = extract_test_metrics(text);
        assert_eq!(metrics.unittest, Some(TestRun { count: 10, duration: "0.001".to_string() }));
        assert_eq!(metrics.pytest, None);
    }

    #[test]
    fn test_unittest_requires_ok() {
        let text = "Ran 10 tests in 0.001s\n\nFAILED (failures=1)\n";
        assert_eq!(extract_test_metrics(text).unittest, None);
    }

    #[test]
    fn test_pytest_with_ansi_noise() {
        let text = "[32m==== [32m[1m15 passed[0m[32m in 0.03s[0m ====";
        let metrics = extract_test_metrics(text);
        assert_eq!(metrics.pytest, Some(TestRun { count: 15, duration: "0.03".to_string() }));
    }

    #[test]
    fn test_coverage_for_target() {
        let text = "Name    Stmts   Miss  Cover\napp.py     23      0   100%\nlib.py     40     10    75%\n";
        let cov = extract_coverage(text, "app.py").unwrap();
        assert_eq!(
            cov,
            Coverage { file: "app.py".to_string(), statements: 23, missed: 0, percentage: "100%".to_string() }
        );

        let cov = extract_coverage(text, "lib.py").unwrap();
        assert_eq!(cov.percentage, "75%");

        assert_eq!(extract_coverage(text, "missing.py"), None);
    }

    #[test]
    fn test_coverage_target_is_escaped() {
        // "." must not match arbitrary characters
        assert_eq!(extract_coverage("appXpy  1  0  100%", "app.py"), None);
    }

    #[test]
    fn test_count_lint_violations() {
        let text = "app.py:3:1: E302 expected 2 blank lines\ntest_app.py:10:80: E501 line too long\nnot a violation\n";
        assert_eq!(count_lint_violations(text), 2);
        assert_eq!(count_lint_violations(""), 0);
    }

    #[test]
    fn test_artifacts() {
        let text = "flake8-report.txt\npytest-report.html\nhtmlcov/index.html\ntar -czf app-15.tar.gz dist/";
        assert_eq!(
            extract_artifacts(text),
            vec![Artifact::Flake8Report, Artifact::PytestHtml, Artifact::CoverageHtml, Artifact::Package { build: 15 }]
        );
        assert!(extract_artifacts("nothing archived").is_empty());
    }
}
