/// Core data structures for parsed console logs
///
/// This module defines the records produced by scanning one Jenkins console
/// log. Every record is built once per run and never mutated afterwards.
use std::fmt;

/// Overall build outcome, taken from the `Finished: <STATUS>` marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BuildStatus {
    Success,
    Failure,
    Unknown,
}

impl BuildStatus {
    /// Map the raw token after `Finished:` to a status.
    /// Anything other than SUCCESS or FAILURE (ABORTED, UNSTABLE, ...) is Unknown.
    pub fn from_token(token: &str) -> Self {
        match token {
            "SUCCESS" => BuildStatus::Success,
            "FAILURE" => BuildStatus::Failure,
            _ => BuildStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildStatus::Success => "SUCCESS",
            BuildStatus::Failure => "FAILURE",
            BuildStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            BuildStatus::Success => "✅",
            BuildStatus::Failure => "❌",
            BuildStatus::Unknown => "❔",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BuildStatus::Success)
    }
}

/// Build number: either the number found in the log or the Unknown sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BuildNumber {
    Number(u64),
    Unknown,
}

impl BuildNumber {
    /// Parse a captured digit string; overflow degrades to Unknown
    pub fn parse(digits: &str) -> Self {
        digits.parse::<u64>().map(BuildNumber::Number).unwrap_or(BuildNumber::Unknown)
    }
}

impl fmt::Display for BuildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildNumber::Number(n) => write!(f, "{}", n),
            BuildNumber::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Top-level facts about one build
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LogRecord {
    pub trigger: String,        // "GitHub push by someone"
    pub commit_message: String, // text between the quotes of `Commit message: "..."`
    pub status: BuildStatus,
    pub duration: String, // "7.2 sec"
    pub build_number: BuildNumber,
}

/// Status of a single pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StageStatus {
    Passed,
    Failed,
    Skipped,
}

impl StageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::Passed => "PASSED",
            StageStatus::Failed => "FAILED",
            StageStatus::Skipped => "SKIPPED",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            StageStatus::Passed => "✅",
            StageStatus::Failed => "❌",
            StageStatus::Skipped => "⏭️",
        }
    }

    /// Label used in reports, e.g. "✅ PASSED"
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji(), self.as_str())
    }
}

/// One `[Pipeline] { (<name>)` stage found in the log
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StageRecord {
    pub name: String,
    pub status: StageStatus,
    pub details: Vec<String>,
}

/// A test runner invocation summarised from the log
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TestRun {
    pub count: u64,
    pub duration: String, // seconds, as printed: "0.001"
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TestMetrics {
    pub unittest: Option<TestRun>,
    pub pytest: Option<TestRun>,
}

impl TestMetrics {
    /// Sum of the counts that were found
    pub fn total_tests(&self) -> u64 {
        self.unittest.as_ref().map(|r| r.count).unwrap_or(0) + self.pytest.as_ref().map(|r| r.count).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.unittest.is_none() && self.pytest.is_none()
    }
}

/// Coverage row for the configured target file
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coverage {
    pub file: String, // the configured coverage target
    pub statements: u64,
    pub missed: u64,
    pub percentage: String, // "100%"
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QualityMetrics {
    pub coverage: Option<Coverage>,
    pub lint_violations: usize,
}

/// An archived build artifact detected in the log
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Artifact {
    Flake8Report,
    PytestHtml,
    CoverageHtml,
    Package { build: u64 },
}

impl Artifact {
    pub fn describe(&self) -> String {
        match self {
            Artifact::Flake8Report => "📊 Code Quality Reports (flake8)".to_string(),
            Artifact::PytestHtml => "🧪 Test Results (HTML)".to_string(),
            Artifact::CoverageHtml => "📈 Coverage Report (HTML)".to_string(),
            Artifact::Package { build } => format!("📦 Application Package (build #{})", build),
        }
    }
}

/// Everything a renderer needs, assembled once per run
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReportData {
    pub record: LogRecord,
    pub stages: Vec<StageRecord>,
    pub tests: TestMetrics,
    pub quality: QualityMetrics,
    pub artifacts: Vec<Artifact>,
    pub generated_at: String,
}

impl ReportData {
    pub fn failed_stages(&self) -> usize {
        self.stages.iter().filter(|s| s.status == StageStatus::Failed).count()
    }

    pub fn all_stages_passed(&self) -> bool {
        self.stages.iter().all(|s| s.status != StageStatus::Failed)
    }
}
