//! Pipeline stage extraction.
//!
//! A stage starts at `[Pipeline] { (<name>)` and runs to the next
//! `[Pipeline] // stage`. When no close marker follows, the region is cut off
//! after a fixed number of characters (`stage_window`), which can drop the tail
//! of a long unterminated stage.

use crate::config::ReportConfig;
use crate::metrics::coverage_pattern;
use crate::types::{StageRecord, StageStatus};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    static ref STAGE_OPEN: Regex = Regex::new(r"\[Pipeline\] \{ \((.+?)\)").unwrap();
    static ref STAGE_CLOSE: Regex = Regex::new(r"\[Pipeline\] // stage").unwrap();
    static ref UNITTEST_OK: Regex = Regex::new(r"Ran (\d+) tests.*OK").unwrap();
    static ref PYTEST_PASSED: Regex = Regex::new(r"(\d+) passed").unwrap();
}

/// Jenkins-internal stages that aren't part of the user's pipeline
const SKIPPED_STAGE_MARKER: &str = "Declarative:";

/// Find every stage in order of appearance and classify it.
pub fn extract_stages(text: &str, config: &ReportConfig) -> Vec<StageRecord> {
    let mut stages = Vec::new();

    for caps in STAGE_OPEN.captures_iter(text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let name = name.as_str();
        if name.contains(SKIPPED_STAGE_MARKER) {
            continue;
        }

        let region = stage_region(text, whole.end(), config.stage_window);
        let status = classify_stage(region);
        let details = stage_details(name, region, config);

        debug!("Stage '{}': {} ({} details)", name, status.as_str(), details.len());
        stages.push(StageRecord { name: name.to_string(), status, details });
    }

    stages
}

/// Text between a stage open marker ending at `start` and its close marker.
///
/// Falls back to at most `window` characters when no close marker follows.
pub fn stage_region(text: &str, start: usize, window: usize) -> &str {
    let rest = &text[start..];
    if let Some(close) = STAGE_CLOSE.find(rest) {
        return &rest[..close.start()];
    }

    match rest.char_indices().nth(window) {
        Some((cut, _)) => &rest[..cut],
        None => rest,
    }
}

/// Classify a stage region: "error"/"failed" beat "skipped", anything else passed.
pub fn classify_stage(region: &str) -> StageStatus {
    let lower = region.to_lowercase();
    if lower.contains("error") || lower.contains("failed") {
        StageStatus::Failed
    } else if lower.contains("skipped") {
        StageStatus::Skipped
    } else {
        StageStatus::Passed
    }
}

/// Human-readable details for the stages we know how to describe.
pub fn stage_details(name: &str, region: &str, config: &ReportConfig) -> Vec<String> {
    let mut details = Vec::new();

    match name {
        "Setup Environment" => {
            if region.contains("Python 3.11.2") {
                details.push("Python 3.11.2 detected and configured".to_string());
            }
            if region.contains("pip available") {
                details.push("Package installation successful".to_string());
            }
        }
        "Code Quality Check" => {
            if region.contains("flake8") {
                details.push("Flake8 code quality check executed".to_string());
            }
            if region.contains("Archiving artifacts") {
                details.push("Quality reports archived as artifacts".to_string());
            }
        }
        "Test" => {
            if let Some(caps) = UNITTEST_OK.captures(region) {
                details.push(format!("Unittest: {} tests passed", &caps[1]));
            }
            if let Some(caps) = PYTEST_PASSED.captures(region) {
                details.push(format!("Pytest: {} tests passed", &caps[1]));
            }
            if let Some(caps) = coverage_pattern(&config.coverage_target).and_then(|re| re.captures(region)) {
                details.push(format!("Code coverage: {}", &caps[3]));
            }
        }
        "Build Artifact" => {
            if region.contains("tar -czf") {
                details.push("Application artifact created and archived".to_string());
            }
        }
        _ => {}
    }

    details
}
