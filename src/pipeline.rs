/// Report pipeline: read → extract → render → write
///
/// One call handles one console log. The input is read and decoded in full
/// before the output path is touched, so a missing or undecodable input never
/// creates or clobbers a report.
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::extract;
use crate::metrics;
use crate::report::{self, ReportKind};
use crate::sample::SAMPLE_CONSOLE_LOG;
use crate::stages;
use crate::types::ReportData;
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File names used by the `demo` command
pub const DEMO_RAW_LOG: &str = "jenkins-console-raw.txt";
pub const DEMO_CLEANED_REPORT: &str = "jenkins-console-cleaned.md";

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub output_path: PathBuf,
    pub data: ReportData,
}

/// Read a console log as text.
pub fn read_log(path: &Path, config: &ReportConfig) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ReportError::InputNotFound(path.to_path_buf()),
        _ => ReportError::Read { path: path.to_path_buf(), source },
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) if config.lossy_utf8 => {
            warn!("{} is not valid UTF-8, replacing invalid sequences", path.display());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
        Err(_) => Err(ReportError::InvalidEncoding(path.to_path_buf())),
    }
}

/// Extract everything from `text`, stamping the data with the current local time.
pub fn assemble(text: &str, config: &ReportConfig) -> ReportData {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    assemble_at(text, config, &now)
}

/// Extract everything from `text` with a fixed generation timestamp.
pub fn assemble_at(text: &str, config: &ReportConfig, generated_at: &str) -> ReportData {
    ReportData {
        record: extract::extract_log_record(text, config),
        stages: stages::extract_stages(text, config),
        tests: metrics::extract_test_metrics(text),
        quality: metrics::extract_quality_metrics(text, config),
        artifacts: metrics::extract_artifacts(text),
        generated_at: generated_at.to_string(),
    }
}

/// Produce one report from the console log at `input`.
///
/// `output` defaults to [`ReportKind::default_output_path`].
pub fn run_report(kind: ReportKind, input: &Path, output: Option<&Path>, config: &ReportConfig) -> Result<RunOutcome> {
    debug!("Generating {} report from {:?}", kind.as_str(), input);

    let text = read_log(input, config)?;
    let data = assemble(&text, config);

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => kind.default_output_path(input, data.record.build_number),
    };

    let rendered = kind.render(&data, config);
    report::write_report(&output_path, &rendered)?;

    Ok(RunOutcome { output_path, data })
}

/// Write the sample console log into `dir` and clean it.
pub fn run_demo(dir: &Path, config: &ReportConfig) -> Result<RunOutcome> {
    fs::create_dir_all(dir).map_err(|source| ReportError::Write { path: dir.to_path_buf(), source })?;

    let raw_path = dir.join(DEMO_RAW_LOG);
    report::write_report(&raw_path, SAMPLE_CONSOLE_LOG)?;

    run_report(ReportKind::Clean, &raw_path, Some(&dir.join(DEMO_CLEANED_REPORT)), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BuildNumber, BuildStatus, StageStatus};
    use tempfile::TempDir;

    #[test]
    fn test_missing_input_reports_not_found_and_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("missing.txt");
        let output = temp_dir.path().join("out.md");

        let err = run_report(ReportKind::Clean, &input, Some(&output), &ReportConfig::default()).unwrap_err();
        assert!(matches!(err, ReportError::InputNotFound(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_invalid_utf8_keeps_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("console.txt");
        let output = temp_dir.path().join("out.md");
        fs::write(&input, [0x46, 0x69, 0xff, 0xfe, 0x0a]).unwrap();
        fs::write(&output, "previous report").unwrap();

        let err = run_report(ReportKind::Clean, &input, Some(&output), &ReportConfig::default()).unwrap_err();
        assert!(matches!(err, ReportError::InvalidEncoding(_)));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous report");
    }

    #[test]
    fn test_lossy_decoding_when_enabled() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("console.txt");
        fs::write(&input, b"Finished: SUCCESS\n\xff\n").unwrap();

        let config = ReportConfig { lossy_utf8: true, ..ReportConfig::default() };
        let text = read_log(&input, &config).unwrap();
        assert!(text.contains('\u{FFFD}'));
        assert!(text.starts_with("Finished: SUCCESS"));
    }

    #[test]
    fn test_assemble_sample() {
        let data = assemble_at(SAMPLE_CONSOLE_LOG, &ReportConfig::default(), "stamp");
        assert_eq!(data.record.status, BuildStatus::Success);
        assert_eq!(data.record.build_number, BuildNumber::Unknown);
        assert_eq!(data.record.trigger, "GitHub push by Gianpy99");
        assert_eq!(data.stages.len(), 4);
        assert!(data.stages.iter().all(|s| s.status == StageStatus::Passed));
        assert_eq!(data.tests.total_tests(), 25);
        assert_eq!(data.generated_at, "stamp");
    }

    #[test]
    fn test_run_report_default_clean_path() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("build.txt");
        fs::write(&input, SAMPLE_CONSOLE_LOG).unwrap();

        let outcome = run_report(ReportKind::Clean, &input, None, &ReportConfig::default()).unwrap();
        assert_eq!(outcome.output_path, temp_dir.path().join("build_cleaned.md"));
        let report = fs::read_to_string(&outcome.output_path).unwrap();
        assert!(report.contains("- **Build Number**: #Unknown"));
    }

    #[test]
    fn test_run_demo_writes_both_files() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("demo");

        let outcome = run_demo(&dir, &ReportConfig::default()).unwrap();
        assert_eq!(fs::read_to_string(dir.join(DEMO_RAW_LOG)).unwrap(), SAMPLE_CONSOLE_LOG);
        assert_eq!(outcome.output_path, dir.join(DEMO_CLEANED_REPORT));
        assert!(outcome.output_path.exists());
    }

    #[test]
    fn test_same_data_renders_identically() {
        let config = ReportConfig::default();
        let data = assemble_at(SAMPLE_CONSOLE_LOG, &config, "stamp");
        for kind in [ReportKind::Clean, ReportKind::Dashboard, ReportKind::Executive] {
            assert_eq!(kind.render(&data, &config), kind.render(&data, &config));
        }
    }
}
