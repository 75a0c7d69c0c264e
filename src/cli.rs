use crate::config::ReportConfig;
use crate::error::Result;
use crate::pipeline::{self, RunOutcome};
use crate::report::ReportKind;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Console log read by `dashboard` and `executive` when no input is given
pub const DEFAULT_INPUT: &str = "jenkins-console-raw.txt";

#[derive(Parser, Debug, Clone)]
#[command(name = "ci-log-report")]
#[command(about = "Turn raw Jenkins console logs into clean Markdown and HTML build reports")]
#[command(version)]
pub struct CliArgs {
    /// TOML config file (default: $CI_LOG_REPORT_CONFIG, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the extracted build data as JSON instead of the status lines
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Clean a console log into a readable Markdown build report
    Clean {
        /// Raw console log
        input: PathBuf,
        /// Report path (default: INPUT with .txt replaced by _cleaned.md)
        output: Option<PathBuf>,
    },

    /// Generate an HTML dashboard (default output: jenkins-dashboard-build-<n>.html)
    Dashboard {
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,
        output: Option<PathBuf>,
    },

    /// Generate an executive Markdown summary (default output: executive-report-build-<n>.md)
    Executive {
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,
        output: Option<PathBuf>,
    },

    /// Write the built-in sample console log to DIR and clean it
    Demo {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

impl Command {
    /// Report kind, input and explicit output for the report commands
    pub fn report_target(&self) -> Option<(ReportKind, &Path, Option<&Path>)> {
        match self {
            Command::Clean { input, output } => Some((ReportKind::Clean, input, output.as_deref())),
            Command::Dashboard { input, output } => Some((ReportKind::Dashboard, input, output.as_deref())),
            Command::Executive { input, output } => Some((ReportKind::Executive, input, output.as_deref())),
            Command::Demo { .. } => None,
        }
    }

    /// Run the command
    pub fn execute(&self, config: &ReportConfig) -> Result<RunOutcome> {
        match self {
            Command::Demo { dir } => pipeline::run_demo(dir, config),
            Command::Clean { input, output } => pipeline::run_report(ReportKind::Clean, input, output.as_deref(), config),
            Command::Dashboard { input, output } => {
                pipeline::run_report(ReportKind::Dashboard, input, output.as_deref(), config)
            }
            Command::Executive { input, output } => {
                pipeline::run_report(ReportKind::Executive, input, output.as_deref(), config)
            }
        }
    }
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some((_, input, Some(output))) = self.command.report_target()
            && same_file(input, output)
        {
            return Err(format!("Output path {} would overwrite the input log", output.display()));
        }

        Ok(())
    }
}

/// Absolute form of `path`; a file that doesn't exist yet resolves through its parent
fn resolve_path(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = path.canonicalize() {
        return Some(resolved);
    }

    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    parent.canonicalize().ok().map(|p| p.join(name))
}

/// Whether two spellings name the same file (`log.txt`, `./log.txt`, `/abs/log.txt`)
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (resolve_path(a), resolve_path(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_requires_input() {
        assert!(CliArgs::try_parse_from(["ci-log-report", "clean"]).is_err());
    }

    #[test]
    fn test_dashboard_default_input() {
        let args = CliArgs::try_parse_from(["ci-log-report", "dashboard"]).unwrap();
        let (kind, input, output) = args.command.report_target().unwrap();
        assert_eq!(kind, ReportKind::Dashboard);
        assert_eq!(input, Path::new(DEFAULT_INPUT));
        assert!(output.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            CliArgs::try_parse_from(["ci-log-report", "executive", "log.txt", "out.md", "--json", "--config", "c.toml"])
                .unwrap();
        assert!(args.json);
        assert_eq!(args.config, Some(PathBuf::from("c.toml")));
        let (_, input, output) = args.command.report_target().unwrap();
        assert_eq!(input, Path::new("log.txt"));
        assert_eq!(output, Some(Path::new("out.md")));
    }

    #[test]
    fn test_validate_rejects_output_equal_to_input() {
        let args = CliArgs::try_parse_from(["ci-log-report", "clean", "log.txt", "log.txt"]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_distinct_paths() {
        let args = CliArgs::try_parse_from(["ci-log-report", "clean", "log.txt", "log.md"]).unwrap();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_other_spellings_of_input() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let input = temp_dir.path().join("log.txt");
        std::fs::write(&input, "Finished: SUCCESS").unwrap();
        let input_str = input.to_str().unwrap();

        let dotted = temp_dir.path().join(".").join("log.txt");
        let args = CliArgs::try_parse_from(["ci-log-report", "clean", input_str, dotted.to_str().unwrap()]).unwrap();
        assert!(args.validate().is_err());

        let via_parent = temp_dir.path().join("sub").join("..").join("log.txt");
        std::fs::create_dir(temp_dir.path().join("sub")).unwrap();
        let args =
            CliArgs::try_parse_from(["ci-log-report", "dashboard", input_str, via_parent.to_str().unwrap()]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_same_file_for_missing_paths() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let plain = temp_dir.path().join("new.md");
        let dotted = temp_dir.path().join(".").join("new.md");
        assert!(same_file(&plain, &dotted));
        assert!(!same_file(&plain, &temp_dir.path().join("other.md")));
    }

    #[test]
    fn test_demo_default_dir() {
        let args = CliArgs::try_parse_from(["ci-log-report", "demo"]).unwrap();
        assert!(matches!(args.command, Command::Demo { ref dir } if dir == Path::new(".")));
        assert!(args.command.report_target().is_none());
    }
}
