/// Configuration resolution module
///
/// This module handles:
/// - The sentinel defaults substituted when a pattern finds nothing
/// - Extraction tunables (stage fallback window, coverage target file)
/// - Locating and loading the optional TOML config file
use crate::error::{ReportError, Result};
use log::debug;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV: &str = "CI_LOG_REPORT_CONFIG";

/// Default number of characters a stage region spans when no close marker follows
pub const DEFAULT_STAGE_WINDOW: usize = 1000;

/// Values substituted for fields the log doesn't contain
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub trigger: String,
    pub commit_message: String,
    pub duration: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            trigger: "Unknown".to_string(),
            commit_message: "No commit message".to_string(),
            duration: "Unknown".to_string(),
        }
    }
}

/// Per-invocation settings passed explicitly to extraction and rendering
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub defaults: Defaults,
    /// Characters scanned after a stage open marker that has no close marker
    pub stage_window: usize,
    /// File whose row in the `coverage report` table is reported
    pub coverage_target: String,
    /// Replace invalid UTF-8 instead of failing
    pub lossy_utf8: bool,
    /// Characters of the commit message shown in the dashboard footer
    pub commit_preview_chars: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            stage_window: DEFAULT_STAGE_WINDOW,
            coverage_target: "app.py".to_string(),
            lossy_utf8: false,
            commit_preview_chars: 80,
        }
    }
}

impl ReportConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ReportConfig = toml::from_str(content).map_err(|e| ReportError::Config(e.to_string()))?;
        config.validate().map_err(ReportError::Config)?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);
        let content = fs::read_to_string(path)
            .map_err(|e| ReportError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Validate value ranges
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.stage_window == 0 {
            return Err("stage_window must be greater than zero".to_string());
        }
        if self.coverage_target.trim().is_empty() {
            return Err("coverage_target must not be empty".to_string());
        }
        Ok(())
    }
}

/// Default location of the user config file
/// - Linux: ~/.config/ci-log-report/config.toml
/// - macOS: ~/Library/Application Support/ci-log-report/config.toml
/// - Windows: %APPDATA%/ci-log-report/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ci-log-report").join("config.toml"))
}

/// Resolve the config for this run
///
/// Order: explicit path, then `$CI_LOG_REPORT_CONFIG`, then the user config
/// file if it exists, else built-in defaults. An explicitly named file that
/// can't be read is an error; a missing default file is not.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ReportConfig> {
    if let Some(path) = explicit {
        return ReportConfig::load(path);
    }

    if let Ok(env_path) = env::var(CONFIG_ENV)
        && !env_path.is_empty()
    {
        debug!("Using config from ${}", CONFIG_ENV);
        return ReportConfig::load(Path::new(&env_path));
    }

    match default_config_path() {
        Some(path) if path.exists() => ReportConfig::load(&path),
        _ => {
            debug!("No config file found, using built-in defaults");
            Ok(ReportConfig::default())
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
