//! Writing rendered reports to disk and JSON export of the parsed record.

use crate::error::{ReportError, Result};
use crate::types::ReportData;
use log::debug;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write a rendered report as UTF-8, replacing any existing file.
///
/// There is no temp-file-and-rename step: a failed write can leave a
/// truncated file behind.
pub fn write_report(output_path: &Path, content: &str) -> Result<()> {
    debug!("Writing {} bytes to {:?}", content.len(), output_path);

    let write = || -> std::io::Result<()> {
        let mut file = File::create(output_path)?;
        file.write_all(content.as_bytes())?;
        file.flush()
    };

    write().map_err(|source| ReportError::Write { path: output_path.to_path_buf(), source })
}

/// Pretty JSON of everything extracted from the log
pub fn export_json(data: &ReportData) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}
