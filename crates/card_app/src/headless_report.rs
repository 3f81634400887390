//! Report output model for headless scenario runs.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Component, Path};

/// Report status for a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Why a step failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFailure {
    pub step_index: usize,
    /// Step type, e.g. `assert_text_contains` or `pick_file`
    pub step: String,
    pub code: String,
    pub message: String,
}

/// Machine-readable result of a headless run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlessReport {
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<ReportFailure>,
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    /// Downloads delivered during the run
    #[serde(default)]
    pub exports: Vec<String>,
}

impl HeadlessReport {
    pub fn passed(elapsed_frames: u64, elapsed_ms: u64, exports: Vec<String>) -> Self {
        Self {
            status: ReportStatus::Passed,
            failure: None,
            elapsed_frames,
            elapsed_ms,
            exports,
        }
    }

    pub fn failed(
        failure: ReportFailure,
        elapsed_frames: u64,
        elapsed_ms: u64,
        exports: Vec<String>,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            failure: Some(failure),
            elapsed_frames,
            elapsed_ms,
            exports,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.status == ReportStatus::Passed
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if path.is_absolute() || path.has_root() {
            bail!("report path must be relative and must not start with a separator");
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            bail!("report path cannot contain '..' or drive prefixes");
        }
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        std::fs::write(path, payload)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_escaping_paths() {
        let report = HeadlessReport::passed(0, 0, Vec::new());
        assert!(report.write_to_path(Path::new("/tmp/report.json")).is_err());
        assert!(report.write_to_path(Path::new("../report.json")).is_err());
    }

    #[test]
    fn test_failed_report_json() {
        let report = HeadlessReport::failed(
            ReportFailure {
                step_index: 2,
                step: "assert_exists".to_string(),
                code: "missing_element".to_string(),
                message: "x: element not found".to_string(),
            },
            4,
            64,
            Vec::new(),
        );
        let mut out = Vec::new();
        report.write_to_writer(&mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["failure"]["code"], "missing_element");
        assert_eq!(json["elapsed_ms"], 64);
    }
}
