//! Download delivery

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::{ExportError, Result};

/// A finished PNG and the name it should be saved under
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Where finished downloads go
pub trait DownloadSink: Send + Sync {
    /// Deliver a download. Returns where it ended up, for logging.
    fn deliver(&self, download: &Download) -> Result<String>;
}

/// Writes downloads into a directory, creating it if needed
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, download: &Download) -> Result<String> {
        std::fs::create_dir_all(&self.dir).map_err(|source| ExportError::Write {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.dir.join(&download.filename);
        std::fs::write(&path, &download.bytes).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path.display().to_string())
    }
}

/// Keeps downloads in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    downloads: Mutex<Vec<Download>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far, oldest first
    pub fn downloads(&self) -> Vec<Download> {
        self.downloads
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.downloads.lock().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&self, download: &Download) -> Result<String> {
        let mut downloads = self
            .downloads
            .lock()
            .map_err(|_| ExportError::Render("download list poisoned".to_string()))?;
        downloads.push(download.clone());
        Ok(format!("memory:{}", download.filename))
    }
}
