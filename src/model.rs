use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// What the engine does when an entry below the root cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Record a warning, skip the entry and keep walking.
    #[default]
    Warn,
    /// Stop the walk and fail with `ScanError::TraversalFailure`.
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub include_files: bool,
    /// Values `<= 0` keep every recorded file.
    pub top_n: i64,
    pub on_error: ErrorPolicy,
}

impl ScanOptions {
    pub const DEFAULT_TOP_N: i64 = 10;

    /// The number of entries to retain, or `None` when unbounded.
    pub fn retain_limit(&self) -> Option<usize> {
        if self.top_n > 0 { Some(usize::try_from(self.top_n).unwrap_or(usize::MAX)) } else { None }
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { include_files: false, top_n: Self::DEFAULT_TOP_N, on_error: ErrorPolicy::Warn }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub path: PathBuf,
    pub size: u64,
}

impl FileEntry {
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub root: PathBuf,
    #[serde(rename = "total_size")]
    pub total_size_bytes: u64,
    #[serde(rename = "total_files")]
    pub total_file_count: u64,
    #[serde(rename = "total_dirs")]
    pub total_dir_count: u64,
    #[serde(rename = "top_files", skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileEntry>,
    pub generated_at: DateTime<Utc>,
}
