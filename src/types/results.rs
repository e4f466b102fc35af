use std::path::PathBuf;

use crate::dataset::{LabeledDataset, LoadError};

/// Result of a load request handled by the dataset worker
#[derive(Debug)]
pub struct LoadResult {
    pub source: String,
    pub outcome: Result<LabeledDataset, LoadError>,
}

impl LoadResult {
    pub fn new(source: String, outcome: Result<LabeledDataset, LoadError>) -> Self {
        Self { source, outcome }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Result of an export operation
#[derive(Debug)]
pub struct ExportResult {
    pub path: PathBuf,
    pub rows_written: usize,
    pub error: Option<String>,
}

impl ExportResult {
    pub fn success(path: PathBuf, rows_written: usize) -> Self {
        Self {
            path,
            rows_written,
            error: None,
        }
    }

    pub fn error(path: PathBuf, error: String) -> Self {
        Self {
            path,
            rows_written: 0,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn message(&self) -> String {
        match &self.error {
            Some(error) => format!("Export failed: {}", error),
            None => format!(
                "Exported {} labeled rows to {}",
                self.rows_written,
                self.path.display()
            ),
        }
    }
}
