/// Failures while reading and validating an input CSV.
/// Nothing is labeled when any of these occur.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
    #[error("Invalid number {value:?} in column '{column}' at row {row}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
    #[error("Error parsing timestamps. Check your timestamp format. ({} rows failed, first at row {})", .rows.len(), .rows.first().copied().unwrap_or_default())]
    InvalidTimestamps { rows: Vec<usize> },
}

/// Failures while writing the labeled CSV
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
