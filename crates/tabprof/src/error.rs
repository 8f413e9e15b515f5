//! Error types for dataset loading and profiling.
//!
//! A small `thiserror` hierarchy: loader failures carry the offending path,
//! engine errors are wrapped via `#[from]` conversions.

use thiserror::Error;

/// The main error type for profiling operations.
#[derive(Error, Debug)]
pub enum ProfilingError {
    /// Input file does not exist or could not be opened.
    #[error("Input file not found: {0}")]
    FileNotFound(String),

    /// All loading strategies failed for a file.
    #[error("Failed to load '{path}': {source}")]
    Load {
        path: String,
        #[source]
        source: polars::error::PolarsError,
    },

    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for profiling operations.
pub type Result<T> = std::result::Result<T, ProfilingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = ProfilingError::FileNotFound("missing.csv".to_string());
        assert_eq!(err.to_string(), "Input file not found: missing.csv");
    }

    #[test]
    fn test_load_error_carries_path() {
        let source = polars::error::PolarsError::NoData("empty".into());
        let err = ProfilingError::Load {
            path: "data.csv".to_string(),
            source,
        };
        assert!(err.to_string().contains("data.csv"));
    }
}
