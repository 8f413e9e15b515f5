//! CSV ingestion with fallback strategies.
//!
//! Schema inference, header handling, and quote parsing are delegated
//! entirely to polars; this module only decides which reader configuration
//! to try next when the previous one fails.

use crate::error::{ProfilingError, Result};
use polars::io::csv::read::{CsvParseOptions, CsvReadOptions};
use polars::prelude::*;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Number of leading rows used for dtype inference.
const INFER_SCHEMA_ROWS: usize = 100;

/// A loaded dataset: display label plus the inferred-schema frame.
///
/// Loaded once, never mutated; every profiling routine takes it by
/// reference.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: String,
    pub df: DataFrame,
}

/// Load a CSV file and attach a display label.
pub fn load_dataset(path: &str, name: &str) -> Result<Dataset> {
    let df = load_csv(path)?;
    Ok(Dataset {
        name: name.to_string(),
        df,
    })
}

/// Load a CSV file with multiple fallback strategies.
///
/// Tries, in order: standard loading with quote handling, loading without
/// quote handling, and loading after pre-cleaning doubled quotes and blank
/// lines from the raw content.
pub fn load_csv(path: &str) -> Result<DataFrame> {
    if !Path::new(path).exists() {
        return Err(ProfilingError::FileNotFound(path.to_string()));
    }

    // Strategy 1: standard loading with quote handling
    match read_options()
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("Standard loading failed for {}: {}", path, e);
        }
    }

    // Strategy 2: without quote handling
    match read_options()
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("Loading without quotes failed for {}: {}", path, e);
        }
    }

    // Strategy 3: pre-clean content
    let content = std::fs::read_to_string(path)?;
    let cleaned = clean_csv_content(&content);

    read_options()
        .into_reader_with_file_handle(Cursor::new(cleaned))
        .finish()
        .map_err(|e| ProfilingError::Load {
            path: path.to_string(),
            source: e,
        })
}

fn read_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_has_header(true)
}

/// Strip doubled quotes and blank lines from raw CSV content.
fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_reported() {
        let err = load_csv("does_not_exist.csv").unwrap_err();
        assert!(matches!(err, ProfilingError::FileNotFound(_)));
    }

    #[test]
    fn test_clean_csv_content_strips_doubled_quotes() {
        let raw = "a,b\n\"\"x\"\",1\n\n\"y\",2\n";
        let cleaned = clean_csv_content(raw);
        assert_eq!(cleaned, "a,b\n\"x\",1\n\"y\",2");
    }

    #[test]
    fn test_clean_csv_content_drops_blank_lines() {
        let raw = "a\n\n1\n   \n2";
        assert_eq!(clean_csv_content(raw), "a\n1\n2");
    }
}
