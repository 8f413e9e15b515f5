use serde::{Deserialize, Serialize};

/// Per-column statistics, recomputed from a dataset on each profiling call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    /// Dtype label as inferred by the engine at load time (e.g. "i64", "str").
    pub declared_type: String,
    pub null_count: usize,
    pub null_pct: f64,
    pub distinct_count: usize,
    pub uniqueness_pct: f64,
}

/// Set comparison of two datasets' column names.
///
/// The unique lists are sorted lexicographically; empty sets are valid and
/// simply produce empty difference lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaComparison {
    pub columns_in_a: usize,
    pub columns_in_b: usize,
    pub common: Vec<String>,
    pub unique_to_a: Vec<String>,
    pub unique_to_b: Vec<String>,
}

/// A column present in both datasets with disagreeing declared types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMismatch {
    pub column: String,
    pub type_in_a: String,
    pub type_in_b: String,
}

/// Partition of the common columns into type matches and mismatches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeComparison {
    pub matches: Vec<String>,
    pub mismatches: Vec<TypeMismatch>,
}

/// Everything known about one dataset after profiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetReport {
    pub name: String,
    pub rows: usize,
    pub columns: usize,
    pub profiles: Vec<ColumnProfile>,
}

/// The full EDA report over a pair of datasets.
///
/// This is the JSON output shape of `--json` and the input to the text
/// renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdaReport {
    pub dataset_a: DatasetReport,
    pub dataset_b: DatasetReport,
    pub schema: SchemaComparison,
    pub types: TypeComparison,
}
