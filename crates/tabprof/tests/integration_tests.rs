//! Integration tests for the EDA report, end to end over CSV fixtures.

use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tabprof::{
    Dataset, SchemaComparison, build_report, columns_with_nulls, compare_column_types, load_csv,
    load_dataset, profile_columns, render_report, type_distribution,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture(filename: &str) -> String {
    fixtures_path().join(filename).to_string_lossy().into_owned()
}

fn load_pair() -> (Dataset, Dataset) {
    let a = load_dataset(&fixture("hotel_bookings.csv"), "Hotel Booking")
        .expect("Failed to load bookings fixture");
    let b = load_dataset(&fixture("reservations.csv"), "Customer Reservations")
        .expect("Failed to load reservations fixture");
    (a, b)
}

// ============================================================================
// Loader Tests
// ============================================================================

#[test]
fn test_loader_infers_schema() {
    let (a, b) = load_pair();

    assert_eq!(a.df.shape(), (4, 4));
    assert_eq!(b.df.shape(), (3, 3));
    assert_eq!(format!("{}", a.df.column("id").unwrap().dtype()), "i64");
    assert_eq!(format!("{}", b.df.column("id").unwrap().dtype()), "str");
}

#[test]
fn test_loader_handles_doubled_quotes() {
    let df = load_csv(&fixture("doubled_quotes.csv")).expect("fallback loading should succeed");
    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 2);
}

// ============================================================================
// Profiling Properties
// ============================================================================

#[test]
fn test_null_counts_sum_to_row_count() {
    let (a, _) = load_pair();
    let rows = a.df.height();

    for profile in profile_columns(&a.df).unwrap() {
        let non_null = a
            .df
            .column(profile.name.as_str())
            .unwrap()
            .as_materialized_series()
            .drop_nulls()
            .len();
        assert_eq!(profile.null_count + non_null, rows);
    }
}

#[test]
fn test_distinct_counts_bounded_by_row_count() {
    let (a, b) = load_pair();

    for dataset in [&a, &b] {
        let rows = dataset.df.height();
        for profile in profile_columns(&dataset.df).unwrap() {
            assert!(profile.distinct_count <= rows);
            if profile.null_count == 0 {
                let fully_unique = profile.distinct_count == rows;
                assert_eq!(profile.uniqueness_pct == 100.0, fully_unique);
            }
        }
    }
}

#[test]
fn test_null_analysis_reports_only_name() {
    let (a, _) = load_pair();
    let profiles = profile_columns(&a.df).unwrap();
    let with_nulls = columns_with_nulls(&profiles);

    assert_eq!(with_nulls.len(), 1);
    assert_eq!(with_nulls[0].name, "name");
    assert_eq!(with_nulls[0].null_count, 1);
    assert!((with_nulls[0].null_pct - 25.0).abs() < 1e-9);
}

#[test]
fn test_type_distribution_of_bookings() {
    let (a, _) = load_pair();
    let profiles = profile_columns(&a.df).unwrap();
    let dist = type_distribution(&profiles);

    // id + nights are i64, name is str, rate is f64
    assert_eq!(dist[0], ("i64".to_string(), 2));
    assert_eq!(dist.len(), 3);
}

// ============================================================================
// Comparator Tests
// ============================================================================

#[test]
fn test_schema_comparison_over_fixtures() {
    let (a, b) = load_pair();
    let cmp = SchemaComparison::compute(&a.df, &b.df);

    assert_eq!(cmp.columns_in_a, 4);
    assert_eq!(cmp.columns_in_b, 3);
    assert_eq!(cmp.common, vec!["id".to_string(), "nights".to_string()]);
    assert_eq!(
        cmp.unique_to_a,
        vec!["name".to_string(), "rate".to_string()]
    );
    assert_eq!(cmp.unique_to_b, vec!["email".to_string()]);
}

#[test]
fn test_type_comparison_over_fixtures() {
    let (a, b) = load_pair();
    let cmp = compare_column_types(&a.df, &b.df).unwrap();

    assert_eq!(cmp.matches, vec!["nights".to_string()]);
    assert_eq!(cmp.mismatches.len(), 1);
    assert_eq!(cmp.mismatches[0].column, "id");
    assert_eq!(cmp.mismatches[0].type_in_a, "i64");
    assert_eq!(cmp.mismatches[0].type_in_b, "str");
}

// ============================================================================
// Full Report Tests
// ============================================================================

#[test]
fn test_full_report_renders_every_block() {
    let (a, b) = load_pair();
    let report = build_report(&a, &b).unwrap();

    let mut buf = Vec::new();
    render_report(&report, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert!(text.contains("--- Hotel Booking Schema ---"));
    assert!(text.contains("--- Column Comparison ---"));
    assert!(text.contains("Common columns: 2"));
    assert!(text.contains("--- Hotel Booking Null Analysis ---"));
    assert!(text.contains("No null values found!")); // reservations side
    assert!(text.contains("--- Customer Reservations Distinct Values ---"));
    assert!(text.contains("--- Hotel Booking Data Types ---"));
    assert!(text.contains("Found 1 type mismatches:"));
    assert!(text.contains("1 columns have matching types"));
}

#[test]
fn test_json_report_serializes() {
    let (a, b) = load_pair();
    let report = build_report(&a, &b).unwrap();

    let json = serde_json::to_string_pretty(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["dataset_a"]["rows"], 4);
    assert_eq!(value["schema"]["common"].as_array().unwrap().len(), 2);
    assert_eq!(value["types"]["mismatches"][0]["column"], "id");
}
