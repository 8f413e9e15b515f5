//! Cross-dataset comparators: column-name sets and declared types.
//!
//! Both comparators are pure functions of schema metadata; no row data is
//! touched.

use crate::error::Result;
use crate::types::{SchemaComparison, TypeComparison, TypeMismatch};
use polars::prelude::*;
use std::collections::BTreeSet;

fn column_name_set(df: &DataFrame) -> BTreeSet<String> {
    df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl SchemaComparison {
    /// Set-difference and intersection over two frames' column names.
    ///
    /// All lists come out sorted (BTreeSet iteration order). Empty frames
    /// are valid and produce empty difference lists.
    pub fn compute(a: &DataFrame, b: &DataFrame) -> SchemaComparison {
        let cols_a = column_name_set(a);
        let cols_b = column_name_set(b);

        SchemaComparison {
            columns_in_a: cols_a.len(),
            columns_in_b: cols_b.len(),
            common: cols_a.intersection(&cols_b).cloned().collect(),
            unique_to_a: cols_a.difference(&cols_b).cloned().collect(),
            unique_to_b: cols_b.difference(&cols_a).cloned().collect(),
        }
    }
}

/// Compare declared types of the columns common to both frames.
///
/// Partitions the sorted intersection into matching and mismatching
/// columns; `matches.len() + mismatches.len()` always equals the
/// intersection size.
pub fn compare_column_types(a: &DataFrame, b: &DataFrame) -> Result<TypeComparison> {
    let cols_a = column_name_set(a);
    let cols_b = column_name_set(b);

    let mut matches = Vec::new();
    let mut mismatches = Vec::new();

    for name in cols_a.intersection(&cols_b) {
        let type_in_a = format!("{}", a.column(name.as_str())?.dtype());
        let type_in_b = format!("{}", b.column(name.as_str())?.dtype());

        if type_in_a == type_in_b {
            matches.push(name.clone());
        } else {
            mismatches.push(TypeMismatch {
                column: name.clone(),
                type_in_a,
                type_in_b,
            });
        }
    }

    Ok(TypeComparison {
        matches,
        mismatches,
    })
}
