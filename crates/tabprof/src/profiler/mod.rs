//! Per-dataset column profiling.
//!
//! Null counts and distinct counts for every column are computed in one
//! combined lazy scan per dataset, rather than one pass per column per
//! statistic. Distinct counts follow the engine convention: nulls count as
//! one additional distinct value.

use crate::error::Result;
use crate::types::ColumnProfile;
use polars::prelude::*;

/// Compute a profile for every column of the frame in a single scan.
///
/// Column order is preserved. Percentages are relative to the frame's own
/// row count; a zero-row frame yields 0.0 for both percentages.
pub fn profile_columns(df: &DataFrame) -> Result<Vec<ColumnProfile>> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    if names.is_empty() {
        return Ok(Vec::new());
    }

    let rows = df.height();

    // One aliased null-count and distinct-count expression per column,
    // collected together so the engine makes a single pass.
    let mut exprs = Vec::with_capacity(names.len() * 2);
    for (i, name) in names.iter().enumerate() {
        exprs.push(col(name.as_str()).null_count().alias(format!("null_{i}")));
        exprs.push(col(name.as_str()).n_unique().alias(format!("uniq_{i}")));
    }
    let agg = df.clone().lazy().select(exprs).collect()?;

    let mut profiles = Vec::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        let null_count = scalar_usize(&agg, &format!("null_{i}"))?;
        let distinct_count = scalar_usize(&agg, &format!("uniq_{i}"))?;
        let declared_type = format!("{}", df.column(name.as_str())?.dtype());

        profiles.push(ColumnProfile {
            name: name.clone(),
            declared_type,
            null_count,
            null_pct: percentage(null_count, rows),
            distinct_count,
            uniqueness_pct: percentage(distinct_count, rows),
        });
    }

    Ok(profiles)
}

/// Profiles with at least one null, sorted descending by null count.
///
/// Ties keep column discovery order (the sort is stable).
pub fn columns_with_nulls(profiles: &[ColumnProfile]) -> Vec<&ColumnProfile> {
    let mut with_nulls: Vec<&ColumnProfile> =
        profiles.iter().filter(|p| p.null_count > 0).collect();
    with_nulls.sort_by(|a, b| b.null_count.cmp(&a.null_count));
    with_nulls
}

/// Frequency distribution of declared types, descending by count.
///
/// Ties keep first-seen order (the sort is stable).
pub fn type_distribution(profiles: &[ColumnProfile]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for profile in profiles {
        match counts.iter_mut().find(|(t, _)| *t == profile.declared_type) {
            Some((_, n)) => *n += 1,
            None => counts.push((profile.declared_type.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Count as a percentage of total rows; total function, 0.0 for empty frames.
fn percentage(count: usize, rows: usize) -> f64 {
    if rows == 0 {
        0.0
    } else {
        (count as f64 / rows as f64) * 100.0
    }
}

fn scalar_usize(agg: &DataFrame, alias: &str) -> Result<usize> {
    let value = agg.column(alias)?.get(0)?.try_extract::<u64>()?;
    Ok(value as usize)
}
