//! Report assembly and fixed-width text rendering.
//!
//! `build_report` runs every profiling routine over the loaded pair of
//! datasets; `render_report` prints the blocks to any writer so tests can
//! capture the output. The default CLI path writes to stdout.

use crate::compare::compare_column_types;
use crate::error::Result;
use crate::loader::Dataset;
use crate::profiler::{columns_with_nulls, profile_columns, type_distribution};
use crate::types::{DatasetReport, EdaReport, SchemaComparison};
use std::io::{self, Write};

/// Profile both datasets and run the cross-dataset comparators.
pub fn build_report(a: &Dataset, b: &Dataset) -> Result<EdaReport> {
    Ok(EdaReport {
        dataset_a: dataset_report(a)?,
        dataset_b: dataset_report(b)?,
        schema: SchemaComparison::compute(&a.df, &b.df),
        types: compare_column_types(&a.df, &b.df)?,
    })
}

fn dataset_report(dataset: &Dataset) -> Result<DatasetReport> {
    Ok(DatasetReport {
        name: dataset.name.clone(),
        rows: dataset.df.height(),
        columns: dataset.df.width(),
        profiles: profile_columns(&dataset.df)?,
    })
}

/// Print the full report as fixed-width text tables.
pub fn render_report(report: &EdaReport, out: &mut impl Write) -> io::Result<()> {
    render_schema_block(&report.dataset_a, out)?;
    render_schema_block(&report.dataset_b, out)?;
    render_column_comparison(report, out)?;
    render_null_block(&report.dataset_a, out)?;
    render_null_block(&report.dataset_b, out)?;
    render_distinct_block(&report.dataset_a, out)?;
    render_distinct_block(&report.dataset_b, out)?;
    render_type_block(&report.dataset_a, out)?;
    render_type_block(&report.dataset_b, out)?;
    render_type_mismatches(report, out)?;
    Ok(())
}

fn render_schema_block(ds: &DatasetReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n--- {} Schema ---", ds.name)?;
    writeln!(out, "{} rows x {} columns", group_thousands(ds.rows), ds.columns)?;
    for profile in &ds.profiles {
        writeln!(out, "  {}: {}", profile.name, profile.declared_type)?;
    }
    Ok(())
}

fn render_column_comparison(report: &EdaReport, out: &mut impl Write) -> io::Result<()> {
    let schema = &report.schema;

    writeln!(out, "\n--- Column Comparison ---")?;
    writeln!(
        out,
        "{} has {} columns",
        report.dataset_a.name, schema.columns_in_a
    )?;
    writeln!(
        out,
        "{} has {} columns",
        report.dataset_b.name, schema.columns_in_b
    )?;
    writeln!(out, "Common columns: {}", schema.common.len())?;

    if !schema.unique_to_a.is_empty() {
        writeln!(
            out,
            "\nUnique to {} ({} columns):",
            report.dataset_a.name,
            schema.unique_to_a.len()
        )?;
        for column in &schema.unique_to_a {
            writeln!(out, "  - {}", column)?;
        }
    }

    if !schema.unique_to_b.is_empty() {
        writeln!(
            out,
            "\nUnique to {} ({} columns):",
            report.dataset_b.name,
            schema.unique_to_b.len()
        )?;
        for column in &schema.unique_to_b {
            writeln!(out, "  - {}", column)?;
        }
    }

    Ok(())
}

fn render_null_block(ds: &DatasetReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n--- {} Null Analysis ---", ds.name)?;

    let with_nulls = columns_with_nulls(&ds.profiles);
    if with_nulls.is_empty() {
        writeln!(out, "No null values found!")?;
        return Ok(());
    }

    writeln!(
        out,
        "Columns with null values: {}/{}",
        with_nulls.len(),
        ds.profiles.len()
    )?;
    writeln!(
        out,
        "\n{:<30} {:>12} {:>12}",
        "Column", "Null Count", "Percentage"
    )?;
    writeln!(out, "{}", "-".repeat(56))?;
    for profile in with_nulls {
        writeln!(
            out,
            "{:<30} {:>12} {:>11.2}%",
            profile.name,
            group_thousands(profile.null_count),
            profile.null_pct
        )?;
    }
    Ok(())
}

fn render_distinct_block(ds: &DatasetReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n--- {} Distinct Values ---", ds.name)?;
    writeln!(
        out,
        "\n{:<30} {:>18} {:>15}",
        "Column", "Distinct Values", "Uniqueness %"
    )?;
    writeln!(out, "{}", "-".repeat(65))?;
    for profile in &ds.profiles {
        writeln!(
            out,
            "{:<30} {:>18} {:>14.2}%",
            profile.name,
            group_thousands(profile.distinct_count),
            profile.uniqueness_pct
        )?;
    }
    Ok(())
}

fn render_type_block(ds: &DatasetReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n--- {} Data Types ---", ds.name)?;
    writeln!(out, "\n{:<20} {:>10}", "Data Type", "Count")?;
    writeln!(out, "{}", "-".repeat(32))?;
    for (dtype, count) in type_distribution(&ds.profiles) {
        writeln!(out, "{:<20} {:>10}", dtype, count)?;
    }
    Ok(())
}

fn render_type_mismatches(report: &EdaReport, out: &mut impl Write) -> io::Result<()> {
    let types = &report.types;

    writeln!(out, "\n--- Type Comparison ---")?;
    writeln!(
        out,
        "Comparing {} common columns...",
        report.schema.common.len()
    )?;

    if types.mismatches.is_empty() {
        writeln!(out, "\nAll common columns have matching types!")?;
    } else {
        writeln!(out, "\nFound {} type mismatches:", types.mismatches.len())?;
        writeln!(
            out,
            "\n{:<30} {:<20} {:<20}",
            "Column",
            format!("{} Type", report.dataset_a.name),
            format!("{} Type", report.dataset_b.name)
        )?;
        writeln!(out, "{}", "-".repeat(72))?;
        for mismatch in &types.mismatches {
            writeln!(
                out,
                "{:<30} {:<20} {:<20}",
                mismatch.column, mismatch.type_in_a, mismatch.type_in_b
            )?;
        }
    }

    writeln!(out, "\n{} columns have matching types", types.matches.len())?;
    Ok(())
}

/// Format a count with thousands separators, e.g. 1234567 -> "1,234,567".
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
