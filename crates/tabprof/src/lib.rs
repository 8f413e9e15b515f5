//! Tabular Profiling and Comparison Library
//!
//! A one-shot EDA library built on Polars: load two delimited datasets,
//! profile every column, and compare the schemas.
//!
//! # Overview
//!
//! - **Column profiling**: per-column null counts, distinct counts, and
//!   row-relative percentages, computed in a single scan per dataset
//! - **Schema comparison**: set-difference over the two datasets' column
//!   names
//! - **Type comparison**: declared-type mismatch detection over the common
//!   columns
//! - **Reporting**: fixed-width text tables or a serde-serializable report
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tabprof::{build_report, load_dataset, render_report};
//!
//! let a = load_dataset("hotel-booking.csv", "Hotel Booking")?;
//! let b = load_dataset("customer-reservations.csv", "Customer Reservations")?;
//!
//! let report = build_report(&a, &b)?;
//! render_report(&report, &mut std::io::stdout().lock())?;
//! ```
//!
//! Every routine is a pure function of its input datasets: the frames are
//! never mutated, and there is no session or engine state to manage —
//! dropping the `Dataset` values releases everything.

pub mod compare;
pub mod error;
pub mod loader;
pub mod profiler;
pub mod report;
pub mod types;

// Re-exports for convenient access
pub use compare::compare_column_types;
pub use error::{ProfilingError, Result};
pub use loader::{Dataset, load_csv, load_dataset};
pub use profiler::{columns_with_nulls, profile_columns, type_distribution};
pub use report::{build_report, render_report};
pub use types::{
    ColumnProfile, DatasetReport, EdaReport, SchemaComparison, TypeComparison, TypeMismatch,
};
