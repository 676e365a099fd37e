//! Run records and the ordered run list feeding the selection engine.
//!
//! This crate owns the "item source" side of the dashboard: run records as
//! they arrive from the backend, client-side filtering and sorting into the
//! ordered list the UI shows, and the reconciliation glue that keeps the
//! selection engine consistent when that list changes.

mod filter;
mod run;
mod sort;
mod sync;

pub use filter::RunFilters;
pub use run::{
    format_run_duration, run_duration_seconds, ParseRunStatusError, Run, RunStatus,
};
pub use sort::{ordered_runs, sort_runs, RunCompareData, RunScalar, RunSort, RunsCompare, SortKey};
pub use sync::{current_run, selected_runs, sync_available, sync_filtered_selection};
