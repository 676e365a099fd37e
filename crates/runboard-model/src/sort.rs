//! Run ordering.
//!
//! Runs sort by a run attribute, a flag value, or a scalar summary value.
//! Flag and scalar values live outside the run record and are supplied as
//! per-run compare data. Every sort other than plain started-time breaks
//! ties by latest start, so equal-valued runs keep a stable, newest-first
//! order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::filter::RunFilters;
use crate::run::{run_duration_seconds, Run};

/// What to sort the run list by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "name", rename_all = "lowercase")]
pub enum SortKey {
    /// A run attribute: `started`, `status`, `duration`, `operation`, or
    /// `label`.
    Attr(String),
    /// A flag value from the per-run compare data.
    Flag(String),
    /// A scalar's last value from the per-run compare data.
    Scalar(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSort {
    #[serde(flatten)]
    pub key: SortKey,
    #[serde(default)]
    pub desc: bool,
}

impl Default for RunSort {
    /// Newest runs first.
    fn default() -> Self {
        Self {
            key: SortKey::Attr("started".to_owned()),
            desc: true,
        }
    }
}

/// Summary statistics for one logged scalar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunScalar {
    pub avg_val: f64,
    pub count: u64,
    pub first_step: i64,
    pub first_val: f64,
    pub last_step: i64,
    pub last_val: f64,
    pub max_step: i64,
    pub max_val: f64,
    pub min_step: i64,
    pub min_val: f64,
    #[serde(default)]
    pub prefix: String,
    pub total: f64,
}

/// Flag and scalar values for one run, keyed off the run record so sorts
/// over them need no further fetches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunCompareData {
    #[serde(default)]
    pub flags: BTreeMap<String, Value>,
    #[serde(default)]
    pub scalars: BTreeMap<String, RunScalar>,
}

pub type RunsCompare = BTreeMap<String, RunCompareData>;

/// Filter then sort: the full pipeline from raw records to the ordered
/// list the UI shows and the selection engine navigates.
#[must_use]
pub fn ordered_runs(
    runs: &[Run],
    filters: &RunFilters,
    sort: &RunSort,
    data: &RunsCompare,
) -> Vec<Run> {
    sort_runs(&filters.apply(runs), sort, data)
}

#[must_use]
pub fn sort_runs(runs: &[Run], sort: &RunSort, data: &RunsCompare) -> Vec<Run> {
    let mut sorted = runs.to_vec();
    sorted.sort_by(|a, b| compare_runs(a, b, sort, data));
    sorted
}

fn compare_runs(a: &Run, b: &Run, sort: &RunSort, data: &RunsCompare) -> Ordering {
    match &sort.key {
        SortKey::Attr(name) if name == "started" => {
            let latest = cmp_latest(a, b);
            if sort.desc {
                latest
            } else {
                latest.reverse()
            }
        }
        SortKey::Attr(name) => {
            gen_cmp(attr_for_sort(a, name), attr_for_sort(b, name), sort.desc)
                .then_with(|| cmp_latest(a, b))
        }
        SortKey::Flag(name) => gen_cmp(flag_for_sort(a, name, data), flag_for_sort(b, name, data), sort.desc)
            .then_with(|| cmp_latest(a, b)),
        SortKey::Scalar(name) => gen_cmp(
            scalar_for_sort(a, name, data),
            scalar_for_sort(b, name, data),
            sort.desc,
        )
        .then_with(|| cmp_latest(a, b)),
    }
}

/// Latest-started first; runs that never started sort as epoch zero.
fn cmp_latest(a: &Run, b: &Run) -> Ordering {
    b.started.unwrap_or(0).cmp(&a.started.unwrap_or(0))
}

/// A sortable value: numbers and case-folded text. Values of different
/// kinds compare as equal, deferring to the latest-started tie break.
#[derive(Debug, Clone, PartialEq)]
enum SortValue {
    Number(f64),
    Text(String),
}

impl SortValue {
    fn text(value: &str) -> Self {
        Self::Text(value.to_ascii_lowercase())
    }
}

fn attr_for_sort(run: &Run, name: &str) -> Option<SortValue> {
    match name {
        "status" => Some(SortValue::Number(f64::from(run.status.rank()))),
        "duration" => {
            run_duration_seconds(run.started, run.stopped).map(|s| SortValue::Number(s as f64))
        }
        "started" => run.started.map(|t| SortValue::Number(t as f64)),
        "operation" => Some(SortValue::text(&run.operation)),
        "label" => Some(SortValue::text(&run.label)),
        other => {
            // Sort keys come from the column picker, so anything else is a
            // wiring bug in the host.
            debug_assert!(false, "unknown sort attribute: {other}");
            None
        }
    }
}

fn flag_for_sort(run: &Run, name: &str, data: &RunsCompare) -> Option<SortValue> {
    let value = data.get(&run.id)?.flags.get(name)?;
    match value {
        Value::Number(n) => n.as_f64().map(SortValue::Number),
        Value::String(s) => Some(SortValue::text(s)),
        Value::Bool(b) => Some(SortValue::Number(f64::from(u8::from(*b)))),
        _ => None,
    }
}

fn scalar_for_sort(run: &Run, name: &str, data: &RunsCompare) -> Option<SortValue> {
    data.get(&run.id)?
        .scalars
        .get(name)
        .map(|scalar| SortValue::Number(scalar.last_val))
}

/// Missing values sort after present ones regardless of direction; mixed
/// kinds compare equal.
fn gen_cmp(a: Option<SortValue>, b: Option<SortValue>, desc: bool) -> Ordering {
    let ordering = match (a, b) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Greater,
        (Some(_), None) => return Ordering::Less,
        (Some(SortValue::Number(a)), Some(SortValue::Number(b))) => {
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Some(SortValue::Text(a)), Some(SortValue::Text(b))) => a.cmp(&b),
        _ => Ordering::Equal,
    };
    if desc {
        ordering.reverse()
    } else {
        ordering
    }
}
