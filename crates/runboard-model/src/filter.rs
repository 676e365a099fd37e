//! Client-side run filtering.
//!
//! Mirrors the filter bar: status and operation multi-selects plus a free
//! text query matched against id, operation, and label. Deleted runs are
//! hidden unless the host is browsing the trash view.

use serde::{Deserialize, Serialize};

use crate::run::{Run, RunStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFilters {
    /// Statuses to keep; empty keeps all.
    pub status: Vec<RunStatus>,
    /// Operation names to keep; empty keeps all.
    pub operation: Vec<String>,
    /// Case-folded substring match over id, operation, and label.
    pub text: Option<String>,
    /// Show deleted runs instead of live ones.
    pub deleted: bool,
}

impl RunFilters {
    /// True when any narrowing filter is set (the `deleted` toggle is a
    /// source switch, not a filter the user clears).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.status.is_empty() || !self.operation.is_empty() || self.text.is_some()
    }

    pub fn clear(&mut self) {
        self.status.clear();
        self.operation.clear();
        self.text = None;
    }

    #[must_use]
    pub fn matches(&self, run: &Run) -> bool {
        if run.deleted != self.deleted {
            return false;
        }
        if !self.status.is_empty() && !self.status.contains(&run.status) {
            return false;
        }
        if !self.operation.is_empty()
            && !self
                .operation
                .iter()
                .any(|op| op.eq_ignore_ascii_case(&run.operation))
        {
            return false;
        }
        if let Some(text) = &self.text {
            let query = text.trim().to_ascii_lowercase();
            if !query.is_empty() {
                let id = run.id.to_ascii_lowercase();
                let operation = run.operation.to_ascii_lowercase();
                let label = run.label.to_ascii_lowercase();
                if !id.contains(&query) && !operation.contains(&query) && !label.contains(&query) {
                    return false;
                }
            }
        }
        true
    }

    #[must_use]
    pub fn apply(&self, runs: &[Run]) -> Vec<Run> {
        runs.iter().filter(|run| self.matches(run)).cloned().collect()
    }
}
