//! Run records as delivered by the backend API.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Running,
    Completed,
    Terminated,
    Error,
    Staged,
    Pending,
    #[default]
    Unknown,
}

impl RunStatus {
    /// Rank used when sorting by status; unknown statuses sort last.
    #[must_use]
    pub fn rank(self) -> u32 {
        match self {
            Self::Running => 1,
            Self::Completed => 2,
            Self::Terminated => 3,
            Self::Error => 4,
            Self::Staged => 5,
            Self::Pending => 6,
            Self::Unknown => 999,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Terminated => "terminated",
            Self::Error => "error",
            Self::Staged => "staged",
            Self::Pending => "pending",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown run status: {0}")]
pub struct ParseRunStatusError(String);

impl FromStr for RunStatus {
    type Err = ParseRunStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" => Ok(Self::Running),
            "completed" => Ok(Self::Completed),
            "terminated" => Ok(Self::Terminated),
            "error" => Ok(Self::Error),
            "staged" => Ok(Self::Staged),
            "pending" => Ok(Self::Pending),
            "unknown" => Ok(Self::Unknown),
            other => Err(ParseRunStatusError(other.to_owned())),
        }
    }
}

/// One experiment run. Timestamps are epoch microseconds; `started` is
/// absent for staged runs and `stopped` is absent while a run is live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub id: String,
    pub operation: String,
    pub status: RunStatus,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub started: Option<i64>,
    #[serde(default)]
    pub stopped: Option<i64>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub source_code_digest: Option<String>,
}

impl Run {
    #[must_use]
    pub fn duration_seconds(&self) -> Option<i64> {
        run_duration_seconds(self.started, self.stopped)
    }
}

/// Whole seconds between start and stop; still-running runs are measured
/// against the current time.
#[must_use]
pub fn run_duration_seconds(started: Option<i64>, stopped: Option<i64>) -> Option<i64> {
    let started = started?;
    let stopped = stopped.unwrap_or_else(|| Utc::now().timestamp_micros());
    Some((stopped - started).div_euclid(1_000_000))
}

/// `h:mm:ss` display form, empty for runs that never started.
#[must_use]
pub fn format_run_duration(started: Option<i64>, stopped: Option<i64>) -> String {
    let Some(seconds) = run_duration_seconds(started, stopped) else {
        return String::new();
    };
    let minutes = seconds.div_euclid(60);
    let s = seconds.rem_euclid(60);
    let h = minutes.div_euclid(60);
    let m = minutes.rem_euclid(60);
    format!("{h}:{m:02}:{s:02}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{format_run_duration, run_duration_seconds, Run, RunStatus};

    fn run(id: &str, operation: &str, status: RunStatus, started: Option<i64>) -> Run {
        Run {
            id: id.to_owned(),
            operation: operation.to_owned(),
            status,
            label: String::new(),
            started,
            stopped: started.map(|t| t + 90_000_000),
            deleted: false,
            source_code_digest: None,
        }
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Running".parse::<RunStatus>().unwrap(), RunStatus::Running);
        assert_eq!(" error ".parse::<RunStatus>().unwrap(), RunStatus::Error);
        assert!("finished".parse::<RunStatus>().is_err());
    }

    #[test]
    fn status_ranks_order_running_first_and_unknown_last() {
        assert!(RunStatus::Running.rank() < RunStatus::Completed.rank());
        assert!(RunStatus::Pending.rank() < RunStatus::Unknown.rank());
    }

    #[test]
    fn duration_is_floor_of_microsecond_delta() {
        assert_eq!(run_duration_seconds(Some(0), Some(1_999_999)), Some(1));
        assert_eq!(run_duration_seconds(None, Some(5)), None);
    }

    #[test]
    fn duration_formats_as_h_mm_ss() {
        assert_eq!(format_run_duration(Some(0), Some(3_725_000_000)), "1:02:05");
        assert_eq!(format_run_duration(None, None), "");
    }

    #[test]
    fn run_decodes_from_api_json() {
        let decoded: Run = serde_json::from_str(
            r#"{
                "id": "abc123",
                "operation": "train",
                "status": "completed",
                "label": "baseline",
                "started": 1000,
                "stopped": 91000000,
                "sourceCodeDigest": "deadbeef"
            }"#,
        )
        .unwrap();
        assert_eq!(decoded.status, RunStatus::Completed);
        assert_eq!(decoded.source_code_digest.as_deref(), Some("deadbeef"));
        assert!(!decoded.deleted);
        assert_eq!(decoded.duration_seconds(), Some(90));
    }

    #[test]
    fn fixture_helper_produces_live_duration_for_running_runs() {
        let mut live = run("r1", "train", RunStatus::Running, Some(0));
        live.stopped = None;
        assert!(live.duration_seconds().is_some());
    }
}
