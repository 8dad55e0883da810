//! Typed job status codes.
//!
//! `JobStatus` covers every code the job system reports, including `error`,
//! which has no tooltip. `success` is accepted as an alias of `successful`
//! on input but always renders as `successful`.

use crate::error::JobTipError;
use crate::tooltip::status_tooltip;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    New,
    Pending,
    Waiting,
    Running,
    #[serde(alias = "success")]
    Successful,
    Failed,
    Error,
    Canceled,
}

impl JobStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [JobStatus; 8] = [
        JobStatus::New,
        JobStatus::Pending,
        JobStatus::Waiting,
        JobStatus::Running,
        JobStatus::Successful,
        JobStatus::Failed,
        JobStatus::Error,
        JobStatus::Canceled,
    ];

    /// The canonical lowercase code, as the job system reports it.
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::New => "new",
            JobStatus::Pending => "pending",
            JobStatus::Waiting => "waiting",
            JobStatus::Running => "running",
            JobStatus::Successful => "successful",
            JobStatus::Failed => "failed",
            JobStatus::Error => "error",
            JobStatus::Canceled => "canceled",
        }
    }

    /// The job has stopped and will not change status again.
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            JobStatus::Successful | JobStatus::Failed | JobStatus::Error | JobStatus::Canceled
        )
    }

    /// Handed to the task manager and not yet finished.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            JobStatus::Pending | JobStatus::Waiting | JobStatus::Running
        )
    }

    /// Hover text for this status; `None` for `error`.
    pub fn tooltip(self) -> Option<&'static str> {
        status_tooltip(self.as_str())
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobStatus {
    type Err = JobTipError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "new" => Ok(JobStatus::New),
            "pending" => Ok(JobStatus::Pending),
            "waiting" => Ok(JobStatus::Waiting),
            "running" => Ok(JobStatus::Running),
            "successful" | "success" => Ok(JobStatus::Successful),
            "failed" => Ok(JobStatus::Failed),
            "error" => Ok(JobStatus::Error),
            "canceled" => Ok(JobStatus::Canceled),
            other => Err(JobTipError::UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tooltip::known_statuses;

    #[test]
    fn display_round_trips_through_from_str() {
        for status in JobStatus::ALL {
            assert_eq!(status.to_string().parse::<JobStatus>(), Ok(status));
        }
    }

    #[test]
    fn success_alias() {
        assert_eq!("success".parse::<JobStatus>(), Ok(JobStatus::Successful));
        assert_eq!(JobStatus::Successful.to_string(), "successful");
    }

    #[test]
    fn parse_is_case_sensitive() {
        let err = "Running".parse::<JobStatus>().unwrap_err();
        assert_eq!(err, JobTipError::UnknownStatus("Running".to_string()));
        assert_eq!(err.to_string(), "unknown status 'Running'");
        assert!("".parse::<JobStatus>().is_err());
    }

    #[test]
    fn typed_and_raw_lookup_agree() {
        let inputs = known_statuses()
            .chain(JobStatus::ALL.into_iter().map(JobStatus::as_str))
            .chain(["SUCCESS", "bogus-status", ""]);
        for input in inputs {
            if let Ok(status) = input.parse::<JobStatus>() {
                assert_eq!(status.tooltip(), status_tooltip(input), "input {input}");
            }
        }
    }

    #[test]
    fn every_status_but_error_has_a_tooltip() {
        for status in JobStatus::ALL {
            assert_eq!(status.tooltip().is_none(), status == JobStatus::Error);
        }
        assert_eq!(
            JobStatus::Running.tooltip(),
            Some("Playbook tasks executing.")
        );
    }

    #[test]
    fn finished_and_active_are_disjoint() {
        for status in JobStatus::ALL {
            assert!(!(status.is_finished() && status.is_active()), "{status}");
        }
        assert!(!JobStatus::New.is_finished());
        assert!(!JobStatus::New.is_active());
        assert!(JobStatus::Waiting.is_active());
        assert!(JobStatus::Canceled.is_finished());
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&JobStatus::Canceled).unwrap();
        assert_eq!(json, "\"canceled\"");

        let parsed: JobStatus = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(parsed, JobStatus::Successful);

        assert!(serde_json::from_str::<JobStatus>("\"SUCCESS\"").is_err());
    }
}
