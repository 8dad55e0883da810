//! Hover text for job status codes.
//!
//! The table is keyed by the raw status string the job system reports.
//! Matching is exact and case-sensitive; anything not in the table has no
//! tooltip, and it is up to the caller to decide what to show instead.

const NO_FAILED_TASKS: &str = "There were no failed tasks.";

/// Every status code that has a tooltip, in display order.
pub static TOOLTIPS: &[(&str, &str)] = &[
    ("successful", NO_FAILED_TASKS),
    ("success", NO_FAILED_TASKS),
    ("failed", "Some tasks encountered errors."),
    ("canceled", "Stopped by user request."),
    ("new", "In queue, waiting on task manager."),
    ("waiting", "SCM Update or Inventory Update is executing."),
    ("pending", "Not in queue, waiting on task manager."),
    ("running", "Playbook tasks executing."),
];

/// Tooltip text for `status`, or `None` when the code is not recognized.
pub fn status_tooltip(status: &str) -> Option<&'static str> {
    TOOLTIPS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, text)| *text)
}

/// Status codes that have a tooltip, in table order.
pub fn known_statuses() -> impl Iterator<Item = &'static str> {
    TOOLTIPS.iter().map(|(status, _)| *status)
}
