pub mod list;
pub mod show;
pub mod statuses;

use serde::Serialize;

/// One status and its tooltip, as emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct TooltipEntry {
    pub status: String,
    pub tooltip: Option<&'static str>,
}
