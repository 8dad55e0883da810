use crate::output::{print_json, print_table};
use jobtip_core::JobStatus;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StatusEntry {
    status: JobStatus,
    stage: &'static str,
    tooltip: Option<&'static str>,
}

fn stage(status: JobStatus) -> &'static str {
    if status.is_finished() {
        "finished"
    } else if status.is_active() {
        "active"
    } else {
        "queued"
    }
}

pub fn run(json: bool) -> anyhow::Result<()> {
    let entries: Vec<StatusEntry> = JobStatus::ALL
        .into_iter()
        .map(|status| StatusEntry {
            status,
            stage: stage(status),
            tooltip: status.tooltip(),
        })
        .collect();

    if json {
        return print_json(&entries);
    }

    let rows = entries
        .iter()
        .map(|e| {
            vec![
                e.status.to_string(),
                e.stage.to_string(),
                e.tooltip.unwrap_or_default().to_string(),
            ]
        })
        .collect();
    print_table(&["STATUS", "STAGE", "TOOLTIP"], rows);
    Ok(())
}
