use super::TooltipEntry;
use crate::output::print_json;
use jobtip_core::{status_tooltip, JobStatus};
use tracing::{debug, warn};

pub fn run(
    statuses: &[String],
    fallback: Option<&str>,
    strict: bool,
    json: bool,
) -> anyhow::Result<()> {
    if strict {
        for status in statuses {
            if let Err(e) = status.parse::<JobStatus>() {
                warn!(status = %status, "rejecting unrecognized status");
                return Err(e.into());
            }
        }
    }

    let entries: Vec<TooltipEntry> = statuses
        .iter()
        .map(|status| {
            let tooltip = status_tooltip(status);
            if tooltip.is_none() {
                debug!(status = %status, "no tooltip for status");
            }
            TooltipEntry {
                status: status.clone(),
                tooltip,
            }
        })
        .collect();

    if json {
        return print_json(&entries);
    }

    for entry in &entries {
        println!("{}", entry.tooltip.or(fallback).unwrap_or_default());
    }
    Ok(())
}
