use super::TooltipEntry;
use crate::output::{print_json, print_table};
use jobtip_core::TOOLTIPS;

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        let entries: Vec<TooltipEntry> = TOOLTIPS
            .iter()
            .map(|(status, tooltip)| TooltipEntry {
                status: status.to_string(),
                tooltip: Some(*tooltip),
            })
            .collect();
        return print_json(&entries);
    }

    let rows = TOOLTIPS
        .iter()
        .map(|(status, tooltip)| vec![status.to_string(), tooltip.to_string()])
        .collect();
    print_table(&["STATUS", "TOOLTIP"], rows);
    Ok(())
}
