/// Parser for `projects/Display.md` and the display-order sort.
///
/// Recognized lines:
/// - `Display order - b, a, c`
/// - `Tabs per row - 3`
use std::collections::HashMap;

use tracing::warn;

use crate::model::{DisplaySettings, Project};
use crate::parser::{split_list, value_after};

const ORDER_MARKER: &str = "Display order -";
const TABS_MARKER: &str = "Tabs per row -";

pub fn parse_display(content: &str) -> DisplaySettings {
    let mut order = Vec::new();
    let mut seen_order = false;
    let mut tabs_per_row = None;

    for line in content.lines() {
        if !seen_order {
            if let Some(value) = value_after(line, ORDER_MARKER) {
                order = dedup_keep_first(split_list(value));
                seen_order = true;
                continue;
            }
        }
        if tabs_per_row.is_none() {
            if let Some(value) = value_after(line, TABS_MARKER) {
                tabs_per_row = parse_tabs(value);
            }
        }
    }

    DisplaySettings {
        order,
        tabs_per_row,
    }
}

fn parse_tabs(value: &str) -> Option<u32> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            warn!(value, "ignoring tabs per row that is not a positive integer");
            None
        }
    }
}

fn dedup_keep_first(ids: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

/// Sort projects by their position in `order`.
///
/// Listed ids come first in declaration order; unlisted ids follow in their
/// original enumeration order. An empty `order` leaves the list untouched.
pub fn apply_display_order(projects: &mut [Project], order: &[String]) {
    if order.is_empty() {
        return;
    }
    let position: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(idx, id)| (id.as_str(), idx))
        .collect();

    // sort_by_key is stable, so unlisted projects keep their relative order
    projects.sort_by_key(|p| position.get(p.id.as_str()).copied().unwrap_or(usize::MAX));
}
