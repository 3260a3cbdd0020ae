//! Visible-row projection
//!
//! Derives the displayed list from all rows: filter by name, then a
//! stable sort. Always recomputed from scratch.

use crate::system::ProcessRow;

use super::SortColumn;

/// Filters `rows` by case-insensitive name substring and sorts the result.
///
/// The sort is stable, so rows with equal keys keep their input order in
/// both directions.
pub fn project(
    rows: &[ProcessRow],
    filter: &str,
    column: SortColumn,
    ascending: bool,
) -> Vec<ProcessRow> {
    let needle = filter.to_lowercase();
    let mut visible: Vec<ProcessRow> = rows
        .iter()
        .filter(|row| needle.is_empty() || row.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    visible.sort_by(|a, b| {
        let cmp = column.compare(a, b);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
    visible
}

#[cfg(test)]
pub(crate) fn row(pid: u32, name: &str, cpu: f64) -> ProcessRow {
    ProcessRow {
        pid,
        name: name.to_string(),
        cpu_percent: cpu,
        memory_mb: 1.0,
        thread_count: 1,
        user: "alice".to_string(),
    }
}
