//! Process list rendering

use crate::app::ViewState;
use crate::constants::{COL_CPU, COL_MEM, COL_PID, COL_SEPARATOR, COL_THREADS, COL_USER};
use crate::system::ProcessRow;

use super::grid::Line;
use super::theme::Style;
use super::utils::{fit, name_column_width, pad_left};

/// Renders the scrollable window of the process list.
///
/// Always returns exactly `viewport_height()` lines; rows past the end
/// of the list are blank. The selected row is filled to the full width
/// and rows at or above `cpu_threshold` carry high-CPU emphasis.
pub fn body_lines(state: &ViewState, cpu_threshold: f64) -> Vec<Line> {
    let height = state.viewport_height();
    let name_width = name_column_width(state.terminal_width as usize);

    (state.scroll_offset..state.scroll_offset + height)
        .map(|idx| match state.visible_rows.get(idx) {
            Some(row) => row_line(row, idx == state.cursor, cpu_threshold, name_width),
            None => Line::blank(),
        })
        .collect()
}

fn row_line(row: &ProcessRow, selected: bool, cpu_threshold: f64, name_width: usize) -> Line {
    let style = Style::Row {
        selected,
        high_cpu: row.cpu_percent >= cpu_threshold,
    };
    let separator = if selected { style } else { Style::Border };
    let glyph = if selected { "▶" } else { " " };

    let cells = [
        pad_left(&row.pid.to_string(), COL_PID),
        fit(&row.name, name_width),
        pad_left(&format!("{:.2}", row.cpu_percent), COL_CPU),
        pad_left(&format!("{:.1}", row.memory_mb), COL_MEM),
        pad_left(&row.thread_count.to_string(), COL_THREADS),
        fit(&row.user, COL_USER),
    ];

    let mut line = Line::styled(glyph, Style::Cursor { selected });
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            line.push(COL_SEPARATOR, separator);
        }
        line.push(cell, style);
    }
    if selected {
        line.fill = style;
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::projection::row;
    use crate::app::{AppEvent, ViewState};
    use crate::system::ProcessSnapshot;

    fn state_with(count: u32, height: u16) -> ViewState {
        let mut state = ViewState::new(120, height);
        let rows = (1..=count).map(|pid| row(pid, "proc", 0.0)).collect();
        state.update(AppEvent::Snapshot(ProcessSnapshot {
            rows,
            failure: None,
        }));
        state
    }

    #[test]
    fn test_line_count_matches_viewport() {
        for count in [0, 3, 200] {
            let state = state_with(count, 30);
            assert_eq!(body_lines(&state, 50.0).len(), 22);
        }
    }

    #[test]
    fn test_empty_list_renders_blank_rows() {
        let state = state_with(0, 12);
        assert!(body_lines(&state, 50.0).iter().all(|l| l.text().is_empty()));
    }

    #[test]
    fn test_window_follows_scroll_offset() {
        let mut state = state_with(100, 12);
        state.cursor = 50;
        state.clamp_viewport();
        let lines = body_lines(&state, 50.0);
        assert_eq!(lines.len(), 4);
        assert!(lines[3].text().starts_with("▶     51"));
    }

    #[test]
    fn test_row_columns() {
        let mut state = ViewState::new(80, 12);
        let mut r = row(1234, "a-really-long-process-name", 12.5);
        r.memory_mb = 512.06;
        r.thread_count = 17;
        r.user = "administrator-account".into();
        state.all_rows = vec![r];
        state.reproject();

        let text = body_lines(&state, 50.0)[0].text();
        let cells: Vec<&str> = text.split(" │ ").collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], "▶   1234");
        assert_eq!(cells[1], "a-really-long-p...");
        assert_eq!(cells[1].chars().count(), 18);
        assert_eq!(cells[2], "   12.50");
        assert_eq!(cells[3], "     512.1");
        assert_eq!(cells[4], "      17");
        assert_eq!(cells[5], "administr...");
    }

    #[test]
    fn test_emphasis_flags() {
        let mut state = ViewState::new(120, 12);
        state.all_rows = vec![row(1, "hot", 95.0), row(2, "cold", 1.0)];
        state.reproject();

        let lines = body_lines(&state, 50.0);
        assert_eq!(
            lines[0].fill,
            Style::Row {
                selected: true,
                high_cpu: true
            }
        );
        assert!(lines[1].spans.iter().any(|s| s.style
            == Style::Row {
                selected: false,
                high_cpu: false
            }));
        assert_eq!(lines[1].fill, Style::Plain);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut state = ViewState::new(120, 12);
        state.all_rows = vec![row(1, "edge", 50.0)];
        state.reproject();
        let lines = body_lines(&state, 50.0);
        assert!(lines[0].spans.iter().any(|s| matches!(
            s.style,
            Style::Row { high_cpu: true, .. }
        )));
    }
}
