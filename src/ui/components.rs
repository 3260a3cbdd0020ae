//! Header, separators, column headers, filter bar, status bar and the
//! kill confirmation box

use crate::app::{Mode, SortColumn, TextInput, ViewState};
use crate::constants::{
    COL_CPU, COL_MEM, COL_PID, COL_SEPARATOR, COL_THREADS, COL_USER, DISPLAY_NAME, STATUS_HELP,
};
use crate::system::ProcessRow;

use super::grid::Line;
use super::theme::Style;
use super::utils::{fit, name_column_width, pad_left, pad_right, truncate_string};

const FILTER_PLACEHOLDER: &str = "type to filter";
const FILTER_EMPTY: &str = "          ";
const FILTER_HINT: &str = "   Esc clear · Enter confirm";

/// Horizontal padding inside the kill box
const OVERLAY_PAD_X: usize = 3;

/// Builds the header: app label, host, uptime, RAM and process counts.
pub fn header_line(state: &ViewState) -> Line {
    let (host, uptime, memory) = match state.host {
        Some(ref stats) => (
            stats.hostname.clone(),
            stats.uptime.clone(),
            stats.format_memory(),
        ),
        None => ("-".to_string(), "-".to_string(), "-".to_string()),
    };
    let details = format!(
        "   host: {}   uptime: {}   RAM: {}   procs: {}/{}",
        host,
        uptime,
        memory,
        state.visible_rows.len(),
        state.all_rows.len()
    );

    let mut line = Line::styled(" ", Style::Header).filled(Style::Header);
    line.push(DISPLAY_NAME, Style::HeaderLabel);
    line.push(details, Style::Header);
    line
}

/// Full-width rule
pub fn separator_line(width: usize) -> Line {
    Line::styled("─".repeat(width), Style::Border)
}

/// Column labels with the sort indicator on the active column
pub fn column_header_line(state: &ViewState) -> Line {
    let name_width = name_column_width(state.terminal_width as usize);
    let mut line = Line::styled(" ", Style::Plain);

    for (i, column) in SortColumn::ALL.into_iter().enumerate() {
        if i > 0 {
            line.push(COL_SEPARATOR, Style::Border);
        }
        let active = column == state.sort_column;
        let indicator = match (active, state.sort_ascending) {
            (false, _) => " ",
            (true, true) => "▲",
            (true, false) => "▼",
        };
        let label = format!("{}{}", column.label(), indicator);
        let width = column_width(column, name_width);
        let cell = if right_aligned(column) {
            pad_left(&label, width)
        } else {
            pad_right(&label, width)
        };
        let style = if active {
            Style::ColumnHeaderActive
        } else {
            Style::ColumnHeader
        };
        line.push(cell, style);
    }
    line
}

fn column_width(column: SortColumn, name_width: usize) -> usize {
    match column {
        SortColumn::Pid => COL_PID,
        SortColumn::Name => name_width,
        SortColumn::Cpu => COL_CPU,
        SortColumn::Memory => COL_MEM,
        SortColumn::Threads => COL_THREADS,
        SortColumn::User => COL_USER,
    }
}

fn right_aligned(column: SortColumn) -> bool {
    !matches!(column, SortColumn::Name | SortColumn::User)
}

/// Filter prompt, editor or active filter, and hint
pub fn filter_bar_line(state: &ViewState) -> Line {
    let mut line = Line::styled("  Filter: ", Style::FilterLabel);
    line.push("[", Style::FilterText);
    match state.mode {
        Mode::Filter(ref input) => push_editor(&mut line, input),
        _ if state.filter_text.is_empty() => line.push(FILTER_EMPTY, Style::FilterText),
        _ => line.push(state.filter_text.clone(), Style::FilterText),
    }
    line.push("]", Style::FilterText);
    line.push(FILTER_HINT, Style::FilterHint);
    line
}

fn push_editor(line: &mut Line, input: &TextInput) {
    if input.is_empty() {
        line.push(" ", Style::Caret);
        line.push(FILTER_PLACEHOLDER, Style::FilterHint);
        return;
    }
    let text: Vec<char> = input.value().chars().collect();
    let caret = input.caret().min(text.len());
    line.push(text[..caret].iter().collect::<String>(), Style::FilterText);
    match text.get(caret) {
        Some(&under) => {
            line.push(under.to_string(), Style::Caret);
            line.push(text[caret + 1..].iter().collect::<String>(), Style::FilterText);
        }
        None => line.push(" ", Style::Caret),
    }
}

/// Status message, then cycle error, then the key summary
pub fn status_bar_line(state: &ViewState) -> Line {
    if let Some(ref message) = state.status_message {
        Line::styled(format!("  {}", message), Style::StatusAlert)
    } else if let Some(error) = state.errors.current() {
        Line::styled(format!("  Error: {}", error), Style::StatusAlert)
    } else {
        Line::styled(format!("  {}", STATUS_HELP), Style::StatusBar)
    }
}

/// Bordered confirmation box for `target`, every line `width` chars wide.
/// The box shrinks to fit `max_width` by truncating its text.
pub fn kill_overlay(target: &ProcessRow, dispatched: bool, max_width: usize) -> Vec<Line> {
    let mut content: Vec<(String, Style)> = vec![
        ("Kill Process?".to_string(), Style::OverlayTitle),
        (String::new(), Style::OverlayText),
        (
            format!("Kill PID {} ({})", target.pid, target.name),
            Style::OverlayText,
        ),
        (format!("owned by: {}", target.user), Style::OverlayText),
    ];
    if cfg!(windows) {
        content.push((
            "(Windows: force-terminate, no SIGTERM)".to_string(),
            Style::OverlayHint,
        ));
    }
    content.push((String::new(), Style::OverlayText));
    let hint = if dispatched {
        "terminating..."
    } else {
        "Press y to confirm, n or Esc to cancel"
    };
    content.push((hint.to_string(), Style::OverlayHint));

    let chrome = 2 * OVERLAY_PAD_X + 2;
    let widest = content
        .iter()
        .map(|(text, _)| text.chars().count())
        .max()
        .unwrap_or(0);
    let inner = widest.min(max_width.saturating_sub(chrome));
    let pad = " ".repeat(OVERLAY_PAD_X);
    let horizontal = "─".repeat(inner + 2 * OVERLAY_PAD_X);

    let boxed = |text: &str, style: Style| {
        let mut line = Line::styled("│", Style::OverlayBorder);
        line.push(pad.clone(), Style::OverlayText);
        line.push(fit(text, inner), style);
        line.push(pad.clone(), Style::OverlayText);
        line.push("│", Style::OverlayBorder);
        line
    };

    let mut lines = vec![Line::styled(format!("╭{}╮", horizontal), Style::OverlayBorder)];
    lines.push(boxed("", Style::OverlayText));
    for (text, style) in &content {
        lines.push(boxed(&truncate_string(text, inner), *style));
    }
    lines.push(boxed("", Style::OverlayText));
    lines.push(Line::styled(format!("╰{}╯", horizontal), Style::OverlayBorder));
    lines
}
