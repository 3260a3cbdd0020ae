//! Help screen rendering

use crate::app::ViewState;
use crate::constants::DISPLAY_NAME;

use super::components::{header_line, separator_line};
use super::grid::Line;
use super::theme::Style;
use super::utils::pad_right;

const INDENT: &str = "  ";
const KEY_COLUMN: usize = 14;

/// Help content: `("", "")` is a blank line, `(title, "")` a section
const HELP_LINES: &[(&str, &str)] = &[
    ("", ""),
    ("Navigation", ""),
    ("j / ↓", "Move cursor down"),
    ("k / ↑", "Move cursor up"),
    ("PgUp / PgDn", "Move by one page"),
    ("Home / End", "Jump to first/last process"),
    ("q", "Quit"),
    ("Ctrl+C", "Force quit"),
    ("", ""),
    ("Filter", ""),
    ("/", "Enter filter mode, type to search by process name"),
    ("Esc", "Clear filter and return to normal mode"),
    ("Enter", "Confirm filter and return to normal mode"),
    ("", ""),
    ("Sorting", ""),
    ("Tab", "Cycle sort column forward"),
    ("1", "Sort by PID (ascending)"),
    ("2", "Sort by Name (A-Z)"),
    ("3", "Sort by CPU% (default, highest first)"),
    ("4", "Sort by Memory in MB (highest first)"),
    ("5", "Sort by Thread count (highest first)"),
    ("6", "Sort by User (A-Z)"),
    ("", "Pressing the active column's key reverses the order"),
    ("", ""),
    ("Process Actions", ""),
    ("Del / K", "Kill selected process, asks for confirmation"),
    ("y / Enter", "Confirm kill"),
    ("n / Esc", "Cancel kill"),
    ("", ""),
    ("Columns", ""),
    ("PID", "Process ID assigned by the operating system"),
    ("NAME", "Executable name (truncated with ... if longer than column)"),
    ("CPU%", "CPU usage across all cores, can exceed 100% on multi-core"),
    ("", "First sample always shows 0%, real values appear after ~1s"),
    ("MEM(MB)", "Resident set size: physical RAM in use, in megabytes"),
    ("THRD", "Number of OS threads owned by the process"),
    ("USER", "Account that owns the process (N/A if access is denied)"),
];

/// Builds the full help screen, exactly `terminal_height` lines with the
/// closing hint on the last one. Content that does not fit is cut.
pub fn help_screen_lines(state: &ViewState) -> Vec<Line> {
    let width = state.terminal_width as usize;
    let height = state.terminal_height as usize;

    let mut lines = vec![
        header_line(state),
        separator_line(width),
        Line::styled(
            format!("{}{} keyboard reference", INDENT, DISPLAY_NAME),
            Style::HelpTitle,
        ),
    ];
    lines.extend(HELP_LINES.iter().map(|&(key, desc)| help_line(key, desc)));

    let body = height.saturating_sub(2);
    lines.truncate(body);
    lines.resize_with(body, Line::blank);
    lines.push(separator_line(width));
    lines.push(Line::styled(
        format!("{}Press  ?  Esc  or  q  to close help", INDENT),
        Style::StatusBar,
    ));
    lines
}

fn help_line(key: &str, desc: &str) -> Line {
    match (key.is_empty(), desc.is_empty()) {
        (true, true) => Line::blank(),
        (false, true) => Line::styled(format!("{}{}", INDENT, key), Style::HelpSection),
        _ => {
            let mut line = Line::styled(
                format!("{}{}{}", INDENT, INDENT, pad_right(key, KEY_COLUMN)),
                Style::HelpKey,
            );
            line.push(desc, Style::HelpDesc);
            line
        }
    }
}
