//! Frame assembly and terminal painting
//!
//! [`render_frame`] turns the view state into a [`Grid`]; [`paint`] and
//! [`print_frame`] write a grid to a terminal or to plain output.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};

use crate::app::{Mode, ViewState};
use crate::constants::DEFAULT_HIGH_CPU_THRESHOLD;

use super::components::{
    column_header_line, filter_bar_line, header_line, kill_overlay, separator_line,
    status_bar_line,
};
use super::grid::{Cell, Grid, Line};
use super::help::help_screen_lines;
use super::process_list::body_lines;
use super::theme::Style;

/// Settings that affect layout but are not part of the view state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// CPU percentage at which rows get high-CPU emphasis
    pub cpu_threshold: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cpu_threshold: DEFAULT_HIGH_CPU_THRESHOLD,
        }
    }
}

/// Lays out one frame of exactly `terminal_width × terminal_height` cells.
///
/// Rows top to bottom: header, rule, column header, rule, body window,
/// rule, filter bar, rule, status bar. In Help mode the help screen
/// replaces everything; in kill confirmation the box is drawn centered
/// over the normal layout.
pub fn render_frame(state: &ViewState, options: &RenderOptions) -> Grid {
    let width = state.terminal_width as usize;
    let height = state.terminal_height as usize;

    if state.mode.is_help() {
        return Grid::from_lines(width, height, &help_screen_lines(state));
    }

    let mut lines: Vec<Line> = Vec::with_capacity(height);
    lines.push(header_line(state));
    lines.push(separator_line(width));
    lines.push(column_header_line(state));
    lines.push(separator_line(width));
    lines.extend(body_lines(state, options.cpu_threshold));
    lines.push(separator_line(width));
    lines.push(filter_bar_line(state));
    lines.push(separator_line(width));
    lines.push(status_bar_line(state));

    let mut grid = Grid::from_lines(width, height, &lines);
    if let Mode::ConfirmKill {
        ref target,
        dispatched,
    } = state.mode
    {
        splice_centered(&mut grid, &kill_overlay(target, dispatched, width));
    }
    grid
}

/// Draws `overlay` centered on `grid`, leaving the cells around it alone.
fn splice_centered(grid: &mut Grid, overlay: &[Line]) {
    let box_width = overlay
        .iter()
        .map(|l| l.text().chars().count())
        .max()
        .unwrap_or(0);
    let top = grid.height().saturating_sub(overlay.len()) / 2;
    let left = grid.width().saturating_sub(box_width) / 2;

    for (i, line) in overlay.iter().enumerate() {
        let mut x = left;
        for span in &line.spans {
            x = grid.put_str(top + i, x, &span.text, span.style);
        }
    }
}

/// Paints a grid over the whole terminal, one row per screen line.
pub fn paint<W: Write>(out: &mut W, grid: &Grid, color: bool) -> io::Result<()> {
    for (y, row) in grid.rows().enumerate() {
        queue!(out, MoveTo(0, y as u16))?;
        write_row(out, row, color)?;
    }
    out.flush()
}

/// Writes a grid as newline-separated lines, for non-interactive output.
pub fn print_frame<W: Write>(out: &mut W, grid: &Grid, color: bool) -> io::Result<()> {
    for row in grid.rows() {
        write_row(out, row, color)?;
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

/// Writes one row, switching colors only where the style changes.
fn write_row<W: Write>(out: &mut W, row: &[Cell], color: bool) -> io::Result<()> {
    if !color {
        let text: String = row.iter().map(|c| c.ch).collect();
        return queue!(out, Print(text));
    }

    let mut run = String::new();
    let mut current: Option<Style> = None;
    for cell in row {
        if current != Some(cell.style) {
            if let Some(style) = current {
                write_run(out, style, &run)?;
            }
            run.clear();
            current = Some(cell.style);
        }
        run.push(cell.ch);
    }
    if let Some(style) = current {
        write_run(out, style, &run)?;
    }
    Ok(())
}

fn write_run<W: Write>(out: &mut W, style: Style, text: &str) -> io::Result<()> {
    let paint = style.paint();
    if let Some(fg) = paint.fg {
        queue!(out, SetForegroundColor(fg))?;
    }
    if let Some(bg) = paint.bg {
        queue!(out, SetBackgroundColor(bg))?;
    }
    if paint.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::projection::row;
    use crate::app::{AppEvent, TextInput};
    use crate::system::ProcessSnapshot;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn state(width: u16, height: u16, count: u32) -> ViewState {
        let mut state = ViewState::new(width, height);
        let rows = (1..=count)
            .map(|pid| row(pid, "worker", f64::from(pid)))
            .collect();
        state.update(AppEvent::Snapshot(ProcessSnapshot {
            rows,
            failure: None,
        }));
        state
    }

    fn texts(grid: &Grid) -> Vec<String> {
        (0..grid.height()).map(|y| grid.row_text(y)).collect()
    }

    #[test]
    fn test_frame_dimensions_across_sizes() {
        for (w, h) in [(120, 35), (80, 24), (40, 9), (20, 4), (200, 60)] {
            let grid = render_frame(&state(w, h, 50), &RenderOptions::default());
            assert_eq!(grid.height(), h as usize);
            assert!(grid.rows().all(|r| r.len() == w as usize));
        }
    }

    #[test]
    fn test_row_order() {
        let grid = render_frame(&state(120, 12, 3), &RenderOptions::default());
        let rows = texts(&grid);
        assert!(rows[0].starts_with(" procwatch"));
        assert!(rows[1].chars().all(|c| c == '─'));
        assert!(rows[2].contains("CPU%▼"));
        assert!(rows[4].starts_with("▶      3"));
        assert!(rows[6].starts_with("       1"));
        assert!(rows[7].trim().is_empty());
        assert!(rows[8].chars().all(|c| c == '─'));
        assert!(rows[9].starts_with("  Filter: ["));
        assert!(rows[11].contains("? help"));
    }

    #[test]
    fn test_help_mode_replaces_table() {
        let mut s = state(120, 35, 3);
        s.update(AppEvent::Key(KeyEvent::new(
            KeyCode::Char('?'),
            KeyModifiers::NONE,
        )));
        let rows = texts(&render_frame(&s, &RenderOptions::default()));
        assert!(rows[2].contains("keyboard reference"));
        assert!(rows[34].contains("close help"));
    }

    #[test]
    fn test_overlay_is_centered_over_layout() {
        let mut s = state(120, 35, 3);
        s.request_kill();
        let grid = render_frame(&s, &RenderOptions::default());
        let rows = texts(&grid);

        let top = rows.iter().position(|r| r.contains('╭')).unwrap();
        let bottom = rows.iter().position(|r| r.contains('╰')).unwrap();
        let box_height = bottom - top + 1;
        assert_eq!(top, (35 - box_height) / 2);

        let left = rows[top].chars().position(|c| c == '╭').unwrap();
        let right = rows[top].chars().position(|c| c == '╮').unwrap();
        assert_eq!(left, (120 - (right - left + 1)) / 2);

        assert!(rows.iter().any(|r| r.contains("Kill PID 3 (worker)")));
        // base layout untouched around the box
        assert!(rows[0].starts_with(" procwatch"));
        assert!(rows[34].contains("? help"));
    }

    #[test]
    fn test_filter_editor_visible_in_frame() {
        let mut s = state(120, 20, 3);
        s.mode = Mode::Filter(TextInput::with_value("wor"));
        let rows = texts(&render_frame(&s, &RenderOptions::default()));
        assert!(rows[17].contains("[wor ]"));
    }

    #[test]
    fn test_threshold_option_changes_emphasis() {
        let s = state(120, 12, 3);
        let hot = |grid: &Grid| {
            grid.row(5)
                .iter()
                .any(|c| matches!(c.style, Style::Row { high_cpu: true, .. }))
        };
        assert!(!hot(&render_frame(&s, &RenderOptions::default())));
        assert!(hot(&render_frame(&s, &RenderOptions { cpu_threshold: 2.0 })));
    }

    #[test]
    fn test_print_frame_plain() {
        let grid = Grid::from_lines(3, 2, &[Line::styled("ab", Style::Header)]);
        let mut out = Vec::new();
        print_frame(&mut out, &grid, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ab \n   \n");
    }

    #[test]
    fn test_print_frame_colored_emits_escapes() {
        let grid = Grid::from_lines(3, 1, &[Line::styled("ab", Style::Header)]);
        let mut out = Vec::new();
        print_frame(&mut out, &grid, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("ab"));
    }
}
