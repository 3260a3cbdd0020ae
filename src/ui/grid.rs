//! Fixed-size character grid
//!
//! Every frame is a `width × height` grid of styled cells. Text is
//! measured in `char`s, so multi-byte glyphs such as `│` and `▶` take
//! one cell each.

use super::theme::Style;

/// One character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        style: Style::Plain,
    };
}

/// A run of text in a single style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One row of output before it is fitted to the grid width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
    /// Style of the padding after the last span
    pub fill: Style,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self {
            spans,
            fill: Style::Plain,
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::new(vec![Span::new(text, style)])
    }

    pub fn blank() -> Self {
        Self::default()
    }

    /// Pads to the full width in `style`
    pub fn filled(mut self, style: Style) -> Self {
        self.fill = style;
        self
    }

    pub fn push(&mut self, text: impl Into<String>, style: Style) {
        self.spans.push(Span::new(text, style));
    }

    /// Unstyled content, without padding
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A rendered frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    /// Builds a grid from lines, clipping or padding each to the width.
    /// Lines past the height are dropped; missing rows stay blank.
    pub fn from_lines(width: usize, height: usize, lines: &[Line]) -> Self {
        let mut grid = Self::new(width, height);
        for (y, line) in lines.iter().take(height).enumerate() {
            grid.put_line(y, line);
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Replaces row `y` with `line`, padding in the line's fill style.
    pub fn put_line(&mut self, y: usize, line: &Line) {
        if y >= self.height {
            return;
        }
        let mut x = 0;
        for span in &line.spans {
            x = self.put_str(y, x, &span.text, span.style);
        }
        let start = x.min(self.width);
        for cell in &mut self.row_mut(y)[start..] {
            *cell = Cell {
                ch: ' ',
                style: line.fill,
            };
        }
    }

    /// Writes `text` at (`x`, `y`), clipped at the right edge.
    /// Returns the column after the last character written.
    pub fn put_str(&mut self, y: usize, x: usize, text: &str, style: Style) -> usize {
        if y >= self.height {
            return x;
        }
        let width = self.width;
        let row = self.row_mut(y);
        let mut col = x;
        for ch in text.chars() {
            if col >= width {
                break;
            }
            row[col] = Cell { ch, style };
            col += 1;
        }
        col
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        &mut self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Characters of row `y`
    pub fn row_text(&self, y: usize) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_exact_dimensions() {
        let lines = vec![Line::styled("abcdefgh", Style::Plain), Line::blank()];
        let grid = Grid::from_lines(5, 3, &lines);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|r| r.len() == 5));
        assert_eq!(grid.row_text(0), "abcde");
        assert_eq!(grid.row_text(2), "     ");
    }

    #[test]
    fn test_multibyte_chars_take_one_cell() {
        let grid = Grid::from_lines(4, 1, &[Line::styled("▶│x", Style::Plain)]);
        assert_eq!(grid.row_text(0), "▶│x ");
    }

    #[test]
    fn test_fill_style_pads_row() {
        let line = Line::styled("ab", Style::Header).filled(Style::Header);
        let grid = Grid::from_lines(4, 1, &[line]);
        assert!(grid.row(0).iter().all(|c| c.style == Style::Header));
    }

    #[test]
    fn test_put_str_clips_and_ignores_bad_rows() {
        let mut grid = Grid::new(3, 1);
        assert_eq!(grid.put_str(0, 1, "xyz", Style::Border), 3);
        assert_eq!(grid.row_text(0), " xy");
        grid.put_str(5, 0, "ignored", Style::Plain);
        assert_eq!(grid.height(), 1);
    }

    #[test]
    fn test_zero_sized_grid() {
        let grid = Grid::from_lines(0, 0, &[Line::styled("x", Style::Plain)]);
        assert_eq!(grid.rows().count(), 0);
    }
}
