//! Emphasis styles and their terminal colors
//!
//! Layout code tags every cell with a [`Style`]; only the painter turns
//! styles into colors, so the grid stays plain data.

use crossterm::style::Color;

// 256-color palette indices
const ACCENT: u8 = 39;
const SELECTED: u8 = 63;
const HIGH_CPU: u8 = 196;
const MUTED: u8 = 241;
const GREEN: u8 = 82;
const WHITE: u8 = 255;
const HEADER_BG: u8 = 235;

/// Visual role of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Plain,
    Header,
    HeaderLabel,
    /// Separators and table rules
    Border,
    ColumnHeader,
    /// Column header of the active sort column
    ColumnHeaderActive,
    Row {
        selected: bool,
        high_cpu: bool,
    },
    /// Selection glyph
    Cursor {
        selected: bool,
    },
    FilterLabel,
    FilterText,
    /// Cell under the filter caret
    Caret,
    FilterHint,
    StatusBar,
    StatusAlert,
    OverlayBorder,
    OverlayTitle,
    OverlayText,
    OverlayHint,
    HelpTitle,
    HelpSection,
    HelpKey,
    HelpDesc,
}

/// Terminal attributes for one style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl Paint {
    const fn fg(index: u8) -> Self {
        Self {
            fg: Some(Color::AnsiValue(index)),
            bg: None,
            bold: false,
        }
    }

    const fn on(mut self, index: u8) -> Self {
        self.bg = Some(Color::AnsiValue(index));
        self
    }

    const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Style {
    /// Colors used when painting this style
    pub fn paint(self) -> Paint {
        match self {
            Style::Plain => Paint {
                fg: None,
                bg: None,
                bold: false,
            },
            Style::Header => Paint::fg(WHITE).on(HEADER_BG).bold(),
            Style::HeaderLabel => Paint::fg(ACCENT).on(HEADER_BG).bold(),
            Style::Border | Style::FilterHint | Style::StatusBar | Style::OverlayHint => {
                Paint::fg(MUTED)
            }
            Style::ColumnHeader => Paint::fg(ACCENT).bold(),
            Style::ColumnHeaderActive => Paint::fg(HEADER_BG).on(ACCENT).bold(),
            Style::Row { selected, high_cpu } => {
                let base = Paint::fg(if high_cpu { HIGH_CPU } else { WHITE });
                if selected {
                    base.on(SELECTED).bold()
                } else {
                    base
                }
            }
            Style::Cursor { selected } => {
                let base = Paint::fg(GREEN).bold();
                if selected {
                    base.on(SELECTED)
                } else {
                    base
                }
            }
            Style::FilterLabel | Style::HelpTitle | Style::HelpSection => Paint::fg(ACCENT).bold(),
            Style::FilterText | Style::OverlayText | Style::HelpDesc => Paint::fg(WHITE),
            Style::Caret => Paint::fg(HEADER_BG).on(WHITE),
            Style::StatusAlert | Style::OverlayBorder => Paint::fg(HIGH_CPU),
            Style::OverlayTitle => Paint::fg(HIGH_CPU).bold(),
            Style::HelpKey => Paint::fg(GREEN).bold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_rows_share_background() {
        let plain = Style::Row {
            selected: true,
            high_cpu: false,
        }
        .paint();
        let hot = Style::Row {
            selected: true,
            high_cpu: true,
        }
        .paint();
        assert_eq!(plain.bg, hot.bg);
        assert_ne!(plain.fg, hot.fg);
    }

    #[test]
    fn test_plain_has_no_colors() {
        let paint = Style::Plain.paint();
        assert!(paint.fg.is_none() && paint.bg.is_none() && !paint.bold);
    }
}
