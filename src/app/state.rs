//! Application state
//!
//! [`ViewState`] holds everything the screen shows. It is written only by
//! the reducer in `input.rs`; collectors hand it immutable snapshots.

use crate::constants::CHROME_ROWS;
use crate::system::{HostStats, ProcessRow};

use super::cli::Args;
use super::projection::project;
use super::{Mode, SortColumn};

/// Failures of the last collection cycles, shown until a cycle succeeds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleErrors {
    pub processes: Option<String>,
    pub host: Option<String>,
}

impl CycleErrors {
    /// The error to show, process failures first
    pub fn current(&self) -> Option<&str> {
        self.processes.as_deref().or(self.host.as_deref())
    }
}

/// Application state
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Rows of the latest successful snapshot
    pub all_rows: Vec<ProcessRow>,
    /// Filtered and sorted rows
    pub visible_rows: Vec<ProcessRow>,
    /// Latest host statistics, if any arrived
    pub host: Option<HostStats>,
    pub sort_column: SortColumn,
    pub sort_ascending: bool,
    /// Active name filter
    pub filter_text: String,
    pub mode: Mode,
    /// Index into `visible_rows`
    pub cursor: usize,
    /// First visible row of the viewport
    pub scroll_offset: usize,
    /// Ephemeral message, cleared by the next normal-mode key
    pub status_message: Option<String>,
    /// Persistent cycle failures
    pub errors: CycleErrors,
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl ViewState {
    /// Creates the initial state: Normal mode, CPU descending, no filter.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            all_rows: Vec::new(),
            visible_rows: Vec::new(),
            host: None,
            sort_column: SortColumn::Cpu,
            sort_ascending: SortColumn::Cpu.default_ascending(),
            filter_text: String::new(),
            mode: Mode::Normal,
            cursor: 0,
            scroll_offset: 0,
            status_message: None,
            errors: CycleErrors::default(),
            terminal_width: width,
            terminal_height: height,
        }
    }

    /// Creates the initial state configured with command-line arguments.
    pub fn with_args(args: &Args, width: u16, height: u16) -> Self {
        let mut state = Self::new(width, height);
        state.sort_column = args.sort;
        state.sort_ascending = args.sort.default_ascending();
        if let Some(ref filter) = args.filter {
            state.filter_text = filter.clone();
        }
        state
    }

    /// Number of body rows the terminal leaves after the fixed chrome.
    pub fn viewport_height(&self) -> usize {
        (self.terminal_height as usize).saturating_sub(CHROME_ROWS).max(1)
    }

    /// Recomputes the visible rows and re-clamps cursor and scroll.
    pub fn reproject(&mut self) {
        self.visible_rows = project(
            &self.all_rows,
            &self.filter_text,
            self.sort_column,
            self.sort_ascending,
        );
        self.clamp_viewport();
    }

    /// Currently highlighted row
    pub fn selected(&self) -> Option<&ProcessRow> {
        self.visible_rows.get(self.cursor)
    }

    /// Selects a column directly: the active column flips direction,
    /// any other column starts in its default direction.
    pub fn select_sort_column(&mut self, column: SortColumn) {
        if self.sort_column == column {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_column = column;
            self.sort_ascending = column.default_ascending();
        }
        self.reproject();
    }

    /// Advances to the next column in its default direction.
    pub fn cycle_sort(&mut self) {
        self.sort_column = self.sort_column.next();
        self.sort_ascending = self.sort_column.default_ascending();
        self.reproject();
    }
}
