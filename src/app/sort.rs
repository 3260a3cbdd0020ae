//! Sorting options for the process list

use std::cmp::Ordering;

use clap::ValueEnum;

use crate::system::ProcessRow;

/// Sort column options, in the order Tab cycles through them
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortColumn {
    Pid,
    Name,
    Cpu,
    #[value(alias = "mem")]
    Memory,
    Threads,
    User,
}

impl SortColumn {
    /// All columns in display and cycle order
    pub const ALL: [SortColumn; 6] = [
        SortColumn::Pid,
        SortColumn::Name,
        SortColumn::Cpu,
        SortColumn::Memory,
        SortColumn::Threads,
        SortColumn::User,
    ];

    /// Cycle to the next sort option
    pub fn next(self) -> Self {
        match self {
            SortColumn::Pid => SortColumn::Name,
            SortColumn::Name => SortColumn::Cpu,
            SortColumn::Cpu => SortColumn::Memory,
            SortColumn::Memory => SortColumn::Threads,
            SortColumn::Threads => SortColumn::User,
            SortColumn::User => SortColumn::Pid,
        }
    }

    /// Column selected by digit keys 1-6
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(index as usize).copied()
    }

    /// Direction a column starts in when newly selected: text and PID
    /// ascending, "largest first" metrics descending.
    pub fn default_ascending(self) -> bool {
        matches!(self, SortColumn::Pid | SortColumn::Name | SortColumn::User)
    }

    /// Column header label
    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Pid => "PID",
            SortColumn::Name => "NAME",
            SortColumn::Cpu => "CPU%",
            SortColumn::Memory => "MEM(MB)",
            SortColumn::Threads => "THRD",
            SortColumn::User => "USER",
        }
    }

    /// Ascending comparison of two rows on this column
    pub fn compare(self, a: &ProcessRow, b: &ProcessRow) -> Ordering {
        match self {
            SortColumn::Pid => a.pid.cmp(&b.pid),
            SortColumn::Name => cmp_ignore_case(&a.name, &b.name),
            SortColumn::Cpu => a.cpu_percent.total_cmp(&b.cpu_percent),
            SortColumn::Memory => a.memory_mb.total_cmp(&b.memory_mb),
            SortColumn::Threads => a.thread_count.cmp(&b.thread_count),
            SortColumn::User => cmp_ignore_case(&a.user, &b.user),
        }
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
