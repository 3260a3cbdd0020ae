//! Events flowing into the reducer and commands flowing out of it

use crossterm::event::KeyEvent;

use crate::system::{HostStats, ProcessSnapshot};

/// Everything the reducer reacts to, delivered one at a time
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic timer fired
    Tick,
    /// A process collection cycle finished
    Snapshot(ProcessSnapshot),
    /// Host statistics arrived, or the query failed
    HostStats(Result<HostStats, String>),
    /// A termination request finished
    KillResult {
        pid: u32,
        name: String,
        result: Result<(), String>,
    },
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Side effects requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start host-stats and process collection
    Collect,
    /// Terminate a process
    Terminate { pid: u32, name: String },
    /// Exit the program
    Quit,
}
