//! Interaction mode of the application
//!
//! Modes are mutually exclusive and carry their own payload, so the
//! filter editor only exists while filtering and a kill target only
//! while a kill is being confirmed.

use crate::system::ProcessRow;

use super::text_input::TextInput;

/// The current view/input mode of the application.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Mode {
    /// Process list navigation (default mode)
    #[default]
    Normal,

    /// Typing a process name filter
    Filter(TextInput),

    /// Kill confirmation dialog for a copy of the selected row
    ConfirmKill {
        target: ProcessRow,
        /// A termination request is in flight
        dispatched: bool,
    },

    /// Full-screen keyboard reference
    Help,
}

impl Mode {
    /// Row pending kill confirmation, if any
    pub fn kill_target(&self) -> Option<&ProcessRow> {
        match self {
            Mode::ConfirmKill { target, .. } => Some(target),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn is_normal(&self) -> bool {
        matches!(self, Mode::Normal)
    }

    #[inline]
    pub fn is_help(&self) -> bool {
        matches!(self, Mode::Help)
    }
}
