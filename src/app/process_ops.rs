//! Process management operations (kill with confirmation)

use tracing::{info, warn};

use super::events::Command;
use super::state::ViewState;
use super::Mode;

impl ViewState {
    /// Captures the highlighted row and asks for confirmation.
    /// Does nothing when no row is visible.
    pub fn request_kill(&mut self) {
        if let Some(target) = self.selected().cloned() {
            self.mode = Mode::ConfirmKill {
                target,
                dispatched: false,
            };
        }
    }

    /// Issues the termination request for the pending target. The dialog
    /// stays open until the result arrives; repeated confirms are ignored.
    pub fn confirm_kill(&mut self) -> Option<Command> {
        match &mut self.mode {
            Mode::ConfirmKill { target, dispatched } if !*dispatched => {
                *dispatched = true;
                info!(pid = target.pid, name = %target.name, "termination requested");
                Some(Command::Terminate {
                    pid: target.pid,
                    name: target.name.clone(),
                })
            }
            _ => None,
        }
    }

    /// Drops the pending target and returns to Normal.
    pub fn cancel_kill(&mut self) {
        self.mode = Mode::Normal;
        self.status_message = None;
    }

    /// Applies a finished termination request.
    ///
    /// The outcome is always reported and the dialog closed, even when
    /// the user cancelled meanwhile. The one exception is a newer,
    /// not yet confirmed dialog for a different process: it stays open.
    pub fn apply_kill_result(&mut self, pid: u32, name: &str, result: Result<(), String>) {
        let message = match result {
            Ok(()) => {
                info!(pid, name, "process terminated");
                format!("killed PID {} ({})", pid, name)
            }
            Err(e) => {
                warn!(pid, name, error = %e, "termination failed");
                format!("kill PID {} failed: {}", pid, e)
            }
        };

        let retargeted = matches!(self.mode, Mode::ConfirmKill { dispatched: false, .. })
            && self.mode.kill_target().is_some_and(|target| target.pid != pid);
        if !retargeted {
            self.mode = Mode::Normal;
        }
        self.status_message = Some(message);
    }
}
