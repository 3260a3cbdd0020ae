//! Input/keyboard event handling
//!
//! [`ViewState::update`] is the single writer of the view state: it takes
//! one event, applies it, and optionally returns a command for the event
//! loop to run. Key handling is split per mode:
//! - Normal mode (process list navigation)
//! - Filter mode (filter-as-you-type text input)
//! - Confirm kill mode (Y/N confirmation)
//! - Help mode (keyboard reference)

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::system::{HostStats, ProcessSnapshot};

use super::events::{AppEvent, Command};
use super::state::ViewState;
use super::text_input::TextInput;
use super::{Mode, SortColumn};

impl ViewState {
    /// Applies one event and returns the side effect it requests, if any.
    pub fn update(&mut self, event: AppEvent) -> Option<Command> {
        match event {
            AppEvent::Tick => Some(Command::Collect),
            AppEvent::Snapshot(snapshot) => {
                self.apply_snapshot(snapshot);
                None
            }
            AppEvent::HostStats(result) => {
                self.apply_host_stats(result);
                None
            }
            AppEvent::KillResult { pid, name, result } => {
                self.apply_kill_result(pid, &name, result);
                None
            }
            AppEvent::Resize(width, height) => {
                self.terminal_width = width;
                self.terminal_height = height;
                self.clamp_viewport();
                None
            }
            AppEvent::Key(key) => self.handle_key(key),
        }
    }

    /// Replaces the row set. A failed cycle keeps the previous rows and
    /// records the failure until a later cycle succeeds.
    fn apply_snapshot(&mut self, snapshot: ProcessSnapshot) {
        match snapshot.failure {
            Some(failure) => self.errors.processes = Some(failure),
            None => {
                debug!(rows = snapshot.rows.len(), "snapshot applied");
                self.all_rows = snapshot.rows;
                self.errors.processes = None;
                self.reproject();
            }
        }
    }

    fn apply_host_stats(&mut self, result: Result<HostStats, String>) {
        match result {
            Ok(stats) => {
                self.host = Some(stats);
                self.errors.host = None;
            }
            Err(e) => self.errors.host = Some(e),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        // Only handle key PRESS events, ignore Release and Repeat
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Filter(_) => {
                self.handle_filter_key(key);
                None
            }
            Mode::ConfirmKill { .. } => self.handle_confirm_kill_key(key),
            Mode::Help => {
                self.handle_help_key(key);
                None
            }
        }
    }

    /// Handles key events in normal mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<Command> {
        self.status_message = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Command::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => return Some(Command::Quit),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home => self.jump_to_start(),
            KeyCode::End => self.jump_to_end(),
            KeyCode::Char('/') => {
                self.mode = Mode::Filter(TextInput::with_value(&self.filter_text));
            }
            KeyCode::Esc => {
                if !self.filter_text.is_empty() {
                    self.filter_text.clear();
                    self.reproject();
                }
            }
            KeyCode::Tab => self.cycle_sort(),
            KeyCode::Char(c @ '1'..='6') => {
                if let Some(column) = SortColumn::from_digit(c) {
                    self.select_sort_column(column);
                }
            }
            KeyCode::Delete | KeyCode::Char('K') => self.request_kill(),
            KeyCode::Char('?') => self.mode = Mode::Help,
            _ => {}
        }
        None
    }

    /// Handles key events in filter mode
    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.filter_text.clear();
                self.leave_to_normal();
                self.reproject();
            }
            KeyCode::Enter => {
                if let Mode::Filter(ref input) = self.mode {
                    self.filter_text = input.value();
                }
                self.leave_to_normal();
                self.reproject();
            }
            _ => {
                let edited = match self.mode {
                    Mode::Filter(ref mut input) => input.handle_key(key).then(|| input.value()),
                    _ => None,
                };
                if let Some(text) = edited {
                    self.filter_text = text;
                    self.reproject();
                }
            }
        }
    }

    /// Handles key events in confirm kill mode
    fn handle_confirm_kill_key(&mut self, key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.confirm_kill(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.cancel_kill();
                None
            }
            _ => None,
        }
    }

    /// Handles key events when help is shown
    fn handle_help_key(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
        ) {
            self.leave_to_normal();
        }
    }

    fn leave_to_normal(&mut self) {
        self.mode = Mode::Normal;
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::projection::row;
    use crate::system::ProcessRow;
    use proptest::prelude::*;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ch(c: char) -> AppEvent {
        key(KeyCode::Char(c))
    }

    fn snapshot(rows: Vec<ProcessRow>) -> AppEvent {
        AppEvent::Snapshot(ProcessSnapshot {
            rows,
            failure: None,
        })
    }

    fn visible_pids(state: &ViewState) -> Vec<u32> {
        state.visible_rows.iter().map(|r| r.pid).collect()
    }

    fn state_with(rows: Vec<ProcessRow>) -> ViewState {
        let mut state = ViewState::new(120, 30);
        state.update(snapshot(rows));
        state
    }

    fn two_rows() -> ViewState {
        state_with(vec![row(1, "a", 10.0), row(2, "b", 90.0)])
    }

    #[test]
    fn test_filter_sort_and_clear_scenario() {
        let mut state = two_rows();
        assert_eq!(visible_pids(&state), vec![2, 1]);

        state.update(ch('/'));
        state.update(ch('a'));
        state.update(key(KeyCode::Enter));
        assert_eq!(state.filter_text, "a");
        assert_eq!(visible_pids(&state), vec![1]);

        state.update(ch('2'));
        assert_eq!(state.sort_column, SortColumn::Name);
        assert_eq!(visible_pids(&state), vec![1]);

        state.update(key(KeyCode::Esc));
        assert!(state.filter_text.is_empty());
        // Name ascending is still active
        assert_eq!(visible_pids(&state), vec![1, 2]);
    }

    #[test]
    fn test_filter_applies_while_typing() {
        let mut state = state_with(vec![row(1, "bash", 1.0), row(2, "cargo", 2.0)]);
        state.update(ch('/'));
        state.update(ch('C'));
        assert_eq!(state.filter_text, "C");
        assert_eq!(visible_pids(&state), vec![2]);
        state.update(key(KeyCode::Backspace));
        assert_eq!(visible_pids(&state), vec![2, 1]);
    }

    #[test]
    fn test_filter_escape_clears_and_returns_to_normal() {
        let mut state = two_rows();
        state.update(ch('/'));
        state.update(ch('b'));
        state.update(key(KeyCode::Esc));
        assert!(state.mode.is_normal());
        assert!(state.filter_text.is_empty());
        assert_eq!(visible_pids(&state), vec![2, 1]);
    }

    #[test]
    fn test_filter_prefilled_with_active_text() {
        let mut state = two_rows();
        state.filter_text = "a".into();
        state.update(ch('/'));
        match state.mode {
            Mode::Filter(ref input) => assert_eq!(input.value(), "a"),
            ref other => panic!("expected filter mode, got {:?}", other),
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut state = two_rows();
        assert_eq!(state.update(ch('q')), Some(Command::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(state.update(AppEvent::Key(ctrl_c)), Some(Command::Quit));
    }

    #[test]
    fn test_quit_key_types_into_filter() {
        let mut state = two_rows();
        state.update(ch('/'));
        assert_eq!(state.update(ch('q')), None);
        assert_eq!(state.filter_text, "q");
    }

    #[test]
    fn test_tick_requests_collection_in_any_mode() {
        let mut state = two_rows();
        assert_eq!(state.update(AppEvent::Tick), Some(Command::Collect));
        state.update(ch('?'));
        assert_eq!(state.update(AppEvent::Tick), Some(Command::Collect));
        assert!(state.mode.is_help());
    }

    #[test]
    fn test_movement_clamps() {
        let mut state = two_rows();
        state.update(key(KeyCode::Up));
        assert_eq!(state.cursor, 0);
        state.update(ch('j'));
        state.update(ch('j'));
        assert_eq!(state.cursor, 1);
        state.update(key(KeyCode::Home));
        assert_eq!(state.cursor, 0);
        state.update(key(KeyCode::End));
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_page_keys_move_by_viewport() {
        let rows = (1..=100).map(|pid| row(pid, "p", 0.0)).collect();
        let mut state = state_with(rows);
        let height = state.viewport_height();
        state.update(key(KeyCode::PageDown));
        assert_eq!(state.cursor, height);
        assert_eq!(state.scroll_offset, 1);
        state.update(key(KeyCode::PageUp));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_shrinking_snapshot_reclamps_cursor() {
        let rows = (1..=50).map(|pid| row(pid, "p", 0.0)).collect();
        let mut state = state_with(rows);
        state.update(key(KeyCode::End));
        state.update(snapshot(vec![row(1, "p", 0.0), row(2, "p", 0.0)]));
        assert_eq!(state.cursor, 1);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_resize_reclamps_scroll() {
        let rows = (1..=50).map(|pid| row(pid, "p", 0.0)).collect();
        let mut state = state_with(rows);
        for _ in 0..20 {
            state.update(ch('j'));
        }
        state.update(AppEvent::Resize(80, 12));
        assert_eq!(state.viewport_height(), 4);
        assert!(state.scroll_offset <= state.cursor);
        assert!(state.cursor < state.scroll_offset + 4);
    }

    #[test]
    fn test_kill_confirm_dispatches_once() {
        let mut state = two_rows();
        state.update(ch('j'));
        state.update(key(KeyCode::Delete));
        assert_eq!(state.mode.kill_target().map(|r| r.pid), Some(1));
        let command = state.update(ch('y'));
        assert_eq!(
            command,
            Some(Command::Terminate {
                pid: 1,
                name: "a".into()
            })
        );
        assert_eq!(state.update(key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_kill_failure_reports_and_returns_to_normal() {
        let mut state = two_rows();
        state.update(ch('K'));
        assert_eq!(
            state.update(ch('Y')),
            Some(Command::Terminate {
                pid: 2,
                name: "b".into()
            })
        );
        state.update(AppEvent::KillResult {
            pid: 2,
            name: "b".into(),
            result: Err("Operation not permitted".into()),
        });
        assert!(state.mode.is_normal());
        let message = state.status_message.clone().unwrap();
        assert!(message.contains('2'));
        assert!(message.contains("Operation not permitted"));
    }

    #[test]
    fn test_kill_success_message() {
        let mut state = two_rows();
        state.update(AppEvent::KillResult {
            pid: 2,
            name: "b".into(),
            result: Ok(()),
        });
        assert_eq!(state.status_message.as_deref(), Some("killed PID 2 (b)"));
    }

    #[test]
    fn test_kill_cancel_issues_nothing() {
        let mut state = two_rows();
        state.update(ch('K'));
        assert_eq!(state.update(ch('n')), None);
        assert!(state.mode.is_normal());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_kill_on_empty_list_is_noop() {
        let mut state = ViewState::new(120, 30);
        state.update(key(KeyCode::Delete));
        assert!(state.mode.is_normal());
    }

    #[test]
    fn test_stale_kill_result_still_reported() {
        let mut state = two_rows();
        state.update(ch('K'));
        state.update(ch('y'));
        state.update(key(KeyCode::Esc));
        state.update(ch('?'));
        state.update(AppEvent::KillResult {
            pid: 2,
            name: "b".into(),
            result: Ok(()),
        });
        assert!(state.mode.is_normal());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_kill_result_keeps_newer_dialog_open() {
        let mut state = two_rows();
        state.update(ch('K'));
        state.update(ch('y'));
        state.update(key(KeyCode::Esc));
        state.update(ch('j'));
        state.update(ch('K'));
        state.update(AppEvent::KillResult {
            pid: 2,
            name: "b".into(),
            result: Ok(()),
        });
        assert_eq!(state.mode.kill_target().map(|r| r.pid), Some(1));
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_normal_key_clears_status() {
        let mut state = two_rows();
        state.status_message = Some("killed PID 9 (x)".into());
        state.update(ch('j'));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_help_closes_only_on_its_keys() {
        let mut state = two_rows();
        state.update(ch('?'));
        assert!(state.mode.is_help());
        state.update(ch('j'));
        state.update(key(KeyCode::Enter));
        assert!(state.mode.is_help());
        assert_eq!(state.cursor, 0);
        assert_eq!(state.update(ch('q')), None);
        assert!(state.mode.is_normal());
    }

    #[test]
    fn test_failed_snapshot_keeps_rows() {
        let mut state = two_rows();
        state.update(AppEvent::Snapshot(ProcessSnapshot::failed("denied")));
        assert_eq!(state.visible_rows.len(), 2);
        assert_eq!(state.errors.current(), Some("denied"));
        state.update(snapshot(vec![row(3, "c", 0.0)]));
        assert_eq!(state.errors.current(), None);
        assert_eq!(visible_pids(&state), vec![3]);
    }

    #[test]
    fn test_host_stats_error_keeps_previous() {
        let mut state = ViewState::new(120, 30);
        let stats = HostStats {
            hostname: "box".into(),
            uptime: "5m".into(),
            mem_used_gb: 1.0,
            mem_total_gb: 2.0,
        };
        state.update(AppEvent::HostStats(Ok(stats.clone())));
        state.update(AppEvent::HostStats(Err("no hostname".into())));
        assert_eq!(state.host, Some(stats));
        assert_eq!(state.errors.current(), Some("no hostname"));
    }

    #[test]
    fn test_key_release_ignored() {
        let mut state = two_rows();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(state.update(AppEvent::Key(release)), None);
    }

    fn arb_event() -> impl Strategy<Value = AppEvent> {
        let keys = prop::sample::select(vec![
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::PageUp,
            KeyCode::PageDown,
            KeyCode::Home,
            KeyCode::End,
            KeyCode::Esc,
            KeyCode::Enter,
            KeyCode::Tab,
            KeyCode::Backspace,
            KeyCode::Char('/'),
            KeyCode::Char('e'),
            KeyCode::Char('2'),
            KeyCode::Char('3'),
            KeyCode::Char('K'),
            KeyCode::Char('n'),
            KeyCode::Char('?'),
        ]);
        prop_oneof![
            4 => keys.prop_map(key),
            1 => (0u32..60).prop_map(|n| {
                snapshot(
                    (0..n)
                        .map(|pid| row(pid, if pid % 3 == 0 { "even" } else { "odd" }, f64::from(pid % 7)))
                        .collect(),
                )
            }),
            1 => (1u16..200, 1u16..80).prop_map(|(w, h)| AppEvent::Resize(w, h)),
        ]
    }

    proptest! {
        #[test]
        fn prop_cursor_invariant_after_any_events(events in prop::collection::vec(arb_event(), 1..80)) {
            let mut state = ViewState::new(120, 30);
            for event in events {
                state.update(event);
                let len = state.visible_rows.len();
                let height = state.viewport_height();
                if len == 0 {
                    prop_assert_eq!(state.cursor, 0);
                } else {
                    prop_assert!(state.cursor < len);
                    prop_assert!(state.scroll_offset <= state.cursor);
                    prop_assert!(state.cursor <= state.scroll_offset + height - 1);
                }
            }
        }
    }
}
