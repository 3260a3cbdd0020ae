//! Event loop and background tasks
//!
//! One loop owns the [`ViewState`] and feeds it events in arrival order:
//! timer ticks, terminal input, and results of blocking tasks. Commands
//! returned by the reducer are run by an [`Executor`] on the blocking
//! thread pool, and their results come back through a channel.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use futures::StreamExt;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::app::{AppEvent, Command, ViewState};
use crate::system::{collect_host_stats, Collector, SystemInspector};
use crate::ui::{paint, render_frame, RenderOptions};

/// Runs commands as blocking tasks and tracks which are in flight.
///
/// At most one process collection runs at a time; a tick that arrives
/// while one is running does not start another.
pub struct Executor<I: SystemInspector + 'static> {
    inspector: Arc<I>,
    collector: Arc<Mutex<Collector<Arc<I>>>>,
    events: UnboundedSender<AppEvent>,
    collecting: bool,
    host_pending: bool,
}

impl<I: SystemInspector + 'static> Executor<I> {
    pub fn new(inspector: Arc<I>, events: UnboundedSender<AppEvent>) -> Self {
        let collector = Collector::new(Arc::clone(&inspector));
        Self {
            inspector,
            collector: Arc::new(Mutex::new(collector)),
            events,
            collecting: false,
            host_pending: false,
        }
    }

    /// Clears in-flight flags for results that have arrived.
    pub fn observe(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Snapshot(_) => self.collecting = false,
            AppEvent::HostStats(_) => self.host_pending = false,
            _ => {}
        }
    }

    /// Starts the task for `command`. `Quit` is handled by the loop.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Collect => {
                self.spawn_host_stats();
                self.spawn_collection();
            }
            Command::Terminate { pid, name } => self.spawn_terminate(pid, name),
            Command::Quit => {}
        }
    }

    fn spawn_collection(&mut self) {
        if self.collecting {
            debug!("collection still in flight, skipping");
            return;
        }
        self.collecting = true;
        let collector = Arc::clone(&self.collector);
        let events = self.events.clone();
        tokio::task::spawn_blocking(move || {
            let snapshot = collector
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .collect();
            // The receiver is gone only when the loop has exited
            let _ = events.send(AppEvent::Snapshot(snapshot));
        });
    }

    fn spawn_host_stats(&mut self) {
        if self.host_pending {
            return;
        }
        self.host_pending = true;
        let inspector = Arc::clone(&self.inspector);
        let events = self.events.clone();
        tokio::task::spawn_blocking(move || {
            let stats = collect_host_stats(inspector.as_ref()).map_err(|e| e.to_string());
            let _ = events.send(AppEvent::HostStats(stats));
        });
    }

    fn spawn_terminate(&self, pid: u32, name: String) {
        let inspector = Arc::clone(&self.inspector);
        let events = self.events.clone();
        tokio::task::spawn_blocking(move || {
            let result = inspector.terminate(pid).map_err(|e| e.to_string());
            let _ = events.send(AppEvent::KillResult { pid, name, result });
        });
    }
}

/// Drives the interactive monitor until the user quits.
pub async fn run<I, W>(
    out: &mut W,
    inspector: Arc<I>,
    mut state: ViewState,
    options: RenderOptions,
    color: bool,
    tick: Duration,
) -> Result<()>
where
    I: SystemInspector + 'static,
    W: Write,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut executor = Executor::new(inspector, tx);
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut terminal_events = EventStream::new();

    info!(interval_ms = tick.as_millis() as u64, "event loop started");

    loop {
        paint(out, &render_frame(&state, &options), color).context("drawing frame")?;

        let event = tokio::select! {
            _ = ticker.tick() => AppEvent::Tick,
            Some(event) = rx.recv() => event,
            maybe_event = terminal_events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => AppEvent::Key(key),
                Some(Ok(Event::Resize(width, height))) => {
                    queue!(out, Clear(ClearType::All)).context("clearing screen")?;
                    AppEvent::Resize(width, height)
                }
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(e).context("reading terminal input"),
                None => break,
            },
        };

        executor.observe(&event);
        match state.update(event) {
            Some(Command::Quit) => break,
            Some(command) => executor.execute(command),
            None => {}
        }
    }

    info!("event loop finished");
    Ok(())
}
