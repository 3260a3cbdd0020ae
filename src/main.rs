//! procwatch - an interactive terminal process monitor
//!
//! Samples the process table and host statistics on a timer and shows a
//! sortable, filterable, scrollable table with kill confirmation.
//!
//! Controls:
//! - q / Ctrl+C: Quit
//! - ↑/↓ or k/j: Navigate process list
//! - PgUp/PgDown: Scroll by page
//! - Home/End: Jump to start/end
//! - /: Filter by process name
//! - Tab: Cycle sort column
//! - 1-6: Sort by PID, Name, CPU, Memory, Threads, User
//! - Del / K: Kill selected process (with confirmation)
//! - ?: Help screen

mod app;
mod constants;
mod event_loop;
#[cfg(windows)]
mod ffi;
mod screenshot;
mod system;
mod terminal;
mod ui;

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::{Args, ViewState};
use constants::APP_VERSION;
use system::SysinfoInspector;
use terminal::TerminalGuard;
use ui::RenderOptions;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;
    info!(
        version = APP_VERSION,
        interval_ms = args.interval,
        sort = ?args.sort,
        filter = ?args.filter,
        cpu_threshold = args.cpu_threshold,
        screenshot = args.is_screenshot(),
        "starting"
    );

    let inspector = Arc::new(SysinfoInspector::new());

    if args.is_screenshot() {
        return screenshot::run(&args, inspector).await;
    }

    let (width, height) = crossterm::terminal::size().context("reading terminal size")?;
    let state = ViewState::with_args(&args, width, height);
    let options = RenderOptions {
        cpu_threshold: args.cpu_threshold,
    };

    let guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();
    let result = event_loop::run(
        &mut stdout,
        inspector,
        state,
        options,
        args.color_enabled(),
        Duration::from_millis(args.interval),
    )
    .await;
    drop(guard);

    info!("exiting");
    result
}

/// Sends diagnostics to `log_file`, or discards them. The terminal is
/// owned by the UI, so nothing is logged to stdout or stderr.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!(e))?;
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .try_init();
        }
    }
    Ok(())
}
