//! Non-interactive rendering of a single frame

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::app::{AppEvent, Args, Mode, ViewState};
use crate::constants::SCREENSHOT_WARMUP;
use crate::system::{collect_host_stats, Collector, SystemInspector};
use crate::ui::{print_frame, render_frame, RenderOptions};

/// Collects twice, so CPU figures are real deltas, then prints one frame
/// of the table (or of the help screen) to stdout.
pub async fn run<I: SystemInspector + 'static>(args: &Args, inspector: Arc<I>) -> Result<()> {
    let mut state = ViewState::with_args(args, args.width, args.height);
    let mut collector = Collector::new(Arc::clone(&inspector));

    eprintln!("Collecting process data (1s)...");
    // First cycle only primes the CPU baselines
    let _ = collector.collect();
    tokio::time::sleep(SCREENSHOT_WARMUP).await;
    let snapshot = collector.collect();

    let host = collect_host_stats(inspector.as_ref()).map_err(|e| e.to_string());
    state.update(AppEvent::HostStats(host));
    state.update(AppEvent::Snapshot(snapshot));
    if args.screenshot_help {
        state.mode = Mode::Help;
    }

    info!(
        width = args.width,
        height = args.height,
        rows = state.visible_rows.len(),
        "rendering screenshot"
    );

    let options = RenderOptions {
        cpu_threshold: args.cpu_threshold,
    };
    let grid = render_frame(&state, &options);
    let mut stdout = io::stdout().lock();
    print_frame(&mut stdout, &grid, args.color_enabled()).context("writing screenshot")?;
    stdout.flush().context("writing screenshot")
}
