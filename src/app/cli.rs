//! Command-line argument parsing

use std::path::PathBuf;

use clap::Parser;

use crate::constants::{
    DEFAULT_HIGH_CPU_THRESHOLD, DEFAULT_TICK_MS, MAX_TICK_MS, MIN_TICK_MS, SCREENSHOT_HEIGHT,
    SCREENSHOT_WIDTH,
};

use super::SortColumn;

/// Interactive terminal process monitor.
///
/// Keys: q quit, / filter, Tab cycle sort, 1-6 pick sort column,
/// Del or K kill, j/k or arrows move, ? help.
#[derive(Debug, Clone, Parser)]
#[command(name = "procwatch", version, about)]
pub struct Args {
    /// Disable colored output (also honoured: NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Print one rendered frame of the process table and exit
    #[arg(long, conflicts_with = "screenshot_help")]
    pub screenshot: bool,

    /// Print the rendered help screen and exit
    #[arg(long)]
    pub screenshot_help: bool,

    /// Frame width for screenshot modes
    #[arg(short = 'w', long, default_value_t = SCREENSHOT_WIDTH)]
    pub width: u16,

    /// Frame height for screenshot modes
    #[arg(short = 'H', long, default_value_t = SCREENSHOT_HEIGHT)]
    pub height: u16,

    /// Refresh interval in milliseconds
    #[arg(
        long,
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(MIN_TICK_MS..=MAX_TICK_MS)
    )]
    pub interval: u64,

    /// CPU percentage at which rows are highlighted
    #[arg(long, default_value_t = DEFAULT_HIGH_CPU_THRESHOLD)]
    pub cpu_threshold: f64,

    /// Initial sort column
    #[arg(short, long, value_enum, default_value_t = SortColumn::Cpu)]
    pub sort: SortColumn,

    /// Initial filter string to match process names
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Write diagnostics to this file (RUST_LOG sets the level)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Whether output should carry colors.
    pub fn color_enabled(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
    }

    /// True for either non-interactive mode
    pub fn is_screenshot(&self) -> bool {
        self.screenshot || self.screenshot_help
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("procwatch").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.interval, DEFAULT_TICK_MS);
        assert_eq!(args.sort, SortColumn::Cpu);
        assert_eq!((args.width, args.height), (120, 35));
        assert!(args.filter.is_none());
        assert!(!args.is_screenshot());
    }

    #[test]
    fn test_screenshot_flags() {
        let args = parse(&["--screenshot", "-w", "80", "-H", "24"]).unwrap();
        assert!(args.screenshot);
        assert_eq!((args.width, args.height), (80, 24));
        assert!(parse(&["--screenshot", "--screenshot-help"]).is_err());
    }

    #[test]
    fn test_sort_and_filter() {
        let args = parse(&["-s", "mem", "-f", "chrome"]).unwrap();
        assert_eq!(args.sort, SortColumn::Memory);
        assert_eq!(args.filter.as_deref(), Some("chrome"));
    }

    #[test]
    fn test_interval_range() {
        assert!(parse(&["--interval", "100"]).is_err());
        assert!(parse(&["--interval", "20000"]).is_err());
        assert_eq!(parse(&["--interval", "500"]).unwrap().interval, 500);
    }

    #[test]
    fn test_no_color_flag() {
        assert!(!parse(&["--no-color"]).unwrap().color_enabled());
    }
}
