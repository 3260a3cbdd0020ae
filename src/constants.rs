//! Centralized constants for the application
//!
//! Layout widths, timing and thresholds used throughout the monitor,
//! kept in one place so the grid math and the event loop agree.

use std::time::Duration;

// ============================================================================
// Application Info
// ============================================================================

/// Application name displayed in header
pub const DISPLAY_NAME: &str = "procwatch";

/// Application version from Cargo.toml
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Refresh Rate
// ============================================================================

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Minimum allowed tick interval
pub const MIN_TICK_MS: u64 = 250;

/// Maximum allowed tick interval
pub const MAX_TICK_MS: u64 = 10000;

/// Pause between the two collection cycles of a screenshot, so the
/// second cycle reports real CPU deltas
pub const SCREENSHOT_WARMUP: Duration = Duration::from_millis(1100);

/// Default screenshot dimensions
pub const SCREENSHOT_WIDTH: u16 = 120;
pub const SCREENSHOT_HEIGHT: u16 = 35;

// ============================================================================
// Table Layout
// ============================================================================

pub const COL_PID: usize = 7;
pub const COL_CPU: usize = 8;
pub const COL_MEM: usize = 10;
pub const COL_THREADS: usize = 8;
pub const COL_USER: usize = 12;

/// Separator drawn between adjacent columns
pub const COL_SEPARATOR: &str = " │ ";

/// Rune width of all separators in a row (5 gaps of 3)
pub const COL_SEPARATORS_WIDTH: usize = 5 * 3;

/// Sum of every fixed-width column plus separators
pub const COL_FIXED: usize =
    COL_PID + COL_CPU + COL_MEM + COL_THREADS + COL_USER + COL_SEPARATORS_WIDTH;

/// Left margin reserved before the table (cursor glyph + slack)
pub const TABLE_MARGIN: usize = 2;

pub const COL_NAME_MIN: usize = 10;
pub const COL_NAME_MAX: usize = 40;

/// Rows of chrome around the body: header, separator, column header,
/// separator, separator, filter bar, separator, status bar
pub const CHROME_ROWS: usize = 8;

/// Marker appended to truncated text
pub const ELLIPSIS: &str = "...";

// ============================================================================
// Thresholds & Limits
// ============================================================================

/// CPU percentage at or above which a row gets high-utilisation emphasis
pub const DEFAULT_HIGH_CPU_THRESHOLD: f64 = 50.0;

/// Maximum length of the filter text
pub const FILTER_CHAR_LIMIT: usize = 64;

/// Owner shown when the OS denies access to the account name
pub const OWNER_UNAVAILABLE: &str = "N/A";

// ============================================================================
// Byte Size Conversions
// ============================================================================

/// Bytes in a megabyte
pub const BYTES_PER_MB: f64 = 1_048_576.0;

/// Bytes in a gigabyte
pub const BYTES_PER_GB: f64 = 1_073_741_824.0;

// ============================================================================
// Help Text
// ============================================================================

/// Key summary shown in the status bar when nothing else is reported
pub const STATUS_HELP: &str =
    "q quit  / filter  Tab sort  Del/K kill  j↓  k↑  1=PID 2=Name 3=CPU 4=Mem 5=Thrd 6=User  ? help";
