//! Process rows and snapshots
//!
//! A [`ProcessSnapshot`] is the immutable result of one collection
//! cycle. Rows are value data; nothing mutates them after creation.

use crate::constants::{BYTES_PER_MB, OWNER_UNAVAILABLE};

/// One process at one sampling instant
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRow {
    /// Process ID
    pub pid: u32,
    /// Executable name, never empty
    pub name: String,
    /// CPU usage as a percentage of one core (0 to 100 × cores)
    pub cpu_percent: f64,
    /// Resident memory in megabytes
    pub memory_mb: f64,
    /// Number of threads in the process
    pub thread_count: u32,
    /// Owning account name, or `N/A`
    pub user: String,
}

/// Rows produced by one collection cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessSnapshot {
    pub rows: Vec<ProcessRow>,
    /// Set when the whole cycle failed; `rows` is then empty
    pub failure: Option<String>,
}

impl ProcessSnapshot {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

/// Coerces an invalid CPU reading (NaN, infinite, negative) to zero.
#[must_use]
pub fn sanitize_cpu(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

/// Converts a resident set size to megabytes.
#[must_use]
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Normalizes an owner name for display.
///
/// A `DOMAIN\user` qualifier is stripped up to and including the last
/// backslash. The sentinel check runs after stripping, so both an empty
/// name and a bare `DOMAIN\` become the unavailable sentinel.
#[must_use]
pub fn display_owner(raw: &str) -> String {
    let name = match raw.rfind('\\') {
        Some(idx) => &raw[idx + 1..],
        None => raw,
    };
    if name.is_empty() {
        OWNER_UNAVAILABLE.to_string()
    } else {
        name.to_string()
    }
}
