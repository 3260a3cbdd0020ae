//! Custom error types for type-safe error handling
//!
//! Every call across the `SystemInspector` boundary reports failures
//! through [`InspectError`], so the collector can tell a row-level
//! failure (degrade the field) from a cycle-level one (fail the cycle).

use std::io;

use thiserror::Error;

/// Errors that can occur while querying the operating system.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The process table itself could not be read
    #[error("failed to enumerate processes: {0}")]
    Enumeration(String),

    /// Process does not exist or has already terminated
    #[error("process {0} not found or has terminated")]
    NotFound(u32),

    /// A value the OS did not report for this process or host
    #[error("{0} is unavailable")]
    Unavailable(&'static str),

    /// Operation has no implementation on this platform
    #[cfg(not(any(unix, windows)))]
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),

    /// An OS call failed with an error code
    #[error("{0}")]
    Os(#[from] io::Error),
}

/// Result type for inspector calls
pub type InspectResult<T> = Result<T, InspectError>;
