//! Host statistics for the header line
//!
//! Combines hostname, uptime and physical memory usage into one
//! [`HostStats`] value. Any failing query fails the whole collection so
//! the caller can keep showing the previous stats.

use tracing::warn;

use super::error::InspectResult;
use super::inspector::SystemInspector;
use super::uptime::format_uptime;
use crate::constants::BYTES_PER_GB;

/// Host summary shown in the header
#[derive(Debug, Clone, PartialEq)]
pub struct HostStats {
    pub hostname: String,
    /// Formatted uptime, e.g. "2d 4h 10m"
    pub uptime: String,
    pub mem_used_gb: f64,
    pub mem_total_gb: f64,
}

impl HostStats {
    /// Returns memory usage as "used / total GB".
    pub fn format_memory(&self) -> String {
        format!("{:.1} / {:.1} GB", self.mem_used_gb, self.mem_total_gb)
    }
}

/// Queries hostname, uptime and memory.
pub fn collect_host_stats<I: SystemInspector + ?Sized>(inspector: &I) -> InspectResult<HostStats> {
    let result = query(inspector);
    if let Err(ref e) = result {
        warn!(error = %e, "host statistics unavailable");
    }
    result
}

fn query<I: SystemInspector + ?Sized>(inspector: &I) -> InspectResult<HostStats> {
    let host = inspector.host_info()?;
    let memory = inspector.memory_info()?;
    Ok(HostStats {
        hostname: host.hostname,
        uptime: format_uptime(host.uptime_seconds),
        mem_used_gb: memory.used_bytes as f64 / BYTES_PER_GB,
        mem_total_gb: memory.total_bytes as f64 / BYTES_PER_GB,
    })
}
