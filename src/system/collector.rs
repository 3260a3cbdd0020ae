//! Snapshot collection
//!
//! Turns one round of inspector queries into a clean [`ProcessSnapshot`].
//! Only a failed enumeration fails the cycle; every per-process failure
//! degrades a field or drops the row.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::cpu::CpuBaselineCache;
use super::inspector::SystemInspector;
use super::processes::{bytes_to_mb, display_owner, sanitize_cpu, ProcessRow, ProcessSnapshot};
use crate::constants::OWNER_UNAVAILABLE;

/// Collects process snapshots and owns the CPU baseline cache.
///
/// The cache is mutated by every cycle, so a `Collector` must not run two
/// cycles at once. The event loop keeps it behind a mutex and never
/// starts a cycle while another is in flight.
pub struct Collector<I: SystemInspector> {
    inspector: I,
    cache: CpuBaselineCache<I::CpuHandle>,
    self_pid: u32,
}

impl<I: SystemInspector> Collector<I> {
    /// Creates a collector that skips the monitor's own process.
    pub fn new(inspector: I) -> Self {
        Self::with_self_pid(inspector, std::process::id())
    }

    pub fn with_self_pid(inspector: I, self_pid: u32) -> Self {
        Self {
            inspector,
            cache: CpuBaselineCache::new(),
            self_pid,
        }
    }

    #[cfg(test)]
    pub(crate) fn inspector(&self) -> &I {
        &self.inspector
    }

    /// Runs one collection cycle.
    pub fn collect(&mut self) -> ProcessSnapshot {
        let pids = match self.inspector.list_pids() {
            Ok(pids) => pids,
            Err(e) => {
                warn!(error = %e, "process enumeration failed");
                return ProcessSnapshot::failed(e.to_string());
            }
        };

        let live: HashSet<u32> = pids.iter().copied().collect();
        let evicted = self.cache.evict_absent(&live);

        let mut rows = Vec::with_capacity(pids.len());
        for pid in pids {
            if pid == self.self_pid {
                continue;
            }
            if let Some(row) = self.collect_row(pid) {
                rows.push(row);
            }
        }

        debug!(
            rows = rows.len(),
            cached = self.cache.len(),
            evicted,
            "collection cycle complete"
        );

        ProcessSnapshot {
            rows,
            failure: None,
        }
    }

    fn collect_row(&mut self, pid: u32) -> Option<ProcessRow> {
        let inspector = &self.inspector;
        let handle = match self.cache.get_or_open(pid, |pid| inspector.open_cpu_handle(pid)) {
            Ok(handle) => handle,
            // Transient or inaccessible process
            Err(_) => return None,
        };

        let name = match inspector.process_name(pid) {
            Ok(name) if !name.is_empty() => name,
            _ => return None,
        };

        let cpu_percent = inspector.cpu_delta(handle).map(sanitize_cpu).unwrap_or(0.0);
        let memory_mb = inspector.memory_rss(pid).map(bytes_to_mb).unwrap_or(0.0);
        let thread_count = inspector.thread_count(pid).unwrap_or(0);
        let user = inspector
            .process_owner(pid)
            .map(|raw| display_owner(&raw))
            .unwrap_or_else(|_| OWNER_UNAVAILABLE.to_string());

        Some(ProcessRow {
            pid,
            name,
            cpu_percent,
            memory_mb,
            thread_count,
            user,
        })
    }

    #[cfg(test)]
    pub(crate) fn cache(&self) -> &CpuBaselineCache<I::CpuHandle> {
        &self.cache
    }
}
