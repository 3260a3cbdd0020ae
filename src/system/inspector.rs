//! The operating-system boundary
//!
//! Everything the monitor learns about the machine passes through the
//! [`SystemInspector`] trait. Each call is fallible on its own; callers
//! decide whether a failure drops a field, a row or a whole cycle.

use super::error::InspectResult;

/// Hostname and uptime as reported by the OS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub hostname: String,
    pub uptime_seconds: u64,
}

/// Physical memory usage in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryInfo {
    pub used_bytes: u64,
    pub total_bytes: u64,
}

/// Query primitives for processes and the host.
///
/// `CpuHandle` is an opaque per-process accounting handle. A handle only
/// yields a meaningful CPU delta from its second query onward; the first
/// query after creation reports zero. Deltas are read without blocking.
pub trait SystemInspector: Send + Sync {
    type CpuHandle: Send;

    /// Lists every live process identifier.
    fn list_pids(&self) -> InspectResult<Vec<u32>>;

    /// Creates a CPU accounting handle for `pid`.
    fn open_cpu_handle(&self, pid: u32) -> InspectResult<Self::CpuHandle>;

    fn process_name(&self, pid: u32) -> InspectResult<String>;

    /// CPU used since the previous query on `handle`, as a percentage of
    /// one core.
    fn cpu_delta(&self, handle: &mut Self::CpuHandle) -> InspectResult<f64>;

    /// Resident set size in bytes.
    fn memory_rss(&self, pid: u32) -> InspectResult<u64>;

    fn thread_count(&self, pid: u32) -> InspectResult<u32>;

    /// Account name owning the process, possibly `DOMAIN\user` qualified.
    fn process_owner(&self, pid: u32) -> InspectResult<String>;

    fn terminate(&self, pid: u32) -> InspectResult<()>;

    fn host_info(&self) -> InspectResult<HostInfo>;

    fn memory_info(&self) -> InspectResult<MemoryInfo>;
}

impl<T: SystemInspector + ?Sized> SystemInspector for std::sync::Arc<T> {
    type CpuHandle = T::CpuHandle;

    fn list_pids(&self) -> InspectResult<Vec<u32>> {
        (**self).list_pids()
    }

    fn open_cpu_handle(&self, pid: u32) -> InspectResult<Self::CpuHandle> {
        (**self).open_cpu_handle(pid)
    }

    fn process_name(&self, pid: u32) -> InspectResult<String> {
        (**self).process_name(pid)
    }

    fn cpu_delta(&self, handle: &mut Self::CpuHandle) -> InspectResult<f64> {
        (**self).cpu_delta(handle)
    }

    fn memory_rss(&self, pid: u32) -> InspectResult<u64> {
        (**self).memory_rss(pid)
    }

    fn thread_count(&self, pid: u32) -> InspectResult<u32> {
        (**self).thread_count(pid)
    }

    fn process_owner(&self, pid: u32) -> InspectResult<String> {
        (**self).process_owner(pid)
    }

    fn terminate(&self, pid: u32) -> InspectResult<()> {
        (**self).terminate(pid)
    }

    fn host_info(&self) -> InspectResult<HostInfo> {
        (**self).host_info()
    }

    fn memory_info(&self) -> InspectResult<MemoryInfo> {
        (**self).memory_info()
    }
}
