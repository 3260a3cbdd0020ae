//! `SystemInspector` backed by the `sysinfo` crate
//!
//! Enumeration refreshes the whole process table; the per-process
//! queries that follow in the same cycle read from that table, so one
//! cycle costs a single scan of the OS.
//!
//! Thread counts come from `Process::tasks()` on Linux and from a
//! ToolHelp32 snapshot taken alongside the refresh on Windows. Other
//! platforms report them as unavailable.

#[cfg(windows)]
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use sysinfo::{Pid, Process, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind, Users};

use super::error::{InspectError, InspectResult};
use super::inspector::{HostInfo, MemoryInfo, SystemInspector};
use super::terminate::terminate_process;

struct NativeState {
    system: System,
    users: Users,
    /// Whether the user list was already reloaded this cycle
    users_reloaded: bool,
    #[cfg(windows)]
    thread_counts: HashMap<u32, u32>,
}

/// Inspector reading the live operating system
pub struct SysinfoInspector {
    state: Mutex<NativeState>,
}

/// CPU handle remembering which process it was opened for
#[derive(Debug)]
pub struct NativeCpuHandle {
    pid: Pid,
    start_time: u64,
    primed: bool,
}

impl SysinfoInspector {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(NativeState {
                system: System::new(),
                users: Users::new_with_refreshed_list(),
                users_reloaded: false,
                #[cfg(windows)]
                thread_counts: HashMap::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, NativeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_process<T>(&self, pid: u32, read: impl FnOnce(&Process) -> T) -> InspectResult<T> {
        let state = self.lock();
        state
            .system
            .process(Pid::from_u32(pid))
            .map(read)
            .ok_or(InspectError::NotFound(pid))
    }
}

impl Default for SysinfoInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemInspector for SysinfoInspector {
    type CpuHandle = NativeCpuHandle;

    fn list_pids(&self) -> InspectResult<Vec<u32>> {
        let mut state = self.lock();
        state.system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing()
                .with_cpu()
                .with_memory()
                .with_user(UpdateKind::OnlyIfNotSet),
        );
        state.users_reloaded = false;
        #[cfg(windows)]
        {
            state.thread_counts = super::threads::thread_counts().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "thread snapshot failed");
                HashMap::new()
            });
        }

        let pids: Vec<u32> = state.system.processes().keys().map(|pid| pid.as_u32()).collect();
        if pids.is_empty() {
            return Err(InspectError::Enumeration("process table is empty".into()));
        }
        Ok(pids)
    }

    fn open_cpu_handle(&self, pid: u32) -> InspectResult<NativeCpuHandle> {
        let start_time = self.with_process(pid, Process::start_time)?;
        Ok(NativeCpuHandle {
            pid: Pid::from_u32(pid),
            start_time,
            primed: false,
        })
    }

    fn process_name(&self, pid: u32) -> InspectResult<String> {
        self.with_process(pid, |p| p.name().to_string_lossy().into_owned())
    }

    fn cpu_delta(&self, handle: &mut NativeCpuHandle) -> InspectResult<f64> {
        let state = self.lock();
        let pid = handle.pid.as_u32();
        let process = state.system.process(handle.pid).ok_or(InspectError::NotFound(pid))?;
        Ok(advance(handle, process.start_time(), process.cpu_usage()))
    }

    fn memory_rss(&self, pid: u32) -> InspectResult<u64> {
        self.with_process(pid, Process::memory)
    }

    #[cfg(windows)]
    fn thread_count(&self, pid: u32) -> InspectResult<u32> {
        let state = self.lock();
        state
            .thread_counts
            .get(&pid)
            .copied()
            .ok_or(InspectError::Unavailable("thread count"))
    }

    #[cfg(not(windows))]
    fn thread_count(&self, pid: u32) -> InspectResult<u32> {
        self.with_process(pid, |p| p.tasks().map(|tasks| tasks.len() as u32))?
            .ok_or(InspectError::Unavailable("thread count"))
    }

    fn process_owner(&self, pid: u32) -> InspectResult<String> {
        let mut state = self.lock();
        let uid = state
            .system
            .process(Pid::from_u32(pid))
            .ok_or(InspectError::NotFound(pid))?
            .user_id()
            .cloned()
            .ok_or(InspectError::Unavailable("owner"))?;

        if state.users.get_user_by_id(&uid).is_none() && !state.users_reloaded {
            // Accounts created since startup
            state.users = Users::new_with_refreshed_list();
            state.users_reloaded = true;
        }
        state
            .users
            .get_user_by_id(&uid)
            .map(|user| user.name().to_string())
            .ok_or(InspectError::Unavailable("owner"))
    }

    fn terminate(&self, pid: u32) -> InspectResult<()> {
        terminate_process(pid)
    }

    fn host_info(&self) -> InspectResult<HostInfo> {
        let hostname = System::host_name().ok_or(InspectError::Unavailable("hostname"))?;
        Ok(HostInfo {
            hostname,
            uptime_seconds: System::uptime(),
        })
    }

    fn memory_info(&self) -> InspectResult<MemoryInfo> {
        let mut state = self.lock();
        state.system.refresh_memory();
        let total_bytes = state.system.total_memory();
        if total_bytes == 0 {
            return Err(InspectError::Unavailable("memory information"));
        }
        Ok(MemoryInfo {
            used_bytes: state.system.used_memory(),
            total_bytes,
        })
    }
}

/// Steps a CPU handle with the process's current start time and usage.
///
/// The first sample after opening reports 0. A changed start time means
/// the PID now belongs to another process: the handle rebases onto it and
/// also reports 0.
fn advance(handle: &mut NativeCpuHandle, start_time: u64, usage: f32) -> f64 {
    if start_time != handle.start_time {
        handle.start_time = start_time;
        handle.primed = true;
        return 0.0;
    }
    if !handle.primed {
        handle.primed = true;
        return 0.0;
    }
    f64::from(usage)
}
