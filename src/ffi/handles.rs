//! Safe RAII wrappers for Windows HANDLEs
//!
//! Each handle is closed when its wrapper goes out of scope, so an early
//! return between opening and using it cannot leak it.

use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Diagnostics::ToolHelp::{CreateToolhelp32Snapshot, TH32CS_SNAPPROCESS};
use windows::Win32::System::Threading::{OpenProcess, PROCESS_ACCESS_RIGHTS};

/// A Windows process HANDLE, closed on drop.
pub struct ProcessHandle(HANDLE);

impl ProcessHandle {
    /// Opens a process by PID with the specified access rights.
    ///
    /// # Errors
    /// Fails when the process cannot be opened (access denied, process
    /// exited, ...).
    pub fn open(pid: u32, access: PROCESS_ACCESS_RIGHTS) -> windows::core::Result<Self> {
        // SAFETY: OpenProcess is safe to call with any parameters; an
        // invalid PID is reported through the Result.
        let handle = unsafe { OpenProcess(access, false, pid)? };
        Ok(Self(handle))
    }

    /// Returns the raw HANDLE for use with Win32 APIs.
    pub fn as_raw(&self) -> HANDLE {
        self.0
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        // SAFETY: We own this handle and close it exactly once.
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// A ToolHelp32 snapshot of the process table, closed on drop.
pub struct SnapshotHandle(HANDLE);

impl SnapshotHandle {
    /// Captures every process currently running.
    pub fn create_process_snapshot() -> windows::core::Result<Self> {
        // SAFETY: TH32CS_SNAPPROCESS ignores the PID argument; failure is
        // reported through the Result.
        let handle = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0)? };
        Ok(Self(handle))
    }

    pub fn as_raw(&self) -> HANDLE {
        self.0
    }
}

impl Drop for SnapshotHandle {
    fn drop(&mut self) {
        // SAFETY: We own this handle and close it exactly once.
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}
