//! Per-process thread counts from the ToolHelp32 process snapshot
//!
//! `sysinfo` only reports a process's threads on Linux; on Windows the
//! snapshot entry carries `cntThreads` directly.

use std::collections::HashMap;
use std::mem;

use windows::Win32::System::Diagnostics::ToolHelp::{Process32FirstW, Process32NextW, PROCESSENTRY32W};

use crate::ffi::SnapshotHandle;

/// Maps each running PID to its thread count.
pub fn thread_counts() -> windows::core::Result<HashMap<u32, u32>> {
    let snapshot = SnapshotHandle::create_process_snapshot()?;
    let mut counts = HashMap::new();

    // dwSize must be set before the first call
    let mut entry = PROCESSENTRY32W {
        dwSize: mem::size_of::<PROCESSENTRY32W>() as u32,
        ..Default::default()
    };

    // SAFETY: valid snapshot handle and initialized entry.
    let mut next = unsafe { Process32FirstW(snapshot.as_raw(), &mut entry) };
    while next.is_ok() {
        counts.insert(entry.th32ProcessID, entry.cntThreads);
        // SAFETY: same as above.
        next = unsafe { Process32NextW(snapshot.as_raw(), &mut entry) };
    }

    Ok(counts)
}
