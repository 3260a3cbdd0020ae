//! Process termination
//!
//! Unix sends `SIGKILL`; Windows calls `TerminateProcess`. Both report the
//! OS error so the status bar can say why a kill failed.

use std::io;

use super::error::{InspectError, InspectResult};

/// Forcefully terminates the process `pid`.
#[cfg(unix)]
pub fn terminate_process(pid: u32) -> InspectResult<()> {
    // 0 and negative values address process groups, never a single process.
    let raw = match libc::pid_t::try_from(pid) {
        Ok(raw) if raw > 0 => raw,
        _ => return Err(InspectError::NotFound(pid)),
    };

    // SAFETY: kill takes plain integers and has no memory-safety preconditions.
    let rc = unsafe { libc::kill(raw, libc::SIGKILL) };
    if rc == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error().into())
    }
}

/// Forcefully terminates the process `pid`.
#[cfg(windows)]
pub fn terminate_process(pid: u32) -> InspectResult<()> {
    use windows::Win32::System::Threading::{TerminateProcess, PROCESS_TERMINATE};

    use crate::ffi::ProcessHandle;

    if pid == 0 {
        return Err(InspectError::NotFound(pid));
    }

    let handle = ProcessHandle::open(pid, PROCESS_TERMINATE).map_err(win32_error)?;
    // SAFETY: the handle is valid for the lifetime of `handle` and was
    // opened with PROCESS_TERMINATE access.
    unsafe { TerminateProcess(handle.as_raw(), 1) }.map_err(win32_error)
}

#[cfg(windows)]
fn win32_error(err: windows::core::Error) -> InspectError {
    InspectError::Os(io::Error::new(io::ErrorKind::Other, err.to_string()))
}

/// Forcefully terminates the process `pid`.
#[cfg(not(any(unix, windows)))]
pub fn terminate_process(_pid: u32) -> InspectResult<()> {
    Err(InspectError::Unsupported("process termination"))
}
