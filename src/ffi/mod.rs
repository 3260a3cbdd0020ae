//! FFI module - Safe wrappers around Win32 handles
//!
//! Only compiled on Windows, where process termination goes through
//! `OpenProcess`/`TerminateProcess` and thread counts come from a
//! ToolHelp32 snapshot.

mod handles;

pub use handles::{ProcessHandle, SnapshotHandle};
