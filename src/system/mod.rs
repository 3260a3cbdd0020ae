//! System information module - processes, host and memory
//!
//! The OS is reached only through the [`SystemInspector`] trait; the
//! production implementation lives in `native` and uses `sysinfo`.

pub mod collector;
pub mod cpu;
pub mod error;
pub mod inspector;
pub mod memory;
pub mod native;
pub mod processes;
pub mod terminate;
#[cfg(windows)]
mod threads;
pub mod uptime;

pub use collector::Collector;
pub use inspector::SystemInspector;
pub use memory::{collect_host_stats, HostStats};
pub use native::SysinfoInspector;
pub use processes::{ProcessRow, ProcessSnapshot};
