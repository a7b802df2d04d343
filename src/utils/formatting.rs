//! Text formatting utilities for the status bar.

use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory()),
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    sys.process(Pid::from_u32(std::process::id()))
        .map(|process| process.memory() as f64 / MIB)
        .unwrap_or(0.0)
}

/// Formats memory usage in MB as a human-readable string.
///
/// # Arguments
/// * `memory_mb` - Memory usage in megabytes
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

/// Byte count with a binary unit, e.g. `"12.5 MiB"`.
pub fn format_bytes(bytes: usize) -> String {
    let bytes = bytes as f64;
    if bytes >= MIB {
        format!("{:.1} MiB", bytes / MIB)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes / KIB)
    } else {
        format!("{} B", bytes)
    }
}
