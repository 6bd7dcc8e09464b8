use serde::{Deserialize, Serialize};
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

const BYTES_PER_MB: f64 = 1_048_576.0;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One heap-pressure reading, in bytes. Display accessors round to two
/// decimal places, matching what the panel prints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeapSnapshot {
    pub used_bytes: u64,
    pub total_bytes: u64,
}

impl HeapSnapshot {
    pub fn used_mb(&self) -> f64 {
        round2(self.used_bytes as f64 / BYTES_PER_MB)
    }

    pub fn total_mb(&self) -> f64 {
        round2(self.total_bytes as f64 / BYTES_PER_MB)
    }

    /// used/total in [0, 1], rounded to two decimal places.
    pub fn ratio(&self) -> f32 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        round2(self.used_bytes as f64 / self.total_bytes as f64) as f32
    }
}

/// Optional host capability. `None` means the capability is unavailable
/// this frame; the panel then skips sampling and shows a placeholder.
pub trait MemoryProbe {
    fn snapshot(&mut self) -> Option<HeapSnapshot>;
}

/// Default probe: resident-set size of the current process over total
/// system memory.
pub struct ProcessMemoryProbe {
    system: System,
    pid: Pid,
}

impl ProcessMemoryProbe {
    /// `None` when the current pid cannot be resolved on this platform.
    pub fn new() -> Option<Self> {
        let pid = sysinfo::get_current_pid().ok()?;
        Some(Self {
            system: System::new(),
            pid,
        })
    }
}

impl MemoryProbe for ProcessMemoryProbe {
    fn snapshot(&mut self) -> Option<HeapSnapshot> {
        self.system.refresh_memory();
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[self.pid]),
            true,
            ProcessRefreshKind::everything(),
        );
        let process = self.system.process(self.pid)?;
        let total_bytes = self.system.total_memory();
        if total_bytes == 0 {
            return None;
        }
        Some(HeapSnapshot {
            used_bytes: process.memory(),
            total_bytes,
        })
    }
}
