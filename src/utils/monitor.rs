#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, RefreshKind, System};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct SystemStats {
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub peak_memory_mb: u64,
    pub phase_time: Duration,
    pub elapsed_time: Duration,
}

#[cfg(feature = "cli")]
struct MonitorState {
    system: System,
    peak_memory_mb: u64,
    last_phase: Instant,
}

/// 依 ETL 階段記錄本行程的 CPU 與記憶體使用量
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    state: Option<Mutex<MonitorState>>,
    pid: Option<Pid>,
    start_time: Instant,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let start_time = Instant::now();
        if !enabled {
            return Self {
                state: None,
                pid: None,
                start_time,
            };
        }

        let mut system = System::new_with_specifics(RefreshKind::everything());
        system.refresh_all();

        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                tracing::warn!("System monitoring unavailable: {}", e);
                None
            }
        };

        Self {
            state: Some(Mutex::new(MonitorState {
                system,
                peak_memory_mb: 0,
                last_phase: start_time,
            })),
            pid,
            start_time,
        }
    }

    pub fn get_stats(&self) -> Option<SystemStats> {
        let pid = self.pid?;
        let mut state = self.state.as_ref()?.lock().ok()?;
        state.system.refresh_all();

        let process = state.system.process(pid)?;
        let cpu_usage = process.cpu_usage();
        let memory_mb = process.memory() / 1024 / 1024;

        state.peak_memory_mb = state.peak_memory_mb.max(memory_mb);
        let now = Instant::now();
        let phase_time = now.duration_since(state.last_phase);
        state.last_phase = now;

        Some(SystemStats {
            cpu_usage,
            memory_usage_mb: memory_mb,
            peak_memory_mb: state.peak_memory_mb,
            phase_time,
            elapsed_time: self.start_time.elapsed(),
        })
    }

    pub fn log_stats(&self, phase: &str) {
        if let Some(stats) = self.get_stats() {
            tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}MB, Peak: {}MB, Phase: {:?}",
                phase,
                stats.cpu_usage,
                stats.memory_usage_mb,
                stats.peak_memory_mb,
                stats.phase_time
            );
        }
    }

    pub fn log_final_stats(&self) {
        if let Some(stats) = self.get_stats() {
            tracing::info!(
                "📊 Final Stats - Total Time: {:?}, Peak Memory: {}MB",
                stats.elapsed_time,
                stats.peak_memory_mb
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_some()
    }
}

#[cfg(feature = "cli")]
impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// 非 CLI 環境沒有 sysinfo
#[cfg(not(feature = "cli"))]
#[derive(Default)]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _phase: &str) {}

    pub fn log_final_stats(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_reports_nothing() {
        let monitor = SystemMonitor::new(false);
        assert!(!monitor.is_enabled());
        assert!(monitor.get_stats().is_none());
    }

    #[test]
    fn test_enabled_monitor_tracks_peak_memory() {
        let monitor = SystemMonitor::new(true);
        assert!(monitor.is_enabled());

        if let (Some(first), Some(second)) = (monitor.get_stats(), monitor.get_stats()) {
            assert!(second.peak_memory_mb >= first.memory_usage_mb);
            assert!(second.elapsed_time >= first.elapsed_time);
        }
    }
}
