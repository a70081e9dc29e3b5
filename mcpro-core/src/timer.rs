//! Workshop stopwatch: the once-per-second tick and elapsed-time display.

use crate::records::Task;

/// Advance `task` by one second if it is running. Returns whether it changed.
pub fn tick(task: &mut Task) -> bool {
    if !task.is_running {
        return false;
    }
    task.tiempo = task.tiempo.saturating_add(1);
    true
}

/// "HH:MM:SS". Hours keep growing past 99.
pub fn format_elapsed(seconds: u64) -> String {
    let hrs = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hrs:02}:{mins:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(running: bool, tiempo: u64) -> Task {
        Task {
            id: 1,
            date: "01/01/2026".into(),
            titulo: "Cuadernos".into(),
            tiempo,
            is_running: running,
        }
    }

    #[test]
    fn test_tick_only_advances_running_tasks() {
        let mut running = task(true, 59);
        let mut paused = task(false, 59);

        assert!(tick(&mut running));
        assert!(!tick(&mut paused));
        assert_eq!(running.tiempo, 60);
        assert_eq!(paused.tiempo, 59);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(61), "00:01:01");
        assert_eq!(format_elapsed(3_599), "00:59:59");
        assert_eq!(format_elapsed(3_600 * 125 + 5), "125:00:05");
    }
}
