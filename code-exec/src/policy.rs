use std::time::Duration;

/// Schedule for polling a submitted job.
///
/// The first poll happens immediately; each further poll waits `interval`.
/// Once `max_attempts` polls have been made the last observed status is
/// returned even if the job is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    max_attempts: u32,
    interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            interval: Duration::from_millis(2000),
        }
    }
}

impl PollPolicy {
    /// `max_attempts` below one is raised to one.
    pub fn fixed(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            interval,
        }
    }

    pub fn with_max_attempts(self, max_attempts: u32) -> Self {
        Self::fixed(max_attempts, self.interval)
    }

    pub fn with_interval(self, interval: Duration) -> Self {
        Self::fixed(self.max_attempts, interval)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
