use embassy_time::{Duration, Instant};

/// Uptime stamp of the last published message.
///
/// Holds an absolute instant rather than a countdown: a message is due once
/// the uptime has moved at least one interval past the stamp. The stamp starts
/// at zero on boot, so the first check after `interval` of uptime is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTimer {
    last_sent: Instant,
}

impl Default for MessageTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageTimer {
    pub const fn new() -> Self {
        Self {
            last_sent: Instant::from_ticks(0),
        }
    }

    pub fn get(&self) -> Instant {
        self.last_sent
    }

    /// Overwrites the stamp unconditionally.
    pub fn set(&mut self, value: Instant) {
        self.last_sent = value;
    }

    /// Time elapsed since the stamp, `None` if `now` lies before it.
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        now.checked_duration_since(self.last_sent)
    }

    pub fn is_elapsed(&self, now: Instant, interval: Duration) -> bool {
        match self.elapsed(now) {
            Some(elapsed) => elapsed >= interval,
            None => false,
        }
    }

    /// Stamps `now`, keeping the stamp non-decreasing.
    pub fn mark(&mut self, now: Instant) {
        if now > self.last_sent {
            self.last_sent = now;
        }
    }
}
