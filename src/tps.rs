use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

const WINDOW: Duration = Duration::from_secs(1);

/// Counts events (ticks or frames) seen over the last second.
#[derive(Debug, Default)]
pub struct TickCounter {
    stamps: VecDeque<Instant>,
    started: Option<Instant>,
}

impl TickCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, now: Instant) {
        self.started.get_or_insert(now);
        self.stamps.push_back(now);
        self.expire(now);
    }

    fn expire(&mut self, now: Instant) {
        while let Some(oldest) = self.stamps.front() {
            if now.saturating_duration_since(*oldest) >= WINDOW {
                self.stamps.pop_front();
            } else {
                break;
            }
        }
    }

    /// Events per second, or `None` until a full second has been observed.
    pub fn per_second(&self, now: Instant) -> Option<f64> {
        let started = self.started?;
        if now.saturating_duration_since(started) < WINDOW {
            return None;
        }
        let recent = self
            .stamps
            .iter()
            .filter(|stamp| now.saturating_duration_since(**stamp) < WINDOW)
            .count();
        Some(recent as f64)
    }
}
