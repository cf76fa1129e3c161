use std::time::{Duration, Instant};

/// Repeating timer driven by the main loop's clock.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next: Option<Instant>,
}

impl Interval {
    /// Start an interval whose first tick is one period after `now`.
    pub fn start(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next: Some(now + period),
        }
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    #[allow(dead_code)]
    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// Whether a tick is due at `now`. Missed ticks collapse into one.
    pub fn due(&mut self, now: Instant) -> bool {
        let Some(next) = self.next else {
            return false;
        };
        if now < next {
            return false;
        }
        let following = next + self.period;
        self.next = Some(if following > now {
            following
        } else {
            now + self.period
        });
        true
    }
}

/// Actions postponed by a short delay and run from the main loop.
///
/// Actions are returned in due order, ties in scheduling order.
#[derive(Debug, Clone)]
pub struct DeferredQueue<A> {
    entries: Vec<(Instant, A)>,
}

impl<A> Default for DeferredQueue<A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<A> DeferredQueue<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, action: A) {
        let due = now + delay;
        let index = self.entries.partition_point(|(at, _)| *at <= due);
        self.entries.insert(index, (due, action));
    }

    /// Remove and return every action due at `now`.
    pub fn drain_due(&mut self, now: Instant) -> Vec<A> {
        let ready = self.entries.partition_point(|(at, _)| *at <= now);
        self.entries.drain(..ready).map(|(_, action)| action).collect()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
