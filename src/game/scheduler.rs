use std::time::Duration;

use super::resolver::TurnMessage;

/// Fire-once delayed delivery of turn messages.
///
/// Implementations never touch the board; they hand the message back to
/// whoever owns the session once the delay has elapsed.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, message: TurnMessage);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Timer {
    due: Duration,
    seq: u64,
    message: TurnMessage,
}

/// Virtual clock driven by explicit [`ManualScheduler::pop_due`] calls.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_seq: u64,
    timers: Vec<Timer>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.timers.iter().map(|t| t.due).min()
    }

    /// Removes the earliest timer due at or before `deadline` and moves the
    /// clock to its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<TurnMessage> {
        let (pos, timer) = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= deadline)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(pos, t)| (pos, *t))?;
        self.timers.remove(pos);
        self.now = self.now.max(timer.due);
        Some(timer.message)
    }

    /// Moves the clock forward without firing anything.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, message: TurnMessage) {
        self.timers.push(Timer {
            due: self.now + delay,
            seq: self.next_seq,
            message,
        });
        self.next_seq += 1;
    }
}
