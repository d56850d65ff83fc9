use std::time::{Duration, Instant};

use log::trace;

use crate::timer::TimerState;

pub const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug)]
struct Armed {
    deps: TimerState,
    due: Instant,
}

/// Owns the one repeating countdown timer.
///
/// The timer is keyed on the whole [`TimerState`]: whenever the state the
/// timer was armed for changes, the old handle is dropped and a fresh one
/// is armed a full period later. There is never more than one armed handle.
#[derive(Debug)]
pub struct TickScheduler {
    period: Duration,
    armed: Option<Armed>,
    generation: u64,
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(COUNTDOWN_PERIOD)
    }
}

impl TickScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            armed: None,
            generation: 0,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// When the armed timer fires next
    pub fn next_due(&self) -> Option<Instant> {
        self.armed.map(|a| a.due)
    }

    /// Number of times a timer has been armed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Brings the timer in line with `state`: armed while it is counting
    /// down, re-armed when it changed since the last call, cancelled otherwise.
    pub fn sync(&mut self, state: &TimerState, now: Instant) {
        if !state.is_counting() {
            self.cancel();
            return;
        }
        if matches!(self.armed, Some(a) if a.deps == *state) {
            return;
        }
        self.cancel();
        self.generation += 1;
        trace!(
            "arming countdown timer #{} at {}s remaining",
            self.generation,
            state.remaining_secs
        );
        self.armed = Some(Armed {
            deps: *state,
            due: now + self.period,
        });
    }

    /// Returns true when the armed timer has fired. Fires at most once per
    /// call; the next firing is one period after the due time.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.armed.as_mut() {
            Some(armed) if now >= armed.due => {
                armed.due += self.period;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        if self.armed.take().is_some() {
            trace!("cancelled countdown timer #{}", self.generation);
        }
    }
}
