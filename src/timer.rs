/// Length of the fixed coffee break overlay, in seconds
pub const COFFEE_BREAK_SECS: i64 = 5 * 60;
pub const DEFAULT_WORK_MINUTES: i64 = 25;
pub const DEFAULT_BREAK_MINUTES: i64 = 5;

/// The alternating work/break cycle underneath the coffee break overlay
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    pub fn flipped(self) -> Self {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }
}

/// What the countdown currently represents, as shown to the user and
/// recorded in the history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum SessionKind {
    Work,
    Break,
    CoffeeBreak,
}

/// Converts a minute count to seconds. Minutes are user input and may be
/// anything, so this saturates rather than overflowing.
pub fn minutes_to_secs(minutes: i64) -> i64 {
    minutes.saturating_mul(60)
}

/// Renders a second count as `MM:SS`.
///
/// Both fields are zero padded to two digits; minutes beyond 99 are printed
/// in full. Negative counts (reachable through non-positive settings) get a
/// leading `-` in front of the magnitude.
pub fn format_time(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.unsigned_abs();
    format!("{}{:02}:{:02}", sign, secs / 60, secs % 60)
}

/// Complete countdown state. Every change goes through one of the
/// transition methods, which leave `self` untouched and return the next
/// state together with the session that finished, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerState {
    pub remaining_secs: i64,
    pub running: bool,
    pub phase: Phase,
    pub coffee_break: bool,
    pub work_minutes: i64,
    pub break_minutes: i64,
}

/// Result of applying a transition to a [`TimerState`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: TimerState,
    pub completed: Option<SessionKind>,
}

impl Transition {
    fn to(state: TimerState) -> Self {
        Self {
            state,
            completed: None,
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(DEFAULT_WORK_MINUTES, DEFAULT_BREAK_MINUTES)
    }
}

impl TimerState {
    /// Idle work session with a full countdown
    pub fn new(work_minutes: i64, break_minutes: i64) -> Self {
        Self {
            remaining_secs: minutes_to_secs(work_minutes),
            running: false,
            phase: Phase::Work,
            coffee_break: false,
            work_minutes,
            break_minutes,
        }
    }

    pub fn session_kind(&self) -> SessionKind {
        match (self.coffee_break, self.phase) {
            (true, _) => SessionKind::CoffeeBreak,
            (false, Phase::Work) => SessionKind::Work,
            (false, Phase::Break) => SessionKind::Break,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_secs <= 0
    }

    /// Whether the countdown should be consuming ticks right now
    pub fn is_counting(&self) -> bool {
        self.running && !self.is_finished()
    }

    fn phase_secs(&self, phase: Phase) -> i64 {
        match phase {
            Phase::Work => minutes_to_secs(self.work_minutes),
            Phase::Break => minutes_to_secs(self.break_minutes),
        }
    }

    /// Start/pause button. Starting a countdown that has nothing left
    /// completes it on the spot.
    pub fn toggle_running(&self) -> Transition {
        let next = TimerState {
            running: !self.running,
            ..*self
        };
        if next.running && next.is_finished() {
            next.complete()
        } else {
            Transition::to(next)
        }
    }

    /// One elapsed second. Ignored unless the countdown is running.
    pub fn tick(&self) -> Transition {
        if !self.is_counting() {
            return Transition::to(*self);
        }
        let next = TimerState {
            remaining_secs: self.remaining_secs - 1,
            ..*self
        };
        if next.is_finished() {
            next.complete()
        } else {
            Transition::to(next)
        }
    }

    fn complete(&self) -> Transition {
        let finished = self.session_kind();
        let mut next = TimerState {
            running: false,
            ..*self
        };
        // a coffee break waits for the user to leave it explicitly
        if !self.coffee_break {
            next.phase = self.phase.flipped();
            next.remaining_secs = next.phase_secs(next.phase);
        }
        Transition {
            state: next,
            completed: Some(finished),
        }
    }

    pub fn enter_coffee_break(&self) -> Transition {
        Transition::to(TimerState {
            running: false,
            remaining_secs: COFFEE_BREAK_SECS,
            coffee_break: true,
            ..*self
        })
    }

    /// Leaving a coffee break always restarts a full work-length countdown,
    /// even if the break interrupted a regular break.
    pub fn exit_coffee_break(&self) -> Transition {
        Transition::to(TimerState {
            running: false,
            remaining_secs: minutes_to_secs(self.work_minutes),
            coffee_break: false,
            ..*self
        })
    }

    pub fn toggle_coffee_break(&self) -> Transition {
        if self.coffee_break {
            self.exit_coffee_break()
        } else {
            self.enter_coffee_break()
        }
    }

    /// New work length. The countdown in progress keeps its remaining time.
    pub fn with_work_minutes(&self, minutes: i64) -> Transition {
        Transition::to(TimerState {
            work_minutes: minutes,
            ..*self
        })
    }

    /// New break length. The countdown in progress keeps its remaining time.
    pub fn with_break_minutes(&self, minutes: i64) -> Transition {
        Transition::to(TimerState {
            break_minutes: minutes,
            ..*self
        })
    }
}
