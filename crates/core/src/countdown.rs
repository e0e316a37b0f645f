use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CountdownError {
    #[error("time budget must be > 0 seconds")]
    ZeroBudget,
}

/// Result of feeding one second into a `Countdown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    Running { remaining: u32 },
    Paused { remaining: u32 },
    /// Emitted once, on the tick that reaches zero.
    Expired,
    Stopped,
}

/// Second-granular countdown with re-entrant pause/resume.
///
/// The countdown holds no clock of its own; whoever drives it calls `tick`
/// once per elapsed second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    budget_seconds: u32,
    remaining_seconds: u32,
    paused: bool,
    stopped: bool,
}

impl Countdown {
    /// # Errors
    ///
    /// Returns `CountdownError::ZeroBudget` for a zero budget.
    pub fn new(budget_seconds: u32) -> Result<Self, CountdownError> {
        if budget_seconds == 0 {
            return Err(CountdownError::ZeroBudget);
        }
        Ok(Self {
            budget_seconds,
            remaining_seconds: budget_seconds,
            paused: false,
            stopped: false,
        })
    }

    #[must_use]
    pub fn budget_seconds(&self) -> u32 {
        self.budget_seconds
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.budget_seconds - self.remaining_seconds
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.paused && !self.stopped
    }

    /// Pause the countdown. Returns `false` if it was already paused or stopped.
    pub fn pause(&mut self) -> bool {
        if self.paused || self.stopped {
            return false;
        }
        self.paused = true;
        true
    }

    /// Resume the countdown. Returns `false` if it was not paused or is stopped.
    pub fn resume(&mut self) -> bool {
        if !self.paused || self.stopped {
            return false;
        }
        self.paused = false;
        true
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn tick(&mut self) -> CountdownTick {
        if self.stopped {
            return CountdownTick::Stopped;
        }
        if self.paused {
            return CountdownTick::Paused {
                remaining: self.remaining_seconds,
            };
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.stopped = true;
            return CountdownTick::Expired;
        }
        CountdownTick::Running {
            remaining: self.remaining_seconds,
        }
    }
}

/// Render seconds as `m:ss`.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
