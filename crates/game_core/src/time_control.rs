//! Time banking for the match controller and deadline polling for search.
//!
//! Both sides of the clock live here: the controller charges each completed
//! move against a per-player [`TimeBank`], and a searching agent polls a
//! [`SearchClock`] to decide when to give up.

use std::time::{Duration, Instant};

/// A side whose bank drops below this fraction of the cap forfeits.
pub const DISQUALIFICATION_FACTOR: f64 = 0.5;

/// Per-player time allowance, in seconds.
///
/// Spending less than the cap on a move grows the bank (up to the cap);
/// spending more shrinks it. There is no lower clamp: a long overrun can
/// drive the bank negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBank {
    cap: f64,
    bank: f64,
}

impl TimeBank {
    /// Create a full bank for a per-move cap of `cap` seconds.
    pub fn new(cap: f64) -> Self {
        Self { cap, bank: cap }
    }

    pub fn cap(&self) -> f64 {
        self.cap
    }

    /// Seconds currently available for the next move.
    pub fn remaining(&self) -> f64 {
        self.bank
    }

    /// The allowance handed to an agent.
    pub fn allotted(&self) -> Duration {
        Duration::try_from_secs_f64(self.bank.max(0.0)).unwrap_or(Duration::MAX)
    }

    /// Charge a completed move that took `used` seconds and return the new bank.
    pub fn charge(&mut self, used: f64) -> f64 {
        self.bank = self.cap.min(self.bank + (self.cap - used));
        self.bank
    }

    /// True once the bank has fallen below the disqualification threshold.
    pub fn is_forfeit(&self) -> bool {
        self.bank < DISQUALIFICATION_FACTOR * self.cap
    }
}

/// Wall-clock deadline for a single decision.
///
/// Cancellation is cooperative: the search calls [`SearchClock::past`] at
/// the points where it is willing to stop.
#[derive(Debug, Clone, Copy)]
pub struct SearchClock {
    start: Instant,
    budget: Duration,
}

impl SearchClock {
    /// Start the clock now.
    pub fn start(budget: Duration) -> Self {
        Self::started_at(Instant::now(), budget)
    }

    /// A clock that began at `start`, e.g. to resume a decision already under way.
    pub fn started_at(start: Instant, budget: Duration) -> Self {
        Self { start, budget }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time elapsed since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// True once elapsed time exceeds `fraction` of the budget.
    #[inline]
    pub fn past(&self, fraction: f64) -> bool {
        self.elapsed().as_secs_f64() > self.budget.as_secs_f64() * fraction
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
