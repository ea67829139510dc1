//! Match clock state machine.
//!
//! The clock is a plain minutes:seconds accumulator. Wall-clock scheduling
//! lives in [`super::timer`]; everything here is synchronous so the tick
//! cadence can be driven by a timer thread in production and directly in
//! tests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// First half ends at the 45th minute, second half at the 90th.
pub const FIRST_HALF_END_MIN: u32 = 45;
pub const SECOND_HALF_END_MIN: u32 = 90;

/// Match phase derived from elapsed minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Half {
    First,
    Second,
    ExtraTime,
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Half::First => write!(f, "First Half"),
            Half::Second => write!(f, "Second Half"),
            Half::ExtraTime => write!(f, "Extra Time"),
        }
    }
}

/// Running match clock for a live stat-entry session.
///
/// Invariant: `seconds` is always in `0..60`; a tick that reaches 60 rolls
/// over into `minutes`. `minutes` growth is unbounded and the half label is
/// total over it, so a match never leaves the `ExtraTime` phase once reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchClock {
    minutes: u32,
    seconds: u32,
    is_running: bool,
    extra_time: u32,
}

impl MatchClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn extra_time(&self) -> u32 {
        self.extra_time
    }

    /// Mark the clock as running. No-op if already running.
    pub fn start(&mut self) {
        if !self.is_running {
            self.is_running = true;
            log::debug!("match clock started at {}", self.display());
        }
    }

    /// Mark the clock as paused. No-op if already paused.
    pub fn pause(&mut self) {
        if self.is_running {
            self.is_running = false;
            log::debug!("match clock paused at {}", self.display());
        }
    }

    /// Stop the clock and restore all fields to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance by one second, rolling seconds over into minutes at 60.
    pub fn tick(&mut self) {
        self.seconds += 1;
        if self.seconds >= 60 {
            self.seconds = 0;
            self.minutes += 1;
        }
    }

    /// Record one added minute of extra time. Does not touch minutes/seconds.
    pub fn add_extra_time(&mut self) {
        self.extra_time += 1;
    }

    /// Half label as a pure function of elapsed minutes.
    pub fn half(&self) -> Half {
        if self.minutes < FIRST_HALF_END_MIN {
            Half::First
        } else if self.minutes < SECOND_HALF_END_MIN {
            Half::Second
        } else {
            Half::ExtraTime
        }
    }

    /// Zero-padded "MM:SS" rendering for the clock display.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }

    /// "M:SS" rendering used in submission payloads and substitution
    /// timestamps (minutes unpadded, matching the wire format).
    pub fn duration(&self) -> String {
        format!("{}:{:02}", self.minutes, self.seconds)
    }
}
