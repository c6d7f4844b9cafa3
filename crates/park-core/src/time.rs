//! Simulation time model.
//!
//! The host drives the engine with a variable `delta_day` per call (the
//! fraction of a simulated day that elapsed since the previous frame).  The
//! engine counts calls as integer [`Tick`]s and keeps the running total of
//! simulated days in [`SimClock`].  Dwell and travel are measured in ticks;
//! mood drift is measured in days.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute tick counter (one per `tick` call).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tick counter plus elapsed simulated days.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The tick currently being (or about to be) processed.
    pub current_tick: Tick,
    /// Simulated days elapsed since the clock started.
    pub elapsed_days: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick covering `delta_day` simulated days.
    ///
    /// Negative or non-finite deltas count as zero.
    #[inline]
    pub fn advance(&mut self, delta_day: f64) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        if delta_day.is_finite() && delta_day > 0.0 {
            self.elapsed_days += delta_day;
        }
    }

    /// Whole simulated days elapsed.
    #[inline]
    pub fn day(&self) -> u64 {
        self.elapsed_days.floor() as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (day {:.2})", self.current_tick, self.elapsed_days)
    }
}
