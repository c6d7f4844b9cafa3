//! Injectable randomness for selection, spending and mood rolls.
//!
//! Every stochastic decision in the simulation goes through [`RandomSource`]
//! rather than a global generator:
//!
//! - production uses [`SimRng`], a seeded `SmallRng` (fast, non-cryptographic);
//! - tests inject [`ScriptedRng`] to force specific outcomes (a departure roll
//!   that always succeeds, a selection draw at a known threshold, …).
//!
//! Each roll consumes exactly one `next_f64` draw, so scripted sequences line
//! up with the decisions they are meant to drive.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ── RandomSource ──────────────────────────────────────────────────────────────

/// A source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// `true` with probability `p`.  Consumes exactly one draw, even when
    /// `p` is 0 or 1.
    #[inline]
    fn gen_bool(&mut self, p: f64) -> bool {
        let p = if p.is_nan() { 0.0 } else { p };
        self.next_f64() < p
    }

    /// Uniform value in `[0, upper)`.
    #[inline]
    fn gen_below(&mut self, upper: f64) -> f64 {
        self.next_f64() * upper
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.  Owned by the engine and used only from inside
/// `tick`, so no synchronisation is needed.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── ScriptedRng ───────────────────────────────────────────────────────────────

/// Deterministic source that replays a fixed sequence of draws, cycling when
/// it reaches the end.
///
/// ```rust
/// use park_core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new(vec![0.0, 0.5]);
/// assert!(rng.gen_bool(0.1));   // 0.0 < 0.1
/// assert!(!rng.gen_bool(0.1));  // 0.5 >= 0.1
/// assert!(rng.gen_bool(0.1));   // wrapped back to 0.0
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    values: Vec<f64>,
    pos:    usize,
}

impl ScriptedRng {
    /// Replay `values` in order.  Values are clamped into `[0, 1)`; an empty
    /// script behaves like `constant(0.0)`.
    pub fn new(values: Vec<f64>) -> Self {
        let mut values: Vec<f64> = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, pos: 0 }
    }

    /// Every draw returns `value`.
    ///
    /// `constant(0.0)` makes every `gen_bool(p > 0)` succeed;
    /// `constant(0.999)` makes nearly every roll fail.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws consumed so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedRng {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}
