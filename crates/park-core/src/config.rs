//! Simulation configuration.
//!
//! Typically loaded from JSON by the host (with the `serde` feature) and
//! passed to `park_sim::EngineBuilder`.  Every section has a `Default` built
//! from [`crate::constants`], and missing JSON fields fall back to it.

use crate::constants::*;
use crate::{GuestMood, ParkError, ParkResult};

// ── SelectionWeights ──────────────────────────────────────────────────────────

/// Parameters of the building selector's weight formula.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectionWeights {
    pub base:                f64,
    pub min:                 f64,
    pub affinity_multiplier: f64,
    pub capacity_penalty:    f64,
    pub repeat_penalty:      f64,
}

impl Default for SelectionWeights {
    fn default() -> Self {
        Self {
            base:                BASE_ATTRACTION_WEIGHT,
            min:                 MIN_ATTRACTION_WEIGHT,
            affinity_multiplier: GUEST_TYPE_AFFINITY_MULTIPLIER,
            capacity_penalty:    CAPACITY_PENALTY_FACTOR,
            repeat_penalty:      SAME_BUILDING_PENALTY,
        }
    }
}

// ── VisitConfig ───────────────────────────────────────────────────────────────

/// Dwell, travel, spending and departure parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisitConfig {
    pub base_dwell_ticks:          u32,
    pub mood_dwell_multiplier:     [f64; GuestMood::COUNT],
    pub travel_ticks:              u32,
    pub shop_purchase_probability: f64,
    pub mood_spending_multiplier:  [f64; GuestMood::COUNT],
    pub departure_probability:     [f64; GuestMood::COUNT],
}

impl VisitConfig {
    /// Dwell ticks for a guest in `mood`; never less than 1.
    #[inline]
    pub fn dwell_ticks(&self, mood: GuestMood) -> u32 {
        let scaled = self.base_dwell_ticks as f64 * self.mood_dwell_multiplier[mood.index()];
        (scaled.round() as u32).max(1)
    }

    /// Per-tick purchase chance for a guest in `mood` inside a shop.
    #[inline]
    pub fn purchase_probability(&self, mood: GuestMood) -> f64 {
        self.shop_purchase_probability * self.mood_spending_multiplier[mood.index()]
    }
}

impl Default for VisitConfig {
    fn default() -> Self {
        Self {
            base_dwell_ticks:          BASE_DWELL_TICKS,
            mood_dwell_multiplier:     MOOD_DWELL_MULTIPLIER,
            travel_ticks:              TRAVEL_TICKS,
            shop_purchase_probability: SHOP_PURCHASE_PROBABILITY,
            mood_spending_multiplier:  MOOD_SPENDING_MULTIPLIER,
            departure_probability:     DEPARTURE_PROBABILITY,
        }
    }
}

// ── MoodConfig ────────────────────────────────────────────────────────────────

/// Satisfaction thresholds and drift toward the park's appeal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MoodConfig {
    pub happy_threshold:      f32,
    pub unhappy_threshold:    f32,
    pub drift_rate_per_day:   f64,
    pub initial_satisfaction: f32,
}

impl MoodConfig {
    #[inline]
    pub fn classify(&self, satisfaction: f32) -> GuestMood {
        GuestMood::from_satisfaction(satisfaction, self.happy_threshold, self.unhappy_threshold)
    }

    /// A satisfaction value squarely inside `mood`'s band.  Used when
    /// re-seeding guests from saved aggregates.
    pub fn representative_satisfaction(&self, mood: GuestMood) -> f32 {
        match mood {
            GuestMood::Happy => (self.happy_threshold + 1.0) / 2.0,
            GuestMood::Neutral => (self.happy_threshold + self.unhappy_threshold) / 2.0,
            GuestMood::Unhappy => self.unhappy_threshold / 2.0,
        }
    }

    /// Fraction of the gap to the target closed over `elapsed_days`.
    #[inline]
    pub fn drift_step(&self, elapsed_days: f64) -> f64 {
        if elapsed_days <= 0.0 {
            return 0.0;
        }
        1.0 - (1.0 - self.drift_rate_per_day).powf(elapsed_days)
    }
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            happy_threshold:      HAPPY_THRESHOLD,
            unhappy_threshold:    UNHAPPY_THRESHOLD,
            drift_rate_per_day:   MOOD_DRIFT_RATE,
            initial_satisfaction: INITIAL_SATISFACTION,
        }
    }
}

// ── SlicingConfig ─────────────────────────────────────────────────────────────

/// Time-slicing for large populations.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SlicingConfig {
    /// Slicing starts when the active count exceeds this.
    pub threshold:            usize,
    pub batch_size:           usize,
    pub max_batches_per_tick: usize,
}

impl Default for SlicingConfig {
    fn default() -> Self {
        Self {
            threshold:            TIME_SLICING_THRESHOLD,
            batch_size:           BATCH_SIZE,
            max_batches_per_tick: MAX_BATCHES_PER_TICK,
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Maximum simultaneous guests.  Fixed for the engine's lifetime.
    pub pool_capacity: usize,

    /// Master RNG seed.
    pub seed: u64,

    /// Call `SimObserver::on_snapshot` every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,

    pub selection: SelectionWeights,
    pub visits:    VisitConfig,
    pub mood:      MoodConfig,
    pub slicing:   SlicingConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            pool_capacity:           DEFAULT_POOL_CAPACITY,
            seed:                    0,
            snapshot_interval_ticks: 0,
            selection:               SelectionWeights::default(),
            visits:                  VisitConfig::default(),
            mood:                    MoodConfig::default(),
            slicing:                 SlicingConfig::default(),
        }
    }
}

impl SimConfig {
    /// Default configuration with a different pool capacity.
    pub fn with_capacity(pool_capacity: usize) -> Self {
        Self { pool_capacity, ..Self::default() }
    }

    /// Check every parameter is in range.
    pub fn validate(&self) -> ParkResult<()> {
        fn err<T>(msg: String) -> ParkResult<T> {
            Err(ParkError::Config(msg))
        }

        if self.pool_capacity == 0 || self.pool_capacity > u32::MAX as usize {
            return err(format!("pool_capacity {} out of range", self.pool_capacity));
        }

        let s = &self.selection;
        if !(s.min.is_finite() && s.min > 0.0) {
            return err(format!("selection.min must be positive, got {}", s.min));
        }
        for (name, v) in [
            ("base", s.base),
            ("affinity_multiplier", s.affinity_multiplier),
            ("capacity_penalty", s.capacity_penalty),
            ("repeat_penalty", s.repeat_penalty),
        ] {
            if !v.is_finite() {
                return err(format!("selection.{name} must be finite"));
            }
        }

        let v = &self.visits;
        if v.base_dwell_ticks == 0 {
            return err("visits.base_dwell_ticks must be at least 1".into());
        }
        let probability = |p: f64| (0.0..=1.0).contains(&p);
        if !probability(v.shop_purchase_probability) {
            return err(format!(
                "visits.shop_purchase_probability {} not in [0, 1]",
                v.shop_purchase_probability
            ));
        }
        for mood in GuestMood::ALL {
            let i = mood.index();
            if !probability(v.departure_probability[i]) {
                return err(format!("visits.departure_probability[{mood}] not in [0, 1]"));
            }
            if !(v.mood_dwell_multiplier[i].is_finite() && v.mood_dwell_multiplier[i] >= 0.0) {
                return err(format!("visits.mood_dwell_multiplier[{mood}] must be non-negative"));
            }
            if !(v.mood_spending_multiplier[i].is_finite() && v.mood_spending_multiplier[i] >= 0.0) {
                return err(format!("visits.mood_spending_multiplier[{mood}] must be non-negative"));
            }
        }

        let m = &self.mood;
        if !(0.0..=1.0).contains(&m.unhappy_threshold)
            || !(0.0..=1.0).contains(&m.happy_threshold)
            || m.unhappy_threshold > m.happy_threshold
        {
            return err(format!(
                "mood thresholds must satisfy 0 <= unhappy ({}) <= happy ({}) <= 1",
                m.unhappy_threshold, m.happy_threshold
            ));
        }
        if !probability(m.drift_rate_per_day) {
            return err(format!("mood.drift_rate_per_day {} not in [0, 1]", m.drift_rate_per_day));
        }
        if !(0.0..=1.0).contains(&m.initial_satisfaction) {
            return err(format!(
                "mood.initial_satisfaction {} not in [0, 1]",
                m.initial_satisfaction
            ));
        }

        if self.slicing.batch_size == 0 || self.slicing.max_batches_per_tick == 0 {
            return err("slicing.batch_size and slicing.max_batches_per_tick must be at least 1".into());
        }

        Ok(())
    }
}
