//! Default tuning values.
//!
//! These feed `SimConfig::default()`; hosts override them through the config
//! rather than by editing this file.  Arrays indexed by mood follow
//! `GuestMood::index()` order: happy, neutral, unhappy.

use crate::GuestMood;

// ── Building selection ────────────────────────────────────────────────────────

/// Weight every open building starts from, before affinity and penalties.
pub const BASE_ATTRACTION_WEIGHT: f64 = 1.0;

/// Floor for any candidate weight.  Must stay positive for the cumulative
/// sampler.
pub const MIN_ATTRACTION_WEIGHT: f64 = 0.1;

pub const GUEST_TYPE_AFFINITY_MULTIPLIER: f64 = 3.0;

/// Subtracted in proportion to how full a building already is.
pub const CAPACITY_PENALTY_FACTOR: f64 = 0.8;

/// Subtracted when the candidate is the building the guest just left.
pub const SAME_BUILDING_PENALTY: f64 = 0.75;

// ── Visits ────────────────────────────────────────────────────────────────────

pub const BASE_DWELL_TICKS: u32 = 6;

/// Dwell scaling per mood.  Unhappy guests leave attractions early.
pub const MOOD_DWELL_MULTIPLIER: [f64; GuestMood::COUNT] = [1.25, 1.0, 0.6];

/// Ticks spent walking to a chosen building.  0 = arrive in the same tick.
pub const TRAVEL_TICKS: u32 = 0;

/// Per-tick chance that a guest inside a shop buys something.
pub const SHOP_PURCHASE_PROBABILITY: f64 = 0.15;

pub const MOOD_SPENDING_MULTIPLIER: [f64; GuestMood::COUNT] = [1.3, 1.0, 0.5];

/// Chance a guest leaves the park when a visit ends.
pub const DEPARTURE_PROBABILITY: [f64; GuestMood::COUNT] = [0.02, 0.05, 0.25];

// ── Mood ──────────────────────────────────────────────────────────────────────

pub const HAPPY_THRESHOLD: f32 = 0.65;
pub const UNHAPPY_THRESHOLD: f32 = 0.35;

/// Fraction of the gap to the park's appeal closed per simulated day.
pub const MOOD_DRIFT_RATE: f64 = 0.5;

/// Satisfaction assigned to new arrivals.
pub const INITIAL_SATISFACTION: f32 = 0.5;

// ── Pool & batching ───────────────────────────────────────────────────────────

pub const DEFAULT_POOL_CAPACITY: usize = 50_000;

/// Above this many active guests the engine time-slices its work.
pub const TIME_SLICING_THRESHOLD: usize = 5_000;

/// Pool indices covered by one batch.
pub const BATCH_SIZE: usize = 1_000;

pub const MAX_BATCHES_PER_TICK: usize = 4;
