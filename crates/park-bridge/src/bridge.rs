//! `GuestBridge` — the only surface the host talks to.

use park_building::BuildingCatalog;
use park_core::{GuestBreakdown, GuestTypeMix, RandomSource, SimConfig, SimRng, SlotId};
use park_sim::{AddOutcome, Engine, EngineBuilder, NoopObserver, RemovalPreference, SimObserver};

use crate::{BridgeError, BridgeResult, DayTally, GuestAggregates, ParkView, TickSummary};

/// Facade over the [`Engine`] that keeps the host-visible aggregates
/// current.
///
/// The breakdown and type mix are recomputed from the pool after every
/// operation that changes the population, so the host can read them at any
/// time without touching individual guests.
pub struct GuestBridge<R: RandomSource = SimRng> {
    engine:    Engine<R>,
    breakdown: GuestBreakdown,
    type_mix:  GuestTypeMix,
    tally:     DayTally,
}

impl GuestBridge<SimRng> {
    /// An empty park seeded from `config.seed`.
    pub fn new(config: SimConfig) -> BridgeResult<Self> {
        Ok(Self::from_engine(EngineBuilder::new(config).build()?))
    }

    /// Rebuild a bridge from saved aggregates.
    ///
    /// The pool is re-seeded with the saved mood breakdown, types apportioned
    /// from the saved mix.  Guests beyond `config.pool_capacity` are dropped.
    pub fn restore(config: SimConfig, saved: &GuestAggregates) -> BridgeResult<Self> {
        let mut engine = EngineBuilder::new(config).build()?;
        engine.set_clock(saved.clock.clone());
        let outcome = engine.reseed(&saved.breakdown, &saved.type_mix);
        // Arrivals before the first tick follow the saved population.
        engine.set_arrival_mix(saved.type_mix);
        tracing::debug!(
            clock = %saved.clock,
            added = outcome.added,
            rejected = outcome.rejected,
            "guest bridge restored from aggregates"
        );

        let mut bridge = Self::from_engine(engine);
        // An empty save keeps its mix for the next arrivals.
        bridge.type_mix = saved.type_mix;
        bridge.refresh();
        Ok(bridge)
    }
}

impl<R: RandomSource> GuestBridge<R> {
    pub fn from_engine(engine: Engine<R>) -> Self {
        let mut bridge = Self {
            engine,
            breakdown: GuestBreakdown::default(),
            type_mix: GuestTypeMix::uniform(),
            tally: DayTally::default(),
        };
        bridge.refresh();
        bridge
    }

    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance one tick of `delta_day` simulated days.
    pub fn tick<C: BuildingCatalog + ?Sized>(&mut self, delta_day: f64, view: &ParkView<'_, C>) -> TickSummary {
        self.tick_observed(delta_day, view, &mut NoopObserver)
    }

    /// [`tick`](Self::tick) with engine observer callbacks.
    pub fn tick_observed<C: BuildingCatalog + ?Sized, O: SimObserver + ?Sized>(
        &mut self,
        delta_day: f64,
        view:      &ParkView<'_, C>,
        observer:  &mut O,
    ) -> TickSummary {
        let snapshot = view.snapshot();
        let report = self.engine.tick_observed(delta_day, &snapshot, view.slots, view.catalog, observer);
        self.tally.record(&report);
        self.refresh();
        TickSummary { report, breakdown: self.breakdown, type_mix: self.type_mix }
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Admit `count` arrivals with types drawn from the arrival mix of the
    /// last [`ParkView`]; overflow is truncated.
    pub fn add_guests(&mut self, count: u32) -> AddOutcome {
        let outcome = self.engine.admit(count);
        self.tally.arrivals += outcome.added;
        self.tally.rejected += outcome.rejected;
        self.refresh();
        outcome
    }

    /// Cull up to `count` guests.  Returns how many were removed.
    pub fn force_remove_guests(&mut self, count: u32, preference: RemovalPreference) -> u32 {
        let removed = self.engine.force_remove_guests(count, preference);
        self.tally.removed += removed;
        self.refresh();
        removed
    }

    /// Arrival mix for [`add_guests`](Self::add_guests) until the next tick
    /// supplies one.
    pub fn set_arrival_mix(&mut self, mix: GuestTypeMix) {
        self.engine.set_arrival_mix(mix);
    }

    /// Call after any build, demolish or upgrade.
    pub fn mark_buildings_dirty(&mut self) {
        self.engine.mark_buildings_dirty();
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    pub fn breakdown(&self) -> GuestBreakdown {
        self.breakdown
    }

    /// Current type mix.  While the park is empty this is the last non-empty
    /// mix (uniform before the first guest).
    pub fn type_mix(&self) -> GuestTypeMix {
        self.type_mix
    }

    pub fn guest_count(&self) -> usize {
        self.engine.pool().active_count()
    }

    /// Guests assigned to `slot` as of the last tick.
    ///
    /// # Errors
    ///
    /// [`BridgeError::InvalidSlotIndex`] if `slot` is outside the slot table
    /// seen by the last tick.
    pub fn occupancy(&self, slot: SlotId) -> BridgeResult<u32> {
        self.engine.occupancy_at(slot).ok_or(BridgeError::InvalidSlotIndex {
            slot,
            slot_count: self.engine.occupancy().len(),
        })
    }

    /// Aggregates to persist.
    pub fn save(&self) -> GuestAggregates {
        GuestAggregates {
            breakdown: self.breakdown,
            type_mix:  self.type_mix,
            clock:     self.engine.clock().clone(),
        }
    }

    /// Return and reset the running totals.
    pub fn take_day_tally(&mut self) -> DayTally {
        std::mem::take(&mut self.tally)
    }

    pub fn day_tally(&self) -> &DayTally {
        &self.tally
    }

    fn refresh(&mut self) {
        let pool = self.engine.pool();
        self.breakdown = GuestBreakdown::from(pool.mood_counts());
        if let Some(mix) = GuestTypeMix::from_counts(&pool.type_counts()) {
            self.type_mix = mix;
        }
    }
}
