//! The `Engine` struct and its tick loop.

use park_building::{BuildingCatalog, BuildingContextCache, SlotTable, select_building};
use park_core::{
    GuestBreakdown, GuestId, GuestMood, GuestState, GuestType, GuestTypeMix, RandomSource, SimClock,
    SimConfig, SimRng, SlotId, Tick,
};
use park_guest::GuestPool;

use crate::{ParkSnapshot, SimError, SimObserver, SimResult, TickReport};

// ── Host-facing value types ───────────────────────────────────────────────────

/// Result of an arrival batch.  `added + rejected` equals the requested count.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddOutcome {
    pub added:    u32,
    /// Arrivals dropped because the pool was full.
    pub rejected: u32,
}

/// Which guests `force_remove_guests` culls first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RemovalPreference {
    /// Unhappy, then neutral, then happy; oldest first within a mood.
    #[default]
    UnhappyFirst,
    /// Strictly by arrival order.
    OldestFirst,
}

/// Cull order rank: lower goes first.
#[inline]
fn unhappy_first_rank(mood: GuestMood) -> u8 {
    match mood {
        GuestMood::Unhappy => 0,
        GuestMood::Neutral => 1,
        GuestMood::Happy => 2,
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// The guest simulation.
///
/// `Engine<R>` owns every piece of mutable simulation state: the guest pool,
/// the building context cache, the per-slot occupancy counters, the clock,
/// the random source and the time-slicing cursor.  One call to
/// [`tick`](Self::tick) advances it by one host tick:
///
/// 1. **Cache**: rebuild the building contexts if dirty, then reconcile
///    occupancy against the new contexts.
/// 2. **Step**: walk active guests in ascending index order (or the next
///    batches of them when time slicing is active) and advance each through
///    its state machine.
/// 3. **Mood**: drift each stepped guest's satisfaction toward the snapshot's
///    appeal and reclassify its mood.
/// 4. **Rollup**: drain spend into the tick's income, tally and remove
///    departing guests.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine<R: RandomSource = SimRng> {
    config: SimConfig,
    clock:  SimClock,

    /// Guest storage.  Read-only outside the engine.
    pool: GuestPool,

    /// Slot-indexed building contexts.
    cache: BuildingContextCache,

    /// Guests assigned to each slot (`Traveling` or `AtBuilding`).  Same
    /// length as the cache.
    occupancy: Vec<u32>,

    rng: R,

    /// Distribution [`admit`](Engine::admit) draws types from; replaced by
    /// every tick's snapshot.
    arrival_mix: GuestTypeMix,

    /// Pool index the next time-sliced pass resumes from.
    cursor: usize,
}

impl<R: RandomSource> Engine<R> {
    pub(crate) fn from_parts(config: SimConfig, rng: R) -> Self {
        Self {
            pool: GuestPool::new(config.pool_capacity),
            config,
            clock: SimClock::new(),
            cache: BuildingContextCache::new(),
            occupancy: Vec::new(),
            rng,
            arrival_mix: GuestTypeMix::uniform(),
            cursor: 0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Tick about to be processed.
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn pool(&self) -> &GuestPool {
        &self.pool
    }

    pub fn cache(&self) -> &BuildingContextCache {
        &self.cache
    }

    /// Per-slot occupancy as of the last tick.
    pub fn occupancy(&self) -> &[u32] {
        &self.occupancy
    }

    /// Occupancy of one slot, `None` past the known slots.
    pub fn occupancy_at(&self, slot: SlotId) -> Option<u32> {
        self.occupancy.get(slot.index()).copied()
    }

    /// Pool index the next time-sliced pass starts at.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the clock, e.g. to a saved position before [`reseed`](Self::reseed).
    /// Guests already in the pool keep their drift timestamps; a clock moved
    /// backwards simply pauses their drift until it catches up.
    pub fn set_clock(&mut self, clock: SimClock) {
        self.clock = clock;
    }

    /// Mix from the last tick's snapshot (uniform before the first tick).
    pub fn arrival_mix(&self) -> &GuestTypeMix {
        &self.arrival_mix
    }

    /// Override the arrival mix until the next tick's snapshot.
    pub fn set_arrival_mix(&mut self, mix: GuestTypeMix) {
        self.arrival_mix = mix;
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Replace the tunables.  The pool is allocated once, so the capacity
    /// must stay the same.
    pub fn set_config(&mut self, config: SimConfig) -> SimResult<()> {
        config.validate()?;
        if config.pool_capacity != self.config.pool_capacity {
            return Err(SimError::Config(format!(
                "pool_capacity is fixed at {} for this engine (got {})",
                self.config.pool_capacity, config.pool_capacity
            )));
        }
        self.config = config;
        Ok(())
    }

    // ── Host operations ───────────────────────────────────────────────────

    /// Invalidate the building cache; the next tick rebuilds it.
    pub fn mark_buildings_dirty(&mut self) {
        self.cache.mark_dirty();
    }

    /// Admit up to `count` new guests with types drawn from the current
    /// [`arrival_mix`](Self::arrival_mix).
    pub fn admit(&mut self, count: u32) -> AddOutcome {
        let mix = self.arrival_mix;
        self.add_guests(count, &mix)
    }

    /// Admit up to `count` new guests with types drawn from `mix`.
    ///
    /// Arrivals beyond the pool's free rows are dropped and reported as
    /// `rejected`; this never fails.
    pub fn add_guests(&mut self, count: u32, mix: &GuestTypeMix) -> AddOutcome {
        let satisfaction = self.config.mood.initial_satisfaction;
        let mood = self.config.mood.classify(satisfaction);
        let now_day = self.clock.elapsed_days;

        let mut added = 0;
        while added < count && !self.pool.is_full() {
            let guest_type = mix.sample(&mut self.rng);
            if self.pool.add(guest_type, satisfaction, mood, now_day).is_err() {
                break;
            }
            added += 1;
        }

        let rejected = count - added;
        if rejected > 0 {
            tracing::warn!(
                requested = count,
                added,
                rejected,
                capacity = self.pool.capacity(),
                "guest pool full; arrivals dropped"
            );
        }
        AddOutcome { added, rejected }
    }

    /// Remove up to `count` guests in `preference` order, releasing any
    /// building they occupy.  Returns how many were removed.
    pub fn force_remove_guests(&mut self, count: u32, preference: RemovalPreference) -> u32 {
        if count == 0 || self.pool.is_empty() {
            return 0;
        }
        let mut victims: Vec<GuestId> = self.pool.active_ids().collect();
        match preference {
            RemovalPreference::UnhappyFirst => victims.sort_by_key(|g| {
                let i = g.index();
                (unhappy_first_rank(self.pool.mood[i]), self.pool.arrival_seq[i])
            }),
            RemovalPreference::OldestFirst => victims.sort_by_key(|g| self.pool.arrival_seq[g.index()]),
        }

        let mut removed = 0;
        for guest in victims.into_iter().take(count as usize) {
            self.release_building(guest.index());
            if self.pool.remove(guest) {
                removed += 1;
            }
        }
        removed
    }

    /// Replace the whole population with guests matching `breakdown`, types
    /// apportioned from `mix`.  Used when loading a save, which keeps only
    /// aggregates.  Every re-seeded guest starts `Idle` with a satisfaction
    /// in the middle of its mood's band.
    pub fn reseed(&mut self, breakdown: &GuestBreakdown, mix: &GuestTypeMix) -> AddOutcome {
        self.clear();
        let counts = breakdown.to_counts();
        let now_day = self.clock.elapsed_days;

        let mut outcome = AddOutcome::default();
        for mood in GuestMood::ALL {
            let satisfaction = self.config.mood.representative_satisfaction(mood);
            let per_type = mix.apportion(counts.get(mood));
            for guest_type in GuestType::ALL {
                let wanted = per_type.get(guest_type);
                // Bounded by free rows, so a huge save costs O(capacity).
                let fits = wanted.min(u32::try_from(self.pool.free_count()).unwrap_or(u32::MAX));
                for _ in 0..fits {
                    if self.pool.add(guest_type, satisfaction, mood, now_day).is_err() {
                        break;
                    }
                    outcome.added += 1;
                }
                outcome.rejected = outcome.rejected.saturating_add(wanted - fits);
            }
        }

        tracing::debug!(
            happy = counts.get(GuestMood::Happy),
            neutral = counts.get(GuestMood::Neutral),
            unhappy = counts.get(GuestMood::Unhappy),
            added = outcome.added,
            rejected = outcome.rejected,
            "guest pool re-seeded from aggregates"
        );
        if outcome.rejected > 0 {
            tracing::warn!(rejected = outcome.rejected, "saved population exceeds pool capacity; truncated");
        }
        outcome
    }

    /// Remove every guest and zero occupancy.
    pub fn clear(&mut self) {
        // Descending, so the free stack hands out index 0 first again.
        for i in (0..self.pool.capacity()).rev() {
            self.pool.remove(GuestId(i as u32));
        }
        self.occupancy.iter_mut().for_each(|o| *o = 0);
        self.cursor = 0;
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the simulation by one tick covering `delta_day` simulated days.
    pub fn tick<C: BuildingCatalog + ?Sized>(
        &mut self,
        delta_day: f64,
        snapshot:  &ParkSnapshot,
        slots:     &SlotTable,
        catalog:   &C,
    ) -> TickReport {
        let now = self.clock.current_tick;
        self.clock.advance(delta_day);

        let mut report = TickReport { tick: now, ..TickReport::default() };
        report.delta_day = if delta_day.is_finite() && delta_day > 0.0 { delta_day } else { 0.0 };

        if self.cache.rebuild_if_dirty(slots, catalog).is_some() {
            report.stale_releases += self.reconcile();
        }

        self.arrival_mix = snapshot.arrival_mix;
        let target = snapshot.target_satisfaction();
        let now_day = self.clock.elapsed_days;
        let capacity = self.pool.capacity();

        if self.pool.active_count() <= self.config.slicing.threshold {
            for i in 0..capacity {
                if self.pool.is_active(GuestId(i as u32)) {
                    self.step_guest(i, target, now_day, &mut report);
                }
            }
            self.cursor = 0;
            report.sweep_complete = true;
        } else {
            let budget = self.config.slicing.batch_size * self.config.slicing.max_batches_per_tick;
            let mut stepped = 0;
            let mut i = self.cursor.min(capacity);
            while stepped < budget && i < capacity {
                if self.pool.is_active(GuestId(i as u32)) {
                    self.step_guest(i, target, now_day, &mut report);
                    stepped += 1;
                }
                i += 1;
            }
            if i >= capacity {
                tracing::debug!(tick = %now, "time-sliced sweep complete; cursor wrapped");
                self.cursor = 0;
                report.sweep_complete = true;
            } else {
                self.cursor = i;
            }
        }

        report.active_after = self.pool.active_count() as u32;
        report
    }

    /// [`tick`](Self::tick) with observer callbacks around it.
    pub fn tick_observed<C: BuildingCatalog + ?Sized, O: SimObserver + ?Sized>(
        &mut self,
        delta_day: f64,
        snapshot:  &ParkSnapshot,
        slots:     &SlotTable,
        catalog:   &C,
        observer:  &mut O,
    ) -> TickReport {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let report = self.tick(delta_day, snapshot, slots, catalog);
        observer.on_tick_end(now, &report);
        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.pool);
        }
        report
    }

    /// Run exactly `n` ticks of `delta_day` each with the same inputs and
    /// return their merged report.  Used for fixed-step catch-up.
    pub fn run_ticks<C: BuildingCatalog + ?Sized, O: SimObserver + ?Sized>(
        &mut self,
        n:         u64,
        delta_day: f64,
        snapshot:  &ParkSnapshot,
        slots:     &SlotTable,
        catalog:   &C,
        observer:  &mut O,
    ) -> TickReport {
        let mut total = TickReport { tick: self.clock.current_tick, ..TickReport::default() };
        for _ in 0..n {
            let report = self.tick_observed(delta_day, snapshot, slots, catalog, observer);
            total.merge(&report);
        }
        observer.on_run_end(self.clock.current_tick);
        total
    }

    // ── Per-guest state machine ───────────────────────────────────────────

    fn step_guest(&mut self, i: usize, target: f64, now_day: f64, report: &mut TickReport) {
        report.processed += 1;
        let mood = self.pool.mood[i];

        match self.pool.state[i] {
            GuestState::Idle => self.choose_destination(i, mood, report),
            GuestState::Traveling => self.step_traveling(i, mood, report),
            GuestState::AtBuilding => self.step_at_building(i, mood, report),
            // Only set inside this function; handled below.
            GuestState::Leaving => {}
        }

        if self.pool.state[i] != GuestState::Leaving {
            self.drift_mood(i, target, now_day);
        }

        let guest = GuestId(i as u32);
        report.income += self.pool.take_spend(guest);

        if self.pool.state[i] == GuestState::Leaving {
            report.departures.add(mood, 1);
            self.pool.remove(guest);
        }
    }

    fn choose_destination(&mut self, i: usize, mood: GuestMood, report: &mut TickReport) {
        let picked = select_building(
            self.pool.guest_type[i],
            self.cache.contexts(),
            &self.occupancy,
            self.pool.previous_building[i],
            &self.config.selection,
            &mut self.rng,
        );
        let Some(slot) = picked else {
            return;
        };

        self.occupancy[slot.index()] += 1;
        self.pool.current_building[i] = slot;
        self.pool.ticks_at_building[i] = 0;
        report.visits_started += 1;

        let travel = self.config.visits.travel_ticks;
        if travel > 0 {
            self.pool.state[i] = GuestState::Traveling;
            self.pool.dwell_remaining[i] = travel;
        } else {
            self.pool.state[i] = GuestState::AtBuilding;
            self.pool.dwell_remaining[i] = self.config.visits.dwell_ticks(mood);
        }
    }

    fn step_traveling(&mut self, i: usize, mood: GuestMood, report: &mut TickReport) {
        if self.cache.resolve(self.pool.current_building[i]).is_err() {
            self.release_stale(i, report);
            return;
        }
        let remaining = self.pool.dwell_remaining[i].saturating_sub(1);
        self.pool.dwell_remaining[i] = remaining;
        if remaining == 0 {
            self.pool.state[i] = GuestState::AtBuilding;
            self.pool.dwell_remaining[i] = self.config.visits.dwell_ticks(mood);
            self.pool.ticks_at_building[i] = 0;
        }
    }

    fn step_at_building(&mut self, i: usize, mood: GuestMood, report: &mut TickReport) {
        let slot = self.pool.current_building[i];
        let ctx = match self.cache.resolve(slot) {
            Ok(ctx) => *ctx,
            Err(_) => {
                self.release_stale(i, report);
                return;
            }
        };

        self.pool.ticks_at_building[i] += 1;
        let remaining = self.pool.dwell_remaining[i].saturating_sub(1);
        self.pool.dwell_remaining[i] = remaining;

        if ctx.is_shop && self.rng.gen_bool(self.config.visits.purchase_probability(mood)) {
            self.pool.spend_accumulator[i] += ctx.income_per_guest;
            report.purchases += 1;
        }

        if remaining == 0 {
            self.release_building(i);
            self.pool.previous_building[i] = slot;
            let departing = self.rng.gen_bool(self.config.visits.departure_probability[mood.index()]);
            self.pool.state[i] = if departing { GuestState::Leaving } else { GuestState::Idle };
        }
    }

    /// Drift satisfaction toward `target` for the days since this guest was
    /// last stepped, then reclassify.
    fn drift_mood(&mut self, i: usize, target: f64, now_day: f64) {
        let elapsed = now_day - self.pool.last_update_day[i];
        let step = self.config.mood.drift_step(elapsed);
        if step > 0.0 {
            let current = self.pool.satisfaction[i] as f64;
            let next = (current + (target - current) * step).clamp(0.0, 1.0) as f32;
            self.pool.satisfaction[i] = next;
            self.pool.mood[i] = self.config.mood.classify(next);
        }
        self.pool.last_update_day[i] = now_day;
    }

    // ── Occupancy bookkeeping ─────────────────────────────────────────────

    /// Free the guest's occupancy and clear its assignment.  State is left
    /// to the caller.
    fn release_building(&mut self, i: usize) {
        let slot = self.pool.current_building[i];
        if let Some(o) = slot.get().and_then(|s| self.occupancy.get_mut(s.index())) {
            *o = o.saturating_sub(1);
        }
        self.pool.current_building[i] = SlotId::NONE;
        self.pool.dwell_remaining[i] = 0;
        self.pool.ticks_at_building[i] = 0;
    }

    fn release_stale(&mut self, i: usize, report: &mut TickReport) {
        tracing::warn!(
            guest = %GuestId(i as u32),
            slot = %self.pool.current_building[i],
            "building no longer resolves; guest released"
        );
        self.release_building(i);
        self.pool.state[i] = GuestState::Idle;
        report.stale_releases += 1;
    }

    /// Recount occupancy from scratch against freshly rebuilt contexts.
    ///
    /// Guests at slots whose building changed or vanished are released to
    /// `Idle`; guests beyond a reduced capacity are evicted in descending
    /// index order, so lower indices keep their places.  Returns the number
    /// of guests released.
    fn reconcile(&mut self) -> u32 {
        self.occupancy.clear();
        self.occupancy.resize(self.cache.len(), 0);

        let mut released = 0;
        for i in 0..self.pool.capacity() {
            let guest = GuestId(i as u32);
            if !self.pool.is_active(guest) {
                continue;
            }
            let slot = self.pool.current_building[i];
            if !slot.is_some() {
                continue;
            }
            let keeps_place = !self.cache.slot_changed(slot)
                && self
                    .cache
                    .get(slot)
                    .is_some_and(|ctx| ctx.has_room(self.occupancy[slot.index()]));
            if keeps_place {
                self.occupancy[slot.index()] += 1;
            } else {
                self.pool.current_building[i] = SlotId::NONE;
                self.pool.dwell_remaining[i] = 0;
                self.pool.ticks_at_building[i] = 0;
                self.pool.state[i] = GuestState::Idle;
                released += 1;
            }
        }

        if released > 0 {
            tracing::warn!(released, "guests evicted after building change");
        }
        released
    }
}
