//! Unit tests for park-sim.

use park_building::{BuildingAttributes, SlotTable, StaticCatalog};
use park_core::{
    BuildingId, GuestBreakdown, GuestId, GuestMood, GuestState, GuestType, GuestTypeMix,
    ScriptedRng, SimConfig, SlotId, Tick, TypeAffinity,
};

use crate::{Engine, EngineBuilder, NoopObserver, ParkSnapshot};

// ── Helpers ───────────────────────────────────────────────────────────────────

const DAY: f64 = 1.0 / 60.0;

fn engine(config: SimConfig) -> Engine {
    EngineBuilder::new(config).build().unwrap()
}

fn scripted(config: SimConfig, value: f64) -> Engine<ScriptedRng> {
    EngineBuilder::new(config).rng(ScriptedRng::constant(value)).build().unwrap()
}

fn thrills_only() -> GuestTypeMix {
    GuestTypeMix::from_weights([1.0, 0.0, 0.0, 0.0]).unwrap()
}

/// One slot holding building 1 with the given attributes.
fn one_slot(attrs: BuildingAttributes) -> (SlotTable, StaticCatalog) {
    let slots = SlotTable::from_slots(vec![Some(BuildingId(1))]);
    let catalog = StaticCatalog::new().with(BuildingId(1), attrs);
    (slots, catalog)
}

fn coaster(capacity: u32) -> BuildingAttributes {
    BuildingAttributes::attraction(capacity, TypeAffinity::only(GuestType::Thrills, 1.0))
}

fn snapshot() -> ParkSnapshot {
    ParkSnapshot::default()
}

/// Guests currently assigned to `slot`, counted from the pool.
fn assigned_to<R: park_core::RandomSource>(engine: &Engine<R>, slot: SlotId) -> u32 {
    engine
        .pool()
        .active_ids()
        .filter(|g| engine.pool().current_building[g.index()] == slot)
        .count() as u32
}

// ── Builder / config ──────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn builds_with_defaults() {
        let e = engine(SimConfig::with_capacity(8));
        assert_eq!(e.pool().capacity(), 8);
        assert!(e.pool().is_empty());
        assert!(e.cache().is_dirty());
        assert_eq!(e.current_tick(), Tick(0));
    }

    #[test]
    fn invalid_config_rejected() {
        let result = EngineBuilder::new(SimConfig::with_capacity(0)).build();
        assert!(matches!(result, Err(SimError::Park(_))));
    }

    #[test]
    fn set_config_keeps_capacity_fixed() {
        let mut e = engine(SimConfig::with_capacity(8));
        assert!(matches!(e.set_config(SimConfig::with_capacity(9)), Err(SimError::Config(_))));

        let mut tuned = SimConfig::with_capacity(8);
        tuned.visits.base_dwell_ticks = 2;
        e.set_config(tuned).unwrap();
        assert_eq!(e.config().visits.base_dwell_ticks, 2);
    }
}

// ── Arrivals and removal ──────────────────────────────────────────────────────

#[cfg(test)]
mod arrivals {
    use super::*;
    use crate::{AddOutcome, RemovalPreference};

    #[test]
    fn overflow_is_truncated() {
        let mut e = engine(SimConfig::with_capacity(10));
        let outcome = e.add_guests(12, &GuestTypeMix::uniform());
        assert_eq!(outcome, AddOutcome { added: 10, rejected: 2 });
        assert_eq!(e.pool().active_count(), 10);
    }

    #[test]
    fn exhaustion_is_idempotent() {
        let mut e = engine(SimConfig::with_capacity(3));
        e.add_guests(3, &GuestTypeMix::uniform());
        for _ in 0..3 {
            assert_eq!(e.add_guests(1, &GuestTypeMix::uniform()), AddOutcome { added: 0, rejected: 1 });
        }
        assert_eq!(e.pool().active_count(), 3);
    }

    #[test]
    fn arrivals_follow_mix() {
        let mut e = engine(SimConfig::with_capacity(20));
        e.add_guests(20, &thrills_only());
        assert_eq!(e.pool().type_counts().get(GuestType::Thrills), 20);
    }

    #[test]
    fn arrivals_start_idle_with_initial_mood() {
        let mut e = engine(SimConfig::with_capacity(4));
        e.add_guests(2, &GuestTypeMix::uniform());
        let g = e.pool().get(GuestId(0)).unwrap();
        assert_eq!(g.state, GuestState::Idle);
        assert_eq!(g.mood, GuestMood::Neutral);
        assert_eq!(g.satisfaction, 0.5);
    }

    #[test]
    fn unhappy_first_culls_unhappy_then_oldest_neutral() {
        let mut e = engine(SimConfig::with_capacity(10));
        let breakdown = GuestBreakdown { happy: 2.0, neutral: 2.0, unhappy: 2.0 };
        e.reseed(&breakdown, &GuestTypeMix::uniform());

        // Re-seeded happy → 0,1; neutral → 2,3; unhappy → 4,5.
        assert_eq!(e.force_remove_guests(3, RemovalPreference::UnhappyFirst), 3);
        let counts = e.pool().mood_counts();
        assert_eq!(counts.get(GuestMood::Unhappy), 0);
        assert_eq!(counts.get(GuestMood::Neutral), 1);
        assert_eq!(counts.get(GuestMood::Happy), 2);
        assert!(!e.pool().is_active(GuestId(2)));
        assert!(e.pool().is_active(GuestId(3)));
    }

    #[test]
    fn oldest_first_culls_by_arrival() {
        let mut e = engine(SimConfig::with_capacity(10));
        e.add_guests(5, &GuestTypeMix::uniform());
        assert_eq!(e.force_remove_guests(2, RemovalPreference::OldestFirst), 2);
        assert!(!e.pool().is_active(GuestId(0)));
        assert!(!e.pool().is_active(GuestId(1)));
        assert_eq!(e.pool().active_count(), 3);
    }

    #[test]
    fn force_remove_more_than_present() {
        let mut e = engine(SimConfig::with_capacity(10));
        e.add_guests(2, &GuestTypeMix::uniform());
        assert_eq!(e.force_remove_guests(5, RemovalPreference::OldestFirst), 2);
        assert!(e.pool().is_empty());
    }

    #[test]
    fn force_remove_releases_occupancy() {
        let (slots, catalog) = one_slot(coaster(5));
        let mut e = engine(SimConfig::with_capacity(10));
        e.add_guests(3, &thrills_only());
        e.tick(DAY, &snapshot(), &slots, &catalog);
        assert_eq!(e.occupancy(), &[3]);

        e.force_remove_guests(2, RemovalPreference::OldestFirst);
        assert_eq!(e.occupancy(), &[1]);
    }

    #[test]
    fn admit_draws_from_last_snapshot_mix() {
        let (slots, catalog) = one_slot(coaster(5));
        let mut e = engine(SimConfig::with_capacity(10));
        assert_eq!(e.arrival_mix(), &GuestTypeMix::uniform());

        e.tick(DAY, &ParkSnapshot::new(50.0, thrills_only()), &slots, &catalog);
        assert_eq!(e.admit(6), AddOutcome { added: 6, rejected: 0 });
        assert_eq!(e.pool().type_counts().get(GuestType::Thrills), 6);
    }
}

// ── Re-seeding ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reseed {
    use super::*;

    #[test]
    fn reseed_replaces_population() {
        let mut e = engine(SimConfig::with_capacity(20));
        e.add_guests(10, &GuestTypeMix::uniform());
        let breakdown = GuestBreakdown { happy: 1.0, neutral: 2.0, unhappy: 3.0 };
        let outcome = e.reseed(&breakdown, &thrills_only());

        assert_eq!(outcome.added, 6);
        assert_eq!(e.pool().active_count(), 6);
        let counts = e.pool().mood_counts();
        assert_eq!(counts.0, [1, 2, 3]);
        assert_eq!(e.pool().type_counts().get(GuestType::Thrills), 6);
    }

    #[test]
    fn reseed_truncates_to_capacity() {
        let mut e = engine(SimConfig::with_capacity(4));
        let outcome = e.reseed(&GuestBreakdown { happy: 6.0, neutral: 0.0, unhappy: 0.0 }, &GuestTypeMix::uniform());
        assert_eq!(outcome.added, 4);
        assert_eq!(outcome.rejected, 2);
    }

    #[test]
    fn reseed_huge_save_saturates_rejections() {
        let mut e = engine(SimConfig::with_capacity(10));
        let breakdown = GuestBreakdown { happy: 3e9, neutral: 3e9, unhappy: 0.0 };
        let outcome = e.reseed(&breakdown, &GuestTypeMix::uniform());
        assert_eq!(outcome.added, 10);
        assert_eq!(outcome.rejected, u32::MAX);
        assert_eq!(e.pool().mood_counts().0, [10, 0, 0]);
    }

    #[test]
    fn reseed_hands_out_low_indices_first() {
        let mut e = engine(SimConfig::with_capacity(8));
        e.add_guests(8, &GuestTypeMix::uniform());
        e.reseed(&GuestBreakdown { happy: 2.0, neutral: 0.0, unhappy: 0.0 }, &GuestTypeMix::uniform());
        let ids: Vec<_> = e.pool().active_ids().collect();
        assert_eq!(ids, vec![GuestId(0), GuestId(1)]);
    }
}

// ── Tick scenarios ────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn basic_flow() {
        let (slots, catalog) = one_slot(coaster(5));
        let mut e = engine(SimConfig::with_capacity(10));
        e.add_guests(5, &thrills_only());

        let report = e.tick(DAY, &snapshot(), &slots, &catalog);

        assert_eq!(report.visits_started, 5);
        assert_eq!(e.occupancy(), &[5]);
        for g in e.pool().active_ids() {
            let view = e.pool().get(g).unwrap();
            assert_eq!(view.state, GuestState::AtBuilding);
            assert_eq!(view.current_building, SlotId(0));
        }
    }

    #[test]
    fn full_building_leaves_guests_idle() {
        let (slots, catalog) = one_slot(coaster(2));
        let mut e = engine(SimConfig::with_capacity(10));
        e.add_guests(5, &thrills_only());
        e.tick(DAY, &snapshot(), &slots, &catalog);

        assert_eq!(e.occupancy(), &[2]);
        let idle = e.pool().active_ids().filter(|g| e.pool().state[g.index()] == GuestState::Idle).count();
        assert_eq!(idle, 3);
    }

    #[test]
    fn departure_tally() {
        let mut config = SimConfig::with_capacity(10);
        config.visits.base_dwell_ticks = 1;
        config.visits.departure_probability = [0.0, 0.0, 1.0];
        config.mood.drift_rate_per_day = 0.0;
        let (slots, catalog) = one_slot(BuildingAttributes::attraction(10, TypeAffinity::ZERO));

        // Every roll draws 0.0: all selections hit slot 0, every p > 0 succeeds.
        let mut e = scripted(config, 0.0);
        e.reseed(&GuestBreakdown { happy: 2.0, neutral: 0.0, unhappy: 3.0 }, &GuestTypeMix::uniform());

        let first = e.tick(DAY, &snapshot(), &slots, &catalog);
        assert_eq!(first.visits_started, 5);
        assert_eq!(first.departures.total(), 0);

        let second = e.tick(DAY, &snapshot(), &slots, &catalog);
        assert_eq!(second.departures.get(GuestMood::Unhappy), 3);
        assert_eq!(second.departures.total(), 3);
        assert_eq!(e.pool().active_count(), 2);
        assert_eq!(e.pool().mood_counts().0, [2, 0, 0]);
        assert_eq!(e.occupancy(), &[0]);
    }

    #[test]
    fn visit_ends_and_sets_previous() {
        let mut config = SimConfig::with_capacity(4);
        config.visits.base_dwell_ticks = 2;
        config.visits.departure_probability = [0.0; 3];
        let (slots, catalog) = one_slot(coaster(4));
        let mut e = engine(config);
        e.add_guests(1, &thrills_only());

        e.tick(DAY, &snapshot(), &slots, &catalog); // Idle → AtBuilding (dwell 2)
        e.tick(DAY, &snapshot(), &slots, &catalog); // dwell 1
        assert_eq!(e.pool().state[0], GuestState::AtBuilding);
        assert_eq!(e.pool().ticks_at_building[0], 1);
        e.tick(DAY, &snapshot(), &slots, &catalog); // dwell 0 → Idle

        let g = e.pool().get(GuestId(0)).unwrap();
        assert_eq!(g.state, GuestState::Idle);
        assert_eq!(g.current_building, SlotId::NONE);
        assert_eq!(g.previous_building, SlotId(0));
        assert_eq!(e.occupancy(), &[0]);
    }

    #[test]
    fn unhappy_guests_dwell_less() {
        let config = SimConfig::with_capacity(4);
        let visits = &config.visits;
        assert!(visits.dwell_ticks(GuestMood::Unhappy) < visits.dwell_ticks(GuestMood::Neutral));
        assert!(visits.dwell_ticks(GuestMood::Happy) >= visits.dwell_ticks(GuestMood::Neutral));
    }

    #[test]
    fn travel_delays_arrival() {
        let mut config = SimConfig::with_capacity(4);
        config.visits.travel_ticks = 2;
        let (slots, catalog) = one_slot(coaster(4));
        let mut e = engine(config);
        e.add_guests(1, &thrills_only());

        e.tick(DAY, &snapshot(), &slots, &catalog);
        assert_eq!(e.pool().state[0], GuestState::Traveling);
        assert_eq!(e.occupancy(), &[1]);
        e.tick(DAY, &snapshot(), &slots, &catalog);
        assert_eq!(e.pool().state[0], GuestState::Traveling);
        e.tick(DAY, &snapshot(), &slots, &catalog);
        assert_eq!(e.pool().state[0], GuestState::AtBuilding);
    }

    #[test]
    fn shop_purchases_become_income() {
        let (slots, catalog) = one_slot(BuildingAttributes::shop(5, TypeAffinity::ZERO, 4.0));
        let mut e = scripted(SimConfig::with_capacity(4), 0.0);
        e.add_guests(2, &GuestTypeMix::uniform());

        let first = e.tick(DAY, &snapshot(), &slots, &catalog);
        assert_eq!(first.income, 0.0);
        let second = e.tick(DAY, &snapshot(), &slots, &catalog);
        assert_eq!(second.purchases, 2);
        assert_eq!(second.income, 8.0);
        // Accumulators are drained within the tick.
        assert!(e.pool().spend_accumulator.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn failed_purchase_rolls_earn_nothing() {
        let (slots, catalog) = one_slot(BuildingAttributes::shop(5, TypeAffinity::ZERO, 4.0));
        let mut e = scripted(SimConfig::with_capacity(4), 0.9);
        e.add_guests(2, &GuestTypeMix::uniform());
        e.tick(DAY, &snapshot(), &slots, &catalog);
        let report = e.tick(DAY, &snapshot(), &slots, &catalog);
        assert_eq!(report.purchases, 0);
        assert_eq!(report.income, 0.0);
    }

    #[test]
    fn mood_drifts_toward_appeal() {
        let mut e = engine(SimConfig::with_capacity(10));
        e.add_guests(10, &GuestTypeMix::uniform());
        let delighted = ParkSnapshot { appeal: 100.0, ..ParkSnapshot::default() };

        // No buildings: guests stay idle and only their mood changes.
        let empty = SlotTable::new(0);
        e.tick(1.0, &delighted, &empty, &StaticCatalog::new());

        for g in e.pool().active_ids() {
            assert!((e.pool().satisfaction[g.index()] - 0.75).abs() < 1e-6);
        }
        assert_eq!(e.pool().mood_counts().get(GuestMood::Happy), 10);
    }

    #[test]
    fn low_appeal_sours_mood() {
        let mut e = engine(SimConfig::with_capacity(5));
        e.add_guests(5, &GuestTypeMix::uniform());
        let dismal = ParkSnapshot { appeal: 0.0, ..ParkSnapshot::default() };
        let empty = SlotTable::new(0);
        e.tick(1.0, &dismal, &empty, &StaticCatalog::new());
        assert_eq!(e.pool().mood_counts().get(GuestMood::Unhappy), 5);
    }

    #[test]
    fn zero_delta_leaves_mood_unchanged() {
        let mut e = engine(SimConfig::with_capacity(5));
        e.add_guests(5, &GuestTypeMix::uniform());
        let delighted = ParkSnapshot { appeal: 100.0, ..ParkSnapshot::default() };
        e.tick(0.0, &delighted, &SlotTable::new(0), &StaticCatalog::new());
        assert_eq!(e.pool().mood_counts().get(GuestMood::Neutral), 5);
    }
}

// ── Building changes ──────────────────────────────────────────────────────────

#[cfg(test)]
mod building_changes {
    use super::*;

    #[test]
    fn demolished_building_releases_guests() {
        let (mut slots, catalog) = one_slot(coaster(5));
        let mut e = engine(SimConfig::with_capacity(10));
        e.add_guests(4, &thrills_only());
        e.tick(DAY, &snapshot(), &slots, &catalog);
        assert_eq!(e.occupancy(), &[4]);

        slots.clear(SlotId(0)).unwrap();
        e.mark_buildings_dirty();
        let report = e.tick(DAY, &snapshot(), &slots, &catalog);

        assert_eq!(report.stale_releases, 4);
        assert_eq!(e.occupancy(), &[0]);
        assert!(e.pool().active_ids().all(|g| e.pool().state[g.index()] == GuestState::Idle));
        assert_eq!(report.visits_started, 0);
    }

    #[test]
    fn replaced_building_releases_guests() {
        let (mut slots, mut catalog) = one_slot(coaster(5));
        catalog.insert(BuildingId(2), coaster(5));
        let mut e = engine(SimConfig::with_capacity(10));
        e.add_guests(3, &thrills_only());
        e.tick(DAY, &snapshot(), &slots, &catalog);

        slots.place(SlotId(0), BuildingId(2)).unwrap();
        e.mark_buildings_dirty();
        let report = e.tick(DAY, &snapshot(), &slots, &catalog);

        // Released during reconciliation, then free to pick the new building.
        assert_eq!(report.stale_releases, 3);
        assert_eq!(report.visits_started, 3);
        assert_eq!(e.occupancy(), &[3]);
    }

    #[test]
    fn capacity_cut_evicts_highest_indices() {
        let (slots, mut catalog) = one_slot(coaster(5));
        let mut e = engine(SimConfig::with_capacity(10));
        e.add_guests(5, &thrills_only());
        e.tick(DAY, &snapshot(), &slots, &catalog);

        catalog.insert(BuildingId(1), coaster(2));
        e.mark_buildings_dirty();
        let report = e.tick(DAY, &snapshot(), &slots, &catalog);

        assert_eq!(report.stale_releases, 3);
        assert_eq!(e.occupancy(), &[2]);
        assert_eq!(e.pool().current_building[0], SlotId(0));
        assert_eq!(e.pool().current_building[1], SlotId(0));
        for i in 2..5 {
            assert_eq!(e.pool().state[i], GuestState::Idle);
        }
    }

    #[test]
    fn unchanged_rebuild_keeps_everyone() {
        let (slots, catalog) = one_slot(coaster(5));
        let mut e = engine(SimConfig::with_capacity(10));
        e.add_guests(5, &thrills_only());
        e.tick(DAY, &snapshot(), &slots, &catalog);

        e.mark_buildings_dirty();
        let report = e.tick(DAY, &snapshot(), &slots, &catalog);
        assert_eq!(report.stale_releases, 0);
        assert_eq!(e.occupancy(), &[5]);
    }

    #[test]
    fn capacity_respected_across_ticks() {
        let slots = SlotTable::from_slots(vec![Some(BuildingId(1)), Some(BuildingId(2))]);
        let catalog = StaticCatalog::new()
            .with(BuildingId(1), coaster(3))
            .with(BuildingId(2), BuildingAttributes::attraction(2, TypeAffinity::uniform(0.5)));
        let mut e = engine(SimConfig::with_capacity(30));
        e.add_guests(20, &GuestTypeMix::uniform());

        for _ in 0..50 {
            e.tick(DAY, &snapshot(), &slots, &catalog);
            assert!(e.occupancy()[0] <= 3);
            assert!(e.occupancy()[1] <= 2);
            assert_eq!(e.occupancy()[0], assigned_to(&e, SlotId(0)));
            assert_eq!(e.occupancy()[1], assigned_to(&e, SlotId(1)));
        }
    }
}

// ── Time slicing ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod slicing {
    use super::*;

    fn sliced_config() -> SimConfig {
        let mut config = SimConfig::with_capacity(40);
        config.slicing.threshold = 10;
        config.slicing.batch_size = 5;
        config.slicing.max_batches_per_tick = 1;
        config
    }

    #[test]
    fn small_population_is_processed_every_tick() {
        let mut e = engine(SimConfig::with_capacity(40));
        e.add_guests(30, &GuestTypeMix::uniform());
        let report = e.tick(DAY, &snapshot(), &SlotTable::new(0), &StaticCatalog::new());
        assert_eq!(report.processed, 30);
        assert!(report.sweep_complete);
        assert_eq!(e.cursor(), 0);
    }

    #[test]
    fn large_population_is_batched() {
        let mut e = engine(sliced_config());
        e.add_guests(30, &GuestTypeMix::uniform());
        let report = e.tick(DAY, &snapshot(), &SlotTable::new(0), &StaticCatalog::new());
        assert_eq!(report.processed, 5);
        assert!(!report.sweep_complete);
        assert_eq!(e.cursor(), 5);
    }

    #[test]
    fn every_guest_is_eventually_processed() {
        let mut e = engine(sliced_config());
        e.add_guests(30, &GuestTypeMix::uniform());

        let mut processed = 0;
        let mut ticks = 0;
        loop {
            let report = e.tick(DAY, &snapshot(), &SlotTable::new(0), &StaticCatalog::new());
            processed += report.processed;
            ticks += 1;
            if report.sweep_complete {
                break;
            }
            assert!(ticks < 100, "sweep never completed");
        }
        assert_eq!(processed, 30);
        assert!(e.pool().last_update_day.iter().take(30).all(|&d| d > 0.0));
    }

    #[test]
    fn drift_uses_real_elapsed_days() {
        let mut e = engine(sliced_config());
        e.add_guests(30, &GuestTypeMix::uniform());
        let delighted = ParkSnapshot { appeal: 100.0, ..ParkSnapshot::default() };

        // Six ticks of half a day each: the last batch (indices 25..30) is
        // first stepped on tick six and must see all three days at once.
        for _ in 0..6 {
            e.tick(0.5, &delighted, &SlotTable::new(0), &StaticCatalog::new());
        }
        let expected = 0.5 + 0.5 * (1.0 - 0.5f64.powf(3.0));
        assert!((e.pool().satisfaction[29] as f64 - expected).abs() < 1e-5);
    }
}

// ── Conservation ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod conservation {
    use super::*;

    #[test]
    fn breakdown_matches_active_count() {
        let slots = SlotTable::from_slots(vec![Some(BuildingId(1)), None, Some(BuildingId(2))]);
        let catalog = StaticCatalog::new()
            .with(BuildingId(1), coaster(10))
            .with(BuildingId(2), BuildingAttributes::shop(4, TypeAffinity::uniform(0.2), 3.0));
        let mut e = engine(SimConfig { seed: 7, ..SimConfig::with_capacity(200) });

        let mut departed = 0;
        let mut added = 0;
        for t in 0..300 {
            if t % 10 == 0 {
                added += e.add_guests(15, &GuestTypeMix::uniform()).added;
            }
            let low = ParkSnapshot { appeal: 20.0, ..ParkSnapshot::default() };
            let report = e.tick(0.05, &low, &slots, &catalog);
            departed += report.departures.total();

            assert_eq!(e.pool().mood_counts().total() as usize, e.pool().active_count());
            assert!(e.pool().active_count() <= e.pool().capacity());
            assert_eq!(report.active_after as usize, e.pool().active_count());
        }
        assert_eq!((added - departed) as usize, e.pool().active_count());
        assert!(departed > 0);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::*;
    use crate::{SimObserver, TickReport};
    use park_guest::GuestPool;

    #[derive(Default)]
    struct Counter {
        starts:    usize,
        ends:      usize,
        snapshots: Vec<Tick>,
        run_end:   Option<Tick>,
        income:    f64,
    }

    impl SimObserver for Counter {
        fn on_tick_start(&mut self, _tick: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, _tick: Tick, report: &TickReport) {
            self.ends += 1;
            self.income += report.income;
        }
        fn on_snapshot(&mut self, tick: Tick, _pool: &GuestPool) {
            self.snapshots.push(tick);
        }
        fn on_run_end(&mut self, next_tick: Tick) {
            self.run_end = Some(next_tick);
        }
    }

    #[test]
    fn run_ticks_calls_hooks() {
        let config = SimConfig { snapshot_interval_ticks: 2, ..SimConfig::with_capacity(10) };
        let (slots, catalog) = one_slot(coaster(5));
        let mut e = engine(config);
        e.add_guests(5, &GuestTypeMix::uniform());

        let mut obs = Counter::default();
        let total = e.run_ticks(5, DAY, &snapshot(), &slots, &catalog, &mut obs);

        assert_eq!(obs.starts, 5);
        assert_eq!(obs.ends, 5);
        assert_eq!(obs.snapshots, vec![Tick(0), Tick(2), Tick(4)]);
        assert_eq!(obs.run_end, Some(Tick(5)));
        assert_eq!(total.tick, Tick(4));
        assert_eq!(total.income, obs.income);
        assert!((total.delta_day - 5.0 * DAY).abs() < 1e-12);
        assert_eq!(e.clock().current_tick, Tick(5));
    }

    #[test]
    fn snapshots_disabled_by_default() {
        let (slots, catalog) = one_slot(coaster(5));
        let mut e = engine(SimConfig::with_capacity(10));
        let mut obs = Counter::default();
        e.run_ticks(3, DAY, &snapshot(), &slots, &catalog, &mut obs);
        assert!(obs.snapshots.is_empty());
    }

    #[test]
    fn noop_observer_runs() {
        let (slots, catalog) = one_slot(coaster(5));
        let mut e = engine(SimConfig::with_capacity(10));
        e.add_guests(2, &thrills_only());
        let total = e.run_ticks(2, DAY, &snapshot(), &slots, &catalog, &mut NoopObserver);
        assert_eq!(total.visits_started, 2);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;
    use crate::RemovalPreference;

    #[derive(Clone, Debug)]
    enum Op {
        Add(u8),
        Remove(u8),
        Tick,
        Resize,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..20).prop_map(Op::Add),
            (0u8..10).prop_map(Op::Remove),
            Just(Op::Tick),
            Just(Op::Tick),
            Just(Op::Resize),
        ]
    }

    proptest! {
        #[test]
        fn conservation_and_capacity_hold(seed in 0u64..1_000, ops in prop::collection::vec(op(), 1..80)) {
            let slots = SlotTable::from_slots(vec![Some(BuildingId(1)), Some(BuildingId(2))]);
            let mut catalog = StaticCatalog::new()
                .with(BuildingId(1), coaster(4))
                .with(BuildingId(2), BuildingAttributes::shop(3, TypeAffinity::uniform(0.4), 2.0));
            let mut e = engine(SimConfig { seed, ..SimConfig::with_capacity(40) });
            let mut big = true;

            for op in ops {
                match op {
                    Op::Add(n) => {
                        let outcome = e.add_guests(n as u32, &GuestTypeMix::uniform());
                        prop_assert_eq!(outcome.added + outcome.rejected, n as u32);
                    }
                    Op::Remove(n) => {
                        e.force_remove_guests(n as u32, RemovalPreference::UnhappyFirst);
                    }
                    Op::Tick => {
                        e.tick(0.1, &snapshot(), &slots, &catalog);
                    }
                    Op::Resize => {
                        big = !big;
                        catalog.insert(BuildingId(1), coaster(if big { 4 } else { 1 }));
                        e.mark_buildings_dirty();
                    }
                }

                prop_assert_eq!(e.pool().mood_counts().total() as usize, e.pool().active_count());
                prop_assert!(e.pool().active_count() <= e.pool().capacity());
                for (i, &occ) in e.occupancy().iter().enumerate() {
                    let slot = SlotId(i as u16);
                    prop_assert_eq!(occ, assigned_to(&e, slot));
                    if let Some(ctx) = e.cache().get(slot) {
                        prop_assert!(occ <= ctx.capacity);
                    }
                }
            }
        }
    }
}
