//! headless — drives the guest simulation the way the game host does.
//!
//! Builds a five-slot park, admits arrivals every simulated hour, steps the
//! bridge at 60 ticks per day and prints the daily aggregates.  Halfway
//! through a new building opens, and at the end the aggregates are saved to
//! JSON and restored into a fresh bridge.
//!
//! ```text
//! cargo run -p headless -- [config.json]
//! RUST_LOG=park_sim=debug cargo run -p headless
//! ```

mod park;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use park_bridge::{GuestAggregates, GuestBridge, ParkView, RemovalPreference};
use park_core::{GuestMood, GuestTypeMix, SimConfig};
use park_output::{CsvWriter, SimOutputObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SIM_DAYS:          u32 = 6;
const TICKS_PER_DAY:     u32 = 60;
const ARRIVALS_PER_HOUR: u32 = 12;
const OUTPUT_DIR:        &str = "output/headless";

fn load_config() -> Result<SimConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            let config: SimConfig = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
            tracing::info!(%path, "loaded config");
            Ok(config)
        }
        None => Ok(SimConfig { pool_capacity: 400, seed: 42, snapshot_interval_ticks: 60, ..SimConfig::default() }),
    }
}

/// The host's appeal model: a base score nudged by how happy guests are.
fn appeal(bridge: &GuestBridge) -> f64 {
    let b = bridge.breakdown();
    if b.total() == 0.0 {
        return 60.0;
    }
    (55.0 + 30.0 * (b.happy - b.unhappy) / b.total()).clamp(0.0, 100.0)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config()?;
    println!("=== headless — park guest simulation ===");
    println!(
        "Capacity: {}  |  Days: {SIM_DAYS}  |  Ticks/day: {TICKS_PER_DAY}  |  Seed: {}",
        config.pool_capacity, config.seed
    );
    println!();

    let catalog = park::catalog();
    let mut slots = park::opening_slots();
    let arrival_mix = GuestTypeMix::from_weights([35.0, 30.0, 20.0, 15.0])?;
    let mut bridge = GuestBridge::new(config.clone())?;

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = SimOutputObserver::new(writer, 0.0);

    let delta_day = 1.0 / TICKS_PER_DAY as f64;
    let ticks_per_hour = (TICKS_PER_DAY / 24).max(1);

    println!(
        "{:<5} {:>7} {:>7} {:>7} {:>7} {:>9} {:>7} {:>8}",
        "Day", "Guests", "Happy", "Neutral", "Unhappy", "Income", "Visits", "Departed"
    );
    println!("{}", "-".repeat(66));

    let t0 = Instant::now();
    for day in 0..SIM_DAYS {
        if day == SIM_DAYS / 2 {
            slots.place(park::ARCADE_SLOT, park::ARCADE)?;
            bridge.mark_buildings_dirty();
            tracing::info!(day, "arcade opened");
        }

        for t in 0..TICKS_PER_DAY {
            let view = ParkView::new(&slots, &catalog, appeal(&bridge), arrival_mix);
            bridge.tick_observed(delta_day, &view, &mut obs);
            // Gates open on the hour; arrivals are typed from the view's mix.
            if t % ticks_per_hour == 0 {
                bridge.add_guests(ARRIVALS_PER_HOUR);
            }
        }

        // Closing time: the host culls the grumpiest fifth of the crowd.
        let cull = bridge.guest_count() as u32 / 5;
        bridge.force_remove_guests(cull, RemovalPreference::UnhappyFirst);

        let tally = bridge.take_day_tally();
        let b = bridge.breakdown();
        println!(
            "{:<5} {:>7} {:>7} {:>7} {:>7} {:>9.2} {:>7} {:>8}",
            day + 1,
            bridge.guest_count(),
            b.happy,
            b.neutral,
            b.unhappy,
            tally.income,
            tally.visits_started,
            tally.departures.total() + tally.removed,
        );
        if tally.rejected > 0 {
            tracing::warn!(day, rejected = tally.rejected, "arrivals turned away");
        }
    }
    let elapsed = t0.elapsed();

    if let Err(e) = obs.finish() {
        eprintln!("output error: {e}");
    }

    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    let mix = bridge.type_mix();
    println!(
        "Type mix: thrills {:.1}%  family {:.1}%  relaxation {:.1}%  social {:.1}%",
        mix.percent[0], mix.percent[1], mix.percent[2], mix.percent[3]
    );
    for (i, slot) in slots.occupied() {
        println!("  {slot} in {i}: {} guests", bridge.occupancy(i)?);
    }

    // Save and reload: only the aggregates survive.
    let json = serde_json::to_string_pretty(&bridge.save())?;
    std::fs::write(Path::new(OUTPUT_DIR).join("save.json"), &json)?;
    let saved: GuestAggregates = serde_json::from_str(&json)?;
    let restored = GuestBridge::restore(config, &saved)?;
    println!();
    println!(
        "Restored {} guests ({} unhappy) at {}",
        restored.guest_count(),
        restored.breakdown().get(GuestMood::Unhappy),
        restored.engine().clock(),
    );

    Ok(())
}
