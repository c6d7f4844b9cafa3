//! A small hand-built park: five slots, four attractions and a shop.

use park_building::{BuildingAttributes, SlotTable, StaticCatalog};
use park_core::{BuildingId, GuestType, SlotId, TypeAffinity};

pub const ROLLER_COASTER: BuildingId = BuildingId(1);
pub const CAROUSEL:       BuildingId = BuildingId(2);
pub const GARDEN:         BuildingId = BuildingId(3);
pub const FOOD_COURT:     BuildingId = BuildingId(4);
pub const ARCADE:         BuildingId = BuildingId(5);

pub fn catalog() -> StaticCatalog {
    StaticCatalog::new()
        .with(
            ROLLER_COASTER,
            BuildingAttributes::attraction(24, TypeAffinity::only(GuestType::Thrills, 1.0).with(GuestType::Social, 0.3)),
        )
        .with(
            CAROUSEL,
            BuildingAttributes::attraction(16, TypeAffinity::only(GuestType::Family, 1.0).with(GuestType::Relaxation, 0.2)),
        )
        .with(
            GARDEN,
            BuildingAttributes::attraction(30, TypeAffinity::only(GuestType::Relaxation, 1.0).with(GuestType::Family, 0.4)),
        )
        .with(FOOD_COURT, BuildingAttributes::shop(20, TypeAffinity::uniform(0.5), 6.0))
        .with(
            ARCADE,
            BuildingAttributes::shop(12, TypeAffinity::only(GuestType::Social, 1.0).with(GuestType::Thrills, 0.4), 3.0),
        )
}

/// Opening layout: the arcade is built on day 3.
pub fn opening_slots() -> SlotTable {
    SlotTable::from_slots(vec![Some(ROLLER_COASTER), Some(CAROUSEL), Some(GARDEN), Some(FOOD_COURT), None])
}

pub const ARCADE_SLOT: SlotId = SlotId(4);
