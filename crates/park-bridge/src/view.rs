use park_building::{BuildingCatalog, SlotTable};
use park_core::GuestTypeMix;
use park_sim::ParkSnapshot;

/// Everything the host lends the simulation for one tick.
pub struct ParkView<'a, C: BuildingCatalog + ?Sized> {
    pub slots:       &'a SlotTable,
    pub catalog:     &'a C,
    /// Global appeal, `0..=100`.
    pub appeal:      f64,
    pub arrival_mix: GuestTypeMix,
}

impl<'a, C: BuildingCatalog + ?Sized> ParkView<'a, C> {
    pub fn new(slots: &'a SlotTable, catalog: &'a C, appeal: f64, arrival_mix: GuestTypeMix) -> Self {
        Self { slots, catalog, appeal, arrival_mix }
    }

    pub fn snapshot(&self) -> ParkSnapshot {
        ParkSnapshot::new(self.appeal, self.arrival_mix)
    }
}
