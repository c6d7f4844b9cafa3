//! Per-slot building context, rebuilt from the catalog when dirty.

use park_core::{BuildingId, GuestType, SlotId, TypeAffinity};

use crate::{BuildingCatalog, BuildingError, BuildingResult, SlotTable};

/// What the hot loop needs to know about the building in one slot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BuildingContext {
    pub building:         BuildingId,
    pub capacity:         u32,
    pub affinity:         TypeAffinity,
    pub is_shop:          bool,
    pub income_per_guest: f64,
}

impl BuildingContext {
    #[inline(always)]
    pub fn affinity_for(&self, guest_type: GuestType) -> f32 {
        self.affinity.get(guest_type)
    }

    /// `true` if another guest fits alongside `occupancy` current ones.
    #[inline(always)]
    pub fn has_room(&self, occupancy: u32) -> bool {
        occupancy < self.capacity
    }
}

/// Summary of one [`BuildingContextCache::rebuild`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RebuildStats {
    /// Slots in the rebuilt table.
    pub slots: usize,
    /// Slots holding a building found in the catalog.
    pub buildings: usize,
    /// Slots whose building id was missing from the catalog (treated as empty).
    pub unknown: usize,
    /// Slots whose building id differs from the previous rebuild.
    pub changed: usize,
}

/// Slot-indexed `BuildingContext` array plus a dirty flag.
///
/// Owned by the engine.  Rebuilding is O(slots), and parks have tens of
/// slots, so it runs eagerly whenever the host reports a build or demolish.
#[derive(Debug)]
pub struct BuildingContextCache {
    contexts: Vec<Option<BuildingContext>>,
    /// Per slot: did the building id change in the latest rebuild?
    changed:  Vec<bool>,
    dirty:    bool,
    rebuilds: u64,
}

impl Default for BuildingContextCache {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildingContextCache {
    /// An empty cache that starts dirty, so the first tick rebuilds it.
    pub fn new() -> Self {
        Self { contexts: Vec::new(), changed: Vec::new(), dirty: true, rebuilds: 0 }
    }

    // ── Dirty tracking ────────────────────────────────────────────────────

    /// Invalidate the cache; the next `rebuild_if_dirty` recomputes it.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of completed rebuilds.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    // ── Rebuild ───────────────────────────────────────────────────────────

    /// Recompute every slot from `slots` and `catalog`, then clear `dirty`.
    ///
    /// Unknown building ids and non-finite incomes are logged and degraded
    /// (empty slot / zero income) rather than failing the tick.
    pub fn rebuild<C: BuildingCatalog + ?Sized>(&mut self, slots: &SlotTable, catalog: &C) -> RebuildStats {
        let slot_count = slots.len().min(SlotId::NONE.index());
        if slot_count < slots.len() {
            tracing::warn!(slots = slots.len(), "slot table exceeds addressable slots; extra slots ignored");
        }

        let mut stats = RebuildStats { slots: slot_count, ..RebuildStats::default() };
        let mut contexts = Vec::with_capacity(slot_count);
        let mut changed = Vec::with_capacity(slot_count);

        for i in 0..slot_count {
            let slot = SlotId(i as u16);
            let previous = self.contexts.get(i).copied().flatten().map(|c| c.building);

            let context = slots.get(slot).and_then(|building| match catalog.attributes(building) {
                Some(attrs) => {
                    let income_per_guest = if attrs.income_per_guest.is_finite() {
                        attrs.income_per_guest
                    } else {
                        tracing::warn!(%slot, %building, "non-finite income; using 0");
                        0.0
                    };
                    Some(BuildingContext {
                        building,
                        capacity: attrs.capacity,
                        affinity: attrs.affinity,
                        is_shop: attrs.is_shop,
                        income_per_guest,
                    })
                }
                None => {
                    tracing::warn!(%slot, %building, "{}", BuildingError::UnknownBuilding(building));
                    stats.unknown += 1;
                    None
                }
            });

            if context.is_some() {
                stats.buildings += 1;
            }
            let now = context.map(|c| c.building);
            let slot_changed = now != previous;
            if slot_changed {
                stats.changed += 1;
            }
            contexts.push(context);
            changed.push(slot_changed);
        }

        self.contexts = contexts;
        self.changed = changed;
        self.dirty = false;
        self.rebuilds += 1;
        tracing::debug!(
            slots = stats.slots,
            buildings = stats.buildings,
            changed = stats.changed,
            rebuild = self.rebuilds,
            "building context cache rebuilt"
        );
        stats
    }

    /// Rebuild only if dirty.  Returns the stats when a rebuild happened.
    pub fn rebuild_if_dirty<C: BuildingCatalog + ?Sized>(
        &mut self,
        slots:   &SlotTable,
        catalog: &C,
    ) -> Option<RebuildStats> {
        if self.dirty {
            Some(self.rebuild(slots, catalog))
        } else {
            None
        }
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// The whole slot-indexed context array, for the selector.
    #[inline]
    pub fn contexts(&self) -> &[Option<BuildingContext>] {
        &self.contexts
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Context at `slot`; `None` for empty, unknown or out-of-range slots.
    #[inline]
    pub fn get(&self, slot: SlotId) -> Option<&BuildingContext> {
        self.contexts.get(slot.index()).and_then(Option::as_ref)
    }

    /// Context at `slot`, distinguishing a host bug from a stale reference.
    ///
    /// # Errors
    ///
    /// - [`BuildingError::InvalidSlotIndex`] if `slot` is past the table.
    /// - [`BuildingError::StaleBuildingReference`] if the slot is empty.
    pub fn resolve(&self, slot: SlotId) -> BuildingResult<&BuildingContext> {
        match self.contexts.get(slot.index()) {
            None => Err(BuildingError::InvalidSlotIndex { slot, slot_count: self.contexts.len() }),
            Some(None) => Err(BuildingError::StaleBuildingReference(slot)),
            Some(Some(ctx)) => Ok(ctx),
        }
    }

    /// Did `slot`'s building id change in the latest rebuild?
    #[inline]
    pub fn slot_changed(&self, slot: SlotId) -> bool {
        self.changed.get(slot.index()).copied().unwrap_or(true)
    }
}
