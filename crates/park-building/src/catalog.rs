//! The host's building catalog, seen through a typed interface.

use rustc_hash::FxHashMap;

use park_core::{BuildingId, GuestType, TypeAffinity};

/// Static attributes of one building type, as far as guests care.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingAttributes {
    /// Maximum concurrent guests.  0 means closed.
    pub capacity: u32,
    pub affinity: TypeAffinity,
    /// Revenue buildings roll purchases for the guests inside them.
    pub is_shop: bool,
    /// Money per successful purchase.
    pub income_per_guest: f64,
}

impl BuildingAttributes {
    /// A non-revenue attraction.
    pub fn attraction(capacity: u32, affinity: TypeAffinity) -> Self {
        Self { capacity, affinity, is_shop: false, income_per_guest: 0.0 }
    }

    pub fn shop(capacity: u32, affinity: TypeAffinity, income_per_guest: f64) -> Self {
        Self { capacity, affinity, is_shop: true, income_per_guest }
    }

    #[inline]
    pub fn affinity_for(&self, guest_type: GuestType) -> f32 {
        self.affinity.get(guest_type)
    }
}

/// Lookup from building id to attributes.
///
/// Implemented by the host over whatever catalog it keeps (string-keyed
/// tables, perk-modified stats, …).  Only called during cache rebuilds, never
/// from the per-guest loop.
pub trait BuildingCatalog {
    fn attributes(&self, building: BuildingId) -> Option<BuildingAttributes>;
}

impl<C: BuildingCatalog + ?Sized> BuildingCatalog for &C {
    fn attributes(&self, building: BuildingId) -> Option<BuildingAttributes> {
        (**self).attributes(building)
    }
}

/// A fixed in-memory catalog backed by an `FxHashMap`.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    entries: FxHashMap<BuildingId, BuildingAttributes>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, building: BuildingId, attributes: BuildingAttributes) -> Self {
        self.insert(building, attributes);
        self
    }

    /// Insert or replace `building`, returning the previous attributes.
    pub fn insert(&mut self, building: BuildingId, attributes: BuildingAttributes) -> Option<BuildingAttributes> {
        self.entries.insert(building, attributes)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BuildingCatalog for StaticCatalog {
    fn attributes(&self, building: BuildingId) -> Option<BuildingAttributes> {
        self.entries.get(&building).copied()
    }
}
