//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash`.  The inner integer is `pub` so hot loops
//! can index SoA `Vec`s directly, but callers should prefer `.index()`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no id": the integer's maximum value.
            pub const NONE: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// `true` unless this is the [`NONE`](Self::NONE) sentinel.
            #[inline(always)]
            pub fn is_some(self) -> bool {
                self != Self::NONE
            }

            /// `None` for the sentinel, `Some(self)` otherwise.
            #[inline]
            pub fn get(self) -> Option<$name> {
                if self.is_some() { Some(self) } else { None }
            }
        }

        impl Default for $name {
            /// Returns the `NONE` sentinel so unset ids are visibly empty.
            #[inline(always)]
            fn default() -> Self {
                Self::NONE
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_some() {
                    write!(f, "{}({})", stringify!($name), self.0)
                } else {
                    write!(f, "{}(none)", stringify!($name))
                }
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Row index of a guest in the pool's parallel arrays.
    pub struct GuestId(u32);
}

typed_id! {
    /// A building placement location in the park.  Parks have tens of
    /// slots, so `u16` keeps per-guest arrays compact.
    pub struct SlotId(u16);
}

typed_id! {
    /// Catalog key of a building type, resolved by the host from its own
    /// string ids before anything reaches the simulation.
    pub struct BuildingId(u32);
}
