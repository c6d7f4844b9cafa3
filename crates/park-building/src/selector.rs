//! Weighted destination choice for idle guests.
//!
//! For every slot with a building and spare capacity:
//!
//! ```text
//! weight = max(min,
//!              base
//!            + affinity(type, slot) * affinity_multiplier
//!            - (occupancy / capacity) * capacity_penalty
//!            - (slot == previous ? repeat_penalty : 0))
//! ```
//!
//! A single uniform draw in `[0, Σ weight)` then walks the cumulative sum;
//! the first slot whose running total exceeds the draw wins, so exact ties
//! favour the lowest slot index.
//!
//! The walk is done in two passes over the context array (sum, then search)
//! so selection never allocates.

use park_core::{GuestType, RandomSource, SelectionWeights, SlotId};

use crate::BuildingContext;

/// Weight of `ctx` for a guest of `guest_type`, assuming it has room.
#[inline]
pub fn attraction_weight(
    guest_type:  GuestType,
    ctx:         &BuildingContext,
    occupancy:   u32,
    is_previous: bool,
    weights:     &SelectionWeights,
) -> f64 {
    let affinity = ctx.affinity_for(guest_type) as f64 * weights.affinity_multiplier;
    let fullness = if ctx.capacity > 0 { occupancy as f64 / ctx.capacity as f64 } else { 1.0 };
    let occupancy_penalty = fullness * weights.capacity_penalty;
    let repeat_penalty = if is_previous { weights.repeat_penalty } else { 0.0 };
    let w = weights.base + affinity - occupancy_penalty - repeat_penalty;
    // NaN from a malformed affinity collapses to the floor too.
    if w >= weights.min { w } else { weights.min }
}

/// Weight of slot `i` if it is a candidate, `None` otherwise.
#[inline]
fn candidate_weight(
    i:          usize,
    guest_type: GuestType,
    contexts:   &[Option<BuildingContext>],
    occupancy:  &[u32],
    previous:   SlotId,
    weights:    &SelectionWeights,
) -> Option<f64> {
    let ctx = contexts[i].as_ref()?;
    // Slots the occupancy table doesn't cover are stale: unavailable.
    let occ = *occupancy.get(i)?;
    if !ctx.has_room(occ) {
        return None;
    }
    let is_previous = previous.is_some() && previous.index() == i;
    Some(attraction_weight(guest_type, ctx, occ, is_previous, weights))
}

/// Choose a destination slot for an idle guest of `guest_type`.
///
/// `contexts` and `occupancy` are slot-indexed.  `previous` is the slot of
/// the guest's last visit, or `SlotId::NONE`.  Returns `None`, without
/// consuming a draw, when no slot has spare capacity.
pub fn select_building<R: RandomSource + ?Sized>(
    guest_type: GuestType,
    contexts:   &[Option<BuildingContext>],
    occupancy:  &[u32],
    previous:   SlotId,
    weights:    &SelectionWeights,
    rng:        &mut R,
) -> Option<SlotId> {
    let mut total = 0.0;
    let mut last = None;
    for i in 0..contexts.len() {
        if let Some(w) = candidate_weight(i, guest_type, contexts, occupancy, previous, weights) {
            total += w;
            last = Some(i);
        }
    }
    let last = last?;

    let draw = rng.gen_below(total);
    let mut acc = 0.0;
    for i in 0..=last {
        if let Some(w) = candidate_weight(i, guest_type, contexts, occupancy, previous, weights) {
            acc += w;
            if draw < acc {
                return Some(SlotId(i as u16));
            }
        }
    }
    // Float rounding left the draw at the very top of the range.
    Some(SlotId(last as u16))
}
