//! `GuestPool` — fixed-capacity Structure-of-Arrays guest storage.
//!
//! # Layout
//!
//! Every per-guest `Vec` has exactly `capacity` elements and the `GuestId`
//! value is the index into all of them:
//!
//! ```ignore
//! let mood = pool.mood[guest.index()];  // O(1), cache-friendly
//! ```
//!
//! Rows are never deallocated.  [`GuestPool::remove`] pushes the index onto a
//! free stack and the row becomes inert until [`GuestPool::add`] reuses it,
//! at which point every field is reinitialised.  Nothing is reallocated after
//! construction.
//!
//! The per-guest arrays are `pub` so the engine's hot loop can index them
//! directly; the liveness flags, free stack and active count are private so
//! only `add`/`remove` can change who is alive.

use park_core::{GuestId, GuestMood, GuestState, GuestType, MoodCounts, SlotId, TypeCounts};

use crate::{GuestView, PoolError, PoolResult};

pub struct GuestPool {
    // ── Per-guest state ───────────────────────────────────────────────────
    pub state: Vec<GuestState>,
    pub mood: Vec<GuestMood>,
    pub guest_type: Vec<GuestType>,

    /// Internal satisfaction in `[0, 1]`; `mood` is derived from it.
    pub satisfaction: Vec<f32>,

    /// Slot the guest is assigned to (`Traveling` or `AtBuilding`), or
    /// `SlotId::NONE`.
    pub current_building: Vec<SlotId>,

    /// Slot of the last completed visit, for the selector's repeat penalty.
    pub previous_building: Vec<SlotId>,

    /// Ticks left on the way to, or inside, `current_building`.
    pub dwell_remaining: Vec<u32>,

    /// Ticks spent inside `current_building` so far.
    pub ticks_at_building: Vec<u32>,

    /// Money generated during the current tick.  Drained by the engine
    /// before the tick ends.
    pub spend_accumulator: Vec<f64>,

    /// Simulated day at which this guest was last processed (mood drift
    /// uses the real elapsed time, so time-sliced guests do not fall behind).
    pub last_update_day: Vec<f64>,

    /// Monotonic arrival counter; lower means older.
    pub arrival_seq: Vec<u64>,

    // ── Liveness ──────────────────────────────────────────────────────────
    active: Vec<bool>,
    /// Free indices.  Popped from the back, so a fresh pool hands out
    /// index 0 first.
    free: Vec<u32>,
    active_count: usize,
    next_seq: u64,
}

impl GuestPool {
    /// Allocate every array for `capacity` guests.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` does not fit in a `u32` index.  `SimConfig::validate`
    /// rejects such capacities before a pool is built.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity <= u32::MAX as usize, "guest pool capacity {capacity} exceeds u32 index space");
        Self {
            state:             vec![GuestState::Idle; capacity],
            mood:              vec![GuestMood::Neutral; capacity],
            guest_type:        vec![GuestType::Thrills; capacity],
            satisfaction:      vec![0.0; capacity],
            current_building:  vec![SlotId::NONE; capacity],
            previous_building: vec![SlotId::NONE; capacity],
            dwell_remaining:   vec![0; capacity],
            ticks_at_building: vec![0; capacity],
            spend_accumulator: vec![0.0; capacity],
            last_update_day:   vec![0.0; capacity],
            arrival_seq:       vec![0; capacity],
            active:            vec![false; capacity],
            free:              (0..capacity as u32).rev().collect(),
            active_count:      0,
            next_seq:          0,
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn capacity(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active_count == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    /// `true` if `guest` is in range and currently alive.
    #[inline]
    pub fn is_active(&self, guest: GuestId) -> bool {
        self.active.get(guest.index()).copied().unwrap_or(false)
    }

    // ── Allocation ────────────────────────────────────────────────────────

    /// Allocate a row for a new guest and fully reinitialise it.
    ///
    /// `now_day` is the simulated day of arrival; it seeds the mood-drift
    /// clock for this guest.
    ///
    /// # Errors
    ///
    /// [`PoolError::Full`] when every row is in use.  The caller drops or
    /// defers the arrival; nothing in the pool changes.
    pub fn add(
        &mut self,
        guest_type:   GuestType,
        satisfaction: f32,
        mood:         GuestMood,
        now_day:      f64,
    ) -> PoolResult<GuestId> {
        let Some(index) = self.free.pop() else {
            return Err(PoolError::Full { capacity: self.capacity() });
        };
        let i = index as usize;
        debug_assert!(!self.active[i], "free list handed out live row {i}");

        self.state[i] = GuestState::Idle;
        self.mood[i] = mood;
        self.guest_type[i] = guest_type;
        self.satisfaction[i] = satisfaction.clamp(0.0, 1.0);
        self.current_building[i] = SlotId::NONE;
        self.previous_building[i] = SlotId::NONE;
        self.dwell_remaining[i] = 0;
        self.ticks_at_building[i] = 0;
        self.spend_accumulator[i] = 0.0;
        self.last_update_day[i] = now_day;
        self.arrival_seq[i] = self.next_seq;
        self.next_seq += 1;

        self.active[i] = true;
        self.active_count += 1;
        Ok(GuestId(index))
    }

    /// Return `guest`'s row to the free list.  O(1).
    ///
    /// Releasing a guest exactly once per departure is the caller's job.
    /// Removing a row that is not active (already freed or out of range)
    /// changes nothing and returns `false`, so the free list never holds a
    /// duplicate index.
    pub fn remove(&mut self, guest: GuestId) -> bool {
        if !self.is_active(guest) {
            return false;
        }
        let i = guest.index();
        self.active[i] = false;
        self.state[i] = GuestState::Idle;
        self.current_building[i] = SlotId::NONE;
        self.spend_accumulator[i] = 0.0;
        self.free.push(guest.0);
        self.active_count -= 1;
        true
    }

    // ── Iteration ─────────────────────────────────────────────────────────

    /// Active guests in ascending index order.
    pub fn active_ids(&self) -> impl Iterator<Item = GuestId> + '_ {
        self.active
            .iter()
            .enumerate()
            .filter(|&(_, &live)| live)
            .map(|(i, _)| GuestId(i as u32))
    }

    /// Call `visitor` for every active guest in ascending index order.
    pub fn for_each_active<F: FnMut(GuestId)>(&self, mut visitor: F) {
        for (i, &live) in self.active.iter().enumerate() {
            if live {
                visitor(GuestId(i as u32));
            }
        }
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// Copy of `guest`'s row, or `None` if the guest is not active.
    pub fn get(&self, guest: GuestId) -> Option<GuestView> {
        if !self.is_active(guest) {
            return None;
        }
        let i = guest.index();
        Some(GuestView {
            id:                guest,
            state:             self.state[i],
            mood:              self.mood[i],
            guest_type:        self.guest_type[i],
            satisfaction:      self.satisfaction[i],
            current_building:  self.current_building[i],
            previous_building: self.previous_building[i],
            dwell_remaining:   self.dwell_remaining[i],
            ticks_at_building: self.ticks_at_building[i],
            spend_accumulator: self.spend_accumulator[i],
            arrival_seq:       self.arrival_seq[i],
        })
    }

    /// Active guests per mood.  Always sums to `active_count()`.
    pub fn mood_counts(&self) -> MoodCounts {
        let mut counts = MoodCounts::default();
        self.for_each_active(|g| counts.add(self.mood[g.index()], 1));
        counts
    }

    /// Active guests per type.
    pub fn type_counts(&self) -> TypeCounts {
        let mut counts = TypeCounts::default();
        self.for_each_active(|g| counts.add(self.guest_type[g.index()], 1));
        counts
    }

    // ── Writes ────────────────────────────────────────────────────────────

    /// Read and zero `guest`'s spend for this tick.
    #[inline]
    pub fn take_spend(&mut self, guest: GuestId) -> f64 {
        std::mem::take(&mut self.spend_accumulator[guest.index()])
    }

    /// Overwrite an active guest's satisfaction and mood.
    ///
    /// # Errors
    ///
    /// [`PoolError::NotActive`] if `guest` is free or out of range.
    pub fn set_mood(&mut self, guest: GuestId, satisfaction: f32, mood: GuestMood) -> PoolResult<()> {
        if !self.is_active(guest) {
            return Err(PoolError::NotActive(guest));
        }
        self.satisfaction[guest.index()] = satisfaction.clamp(0.0, 1.0);
        self.mood[guest.index()] = mood;
        Ok(())
    }
}
