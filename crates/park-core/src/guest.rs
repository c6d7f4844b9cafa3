//! Per-guest enums shared by the pool, the selector and the engine.

use std::fmt;

// ── GuestType ─────────────────────────────────────────────────────────────────

/// Behavioural type assigned at arrival.  Immutable for the guest's lifetime.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum GuestType {
    #[default]
    Thrills = 0,
    Family = 1,
    Relaxation = 2,
    /// Influencer-style guests who mostly come for the crowd.
    Social = 3,
}

impl GuestType {
    pub const COUNT: usize = 4;

    pub const ALL: [GuestType; Self::COUNT] = [
        GuestType::Thrills,
        GuestType::Family,
        GuestType::Relaxation,
        GuestType::Social,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            GuestType::Thrills => "thrills",
            GuestType::Family => "family",
            GuestType::Relaxation => "relaxation",
            GuestType::Social => "social",
        }
    }
}

impl fmt::Display for GuestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── GuestMood ─────────────────────────────────────────────────────────────────

/// Mood bucket derived from a guest's satisfaction scalar.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum GuestMood {
    Happy = 0,
    #[default]
    Neutral = 1,
    Unhappy = 2,
}

impl GuestMood {
    pub const COUNT: usize = 3;

    pub const ALL: [GuestMood; Self::COUNT] =
        [GuestMood::Happy, GuestMood::Neutral, GuestMood::Unhappy];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Classify `satisfaction`: happy at or above `happy_threshold`, unhappy
    /// strictly below `unhappy_threshold`, neutral otherwise.
    #[inline]
    pub fn from_satisfaction(satisfaction: f32, happy_threshold: f32, unhappy_threshold: f32) -> Self {
        if satisfaction >= happy_threshold {
            GuestMood::Happy
        } else if satisfaction < unhappy_threshold {
            GuestMood::Unhappy
        } else {
            GuestMood::Neutral
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GuestMood::Happy => "happy",
            GuestMood::Neutral => "neutral",
            GuestMood::Unhappy => "unhappy",
        }
    }
}

impl fmt::Display for GuestMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── GuestState ────────────────────────────────────────────────────────────────

/// Which processing branch applies to a guest this tick.
///
/// Between ticks a live guest is always `Idle`, `Traveling` or `AtBuilding`.
/// `Leaving` only exists inside the tick that removes the guest.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum GuestState {
    /// Waiting for a destination.
    #[default]
    Idle = 0,
    /// Assigned to a building (occupancy already reserved) but not there yet.
    Traveling = 1,
    AtBuilding = 2,
    Leaving = 3,
}

impl GuestState {
    pub fn name(self) -> &'static str {
        match self {
            GuestState::Idle => "idle",
            GuestState::Traveling => "traveling",
            GuestState::AtBuilding => "at_building",
            GuestState::Leaving => "leaving",
        }
    }
}

impl fmt::Display for GuestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── TypeAffinity ──────────────────────────────────────────────────────────────

/// How attractive a building is to each guest type, nominally in `[0, 1]`.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeAffinity(pub [f32; GuestType::COUNT]);

impl TypeAffinity {
    pub const ZERO: TypeAffinity = TypeAffinity([0.0; GuestType::COUNT]);

    /// The same affinity for every guest type.
    pub fn uniform(value: f32) -> Self {
        TypeAffinity([value; GuestType::COUNT])
    }

    /// Affinity of `value` for `guest_type` only; zero for everyone else.
    pub fn only(guest_type: GuestType, value: f32) -> Self {
        Self::ZERO.with(guest_type, value)
    }

    /// Return a copy with `guest_type` set to `value`.
    pub fn with(mut self, guest_type: GuestType, value: f32) -> Self {
        self.0[guest_type.index()] = value;
        self
    }

    #[inline(always)]
    pub fn get(&self, guest_type: GuestType) -> f32 {
        self.0[guest_type.index()]
    }
}
