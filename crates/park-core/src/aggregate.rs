//! Aggregate outputs and the integer tallies they are reduced from.
//!
//! [`GuestBreakdown`] and [`GuestTypeMix`] are the only guest-simulation
//! values other game systems may read; the host persists them as plain
//! serializable structs.  `GuestTypeMix` doubles as the arrival distribution
//! new guests are drawn from.

use crate::{GuestMood, GuestType, ParkError, ParkResult, RandomSource};

// ── Integer tallies ───────────────────────────────────────────────────────────

/// Guest counts per mood, indexed by `GuestMood::index()`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoodCounts(pub [u32; GuestMood::COUNT]);

impl MoodCounts {
    #[inline]
    pub fn get(&self, mood: GuestMood) -> u32 {
        self.0[mood.index()]
    }

    #[inline]
    pub fn add(&mut self, mood: GuestMood, n: u32) {
        self.0[mood.index()] += n;
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Element-wise sum.
    pub fn merge(&mut self, other: &MoodCounts) {
        for (a, b) in self.0.iter_mut().zip(other.0) {
            *a += b;
        }
    }
}

/// Guest counts per type, indexed by `GuestType::index()`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeCounts(pub [u32; GuestType::COUNT]);

impl TypeCounts {
    #[inline]
    pub fn get(&self, guest_type: GuestType) -> u32 {
        self.0[guest_type.index()]
    }

    #[inline]
    pub fn add(&mut self, guest_type: GuestType, n: u32) {
        self.0[guest_type.index()] += n;
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

// ── GuestBreakdown ────────────────────────────────────────────────────────────

/// Happy / neutral / unhappy guest counts as stored by the host.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuestBreakdown {
    pub happy:   f64,
    pub neutral: f64,
    pub unhappy: f64,
}

impl GuestBreakdown {
    pub fn total(&self) -> f64 {
        self.happy + self.neutral + self.unhappy
    }

    pub fn get(&self, mood: GuestMood) -> f64 {
        match mood {
            GuestMood::Happy => self.happy,
            GuestMood::Neutral => self.neutral,
            GuestMood::Unhappy => self.unhappy,
        }
    }

    /// Round each bucket to a whole, non-negative guest count.
    pub fn to_counts(&self) -> MoodCounts {
        let whole = |v: f64| if v.is_finite() && v > 0.0 { v.round() as u32 } else { 0 };
        MoodCounts([whole(self.happy), whole(self.neutral), whole(self.unhappy)])
    }
}

impl From<MoodCounts> for GuestBreakdown {
    fn from(counts: MoodCounts) -> Self {
        Self {
            happy:   counts.get(GuestMood::Happy) as f64,
            neutral: counts.get(GuestMood::Neutral) as f64,
            unhappy: counts.get(GuestMood::Unhappy) as f64,
        }
    }
}

// ── GuestTypeMix ──────────────────────────────────────────────────────────────

/// Percentage of guests per type, summing to 100.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuestTypeMix {
    pub percent: [f64; GuestType::COUNT],
}

impl Default for GuestTypeMix {
    fn default() -> Self {
        Self::uniform()
    }
}

impl GuestTypeMix {
    pub fn uniform() -> Self {
        Self { percent: [100.0 / GuestType::COUNT as f64; GuestType::COUNT] }
    }

    /// Normalise arbitrary non-negative weights to percentages.
    pub fn from_weights(weights: [f64; GuestType::COUNT]) -> ParkResult<Self> {
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ParkError::Config(format!("type mix weights must be non-negative: {weights:?}")));
        }
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(ParkError::Config("type mix weights sum to zero".into()));
        }
        Ok(Self { percent: weights.map(|w| w / total * 100.0) })
    }

    /// Percentages of a population tally.  `None` when the tally is empty.
    pub fn from_counts(counts: &TypeCounts) -> Option<Self> {
        let total = counts.total();
        if total == 0 {
            return None;
        }
        Some(Self { percent: counts.0.map(|c| c as f64 / total as f64 * 100.0) })
    }

    #[inline]
    pub fn get(&self, guest_type: GuestType) -> f64 {
        self.percent[guest_type.index()]
    }

    pub fn total(&self) -> f64 {
        self.percent.iter().sum()
    }

    /// Draw one guest type.  Consumes exactly one draw.  A degenerate mix
    /// (all zero or invalid) falls back to uniform.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> GuestType {
        let weights = self.percent.map(|p| if p.is_finite() && p > 0.0 { p } else { 0.0 });
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            let i = (rng.next_f64() * GuestType::COUNT as f64) as usize;
            return GuestType::ALL[i.min(GuestType::COUNT - 1)];
        }
        let draw = rng.gen_below(total);
        let mut acc = 0.0;
        let mut last = GuestType::Thrills;
        for guest_type in GuestType::ALL {
            let w = weights[guest_type.index()];
            if w <= 0.0 {
                continue;
            }
            acc += w;
            last = guest_type;
            if draw < acc {
                return guest_type;
            }
        }
        // Float rounding left the draw at the very top of the range.
        last
    }

    /// Split `n` guests across types in proportion to the mix, using
    /// largest-remainder rounding so the parts always sum to `n`.  Ties in
    /// remainder go to the lower type index.
    pub fn apportion(&self, n: u32) -> TypeCounts {
        let weights = self.percent.map(|p| if p.is_finite() && p > 0.0 { p } else { 0.0 });
        let total: f64 = weights.iter().sum();
        let weights = if total > 0.0 { weights } else { [1.0; GuestType::COUNT] };
        let total: f64 = weights.iter().sum();

        let mut counts = [0u32; GuestType::COUNT];
        let mut remainders = [(0.0f64, 0usize); GuestType::COUNT];
        let mut assigned = 0u32;
        for i in 0..GuestType::COUNT {
            let exact = n as f64 * weights[i] / total;
            counts[i] = exact.floor() as u32;
            assigned += counts[i];
            remainders[i] = (exact - exact.floor(), i);
        }
        remainders.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
        for &(_, i) in remainders.iter().take(n.saturating_sub(assigned) as usize) {
            counts[i] += 1;
        }
        TypeCounts(counts)
    }
}
