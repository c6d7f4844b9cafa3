//! Fluent builder for constructing an [`Engine`].

use park_core::{RandomSource, SimConfig, SimRng};

use crate::{Engine, SimResult};

/// Fluent builder for [`Engine<R>`].
///
/// # Inputs
///
/// | Method        | Default                          |
/// |---------------|----------------------------------|
/// | `new(config)` | required                         |
/// | `.rng(r)`     | `SimRng::new(config.seed)`       |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(SimConfig::with_capacity(1_000)).build()?;
///
/// // Tests force outcomes with a scripted source:
/// let mut engine = EngineBuilder::new(config)
///     .rng(ScriptedRng::constant(0.0))
///     .build()?;
/// ```
pub struct EngineBuilder<R: RandomSource = SimRng> {
    config: SimConfig,
    rng:    R,
}

impl EngineBuilder<SimRng> {
    /// Builder seeded from `config.seed`.
    pub fn new(config: SimConfig) -> Self {
        let rng = SimRng::new(config.seed);
        Self { config, rng }
    }
}

impl<R: RandomSource> EngineBuilder<R> {
    /// Replace the random source.
    pub fn rng<R2: RandomSource>(self, rng: R2) -> EngineBuilder<R2> {
        EngineBuilder { config: self.config, rng }
    }

    /// Validate the configuration, allocate the pool and return an engine
    /// with no guests and a dirty building cache.
    pub fn build(self) -> SimResult<Engine<R>> {
        self.config.validate()?;
        Ok(Engine::from_parts(self.config, self.rng))
    }
}
