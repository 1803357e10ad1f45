//! Random source for duel resolution
//!
//! Every duel owns its own stream. Nothing in the engine touches a global
//! generator, so duels can run on any thread without coordination.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of randomness consumed by behaviors and the damage pipeline
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn uniform_float(&mut self) -> f32;

    /// Uniform integer in `[min, max]` inclusive
    fn uniform_int(&mut self, min: i32, max: i32) -> i32;

    /// `uniform_float() <= p`, the boundary-inclusive chance check
    fn roll_at_most(&mut self, p: f32) -> bool {
        self.uniform_float() <= p
    }

    /// `uniform_float() < p`, the boundary-exclusive chance check
    fn roll_below(&mut self, p: f32) -> bool {
        self.uniform_float() < p
    }
}

/// ChaCha-backed stream used for real simulations
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn uniform_float(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

/// Deterministic source: replays a script, then repeats a fallback
///
/// Integer draws are answered from their own script and fall back to the
/// lower bound of the requested range.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    floats: VecDeque<f32>,
    ints: VecDeque<i32>,
    fallback: f32,
}

/// Largest `f32` strictly below 1.0
pub const JUST_BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;

impl ScriptedSource {
    /// Always returns `value` for float draws
    pub fn constant(value: f32) -> Self {
        Self {
            floats: VecDeque::new(),
            ints: VecDeque::new(),
            fallback: value,
        }
    }

    /// Fires every chance check, `<=` and `<` alike
    pub fn always_trigger() -> Self {
        Self::constant(0.0)
    }

    /// Fires no chance check, while a 1.0 hit-rate still connects
    pub fn never_trigger() -> Self {
        Self::constant(JUST_BELOW_ONE)
    }

    pub fn with_floats(mut self, floats: impl IntoIterator<Item = f32>) -> Self {
        self.floats.extend(floats);
        self
    }

    pub fn with_ints(mut self, ints: impl IntoIterator<Item = i32>) -> Self {
        self.ints.extend(ints);
        self
    }
}

impl RandomSource for ScriptedSource {
    fn uniform_float(&mut self) -> f32 {
        self.floats.pop_front().unwrap_or(self.fallback)
    }

    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        self.ints
            .pop_front()
            .map(|v| v.clamp(min, max.max(min)))
            .unwrap_or(min)
    }
}
