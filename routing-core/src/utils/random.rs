#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::sync::{Arc, Mutex, MutexGuard};

/// Provides the way to use randomized values in generic way.
pub trait Random: Send + Sync {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: Float) -> bool;

    /// Returns RNG.
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation backed by a small fast RNG.
/// When created with a seed, it produces a repeatable sequence of values.
pub struct DefaultRandom {
    rng: Arc<Mutex<SmallRng>>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with repeatable behavior.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: Arc::new(Mutex::new(SmallRng::seed_from_u64(seed))) }
    }

    /// Creates a new instance of `DefaultRandom` with optional seed.
    pub fn new_with_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::default, Self::new_repeatable)
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Arc::new(Mutex::new(SmallRng::from_entropy())) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..=max)
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max)
    }

    fn is_hit(&self, probability: Float) -> bool {
        self.get_rng().gen_bool(probability.clamp(0., 1.))
    }

    fn get_rng(&self) -> RandomGen {
        RandomGen { rng: self.rng.clone() }
    }
}

/// Specifies underlying random generator type.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: Arc<Mutex<SmallRng>>,
}

impl RandomGen {
    fn lock(&self) -> MutexGuard<'_, SmallRng> {
        // NOTE the generator state stays valid even if other thread panicked while holding it
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.lock().next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.lock().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.lock().fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.lock().try_fill_bytes(dest)
    }
}
