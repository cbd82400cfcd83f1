//! Deterministic run-level RNG.
//!
//! # Determinism strategy
//!
//! A simulation run is a pure function of the network, the shipment list, and
//! one `SimRng`.  Both random decisions (the alternative-path edge-removal
//! index and the main/alt coin flip) draw from the same `SimRng` in a fixed,
//! documented order, so seeding the RNG makes a whole run bit-reproducible.
//!
//! Replications derive their seeds with [`derive_seed`]: the mixing constant
//! is the 64-bit fractional part of the golden ratio, which spreads
//! consecutive replication indices uniformly across the seed space.  Adding
//! replications at the end never disturbs the seeds of earlier ones.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Derive an independent seed for replication `index` from a base seed.
#[inline]
pub fn derive_seed(base_seed: u64, index: u64) -> u64 {
    base_seed ^ index.wrapping_mul(MIXING_CONSTANT)
}

/// Run-level deterministic RNG.
///
/// Create one per simulation run; the type is `!Sync` to prevent accidental
/// sharing across threads — parallel replications must each hold their own.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// seeding per-replication RNGs deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
