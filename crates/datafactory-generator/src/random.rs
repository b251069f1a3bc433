//! Seeded random streams.
//!
//! [`JavaRandom`] is a 48-bit linear congruential generator. Two streams
//! built from the same seed and driven by the same call sequence produce
//! identical output, which is the only guarantee this module makes. It is
//! not suitable for anything security related.

use crate::generator::GeneratorError;
use rand::{RngCore, SeedableRng};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Seed used by [`JavaRandom::default`] and the process-wide shared stream.
pub const DEFAULT_SEED: i64 = 93285;

const MULTIPLIER: i64 = 0x5DEECE66D;
const ADDEND: i64 = 0xB;
const MASK: i64 = (1 << 48) - 1;

/// A reproducible source of random values.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. Fails if `bound <= 0`.
    fn next_int(&mut self, bound: i32) -> Result<i32, GeneratorError>;

    /// Uniform integer over the whole `i32` range.
    fn next_i32(&mut self) -> i32;

    /// Uniform value in `[0.0, 1.0)`.
    fn next_double(&mut self) -> f64;

    /// Standard normal sample (mean 0, standard deviation 1).
    fn next_gaussian(&mut self) -> f64;

    /// Replace the stream state as if freshly constructed from `seed`.
    fn reseed(&mut self, seed: i64);
}

/// 48-bit LCG with the `java.util.Random` constants.
///
/// Uses the update rule `state = (state * 0x5DEECE66D + 0xB) mod 2^48`.
#[derive(Debug, Clone, PartialEq)]
pub struct JavaRandom {
    state: i64,
    /// Second value of the last polar-method pair.
    spare_gaussian: Option<f64>,
}

impl JavaRandom {
    /// Create a stream from `seed`.
    pub fn new(seed: i64) -> Self {
        Self {
            state: scramble(seed),
            spare_gaussian: None,
        }
    }

    /// Advance the state and return its top `bits` bits (1..=32).
    fn next(&mut self, bits: u32) -> i32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        (self.state >> (48 - bits)) as i32
    }

    /// Uniform integer over the whole `i64` range.
    pub fn next_long(&mut self) -> i64 {
        (i64::from(self.next(32)) << 32).wrapping_add(i64::from(self.next(32)))
    }
}

fn scramble(seed: i64) -> i64 {
    (seed ^ MULTIPLIER) & MASK
}

impl Default for JavaRandom {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for JavaRandom {
    fn next_int(&mut self, bound: i32) -> Result<i32, GeneratorError> {
        if bound <= 0 {
            return Err(GeneratorError::InvalidBound(bound));
        }

        // Power-of-two bounds take the high bits directly
        if bound & (bound - 1) == 0 {
            return Ok(((i64::from(bound) * i64::from(self.next(31))) >> 31) as i32);
        }

        // Reject draws from the incomplete final bucket
        loop {
            let bits = self.next(31);
            let value = bits % bound;
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return Ok(value);
            }
        }
    }

    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    fn next_double(&mut self) -> f64 {
        let high = i64::from(self.next(26));
        let low = i64::from(self.next(27));
        ((high << 27) + low) as f64 / (1_i64 << 53) as f64
    }

    fn next_gaussian(&mut self) -> f64 {
        if let Some(spare) = self.spare_gaussian.take() {
            return spare;
        }

        // Marsaglia polar method
        loop {
            let v1 = 2.0 * self.next_double() - 1.0;
            let v2 = 2.0 * self.next_double() - 1.0;
            let s = v1 * v1 + v2 * v2;
            if s < 1.0 && s != 0.0 {
                let multiplier = (-2.0 * s.ln() / s).sqrt();
                self.spare_gaussian = Some(v2 * multiplier);
                return v1 * multiplier;
            }
        }
    }

    fn reseed(&mut self, seed: i64) {
        *self = Self::new(seed);
    }
}

impl RngCore for JavaRandom {
    fn next_u32(&mut self) -> u32 {
        self.next(32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_long() as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for JavaRandom {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as i64)
    }
}

/// A [`JavaRandom`] stream shared between several generators.
///
/// Every clone draws from, and reseeds, the same underlying stream, so the
/// order of calls across all holders decides what each of them sees. Each
/// call holds the lock for the whole draw, so a reseed is never observed
/// half applied.
#[derive(Debug, Clone)]
pub struct SharedRandom {
    inner: Arc<Mutex<JavaRandom>>,
}

impl SharedRandom {
    /// Create a new shared stream from `seed`.
    pub fn new(seed: i64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(JavaRandom::new(seed))),
        }
    }

    /// The process-wide stream seeded with [`DEFAULT_SEED`].
    ///
    /// This is global mutable state: every handle returned here, in any
    /// part of the process, advances the same stream.
    pub fn process_default() -> Self {
        static PROCESS_DEFAULT: OnceLock<SharedRandom> = OnceLock::new();
        PROCESS_DEFAULT
            .get_or_init(|| SharedRandom::new(DEFAULT_SEED))
            .clone()
    }

    /// Whether both handles point at the same stream.
    pub fn same_stream(&self, other: &SharedRandom) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn with<T>(&self, f: impl FnOnce(&mut JavaRandom) -> T) -> T {
        // The stream stays valid even if a holder panicked mid-call
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl RandomSource for SharedRandom {
    fn next_int(&mut self, bound: i32) -> Result<i32, GeneratorError> {
        self.with(|rng| rng.next_int(bound))
    }

    fn next_i32(&mut self) -> i32 {
        self.with(|rng| rng.next_i32())
    }

    fn next_double(&mut self) -> f64 {
        self.with(|rng| rng.next_double())
    }

    fn next_gaussian(&mut self) -> f64 {
        self.with(|rng| rng.next_gaussian())
    }

    fn reseed(&mut self, seed: i64) {
        self.with(|rng| rng.reseed(seed))
    }
}
