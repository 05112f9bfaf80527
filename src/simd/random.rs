//! Fast, low-quality randomness.
//!
//! **Not for security or statistics.** These generators are chosen for speed and
//! a 32-byte state. Nothing about uniformity or independence is guaranteed.
//!
//! Two generators exist and they produce different streams:
//!
//! - a multiplicative (Lehmer) generator, used on every build without AES
//!   support, and always available as [`lehmer_randomness`];
//! - one AES encryption round over the two state halves, used when the build
//!   script emits `cfg(aes)`.
//!
//! Each is deterministic given its own state.

use rand::{RngCore, SeedableRng};

/// Odd multiplier of the Lehmer step.
pub const LEHMER_MULTIPLIER: u128 = 0xda94_2042_e4dd_85b5;

/// Multiplicative generator step.
///
/// Both states are multiplied by [`LEHMER_MULTIPLIER`] modulo 2^128; the result
/// is the low half of `gstate_1` followed by the high half of `gstate_2`. A
/// state of zero stays zero, so seed with non-zero (ideally odd) values.
#[inline]
pub fn lehmer_randomness(gstate_1: &mut u128, gstate_2: &mut u128) -> u128 {
    *gstate_1 = gstate_1.wrapping_mul(LEHMER_MULTIPLIER);
    *gstate_2 = gstate_2.wrapping_mul(LEHMER_MULTIPLIER);
    (*gstate_1 << 64) | (*gstate_2 >> 64)
}

#[cfg(aes)]
mod aes {
    #[cfg(target_arch = "x86")]
    use std::arch::x86::*;

    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::*;

    #[inline]
    #[target_feature(enable = "sse2,aes")]
    unsafe fn aesenc(state: u128, round_key: u128) -> u128 {
        let mut out = 0u128;
        unsafe {
            let state = _mm_loadu_si128((&state as *const u128).cast::<__m128i>());
            let round_key = _mm_loadu_si128((&round_key as *const u128).cast::<__m128i>());
            _mm_storeu_si128(
                (&mut out as *mut u128).cast::<__m128i>(),
                _mm_aesenc_si128(state, round_key),
            );
        }
        out
    }

    /// One AES round of `gstate_1` keyed by `gstate_2`. Both states advance so
    /// that consecutive draws differ.
    #[inline]
    pub(super) fn aes_randomness(gstate_1: &mut u128, gstate_2: &mut u128) -> u128 {
        // SAFETY: only compiled when the build script detected AES-NI.
        unsafe {
            let out = aesenc(*gstate_1, *gstate_2);
            *gstate_2 = aesenc(*gstate_2, out);
            *gstate_1 = out;
            out
        }
    }
}

/// Draws a 128-bit pseudo-random value and advances both states in place.
///
/// Uses the AES round when the build has it, the Lehmer step otherwise.
/// Callers sharing a state pair across threads must serialize access.
///
/// ```rust
/// let (mut s1, mut s2) = (0x1234_5678u128, 0x9abc_def1u128);
///
/// let first = vintrin::get_randomness(&mut s1, &mut s2);
/// let second = vintrin::get_randomness(&mut s1, &mut s2);
/// assert_ne!(first, second);
/// ```
#[inline]
pub fn get_randomness(gstate_1: &mut u128, gstate_2: &mut u128) -> u128 {
    #[cfg(aes)]
    {
        aes::aes_randomness(gstate_1, gstate_2)
    }
    #[cfg(not(aes))]
    {
        lehmer_randomness(gstate_1, gstate_2)
    }
}

/// Owned generator state that plugs into the `rand` ecosystem.
///
/// Implements [`RngCore`] and [`SeedableRng`], but deliberately not
/// `CryptoRng`. Every seeding path (`from_seed`, `seed_from_u64`, `from_rng`)
/// goes through [`SeedableRng::from_seed`], which forces both halves odd.
///
/// ```rust
/// use rand::{Rng, SeedableRng};
/// use vintrin::GeneratorState;
///
/// let mut rng = GeneratorState::seed_from_u64(7);
/// let roll: u8 = rng.random_range(1..=6);
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorState {
    pub gstate_1: u128,
    pub gstate_2: u128,
}

impl GeneratorState {
    /// Wraps a state pair as given.
    pub const fn new(gstate_1: u128, gstate_2: u128) -> Self {
        Self { gstate_1, gstate_2 }
    }

    /// Next value of [`get_randomness`] for this state.
    #[inline]
    pub fn next_u128(&mut self) -> u128 {
        get_randomness(&mut self.gstate_1, &mut self.gstate_2)
    }
}

impl RngCore for GeneratorState {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_u128() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next_u128() as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(16) {
            let bytes = self.next_u128().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for GeneratorState {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut low = [0u8; 16];
        let mut high = [0u8; 16];
        low.copy_from_slice(&seed[..16]);
        high.copy_from_slice(&seed[16..]);

        // Odd states keep the multiplicative generator away from zero.
        Self::new(u128::from_le_bytes(low) | 1, u128::from_le_bytes(high) | 1)
    }
}
