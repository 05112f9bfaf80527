//! Portable 256-bit integer intrinsics.
//!
//! `vintrin` offers a small vocabulary of AVX2 integer operations (horizontal add,
//! compare, shuffle, permute, shift, absolute value, bitwise combine) over plain
//! fixed-size arrays, together with a fast non-cryptographic random source.
//!
//! Each operation has three implementations ("tiers"):
//!
//! - **avx2**: one 256-bit instruction,
//! - **sse**: the same instruction applied to both 128-bit halves (SSE2/SSSE3),
//! - **scalar**: plain Rust that reproduces the instruction bit for bit.
//!
//! The tier is chosen once, at build time, by the build script (see
//! [`simd::Tier`]). Nothing is probed at runtime, and every tier returns the same
//! bits for the same inputs.
//!
//! ```rust
//! use vintrin::simd::intrin::{m256_hadd_epi16, m256_srli_epi16};
//!
//! let a: [i16; 16] = std::array::from_fn(|i| i as i16 + 1);
//! let b: [i16; 16] = std::array::from_fn(|i| i as i16 + 101);
//!
//! let c = m256_hadd_epi16(&a, &b);
//! assert_eq!(&c[..8], &[3, 7, 11, 15, 203, 207, 211, 215]);
//!
//! // Logical shift: the sign bit is not propagated.
//! assert_eq!(m256_srli_epi16::<1>(&[-1; 16]), [0x7FFF; 16]);
//! ```

pub mod error;
pub mod simd;

pub use error::{IntrinError, Result};
pub use simd::intrin::*;
pub use simd::random::{get_randomness, GeneratorState};
pub use simd::types::{I16x16, I64x4, I8x32};
pub use simd::Tier;
