//! Tiered 256-bit integer operations.
//!
//! The build script inspects the target (and, on native builds, the host CPU)
//! and emits exactly one of the following configurations:
//!
//! | cfg                | Tiers compiled              | [`Active`] tier        |
//! |--------------------|-----------------------------|------------------------|
//! | `avx2` (+ `sse`)   | scalar, sse, avx2           | [`avx2::Avx2`]         |
//! | `sse`              | scalar, sse                 | [`sse::Sse`]           |
//! | `fallback`         | scalar                      | [`fallback::Scalar`]   |
//!
//! Every compiled tier implements [`M256Ops`], so lower tiers stay available for
//! cross-checking against the active one (see [`verify`]). Set `VINTRIN_TIER` at
//! build time to force a tier.

use std::{fmt, str::FromStr};

use crate::error::{unknown_tier, IntrinError};

#[cfg(avx2)]
pub mod avx2;

#[cfg(sse)]
pub mod sse;

pub mod fallback;

pub mod bits;
pub mod intrin;
pub mod random;
pub mod slice;
pub mod traits;
pub mod types;
pub mod verify;

#[cfg(test)]
mod tests;

pub use slice::{BinaryOp, SimdBatch};
pub use traits::M256Ops;

/// Tier used by the `m256_*` entry points in [`intrin`].
#[cfg(avx2)]
pub type Active = avx2::Avx2;

/// Tier used by the `m256_*` entry points in [`intrin`].
#[cfg(all(sse, not(avx2)))]
pub type Active = sse::Sse;

/// Tier used by the `m256_*` entry points in [`intrin`].
#[cfg(not(sse))]
pub type Active = fallback::Scalar;

/// One of the interchangeable implementation strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// Plain Rust, available everywhere.
    Scalar,
    /// SSE2/SSSE3 instructions over two 128-bit halves.
    Sse,
    /// AVX2 256-bit instructions.
    Avx2,
}

impl Tier {
    /// The tier selected for this build.
    pub const ACTIVE: Tier = <Active as M256Ops>::TIER;

    /// All tiers, lowest first.
    pub const ALL: [Tier; 3] = [Tier::Scalar, Tier::Sse, Tier::Avx2];

    pub const fn name(self) -> &'static str {
        match self {
            Tier::Scalar => "scalar",
            Tier::Sse => "sse",
            Tier::Avx2 => "avx2",
        }
    }

    /// Whether this tier's implementation exists in the current build.
    pub const fn is_compiled(self) -> bool {
        match self {
            Tier::Scalar => true,
            Tier::Sse => cfg!(sse),
            Tier::Avx2 => cfg!(avx2),
        }
    }

    /// Tiers compiled into this build, lowest first.
    pub fn compiled() -> Vec<Tier> {
        Self::ALL
            .into_iter()
            .filter(|tier| tier.is_compiled())
            .collect()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = IntrinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scalar" | "fallback" => Ok(Tier::Scalar),
            "sse" | "ssse3" => Ok(Tier::Sse),
            "avx2" => Ok(Tier::Avx2),
            _ => Err(unknown_tier(s)),
        }
    }
}
