//! Lane containers.
//!
//! Vectors are plain arrays so they can live anywhere (stack, `Vec`, struct
//! fields) without alignment requirements. Lane `i` of an array maps to bits
//! `[w * i, w * (i + 1))` of the 256-bit register, as on x86.

/// Sixteen signed 16-bit lanes.
pub type I16x16 = [i16; 16];

/// Thirty-two signed 8-bit lanes.
pub type I8x32 = [i8; 32];

/// Four signed 64-bit lanes.
pub type I64x4 = [i64; 4];

/// Number of 16-bit lanes in a 128-bit half.
pub const HALF_LANES_16: usize = 8;

/// Number of 8-bit lanes in a 128-bit half.
pub const HALF_LANES_8: usize = 16;

/// Number of 16-bit lanes moved together by the 16-bit block permutation.
pub const BLOCK_LANES_16: usize = 4;
