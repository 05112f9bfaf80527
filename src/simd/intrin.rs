//! `m256_*` entry points.
//!
//! Naming follows `m<register size>_<operation>_<lane type>`, mirroring the
//! Intel intrinsic each function reproduces. Every function forwards to the
//! [`Active`] tier chosen at build time.
//!
//! # Distinct-storage preconditions
//!
//! [`m256_or_epi64`], [`m256_and_epi64`], [`m256_sign_epi16`] and
//! [`m256_shuffle_epi8`] reject operands that are the same storage: combining a
//! vector with itself is either a no-op or meaningless for these operations.
//! The check is a `debug_assert!`, so debug builds panic. Release builds skip
//! it, and the result of an aliased call is then unspecified: it is still
//! memory-safe, but callers must not rely on it.
//! [`m256_xor_epi64`] accepts aliased operands (`x ^ x` is the usual way to zero a
//! register).

use super::{
    traits::M256Ops,
    types::{I16x16, I64x4, I8x32},
    Active,
};

#[inline(always)]
#[track_caller]
fn debug_assert_distinct<T>(a: &T, b: &T, op: &str) {
    debug_assert!(
        !std::ptr::eq(a, b),
        "{op}: operands must not share storage"
    );
}

/// Horizontal pairwise addition.
///
/// For each 128-bit half `h` (lanes `0..8` and `8..16`), lanes `h..h + 4` hold
/// the sums of adjacent pairs of `a[h..h + 8]` and lanes `h + 4..h + 8` the sums
/// of adjacent pairs of `b[h..h + 8]`. Sums wrap.
///
/// ```rust
/// use vintrin::m256_hadd_epi16;
///
/// let a: [i16; 16] = std::array::from_fn(|i| i as i16 + 1);
/// let b: [i16; 16] = std::array::from_fn(|i| i as i16 + 101);
///
/// assert_eq!(
///     m256_hadd_epi16(&a, &b),
///     [3, 7, 11, 15, 203, 207, 211, 215, 19, 23, 27, 31, 219, 223, 227, 231]
/// );
/// ```
#[inline]
pub fn m256_hadd_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
    Active::hadd_epi16(a, b)
}

/// Lane-wise wrapping addition.
#[inline]
pub fn m256_add_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
    Active::add_epi16(a, b)
}

/// Lane-wise wrapping subtraction, `a - b`.
#[inline]
pub fn m256_sub_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
    Active::sub_epi16(a, b)
}

/// Signed compare: `-1` (all bits set) where `a[i] > b[i]`, `0` elsewhere.
#[inline]
pub fn m256_cmpgt_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
    Active::cmpgt_epi16(a, b)
}

/// Signed inclusion: `a[i]`, `0` or `-a[i]` as `b[i]` is positive, zero or negative.
///
/// Negating `i16::MIN` wraps to `i16::MIN`.
///
/// # Panics
///
/// In debug builds, if `a` and `b` are the same storage.
#[inline]
#[track_caller]
pub fn m256_sign_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
    debug_assert_distinct(a, b, "m256_sign_epi16");
    Active::sign_epi16(a, b)
}

/// Lane-wise absolute value; `i16::MIN` maps to itself.
#[inline]
pub fn m256_abs_epi16(a: &I16x16) -> I16x16 {
    Active::abs_epi16(a)
}

/// Left shift of every lane by `IMM8` bits, `0 <= IMM8 <= 16`.
///
/// Shifting by 16 clears every lane. Other amounts fail to compile.
#[inline]
pub fn m256_slli_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
    Active::slli_epi16::<IMM8>(a)
}

/// Logical (zero-filling) right shift of every lane by `IMM8` bits,
/// `0 <= IMM8 <= 16`.
///
/// ```rust
/// use vintrin::m256_srli_epi16;
///
/// assert_eq!(m256_srli_epi16::<1>(&[-1; 16]), [0x7FFF; 16]);
/// ```
#[inline]
pub fn m256_srli_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
    Active::srli_epi16::<IMM8>(a)
}

/// Permutes the four 64-bit lanes of `a`: output lane `j` is
/// `a[(IMM8 >> 2 * j) & 3]`.
///
/// `IMM8` must be in `0..=255`; other values fail to compile.
///
/// ```rust
/// use vintrin::m256_permute4x64_epi64;
///
/// assert_eq!(m256_permute4x64_epi64::<0b00_01_10_11>(&[1, 2, 3, 4]), [4, 3, 2, 1]);
/// ```
#[inline]
pub fn m256_permute4x64_epi64<const IMM8: i32>(a: &I64x4) -> I64x4 {
    Active::permute4x64_epi64::<IMM8>(a)
}

/// Same permutation as [`m256_permute4x64_epi64`], moving blocks of four
/// 16-bit lanes.
#[inline]
pub fn m256_permute4x64_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
    Active::permute4x64_epi16::<IMM8>(a)
}

/// Bitwise XOR. `a` and `b` may be the same storage.
#[inline]
pub fn m256_xor_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
    Active::xor_epi64(a, b)
}

/// Bitwise OR.
///
/// # Panics
///
/// In debug builds, if `a` and `b` are the same storage.
#[inline]
#[track_caller]
pub fn m256_or_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
    debug_assert_distinct(a, b, "m256_or_epi64");
    Active::or_epi64(a, b)
}

/// Bitwise AND.
///
/// # Panics
///
/// In debug builds, if `a` and `b` are the same storage.
#[inline]
#[track_caller]
pub fn m256_and_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
    debug_assert_distinct(a, b, "m256_and_epi64");
    Active::and_epi64(a, b)
}

/// Byte shuffle within each 128-bit half.
///
/// Output byte `i` is zero when bit 7 of `b[i]` is set, otherwise byte
/// `b[i] & 0x0F` of the half of `a` that contains lane `i`. Bytes never move
/// across the two halves.
///
/// # Panics
///
/// In debug builds, if `a` and `b` are the same storage.
#[inline]
#[track_caller]
pub fn m256_shuffle_epi8(a: &I8x32, b: &I8x32) -> I8x32 {
    debug_assert_distinct(a, b, "m256_shuffle_epi8");
    Active::shuffle_epi8(a, b)
}

/// Copies the eight 16-bit lanes of `value` into both 128-bit halves.
#[inline]
pub fn m256_broadcastsi128_si256(value: u128) -> I16x16 {
    Active::broadcastsi128_si256(value)
}
