use super::{
    types::{I16x16, I64x4, I8x32},
    Tier,
};

/// The 256-bit integer operation set, implemented once per tier.
///
/// Implementations must agree bit for bit on every input. Operand preconditions
/// (distinct storage) are checked by the entry points in
/// [`intrin`](super::intrin), not here, so each tier can be driven directly when
/// cross-checking.
pub trait M256Ops {
    const TIER: Tier;

    /// `_mm256_hadd_epi16`: pairwise sums, `a` pairs then `b` pairs in each 128-bit half.
    fn hadd_epi16(a: &I16x16, b: &I16x16) -> I16x16;

    /// `_mm256_add_epi16`: wrapping lane-wise addition.
    fn add_epi16(a: &I16x16, b: &I16x16) -> I16x16;

    /// `_mm256_sub_epi16`: wrapping lane-wise subtraction.
    fn sub_epi16(a: &I16x16, b: &I16x16) -> I16x16;

    /// `_mm256_cmpgt_epi16`: `-1` where `a > b`, `0` elsewhere.
    fn cmpgt_epi16(a: &I16x16, b: &I16x16) -> I16x16;

    /// `_mm256_sign_epi16`: `a`, `0` or `-a` following the sign of `b`.
    fn sign_epi16(a: &I16x16, b: &I16x16) -> I16x16;

    /// `_mm256_abs_epi16`: lane-wise absolute value, `i16::MIN` maps to itself.
    fn abs_epi16(a: &I16x16) -> I16x16;

    /// `_mm256_slli_epi16`: left shift by `IMM8` in `0..=16`.
    fn slli_epi16<const IMM8: i32>(a: &I16x16) -> I16x16;

    /// `_mm256_srli_epi16`: logical right shift by `IMM8` in `0..=16`.
    fn srli_epi16<const IMM8: i32>(a: &I16x16) -> I16x16;

    /// `_mm256_permute4x64_epi64` on 64-bit lanes.
    fn permute4x64_epi64<const IMM8: i32>(a: &I64x4) -> I64x4;

    /// `_mm256_permute4x64_epi64` on blocks of four 16-bit lanes.
    fn permute4x64_epi16<const IMM8: i32>(a: &I16x16) -> I16x16;

    /// `_mm256_xor_si256`.
    fn xor_epi64(a: &I64x4, b: &I64x4) -> I64x4;

    /// `_mm256_or_si256`.
    fn or_epi64(a: &I64x4, b: &I64x4) -> I64x4;

    /// `_mm256_and_si256`.
    fn and_epi64(a: &I64x4, b: &I64x4) -> I64x4;

    /// `_mm256_shuffle_epi8`: byte shuffle confined to each 128-bit half.
    fn shuffle_epi8(a: &I8x32, b: &I8x32) -> I8x32;

    /// `_mm256_broadcastsi128_si256`: `value` in both 128-bit halves.
    fn broadcastsi128_si256(value: u128) -> I16x16;
}
