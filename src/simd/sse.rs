//! SSE2/SSSE3 tier: each 256-bit operation as two 128-bit instructions.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: SSSE3 (Intel Core 2 / AMD Bobcat and later)
//! - **Target Architecture**: x86 or x86_64
//! - **Compilation**: Compiled when the build script emits `cfg(sse)`; the
//!   kernels carry `#[target_feature(enable = "ssse3")]`.
//!
//! Most AVX2 integer instructions operate on two independent 128-bit halves,
//! so applying the SSE form to the low and high half of each operand gives the
//! same result. The cross-half permutation has no single SSE form and is built
//! from 64-bit unpacks instead.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::{
    bits::{PermuteControl, ShiftAmount},
    traits::M256Ops,
    types::{I16x16, I64x4, I8x32},
    Tier,
};

/// SSE2/SSSE3 implementation of [`M256Ops`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Sse;

mod kernels {
    use super::*;

    /// Loads the low and high 128-bit halves of a 256-bit array.
    #[inline]
    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn load<T, const N: usize>(src: &[T; N]) -> [__m128i; 2] {
        debug_assert_eq!(std::mem::size_of::<[T; N]>(), 32);
        let ptr = src.as_ptr().cast::<__m128i>();
        unsafe { [_mm_loadu_si128(ptr), _mm_loadu_si128(ptr.add(1))] }
    }

    #[inline]
    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn store<T: Copy + Default, const N: usize>(halves: [__m128i; 2]) -> [T; N] {
        debug_assert_eq!(std::mem::size_of::<[T; N]>(), 32);
        let mut out = [T::default(); N];
        let ptr = out.as_mut_ptr().cast::<__m128i>();
        unsafe {
            _mm_storeu_si128(ptr, halves[0]);
            _mm_storeu_si128(ptr.add(1), halves[1]);
        }
        out
    }

    #[inline]
    #[target_feature(enable = "ssse3")]
    pub(super) unsafe fn hadd_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        unsafe {
            let [a_lo, a_hi] = load(a);
            let [b_lo, b_hi] = load(b);
            store([_mm_hadd_epi16(a_lo, b_lo), _mm_hadd_epi16(a_hi, b_hi)])
        }
    }

    #[inline]
    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn add_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        unsafe {
            let [a_lo, a_hi] = load(a);
            let [b_lo, b_hi] = load(b);
            store([_mm_add_epi16(a_lo, b_lo), _mm_add_epi16(a_hi, b_hi)])
        }
    }

    #[inline]
    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn sub_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        unsafe {
            let [a_lo, a_hi] = load(a);
            let [b_lo, b_hi] = load(b);
            store([_mm_sub_epi16(a_lo, b_lo), _mm_sub_epi16(a_hi, b_hi)])
        }
    }

    #[inline]
    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn cmpgt_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        unsafe {
            let [a_lo, a_hi] = load(a);
            let [b_lo, b_hi] = load(b);
            store([_mm_cmpgt_epi16(a_lo, b_lo), _mm_cmpgt_epi16(a_hi, b_hi)])
        }
    }

    #[inline]
    #[target_feature(enable = "ssse3")]
    pub(super) unsafe fn sign_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        unsafe {
            let [a_lo, a_hi] = load(a);
            let [b_lo, b_hi] = load(b);
            store([_mm_sign_epi16(a_lo, b_lo), _mm_sign_epi16(a_hi, b_hi)])
        }
    }

    #[inline]
    #[target_feature(enable = "ssse3")]
    pub(super) unsafe fn abs_epi16(a: &I16x16) -> I16x16 {
        unsafe {
            let [a_lo, a_hi] = load(a);
            store([_mm_abs_epi16(a_lo), _mm_abs_epi16(a_hi)])
        }
    }

    #[inline]
    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn slli_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
        unsafe {
            let [a_lo, a_hi] = load(a);
            store([_mm_slli_epi16::<IMM8>(a_lo), _mm_slli_epi16::<IMM8>(a_hi)])
        }
    }

    #[inline]
    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn srli_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
        unsafe {
            let [a_lo, a_hi] = load(a);
            store([_mm_srli_epi16::<IMM8>(a_lo), _mm_srli_epi16::<IMM8>(a_hi)])
        }
    }

    /// Moves 64-bit block `source` (0..4) of a split 256-bit value into the low
    /// 64 bits of a register.
    #[inline]
    #[target_feature(enable = "sse2")]
    unsafe fn block_to_low(halves: [__m128i; 2], source: usize) -> __m128i {
        let half = halves[source >> 1];
        if source & 1 == 0 {
            half
        } else {
            unsafe { _mm_unpackhi_epi64(half, half) }
        }
    }

    /// Shared by both permutation widths: a 64-bit block is the same 8 bytes
    /// whether it holds one `i64` or four `i16`.
    #[inline]
    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn permute_blocks<const IMM8: i32>(halves: [__m128i; 2]) -> [__m128i; 2] {
        let [zero, first, second, third] = PermuteControl::<IMM8>::SOURCES;
        unsafe {
            [
                _mm_unpacklo_epi64(block_to_low(halves, zero), block_to_low(halves, first)),
                _mm_unpacklo_epi64(block_to_low(halves, second), block_to_low(halves, third)),
            ]
        }
    }

    #[inline]
    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn permute4x64_epi64<const IMM8: i32>(a: &I64x4) -> I64x4 {
        unsafe { store(permute_blocks::<IMM8>(load(a))) }
    }

    #[inline]
    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn permute4x64_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
        unsafe { store(permute_blocks::<IMM8>(load(a))) }
    }

    #[inline]
    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn xor_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
        unsafe {
            let [a_lo, a_hi] = load(a);
            let [b_lo, b_hi] = load(b);
            store([_mm_xor_si128(a_lo, b_lo), _mm_xor_si128(a_hi, b_hi)])
        }
    }

    #[inline]
    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn or_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
        unsafe {
            let [a_lo, a_hi] = load(a);
            let [b_lo, b_hi] = load(b);
            store([_mm_or_si128(a_lo, b_lo), _mm_or_si128(a_hi, b_hi)])
        }
    }

    #[inline]
    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn and_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
        unsafe {
            let [a_lo, a_hi] = load(a);
            let [b_lo, b_hi] = load(b);
            store([_mm_and_si128(a_lo, b_lo), _mm_and_si128(a_hi, b_hi)])
        }
    }

    #[inline]
    #[target_feature(enable = "ssse3")]
    pub(super) unsafe fn shuffle_epi8(a: &I8x32, b: &I8x32) -> I8x32 {
        unsafe {
            let [a_lo, a_hi] = load(a);
            let [b_lo, b_hi] = load(b);
            store([_mm_shuffle_epi8(a_lo, b_lo), _mm_shuffle_epi8(a_hi, b_hi)])
        }
    }

    #[inline]
    #[target_feature(enable = "sse2")]
    pub(super) unsafe fn broadcastsi128_si256(value: u128) -> I16x16 {
        unsafe {
            let half = _mm_loadu_si128((&value as *const u128).cast::<__m128i>());
            store([half, half])
        }
    }
}

// SAFETY (all methods below): this module is only compiled when the build
// script selected the sse or avx2 tier, i.e. the target supports SSSE3.
impl M256Ops for Sse {
    const TIER: Tier = Tier::Sse;

    #[inline]
    fn hadd_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        unsafe { kernels::hadd_epi16(a, b) }
    }

    #[inline]
    fn add_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        unsafe { kernels::add_epi16(a, b) }
    }

    #[inline]
    fn sub_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        unsafe { kernels::sub_epi16(a, b) }
    }

    #[inline]
    fn cmpgt_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        unsafe { kernels::cmpgt_epi16(a, b) }
    }

    #[inline]
    fn sign_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        unsafe { kernels::sign_epi16(a, b) }
    }

    #[inline]
    fn abs_epi16(a: &I16x16) -> I16x16 {
        unsafe { kernels::abs_epi16(a) }
    }

    #[inline]
    fn slli_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
        let () = ShiftAmount::<IMM8>::VALID;
        unsafe { kernels::slli_epi16::<IMM8>(a) }
    }

    #[inline]
    fn srli_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
        let () = ShiftAmount::<IMM8>::VALID;
        unsafe { kernels::srli_epi16::<IMM8>(a) }
    }

    #[inline]
    fn permute4x64_epi64<const IMM8: i32>(a: &I64x4) -> I64x4 {
        let () = PermuteControl::<IMM8>::VALID;
        unsafe { kernels::permute4x64_epi64::<IMM8>(a) }
    }

    #[inline]
    fn permute4x64_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
        let () = PermuteControl::<IMM8>::VALID;
        unsafe { kernels::permute4x64_epi16::<IMM8>(a) }
    }

    #[inline]
    fn xor_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
        unsafe { kernels::xor_epi64(a, b) }
    }

    #[inline]
    fn or_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
        unsafe { kernels::or_epi64(a, b) }
    }

    #[inline]
    fn and_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
        unsafe { kernels::and_epi64(a, b) }
    }

    #[inline]
    fn shuffle_epi8(a: &I8x32, b: &I8x32) -> I8x32 {
        unsafe { kernels::shuffle_epi8(a, b) }
    }

    #[inline]
    fn broadcastsi128_si256(value: u128) -> I16x16 {
        unsafe { kernels::broadcastsi128_si256(value) }
    }
}
