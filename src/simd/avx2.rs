//! AVX2 tier: one 256-bit instruction per operation.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Haswell (2013+) or AMD Excavator (2015+)
//! - **Target Architecture**: x86 or x86_64
//! - **Compilation**: Compiled when the build script emits `cfg(avx2)`; the
//!   kernels carry `#[target_feature(enable = "avx2")]`.
//!
//! Arrays are moved in and out of `__m256i` with unaligned loads and stores, so
//! callers never need 32-byte aligned storage.

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

/// AVX2 implementation of [`M256Ops`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Avx2;

mod kernels {
    use super::*;

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn load<T, const N: usize>(src: &[T; N]) -> __m256i {
        debug_assert_eq!(std::mem::size_of::<[T; N]>(), 32);
        unsafe { _mm256_loadu_si256(src.as_ptr().cast::<__m256i>()) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn store<T: Copy + Default, const N: usize>(v: __m256i) -> [T; N] {
        debug_assert_eq!(std::mem::size_of::<[T; N]>(), 32);
        let mut out = [T::default(); N];
        unsafe { _mm256_storeu_si256(out.as_mut_ptr().cast::<__m256i>(), v) };
        out
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn hadd_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        unsafe { store(_mm256_hadd_epi16(load(a), load(b))) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn add_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        unsafe { store(_mm256_add_epi16(load(a), load(b))) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn sub_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        unsafe { store(_mm256_sub_epi16(load(a), load(b))) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn cmpgt_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        unsafe { store(_mm256_cmpgt_epi16(load(a), load(b))) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn sign_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        unsafe { store(_mm256_sign_epi16(load(a), load(b))) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn abs_epi16(a: &I16x16) -> I16x16 {
        unsafe { store(_mm256_abs_epi16(load(a))) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn slli_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
        unsafe { store(_mm256_slli_epi16::<IMM8>(load(a))) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn srli_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
        unsafe { store(_mm256_srli_epi16::<IMM8>(load(a))) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn permute4x64_epi64<const IMM8: i32>(a: &I64x4) -> I64x4 {
        unsafe { store(_mm256_permute4x64_epi64::<IMM8>(load(a))) }
    }

    // Same instruction: four i16 lanes are one 64-bit block in the register.
    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn permute4x64_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
        unsafe { store(_mm256_permute4x64_epi64::<IMM8>(load(a))) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn xor_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
        unsafe { store(_mm256_xor_si256(load(a), load(b))) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn or_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
        unsafe { store(_mm256_or_si256(load(a), load(b))) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn and_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
        unsafe { store(_mm256_and_si256(load(a), load(b))) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn shuffle_epi8(a: &I8x32, b: &I8x32) -> I8x32 {
        unsafe { store(_mm256_shuffle_epi8(load(a), load(b))) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn broadcastsi128_si256(value: u128) -> I16x16 {
        unsafe {
            let half = _mm_loadu_si128((&value as *const u128).cast::<__m128i>());
            store(_mm256_broadcastsi128_si256(half))
        }
    }
}

// SAFETY (all methods below): this module is only compiled when the build
// script selected the avx2 tier, i.e. the target supports AVX2.
impl M256Ops for Avx2 {
    const TIER: Tier = Tier::Avx2;

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
