//! Scalar tier.
//!
//! Plain Rust versions of each instruction, always compiled. This is the
//! reference the vector tiers are checked against, so every function spells out
//! the instruction's semantics lane by lane, including wraparound and the
//! 128-bit half boundaries. Where the instruction is data-dependent (sign, abs,
//! shuffle) the code stays branchless.

use super::{
    bits::{e_sign, PermuteControl, ShiftAmount, SHUFFLE_INDEX_MASK},
    traits::M256Ops,
    types::{I16x16, I64x4, I8x32, BLOCK_LANES_16, HALF_LANES_16, HALF_LANES_8},
    Tier,
};

/// Scalar implementation of [`M256Ops`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Scalar;

#[inline(always)]
fn zip_lanes<T: Copy + Default, const N: usize>(
    a: &[T; N],
    b: &[T; N],
    op: impl Fn(T, T) -> T,
) -> [T; N] {
    let mut c = [T::default(); N];
    for i in 0..N {
        c[i] = op(a[i], b[i]);
    }
    c
}

#[inline(always)]
fn map_lanes<T: Copy + Default, const N: usize>(a: &[T; N], op: impl Fn(T) -> T) -> [T; N] {
    let mut c = [T::default(); N];
    for i in 0..N {
        c[i] = op(a[i]);
    }
    c
}

impl M256Ops for Scalar {
    const TIER: Tier = Tier::Scalar;

    #[inline]
    fn hadd_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        let mut c = [0i16; 16];
        for half in (0..16).step_by(HALF_LANES_16) {
            for k in 0..4 {
                c[half + k] = a[half + 2 * k].wrapping_add(a[half + 2 * k + 1]);
                c[half + 4 + k] = b[half + 2 * k].wrapping_add(b[half + 2 * k + 1]);
            }
        }
        c
    }

    #[inline]
    fn add_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        zip_lanes(a, b, i16::wrapping_add)
    }

    #[inline]
    fn sub_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        zip_lanes(a, b, i16::wrapping_sub)
    }

    #[inline]
    fn cmpgt_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        // 0 or 1, negated into an all-zero or all-one lane.
        zip_lanes(a, b, |x, y| -((x > y) as i16))
    }

    #[inline]
    fn sign_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
        zip_lanes(a, b, |x, y| x.wrapping_mul(e_sign(y)))
    }

    #[inline]
    fn abs_epi16(a: &I16x16) -> I16x16 {
        map_lanes(a, |x| {
            // All ones for negative lanes, all zeros otherwise.
            let sign_extend = x >> (i16::BITS - 1);
            (x ^ sign_extend).wrapping_sub(sign_extend)
        })
    }

    #[inline]
    fn slli_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
        let bits = ShiftAmount::<IMM8>::BITS;
        map_lanes(a, |x| (x as u16).checked_shl(bits).unwrap_or(0) as i16)
    }

    #[inline]
    fn srli_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
        let bits = ShiftAmount::<IMM8>::BITS;
        // The shift must happen on u16: an i16 shift would copy the sign bit in.
        map_lanes(a, |x| (x as u16).checked_shr(bits).unwrap_or(0) as i16)
    }

    #[inline]
    fn permute4x64_epi64<const IMM8: i32>(a: &I64x4) -> I64x4 {
        let [zero, first, second, third] = PermuteControl::<IMM8>::SOURCES;
        [a[zero], a[first], a[second], a[third]]
    }

    #[inline]
    fn permute4x64_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
        let sources = PermuteControl::<IMM8>::SOURCES;
        let mut b = [0i16; 16];
        for (block, source) in sources.into_iter().enumerate() {
            let dst = block * BLOCK_LANES_16;
            let src = source * BLOCK_LANES_16;
            b[dst..dst + BLOCK_LANES_16].copy_from_slice(&a[src..src + BLOCK_LANES_16]);
        }
        b
    }

    #[inline]
    fn xor_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
        zip_lanes(a, b, |x, y| x ^ y)
    }

    #[inline]
    fn or_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
        zip_lanes(a, b, |x, y| x | y)
    }

    #[inline]
    fn and_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
        zip_lanes(a, b, |x, y| x & y)
    }

    #[inline]
    fn shuffle_epi8(a: &I8x32, b: &I8x32) -> I8x32 {
        let mut c = [0i8; 32];
        for half in (0..32).step_by(HALF_LANES_8) {
            for i in half..half + HALF_LANES_8 {
                // Arithmetic shift spreads the high control bit over the lane.
                let keep = !(b[i] >> 7);
                let pos = (b[i] & SHUFFLE_INDEX_MASK) as usize;
                c[i] = a[half + pos] & keep;
            }
        }
        c
    }

    #[inline]
    fn broadcastsi128_si256(value: u128) -> I16x16 {
        let mut a = [0i16; 16];
        for k in 0..HALF_LANES_16 {
            let lane = (value >> (16 * k)) as u16 as i16;
            a[k] = lane;
            a[k + HALF_LANES_16] = lane;
        }
        a
    }
}
