//! Cross-tier verification.
//!
//! Every tier must produce the same bits as the scalar tier for every input.
//! [`cross_check`] drives one compiled tier and the scalar tier with the same
//! pseudo-random operands (mixed with boundary values) and reports the first
//! lane where they disagree.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{IntrinError, Result};

use super::{
    fallback::Scalar,
    traits::M256Ops,
    types::{I16x16, I64x4, I8x32},
    Tier,
};

/// 16-bit values that exercise wraparound and sign handling.
const EDGE_LANES: [i16; 8] = [0, 1, -1, 2, i16::MAX, i16::MIN, i16::MIN + 1, i16::MAX - 1];

/// Compares `tier` against the scalar tier for `rounds` random operand sets.
///
/// The same `seed` always produces the same operands. Returns
/// [`IntrinError::TierUnavailable`] when `tier` was not compiled into this
/// build and [`IntrinError::Mismatch`] on the first disagreement.
pub fn cross_check(tier: Tier, rounds: usize, seed: u64) -> Result<()> {
    match tier {
        Tier::Scalar => check_against_scalar::<Scalar>(rounds, seed),
        #[cfg(sse)]
        Tier::Sse => check_against_scalar::<super::sse::Sse>(rounds, seed),
        #[cfg(avx2)]
        Tier::Avx2 => check_against_scalar::<super::avx2::Avx2>(rounds, seed),
        #[allow(unreachable_patterns)]
        _ => Err(IntrinError::TierUnavailable { tier }),
    }
}

/// Runs [`cross_check`] on every compiled tier.
pub fn cross_check_all(rounds: usize, seed: u64) -> Result<()> {
    for tier in Tier::compiled() {
        cross_check(tier, rounds, seed)?;
    }
    Ok(())
}

#[inline]
fn compare<L, const N: usize>(
    op: &'static str,
    tier: Tier,
    expected: &[L; N],
    actual: &[L; N],
) -> Result<()>
where
    L: Copy + PartialEq + Into<i64>,
{
    match expected.iter().zip(actual).position(|(e, a)| e != a) {
        None => Ok(()),
        Some(lane) => Err(IntrinError::Mismatch {
            op,
            tier,
            lane,
            expected: expected[lane].into(),
            actual: actual[lane].into(),
        }),
    }
}

fn random_i16x16(rng: &mut StdRng) -> I16x16 {
    std::array::from_fn(|_| {
        if rng.random_ratio(1, 4) {
            EDGE_LANES[rng.random_range(0..EDGE_LANES.len())]
        } else {
            rng.random()
        }
    })
}

fn random_i64x4(rng: &mut StdRng) -> I64x4 {
    std::array::from_fn(|_| match rng.random_range(0..8) {
        0 => 0,
        1 => -1,
        2 => i64::MIN,
        _ => rng.random(),
    })
}

/// Shuffle controls: mostly in-range indices, some with bit 7 set, some with
/// junk in bits 4..7.
fn random_shuffle_control(rng: &mut StdRng) -> I8x32 {
    std::array::from_fn(|_| match rng.random_range(0..4) {
        0 => rng.random::<i8>() | i8::MIN,
        1 => rng.random::<i8>() & 0x7F,
        _ => rng.random_range(0..16),
    })
}

macro_rules! check_shifts {
    ($T:ty, $a:expr; $($imm:literal),+) => {
        $(
            compare(
                concat!("slli_epi16::<", stringify!($imm), ">"),
                <$T>::TIER,
                &Scalar::slli_epi16::<$imm>($a),
                &<$T>::slli_epi16::<$imm>($a),
            )?;
            compare(
                concat!("srli_epi16::<", stringify!($imm), ">"),
                <$T>::TIER,
                &Scalar::srli_epi16::<$imm>($a),
                &<$T>::srli_epi16::<$imm>($a),
            )?;
        )+
    };
}

macro_rules! check_permutes {
    ($T:ty, $a64:expr, $a16:expr; $($imm:literal),+) => {
        $(
            compare(
                concat!("permute4x64_epi64::<", stringify!($imm), ">"),
                <$T>::TIER,
                &Scalar::permute4x64_epi64::<$imm>($a64),
                &<$T>::permute4x64_epi64::<$imm>($a64),
            )?;
            compare(
                concat!("permute4x64_epi16::<", stringify!($imm), ">"),
                <$T>::TIER,
                &Scalar::permute4x64_epi16::<$imm>($a16),
                &<$T>::permute4x64_epi16::<$imm>($a16),
            )?;
        )+
    };
}

fn check_against_scalar<T: M256Ops>(rounds: usize, seed: u64) -> Result<()> {
    let tier = T::TIER;
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..rounds {
        let a = random_i16x16(&mut rng);
        let b = random_i16x16(&mut rng);

        compare("hadd_epi16", tier, &Scalar::hadd_epi16(&a, &b), &T::hadd_epi16(&a, &b))?;
        compare("add_epi16", tier, &Scalar::add_epi16(&a, &b), &T::add_epi16(&a, &b))?;
        compare("sub_epi16", tier, &Scalar::sub_epi16(&a, &b), &T::sub_epi16(&a, &b))?;
        compare("cmpgt_epi16", tier, &Scalar::cmpgt_epi16(&a, &b), &T::cmpgt_epi16(&a, &b))?;
        compare("sign_epi16", tier, &Scalar::sign_epi16(&a, &b), &T::sign_epi16(&a, &b))?;
        compare("abs_epi16", tier, &Scalar::abs_epi16(&a), &T::abs_epi16(&a))?;

        check_shifts!(T, &a; 0, 1, 7, 15, 16);

        let x = random_i64x4(&mut rng);
        let y = random_i64x4(&mut rng);

        compare("xor_epi64", tier, &Scalar::xor_epi64(&x, &y), &T::xor_epi64(&x, &y))?;
        compare("xor_epi64 (self)", tier, &Scalar::xor_epi64(&x, &x), &T::xor_epi64(&x, &x))?;
        compare("or_epi64", tier, &Scalar::or_epi64(&x, &y), &T::or_epi64(&x, &y))?;
        compare("and_epi64", tier, &Scalar::and_epi64(&x, &y), &T::and_epi64(&x, &y))?;

        check_permutes!(T, &x, &a; 0x00, 0x1B, 0x4E, 0xB1, 0xD8, 0xE4, 0x39, 0x93, 0xFF, 0x55);

        let bytes: I8x32 = std::array::from_fn(|_| rng.random());
        let control = random_shuffle_control(&mut rng);
        compare(
            "shuffle_epi8",
            tier,
            &Scalar::shuffle_epi8(&bytes, &control),
            &T::shuffle_epi8(&bytes, &control),
        )?;

        let value: u128 = rng.random();
        compare(
            "broadcastsi128_si256",
            tier,
            &Scalar::broadcastsi128_si256(value),
            &T::broadcastsi128_si256(value),
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_agrees_with_itself() {
        assert_eq!(cross_check(Tier::Scalar, 100, 1), Ok(()));
    }

    #[test]
    fn test_compiled_tiers_pass() {
        assert_eq!(cross_check_all(500, 0xC0FFEE), Ok(()));
    }

    #[test]
    fn test_unavailable_tier() {
        for tier in Tier::ALL {
            if !tier.is_compiled() {
                assert_eq!(
                    cross_check(tier, 1, 0),
                    Err(IntrinError::TierUnavailable { tier })
                );
            }
        }
    }

    #[test]
    fn test_compare_reports_first_lane() {
        let expected = [1i16, 2, 3, 4];
        let actual = [1i16, 2, -3, 5];

        let err = compare("add_epi16", Tier::Sse, &expected, &actual).unwrap_err();

        assert_eq!(
            err,
            IntrinError::Mismatch {
                op: "add_epi16",
                tier: Tier::Sse,
                lane: 2,
                expected: 3,
                actual: -3,
            }
        );
    }

    #[test]
    fn test_shuffle_controls_cover_zeroing() {
        let mut rng = StdRng::seed_from_u64(7);
        let zeroed = (0..16)
            .flat_map(|_| random_shuffle_control(&mut rng))
            .filter(|byte| *byte < 0)
            .count();
        assert!(zeroed > 0);
    }
}
