//! Tier equivalence tests.
//!
//! These live inside the library because the tier modules only exist under the
//! cfgs the build script hands to this crate.

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{
    fallback::Scalar,
    traits::M256Ops,
    types::{I16x16, I64x4, I8x32},
    verify, Active, Tier,
};

/// Expands `$f::<$T, IMM8>(&mut $acc)` for all 256 permutation controls.
macro_rules! for_each_control {
    ($f:ident, $T:ty, $acc:ident) => {
        for_each_control!(@d $f, $T, $acc; 0 1 2 3);
    };
    (@d $f:ident, $T:ty, $acc:ident; $($d:literal)+) => {
        $( for_each_control!(@c $f, $T, $acc, $d; 0 1 2 3); )+
    };
    (@c $f:ident, $T:ty, $acc:ident, $d:literal; $($c:literal)+) => {
        $( for_each_control!(@b $f, $T, $acc, $d, $c; 0 1 2 3); )+
    };
    (@b $f:ident, $T:ty, $acc:ident, $d:literal, $c:literal; $($b:literal)+) => {
        $( for_each_control!(@a $f, $T, $acc, $d, $c, $b; 0 1 2 3); )+
    };
    (@a $f:ident, $T:ty, $acc:ident, $d:literal, $c:literal, $b:literal; $($a:literal)+) => {
        $( $f::<$T, { ($d << 6) | ($c << 4) | ($b << 2) | $a }>(&mut $acc); )+
    };
}

/// Packs four 16-bit lanes per 64-bit block, lowest lane in the low bits.
fn blocks_of(a: &I16x16) -> I64x4 {
    std::array::from_fn(|j| {
        (0..4).fold(0u64, |block, k| block | (a[4 * j + k] as u16 as u64) << (16 * k)) as i64
    })
}

fn check_control<T: M256Ops, const IMM8: i32>(distinct: &mut Vec<i32>) {
    let source = |j: usize| ((IMM8 >> (2 * j)) & 3) as usize;

    let a64: I64x4 = [
        0x0123_4567_89ab_cdef,
        -0x0fed_cba9_8765_4321,
        i64::MIN,
        0x7f7f_0000_ffff_0101,
    ];
    let expected64: I64x4 = std::array::from_fn(|j| a64[source(j)]);
    assert_eq!(
        T::permute4x64_epi64::<IMM8>(&a64),
        expected64,
        "{} permute4x64_epi64::<{:#04x}>",
        T::TIER,
        IMM8
    );

    let a16: I16x16 = std::array::from_fn(|i| (i as i16 - 8) * 1021);
    let expected16: I16x16 = std::array::from_fn(|i| a16[4 * source(i / 4) + i % 4]);
    let permuted16 = T::permute4x64_epi16::<IMM8>(&a16);
    assert_eq!(
        permuted16,
        expected16,
        "{} permute4x64_epi16::<{:#04x}>",
        T::TIER,
        IMM8
    );

    // The 16-bit form moves exactly the bits the 64-bit form moves.
    assert_eq!(
        blocks_of(&permuted16),
        T::permute4x64_epi64::<IMM8>(&blocks_of(&a16))
    );

    let mut sources: Vec<usize> = (0..4).map(source).collect();
    sources.sort_unstable();
    sources.dedup();
    if sources.len() == 4 {
        distinct.push(IMM8);
    }
}

fn check_all_controls<T: M256Ops>() {
    let mut distinct = Vec::new();
    for_each_control!(check_control, T, distinct);

    assert_eq!(distinct.len(), 24);
    assert!(distinct.contains(&0xE4));
    assert!(distinct.contains(&0x1B));
}

fn check_worked_examples<T: M256Ops>() {
    let a: I16x16 = std::array::from_fn(|i| i as i16 + 1);
    let b: I16x16 = std::array::from_fn(|i| i as i16 + 101);
    assert_eq!(
        T::hadd_epi16(&a, &b),
        [3, 7, 11, 15, 203, 207, 211, 215, 19, 23, 27, 31, 219, 223, 227, 231]
    );

    let mut s = [0i16; 16];
    s[..3].copy_from_slice(&[-3, 0, 7]);
    let sign = T::sign_epi16(&[5; 16], &s);
    assert_eq!(&sign[..3], &[-5, 0, 5]);

    assert_eq!(T::abs_epi16(&[i16::MIN; 16]), [i16::MIN; 16]);
    assert_eq!(T::add_epi16(&[i16::MAX; 16], &[1; 16]), [i16::MIN; 16]);
    assert_eq!(T::srli_epi16::<1>(&[-1; 16]), [0x7FFF; 16]);
    assert_eq!(T::slli_epi16::<16>(&[-1; 16]), [0; 16]);
    assert_eq!(T::cmpgt_epi16(&[2; 16], &[1; 16]), [-1; 16]);
    assert_eq!(
        T::permute4x64_epi64::<0b00_01_10_11>(&[1, 2, 3, 4]),
        [4, 3, 2, 1]
    );

    let bytes: I8x32 = std::array::from_fn(|i| i as i8);
    let mut control = [0i8; 32];
    control[16] = 15;
    control[17] = i8::MIN;
    let shuffled = T::shuffle_epi8(&bytes, &control);
    assert_eq!(shuffled[0], 0);
    assert_eq!(shuffled[16], 31);
    assert_eq!(shuffled[17], 0);

    assert_eq!(
        T::broadcastsi128_si256(0x0008_0007_0006_0005_0004_0003_0002_0001),
        [1, 2, 3, 4, 5, 6, 7, 8, 1, 2, 3, 4, 5, 6, 7, 8]
    );
}

#[test]
fn test_scalar_permute_all_controls() {
    check_all_controls::<Scalar>();
}

#[cfg(sse)]
#[test]
fn test_sse_permute_all_controls() {
    check_all_controls::<super::sse::Sse>();
}

#[cfg(avx2)]
#[test]
fn test_avx2_permute_all_controls() {
    check_all_controls::<super::avx2::Avx2>();
}

#[test]
fn test_scalar_worked_examples() {
    check_worked_examples::<Scalar>();
}

#[cfg(sse)]
#[test]
fn test_sse_worked_examples() {
    check_worked_examples::<super::sse::Sse>();
}

#[cfg(avx2)]
#[test]
fn test_avx2_worked_examples() {
    check_worked_examples::<super::avx2::Avx2>();
}

#[test]
fn test_every_compiled_tier_matches_scalar() {
    for tier in Tier::compiled() {
        for seed in [0, 1, 0xDEAD_BEEF] {
            let result = verify::cross_check(tier, 1000, seed);
            assert!(result.is_ok(), "{tier}: {result:?}");
        }
    }
}

#[test]
fn test_active_tier_is_compiled() {
    assert!(Tier::ACTIVE.is_compiled());
    assert_eq!(Tier::ACTIVE, <Active as M256Ops>::TIER);
    assert_eq!(Tier::compiled().last(), Some(&Tier::ACTIVE));
}

#[test]
fn test_active_matches_scalar_on_random_lanes() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..1000 {
        let a: I16x16 = std::array::from_fn(|_| rng.random());
        let b: I16x16 = std::array::from_fn(|_| rng.random());

        assert_eq!(Active::hadd_epi16(&a, &b), Scalar::hadd_epi16(&a, &b));
        assert_eq!(Active::sign_epi16(&a, &b), Scalar::sign_epi16(&a, &b));
        assert_eq!(Active::abs_epi16(&a), Scalar::abs_epi16(&a));
    }
}

#[test]
fn test_tier_names_round_trip() {
    for tier in Tier::ALL {
        assert_eq!(tier.name().parse::<Tier>(), Ok(tier));
        assert_eq!(tier.to_string(), tier.name());
    }
    assert_eq!("SSSE3".parse::<Tier>(), Ok(Tier::Sse));
    assert_eq!("fallback".parse::<Tier>(), Ok(Tier::Scalar));
    assert!("neon".parse::<Tier>().is_err());
}
