//! Behaviour of the `m256_*` entry points on the active tier.
//!
//! Expected values are written out by hand from the instruction definitions,
//! so these tests hold for whichever tier the build selected.

use rand::{rngs::StdRng, Rng, SeedableRng};
use vintrin::{
    m256_abs_epi16, m256_add_epi16, m256_and_epi64, m256_broadcastsi128_si256,
    m256_cmpgt_epi16, m256_hadd_epi16, m256_or_epi64, m256_shuffle_epi8, m256_sign_epi16,
    m256_slli_epi16, m256_srli_epi16, m256_sub_epi16, m256_xor_epi64, I16x16, I8x32,
};

fn random_lanes(rng: &mut StdRng) -> I16x16 {
    std::array::from_fn(|_| rng.random())
}

#[test]
fn test_hadd_worked_example() {
    let a: I16x16 = std::array::from_fn(|i| i as i16 + 1);
    let b: I16x16 = std::array::from_fn(|i| a[i] + 100);

    assert_eq!(
        m256_hadd_epi16(&a, &b),
        [3, 7, 11, 15, 203, 207, 211, 215, 19, 23, 27, 31, 219, 223, 227, 231]
    );
}

#[test]
fn test_hadd_matches_definition() {
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..200 {
        let a = random_lanes(&mut rng);
        let b = random_lanes(&mut rng);
        let c = m256_hadd_epi16(&a, &b);

        for half in [0, 8] {
            for k in 0..4 {
                assert_eq!(c[half + k], a[half + 2 * k].wrapping_add(a[half + 2 * k + 1]));
                assert_eq!(c[half + 4 + k], b[half + 2 * k].wrapping_add(b[half + 2 * k + 1]));
            }
        }
    }
}

#[test]
fn test_add_sub_are_inverse() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..200 {
        let a = random_lanes(&mut rng);
        let b = random_lanes(&mut rng);
        assert_eq!(m256_sub_epi16(&m256_add_epi16(&a, &b), &b), a);
    }
}

#[test]
fn test_cmpgt_is_all_ones_or_zero() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = random_lanes(&mut rng);
    let b = random_lanes(&mut rng);

    let c = m256_cmpgt_epi16(&a, &b);

    for i in 0..16 {
        assert_eq!(c[i], if a[i] > b[i] { -1 } else { 0 }, "lane {i}");
    }
    assert_eq!(m256_cmpgt_epi16(&a, &a), [0; 16]);
}

#[test]
fn test_sign_selector() {
    let a = [5i16; 16];
    let mut b = [0i16; 16];
    b[0] = -3;
    b[2] = 7;
    b[3] = i16::MIN;
    b[4] = i16::MAX;

    let c = m256_sign_epi16(&a, &b);

    assert_eq!(&c[..5], &[-5, 0, 5, -5, 5]);

    let min = [i16::MIN; 16];
    assert_eq!(m256_sign_epi16(&min, &[-1; 16]), [i16::MIN; 16]);
}

#[test]
fn test_abs_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(4);

    for _ in 0..200 {
        let mut a = random_lanes(&mut rng);
        a[rng.random_range(0..16)] = i16::MIN;

        let once = m256_abs_epi16(&a);
        assert_eq!(m256_abs_epi16(&once), once);
        for (x, y) in a.iter().zip(once) {
            assert_eq!(y, x.wrapping_abs());
        }
    }
}

#[test]
fn test_shift_boundaries() {
    let a: I16x16 = std::array::from_fn(|i| (i as i16 - 8) * 4093);

    assert_eq!(m256_slli_epi16::<0>(&a), a);
    assert_eq!(m256_srli_epi16::<0>(&a), a);
    assert_eq!(m256_slli_epi16::<16>(&a), [0; 16]);
    assert_eq!(m256_srli_epi16::<16>(&a), [0; 16]);
    assert_eq!(m256_srli_epi16::<1>(&[-1; 16]), [0x7FFF; 16]);

    for i in 0..16 {
        assert_eq!(m256_slli_epi16::<3>(&a)[i], ((a[i] as u16) << 3) as i16);
        assert_eq!(m256_srli_epi16::<15>(&a)[i], ((a[i] as u16) >> 15) as i16);
    }
}

#[test]
fn test_bitwise() {
    let a = [0b1100, -1, 0, i64::MIN];
    let b = [0b1010, 0, -1, 1];

    assert_eq!(m256_xor_epi64(&a, &b), [0b0110, -1, -1, i64::MIN | 1]);
    assert_eq!(m256_or_epi64(&a, &b), [0b1110, -1, -1, i64::MIN | 1]);
    assert_eq!(m256_and_epi64(&a, &b), [0b1000, 0, 0, 0]);
}

#[test]
fn test_xor_accepts_same_storage() {
    let a = [0x5555, -2, 17, i64::MAX];
    assert_eq!(m256_xor_epi64(&a, &a), [0; 4]);
}

#[test]
fn test_shuffle_zeroes_and_confines_to_half() {
    let a: I8x32 = std::array::from_fn(|i| (i as i8) + 1);
    let b: I8x32 = std::array::from_fn(|i| match i % 4 {
        0 => (15 - (i % 16)) as i8,
        1 => i8::MIN | 3,
        2 => 0x70 | (i % 16) as i8,
        _ => -1,
    });

    let c = m256_shuffle_epi8(&a, &b);

    for i in 0..32 {
        let half = i / 16 * 16;
        let expected = if b[i] < 0 {
            0
        } else {
            a[half + (b[i] & 0x0F) as usize]
        };
        assert_eq!(c[i], expected, "byte {i}");
    }
}

#[test]
fn test_broadcast() {
    let value = u128::from_le_bytes(std::array::from_fn(|i| i as u8));

    let a = m256_broadcastsi128_si256(value);

    assert_eq!(a[..8], a[8..]);
    assert_eq!(a[0], 0x0100);
    assert_eq!(a[7], 0x0F0E);
}

#[cfg(debug_assertions)]
mod aliasing {
    use super::*;

    #[test]
    #[should_panic(expected = "must not share storage")]
    fn test_or_rejects_same_storage() {
        let a = [1i64, 2, 3, 4];
        let _ = m256_or_epi64(&a, &a);
    }

    #[test]
    #[should_panic(expected = "must not share storage")]
    fn test_and_rejects_same_storage() {
        let a = [1i64, 2, 3, 4];
        let _ = m256_and_epi64(&a, &a);
    }

    #[test]
    #[should_panic(expected = "must not share storage")]
    fn test_sign_rejects_same_storage() {
        let a = [1i16; 16];
        let _ = m256_sign_epi16(&a, &a);
    }

    #[test]
    #[should_panic(expected = "must not share storage")]
    fn test_shuffle_rejects_same_storage() {
        let a = [1i8; 32];
        let _ = m256_shuffle_epi8(&a, &a);
    }

    #[test]
    fn test_equal_values_in_distinct_storage_are_accepted() {
        let a = [7i64; 4];
        let b = a;
        assert_eq!(m256_or_epi64(&a, &b), a);
        assert_eq!(m256_and_epi64(&a, &b), a);
    }
}
