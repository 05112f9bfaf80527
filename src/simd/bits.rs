//! Bit patterns and compile-time checks for immediate operands.
//!
//! Immediates are const generic parameters. Their ranges are checked by
//! associated constants that contain an `assert!`: evaluating the constant for an
//! out-of-range value is a compile error raised when the generic function is
//! instantiated, never a runtime failure.
//!
//! ```compile_fail
//! // 17 is not a valid 16-bit shift amount.
//! let _ = vintrin::m256_slli_epi16::<17>(&[1; 16]);
//! ```
//!
//! ```compile_fail
//! // Permutation controls are 8-bit values.
//! let _ = vintrin::m256_permute4x64_epi64::<256>(&[1, 2, 3, 4]);
//! ```

/// 2-bit field masks of an 8-bit permutation control.
pub const ZERO_PAIR_MASK: i32 = 0b0000_0011;
pub const FIRST_PAIR_MASK: i32 = 0b0000_1100;
pub const SECOND_PAIR_MASK: i32 = 0b0011_0000;
pub const THIRD_PAIR_MASK: i32 = 0b1100_0000;

/// Shifts that bring each 2-bit field down to bit 0.
pub const ZERO_PAIR_SHIFT: i32 = 0;
pub const FIRST_PAIR_SHIFT: i32 = 2;
pub const SECOND_PAIR_SHIFT: i32 = 4;
pub const THIRD_PAIR_SHIFT: i32 = 6;

/// Set on a shuffle control byte to zero the output lane.
pub const SHUFFLE_ZERO_BIT: i8 = i8::MIN;

/// Low nibble of a shuffle control byte: the source lane inside the 128-bit half.
pub const SHUFFLE_INDEX_MASK: i8 = 0x0F;

/// Extracts one 2-bit source index from a permutation control.
#[inline(always)]
pub const fn pair_field(imm8: i32, mask: i32, shift: i32) -> usize {
    ((imm8 & mask) >> shift) as usize
}

/// Decoded control byte of a 4-block permutation.
///
/// `SOURCES[j]` is the input block copied to output block `j`.
pub struct PermuteControl<const IMM8: i32>;

impl<const IMM8: i32> PermuteControl<IMM8> {
    pub const SOURCES: [usize; 4] = {
        assert!(
            IMM8 >= 0 && IMM8 <= 0xFF,
            "permutation control must fit in 8 bits"
        );

        let sources = [
            pair_field(IMM8, ZERO_PAIR_MASK, ZERO_PAIR_SHIFT),
            pair_field(IMM8, FIRST_PAIR_MASK, FIRST_PAIR_SHIFT),
            pair_field(IMM8, SECOND_PAIR_MASK, SECOND_PAIR_SHIFT),
            pair_field(IMM8, THIRD_PAIR_MASK, THIRD_PAIR_SHIFT),
        ];

        assert!(sources[0] < 4, "block 0 source out of range");
        assert!(sources[1] < 4, "block 1 source out of range");
        assert!(sources[2] < 4, "block 2 source out of range");
        assert!(sources[3] < 4, "block 3 source out of range");

        sources
    };

    /// Forces the range check without using the decoded sources.
    pub const VALID: () = {
        let _sources: [usize; 4] = Self::SOURCES;
    };
}

/// Shift amount for 16-bit lanes, `0..=16`.
pub struct ShiftAmount<const IMM8: i32>;

impl<const IMM8: i32> ShiftAmount<IMM8> {
    pub const BITS: u32 = {
        assert!(
            IMM8 >= 0 && IMM8 <= 16,
            "16-bit shift amount must be in 0..=16"
        );
        IMM8 as u32
    };

    pub const VALID: () = {
        let _bits: u32 = Self::BITS;
    };
}

/// Branchless signum: `1` for positive, `0` for zero, `-1` for negative input.
#[inline(always)]
pub const fn e_sign(value: i16) -> i16 {
    (0 < value) as i16 - (value < 0) as i16
}
