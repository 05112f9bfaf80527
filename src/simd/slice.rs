//! Batch application over slices of vectors.
//!
//! Kernels that process many registers at once can hand whole slices to these
//! helpers instead of looping themselves. The `par_*` variants split the work
//! with rayon and return exactly what the sequential variants return.

use rayon::prelude::*;

use crate::error::{validation_error, Result};

use super::{intrin, types::I16x16};

/// Two-operand 16-bit operations available in batch form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Hadd,
    /// Requires `lhs` and `rhs` to be different slices.
    Sign,
    CmpGt,
}

impl BinaryOp {
    /// Applies the operation to one pair of vectors with the active tier.
    #[inline]
    pub fn apply(self, a: &I16x16, b: &I16x16) -> I16x16 {
        match self {
            BinaryOp::Add => intrin::m256_add_epi16(a, b),
            BinaryOp::Sub => intrin::m256_sub_epi16(a, b),
            BinaryOp::Hadd => intrin::m256_hadd_epi16(a, b),
            BinaryOp::Sign => intrin::m256_sign_epi16(a, b),
            BinaryOp::CmpGt => intrin::m256_cmpgt_epi16(a, b),
        }
    }
}

pub trait SimdBatch<Rhs = Self> {
    type Output;

    fn batch_zip(self, rhs: Rhs, op: BinaryOp) -> Result<Self::Output>;
    fn par_batch_zip(self, rhs: Rhs, op: BinaryOp) -> Result<Self::Output>;
    fn batch_abs(self) -> Self::Output;
    fn par_batch_abs(self) -> Self::Output;
}

#[inline(always)]
fn check_lengths(a: &[I16x16], b: &[I16x16]) -> Result<()> {
    if a.len() != b.len() {
        return Err(validation_error(format!(
            "input slices must have same length ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

impl<'b> SimdBatch<&'b [I16x16]> for &[I16x16] {
    type Output = Vec<I16x16>;

    fn batch_zip(self, rhs: &'b [I16x16], op: BinaryOp) -> Result<Self::Output> {
        check_lengths(self, rhs)?;

        Ok(self
            .iter()
            .zip(rhs.iter())
            .map(|(a, b)| op.apply(a, b))
            .collect())
    }

    fn par_batch_zip(self, rhs: &'b [I16x16], op: BinaryOp) -> Result<Self::Output> {
        check_lengths(self, rhs)?;

        Ok(self
            .par_iter()
            .zip(rhs.par_iter())
            .map(|(a, b)| op.apply(a, b))
            .collect())
    }

    fn batch_abs(self) -> Self::Output {
        self.iter().map(intrin::m256_abs_epi16).collect()
    }

    fn par_batch_abs(self) -> Self::Output {
        self.par_iter().map(intrin::m256_abs_epi16).collect()
    }
}
