//! SWAR unsigned `>=` over every cell of two multi-bit boards.
//!
//! The top bit of each `d`-bit lane is a guard bit: inputs must leave it
//! clear, so usable cell values are `[0, 2^(d-1))`. Setting every guard bit
//! of `a` and subtracting `b` makes each lane compute `a + 2^(d-1) - b`,
//! which never borrows out of the lane. The guard bit survives exactly when
//! `a >= b`.

use crate::core::{Bitboard, BoardShape};
use crate::error::{BoardError, Operand};
use crate::geometry::geom;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Options for [`GteComparator::compare_with`].
#[derive(Debug, Clone, Copy)]
pub struct CompareOpts {
    /// Reject inputs that use a guard bit instead of silently producing
    /// garbage for those lanes.
    pub check_guard_bit: bool,
}

impl Default for CompareOpts {
    fn default() -> Self {
        Self { check_guard_bit: true }
    }
}

/// A precomputed per-cell `>=` for one multi-bit board shape.
///
/// The result holds one bit per cell at the origin of that cell's `d`-bit
/// field (bit `idx * d`). Decode it with the comparator's shape and
/// `fold_bit_depth` to read a 0/1 grid, or repack it with
/// [`to_boolean`](GteComparator::to_boolean) for the boolean layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GteComparator {
    lane_width: usize,
    cell_count: usize,
    guards: Bitboard,
}

impl GteComparator {
    pub fn new(shape: &BoardShape) -> Result<Self, BoardError> {
        if !shape.is_multi_bit() {
            return Err(BoardError::MissingBitDepth);
        }
        let lane_width = shape.bit_depth();
        let cell_count = shape.cell_count();
        let origins = geom(&BigUint::one(), lane_width, cell_count);
        Ok(Self {
            lane_width,
            cell_count,
            guards: origins << (lane_width - 1),
        })
    }

    /// Bits per lane, guard bit included.
    #[inline]
    pub fn lane_width(&self) -> usize {
        self.lane_width
    }

    /// The guard bit of every lane.
    #[inline]
    pub fn guard_mask(&self) -> &Bitboard {
        &self.guards
    }

    /// `a >= b` per cell, with the guard bits of both inputs checked.
    pub fn compare(&self, a: &Bitboard, b: &Bitboard) -> Result<Bitboard, BoardError> {
        self.compare_with(a, b, CompareOpts::default())
    }

    pub fn compare_with(
        &self,
        a: &Bitboard,
        b: &Bitboard,
        opts: CompareOpts,
    ) -> Result<Bitboard, BoardError> {
        if opts.check_guard_bit {
            self.check_guards(a, Operand::Left)?;
            self.check_guards(b, Operand::Right)?;
        }
        Ok(self.compare_unchecked(a, b))
    }

    /// `a >= b` per cell without the guard-bit check.
    ///
    /// Lanes whose inputs use the guard bit produce unspecified bits. The
    /// subtraction is taken modulo a power of two above both operands, so a
    /// borrow out of the top lane wraps instead of panicking.
    pub fn compare_unchecked(&self, a: &Bitboard, b: &Bitboard) -> Bitboard {
        let minuend = a | &self.guards;
        let width = minuend.bits().max(b.bits()) + 1;
        let diff = (minuend + (BigUint::one() << width)) - b;
        (diff & &self.guards) >> (self.lane_width - 1)
    }

    /// Repack a comparison result into the boolean (one bit per cell)
    /// encoding of the spatial shape.
    ///
    /// This walks the cells one at a time, O(cells); it is a conversion for
    /// the edge of a pipeline, not a SWAR operation.
    pub fn to_boolean(&self, result: &Bitboard) -> Bitboard {
        let mut packed = BigUint::zero();
        for idx in 0..self.cell_count {
            if result.bit((idx * self.lane_width) as u64) {
                packed.set_bit(idx as u64, true);
            }
        }
        packed
    }

    fn check_guards(&self, board: &Bitboard, operand: Operand) -> Result<(), BoardError> {
        if (board & &self.guards).is_zero() {
            Ok(())
        } else {
            Err(BoardError::GuardBitViolation { operand })
        }
    }
}
