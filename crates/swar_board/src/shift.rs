//! Saturating translation of every cell by a fixed vector.
//!
//! A translation on a packed board is a single flat shift by the vector's
//! linear offset. On its own that shift wraps cells across row (and higher
//! axis) boundaries; ANDing with the destination sub-box removes exactly the
//! wrapped cells, so cells leaving the grid are dropped and cells without a
//! source read as zero.

use std::ops::Range;

use crate::core::{Bitboard, BoardShape};
use crate::error::BoardError;
use crate::geometry::{position, rectangle};

/// A precomputed translation for one board shape.
///
/// Build once per shape and vector, then [`apply`](Shift::apply) to any
/// number of boards of that shape.
///
/// # Example
/// ```
/// use swar_board::{decode, encode, BoardShape, Grid, Shift};
///
/// let shape = BoardShape::new(&[4, 3]).unwrap();
/// let board = encode(&Grid::from_rows(&[
///     vec![1u8, 0, 0],
///     vec![1, 0, 0],
///     vec![0, 0, 0],
///     vec![0, 0, 0],
/// ]).unwrap(), None);
///
/// let down_right = Shift::new(&shape, &[1, 1]).unwrap();
/// let moved = decode(&shape, &down_right.apply(&board), false);
/// assert_eq!(moved.to_rows(), vec![
///     vec![0, 0, 0],
///     vec![0, 1, 0],
///     vec![0, 1, 0],
///     vec![0, 0, 0],
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    amount: isize,
    mask: Bitboard,
}

impl Shift {
    /// Precompute the translation of `shape` by `vector` (one signed offset
    /// per spatial axis). Offsets whose magnitude reaches the extent clear
    /// the whole board.
    pub fn new(shape: &BoardShape, vector: &[isize]) -> Result<Self, BoardError> {
        if vector.len() != shape.axes().len() {
            return Err(BoardError::ShiftArity {
                expected: shape.axes().len(),
                got: vector.len(),
            });
        }

        let extents = shape.extents();
        let mut offsets = vector.to_vec();
        if shape.is_multi_bit() {
            offsets.push(0);
        }

        let bounds: Vec<Range<usize>> = offsets
            .iter()
            .zip(&extents)
            .map(|(&offset, &extent)| destination_range(offset, extent))
            .collect();

        Ok(Self {
            amount: position(&extents, &offsets),
            mask: rectangle(&extents, &bounds),
        })
    }

    /// Flat bit shift (positive = towards higher indices).
    #[inline]
    pub fn amount(&self) -> isize {
        self.amount
    }

    /// Destination sub-box that receives non-wrapped cells.
    #[inline]
    pub fn mask(&self) -> &Bitboard {
        &self.mask
    }

    /// Translate every cell of `board`.
    pub fn apply(&self, board: &Bitboard) -> Bitboard {
        if self.amount > 0 {
            (board << self.amount.unsigned_abs()) & &self.mask
        } else {
            (board >> self.amount.unsigned_abs()) & &self.mask
        }
    }
}

/// Destination cells along one axis: `[v, extent)` for `v >= 0`,
/// `[0, extent + v)` for `v < 0`.
fn destination_range(offset: isize, extent: usize) -> Range<usize> {
    let magnitude = offset.unsigned_abs();
    if offset >= 0 {
        magnitude.min(extent)..extent
    } else {
        0..extent.saturating_sub(magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode};
    use crate::grid::Grid;
    use num_bigint::BigUint;
    use num_traits::{One, Zero};

    fn board(rows: &[Vec<u8>]) -> Bitboard {
        encode(&Grid::from_rows(rows).unwrap(), None)
    }

    fn rows(shape: &BoardShape, board: &Bitboard) -> Vec<Vec<u64>> {
        decode(shape, board, false).to_rows()
    }

    #[test]
    fn down_right_by_one() {
        let shape = BoardShape::new(&[4, 3]).unwrap();
        let b = board(&[vec![1, 0, 0], vec![1, 0, 0], vec![0, 0, 0], vec![0, 0, 0]]);
        let shift = Shift::new(&shape, &[1, 1]).unwrap();
        assert_eq!(shift.amount(), 4);
        let moved = shift.apply(&b);
        assert_eq!(
            rows(&shape, &moved),
            vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 1, 0], vec![0, 0, 0]]
        );
        assert_eq!(
            rows(&shape, &(&moved | &b)),
            vec![vec![1, 0, 0], vec![1, 1, 0], vec![0, 1, 0], vec![0, 0, 0]]
        );
    }

    #[test]
    fn column_shift_does_not_leak_into_next_row() {
        let shape = BoardShape::new(&[2, 3]).unwrap();
        let b = board(&[vec![0, 0, 1], vec![0, 0, 0]]);
        let right = Shift::new(&shape, &[0, 1]).unwrap();
        assert!(right.apply(&b).is_zero());

        let b = board(&[vec![0, 0, 0], vec![1, 0, 0]]);
        let left = Shift::new(&shape, &[0, -1]).unwrap();
        assert!(left.apply(&b).is_zero());
    }

    #[test]
    fn negative_vector_moves_up_left() {
        let shape = BoardShape::new(&[3, 3]).unwrap();
        let b = board(&[vec![0, 0, 0], vec![0, 0, 0], vec![0, 1, 1]]);
        let shift = Shift::new(&shape, &[-1, -1]).unwrap();
        assert_eq!(shift.amount(), -4);
        assert_eq!(
            rows(&shape, &shift.apply(&b)),
            vec![vec![0, 0, 0], vec![1, 1, 0], vec![0, 0, 0]]
        );
    }

    #[test]
    fn zero_vector_is_identity() {
        let shape = BoardShape::new(&[3, 5]).unwrap();
        let b = BigUint::from(0b101_1100_1010_0111u16);
        let shift = Shift::new(&shape, &[0, 0]).unwrap();
        assert_eq!(shift.amount(), 0);
        assert_eq!(shift.apply(&b), b);
    }

    #[test]
    fn shift_past_extent_clears_board() {
        let shape = BoardShape::new(&[3, 3]).unwrap();
        let full = (BigUint::one() << 9usize) - 1u32;
        assert!(Shift::new(&shape, &[3, 0]).unwrap().apply(&full).is_zero());
        assert!(Shift::new(&shape, &[0, -5]).unwrap().apply(&full).is_zero());
    }

    #[test]
    fn multi_bit_cells_move_as_a_unit() {
        let shape = BoardShape::with_bit_depth(&[2, 2], 4).unwrap();
        let grid = Grid::from_rows(&[vec![9u8, 0], vec![15, 0]]).unwrap();
        let shift = Shift::new(&shape, &[0, 1]).unwrap();
        let moved = shift.apply(&encode(&grid, Some(4)));
        assert_eq!(decode(&shape, &moved, true).to_rows(), vec![vec![0, 9], vec![0, 15]]);
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        let shape = BoardShape::with_bit_depth(&[2, 2], 4).unwrap();
        assert_eq!(
            Shift::new(&shape, &[0, 1, 0]),
            Err(BoardError::ShiftArity { expected: 2, got: 3 })
        );
    }
}
