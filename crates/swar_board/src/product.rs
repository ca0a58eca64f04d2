//! Boards built from per-axis sequences by repeated outer product.
//!
//! Handy for stamping rows, columns and other separable patterns
//! algebraically instead of cell by cell.

use crate::codec::encode;
use crate::core::Bitboard;
use crate::grid::Grid;

/// Outer product of `sequences`, starting from the scalar 1.
///
/// The result has one axis per sequence, of that sequence's length, and
/// cell `(i, j, ..)` equal to `sequences[0][i] * sequences[1][j] * ..`
/// (wrapping).
pub fn outer_product<S: AsRef<[u64]>>(sequences: &[S]) -> Grid<u64> {
    sequences
        .iter()
        .fold(Grid::scalar(1), |acc, sequence| acc.outer(sequence.as_ref()))
}

/// Encode the outer product of `sequences`.
///
/// # Example
/// ```
/// use swar_board::{decode, product, BoardShape};
///
/// let board = product(&[vec![1u64, 0, 1], vec![1, 1, 1, 1]], None);
/// let shape = BoardShape::new(&[3, 4]).unwrap();
/// assert_eq!(decode(&shape, &board, false).to_rows(), vec![
///     vec![1, 1, 1, 1],
///     vec![0, 0, 0, 0],
///     vec![1, 1, 1, 1],
/// ]);
/// ```
pub fn product<S: AsRef<[u64]>>(sequences: &[S], bit_depth: Option<usize>) -> Bitboard {
    encode(&outer_product(sequences), bit_depth)
}
