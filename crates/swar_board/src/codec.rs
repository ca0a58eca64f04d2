//! Conversion between cell grids and packed bitboards.
//!
//! Bit `idx * d + j` of a board is bit `j` of the cell at row-major index
//! `idx`. Cells sit in contiguous, non-overlapping `d`-bit fields in
//! ascending index order.

use num_bigint::BigUint;

use crate::core::{Bitboard, BoardShape, CellValue};
use crate::grid::Grid;

const WORD_BITS: usize = u32::BITS as usize;
const LIMB_BITS: usize = u64::BITS as usize;

/// Pack a grid into a bitboard.
///
/// With `bit_depth` unset every cell contributes one bit (`value != 0`).
/// With `Some(d)` the low `d` bits of every value are packed; wider values
/// are truncated to their field.
///
/// # Example
/// ```
/// use swar_board::{encode, Grid};
///
/// let grid = Grid::from_rows(&[vec![1u8, 0, 0], vec![1, 0, 0]]).unwrap();
/// assert_eq!(encode(&grid, None), 0b1001u8.into());
/// ```
pub fn encode<T: CellValue>(grid: &Grid<T>, bit_depth: Option<usize>) -> Bitboard {
    let cells = grid.cells();
    let depth = bit_depth.unwrap_or(1);
    let width = depth.min(LIMB_BITS);
    let mut words = vec![0u32; (cells.len() * depth).div_ceil(WORD_BITS)];
    for (idx, value) in cells.iter().enumerate() {
        let value = match bit_depth {
            None => (value.to_bits() != 0) as u64,
            Some(_) => value.to_bits(),
        };
        write_field(&mut words, idx * depth, width, value);
    }
    BigUint::new(words)
}

/// Unpack a bitboard.
///
/// Without folding the result has shape `shape.extents()`: the spatial axes
/// plus a trailing bit-plane axis of size `d` for multi-bit shapes, with
/// every value 0 or 1. With `fold_bit_depth` a multi-bit shape's trailing
/// axis is folded back into one integer per cell (place values `2^0` to
/// `2^(d-1)`), giving a grid of the spatial shape. Folding a boolean shape
/// changes nothing.
///
/// Bits above `shape.bit_len()` are ignored. The shape and depth must be the
/// ones used to encode the board; a mismatch is not detected.
pub fn decode(shape: &BoardShape, board: &Bitboard, fold_bit_depth: bool) -> Grid<u64> {
    if fold_bit_depth && shape.is_multi_bit() {
        let depth = shape.bit_depth();
        let width = depth.min(LIMB_BITS);
        let limbs = board.to_u64_digits();
        let cells = (0..shape.cell_count())
            .map(|idx| read_field(&limbs, idx * depth, width))
            .collect();
        return Grid::from_parts(shape.axes().to_vec(), cells);
    }
    let cells = (0..shape.bit_len())
        .map(|bit| board.bit(bit as u64) as u64)
        .collect();
    Grid::from_parts(shape.extents(), cells)
}

/// OR the low `width` bits of `value` into `words` at bit `start`.
fn write_field(words: &mut [u32], start: usize, width: usize, value: u64) {
    let value = if width == LIMB_BITS { value } else { value & ((1u64 << width) - 1) };
    let mut spread = u128::from(value) << (start % WORD_BITS);
    let mut word = start / WORD_BITS;
    while spread != 0 {
        words[word] |= spread as u32;
        spread >>= WORD_BITS;
        word += 1;
    }
}

/// The `width`-bit field at bit `start` of little-endian `limbs`.
fn read_field(limbs: &[u64], start: usize, width: usize) -> u64 {
    debug_assert!(width <= LIMB_BITS, "field wider than a limb");
    if width == 0 {
        return 0;
    }
    let limb = |i: usize| limbs.get(i).copied().unwrap_or(0);
    let word = start / LIMB_BITS;
    let offset = start % LIMB_BITS;
    let lo = limb(word) >> offset;
    let hi = if offset == 0 { 0 } else { limb(word + 1) << (LIMB_BITS - offset) };
    let field = lo | hi;
    if width == LIMB_BITS {
        field
    } else {
        field & ((1u64 << width) - 1)
    }
}
