//! ASCII rendering of boards for inspection.

use crate::codec::decode;
use crate::core::{Bitboard, BoardShape};
use crate::error::BoardError;

/// Glyphs for per-cell values 0..=36.
pub const GLYPHS: &str = ".123456789Tabcdefghijklmnopqrstuvwxyz";

/// Glyph for values past the end of [`GLYPHS`].
pub const OVERFLOW_GLYPH: char = '@';

/// Render `board` one line per row.
///
/// A layout of rank 2 (boolean 2D board) prints `x` for set cells and `.`
/// otherwise. A layout of rank 3 (2D multi-bit board, or boolean 3D board)
/// reads the trailing axis as an LSB-first integer and prints its glyph.
///
/// # Example
/// ```
/// use swar_board::{debug::render, BigUint, BoardShape};
///
/// let shape = BoardShape::new(&[2, 3]).unwrap();
/// assert_eq!(render(&shape, &BigUint::from(0b100_001u8)).unwrap(), "x..\n..x\n");
/// ```
pub fn render(shape: &BoardShape, board: &Bitboard) -> Result<String, BoardError> {
    let layout = decode(shape, board, false);
    let mut out = String::new();
    match layout.rank() {
        2 => {
            for row in layout.lanes() {
                out.extend(row.iter().map(|&bit| if bit != 0 { 'x' } else { '.' }));
                out.push('\n');
            }
        }
        3 => {
            let row_len = layout.shape()[1] * layout.shape()[2];
            for row in layout.cells().chunks(row_len) {
                out.extend(row.chunks(layout.shape()[2]).map(|bits| glyph(cell_value(bits))));
                out.push('\n');
            }
        }
        rank => return Err(BoardError::UnsupportedRank { rank }),
    }
    Ok(out)
}

/// LSB-first bit vector to integer.
fn cell_value(bits: &[u64]) -> usize {
    bits.iter().rev().fold(0usize, |acc, &bit| acc.saturating_mul(2).saturating_add(bit as usize))
}

fn glyph(value: usize) -> char {
    GLYPHS.chars().nth(value).unwrap_or(OVERFLOW_GLYPH)
}
