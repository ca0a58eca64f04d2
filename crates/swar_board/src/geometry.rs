//! Row-major indexing and mask construction.
//!
//! Masks are built from closed-form geometric series so that selecting
//! every `stride`-th bit group of a range costs a handful of whole-word
//! shifts rather than one operation per bit.

use std::ops::Range;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Linear cell index of `coords` on a grid with `extents`.
///
/// Row-major: the last axis varies fastest.
///
/// # Example
/// ```
/// use swar_board::geometry::linear_index;
///
/// // On a 7x5 board, cell (1, 2) is the 8th cell.
/// assert_eq!(linear_index(&[7, 5], &[1, 2]), 7);
/// ```
pub fn linear_index(extents: &[usize], coords: &[usize]) -> usize {
    let mut total = 0;
    let mut stride = 1;
    for (&extent, &coord) in extents.iter().rev().zip(coords.iter().rev()) {
        total += stride * coord;
        stride *= extent;
    }
    total
}

/// Signed flat offset of `offsets` on a grid with `extents`.
///
/// Same sum as [`linear_index`], with signed components. A shift vector maps
/// to a single flat bit shift this way.
pub fn position(extents: &[usize], offsets: &[isize]) -> isize {
    let mut total = 0isize;
    let mut stride = 1isize;
    for (&extent, &offset) in extents.iter().rev().zip(offsets.iter().rev()) {
        total += stride * offset;
        stride *= extent as isize;
    }
    total
}

/// Sum of the geometric series `start * (F^terms - 1) / (F - 1)` with
/// `F = 2^factor_log2`.
///
/// For `start = 2^k` this is the mask of `terms` bits spaced `factor_log2`
/// apart, starting at bit `k`. The block of accumulated terms doubles every
/// round, so the cost is logarithmic in `terms`.
pub fn geom(start: &BigUint, factor_log2: usize, terms: usize) -> BigUint {
    let mut total = BigUint::zero();
    let mut block = start.clone();
    let mut block_terms = 1usize;
    let mut offset = 0usize;
    let mut remaining = terms;
    while remaining > 0 {
        if remaining & 1 == 1 {
            total = total + (&block << offset);
            offset += block_terms * factor_log2;
        }
        remaining >>= 1;
        if remaining > 0 {
            block = &block + &(&block << (block_terms * factor_log2));
            block_terms *= 2;
        }
    }
    total
}

/// Mask selecting the axis-aligned sub-box `bounds[0] x bounds[1] x ...`.
///
/// Each axis contributes a geometric mask of its range at that axis's bit
/// stride. Partial masks occupy disjoint bit groups, so their product is
/// the set of all cells inside every range. An empty range yields 0.
pub fn rectangle(extents: &[usize], bounds: &[Range<usize>]) -> BigUint {
    debug_assert_eq!(extents.len(), bounds.len(), "one range per axis");
    let mut total = BigUint::one();
    let mut stride = 1usize;
    for (&extent, range) in extents.iter().rev().zip(bounds.iter().rev()) {
        let first = BigUint::one() << (stride * range.start);
        total = total * geom(&first, stride, range.len());
        stride *= extent;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_bits(bits: &[u64]) -> BigUint {
        let mut value = BigUint::zero();
        for &bit in bits {
            value.set_bit(bit, true);
        }
        value
    }

    #[test]
    fn linear_index_last_axis_fastest() {
        assert_eq!(linear_index(&[4, 3], &[0, 0]), 0);
        assert_eq!(linear_index(&[4, 3], &[0, 2]), 2);
        assert_eq!(linear_index(&[4, 3], &[1, 0]), 3);
        assert_eq!(linear_index(&[2, 3, 4], &[1, 2, 3]), 23);
    }

    #[test]
    fn position_allows_negative_offsets() {
        assert_eq!(position(&[7, 5], &[-3, 1]), -14);
        assert_eq!(position(&[4, 3], &[1, 1]), 4);
        assert_eq!(position(&[2, 3, 4], &[0, -1, 0]), -4);
    }

    #[test]
    fn geom_spaced_bits() {
        let one = BigUint::one();
        assert_eq!(geom(&one, 1, 4), BigUint::from(0b1111u8));
        assert_eq!(geom(&one, 3, 3), from_bits(&[0, 3, 6]));
        assert_eq!(geom(&(&one << 2), 4, 5), from_bits(&[2, 6, 10, 14, 18]));
        assert_eq!(geom(&one, 7, 0), BigUint::zero());
    }

    #[test]
    fn geom_matches_closed_form() {
        // 3 * (8^5 - 1) / 7
        let expected = 3u64 * (8u64.pow(5) - 1) / 7;
        assert_eq!(geom(&BigUint::from(3u8), 3, 5), BigUint::from(expected));
    }

    #[test]
    fn geom_unit_factor_multiplies() {
        assert_eq!(geom(&BigUint::from(5u8), 0, 6), BigUint::from(30u8));
    }

    #[test]
    fn geom_crosses_limbs() {
        let mask = geom(&BigUint::one(), 10, 20);
        assert_eq!(mask.count_ones(), 20);
        assert!(mask.bit(190));
        assert!(!mask.bit(191));
    }

    #[test]
    fn rectangle_selects_sub_box() {
        // 4x3 board, rows 1..4, columns 1..3
        let mask = rectangle(&[4, 3], &[1..4, 1..3]);
        assert_eq!(mask, from_bits(&[4, 5, 7, 8, 10, 11]));
    }

    #[test]
    fn rectangle_full_board() {
        assert_eq!(rectangle(&[5, 7], &[0..5, 0..7]), (BigUint::one() << 35usize) - 1u32);
    }

    #[test]
    fn rectangle_with_empty_range_is_zero() {
        assert!(rectangle(&[4, 3], &[1..1, 0..3]).is_zero());
    }

    #[test]
    fn rectangle_three_dimensional() {
        let mask = rectangle(&[2, 3, 4], &[1..2, 0..2, 0..4]);
        let expected: Vec<u64> = (12..20).collect();
        assert_eq!(mask, from_bits(&expected));
    }
}
