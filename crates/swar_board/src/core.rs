//! Core type definitions: board shapes, the bitboard alias and cell values.

use crate::error::BoardError;

/// A packed board.
///
/// Cell `idx` (row-major, last axis fastest) occupies bits
/// `[idx * d, (idx + 1) * d)`, least-significant bit first.
///
/// Bitwise `|`, `&`, `^` act per cell. `+` and `-` act per cell only while
/// every per-cell result stays within `[0, 2^d)`; an escaping carry or
/// borrow corrupts the neighbouring cell and is never detected.
pub type Bitboard = num_bigint::BigUint;

/// Axis extents of a grid plus an optional cell bit depth.
///
/// Without a bit depth every cell is a single bit. With bit depth `d` the
/// packed layout gains a trailing axis of size `d` (see [`BoardShape::extents`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardShape {
    axes: Vec<usize>,
    bit_depth: Option<usize>,
}

impl BoardShape {
    /// Shape with single-bit (boolean) cells.
    pub fn new(axes: &[usize]) -> Result<Self, BoardError> {
        let shape = Self { axes: axes.to_vec(), bit_depth: None };
        shape.validate()?;
        Ok(shape)
    }

    /// Shape whose cells are `bit_depth`-bit unsigned integers.
    pub fn with_bit_depth(axes: &[usize], bit_depth: usize) -> Result<Self, BoardError> {
        let shape = Self { axes: axes.to_vec(), bit_depth: Some(bit_depth) };
        shape.validate()?;
        Ok(shape)
    }

    /// Interpret a flat extent list, where the trailing element is the bit
    /// depth when `has_bit_depth` is set.
    ///
    /// # Example
    /// ```
    /// use swar_board::BoardShape;
    ///
    /// let shape = BoardShape::from_extents(&[2, 3, 4], true).unwrap();
    /// assert_eq!(shape.axes(), &[2, 3]);
    /// assert_eq!(shape.bit_depth(), 4);
    /// ```
    pub fn from_extents(extents: &[usize], has_bit_depth: bool) -> Result<Self, BoardError> {
        match (has_bit_depth, extents.split_last()) {
            (true, Some((&depth, axes))) => Self::with_bit_depth(axes, depth),
            (true, None) => Err(BoardError::EmptyShape),
            (false, _) => Self::new(extents),
        }
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        if self.axes.is_empty() {
            return Err(BoardError::EmptyShape);
        }
        if let Some(axis) = self.axes.iter().position(|&extent| extent == 0) {
            return Err(BoardError::ZeroExtent { axis });
        }
        if self.bit_depth == Some(0) {
            return Err(BoardError::ZeroBitDepth);
        }
        Ok(())
    }

    /// Spatial extents.
    #[inline]
    pub fn axes(&self) -> &[usize] {
        &self.axes
    }

    /// Cell width in bits (1 for boolean cells).
    #[inline]
    pub fn bit_depth(&self) -> usize {
        self.bit_depth.unwrap_or(1)
    }

    #[inline]
    pub fn is_multi_bit(&self) -> bool {
        self.bit_depth.is_some()
    }

    /// Number of spatial cells.
    pub fn cell_count(&self) -> usize {
        self.axes.iter().product()
    }

    /// Total number of bits a board of this shape occupies.
    pub fn bit_len(&self) -> usize {
        self.cell_count() * self.bit_depth()
    }

    /// Extents of the packed bit layout: the spatial axes, then the bit
    /// depth when cells are multi-bit.
    pub fn extents(&self) -> Vec<usize> {
        let mut extents = self.axes.clone();
        extents.extend(self.bit_depth);
        extents
    }
}

/// A value that can be stored in a board cell.
pub trait CellValue: Copy {
    /// The cell's bits, least-significant first.
    fn to_bits(self) -> u64;
}

impl CellValue for bool {
    #[inline]
    fn to_bits(self) -> u64 {
        self as u64
    }
}

macro_rules! unsigned_cell {
    ($($ty:ty),*) => {
        $(
            impl CellValue for $ty {
                #[inline]
                fn to_bits(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

unsigned_cell!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_shape_layout() {
        let shape = BoardShape::new(&[4, 3]).unwrap();
        assert_eq!(shape.bit_depth(), 1);
        assert!(!shape.is_multi_bit());
        assert_eq!(shape.cell_count(), 12);
        assert_eq!(shape.bit_len(), 12);
        assert_eq!(shape.extents(), vec![4, 3]);
    }

    #[test]
    fn multi_bit_shape_layout() {
        let shape = BoardShape::with_bit_depth(&[2, 3], 4).unwrap();
        assert!(shape.is_multi_bit());
        assert_eq!(shape.cell_count(), 6);
        assert_eq!(shape.bit_len(), 24);
        assert_eq!(shape.extents(), vec![2, 3, 4]);
    }

    #[test]
    fn from_extents_splits_trailing_depth() {
        let shape = BoardShape::from_extents(&[2, 3, 4], true).unwrap();
        assert_eq!(shape, BoardShape::with_bit_depth(&[2, 3], 4).unwrap());
        let flat = BoardShape::from_extents(&[2, 3, 4], false).unwrap();
        assert_eq!(flat.axes(), &[2, 3, 4]);
    }

    #[test]
    fn validation_rejects_degenerate_shapes() {
        assert_eq!(BoardShape::new(&[]), Err(BoardError::EmptyShape));
        assert_eq!(BoardShape::new(&[3, 0]), Err(BoardError::ZeroExtent { axis: 1 }));
        assert_eq!(BoardShape::with_bit_depth(&[3], 0), Err(BoardError::ZeroBitDepth));
        assert_eq!(BoardShape::from_extents(&[], true), Err(BoardError::EmptyShape));
        assert_eq!(BoardShape::from_extents(&[4], true), Err(BoardError::EmptyShape));
    }

    #[test]
    fn cell_values_to_bits() {
        assert_eq!(true.to_bits(), 1);
        assert_eq!(false.to_bits(), 0);
        assert_eq!(9u8.to_bits(), 9);
        assert_eq!(u64::MAX.to_bits(), u64::MAX);
    }
}
