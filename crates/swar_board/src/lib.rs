//! Packed N-dimensional bitboards with SWAR shift and compare.
//!
//! A board of fixed shape is packed into one wide unsigned integer, one
//! `d`-bit field per cell in row-major order. Translations and per-cell
//! comparisons then run as a few whole-word operations instead of a loop
//! over cells.
//!
//! # Example
//!
//! ```
//! use swar_board::{decode, encode, BoardShape, GteComparator, Grid};
//!
//! let shape = BoardShape::with_bit_depth(&[2, 3], 4).unwrap();
//! let a = encode(&Grid::from_rows(&[vec![1u8, 2, 3], vec![0, 1, 4]]).unwrap(), Some(4));
//! let b = encode(&Grid::from_rows(&[vec![0u8, 4, 3], vec![1, 1, 5]]).unwrap(), Some(4));
//!
//! // Per-cell addition, valid while no cell exceeds 15.
//! let sum = decode(&shape, &(&a + &b), true);
//! assert_eq!(sum.to_rows(), vec![vec![1, 6, 6], vec![1, 2, 9]]);
//!
//! let gte = GteComparator::new(&shape).unwrap();
//! let result = gte.compare(&a, &b).unwrap();
//! assert_eq!(decode(&shape, &result, true).to_rows(), vec![vec![1, 0, 1], vec![0, 1, 0]]);
//! ```

pub mod core;
pub mod error;
pub mod grid;
pub mod geometry;
pub mod codec;
pub mod shift;
pub mod compare;
pub mod product;
pub mod debug;

// Re-export primary types
pub use crate::core::{Bitboard, BoardShape, CellValue};
pub use crate::error::{BoardError, Operand};
pub use crate::grid::Grid;

// Re-export main entry points
pub use crate::codec::{decode, encode};
pub use crate::shift::Shift;
pub use crate::compare::{CompareOpts, GteComparator};
pub use crate::product::{outer_product, product};

// Re-export the wide integer crates boards are built on
pub use num_bigint::BigUint;
pub use num_traits::{One, Zero};
