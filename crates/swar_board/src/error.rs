//! Error type shared by every fallible operation in the crate.

use std::fmt;

/// Which input of a binary board operation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Left,
    Right,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Left => f.write_str("left"),
            Operand::Right => f.write_str("right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board shape must have at least one spatial axis")]
    EmptyShape,

    #[error("axis {axis} has zero extent")]
    ZeroExtent { axis: usize },

    #[error("bit depth must be >= 1")]
    ZeroBitDepth,

    #[error("shift vector has {got} components but the board has {expected} spatial axes")]
    ShiftArity { expected: usize, got: usize },

    #[error("comparison requires a board shape with a bit depth")]
    MissingBitDepth,

    /// An input lane already uses its reserved guard bit.
    #[error("{operand} board uses the reserved guard bit of at least one lane")]
    GuardBitViolation { operand: Operand },

    #[error("grid shape {shape:?} needs {expected} cells but {got} were supplied")]
    CellCount {
        shape: Vec<usize>,
        expected: usize,
        got: usize,
    },

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRows { row: usize, expected: usize, got: usize },

    #[error("display supports layouts of rank 2 or 3, got rank {rank}")]
    UnsupportedRank { rank: usize },
}
