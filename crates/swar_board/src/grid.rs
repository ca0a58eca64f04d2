//! Owned N-dimensional cell arrays used at the codec boundary.

use crate::error::BoardError;
use crate::geometry::linear_index;

/// A row-major N-dimensional array.
///
/// `cells[linear_index(shape, coords)]` is the value at `coords`. A grid of
/// rank 0 holds exactly one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    shape: Vec<usize>,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from its shape and row-major cells.
    pub fn new(shape: Vec<usize>, cells: Vec<T>) -> Result<Self, BoardError> {
        let expected: usize = shape.iter().product();
        if cells.len() != expected {
            return Err(BoardError::CellCount { shape, expected, got: cells.len() });
        }
        Ok(Self { shape, cells })
    }

    pub(crate) fn from_parts(shape: Vec<usize>, cells: Vec<T>) -> Self {
        debug_assert_eq!(shape.iter().product::<usize>(), cells.len());
        Self { shape, cells }
    }

    /// A rank-0 grid holding `value`.
    pub fn scalar(value: T) -> Self {
        Self { shape: Vec::new(), cells: vec![value] }
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Row-major cells.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }

    /// Value at `coords`, or `None` when the address is outside the grid.
    pub fn get(&self, coords: &[usize]) -> Option<&T> {
        let in_bounds = coords.len() == self.shape.len()
            && coords.iter().zip(&self.shape).all(|(&c, &extent)| c < extent);
        if !in_bounds {
            return None;
        }
        self.cells.get(linear_index(&self.shape, coords))
    }

    /// Contiguous runs along the last axis (rows of a 2D grid, per-cell bit
    /// vectors of a packed layout).
    pub fn lanes(&self) -> std::slice::Chunks<'_, T> {
        let width = self.shape.last().copied().unwrap_or(1).max(1);
        self.cells.chunks(width)
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            shape: self.shape.clone(),
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Build a 2D grid from equally long rows.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, BoardError> {
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * width);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(BoardError::RaggedRows { row, expected: width, got: values.len() });
            }
            cells.extend_from_slice(values);
        }
        Ok(Self { shape: vec![rows.len(), width], cells })
    }

    /// Lanes collected into nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.lanes().map(<[T]>::to_vec).collect()
    }
}

impl Grid<u64> {
    /// Outer product with `sequence`: the result has shape
    /// `self.shape ++ [sequence.len()]` and cell `(c.., k)` equal to
    /// `self[c..] * sequence[k]` (wrapping).
    pub fn outer(&self, sequence: &[u64]) -> Grid<u64> {
        let mut shape = self.shape.clone();
        shape.push(sequence.len());
        let cells = self
            .cells
            .iter()
            .flat_map(|&a| sequence.iter().map(move |&b| a.wrapping_mul(b)))
            .collect();
        Grid { shape, cells }
    }
}
