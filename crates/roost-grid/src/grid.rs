//! The [`Grid`] container and its neighbour queries.

use crate::direction::Direction;
use crate::error::GridError;
use smallvec::SmallVec;
use std::fmt;

/// A dense, rectangular, bounds-checked 2-D container.
///
/// Cells are stored row-major in a single `Vec`. Dimensions are fixed at
/// construction and both are at least 1; a grid is never resized.
/// Every access goes through a bounds check and surfaces
/// [`GridError::OutOfBounds`] rather than panicking; an out-of-range
/// coordinate is a caller defect, fatal to the call, not the process.
///
/// Equality is structural: two grids compare equal iff they have the
/// same dimensions and equal cells at every position. This is the
/// comparison the fixed-point engine uses to detect convergence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a `rows x cols` grid with every cell set to `default`.
    ///
    /// Returns [`GridError::Empty`] if either dimension is 0.
    pub fn new(rows: usize, cols: usize, default: T) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![default; rows * cols],
        })
    }
}

impl<T> Grid<T> {
    /// Build a grid from one `Vec` per row.
    ///
    /// Returns [`GridError::Empty`] when there are no rows or the first
    /// row is empty, and [`GridError::Ragged`] when any row's length
    /// differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        if row_count == 0 || col_count == 0 {
            return Err(GridError::Empty);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != col_count {
                return Err(GridError::Ragged {
                    row: i,
                    expected: col_count,
                    got: row.len(),
                });
            }
        }
        Ok(Self {
            rows: row_count,
            cols: col_count,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The cells as a row-major slice.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Shared reference to the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<&T, GridError> {
        self.check_bounds(row, col)?;
        Ok(&self.cells[row * self.cols + col])
    }

    /// Mutable reference to the cell at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, GridError> {
        self.check_bounds(row, col)?;
        Ok(&mut self.cells[row * self.cols + col])
    }

    /// Overwrite the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), GridError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Iterate over `(row, col, &cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / cols, i % cols, cell))
    }

    /// Count the cells for which `pred` holds. Linear scan, no side effects.
    pub fn count_matching(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|cell| pred(cell)).count()
    }

    /// The cells strictly adjacent to `(row, col)`: up to 8 cells at
    /// Chebyshev distance 1, excluding the centre and any position
    /// outside the grid.
    ///
    /// Results appear in [`Direction::ALL`] order. An interior cell of a
    /// grid with both dimensions >= 3 has exactly 8 adjacent cells, a
    /// corner cell 3, a non-corner edge cell 5, and the single cell of a
    /// 1x1 grid none.
    pub fn adjacent(&self, row: usize, col: usize) -> Result<SmallVec<[&T; 8]>, GridError> {
        self.check_bounds(row, col)?;
        let mut out = SmallVec::new();
        for dir in Direction::ALL {
            if let Some(cell) = self.offset(row, col, dir.delta()) {
                out.push(cell);
            }
        }
        Ok(out)
    }

    /// The first non-transparent cell along each compass ray from
    /// `(row, col)`.
    ///
    /// For each of the eight directions the walk advances one step at a
    /// time, skipping cells for which `transparent` returns `true`, and
    /// yields the first cell it does not skip. A ray that leaves the grid
    /// before finding one contributes nothing, so the result holds at
    /// most 8 cells, in [`Direction::ALL`] order. A grid made entirely of
    /// transparent cells yields no results from any origin.
    pub fn visible(
        &self,
        row: usize,
        col: usize,
        mut transparent: impl FnMut(&T) -> bool,
    ) -> Result<SmallVec<[&T; 8]>, GridError> {
        self.check_bounds(row, col)?;
        let mut out = SmallVec::new();
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            let mut r = row as isize + dr;
            let mut c = col as isize + dc;
            while let Some(cell) = self.get_signed(r, c) {
                if !transparent(cell) {
                    out.push(cell);
                    break;
                }
                r += dr;
                c += dc;
            }
        }
        Ok(out)
    }

    /// Cell one unit step away from `(row, col)`, or `None` if the step
    /// leaves the grid.
    fn offset(&self, row: usize, col: usize, (dr, dc): (isize, isize)) -> Option<&T> {
        self.get_signed(row as isize + dr, col as isize + dc)
    }

    fn get_signed(&self, row: isize, col: isize) -> Option<&T> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(&self.cells[row * self.cols + col])
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

/// Renders one text line per grid row. Diagnostic output only; the
/// fixed-point comparison is structural equality, never this rendering.
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
