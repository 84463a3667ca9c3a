// Copyright (c) 2025 Graphcore Ltd. All rights reserved.

//! The square grid of activation intensities returned by every model.
//!
//! Cells are addressed by [Cell] with rows counted from the top of the grid
//! and columns from the left. Intensities are clamped to `[0, 1]` on every
//! write so the invariant holds regardless of what a model computes.

use std::fmt;
use std::ops::{Index, Range};

/// Side length used when no grid size is configured.
pub const DEFAULT_GRID_SIZE: usize = 10;

/// Position of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row, counted from the top.
    pub row: usize,

    /// Column, counted from the left.
    pub col: usize,
}

impl Cell {
    /// Create a cell position from a row and column.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(row {}, col {})", self.row, self.col)
    }
}

fn clamp_intensity(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// A fixed-size square matrix of intensities in `[0, 1]`.
///
/// The shape is set at creation and never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<f64>,
}

impl Grid {
    /// Create a grid with every cell inactive.
    #[must_use]
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            cells: vec![0.0; size * size],
        }
    }

    /// Create a grid with every cell set to `value`.
    #[must_use]
    pub fn filled(size: usize, value: f64) -> Self {
        Self {
            size,
            cells: vec![clamp_intensity(value); size * size],
        }
    }

    /// Create a grid by evaluating `f` for every cell in row-major order.
    pub fn from_fn<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(Cell) -> f64,
    {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(clamp_intensity(f(Cell::new(row, col))));
            }
        }
        Self { size, cells }
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true for a grid with no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Intensity of a cell, or `None` when it lies outside the grid.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<f64> {
        self.offset(cell).map(|i| self.cells[i])
    }

    /// Set the intensity of a cell. Positions outside the grid are ignored.
    pub fn set(&mut self, cell: Cell, value: f64) {
        if let Some(i) = self.offset(cell) {
            self.cells[i] = clamp_intensity(value);
        }
    }

    /// Set a cell to full intensity.
    pub fn activate(&mut self, cell: Cell) {
        self.set(cell, 1.0);
    }

    /// Set every cell in the given block of rows and columns to full
    /// intensity.
    pub fn activate_block(&mut self, rows: Range<usize>, cols: Range<usize>) {
        for row in rows {
            for col in cols.clone() {
                self.activate(Cell::new(row, col));
            }
        }
    }

    /// Returns true when the cell has a non-zero intensity.
    #[must_use]
    pub fn is_active(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(|v| v > 0.0)
    }

    /// Iterate over every cell and its intensity in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (Cell::new(i / size, i % size), *v))
    }

    /// Iterate over the cells with a non-zero intensity in row-major order.
    pub fn active_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|(_, v)| *v > 0.0).map(|(cell, _)| cell)
    }

    /// Number of cells with a non-zero intensity.
    #[must_use]
    pub fn num_active(&self) -> usize {
        self.cells.iter().filter(|v| **v > 0.0).count()
    }

    /// Iterate over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    fn offset(&self, cell: Cell) -> Option<usize> {
        if cell.row < self.size && cell.col < self.size {
            Some(cell.row * self.size + cell.col)
        } else {
            None
        }
    }
}

impl Index<Cell> for Grid {
    type Output = f64;

    fn index(&self, cell: Cell) -> &f64 {
        match self.offset(cell) {
            Some(i) => &self.cells[i],
            None => panic!("{cell} outside {0}x{0} grid", self.size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_are_clamped() {
        let mut grid = Grid::zeros(2);
        grid.set(Cell::new(0, 0), 1.5);
        grid.set(Cell::new(0, 1), -0.25);
        grid.set(Cell::new(1, 0), f64::NAN);
        assert_eq!(grid[Cell::new(0, 0)], 1.0);
        assert_eq!(grid[Cell::new(0, 1)], 0.0);
        assert_eq!(grid[Cell::new(1, 0)], 0.0);
    }

    #[test]
    #[should_panic(expected = "(row 3, col 0) outside 3x3 grid")]
    fn index_out_of_range() {
        let grid = Grid::zeros(3);
        let _ = grid[Cell::new(3, 0)];
    }
}
