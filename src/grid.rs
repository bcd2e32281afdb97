/*
grid.rs

Copyright 2025 Hervé Quatremain

This file is part of Zipgrid.

Zipgrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Zipgrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Zipgrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Puzzle grid and cells.
//!
//! A [`Grid`] is the renderable form of a [`Level`]: one [`Cell`] per index, in row-major order.
//! Grids are rebuilt from the level every time a new level starts; they are never modified.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::generator::levels::Level;

/// Row and column of the given cell index.
pub fn coordinates(index: usize, size: usize) -> (usize, usize) {
    (index / size, index % size)
}

/// Whether the two cells share a side (no diagonals).
pub fn are_adjacent(index1: usize, index2: usize, size: usize) -> bool {
    let (row1, col1) = coordinates(index1, size);
    let (row2, col2) = coordinates(index2, size);
    row1.abs_diff(row2) + col1.abs_diff(col2) == 1
}

/// Grid cell.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Cell index, from 0 to `size * size - 1`.
    pub id: usize,

    pub row: usize,

    pub col: usize,

    /// Checkpoint value (starting at 1), or None for a blank cell.
    pub value: Option<usize>,
}

impl Cell {
    /// Whether the cell is a checkpoint, provided from the beginning of the game.
    pub fn is_fixed(&self) -> bool {
        self.value.is_some()
    }
}

/// Ordered list of the cells of a square grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of cells on each side.
    size: usize,

    /// Cells in row-major order. The position in the vector is the cell index.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a [`Grid`] object for the given level.
    pub fn new(level: &Level) -> Self {
        Self::from_checkpoints(level.size, &level.checkpoints)
    }

    /// Create a [`Grid`] object from a map of cell indexes to checkpoint values.
    ///
    /// Checkpoints outside the grid are ignored.
    pub fn from_checkpoints(size: usize, checkpoints: &BTreeMap<usize, usize>) -> Self {
        let cells: Vec<Cell> = (0..size * size)
            .map(|id| {
                let (row, col) = coordinates(id, size);
                Cell {
                    id,
                    row,
                    col,
                    value: checkpoints.get(&id).copied(),
                }
            })
            .collect();
        Self { size, cells }
    }

    /// Number of cells on each side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Return the cell at the given index.
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Return the checkpoint value of the given cell, or None for blank cells and indexes outside
    /// the grid.
    pub fn value(&self, index: usize) -> Option<usize> {
        self.cells.get(index).and_then(|c| c.value)
    }

    /// Return the highest checkpoint value, or None if the grid has no checkpoint.
    pub fn max_value(&self) -> Option<usize> {
        self.cells.iter().filter_map(|c| c.value).max()
    }

    /// Whether the two cells share a side.
    pub fn are_adjacent(&self, index1: usize, index2: usize) -> bool {
        index1 < self.len() && index2 < self.len() && are_adjacent(index1, index2, self.size)
    }
}

/// Text representation: one line per row, checkpoint values or dots for blank cells.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line: Vec<String> = row
                .iter()
                .map(|c| match c.value {
                    Some(v) => format!("{v:>3}"),
                    None => format!("{:>3}", "."),
                })
                .collect();
            writeln!(f, "{}", line.join(""))?;
        }
        Ok(())
    }
}

/// Build the grid of the given level.
pub fn materialize_grid(level: &Level) -> Grid {
    Grid::new(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_excludes_diagonals_and_row_wraps() {
        assert!(are_adjacent(21, 22, 5));
        assert!(are_adjacent(21, 16, 5));
        assert!(!are_adjacent(21, 17, 5));
        assert!(!are_adjacent(4, 5, 5));
        assert!(!are_adjacent(7, 7, 5));
        assert!(!are_adjacent(0, 10, 5));
    }

    #[test]
    fn cells_carry_coordinates_and_values() {
        let checkpoints = BTreeMap::from([(0, 1), (24, 2)]);
        let grid = Grid::from_checkpoints(5, &checkpoints);
        assert_eq!(grid.len(), 25);
        let cell = grid.get(13).copied().unwrap();
        assert_eq!((cell.row, cell.col), (2, 3));
        assert!(!cell.is_fixed());
        assert!(grid.get(24).unwrap().is_fixed());
        assert_eq!(grid.value(0), Some(1));
        assert_eq!(grid.value(30), None);
        assert_eq!(grid.max_value(), Some(2));
    }

    #[test]
    fn grid_without_checkpoint_has_no_max() {
        let grid = Grid::from_checkpoints(3, &BTreeMap::new());
        assert_eq!(grid.max_value(), None);
        assert!(!grid.are_adjacent(8, 9));
    }

    #[test]
    fn display_shows_values_and_dots() {
        let grid = Grid::from_checkpoints(2, &BTreeMap::from([(0, 1), (3, 2)]));
        assert_eq!(grid.to_string(), "  1  .\n  .  2\n");
    }
}
