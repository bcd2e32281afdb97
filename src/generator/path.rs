/*
path.rs

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

//! Path of cells in the puzzle grid.
//!
//! The same object stores the path that the generator is building and the path that the player
//! is drawing.

use std::collections::HashSet;

/// Path object.
#[derive(Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of cell indexes.
    path: Vec<usize>,

    /// Stores the visited status of the cells.
    /// Instead of looking for the cell in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<usize>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Path {}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(num_cells: usize) -> Self {
        Self {
            path: Vec::with_capacity(num_cells),
            visited: HashSet::with_capacity(num_cells),
        }
    }

    /// Create a [`Path`] object from a slice of cell indexes.
    ///
    /// Duplicated cells are kept in the ordered list, but the visited set only stores them once.
    pub fn from_slice(path: &[usize]) -> Self {
        Self {
            path: path.to_vec(),
            visited: path.iter().copied().collect(),
        }
    }

    /// Remove all the cells from the path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.visited.clear();
    }

    /// Add a cell to the path.
    pub fn push(&mut self, cell: usize) {
        self.path.push(cell);
        self.visited.insert(cell);
    }

    /// Remove the last cell from the path and return it.
    pub fn pop(&mut self) -> Option<usize> {
        let cell: Option<usize> = self.path.pop();
        if let Some(c) = cell {
            self.visited.remove(&c);
        }
        cell
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path is empty.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, cell: usize) -> bool {
        self.visited.contains(&cell)
    }

    /// Return the path as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.path
    }

    /// Consume the object and return the ordered list of cells.
    pub fn into_vec(self) -> Vec<usize> {
        self.path
    }

    /// Return the first cell in the path.
    pub fn get_first(&self) -> Option<usize> {
        self.path.first().copied()
    }

    /// Return the last cell in the path (the head of the path drawn by the player).
    pub fn get_last(&self) -> Option<usize> {
        self.path.last().copied()
    }

    /// Return the cell just before the last one.
    pub fn get_second_to_last(&self) -> Option<usize> {
        let l: usize = self.path.len();
        if l > 1 { Some(self.path[l - 2]) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_keep_visited_in_sync() {
        let mut p = Path::new(25);
        p.push(21);
        p.push(22);
        assert!(p.contains(21) && p.contains(22));
        assert_eq!(p.get_second_to_last(), Some(21));
        assert_eq!(p.pop(), Some(22));
        assert!(!p.contains(22));
        assert_eq!(p.get_second_to_last(), None);
        assert_eq!(p.pop(), Some(21));
        assert_eq!(p.pop(), None);
        assert!(p.is_empty());
    }

    #[test]
    fn from_slice_fills_visited() {
        let p = Path::from_slice(&[3, 4, 9]);
        assert!(p.contains(9));
        assert!(!p.contains(8));
        assert_eq!(p.get_first(), Some(3));
        assert_eq!(p.get_last(), Some(9));
        assert_eq!(p, Path::from_slice(&[3, 4, 9]));
    }
}
