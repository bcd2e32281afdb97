/*
rules.rs

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

//! Game rules.
//!
//! The player draws a path from cell to cell. [`is_valid_move`] decides whether the path can be
//! extended to a new cell, and [`is_complete`] whether the path solves the puzzle. Both functions
//! are pure: they only look at the path and the grid they receive.

use crate::grid::Grid;

/// Return the value of the last checkpoint in the path, or 0 if the path has no checkpoint yet.
fn last_checkpoint_value(path: &[usize], grid: &Grid) -> usize {
    path.iter()
        .rev()
        .find_map(|cell| grid.value(*cell))
        .unwrap_or(0)
}

/// Whether the player can move from `current` to `next`.
///
/// The move is rejected when:
///
/// * the two cells do not share a side,
/// * `next` is already in the path,
/// * `next` is a checkpoint that is not the one following the last checkpoint of the path.
///
/// Any adjacent blank cell is accepted. Backtracking (moving back to the previous cell) is not
/// a move; the caller handles it before calling this function.
pub fn is_valid_move(current: usize, next: usize, path: &[usize], grid: &Grid) -> bool {
    if !grid.are_adjacent(current, next) {
        return false;
    }

    // No revisiting
    if path.contains(&next) {
        return false;
    }

    // Checkpoints must be reached in ascending order
    match grid.value(next) {
        Some(value) => value == last_checkpoint_value(path, grid) + 1,
        None => true,
    }
}

/// Whether the path solves the puzzle.
///
/// The path must go through all the checkpoints in ascending order and visit every cell of the
/// grid.
pub fn is_complete(path: &[usize], grid: &Grid) -> bool {
    if path.is_empty() {
        return false;
    }

    let max_value: usize = match grid.max_value() {
        Some(v) => v,
        None => return false,
    };

    let mut current_number: usize = 0;
    for cell in path {
        if *cell >= grid.len() {
            return false;
        }
        if let Some(value) = grid.value(*cell) {
            if value == current_number + 1 {
                current_number = value;
            } else if value != current_number {
                // Out of order
                return false;
            }
        }
    }

    current_number == max_value && path.len() == grid.len()
}
