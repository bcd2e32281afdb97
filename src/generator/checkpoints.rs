/*
checkpoints.rs

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

//! Select the checkpoints of a level.
//!
//! A checkpoint is a cell where the number is provided at the beginning of the puzzle. The
//! player must go through the checkpoints in ascending order.
//!
//! The first and the last cells of the solution path are always checkpoints. The other
//! checkpoints are randomly selected positions along the path. The selection gives up after a
//! fixed number of attempts, in which case the level has fewer checkpoints than requested. Such a
//! level is still valid.

use log::debug;
use std::collections::BTreeMap;

use super::seeded_random::SeededRandom;

/// Select checkpoint positions along a path of `path_len` cells.
///
/// The returned positions are sorted, start with the first position, and end with the last one.
/// Intermediate positions are drawn at random from the interior of the path, skipping
/// duplicates, until `target` positions are selected or `2 * path_len` draws have been made.
pub fn select_positions(path_len: usize, target: usize, rng: &mut SeededRandom) -> Vec<usize> {
    if path_len == 0 {
        return Vec::new();
    }
    if path_len == 1 {
        return vec![0];
    }

    let mut positions: Vec<usize> = Vec::with_capacity(target.max(2));
    positions.push(0);

    // Without interior cells there is nothing to draw from
    if path_len > 2 {
        let max_attempts: usize = path_len * 2;
        let mut attempts: usize = 0;
        while positions.len() < target.saturating_sub(1) && attempts < max_attempts {
            let pos: usize = rng.next_int(1, path_len - 2);
            if !positions.contains(&pos) {
                positions.push(pos);
            }
            attempts += 1;
        }
        if positions.len() < target.saturating_sub(1) {
            debug!(
                "Only {} checkpoints selected out of {} after {} attempts",
                positions.len() + 1,
                target,
                attempts
            );
        }
    }

    positions.push(path_len - 1);
    positions.sort_unstable();
    positions
}

/// Assign the values `1..=n` to the cells at the given sorted positions along the path.
///
/// Return a map of cell indexes to checkpoint values.
pub fn assign_values(path: &[usize], positions: &[usize]) -> BTreeMap<usize, usize> {
    positions
        .iter()
        .filter_map(|&pos| path.get(pos).copied())
        .enumerate()
        .map(|(i, cell)| (cell, i + 1))
        .collect()
}
