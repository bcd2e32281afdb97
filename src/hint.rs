/*
hint.rs

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

//! Compute hints.
//!
//! A hint is a prefix of the solution path that the front end displays for a short time
//! ([`crate::config::HINT_DISPLAY_SEC`]) in place of the player's path.

use crate::config::{HINT_MIN_LEN, HINT_STEPS};

/// Hint returned to the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// Path to display.
    pub path: Vec<usize>,

    /// Cell to highlight, when the hint goes further than the player's path.
    pub cell: Option<usize>,
}

/// Return the number of leading cells of `path` that match the solution.
fn matching_prefix_len(path: &[usize], solution: &[usize]) -> usize {
    path.iter()
        .zip(solution)
        .take_while(|(p, s)| p == s)
        .count()
}

/// Build the hint for the player's path.
///
/// When the player's path follows the solution, the hint extends it by up to [`HINT_STEPS`]
/// cells. Otherwise, the hint is the beginning of the solution, up to one cell past the point
/// where the player left it, and at least [`HINT_MIN_LEN`] cells long.
pub fn hint_path(path: &[usize], solution: &[usize]) -> Hint {
    let correct: usize = matching_prefix_len(path, solution);

    let len: usize = if correct == path.len() {
        path.len() + HINT_STEPS.min(solution.len().saturating_sub(path.len()))
    } else {
        (correct + 1).max(HINT_MIN_LEN)
    };
    let hint: Vec<usize> = solution[..len.min(solution.len())].to_vec();

    let cell: Option<usize> = if hint.len() > path.len() {
        hint.last().copied()
    } else {
        None
    };
    Hint { path: hint, cell }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION: [usize; 9] = [0, 1, 2, 5, 4, 3, 6, 7, 8];

    #[test]
    fn on_track_shows_the_next_steps() {
        let hint = hint_path(&[0, 1], &SOLUTION);
        assert_eq!(hint.path, vec![0, 1, 2, 5, 4]);
        assert_eq!(hint.cell, Some(4));
    }

    #[test]
    fn empty_path_shows_the_start() {
        let hint = hint_path(&[], &SOLUTION);
        assert_eq!(hint.path, vec![0, 1, 2]);
        assert_eq!(hint.cell, Some(2));
    }

    #[test]
    fn near_the_end_the_hint_is_capped() {
        let hint = hint_path(&SOLUTION[..8], &SOLUTION);
        assert_eq!(hint.path, SOLUTION.to_vec());
        assert_eq!(hint.cell, Some(8));

        let hint = hint_path(&SOLUTION, &SOLUTION);
        assert_eq!(hint.path, SOLUTION.to_vec());
        assert_eq!(hint.cell, None);
    }

    #[test]
    fn off_track_shows_the_correction() {
        // The player left the solution after 0, 1, 2
        let hint = hint_path(&[0, 1, 2, 3, 4, 5], &SOLUTION);
        assert_eq!(hint.path, vec![0, 1, 2, 5]);
        assert_eq!(hint.cell, None);

        // Wrong from the first cell
        let hint = hint_path(&[4, 3], &SOLUTION);
        assert_eq!(hint.path, vec![0, 1, 2]);
        assert_eq!(hint.cell, Some(2));
    }
}
