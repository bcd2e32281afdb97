/*
score.rs

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

//! Compute scores.
//!
//! A solved level is worth points for each checkpoint, plus a bonus for solving it quickly. The
//! sum is multiplied by a factor that grows with the level number.
//! The [`ScoreBoard`] object accumulates the scores and the number of solved levels during a
//! session. Scores are not saved.

use serde::{Deserialize, Serialize};

use crate::config::{SCORE_POINTS_PER_CHECKPOINT, SCORE_POINTS_PER_SECOND, SCORE_TIME_LIMIT_SEC};

/// Multiplier for the level number, in halves (3 means x1.5).
fn multiplier_halves(level_number: u32) -> u64 {
    match level_number {
        13.. => 6,
        9..=12 => 5,
        6..=8 => 4,
        _ => 3,
    }
}

/// Return the score for a level solved in `seconds` seconds.
pub fn level_score(num_checkpoints: usize, seconds: u64, level_number: u32) -> u64 {
    let base: u64 = num_checkpoints as u64 * SCORE_POINTS_PER_CHECKPOINT;
    let time_bonus: u64 = SCORE_TIME_LIMIT_SEC.saturating_sub(seconds) * SCORE_POINTS_PER_SECOND;
    (base + time_bonus) * multiplier_halves(level_number) / 2
}

/// Scores accumulated during a session.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBoard {
    /// Sum of the scores of the solved levels.
    pub total: u64,

    /// Number of solved levels.
    pub streak: u32,
}

impl ScoreBoard {
    /// Create a [`ScoreBoard`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a solved level and return its score.
    pub fn add_level(&mut self, num_checkpoints: usize, seconds: u64, level_number: u32) -> u64 {
        let score: u64 = level_score(num_checkpoints, seconds, level_number);
        self.total += score;
        self.streak += 1;
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_easy_level() {
        // (4 * 100 + (300 - 20) * 2) * 1.5
        assert_eq!(level_score(4, 20, 1), 1440);
    }

    #[test]
    fn slow_levels_get_no_time_bonus() {
        assert_eq!(level_score(10, 301, 6), 2000);
        assert_eq!(level_score(10, 3000, 13), 3000);
    }

    #[test]
    fn fractional_scores_are_rounded_down() {
        // (3 * 100 + 299 * 2) * 2.5 = 2245
        assert_eq!(level_score(3, 1, 9), 2245);
        // (3 * 100 + 1 * 2) * 1.5 = 453
        assert_eq!(level_score(3, 299, 2), 453);
    }

    #[test]
    fn board_accumulates() {
        let mut board = ScoreBoard::new();
        board.add_level(4, 20, 1);
        board.add_level(10, 301, 6);
        assert_eq!(board.total, 3440);
        assert_eq!(board.streak, 2);
    }
}
