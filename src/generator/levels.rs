/*
levels.rs

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

//! Level definitions.
//!
//! A [`Level`] is derived from a level identifier and a [`Difficulty`]. The identifier gives the
//! seed, the seed gives the solution path, and the difficulty gives the number of checkpoints
//! along that path. The same identifier and difficulty always produce the same level.

use clap::ValueEnum;
use log::{Level as LogLevel, debug, log_enabled};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use strum_macros::FromRepr;

use super::checkpoints;
use super::random_path::{RandomPath, RandomPathError};
use super::seeded_random::SeededRandom;
use crate::config::{GRID_SIZE, LEVEL_SEED_MULTIPLIER, LEVEL_SEED_OFFSET};

/// Puzzle difficulty level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(usize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
    Insane,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
            Difficulty::Expert => write!(f, "expert"),
            Difficulty::Insane => write!(f, "insane"),
        }
    }
}

impl Difficulty {
    /// Range of the number of checkpoints for the difficulty level.
    pub fn checkpoint_range(&self) -> RangeInclusive<usize> {
        match self {
            Difficulty::Easy => 3..=6,
            Difficulty::Medium => 7..=11,
            Difficulty::Hard => 12..=15,
            Difficulty::Expert => 16..=18,
            Difficulty::Insane => 19..=22,
        }
    }

    /// Difficulty of the given level number, when the player progresses from one level to the
    /// next. The first level is 1.
    pub fn for_level(level_number: u32) -> Self {
        let tier: usize = match level_number {
            0..=2 => 0,
            3..=5 => 1,
            6..=8 => 2,
            9..=12 => 3,
            _ => 4,
        };
        Difficulty::from_repr(tier).unwrap_or(Difficulty::Insane)
    }
}

/// Two-color gradient used as the level theme.
///
/// Color components are integers between 0 and 255.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct LevelColor {
    /// Gradient starting color.
    pub start: (u8, u8, u8),

    /// Gradient ending color.
    pub end: (u8, u8, u8),
}

impl LevelColor {
    /// Return the color in the `#rrggbb` format.
    pub fn hex(color: (u8, u8, u8)) -> String {
        format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
    }

    /// Return the CSS gradient for the theme.
    pub fn css_gradient(&self) -> String {
        format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            Self::hex(self.start),
            Self::hex(self.end)
        )
    }
}

/// Level themes. The theme of a level is selected by its identifier.
pub const LEVEL_COLORS: [LevelColor; 7] = [
    // Red
    LevelColor {
        start: (255, 107, 107),
        end: (238, 90, 111),
    },
    // Teal
    LevelColor {
        start: (78, 205, 196),
        end: (68, 160, 141),
    },
    // Gold
    LevelColor {
        start: (255, 217, 61),
        end: (255, 154, 61),
    },
    // Purple
    LevelColor {
        start: (108, 92, 231),
        end: (162, 155, 254),
    },
    // Green
    LevelColor {
        start: (0, 184, 148),
        end: (0, 206, 201),
    },
    // Pink
    LevelColor {
        start: (253, 121, 168),
        end: (232, 67, 147),
    },
    // Orange
    LevelColor {
        start: (253, 203, 110),
        end: (225, 112, 85),
    },
];

/// Return the seed of the given level.
pub fn level_seed(id: u32) -> u64 {
    id as u64 * LEVEL_SEED_MULTIPLIER + LEVEL_SEED_OFFSET
}

/// Level definition.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// Level identifier.
    pub id: u32,

    /// Number of cells on each side of the grid.
    pub size: usize,

    /// Difficulty used to select the number of checkpoints.
    pub difficulty: Difficulty,

    /// Checkpoints: cell indexes and their values. The values go from 1 to the number of
    /// checkpoints, in the order of the solution path.
    pub checkpoints: BTreeMap<usize, usize>,

    /// Path that visits all the cells and goes through the checkpoints in order.
    pub solution_path: Vec<usize>,

    /// Level theme.
    pub color: LevelColor,
}

impl Level {
    /// Build a level from a solution path.
    ///
    /// The path must be a Hamiltonian path for a grid of `size` cells on each side, usually
    /// produced by [`RandomPath::generate`] with the [`level_seed`] of the level.
    pub fn from_path(id: u32, size: usize, difficulty: Difficulty, path: Vec<usize>) -> Self {
        let mut rng: SeededRandom = SeededRandom::new(level_seed(id));

        let range: RangeInclusive<usize> = difficulty.checkpoint_range();
        let target: usize = range.start() + rng.next_int(0, range.end() - range.start());

        let positions: Vec<usize> = checkpoints::select_positions(path.len(), target, &mut rng);
        let checkpoints: BTreeMap<usize, usize> = checkpoints::assign_values(&path, &positions);

        if log_enabled!(LogLevel::Debug) {
            debug!("Level {id} ({difficulty})");
            debug!("           path = {path:?}");
            debug!("         target = {target}");
            debug!("      positions = {positions:?}");
        }

        Self {
            id,
            size,
            difficulty,
            checkpoints,
            solution_path: path,
            color: LEVEL_COLORS[id as usize % LEVEL_COLORS.len()],
        }
    }

    /// Number of checkpoints.
    pub fn num_checkpoints(&self) -> usize {
        self.checkpoints.len()
    }

    /// Cell index of the given checkpoint value, or None if there is no such checkpoint.
    pub fn checkpoint_cell(&self, value: usize) -> Option<usize> {
        self.checkpoints
            .iter()
            .find(|(_, v)| **v == value)
            .map(|(cell, _)| *cell)
    }
}

/// Generate the level with the given identifier.
///
/// # Errors
///
/// The function returns an error if no solution path can be found, which does not happen for
/// the fixed grid size.
pub fn generate_level(id: u32, difficulty: Difficulty) -> Result<Level, RandomPathError> {
    let path: Vec<usize> = RandomPath::new(GRID_SIZE)
        .generate(level_seed(id))?
        .into_vec();
    Ok(Level::from_path(id, GRID_SIZE, difficulty, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_progression() {
        assert_eq!(Difficulty::for_level(1), Difficulty::Easy);
        assert_eq!(Difficulty::for_level(2), Difficulty::Easy);
        assert_eq!(Difficulty::for_level(3), Difficulty::Medium);
        assert_eq!(Difficulty::for_level(6), Difficulty::Hard);
        assert_eq!(Difficulty::for_level(12), Difficulty::Expert);
        assert_eq!(Difficulty::for_level(13), Difficulty::Insane);
        assert_eq!(Difficulty::for_level(u32::MAX), Difficulty::Insane);
    }

    #[test]
    fn seed_from_identifier() {
        assert_eq!(level_seed(0), 67890);
        assert_eq!(level_seed(1), 80235);
        assert_eq!(level_seed(2), 92580);
    }

    #[test]
    fn theme_rotates_with_the_identifier() {
        let path: Vec<usize> = (0..4).collect();
        let level = Level::from_path(8, 2, Difficulty::Easy, path);
        assert_eq!(level.color, LEVEL_COLORS[1]);
        assert_eq!(LevelColor::hex(level.color.start), "#4ecdc4");
        assert_eq!(
            LEVEL_COLORS[0].css_gradient(),
            "linear-gradient(135deg, #ff6b6b 0%, #ee5a6f 100%)"
        );
    }

    #[test]
    fn checkpoint_values_follow_the_solution() {
        for difficulty in [
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
            Difficulty::Insane,
        ] {
            let level = generate_level(4, difficulty).unwrap();
            let range = difficulty.checkpoint_range();
            assert!(level.num_checkpoints() <= *range.end());
            assert!(level.num_checkpoints() >= 2);

            let values: Vec<usize> = level
                .solution_path
                .iter()
                .filter_map(|cell| level.checkpoints.get(cell).copied())
                .collect();
            assert_eq!(values, (1..=level.num_checkpoints()).collect::<Vec<usize>>());
            assert_eq!(level.checkpoint_cell(1), level.solution_path.first().copied());
            assert_eq!(
                level.checkpoint_cell(level.num_checkpoints()),
                level.solution_path.last().copied()
            );
        }
    }
}
