/*
config.rs

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

//! Build-time settings.
//!
//! Zipgrid has no configuration file. The values below control the puzzle generator, the hints,
//! and the score computation. At run time, the command-line options (see [`crate::cli_options`])
//! and the `RUST_LOG` environment variable are the only other settings.

/// Long version string displayed by `--version`.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>."
);

/// Number of cells on each side of the puzzle grid.
pub const GRID_SIZE: usize = 5;

/// Number of randomly selected starting cells that the path finder tries before falling back to
/// [`FALLBACK_STARTING_VERTEX`].
pub const MAX_STARTING_VERTEXES: usize = 10;

/// Starting cell used when none of the random starting cells produced a path.
pub const FALLBACK_STARTING_VERTEX: usize = 0;

/// The level seed is `level_id * LEVEL_SEED_MULTIPLIER + LEVEL_SEED_OFFSET`.
pub const LEVEL_SEED_MULTIPLIER: u64 = 12345;
pub const LEVEL_SEED_OFFSET: u64 = 67890;

/// Maximum number of cells that a hint reveals past the player's path.
pub const HINT_STEPS: usize = 3;

/// Minimum length of a hint when the player left the solution path.
pub const HINT_MIN_LEN: usize = 3;

/// How long the front end displays a hint.
pub const HINT_DISPLAY_SEC: u64 = 2;

/// Delay between two hints.
pub const HINT_COOLDOWN_SEC: u64 = 5;

/// Points per checkpoint of a solved level.
pub const SCORE_POINTS_PER_CHECKPOINT: u64 = 100;

/// Players solving the level in less than this number of seconds get a time bonus.
pub const SCORE_TIME_LIMIT_SEC: u64 = 300;

/// Bonus points per second saved under [`SCORE_TIME_LIMIT_SEC`].
pub const SCORE_POINTS_PER_SECOND: u64 = 2;
