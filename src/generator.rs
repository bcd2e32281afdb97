/*
generator.rs

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

//! Generate levels.
//!
//! A level is built in three steps:
//!
//! * The level identifier gives a seed (see [`levels::level_seed`]). Every random choice is made
//!   by a [`seeded_random::SeededRandom`] object built from that seed, so a level can be rebuilt
//!   from its identifier.
//!
//! * A [`random_path::RandomPath`] object searches for a random path that visits every cell of
//!   the grid exactly once (a Hamiltonian path). This path is the solution of the puzzle.
//!
//! * Some positions along the path become checkpoints (see [`checkpoints`]): the player sees
//!   their numbers from the beginning and must go through them in order. The number of
//!   checkpoints depends on the [`levels::Difficulty`].
//!
//! [`levels::generate_level`] runs the three steps.

pub mod checkpoints;
pub mod levels;
pub mod path;
pub mod random_path;
pub mod seeded_random;
