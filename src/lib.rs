/*
lib.rs

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

//! Zipgrid: connect the numbered cells in ascending order and cover every cell of the grid.
//!
//! The crate provides the puzzle core, without any user interface:
//!
//! * [`generator::levels::generate_level`] builds a reproducible level from its identifier.
//! * [`grid::materialize_grid`] turns a level into the list of cells to display.
//! * [`rules::is_valid_move`] and [`rules::is_complete`] check the path drawn by the player.
//! * [`game::Game`] manages a play session on top of these functions.

pub mod cli_options;
pub mod config;
pub mod game;
pub mod generator;
pub mod grid;
pub mod hint;
pub mod rules;
pub mod score;

pub use generator::levels::{Difficulty, Level, generate_level};
pub use generator::random_path::{RandomPathError, generate_hamiltonian_path};
pub use grid::{Cell, Grid, materialize_grid};
pub use rules::{is_complete, is_valid_move};
