/*
cli_options.rs

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

//! Process command-line options.
//!
//! Zipgrid has no user interface of its own. The command line lets developers generate levels,
//! inspect them, and check paths against them.
//!
//! # Examples
//!
//! Display level 1 with its solution:
//!
//! ```text
//! $ zipgrid --level 1 --solution
//! Level 1 (easy, 5 checkpoints, #4ecdc4 -> #44a08d)
//! ...
//! ```
//!
//! Export three consecutive levels in JSON, starting from level 10:
//!
//! ```text
//! $ zipgrid -l 10 -c 3 --json
//! ```
//!
//! Check a path drawn on level 4:
//!
//! ```text
//! $ zipgrid -l 4 --check 0,1,2,7,6,5
//! ```

use clap::Parser;
use log::debug;
use rand::Rng;
use std::env;
use std::error::Error;

use crate::config::{COPYRIGHT_NOTICE, GRID_SIZE};
use crate::generator::levels::{Difficulty, Level, LevelColor, level_seed};
use crate::generator::path;
use crate::generator::random_path::{RandomPath, RandomPathError};
use crate::grid::{Grid, materialize_grid};
use crate::rules::{is_complete, is_valid_move};

/// Highest level identifier picked when no level is provided.
const MAX_RANDOM_LEVEL: u32 = 1000;

/// Exit code when a checked path does not solve the level.
const EXIT_NOT_SOLVED: u8 = 2;

/// Generate and inspect Zipgrid levels.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Identifier of the (first) level to generate. A random level is used if not provided
    #[arg(short, long)]
    level: Option<u32>,

    /// Difficulty level. By default, the difficulty grows with the level identifier
    #[arg(value_enum, short = 'f', long)]
    difficulty: Option<Difficulty>,

    /// Number of consecutive levels to generate
    #[arg(short, long, default_value_t = 1)]
    count: u32,

    /// Print the levels in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Also print the solution path
    #[arg(long, default_value_t = false)]
    solution: bool,

    /// Comma-separated list of cell indexes to check against the level
    #[arg(long, value_name = "PATH")]
    check: Option<String>,

    /// Print some statistics after generating the levels
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let first_level: u32 = args
        .level
        .unwrap_or_else(|| rand::rng().random_range(1..=MAX_RANDOM_LEVEL));

    let mut random_path: RandomPath = RandomPath::new(GRID_SIZE);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut iterations: usize = 0;
    let mut errors: usize = 0;
    let mut exit_code: u8 = 0;

    for i in 0..args.count {
        let id: u32 = first_level.saturating_add(i);
        let difficulty: Difficulty = args.difficulty.unwrap_or_else(|| Difficulty::for_level(id));
        debug!("Level {id}: seed = {}", level_seed(id));

        // Generate the solution path
        let ret: Result<path::Path, RandomPathError> = random_path.generate(level_seed(id));
        let solution: path::Path = match ret {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Level {id}: {e}");
                errors += 1;
                exit_code = 1;
                continue;
            }
        };
        total += random_path.duration;
        if random_path.duration > max {
            max = random_path.duration;
        }
        iterations += random_path.iteration;

        let level: Level = Level::from_path(id, GRID_SIZE, difficulty, solution.into_vec());
        let grid: Grid = materialize_grid(&level);

        if args.json {
            match serde_json::to_string_pretty(&level) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("Level {id}: {e}");
                    exit_code = 1;
                }
            }
        } else {
            print_level(&level, &grid, args.solution);
        }

        if let Some(check) = &args.check {
            match check_path(check, &grid) {
                Ok(true) => println!("Level {id}: solved"),
                Ok(false) => {
                    println!("Level {id}: not solved");
                    if exit_code == 0 {
                        exit_code = EXIT_NOT_SOLVED;
                    }
                }
                Err(e) => {
                    eprintln!("Invalid path {check:?}: {e}");
                    return 1;
                }
            }
        }
    }

    // Print some stats
    if args.summary {
        let generated: usize = (args.count as usize).saturating_sub(errors).max(1);
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average iterations = {}
            errors = {}",
            total,
            total / generated as f32,
            max,
            iterations / generated,
            errors
        );
    }
    exit_code
}

/// Print the level and, optionally, the position of each cell along the solution.
fn print_level(level: &Level, grid: &Grid, solution: bool) {
    println!(
        "Level {} ({}, {} checkpoints, {} -> {})",
        level.id,
        level.difficulty,
        level.num_checkpoints(),
        LevelColor::hex(level.color.start),
        LevelColor::hex(level.color.end)
    );
    print!("{grid}");

    if solution {
        let mut order: Vec<usize> = vec![0; grid.len()];
        for (i, cell) in level.solution_path.iter().enumerate() {
            if let Some(o) = order.get_mut(*cell) {
                *o = i + 1;
            }
        }
        println!("Solution:");
        for row in order.chunks(level.size.max(1)) {
            let line: Vec<String> = row.iter().map(|o| format!("{o:>3}")).collect();
            println!("{}", line.join(""));
        }
    }
    println!();
}

/// Replay the given path on the grid, move by move.
///
/// Return whether the path solves the puzzle. The first rejected move is reported.
fn check_path(path: &str, grid: &Grid) -> Result<bool, Box<dyn Error>> {
    let cells: Vec<usize> = path
        .split(',')
        .map(|c| c.trim().parse::<usize>())
        .collect::<Result<Vec<usize>, _>>()?;

    if let Some(c) = cells.iter().find(|c| **c >= grid.len()) {
        return Err(format!("cell {c} is outside the grid").into());
    }

    for i in 1..cells.len() {
        if !is_valid_move(cells[i - 1], cells[i], &cells[..i], grid) {
            println!("Move {}: {} -> {} is not allowed", i, cells[i - 1], cells[i]);
            return Ok(false);
        }
    }
    Ok(is_complete(&cells, grid))
}
