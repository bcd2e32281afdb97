/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A [`Game`] object owns the current level, its grid, the path that the player is drawing, the
//! timer, and the scores. The front end forwards the player actions (cell clicks and drags, undo,
//! clear, hint, next level) and redraws from the object state.

use log::debug;
use std::time::{Duration, Instant};

use crate::config::HINT_COOLDOWN_SEC;
use crate::generator::levels::{Difficulty, Level, generate_level};
use crate::generator::path::Path;
use crate::generator::random_path::RandomPathError;
use crate::grid::Grid;
use crate::hint::{Hint, hint_path};
use crate::rules::{is_complete, is_valid_move};
use crate::score::ScoreBoard;

/// Result of a player action on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed.
    Ignored,

    /// The path was empty and now starts at the cell.
    Started,

    /// The cell was added to the path.
    Extended,

    /// The last cell was removed from the path.
    Backtracked,

    /// The move breaks a rule.
    Rejected,

    /// The cell was added to the path and the puzzle is solved. Provide the level score.
    Solved(u64),
}

/// Return the duration in the `m:ss` format.
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Level number, starting at 1. Also used as the level identifier.
    pub level_number: u32,

    /// Level being played.
    pub level: Level,

    /// Grid built from [`Game::level`].
    grid: Grid,

    /// Path drawn by the player.
    path: Path,

    /// Whether the puzzle is solved.
    pub solved: bool,

    /// Whether the player paused the game.
    pub paused: bool,

    /// Time when the level started. Used to compute the level duration.
    start_time: Instant,

    /// The elapsed time when the player paused the game.
    pause_duration: Option<Duration>,

    /// The elapsed time when the player solved the puzzle.
    solve_duration: Option<Duration>,

    /// Time of the last hint, for the hint cooldown.
    last_hint: Option<Instant>,

    /// Number of hints that the player asked for in the current level.
    pub hints_used: usize,

    /// Scores of the session.
    pub score: ScoreBoard,
}

impl Game {
    /// Create a [`Game`] object for the given level number.
    ///
    /// The difficulty is derived from the level number.
    pub fn new(level_number: u32) -> Result<Self, RandomPathError> {
        let level: Level = generate_level(level_number, Difficulty::for_level(level_number))?;
        Ok(Self::from_level(level_number, level))
    }

    /// Create a [`Game`] object for an existing level.
    pub fn from_level(level_number: u32, level: Level) -> Self {
        let grid: Grid = Grid::new(&level);
        let path: Path = Path::new(grid.len());
        Self {
            level_number,
            level,
            grid,
            path,
            solved: false,
            paused: false,
            start_time: Instant::now(),
            pause_duration: None,
            solve_duration: None,
            last_hint: None,
            hints_used: 0,
            score: ScoreBoard::new(),
        }
    }

    /// Return the grid of the current level.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the path drawn by the player.
    pub fn path(&self) -> &[usize] {
        self.path.as_slice()
    }

    /// Process a click on a cell, or the pointer entering a cell while dragging (`is_drag`).
    pub fn handle_cell(&mut self, cell_id: usize, is_drag: bool) -> MoveOutcome {
        if self.solved || cell_id >= self.grid.len() {
            return MoveOutcome::Ignored;
        }

        let head: usize = match self.path.get_last() {
            Some(h) => h,
            None => {
                self.path.push(cell_id);
                return MoveOutcome::Started;
            }
        };

        if head == cell_id {
            return MoveOutcome::Ignored;
        }

        // Going back to the previous cell removes the head of the path
        if self.path.get_second_to_last() == Some(cell_id) {
            self.path.pop();
            return MoveOutcome::Backtracked;
        }

        // While dragging, the pointer can cross cells that are already in the path
        if is_drag && self.path.contains(cell_id) {
            return MoveOutcome::Ignored;
        }

        if !is_valid_move(head, cell_id, self.path.as_slice(), &self.grid) {
            debug!("Move {head} -> {cell_id} rejected");
            return MoveOutcome::Rejected;
        }
        self.path.push(cell_id);

        if !is_complete(self.path.as_slice(), &self.grid) {
            return MoveOutcome::Extended;
        }

        let duration: Duration = self.get_duration();
        self.solved = true;
        self.solve_duration = Some(duration);
        let score: u64 = self.score.add_level(
            self.level.num_checkpoints(),
            duration.as_secs(),
            self.level_number,
        );
        debug!(
            "Level {} solved in {}: score = {}  total = {}  streak = {}",
            self.level_number,
            format_time(duration.as_secs()),
            score,
            self.score.total,
            self.score.streak
        );
        MoveOutcome::Solved(score)
    }

    /// Remove the last cell of the path. The first cell is kept.
    ///
    /// Return whether the path changed.
    pub fn undo(&mut self) -> bool {
        if self.path.len() > 1 && !self.solved {
            self.path.pop();
            return true;
        }
        false
    }

    /// Restart the current level: empty the path and restart the timer.
    pub fn clear(&mut self) {
        self.path.clear();
        self.solved = false;
        self.restart_timer();
    }

    /// Start the next level.
    ///
    /// The path starts at the first cell of the solution. Scores are kept.
    ///
    /// # Errors
    ///
    /// If the level cannot be generated, the error is returned and the current level is kept.
    pub fn next_level(&mut self) -> Result<(), RandomPathError> {
        let level_number: u32 = self.level_number + 1;
        let level: Level = generate_level(level_number, Difficulty::for_level(level_number))?;

        self.grid = Grid::new(&level);
        self.path.clear();
        if let Some(first) = level.solution_path.first() {
            self.path.push(*first);
        }
        self.level = level;
        self.level_number = level_number;
        self.solved = false;
        self.hints_used = 0;
        self.last_hint = None;
        self.restart_timer();
        Ok(())
    }

    /// Whether the player can ask for a hint.
    pub fn is_hint_available(&self) -> bool {
        if self.solved {
            return false;
        }
        match self.last_hint {
            Some(t) => t.elapsed().as_secs() >= HINT_COOLDOWN_SEC,
            None => true,
        }
    }

    /// Return a hint, or None if the puzzle is solved or the previous hint is too recent.
    ///
    /// The player's path is not modified.
    pub fn hint(&mut self) -> Option<Hint> {
        if !self.is_hint_available() {
            return None;
        }
        self.last_hint = Some(Instant::now());
        self.hints_used += 1;
        Some(hint_path(self.path.as_slice(), &self.level.solution_path))
    }

    /// Pause the game.
    pub fn pause(&mut self) {
        // Store the played time so far, so that the pause time can be deduced when the
        // player resumes the game.
        if self.pause_duration.is_none() {
            self.pause_duration = Some(self.start_time.elapsed());
        }
        self.paused = true;
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        // Refresh the game elapsed time by removing the pause time.
        if let Some(d) = self.pause_duration {
            self.start_time += self.start_time.elapsed() - d;
            self.pause_duration = None;
        }
        self.paused = false;
    }

    /// Return the game duration. The timer stops when the puzzle is solved.
    pub fn get_duration(&self) -> Duration {
        if let Some(d) = self.solve_duration {
            return d;
        }
        match self.pause_duration {
            Some(d) => d,
            None => self.start_time.elapsed(),
        }
    }

    /// Return the game duration in hours, minutes, and seconds
    pub fn get_duration_hms(&self) -> (u64, u64, u64) {
        let duration: u64 = self.get_duration().as_secs();
        (
            duration / 3600,
            (duration % 3600) / 60,
            (duration % 3600) % 60,
        )
    }

    /// Restart the timer from zero.
    fn restart_timer(&mut self) {
        self.start_time = Instant::now();
        self.pause_duration = None;
        self.solve_duration = None;
        self.paused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::levels::LEVEL_COLORS;
    use std::collections::BTreeMap;

    /// 3x3 level with a snake solution: 0 1 2 / 5 4 3 / 6 7 8.
    fn snake_level() -> Level {
        Level {
            id: 1,
            size: 3,
            difficulty: Difficulty::Easy,
            checkpoints: BTreeMap::from([(0, 1), (4, 2), (8, 3)]),
            solution_path: vec![0, 1, 2, 5, 4, 3, 6, 7, 8],
            color: LEVEL_COLORS[1],
        }
    }

    #[test]
    fn following_the_solution_solves_the_level() {
        let level = snake_level();
        let solution = level.solution_path.clone();
        let mut game = Game::from_level(1, level);

        assert_eq!(game.handle_cell(solution[0], false), MoveOutcome::Started);
        for cell in &solution[1..solution.len() - 1] {
            assert_eq!(game.handle_cell(*cell, true), MoveOutcome::Extended);
        }
        match game.handle_cell(solution[8], true) {
            MoveOutcome::Solved(score) => assert!(score >= 450),
            outcome => panic!("unexpected outcome {outcome:?}"),
        }
        assert!(game.solved);
        assert_eq!(game.score.streak, 1);

        // Nothing changes once solved
        assert_eq!(game.handle_cell(7, false), MoveOutcome::Ignored);
        assert!(!game.undo());
        assert!(game.hint().is_none());
    }

    #[test]
    fn backtrack_head_and_drag() {
        let mut game = Game::from_level(1, snake_level());
        game.handle_cell(0, false);
        assert_eq!(game.handle_cell(1, false), MoveOutcome::Extended);
        assert_eq!(game.handle_cell(1, false), MoveOutcome::Ignored);
        assert_eq!(game.handle_cell(0, false), MoveOutcome::Backtracked);
        assert_eq!(game.path(), &[0]);

        game.handle_cell(1, true);
        game.handle_cell(2, true);
        // Crossing the path while dragging
        assert_eq!(game.handle_cell(0, true), MoveOutcome::Ignored);
        // Clicking a cell of the path
        assert_eq!(game.handle_cell(0, false), MoveOutcome::Rejected);
    }

    #[test]
    fn rules_are_enforced() {
        let mut game = Game::from_level(1, snake_level());
        game.handle_cell(0, false);
        // Diagonal
        assert_eq!(game.handle_cell(4, false), MoveOutcome::Rejected);
        game.handle_cell(3, false);
        // 2 is allowed after 1
        assert_eq!(game.handle_cell(4, false), MoveOutcome::Extended);
        game.handle_cell(3, false);
        game.handle_cell(6, false);
        game.handle_cell(7, false);
        // 3 is allowed after 1 only through 2
        assert_eq!(game.handle_cell(8, false), MoveOutcome::Rejected);
        assert_eq!(game.path(), &[0, 3, 6, 7]);
    }

    #[test]
    fn undo_keeps_the_first_cell() {
        let mut game = Game::from_level(1, snake_level());
        assert!(!game.undo());
        game.handle_cell(0, false);
        game.handle_cell(1, false);
        assert!(game.undo());
        assert!(!game.undo());
        assert_eq!(game.path(), &[0]);
    }

    #[test]
    fn clear_empties_the_path() {
        let mut game = Game::from_level(1, snake_level());
        game.handle_cell(0, false);
        game.handle_cell(1, false);
        game.clear();
        assert!(game.path().is_empty());
        assert!(!game.solved);
    }

    #[test]
    fn hints_have_a_cooldown() {
        let mut game = Game::from_level(1, snake_level());
        game.handle_cell(0, false);
        let hint = game.hint().unwrap();
        assert_eq!(hint.path, vec![0, 1, 2, 5]);
        assert_eq!(hint.cell, Some(5));
        assert_eq!(game.path(), &[0]);
        assert!(!game.is_hint_available());
        assert!(game.hint().is_none());
        assert_eq!(game.hints_used, 1);
    }

    #[test]
    fn next_level_keeps_the_scores() {
        let mut game = Game::new(1).unwrap();
        let solution = game.level.solution_path.clone();
        for cell in &solution {
            game.handle_cell(*cell, true);
        }
        assert!(game.solved);
        let total = game.score.total;

        game.next_level().unwrap();
        assert_eq!(game.level_number, 2);
        assert_eq!(game.level.id, 2);
        assert!(!game.solved);
        assert_eq!(game.path(), &[game.level.solution_path[0]]);
        assert_eq!(game.score.total, total);
        assert_eq!(game.score.streak, 1);
        assert_eq!(game.grid(), &Grid::new(&game.level));
    }

    #[test]
    fn pause_freezes_the_timer() {
        let mut game = Game::from_level(1, snake_level());
        game.pause();
        let d = game.get_duration();
        assert_eq!(game.get_duration(), d);
        game.resume();
        assert!(!game.paused);
        assert_eq!(game.get_duration_hms().0, 0);
    }

    #[test]
    fn time_format() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(600), "10:00");
    }
}
