/*
random_path.rs

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

//! Generate a random Hamiltonian path.
//!
//! The path visits every cell of a square grid exactly once, moving between cells that share a
//! side. The search is a randomized depth-first search with backtracking, driven by a
//! [`SeededRandom`] generator so that the same seed always produces the same path.
//!
//! The search uses an explicit stack instead of recursion. Each frame stores a cell and its
//! shuffled neighbors that have not been tried yet.

use log::debug;
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::path;
use super::seeded_random::SeededRandom;
use crate::config::{FALLBACK_STARTING_VERTEX, MAX_STARTING_VERTEXES};

/// Moves to the adjacent cells: up, down, left, right.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum RandomPathError {
    /// No possible path from any of the tried starting cells.
    NoPath,

    /// No path found before [`RandomPath::max_iterations`] was reached.
    IterationsExceeded,
}

impl fmt::Display for RandomPathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RandomPathError::NoPath => write!(f, "cannot find a path that visits every cell"),
            RandomPathError::IterationsExceeded => {
                write!(f, "too many iterations while searching for a path")
            }
        }
    }
}

impl Error for RandomPathError {}

/// Search stack entry.
struct Frame {
    /// Cell reached by the search.
    vertex: usize,

    /// Adjacent cells, in random order.
    neighbors: Vec<usize>,

    /// Position in [`Frame::neighbors`] of the next cell to try.
    next: usize,
}

/// [`RandomPath`] object.
pub struct RandomPath {
    /// Number of cells on each side of the grid.
    pub size: usize,

    /// Number of cells in the grid.
    pub num_vertexes: usize,

    /// Starting cell of the last generated path.
    pub starting_vertex: usize,

    /// Maximum number of iterations before giving up, or None to search until the path is found
    /// or all the possibilities are exhausted.
    pub max_iterations: Option<usize>,

    /// Number of iterations it took to generate the last random path.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last random path.
    pub duration: f32,
}

impl RandomPath {
    /// Create the object.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            num_vertexes: size * size,
            starting_vertex: 0,
            max_iterations: None,
            iteration: 0,
            duration: 0.0,
        }
    }

    /// Generate and return a random path for the given seed.
    ///
    /// The cells are shuffled and the search starts from each of the first
    /// [`MAX_STARTING_VERTEXES`] cells in turn. If none of them leads to a complete path, then a
    /// last attempt starts from [`FALLBACK_STARTING_VERTEX`].
    ///
    /// # Errors
    ///
    /// The method returns [`RandomPathError::NoPath`] if no path can be found (this cannot happen
    /// on a non-empty square grid), or [`RandomPathError::IterationsExceeded`] if an iteration
    /// budget is set and the search reaches it.
    pub fn generate(&mut self, seed: u64) -> Result<path::Path, RandomPathError> {
        self.iteration = 0;
        self.duration = 0.0;
        let start: Instant = Instant::now();

        let mut rng: SeededRandom = SeededRandom::new(seed);
        let res: Result<path::Path, RandomPathError> = self.search(&mut rng);

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Seed = {}  Iterations = {}  Duration = {}",
            seed, self.iteration, self.duration
        );
        res
    }

    /// Try the starting cells one after the other.
    fn search(&mut self, rng: &mut SeededRandom) -> Result<path::Path, RandomPathError> {
        if self.num_vertexes == 0 {
            return Err(RandomPathError::NoPath);
        }

        let vertexes: Vec<usize> = (0..self.num_vertexes).collect();
        let starting_vertexes: Vec<usize> = rng.shuffle(&vertexes);

        for v in starting_vertexes
            .into_iter()
            .take(MAX_STARTING_VERTEXES)
            .chain(std::iter::once(FALLBACK_STARTING_VERTEX))
        {
            debug!("Starting vertex = {v}");
            match self.find_path(v, rng) {
                Ok(p) => return Ok(p),
                Err(RandomPathError::NoPath) => {
                    debug!("    No path from vertex {v}");
                }
                Err(e) => return Err(e),
            }
        }
        Err(RandomPathError::NoPath)
    }

    /// Depth-first search from the given starting cell.
    ///
    /// On a dead end, the cell is removed from the path before the search resumes with the next
    /// neighbor of the previous cell, so a failed search leaves nothing behind.
    fn find_path(
        &mut self,
        starting_vertex: usize,
        rng: &mut SeededRandom,
    ) -> Result<path::Path, RandomPathError> {
        self.starting_vertex = starting_vertex;

        let mut path: path::Path = path::Path::new(self.num_vertexes);
        path.push(starting_vertex);
        if path.len() == self.num_vertexes {
            return Ok(path);
        }

        let mut stack: Vec<Frame> = Vec::with_capacity(self.num_vertexes);
        stack.push(Frame {
            vertex: starting_vertex,
            neighbors: self.shuffled_neighbors(starting_vertex, rng),
            next: 0,
        });

        while let Some(frame) = stack.last_mut() {
            self.iteration += 1;
            if let Some(max) = self.max_iterations
                && self.iteration > max
            {
                return Err(RandomPathError::IterationsExceeded);
            }

            let mut next_vertex: Option<usize> = None;
            while frame.next < frame.neighbors.len() {
                let v: usize = frame.neighbors[frame.next];
                frame.next += 1;
                if !path.contains(v) {
                    next_vertex = Some(v);
                    break;
                }
            }

            match next_vertex {
                Some(v) => {
                    path.push(v);
                    if path.len() == self.num_vertexes {
                        return Ok(path);
                    }
                    let neighbors: Vec<usize> = self.shuffled_neighbors(v, rng);
                    stack.push(Frame {
                        vertex: v,
                        neighbors,
                        next: 0,
                    });
                }
                None => {
                    // Dead end
                    let vertex: usize = frame.vertex;
                    path.pop();
                    stack.pop();
                    debug!("    Back: no eligible edge from vertex {vertex}");
                }
            }
        }
        Err(RandomPathError::NoPath)
    }

    /// Return the cells adjacent to the given cell, in random order.
    ///
    /// The four directions are always shuffled before the directions leading outside the grid
    /// are dropped. Each visited cell therefore consumes the same number of random values.
    fn shuffled_neighbors(&self, vertex: usize, rng: &mut SeededRandom) -> Vec<usize> {
        let row: isize = (vertex / self.size) as isize;
        let col: isize = (vertex % self.size) as isize;
        let size: isize = self.size as isize;

        rng.shuffle(&DIRECTIONS)
            .into_iter()
            .filter_map(|(dr, dc)| {
                let r: isize = row + dr;
                let c: isize = col + dc;
                if r >= 0 && r < size && c >= 0 && c < size {
                    Some((r * size + c) as usize)
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Return a Hamiltonian path for a grid of the given size.
///
/// Two calls with the same arguments return the same path.
pub fn generate_hamiltonian_path(size: usize, seed: u64) -> Result<Vec<usize>, RandomPathError> {
    RandomPath::new(size).generate(seed).map(path::Path::into_vec)
}
