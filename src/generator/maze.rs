/*
maze.rs

Copyright 2026 The Mazelog contributors

This file is part of Mazelog.

Mazelog is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazelog is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazelog. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Generate a random maze that is guaranteed to be traversable.

use log::{debug, info, warn};

use super::connectivity;
use super::grid::GridModel;
use super::walls::WallSampler;
use crate::error::MazeError;

/// [`MazeGenerator`] object.
pub struct MazeGenerator {
    sampler: Box<dyn WallSampler>,

    /// Number of wall sets to try before giving up.
    max_attempts: usize,

    /// Number of attempts it took to generate the last maze.
    pub attempts: usize,
}

impl MazeGenerator {
    /// Create the object.
    pub fn new(sampler: Box<dyn WallSampler>, max_attempts: usize) -> Self {
        Self {
            sampler,
            max_attempts,
            attempts: 0,
        }
    }

    /// Generate and return a random maze.
    ///
    /// Every attempt draws a brand new wall set. An attempt is kept only if the end cell can be
    /// reached from the start cell.
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::GenerationExhausted`] when no traversable wall set is
    /// found within the allowed number of attempts.
    pub fn generate(&mut self, width: usize, height: usize) -> Result<GridModel, MazeError> {
        self.attempts = 0;
        while self.attempts < self.max_attempts {
            self.attempts += 1;
            let grid: GridModel = self
                .sampler
                .sample(width, height)
                .map_err(|e| MazeError::ExecutionFault(e.to_string()))?;
            if connectivity::is_connected(&grid) {
                info!(
                    "Maze {width}x{height} with {} walls generated in {} attempt(s)",
                    grid.wall_count(),
                    self.attempts
                );
                return Ok(grid);
            }
            debug!("Attempt {}: no path, sampling again", self.attempts);
        }
        warn!("No traversable maze after {} attempts", self.attempts);
        Err(MazeError::GenerationExhausted {
            attempts: self.attempts,
        })
    }
}
