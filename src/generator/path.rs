/*
path.rs

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

//! Path from the start cell to the end cell.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use super::grid::{Coordinate, GridModel};

/// Reasons why a list of coordinates is not a valid path for a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("The path is empty")]
    Empty,

    #[error("The path starts at {0} instead of the start cell")]
    WrongStart(Coordinate),

    #[error("The path ends at {0} instead of the end cell")]
    WrongEnd(Coordinate),

    #[error("The cell {0} is a wall or is outside the grid")]
    Blocked(Coordinate),

    #[error("The cells {0} and {1} are not adjacent")]
    NotAdjacent(Coordinate, Coordinate),

    #[error("The cell {0} is visited twice")]
    Duplicated(Coordinate),

    #[error("The path is longer than the {0} cells of the grid")]
    TooLong(usize),
}

/// Path object.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of coordinates.
    path: Vec<Coordinate>,

    /// Stores the visited status of the cells.
    /// Instead of looking for the cell in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    #[serde(skip)]
    visited: HashSet<Coordinate>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(capacity: usize) -> Self {
        Self {
            path: Vec::with_capacity(capacity),
            visited: HashSet::with_capacity(capacity),
        }
    }

    /// Create a [`Path`] object from a list of coordinates.
    pub fn from_vec(path: Vec<Coordinate>) -> Self {
        let visited: HashSet<Coordinate> = path.iter().copied().collect();
        Self { path, visited }
    }

    /// Add a cell to the path.
    pub fn push(&mut self, coord: Coordinate) {
        self.path.push(coord);
        self.visited.insert(coord);
    }

    /// Remove the last cell from the path.
    pub fn pop(&mut self) {
        if let Some(c) = self.path.pop() {
            self.visited.remove(&c);
        }
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.visited.contains(&coord)
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &Vec<Coordinate> {
        &self.path
    }

    pub fn get_first(&self) -> Option<Coordinate> {
        self.path.first().copied()
    }

    pub fn get_last(&self) -> Option<Coordinate> {
        self.path.last().copied()
    }

    /// Verify that the path goes from the start cell to the end cell of the grid, through open
    /// and adjacent cells, without visiting a cell twice.
    pub fn validate(&self, grid: &GridModel) -> Result<(), PathError> {
        let (first, last) = match (self.get_first(), self.get_last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(PathError::Empty),
        };
        if first != grid.start() {
            return Err(PathError::WrongStart(first));
        }
        if last != grid.end() {
            return Err(PathError::WrongEnd(last));
        }
        if self.len() > grid.cell_count() {
            return Err(PathError::TooLong(grid.cell_count()));
        }

        let mut seen: HashSet<Coordinate> = HashSet::with_capacity(self.len());
        for (i, c) in self.path.iter().enumerate() {
            if !grid.is_open(*c) {
                return Err(PathError::Blocked(*c));
            }
            if !seen.insert(*c) {
                return Err(PathError::Duplicated(*c));
            }
            if i > 0 && !self.path[i - 1].is_adjacent(c) {
                return Err(PathError::NotAdjacent(self.path[i - 1], *c));
            }
        }
        Ok(())
    }
}
