/*
engine.rs

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

//! Find a path through a maze by submitting a rule program to a resolver.

use log::{debug, error, info};

use super::answer;
use super::program::{GOAL, Program};
use super::resolver::{BacktrackingResolver, Resolver};
use crate::error::{ResolverFault, SearchError};
use crate::generator::grid::GridModel;
use crate::generator::path::Path;

/// Either a path, or the reason why there is none.
pub type SearchResult = Result<Path, SearchError>;

/// [`PathSearchEngine`] object.
pub struct PathSearchEngine {
    resolver: Box<dyn Resolver>,
}

impl PathSearchEngine {
    /// Create a [`PathSearchEngine`] object that uses the given resolver.
    pub fn new(resolver: Box<dyn Resolver>) -> Self {
        Self { resolver }
    }

    /// Create a [`PathSearchEngine`] object with the embedded backtracking resolver.
    pub fn with_inference_limit(inference_limit: usize) -> Self {
        Self::new(Box::new(BacktrackingResolver::new(inference_limit)))
    }

    /// Search for a path from the start cell to the end cell.
    ///
    /// The result is the first solution of the depth-first exploration, not necessarily the
    /// shortest path.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoPathFound`] if the goal fails, and [`SearchError::Resolver`] if the
    /// program cannot be loaded, the query fails, or the answer cannot be decoded into a valid
    /// path for the grid.
    pub fn search(&mut self, grid: &GridModel) -> SearchResult {
        let source: String = Program::from_grid(grid).source();
        debug!("Rule program:\n{source}");

        self.resolver.consult(&source).inspect_err(|e| {
            error!("Consult error: {e}");
        })?;

        let answer: String = match self.resolver.query(GOAL) {
            Ok(Some(a)) => a,
            Ok(None) => {
                info!("No path found");
                return Err(SearchError::NoPathFound);
            }
            Err(e) => {
                error!("Query error: {e}");
                return Err(e.into());
            }
        };
        debug!("Answer: {answer}");

        let path: Path = answer::decode(&answer).inspect_err(|e| {
            error!("Cannot decode the answer: {e}");
        })?;
        if let Err(e) = path.validate(grid) {
            error!("Invalid path in the answer `{answer}`: {e}");
            return Err(ResolverFault::MalformedAnswer(e.to_string()).into());
        }
        info!("Path of {} cells found", path.len());
        Ok(path)
    }
}
