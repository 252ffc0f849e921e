/*
error.rs

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

//! Error types.
//!
//! Every failure ends as a [`MazeError`], which the [`crate::session::Session`] turns into a
//! single user notification before going back to the idle state.

use thiserror::Error;

/// Errors raised when building a [`crate::generator::grid::GridModel`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("The cell ({x}, {y}) is an endpoint and cannot be a wall")]
    EndpointWall { x: usize, y: usize },

    #[error("The wall ({x}, {y}) is outside the grid")]
    WallOutOfBounds { x: usize, y: usize },
}

/// Faults reported by the resolver boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolverFault {
    /// The synthesized program could not be consulted.
    #[error("Cannot load the rule program (line {line}): {reason}")]
    ProgramLoad { line: usize, reason: String },

    /// The goal query was rejected.
    #[error("Query error: {0}")]
    Query(String),

    /// The answer could not be decoded into a path.
    #[error("Malformed answer: {0}")]
    MalformedAnswer(String),

    /// The resolver gave up before finding an answer.
    #[error("Inference limit of {0} steps exceeded")]
    InferenceLimit(usize),
}

/// Outcome of a failed path search.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("No path found")]
    NoPathFound,

    #[error(transparent)]
    Resolver(#[from] ResolverFault),
}

/// Failures of the whole generate, search, and animate pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Could not generate a traversable maze after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("No path found")]
    NoPathFound,

    #[error("Search error: {0}")]
    ResolverFault(ResolverFault),

    #[error("Unexpected error during the search: {0}")]
    ExecutionFault(String),
}

impl From<SearchError> for MazeError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::NoPathFound => MazeError::NoPathFound,
            SearchError::Resolver(fault) => MazeError::ResolverFault(fault),
        }
    }
}

impl MazeError {
    /// Message displayed to the user.
    ///
    /// Resolver faults get a short message; the details only go to the log.
    pub fn alert_message(&self) -> String {
        match self {
            MazeError::GenerationExhausted { .. } => {
                "Could not generate a traversable maze. Try again.".to_string()
            }
            MazeError::NoPathFound => "No path found!".to_string(),
            MazeError::ResolverFault(ResolverFault::ProgramLoad { .. }) => {
                "Error while loading the rule program!".to_string()
            }
            MazeError::ResolverFault(ResolverFault::Query(_)) => "Query error!".to_string(),
            MazeError::ResolverFault(_) => "Error while searching for the path!".to_string(),
            MazeError::ExecutionFault(_) => "An error occurred during the search!".to_string(),
        }
    }
}
