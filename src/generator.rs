/*
generator.rs

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

//! Generate random mazes and represent paths.
//!
//! A [`grid::GridModel`] object holds the grid dimensions and the walls.
//! The start cell is the top left corner, and the end cell is the bottom right corner.
//!
//! To produce a maze, create a [`maze::MazeGenerator`] object with a [`walls::WallSampler`],
//! such as [`walls::RandomWalls`], and use its [`maze::MazeGenerator::generate`] method.
//! Every attempt samples a brand new wall set, which is kept only if
//! [`connectivity::is_connected`] confirms that the end cell can be reached.
//! If no attempt succeeds, then the method returns an error.
//!
//! A solution is a [`path::Path`] object, which can be verified against its grid with
//! [`path::Path::validate`].

pub mod connectivity;
pub mod grid;
pub mod maze;
pub mod path;
pub mod walls;
