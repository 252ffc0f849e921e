/*
solver.rs

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

//! Search for a path through a maze with a rule program.
//!
//! The [`engine::PathSearchEngine`] describes the grid as a textual rule program
//! ([`program::Program`]): grid size and walls as facts, and rules for valid cells, moves, and
//! a depth-bounded path search that never visits a cell twice.
//! The program and the goal are submitted to a [`resolver::Resolver`], by default the embedded
//! [`resolver::BacktrackingResolver`].
//! The textual answer is then decoded by [`answer::decode`] and verified against the grid.
//!
//! A decoding problem is a resolver fault, which is reported separately from a goal that
//! simply has no solution.

pub mod answer;
pub mod engine;
pub mod program;
pub mod resolver;
