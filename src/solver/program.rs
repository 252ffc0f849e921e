/*
program.rs

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

//! Synthesize the rule program that describes a grid.
//!
//! The program is plain text with one clause per line:
//!
//! ```text
//! size(3, 2).
//! wall(1, 0).
//! valid(X, Y) :- size(W, H), X >= 0, X < W, Y >= 0, Y < H, \+ wall(X, Y).
//! move(X, Y, X1, Y) :- X1 is X + 1, valid(X1, Y).
//! move(X, Y, X1, Y) :- X1 is X - 1, valid(X1, Y).
//! move(X, Y, X, Y1) :- Y1 is Y + 1, valid(X, Y1).
//! move(X, Y, X, Y1) :- Y1 is Y - 1, valid(X, Y1).
//! dfs(X, Y, X, Y, _, [[X, Y]]).
//! dfs(X, Y, TX, TY, Visited, [[X, Y] | Path]) :- move(X, Y, NX, NY), \+ member([NX, NY], Visited), length(Visited, L), L < 6, dfs(NX, NY, TX, TY, [[NX, NY] | Visited], Path).
//! find_path(Path) :- dfs(0, 0, 2, 1, [[0, 0]], Path).
//! ```
//!
//! The order of the `move` rules is the order in which the moves are tried.

use crate::generator::grid::{Coordinate, Direction, GridModel};

/// Goal submitted to the resolver. `Path` is bound to the list of coordinates.
pub const GOAL: &str = "find_path(Path).";

/// Content of the rule program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub width: usize,
    pub height: usize,
    pub walls: Vec<Coordinate>,
    pub start: Coordinate,
    pub target: Coordinate,

    /// Maximum number of cells in a path.
    pub max_depth: usize,
}

impl Program {
    /// Create a [`Program`] object that searches from the start cell to the end cell of the grid.
    pub fn from_grid(grid: &GridModel) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            walls: grid.walls().copied().collect(),
            start: grid.start(),
            target: grid.end(),
            max_depth: grid.cell_count(),
        }
    }

    /// Return the text of the program.
    pub fn source(&self) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(self.walls.len() + 10);
        lines.push(":- use_module(library(lists)).".to_string());
        lines.push(format!("size({}, {}).", self.width, self.height));
        lines.extend(self.walls.iter().map(|w| format!("wall({}, {}).", w.x, w.y)));
        lines.push(
            "valid(X, Y) :- size(W, H), X >= 0, X < W, Y >= 0, Y < H, \\+ wall(X, Y).".to_string(),
        );
        lines.extend(Direction::all().map(move_rule));
        lines.push("dfs(X, Y, X, Y, _, [[X, Y]]).".to_string());
        lines.push(format!(
            "dfs(X, Y, TX, TY, Visited, [[X, Y] | Path]) :- move(X, Y, NX, NY), \
             \\+ member([NX, NY], Visited), length(Visited, L), L < {}, \
             dfs(NX, NY, TX, TY, [[NX, NY] | Visited], Path).",
            self.max_depth
        ));
        lines.push(format!(
            "find_path(Path) :- dfs({sx}, {sy}, {tx}, {ty}, [[{sx}, {sy}]], Path).",
            sx = self.start.x,
            sy = self.start.y,
            tx = self.target.x,
            ty = self.target.y
        ));

        let mut s: String = lines.join("\n");
        s.push('\n');
        s
    }
}

/// Return the rule for a move in the given direction.
fn move_rule(direction: Direction) -> String {
    let (dx, dy) = direction.delta();
    let sign: char = if dx + dy > 0 { '+' } else { '-' };
    if dx != 0 {
        format!("move(X, Y, X1, Y) :- X1 is X {sign} 1, valid(X1, Y).")
    } else {
        format!("move(X, Y, X, Y1) :- Y1 is Y {sign} 1, valid(X, Y1).")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_lists_the_facts() {
        let grid = GridModel::new(3, 2, [Coordinate::new(1, 0)]).unwrap();
        let program = Program::from_grid(&grid);
        assert_eq!(program.max_depth, 6);
        let source = program.source();
        assert!(source.contains("size(3, 2).\n"));
        assert!(source.contains("wall(1, 0).\n"));
        assert!(source.contains("L < 6,"));
        assert!(source.contains("find_path(Path) :- dfs(0, 0, 2, 1, [[0, 0]], Path)."));
    }

    #[test]
    fn one_clause_per_line() {
        let grid = GridModel::new(2, 2, [Coordinate::new(1, 0), Coordinate::new(0, 1)]).unwrap();
        let source = Program::from_grid(&grid).source();
        assert!(source.ends_with("Path).\n"));
        let lines: Vec<&str> = source.lines().collect();
        // Directive, size, two walls, valid, four moves, two dfs, find_path
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], ":- use_module(library(lists)).");
        assert_eq!(&lines[2..4], ["wall(0, 1).", "wall(1, 0)."]);
        assert!(lines.iter().all(|l| l.ends_with('.')));
    }

    #[test]
    fn move_rules_follow_the_exploration_order() {
        let grid = GridModel::new(2, 2, []).unwrap();
        let source = Program::from_grid(&grid).source();
        let moves: Vec<&str> = source.lines().filter(|l| l.starts_with("move(")).collect();
        assert_eq!(
            moves,
            vec![
                "move(X, Y, X1, Y) :- X1 is X + 1, valid(X1, Y).",
                "move(X, Y, X1, Y) :- X1 is X - 1, valid(X1, Y).",
                "move(X, Y, X, Y1) :- Y1 is Y + 1, valid(X, Y1).",
                "move(X, Y, X, Y1) :- Y1 is Y - 1, valid(X, Y1).",
            ]
        );
    }
}
