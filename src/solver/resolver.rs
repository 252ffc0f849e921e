/*
resolver.rs

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

//! Resolver boundary and the embedded backtracking resolver.
//!
//! A [`Resolver`] consults a rule program (see [`super::program`]) and answers a goal query with
//! a textual substitution, such as `Path = [[0, 0], [1, 0]]`.
//!
//! [`BacktrackingResolver`] understands the clauses that [`super::program::Program`] produces.
//! Facts and rule parameters (grid size, walls, move order, depth bound, start and target) are
//! read from the text, and the `dfs` rules are resolved by depth-first exploration: the base
//! clause is tried first, then the moves in the order of the `move` rules, skipping the cells
//! already in the path and stopping at the depth bound. The first solution wins.
//!
//! Moves into a cell from which the target is out of reach, once the path cells are blocked, are
//! not explored. Such subtrees hold no solution, so the first solution stays the same, but the
//! search no longer backtracks through every dead end of a large maze.

use log::{debug, warn};
use regex::Regex;
use std::collections::{HashSet, VecDeque};
use std::sync::LazyLock;

use super::program::GOAL;
use crate::error::ResolverFault;
use crate::generator::grid::{Coordinate, Direction};
use crate::generator::path::Path;

static SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^size\((\d+), (\d+)\)\.$").expect("valid regex"));
static WALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^wall\((\d+), (\d+)\)\.$").expect("valid regex"));
static VALID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^valid\(X, Y\) :- size\(W, H\), X >= 0, X < W, Y >= 0, Y < H, \\\+ wall\(X, Y\)\.$")
        .expect("valid regex")
});
static MOVE_X: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^move\(X, Y, X1, Y\) :- X1 is X ([+-]) 1, valid\(X1, Y\)\.$").expect("valid regex")
});
static MOVE_Y: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^move\(X, Y, X, Y1\) :- Y1 is Y ([+-]) 1, valid\(X, Y1\)\.$").expect("valid regex")
});
static DFS_BASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^dfs\(X, Y, X, Y, _, \[\[X, Y\]\]\)\.$").expect("valid regex")
});
static DFS_STEP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^dfs\(X, Y, TX, TY, Visited, \[\[X, Y\] \| Path\]\) :- move\(X, Y, NX, NY\), \\\+ member\(\[NX, NY\], Visited\), length\(Visited, L\), L < (\d+), dfs\(NX, NY, TX, TY, \[\[NX, NY\] \| Visited\], Path\)\.$",
    )
    .expect("valid regex")
});
static FIND_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^find_path\(Path\) :- dfs\((\d+), (\d+), (\d+), (\d+), \[\[(\d+), (\d+)\]\], Path\)\.$",
    )
    .expect("valid regex")
});

/// Engine that consults a rule program and resolves a goal.
pub trait Resolver {
    /// Load the program, replacing any previously loaded one.
    fn consult(&mut self, program: &str) -> Result<(), ResolverFault>;

    /// Resolve the goal and return the first answer, or `None` if the goal fails.
    fn query(&mut self, goal: &str) -> Result<Option<String>, ResolverFault>;
}

/// Facts and rule parameters read from a consulted program.
#[derive(Debug, Default, Clone)]
struct KnowledgeBase {
    width: usize,
    height: usize,
    walls: HashSet<Coordinate>,
    moves: Vec<Direction>,
    depth_bound: usize,
    start: Coordinate,
    target: Coordinate,
}

impl KnowledgeBase {
    /// Return the destination of a move if the `valid` rule accepts it.
    fn step(&self, from: Coordinate, direction: Direction) -> Option<Coordinate> {
        let (dx, dy) = direction.delta();
        let x: usize = from.x.checked_add_signed(dx as isize)?;
        let y: usize = from.y.checked_add_signed(dy as isize)?;
        let to = Coordinate::new(x, y);
        if x < self.width && y < self.height && !self.walls.contains(&to) {
            Some(to)
        } else {
            None
        }
    }

    /// Whether the target can be reached from `from` without going through the path cells.
    fn reaches_target(&self, from: Coordinate, path: &Path) -> bool {
        let mut seen: HashSet<Coordinate> = HashSet::from([from]);
        let mut queue: VecDeque<Coordinate> = VecDeque::from([from]);
        while let Some(cell) = queue.pop_front() {
            if cell == self.target {
                return true;
            }
            for direction in &self.moves {
                if let Some(next) = self.step(cell, *direction)
                    && !path.contains(next)
                    && seen.insert(next)
                {
                    queue.push_back(next);
                }
            }
        }
        false
    }
}

/// Clauses found while consulting a program. Missing parts are load errors.
#[derive(Default)]
struct Consulted {
    size: Option<(usize, usize)>,
    walls: Vec<(usize, Coordinate)>,
    valid_rule: bool,
    moves: Vec<Direction>,
    base_case: bool,
    depth_bound: Option<usize>,
    goal: Option<(Coordinate, Coordinate)>,
}

/// Embedded resolver for the path-search program.
pub struct BacktrackingResolver {
    knowledge: Option<KnowledgeBase>,

    /// Maximum number of resolution steps for one query.
    inference_limit: usize,

    /// Number of resolution steps used by the last query.
    pub inferences: usize,
}

impl BacktrackingResolver {
    /// Create a [`BacktrackingResolver`] object.
    pub fn new(inference_limit: usize) -> Self {
        Self {
            knowledge: None,
            inference_limit,
            inferences: 0,
        }
    }

    /// Parse a number captured by one of the clause patterns.
    fn number(line: usize, text: &str) -> Result<usize, ResolverFault> {
        text.parse::<usize>().map_err(|e| ResolverFault::ProgramLoad {
            line,
            reason: format!("invalid number `{text}`: {e}"),
        })
    }

    /// Record one clause.
    fn consult_clause(
        consulted: &mut Consulted,
        line: usize,
        clause: &str,
    ) -> Result<(), ResolverFault> {
        if let Some(c) = SIZE.captures(clause) {
            if consulted.size.is_some() {
                return Err(ResolverFault::ProgramLoad {
                    line,
                    reason: "size/2 is defined twice".to_string(),
                });
            }
            consulted.size = Some((Self::number(line, &c[1])?, Self::number(line, &c[2])?));
        } else if let Some(c) = WALL.captures(clause) {
            let wall = Coordinate::new(Self::number(line, &c[1])?, Self::number(line, &c[2])?);
            consulted.walls.push((line, wall));
        } else if VALID.is_match(clause) {
            consulted.valid_rule = true;
        } else if let Some(c) = MOVE_X.captures(clause) {
            let dx: i64 = if &c[1] == "+" { 1 } else { -1 };
            consulted.moves.extend(Direction::from_delta(dx, 0));
        } else if let Some(c) = MOVE_Y.captures(clause) {
            let dy: i64 = if &c[1] == "+" { 1 } else { -1 };
            consulted.moves.extend(Direction::from_delta(0, dy));
        } else if DFS_BASE.is_match(clause) {
            consulted.base_case = true;
        } else if let Some(c) = DFS_STEP.captures(clause) {
            consulted.depth_bound = Some(Self::number(line, &c[1])?);
        } else if let Some(c) = FIND_PATH.captures(clause) {
            let start = Coordinate::new(Self::number(line, &c[1])?, Self::number(line, &c[2])?);
            let target = Coordinate::new(Self::number(line, &c[3])?, Self::number(line, &c[4])?);
            let visited = Coordinate::new(Self::number(line, &c[5])?, Self::number(line, &c[6])?);
            if visited != start {
                return Err(ResolverFault::ProgramLoad {
                    line,
                    reason: "the visited list must start with the start cell".to_string(),
                });
            }
            consulted.goal = Some((start, target));
        } else {
            return Err(ResolverFault::ProgramLoad {
                line,
                reason: format!("unknown clause `{clause}`"),
            });
        }
        Ok(())
    }

    /// Verify that the program is complete and build the knowledge base.
    fn build(consulted: Consulted, last_line: usize) -> Result<KnowledgeBase, ResolverFault> {
        let missing = |what: &str| ResolverFault::ProgramLoad {
            line: last_line,
            reason: format!("missing {what}"),
        };
        let (width, height) = consulted.size.ok_or_else(|| missing("size/2 fact"))?;
        let depth_bound: usize = consulted.depth_bound.ok_or_else(|| missing("dfs/6 rule"))?;
        let (start, target) = consulted.goal.ok_or_else(|| missing("find_path/1 rule"))?;
        if !consulted.valid_rule {
            return Err(missing("valid/2 rule"));
        }
        if !consulted.base_case {
            return Err(missing("dfs/6 base clause"));
        }
        if consulted.moves.is_empty() {
            return Err(missing("move/4 rules"));
        }

        let mut walls: HashSet<Coordinate> = HashSet::with_capacity(consulted.walls.len());
        for (line, wall) in consulted.walls {
            if wall.x >= width || wall.y >= height {
                return Err(ResolverFault::ProgramLoad {
                    line,
                    reason: format!("wall {wall} is outside the {width}x{height} grid"),
                });
            }
            walls.insert(wall);
        }

        Ok(KnowledgeBase {
            width,
            height,
            walls,
            moves: consulted.moves,
            depth_bound,
            start,
            target,
        })
    }

    /// Resolve `dfs` from `current`. The path holds the cells visited so far, `current` included.
    fn solve(
        &mut self,
        kb: &KnowledgeBase,
        current: Coordinate,
        path: &mut Path,
    ) -> Result<bool, ResolverFault> {
        self.inferences += 1;
        if self.inferences > self.inference_limit {
            return Err(ResolverFault::InferenceLimit(self.inference_limit));
        }

        // Base clause
        if current == kb.target {
            return Ok(true);
        }

        for direction in &kb.moves {
            let Some(next) = kb.step(current, *direction) else {
                continue;
            };
            if path.contains(next) || path.len() >= kb.depth_bound {
                continue;
            }
            // No solution below a cell cut off from the target
            if !kb.reaches_target(next, path) {
                continue;
            }
            path.push(next);
            if self.solve(kb, next, path)? {
                return Ok(true);
            }
            path.pop();
        }
        Ok(false)
    }
}

impl Resolver for BacktrackingResolver {
    fn consult(&mut self, program: &str) -> Result<(), ResolverFault> {
        self.knowledge = None;
        let mut consulted = Consulted::default();
        let mut last_line: usize = 0;

        for (i, raw) in program.lines().enumerate() {
            last_line = i + 1;
            let clause: String = raw.split_whitespace().collect::<Vec<&str>>().join(" ");
            if clause.is_empty() || clause.starts_with('%') || clause.starts_with(":-") {
                continue;
            }
            Self::consult_clause(&mut consulted, last_line, &clause)?;
        }

        let kb: KnowledgeBase = Self::build(consulted, last_line)?;
        debug!(
            "Program consulted: {}x{} grid, {} walls, {} moves, depth bound {}",
            kb.width,
            kb.height,
            kb.walls.len(),
            kb.moves.len(),
            kb.depth_bound
        );
        self.knowledge = Some(kb);
        Ok(())
    }

    fn query(&mut self, goal: &str) -> Result<Option<String>, ResolverFault> {
        if goal.trim() != GOAL {
            return Err(ResolverFault::Query(format!("unknown goal `{}`", goal.trim())));
        }
        let kb: KnowledgeBase = self
            .knowledge
            .clone()
            .ok_or_else(|| ResolverFault::Query("no program loaded".to_string()))?;

        self.inferences = 0;
        let mut path = Path::new(kb.depth_bound);
        path.push(kb.start);
        let found: bool = self.solve(&kb, kb.start, &mut path)?;
        debug!("Query resolved in {} inferences", self.inferences);
        if !found {
            warn!("The goal {GOAL} failed");
            return Ok(None);
        }

        let cells: Vec<String> = path
            .get()
            .iter()
            .map(|c| format!("[{}, {}]", c.x, c.y))
            .collect();
        Ok(Some(format!("Path = [{}]", cells.join(", "))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::grid::GridModel;
    use crate::solver::program::Program;

    fn consult(grid: &GridModel) -> BacktrackingResolver {
        let mut resolver = BacktrackingResolver::new(1_000_000);
        resolver
            .consult(&Program::from_grid(grid).source())
            .unwrap();
        resolver
    }

    #[test]
    fn detour_scenario() {
        let grid = GridModel::new(3, 2, [Coordinate::new(1, 0)]).unwrap();
        let answer = consult(&grid).query(GOAL).unwrap();
        assert_eq!(
            answer.as_deref(),
            Some("Path = [[0, 0], [0, 1], [1, 1], [2, 1], [2, 0]]")
        );
    }

    #[test]
    fn straight_line() {
        let grid = GridModel::new(2, 1, []).unwrap();
        let answer = consult(&grid).query(GOAL).unwrap();
        assert_eq!(answer.as_deref(), Some("Path = [[0, 0], [1, 0]]"));
    }

    #[test]
    fn single_cell_matches_the_base_clause() {
        let grid = GridModel::new(1, 1, []).unwrap();
        let answer = consult(&grid).query(GOAL).unwrap();
        assert_eq!(answer.as_deref(), Some("Path = [[0, 0]]"));
    }

    #[test]
    fn first_solution_is_not_the_shortest() {
        // Going +x first snakes along the top row before coming down.
        let grid = GridModel::new(3, 3, []).unwrap();
        let answer = consult(&grid).query(GOAL).unwrap();
        assert_eq!(
            answer.as_deref(),
            Some("Path = [[0, 0], [1, 0], [2, 0], [2, 1], [1, 1], [0, 1], [0, 2], [1, 2], [2, 2]]")
        );
    }

    #[test]
    fn blocked_grid_fails() {
        let grid = GridModel::new(3, 3, [Coordinate::new(1, 0), Coordinate::new(0, 1)]).unwrap();
        assert_eq!(consult(&grid).query(GOAL), Ok(None));
    }

    #[test]
    fn move_order_comes_from_the_program() {
        let grid = GridModel::new(2, 2, []).unwrap();
        let source = Program::from_grid(&grid).source();
        // Swap the +x and +y rules
        let reordered = source
            .replace(
                "move(X, Y, X1, Y) :- X1 is X + 1, valid(X1, Y).",
                "@@",
            )
            .replace(
                "move(X, Y, X, Y1) :- Y1 is Y + 1, valid(X, Y1).",
                "move(X, Y, X1, Y) :- X1 is X + 1, valid(X1, Y).",
            )
            .replace("@@", "move(X, Y, X, Y1) :- Y1 is Y + 1, valid(X, Y1).");
        let mut resolver = BacktrackingResolver::new(1_000);
        resolver.consult(&reordered).unwrap();
        assert_eq!(
            resolver.query(GOAL).unwrap().as_deref(),
            Some("Path = [[0, 0], [0, 1], [1, 1]]")
        );
    }

    #[test]
    fn depth_bound_limits_the_path_length() {
        let grid = GridModel::new(3, 3, []).unwrap();
        let source = Program::from_grid(&grid).source().replace("L < 9,", "L < 5,");
        let mut resolver = BacktrackingResolver::new(100_000);
        resolver.consult(&source).unwrap();
        let answer = resolver.query(GOAL).unwrap().unwrap();
        assert_eq!(answer.matches('[').count() - 1, 5);
    }

    #[test]
    fn unknown_clause_is_a_load_error() {
        let grid = GridModel::new(2, 1, []).unwrap();
        let source = Program::from_grid(&grid).source() + "teleport(0, 0).\n";
        let mut resolver = BacktrackingResolver::new(1_000);
        match resolver.consult(&source) {
            Err(ResolverFault::ProgramLoad { reason, .. }) => assert!(reason.contains("teleport")),
            other => panic!("unexpected result {other:?}"),
        }
        // Nothing is loaded after a failure
        assert!(matches!(resolver.query(GOAL), Err(ResolverFault::Query(_))));
    }

    #[test]
    fn missing_rules_are_load_errors() {
        let mut resolver = BacktrackingResolver::new(1_000);
        let err = resolver.consult("size(2, 1).\n").unwrap_err();
        assert!(matches!(err, ResolverFault::ProgramLoad { line: 1, .. }));
    }

    #[test]
    fn wall_outside_the_grid_is_a_load_error() {
        let grid = GridModel::new(2, 1, []).unwrap();
        let source = Program::from_grid(&grid)
            .source()
            .replace("size(2, 1).", "size(2, 1).\nwall(5, 5).");
        let mut resolver = BacktrackingResolver::new(1_000);
        assert!(matches!(
            resolver.consult(&source),
            Err(ResolverFault::ProgramLoad { line: 3, .. })
        ));
    }

    #[test]
    fn unknown_goal_is_a_query_error() {
        let grid = GridModel::new(2, 1, []).unwrap();
        let mut resolver = consult(&grid);
        assert!(matches!(
            resolver.query("find_path(X, Y)."),
            Err(ResolverFault::Query(_))
        ));
    }

    #[test]
    fn dead_end_pocket_is_skipped() {
        // From (2, 1), going -x leads into a pocket that cannot reach (2, 2)
        let grid = GridModel::new(3, 3, [Coordinate::new(1, 2)]).unwrap();
        let mut resolver = consult(&grid);
        let answer = resolver.query(GOAL).unwrap();
        assert_eq!(
            answer.as_deref(),
            Some("Path = [[0, 0], [1, 0], [2, 0], [2, 1], [2, 2]]")
        );
        // One inference per path cell: no backtracking
        assert_eq!(resolver.inferences, 5);
    }

    #[test]
    fn inference_limit_stops_the_search() {
        let grid = GridModel::new(10, 10, []).unwrap();
        let mut resolver = BacktrackingResolver::new(5);
        resolver
            .consult(&Program::from_grid(&grid).source())
            .unwrap();
        assert_eq!(resolver.query(GOAL), Err(ResolverFault::InferenceLimit(5)));
    }
}
