/*
connectivity.rs

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

//! Verify that the end cell can be reached from the start cell.

use log::{debug, warn};
use std::collections::{HashSet, VecDeque};

use super::grid::{Coordinate, Direction, GridModel};

/// Whether the end cell is reachable from the start cell by 4-directional moves that avoid the
/// walls.
///
/// Breadth-first traversal. A cell is queued only once. The traversal gives up and returns `false`
/// if it ever visits more than `2 * width * height` cells.
pub fn is_connected(grid: &GridModel) -> bool {
    let start: Coordinate = grid.start();
    let end: Coordinate = grid.end();
    let bound: usize = 2 * grid.cell_count();

    let mut visited: HashSet<Coordinate> = HashSet::with_capacity(grid.cell_count());
    let mut queue: VecDeque<Coordinate> = VecDeque::with_capacity(grid.cell_count());
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            debug!("End cell reached after visiting {} cells", visited.len());
            return true;
        }

        for direction in Direction::all() {
            if let Some(next) = grid.neighbor(current, direction)
                && !grid.is_wall(next)
                && visited.insert(next)
            {
                queue.push_back(next);
            }
        }

        if visited.len() > bound {
            warn!("Traversal bound of {bound} cells exceeded");
            return false;
        }
    }
    debug!("End cell unreachable ({} cells visited)", visited.len());
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: usize, height: usize, walls: &[(usize, usize)]) -> GridModel {
        GridModel::new(
            width,
            height,
            walls.iter().map(|(x, y)| Coordinate::new(*x, *y)),
        )
        .unwrap()
    }

    #[test]
    fn open_grid_is_connected() {
        assert!(is_connected(&grid(2, 1, &[])));
        assert!(is_connected(&grid(30, 20, &[])));
    }

    #[test]
    fn single_cell_is_connected() {
        assert!(is_connected(&grid(1, 1, &[])));
    }

    #[test]
    fn detour_around_a_wall() {
        assert!(is_connected(&grid(3, 2, &[(1, 0)])));
    }

    #[test]
    fn enclosed_end_is_not_connected() {
        // The end cell (3, 3) is closed by (2, 3) and (3, 2).
        assert!(!is_connected(&grid(4, 4, &[(2, 3), (3, 2)])));
    }

    #[test]
    fn wall_column_cuts_the_grid() {
        assert!(!is_connected(&grid(3, 3, &[(1, 0), (1, 1), (1, 2)])));
    }
}
