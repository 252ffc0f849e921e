/*
grid.rs

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

//! Grid model: dimensions, walls, and 4-directional moves.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use strum_macros::FromRepr;

use crate::error::GridError;

/// Cell position in the grid. `x` grows to the right and `y` grows downwards.
#[derive(
    Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether the two coordinates differ by exactly one unit on exactly one axis.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Moves, in the order in which they are explored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub enum Direction {
    /// +x
    East,
    /// -x
    West,
    /// +y
    South,
    /// -y
    North,
}

impl Direction {
    /// Return all the directions in exploration order (+x, -x, +y, -y).
    pub fn all() -> impl Iterator<Item = Direction> {
        (0..4).filter_map(Direction::from_repr)
    }

    /// Return the `(dx, dy)` offset of the move.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::North => (0, -1),
        }
    }

    /// Return the direction for a unit offset.
    pub fn from_delta(dx: i64, dy: i64) -> Option<Self> {
        Direction::all().find(|d| d.delta() == (dx, dy))
    }
}

/// Grid with its walls.
///
/// The start cell `(0, 0)` and the end cell `(width - 1, height - 1)` are never walls.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    width: usize,
    height: usize,
    walls: BTreeSet<Coordinate>,
}

impl GridModel {
    /// Create a [`GridModel`] object.
    ///
    /// # Errors
    ///
    /// The method returns an error if a dimension is zero, or if a wall is outside the grid or
    /// on one of the two endpoints.
    pub fn new(
        width: usize,
        height: usize,
        walls: impl IntoIterator<Item = Coordinate>,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let mut grid = Self {
            width,
            height,
            walls: BTreeSet::new(),
        };
        for wall in walls {
            if !grid.contains(wall) {
                return Err(GridError::WallOutOfBounds {
                    x: wall.x,
                    y: wall.y,
                });
            }
            if wall == grid.start() || wall == grid.end() {
                return Err(GridError::EndpointWall {
                    x: wall.x,
                    y: wall.y,
                });
            }
            grid.walls.insert(wall);
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn start(&self) -> Coordinate {
        Coordinate::new(0, 0)
    }

    pub fn end(&self) -> Coordinate {
        Coordinate::new(self.width - 1, self.height - 1)
    }

    /// Iterate over the walls, ordered by `x` then `y`.
    pub fn walls(&self) -> impl Iterator<Item = &Coordinate> {
        self.walls.iter()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Whether the coordinate is inside the grid.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    pub fn is_wall(&self, coord: Coordinate) -> bool {
        self.walls.contains(&coord)
    }

    /// Whether the coordinate is inside the grid and is not a wall.
    pub fn is_open(&self, coord: Coordinate) -> bool {
        self.contains(coord) && !self.is_wall(coord)
    }

    /// Return the cell next to `coord` in the given direction, if it is inside the grid.
    pub fn neighbor(&self, coord: Coordinate, direction: Direction) -> Option<Coordinate> {
        let (dx, dy) = direction.delta();
        let x: usize = coord.x.checked_add_signed(dx as isize)?;
        let y: usize = coord.y.checked_add_signed(dy as isize)?;
        let c = Coordinate::new(x, y);
        if self.contains(c) { Some(c) } else { None }
    }

    /// Iterate over all the cells that can become walls (every cell but the endpoints).
    pub fn interior_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (start, end) = (self.start(), self.end());
        (0..self.width)
            .flat_map(move |x| (0..self.height).map(move |y| Coordinate::new(x, y)))
            .filter(move |c| *c != start && *c != end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_order_is_fixed() {
        let deltas: Vec<(i64, i64)> = Direction::all().map(|d| d.delta()).collect();
        assert_eq!(deltas, vec![(1, 0), (-1, 0), (0, 1), (0, -1)]);
        assert_eq!(Direction::from_delta(0, -1), Some(Direction::North));
        assert_eq!(Direction::from_delta(1, 1), None);
    }

    #[test]
    fn endpoints_cannot_be_walls() {
        let err = GridModel::new(3, 2, [Coordinate::new(0, 0)]).unwrap_err();
        assert_eq!(err, GridError::EndpointWall { x: 0, y: 0 });
        let err = GridModel::new(3, 2, [Coordinate::new(2, 1)]).unwrap_err();
        assert_eq!(err, GridError::EndpointWall { x: 2, y: 1 });
    }

    #[test]
    fn walls_must_be_inside() {
        let err = GridModel::new(3, 2, [Coordinate::new(3, 0)]).unwrap_err();
        assert_eq!(err, GridError::WallOutOfBounds { x: 3, y: 0 });
        assert!(GridModel::new(0, 2, []).is_err());
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let grid = GridModel::new(3, 2, []).unwrap();
        let origin = Coordinate::new(0, 0);
        assert_eq!(grid.neighbor(origin, Direction::West), None);
        assert_eq!(grid.neighbor(origin, Direction::North), None);
        assert_eq!(
            grid.neighbor(origin, Direction::East),
            Some(Coordinate::new(1, 0))
        );
        assert_eq!(grid.neighbor(Coordinate::new(0, 1), Direction::South), None);
    }

    #[test]
    fn interior_cells_exclude_endpoints() {
        let grid = GridModel::new(3, 2, [Coordinate::new(1, 0)]).unwrap();
        let cells: Vec<Coordinate> = grid.interior_cells().collect();
        assert_eq!(cells.len(), 4);
        assert!(!cells.contains(&grid.start()));
        assert!(!cells.contains(&grid.end()));
        assert!(!grid.is_open(Coordinate::new(1, 0)));
        assert!(grid.is_open(Coordinate::new(1, 1)));
    }

    #[test]
    fn single_cell_grid_has_no_interior() {
        let grid = GridModel::new(1, 1, []).unwrap();
        assert_eq!(grid.start(), grid.end());
        assert_eq!(grid.interior_cells().count(), 0);
    }
}
