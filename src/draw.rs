/*
draw.rs

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

//! Draw maze components.
//!
//! The [`Renderer`] trait is the drawing surface. Two renderers are provided:
//!
//! * [`ascii::AsciiCanvas`] keeps the maze in a character buffer that can be printed once the
//!   work is done.
//! * [`terminal::TerminalRenderer`] draws directly in the terminal with `crossterm`, which makes
//!   the path animation visible.

pub mod ascii;
pub mod terminal;

use log::debug;

use crate::generator::grid::GridModel;

/// Fill colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellColor {
    Start,
    End,
    Wall,
    Path,
}

impl CellColor {
    /// Return the red, green, and blue components of the color.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            CellColor::Start => (0, 0, 255),
            CellColor::End => (255, 0, 0),
            CellColor::Wall => (0, 0, 0),
            CellColor::Path => (255, 165, 0),
        }
    }
}

/// Drawing surface. Calls never fail from the caller point of view.
pub trait Renderer {
    /// Erase everything.
    fn clear(&mut self);

    /// Draw the outline of every cell.
    fn draw_grid(&mut self, width: usize, height: usize);

    fn draw_wall(&mut self, x: usize, y: usize);

    /// Fill a cell with the given color.
    fn draw_cell(&mut self, x: usize, y: usize, color: CellColor);

    /// Draw the outline of one cell.
    fn draw_outline(&mut self, x: usize, y: usize);

    /// Make the pending drawing operations visible.
    fn flush(&mut self) {}
}

/// Redraw the whole maze: grid, walls, and the two endpoints.
pub fn draw_maze(renderer: &mut dyn Renderer, grid: &GridModel) {
    debug!(
        "Drawing the {}x{} maze with {} walls",
        grid.width(),
        grid.height(),
        grid.wall_count()
    );
    renderer.clear();
    renderer.draw_grid(grid.width(), grid.height());
    for wall in grid.walls() {
        renderer.draw_wall(wall.x, wall.y);
    }
    let start = grid.start();
    let end = grid.end();
    renderer.draw_cell(start.x, start.y, CellColor::Start);
    renderer.draw_cell(end.x, end.y, CellColor::End);
    renderer.flush();
}

/// Renderer that records the calls, for tests.
#[cfg(test)]
pub mod recording {
    use super::{CellColor, Renderer};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DrawCall {
        Clear,
        Grid(usize, usize),
        Wall(usize, usize),
        Cell(usize, usize, CellColor),
        Outline(usize, usize),
    }

    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingRenderer {
        /// Return the cells painted with the given color, in drawing order.
        pub fn cells(&self, color: CellColor) -> Vec<(usize, usize)> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    DrawCall::Cell(x, y, col) if *col == color => Some((*x, *y)),
                    _ => None,
                })
                .collect()
        }

        pub fn count(&self, call: &DrawCall) -> usize {
            self.calls.iter().filter(|c| *c == call).count()
        }
    }

    impl Renderer for RecordingRenderer {
        fn clear(&mut self) {
            self.calls.push(DrawCall::Clear);
        }

        fn draw_grid(&mut self, width: usize, height: usize) {
            self.calls.push(DrawCall::Grid(width, height));
        }

        fn draw_wall(&mut self, x: usize, y: usize) {
            self.calls.push(DrawCall::Wall(x, y));
        }

        fn draw_cell(&mut self, x: usize, y: usize, color: CellColor) {
            self.calls.push(DrawCall::Cell(x, y, color));
        }

        fn draw_outline(&mut self, x: usize, y: usize) {
            self.calls.push(DrawCall::Outline(x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::{DrawCall, RecordingRenderer};
    use super::*;
    use crate::generator::grid::Coordinate;

    #[test]
    fn maze_is_drawn_from_scratch() {
        let grid = GridModel::new(3, 2, [Coordinate::new(1, 0)]).unwrap();
        let mut renderer = RecordingRenderer::default();
        draw_maze(&mut renderer, &grid);
        assert_eq!(
            renderer.calls,
            vec![
                DrawCall::Clear,
                DrawCall::Grid(3, 2),
                DrawCall::Wall(1, 0),
                DrawCall::Cell(0, 0, CellColor::Start),
                DrawCall::Cell(2, 1, CellColor::End),
            ]
        );
    }

    #[test]
    fn path_color_is_orange() {
        assert_eq!(CellColor::Path.rgb(), (255, 165, 0));
    }
}
