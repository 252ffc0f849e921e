/*
ascii.rs

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

//! Character buffer renderer.

use super::{CellColor, Renderer};

const OPEN: char = '.';

/// [`AsciiCanvas`] object. One character per cell.
#[derive(Debug, Default, Clone)]
pub struct AsciiCanvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl AsciiCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&mut self, x: usize, y: usize, c: char) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = c;
        }
    }

    /// Return the canvas content, one line per row.
    pub fn render(&self) -> String {
        if self.width == 0 {
            return String::new();
        }
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<String>>()
            .join("\n")
    }
}

fn glyph(color: CellColor) -> char {
    match color {
        CellColor::Start => 'S',
        CellColor::End => 'E',
        CellColor::Wall => '#',
        CellColor::Path => 'o',
    }
}

impl Renderer for AsciiCanvas {
    fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.cells.clear();
    }

    fn draw_grid(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![OPEN; width * height];
    }

    fn draw_wall(&mut self, x: usize, y: usize) {
        self.set(x, y, glyph(CellColor::Wall));
    }

    fn draw_cell(&mut self, x: usize, y: usize, color: CellColor) {
        self.set(x, y, glyph(color));
    }

    // Cells have no borders in text mode
    fn draw_outline(&mut self, _x: usize, _y: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::draw_maze;
    use crate::generator::grid::{Coordinate, GridModel};

    #[test]
    fn maze_as_text() {
        let grid = GridModel::new(3, 2, [Coordinate::new(1, 0)]).unwrap();
        let mut canvas = AsciiCanvas::new();
        draw_maze(&mut canvas, &grid);
        assert_eq!(canvas.render(), "S#.\n..E");
        canvas.draw_cell(0, 1, CellColor::Path);
        assert_eq!(canvas.render(), "S#.\no.E");
    }

    #[test]
    fn out_of_range_cells_are_ignored() {
        let mut canvas = AsciiCanvas::new();
        canvas.draw_grid(2, 1);
        canvas.draw_cell(5, 5, CellColor::Path);
        assert_eq!(canvas.render(), "..");
        canvas.clear();
        assert_eq!(canvas.render(), "");
    }
}
