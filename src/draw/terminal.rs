/*
terminal.rs

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

//! Draw the maze in the terminal with `crossterm`.
//!
//! Every cell is two columns wide. The maze is drawn from the top left corner of the screen.

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use log::warn;
use std::io::{self, Write};

use super::{CellColor, Renderer};

const GRID_COLOR: Color = Color::Rgb {
    r: 0xcc,
    g: 0xcc,
    b: 0xcc,
};

fn color(c: CellColor) -> Color {
    let (r, g, b) = c.rgb();
    Color::Rgb { r, g, b }
}

/// [`TerminalRenderer`] object.
pub struct TerminalRenderer<W: Write> {
    out: W,
    width: usize,
    height: usize,

    /// Fill color of each cell, to redraw the outline over it.
    fills: Vec<Option<CellColor>>,

    /// Whether a write error was already logged.
    failed: bool,
}

impl TerminalRenderer<io::Stdout> {
    /// Create a [`TerminalRenderer`] object that draws on the standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            width: 0,
            height: 0,
            fills: Vec::new(),
            failed: false,
        }
    }

    /// Log the first write error only. Drawing never interrupts the caller.
    fn check(&mut self, res: io::Result<()>) {
        if let Err(e) = res
            && !self.failed
        {
            warn!("Cannot draw in the terminal: {e}");
            self.failed = true;
        }
    }

    fn paint(&mut self, x: usize, y: usize, fill: Option<CellColor>, glyph: &str) {
        if x >= self.width || y >= self.height {
            return;
        }
        let bg: Color = fill.map_or(Color::Reset, color);
        let res = queue!(
            self.out,
            MoveTo((x * 2) as u16, y as u16),
            SetBackgroundColor(bg),
            SetForegroundColor(GRID_COLOR),
            Print(glyph),
            ResetColor
        );
        self.check(res);
    }

    fn fill(&mut self, x: usize, y: usize, c: CellColor) {
        if x < self.width && y < self.height {
            self.fills[y * self.width + x] = Some(c);
        }
        self.paint(x, y, Some(c), "  ");
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.fills.clear();
        let res = queue!(self.out, Clear(ClearType::All), MoveTo(0, 0));
        self.check(res);
    }

    fn draw_grid(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.fills = vec![None; width * height];
        for y in 0..height {
            for x in 0..width {
                self.paint(x, y, None, "[]");
            }
        }
    }

    fn draw_wall(&mut self, x: usize, y: usize) {
        self.fill(x, y, CellColor::Wall);
    }

    fn draw_cell(&mut self, x: usize, y: usize, color: CellColor) {
        self.fill(x, y, color);
    }

    fn draw_outline(&mut self, x: usize, y: usize) {
        let fill: Option<CellColor> = if x < self.width && y < self.height {
            self.fills[y * self.width + x]
        } else {
            None
        };
        self.paint(x, y, fill, "[]");
    }

    fn flush(&mut self) {
        let res = queue!(self.out, MoveTo(0, self.height as u16), Print("\n"));
        self.check(res);
        let res = self.out.flush();
        self.check(res);
    }
}
