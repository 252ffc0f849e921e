/*
dimensions.rs

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

//! Read the grid dimensions from an external provider and keep both sides in sync.

use log::{debug, info};

use crate::config::{MAX_HEIGHT, MAX_WIDTH, MIN_DIMENSION};

/// Source of the requested grid dimensions, such as input fields or command-line options.
pub trait DimensionProvider {
    /// Return the requested width and height. The values might be out of range.
    fn read(&self) -> (i64, i64);

    /// Store the clamped dimensions back so that the provider shows what is in use.
    fn write_back(&mut self, width: usize, height: usize);
}

/// Clamp the requested dimensions to `[1, 30]` x `[1, 20]`.
pub fn clamp_dimensions(width: i64, height: i64) -> (usize, usize) {
    let w: usize = width.clamp(MIN_DIMENSION as i64, MAX_WIDTH as i64) as usize;
    let h: usize = height.clamp(MIN_DIMENSION as i64, MAX_HEIGHT as i64) as usize;
    (w, h)
}

/// Read, clamp, and echo back the dimensions of the given provider.
pub fn refresh(provider: &mut dyn DimensionProvider) -> (usize, usize) {
    let (width, height) = provider.read();
    let (w, h) = clamp_dimensions(width, height);
    if (w as i64, h as i64) != (width, height) {
        info!("Requested dimensions {width}x{height} clamped to {w}x{h}");
    } else {
        debug!("Dimensions {w}x{h}");
    }
    provider.write_back(w, h);
    (w, h)
}

/// Dimension provider that holds plain values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticDimensions {
    pub width: i64,
    pub height: i64,
}

impl StaticDimensions {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

impl DimensionProvider for StaticDimensions {
    fn read(&self) -> (i64, i64) {
        (self.width, self.height)
    }

    fn write_back(&mut self, width: usize, height: usize) {
        self.width = width as i64;
        self.height = height as i64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_in_range_are_kept() {
        assert_eq!(clamp_dimensions(3, 2), (3, 2));
        assert_eq!(clamp_dimensions(30, 20), (30, 20));
        assert_eq!(clamp_dimensions(1, 1), (1, 1));
    }

    #[test]
    fn values_out_of_range_are_clamped() {
        assert_eq!(clamp_dimensions(45, 99), (30, 20));
        assert_eq!(clamp_dimensions(0, -4), (1, 1));
    }

    #[test]
    fn refresh_writes_clamped_values_back() {
        let mut provider = StaticDimensions::new(100, 0);
        assert_eq!(refresh(&mut provider), (30, 1));
        assert_eq!(provider.read(), (30, 1));
    }
}
