/*
walls.rs

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

//! Sample random wall sets.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

use super::grid::{Coordinate, GridModel};
use crate::error::GridError;

/// Produce a fresh wall set for a grid of the given size.
pub trait WallSampler {
    fn sample(&mut self, width: usize, height: usize) -> Result<GridModel, GridError>;
}

/// Sampler that turns every cell but the two endpoints into a wall with a fixed probability.
///
/// Each cell gets its own independent uniform draw in `[0, 1)`.
pub struct RandomWalls {
    rng: StdRng,
    probability: f64,
}

impl RandomWalls {
    /// Create a [`RandomWalls`] object that always produces the same sequence for the same seed.
    pub fn from_seed(seed: u64, probability: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            probability,
        }
    }

    /// Create a [`RandomWalls`] object seeded from the operating system.
    pub fn from_entropy(probability: f64) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            probability,
        }
    }
}

impl WallSampler for RandomWalls {
    fn sample(&mut self, width: usize, height: usize) -> Result<GridModel, GridError> {
        let empty: GridModel = GridModel::new(width, height, [])?;
        let walls: BTreeSet<Coordinate> = empty
            .interior_cells()
            .filter(|_| self.rng.random::<f64>() < self.probability)
            .collect();
        GridModel::new(width, height, walls)
    }
}
