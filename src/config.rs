/*
config.rs

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

//! Build-time constants and run-time settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const COPYRIGHT_NOTICE: &str = "Copyright 2026 The Mazelog contributors
License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl-3.0.html>";

/// Smallest accepted width or height.
pub const MIN_DIMENSION: usize = 1;

/// Largest accepted grid width.
pub const MAX_WIDTH: usize = 30;

/// Largest accepted grid height.
pub const MAX_HEIGHT: usize = 20;

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;

/// Probability for an interior cell to become a wall.
pub const WALL_PROBABILITY: f64 = 0.4;

/// Number of random wall sets to try before giving up.
pub const MAX_ATTEMPTS: usize = 100;

/// Delay between two animation steps, in milliseconds.
pub const STEP_DELAY_MS: u64 = 150;

/// Number of resolution steps after which the resolver gives up.
pub const RESOLVER_INFERENCE_LIMIT: usize = 5_000_000;

/// Run-time settings, built from the command-line options.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    /// Requested grid width (clamped before use).
    pub width: i64,

    /// Requested grid height (clamped before use).
    pub height: i64,

    /// Seed for the wall sampler. A random seed is used when not set.
    pub seed: Option<u64>,

    pub wall_probability: f64,
    pub max_attempts: usize,
    pub step_delay_ms: u64,

    /// Whether the path is replayed cell by cell.
    pub animate: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH as i64,
            height: DEFAULT_HEIGHT as i64,
            seed: None,
            wall_probability: WALL_PROBABILITY,
            max_attempts: MAX_ATTEMPTS,
            step_delay_ms: STEP_DELAY_MS,
            animate: true,
        }
    }
}

impl Settings {
    /// Return the delay between two animation steps.
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_use_constants() {
        let settings = Settings::default();
        assert_eq!(settings.wall_probability, WALL_PROBABILITY);
        assert_eq!(settings.max_attempts, MAX_ATTEMPTS);
        assert_eq!(settings.step_delay(), Duration::from_millis(150));
        assert!(settings.animate);
        assert!(settings.seed.is_none());
    }

    #[test]
    fn settings_serialize_to_json() {
        let settings = Settings {
            seed: Some(7),
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
