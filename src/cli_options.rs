/*
cli_options.rs

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

//! Process command-line options and drive the session.
//!
//! # Examples
//!
//! Animate the path through a random 20x12 maze in the terminal:
//!
//! ```text
//! $ mazelog -W 20 -H 12
//! ```
//!
//! Print a reproducible maze and its path as text, without animation:
//!
//! ```text
//! $ mazelog -W 6 -H 4 --seed 7 --no-animation
//! ```
//!
//! In text mode, walls are `#`, open cells are `.`, and the path is `o`.
//!
//! Dimensions are clamped to 30x20. With `--json`, the grid, the walls, and the path are printed
//! as a JSON document instead.

use clap::Parser;
use log::{LevelFilter, debug, info};
use serde::Serialize;
use std::process::ExitCode;
use std::thread;

use crate::config::{COPYRIGHT_NOTICE, DEFAULT_HEIGHT, DEFAULT_WIDTH, STEP_DELAY_MS, Settings};
use crate::draw::Renderer;
use crate::draw::ascii::AsciiCanvas;
use crate::draw::terminal::TerminalRenderer;
use crate::generator::grid::Coordinate;
use crate::session::Session;

/// Generate random mazes and show the path found by a rule-based search.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Width of the maze (1 to 30)
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH as i64, allow_negative_numbers = true)]
    width: i64,

    /// Height of the maze (1 to 20)
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT as i64, allow_negative_numbers = true)]
    height: i64,

    /// Seed for the random walls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the result as text instead of animating it
    #[arg(short, long, default_value_t = false)]
    no_animation: bool,

    /// Delay between two animation steps, in milliseconds
    #[arg(short = 'D', long, default_value_t = STEP_DELAY_MS)]
    delay: u64,

    /// Number of mazes to generate and solve in a row
    #[arg(short, long, default_value_t = 1)]
    runs: usize,

    /// Only generate and display a maze, without searching for the path
    #[arg(short, long, default_value_t = false)]
    maze_only: bool,

    /// Print the maze and the path as JSON
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

impl Args {
    /// Build the run-time settings.
    fn settings(&self) -> Settings {
        Settings {
            width: self.width,
            height: self.height,
            seed: self.seed,
            step_delay_ms: self.delay,
            animate: !self.no_animation && !self.json,
            ..Settings::default()
        }
    }
}

/// JSON document printed with `--json`.
#[derive(Serialize)]
struct Report<'a> {
    width: usize,
    height: usize,
    walls: Vec<&'a Coordinate>,
    path: Option<&'a [Coordinate]>,
    error: Option<String>,
}

fn init_logger(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

/// Parse the command-line options and run the session.
pub fn run() -> ExitCode {
    let args: Args = Args::parse();
    init_logger(args.debug);

    let settings: Settings = args.settings();
    debug!("Settings: {settings:?}");

    if settings.animate {
        let mut session = Session::from_settings(&settings, TerminalRenderer::stdout());
        return drive(&mut session, &args);
    }

    let mut session = Session::from_settings(&settings, AsciiCanvas::new());
    let status: ExitCode = drive(&mut session, &args);
    if args.json {
        match report(&session) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Cannot produce the JSON report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", session.renderer().render());
    }
    status
}

/// Run the requested number of mazes and print the alerts.
fn drive<R: Renderer>(session: &mut Session<R>, args: &Args) -> ExitCode {
    let (width, height) = session.set_dimensions(args.width, args.height);
    info!("Maze of {width}x{height} cells");
    if args.maze_only {
        session.show_initial_maze();
    } else {
        for i in 0..args.runs {
            info!("Run {} of {}", i + 1, args.runs);
            session.trigger();
            session.run_until_idle(thread::sleep);
        }
    }

    debug!("Final state: {:?}", session.state());
    for alert in session.take_alerts() {
        eprintln!("{alert}");
    }
    if session.last_error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Return the JSON report for the maze on display.
fn report<R: Renderer>(session: &Session<R>) -> Result<String, serde_json::Error> {
    let (width, height, walls): (usize, usize, Vec<&Coordinate>) = match session.grid() {
        Some(g) => (g.width(), g.height(), g.walls().collect()),
        None => (0, 0, Vec::new()),
    };
    serde_json::to_string_pretty(&Report {
        width,
        height,
        walls,
        path: session.path().map(|p| p.get().as_slice()),
        error: session.last_error().map(|e| e.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["mazelog"]).unwrap();
        let settings = args.settings();
        assert_eq!(settings.width, 10);
        assert_eq!(settings.height, 10);
        assert_eq!(settings.step_delay_ms, 150);
        assert!(settings.animate);
        assert_eq!(args.runs, 1);
    }

    #[test]
    fn json_disables_the_animation() {
        let args =
            Args::try_parse_from(["mazelog", "-W", "-3", "-H", "99", "--json", "-s", "4"]).unwrap();
        let settings = args.settings();
        assert_eq!((settings.width, settings.height), (-3, 99));
        assert_eq!(settings.seed, Some(4));
        assert!(!settings.animate);
    }

    #[test]
    fn json_report_lists_the_path() {
        let settings = Settings {
            width: 2,
            height: 1,
            seed: Some(1),
            animate: false,
            ..Settings::default()
        };
        let mut session = Session::from_settings(&settings, AsciiCanvas::new());
        session.trigger();
        session.run_until_idle(|_| {});
        let value: serde_json::Value = serde_json::from_str(&report(&session).unwrap()).unwrap();
        assert_eq!(value["width"], 2);
        assert_eq!(value["walls"], serde_json::json!([]));
        assert_eq!(
            value["path"],
            serde_json::json!([{"x": 0, "y": 0}, {"x": 1, "y": 0}])
        );
        assert!(value["error"].is_null());
        assert_eq!(session.renderer().render(), "oo");
    }
}
