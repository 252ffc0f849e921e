/*
session.rs

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

//! Manage a maze session: generate, draw, search, and animate.
//!
//! The [`Session`] object owns the current maze, the scheduler, and the animator. It moves
//! through the following states:
//!
//! ```text
//! Idle -> Generating -> Searching -> Animating -> Idle
//! ```
//!
//! A trigger is ignored while generating or searching. A trigger received while animating stops
//! the animation and starts a new run. Any failure ends in the idle state with a single alert.

use async_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use crate::animation::PathAnimator;
use crate::config::{RESOLVER_INFERENCE_LIMIT, Settings};
use crate::dimensions::{self, DimensionProvider, StaticDimensions};
use crate::draw::{self, Renderer};
use crate::error::MazeError;
use crate::generator::grid::GridModel;
use crate::generator::maze::MazeGenerator;
use crate::generator::path::Path;
use crate::generator::walls::RandomWalls;
use crate::main_loop::MainLoop;
use crate::solver::engine::PathSearchEngine;

/// Session states.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Generating,
    Searching,
    Animating,
}

/// Events queued on the main loop. The epoch identifies the run that queued the event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Event {
    Search { epoch: u64 },
    Answer { epoch: u64 },
    AnimationStep { epoch: u64 },
}

/// Answer of a search, tagged with the epoch of its run.
type SearchOutcome = (u64, Result<Path, MazeError>);

/// [`Session`] object.
pub struct Session<R: Renderer> {
    state: SessionState,

    /// Incremented by every new run and every dimension change. Events and answers from an older
    /// epoch are dropped.
    epoch: u64,

    dimensions: Box<dyn DimensionProvider>,
    generator: MazeGenerator,
    engine: PathSearchEngine,
    animator: PathAnimator,
    main_loop: MainLoop<Event>,
    renderer: R,

    /// Maze on display.
    grid: Option<GridModel>,

    /// Last path found for the maze on display.
    path: Option<Path>,

    /// Search answers. The channel holds one answer at most.
    answer_sender: Sender<SearchOutcome>,
    answer_receiver: Receiver<SearchOutcome>,

    /// Alert messages not yet shown to the user.
    alerts: Vec<String>,

    last_error: Option<MazeError>,
}

impl<R: Renderer> Session<R> {
    /// Create a [`Session`] object.
    pub fn new(
        dimensions: Box<dyn DimensionProvider>,
        generator: MazeGenerator,
        engine: PathSearchEngine,
        step_delay: Duration,
        renderer: R,
    ) -> Self {
        let (answer_sender, answer_receiver) = async_channel::bounded::<SearchOutcome>(1);
        Self {
            state: SessionState::Idle,
            epoch: 0,
            dimensions,
            generator,
            engine,
            animator: PathAnimator::new(step_delay),
            main_loop: MainLoop::new(),
            renderer,
            grid: None,
            path: None,
            answer_sender,
            answer_receiver,
            alerts: Vec::new(),
            last_error: None,
        }
    }

    /// Create a [`Session`] object from the settings.
    pub fn from_settings(settings: &Settings, renderer: R) -> Self {
        let sampler: RandomWalls = match settings.seed {
            Some(seed) => RandomWalls::from_seed(seed, settings.wall_probability),
            None => RandomWalls::from_entropy(settings.wall_probability),
        };
        let step_delay: Duration = if settings.animate {
            settings.step_delay()
        } else {
            Duration::ZERO
        };
        Self::new(
            Box::new(StaticDimensions::new(settings.width, settings.height)),
            MazeGenerator::new(Box::new(sampler), settings.max_attempts),
            PathSearchEngine::with_inference_limit(RESOLVER_INFERENCE_LIMIT),
            step_delay,
            renderer,
        )
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a run is in progress and triggers are ignored.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.state,
            SessionState::Generating | SessionState::Searching
        )
    }

    pub fn grid(&self) -> Option<&GridModel> {
        self.grid.as_ref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn last_error(&self) -> Option<&MazeError> {
        self.last_error.as_ref()
    }

    /// Return and forget the pending alert messages.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    fn set_state(&mut self, state: SessionState) {
        if self.state != state {
            debug!("State {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }

    /// Drop everything that belongs to the current run: animation, queued events, and answers.
    fn invalidate(&mut self) {
        self.animator.cancel(&mut self.main_loop);
        self.epoch += 1;
        while self.answer_receiver.try_recv().is_ok() {}
    }

    /// Report the error to the user and go back to the idle state.
    fn fail(&mut self, e: MazeError) {
        warn!("{e}");
        self.alerts.push(e.alert_message());
        self.last_error = Some(e);
        self.animator.cancel(&mut self.main_loop);
        self.set_state(SessionState::Idle);
    }

    /// Generate a maze and draw it, without searching for a path.
    pub fn show_initial_maze(&mut self) {
        if self.is_busy() {
            return;
        }
        self.last_error = None;
        self.invalidate();
        self.set_state(SessionState::Generating);
        let (width, height) = dimensions::refresh(self.dimensions.as_mut());
        if self.generate(width, height) {
            self.set_state(SessionState::Idle);
        }
    }

    /// Change the grid dimensions. The run in progress, if any, is abandoned.
    ///
    /// Return the clamped dimensions.
    pub fn set_dimensions(&mut self, width: i64, height: i64) -> (usize, usize) {
        let (w, h) = dimensions::clamp_dimensions(width, height);
        self.dimensions.write_back(w, h);
        info!("Dimensions changed to {w}x{h}");
        if self.animator.is_animating() {
            debug!("Stopping the animation");
        }
        self.invalidate();
        self.set_state(SessionState::Idle);
        (w, h)
    }

    /// Generate a new maze, draw it, and queue a search for its path.
    ///
    /// The call is ignored while a maze is being generated or searched.
    pub fn trigger(&mut self) {
        if self.is_busy() {
            debug!("Busy ({:?}): trigger ignored", self.state);
            return;
        }
        self.last_error = None;
        self.invalidate();
        self.set_state(SessionState::Generating);

        let (width, height) = dimensions::refresh(self.dimensions.as_mut());
        if !self.generate(width, height) {
            return;
        }

        self.set_state(SessionState::Searching);
        self.main_loop
            .timeout_add(Duration::ZERO, Event::Search { epoch: self.epoch });
    }

    /// Generate and draw a maze. On failure, the previous maze stays on display.
    fn generate(&mut self, width: usize, height: usize) -> bool {
        match self.generator.generate(width, height) {
            Ok(grid) => {
                draw::draw_maze(&mut self.renderer, &grid);
                self.grid = Some(grid);
                self.path = None;
                true
            }
            Err(e) => {
                self.fail(e);
                false
            }
        }
    }

    /// Process an event from the main loop.
    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::Search { epoch } if epoch == self.epoch => self.search(),
            Event::Answer { epoch } if epoch == self.epoch => self.receive_answers(),
            Event::AnimationStep { epoch } if epoch == self.epoch => {
                let tick = Event::AnimationStep { epoch };
                if !self
                    .animator
                    .step(&mut self.renderer, &mut self.main_loop, tick)
                {
                    info!("Path displayed");
                    self.set_state(SessionState::Idle);
                }
            }
            _ => debug!("Dropping stale event {event:?}"),
        }
    }

    /// Run the search on the maze on display and post the answer. The answer is handled by the
    /// next [`Event::Answer`], so a run abandoned in between never shows it.
    fn search(&mut self) {
        let Some(grid) = self.grid.clone() else {
            self.fail(MazeError::ExecutionFault("no maze to search".to_string()));
            return;
        };

        let engine: &mut PathSearchEngine = &mut self.engine;
        let result: Result<Path, MazeError> =
            match panic::catch_unwind(AssertUnwindSafe(|| engine.search(&grid))) {
                Ok(r) => r.map_err(MazeError::from),
                Err(payload) => {
                    let msg: String = payload
                        .downcast_ref::<&str>()
                        .map(|s| s.to_string())
                        .or_else(|| payload.downcast_ref::<String>().cloned())
                        .unwrap_or_else(|| "unknown panic".to_string());
                    error!("Search panicked: {msg}");
                    Err(MazeError::ExecutionFault(msg))
                }
            };

        if let Err(e) = self.answer_sender.try_send((self.epoch, result)) {
            error!("Cannot post the search answer: {e}");
            self.fail(MazeError::ExecutionFault(e.to_string()));
            return;
        }
        self.main_loop
            .timeout_add(Duration::ZERO, Event::Answer { epoch: self.epoch });
    }

    /// Handle the posted search answers.
    fn receive_answers(&mut self) {
        while let Ok((epoch, result)) = self.answer_receiver.try_recv() {
            if epoch != self.epoch {
                debug!("Dropping the answer of epoch {epoch}");
                continue;
            }
            match result {
                Ok(path) => {
                    self.path = Some(path.clone());
                    self.set_state(SessionState::Animating);
                    let tick = Event::AnimationStep { epoch };
                    if !self
                        .animator
                        .start(path, &mut self.renderer, &mut self.main_loop, tick)
                    {
                        self.set_state(SessionState::Idle);
                    }
                }
                Err(e) => self.fail(e),
            }
        }
    }

    /// Dispatch the events due within the given duration, without waiting.
    #[cfg(test)]
    pub fn advance(&mut self, by: Duration) {
        let until: Duration = self.main_loop.now() + by;
        while let Some(event) = self.main_loop.dispatch_due(until) {
            self.dispatch(event);
        }
        self.main_loop.advance_to(until);
    }

    /// Dispatch events until none is left, calling `sleep` to wait for each deadline.
    pub fn run_until_idle(&mut self, mut sleep: impl FnMut(Duration)) {
        debug!("{} event(s) pending", self.main_loop.pending());
        while let Some(deadline) = self.main_loop.next_deadline() {
            let wait: Duration = deadline.saturating_sub(self.main_loop.now());
            if !wait.is_zero() {
                sleep(wait);
            }
            if let Some(event) = self.main_loop.dispatch_next() {
                self.dispatch(event);
            }
        }
    }
}
