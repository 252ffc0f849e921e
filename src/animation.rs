/*
animation.rs

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

//! Replay a path on the renderer, one cell at a time.
//!
//! The animator is either idle or animating a path. Starting a new path cancels the animation in
//! progress: its queued step is revoked, so no stale cell is drawn afterwards. Cells already drawn
//! stay on screen until the next full redraw.

use log::debug;
use std::time::Duration;

use crate::draw::{CellColor, Renderer};
use crate::generator::path::Path;
use crate::main_loop::{MainLoop, SourceId};

/// Animator states.
#[derive(Debug, Default)]
pub enum AnimatorState {
    #[default]
    Idle,
    Animating {
        path: Path,

        /// Index of the next cell to draw.
        next: usize,

        /// Queued event for the next step.
        source: Option<SourceId>,
    },
}

/// [`PathAnimator`] object.
#[derive(Debug)]
pub struct PathAnimator {
    state: AnimatorState,

    /// Delay between two steps.
    step_delay: Duration,
}

impl PathAnimator {
    /// Create a [`PathAnimator`] object.
    pub fn new(step_delay: Duration) -> Self {
        Self {
            state: AnimatorState::Idle,
            step_delay,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, AnimatorState::Animating { .. })
    }

    /// Stop the animation in progress, if any.
    pub fn cancel<E>(&mut self, main_loop: &mut MainLoop<E>) {
        if let AnimatorState::Animating { source, next, .. } = &self.state {
            debug!("Animation cancelled at step {next}");
            if let Some(id) = source {
                main_loop.source_remove(*id);
            }
        }
        self.state = AnimatorState::Idle;
    }

    /// Start replaying the path. The first cell is drawn right away.
    ///
    /// `tick` is the event that the main loop must send back to [`PathAnimator::step`] for the
    /// following cells. Return whether the animation is still running.
    pub fn start<E: Clone>(
        &mut self,
        path: Path,
        renderer: &mut dyn Renderer,
        main_loop: &mut MainLoop<E>,
        tick: E,
    ) -> bool {
        self.cancel(main_loop);
        if path.is_empty() {
            return false;
        }
        debug!("Animating a path of {} cells", path.len());
        self.state = AnimatorState::Animating {
            path,
            next: 0,
            source: None,
        };
        self.step(renderer, main_loop, tick)
    }

    /// Draw the next cell and queue the following step.
    ///
    /// Return `false` once the last cell is drawn, at which point the animator is idle.
    pub fn step<E: Clone>(
        &mut self,
        renderer: &mut dyn Renderer,
        main_loop: &mut MainLoop<E>,
        tick: E,
    ) -> bool {
        let AnimatorState::Animating { path, next, source } = &mut self.state else {
            return false;
        };
        *source = None;

        if let Some(c) = path.get().get(*next) {
            renderer.draw_cell(c.x, c.y, CellColor::Path);
            renderer.draw_outline(c.x, c.y);
            renderer.flush();
            *next += 1;
        }

        if *next >= path.len() {
            debug!("Animation done");
            self.state = AnimatorState::Idle;
            return false;
        }
        *source = Some(main_loop.timeout_add(self.step_delay, tick));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::recording::{DrawCall, RecordingRenderer};
    use crate::generator::grid::Coordinate;

    const DELAY: Duration = Duration::from_millis(150);

    fn line(len: usize, y: usize) -> Path {
        Path::from_vec((0..len).map(|x| Coordinate::new(x, y)).collect())
    }

    /// Dispatch every queued tick, as the session does.
    fn run(animator: &mut PathAnimator, renderer: &mut RecordingRenderer, main_loop: &mut MainLoop<()>) {
        while main_loop.dispatch_next().is_some() {
            animator.step(renderer, main_loop, ());
        }
    }

    #[test]
    fn one_cell_per_interval() {
        let mut animator = PathAnimator::new(DELAY);
        let mut renderer = RecordingRenderer::default();
        let mut main_loop: MainLoop<()> = MainLoop::new();

        assert!(animator.start(line(4, 0), &mut renderer, &mut main_loop, ()));
        assert_eq!(renderer.cells(CellColor::Path), vec![(0, 0)]);
        assert_eq!(main_loop.next_deadline(), Some(DELAY));

        run(&mut animator, &mut renderer, &mut main_loop);
        assert_eq!(
            renderer.cells(CellColor::Path),
            vec![(0, 0), (1, 0), (2, 0), (3, 0)]
        );
        assert_eq!(renderer.count(&DrawCall::Outline(3, 0)), 1);
        assert_eq!(main_loop.now(), DELAY * 3);
        assert!(!animator.is_animating());
        assert_eq!(main_loop.pending(), 0);
    }

    #[test]
    fn single_cell_path_finishes_immediately() {
        let mut animator = PathAnimator::new(DELAY);
        let mut renderer = RecordingRenderer::default();
        let mut main_loop: MainLoop<()> = MainLoop::new();
        assert!(!animator.start(line(1, 0), &mut renderer, &mut main_loop, ()));
        assert_eq!(renderer.cells(CellColor::Path), vec![(0, 0)]);
        assert_eq!(main_loop.pending(), 0);
    }

    #[test]
    fn new_path_cancels_the_running_animation() {
        let mut animator = PathAnimator::new(DELAY);
        let mut renderer = RecordingRenderer::default();
        let mut main_loop: MainLoop<()> = MainLoop::new();

        animator.start(line(5, 0), &mut renderer, &mut main_loop, ());
        main_loop.dispatch_next();
        animator.step(&mut renderer, &mut main_loop, ());
        assert!(animator.is_animating());
        assert_eq!(renderer.cells(CellColor::Path).len(), 2);

        animator.start(line(3, 1), &mut renderer, &mut main_loop, ());
        assert_eq!(main_loop.pending(), 1);
        run(&mut animator, &mut renderer, &mut main_loop);

        // No stale step of the first path after the second one started
        assert_eq!(
            renderer.cells(CellColor::Path),
            vec![(0, 0), (1, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn cancel_stops_further_steps() {
        let mut animator = PathAnimator::new(DELAY);
        let mut renderer = RecordingRenderer::default();
        let mut main_loop: MainLoop<()> = MainLoop::new();
        animator.start(line(5, 0), &mut renderer, &mut main_loop, ());
        animator.cancel(&mut main_loop);
        assert_eq!(main_loop.pending(), 0);
        assert!(!animator.step(&mut renderer, &mut main_loop, ()));
        assert_eq!(renderer.cells(CellColor::Path), vec![(0, 0)]);
    }
}
