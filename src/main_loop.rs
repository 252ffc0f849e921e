/*
main_loop.rs

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

//! Single-threaded scheduler for delayed events.
//!
//! Events are queued with a delay and come back out in deadline order. A queued event can be
//! revoked with the [`SourceId`] returned when it was added.
//!
//! The loop keeps its own clock, which only moves forward when an event is dispatched. Whoever
//! drives the loop decides whether time is real (sleep until the next deadline) or simulated.

use std::collections::BTreeMap;
use std::time::Duration;

/// Identifier of a queued event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SourceId(u64);

/// [`MainLoop`] object.
#[derive(Debug)]
pub struct MainLoop<E> {
    /// Current time of the loop, from its creation.
    now: Duration,

    next_id: u64,

    /// Queued events, keyed by deadline then by insertion order.
    queue: BTreeMap<(Duration, u64), E>,
}

impl<E> Default for MainLoop<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> MainLoop<E> {
    /// Create a [`MainLoop`] object.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue an event to be dispatched after the given delay.
    pub fn timeout_add(&mut self, delay: Duration, event: E) -> SourceId {
        let id: u64 = self.next_id;
        self.next_id += 1;
        self.queue.insert((self.now + delay, id), event);
        SourceId(id)
    }

    /// Revoke a queued event. Return `false` if the event is not queued anymore.
    pub fn source_remove(&mut self, source: SourceId) -> bool {
        let key: Option<(Duration, u64)> = self.queue.keys().find(|(_, id)| *id == source.0).copied();
        match key {
            Some(k) => self.queue.remove(&k).is_some(),
            None => false,
        }
    }

    /// Number of queued events.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Deadline of the next event.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Remove and return the next event, moving the clock to its deadline.
    pub fn dispatch_next(&mut self) -> Option<E> {
        let ((deadline, _), event) = self.queue.pop_first()?;
        self.now = self.now.max(deadline);
        Some(event)
    }

    /// Remove and return the next event if it is due at or before `until`.
    #[cfg(test)]
    pub fn dispatch_due(&mut self, until: Duration) -> Option<E> {
        match self.next_deadline() {
            Some(deadline) if deadline <= until => self.dispatch_next(),
            _ => None,
        }
    }

    /// Move the clock forward without dispatching anything.
    #[cfg(test)]
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
