//! Event loop tying application state to the source worker.
//!
//! The runtime stands in for the host event loop: it feeds an event to the
//! handler, executes the resulting actions on the [`SourceWorker`] and queues
//! each response as a follow-up event until the queue is drained.

use std::collections::VecDeque;

use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::Result;
use crate::source::SourceWorker;
use crate::ui;

/// Application state plus the worker executing its actions.
#[derive(Debug)]
pub struct Runtime {
    state: AppState,
    worker: SourceWorker,
}

impl Runtime {
    #[must_use]
    pub const fn new(state: AppState, worker: SourceWorker) -> Self {
        Self { state, worker }
    }

    /// Handles `event` and every response it transitively causes.
    ///
    /// Returns `true` if any step asked for a re-render.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        let mut queue = VecDeque::from([event]);
        let mut render = false;

        while let Some(event) = queue.pop_front() {
            let (needs_render, actions) = handle_event(&mut self.state, &event)?;
            render |= needs_render;

            for action in actions {
                match action {
                    Action::PostToSource(request) => {
                        let response = self.worker.handle(request);
                        queue.push_back(Event::SourceResponse(response));
                    }
                }
            }
        }

        Ok(render)
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Renders the current state as plain text `cols` characters wide.
    #[must_use]
    pub fn render(&self, cols: usize) -> String {
        ui::render(&self.state, cols)
    }
}
