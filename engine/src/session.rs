//! The engine boundary: navigation plus exploration, with an event outbox.
//!
//! A `Session` is owned by exactly one caller. Front ends feed it text,
//! navigation commands and pointer samples, then drain [`EngineEvent`]s to
//! drive rendering and feedback.

use braille_types::{Dot, DotPattern, EngineEvent, Point};
use tracing::debug;

use crate::explorer::{ExplorationState, Explorer};
use crate::navigator::{Cell, Movement, Navigator};
use crate::tokenizer::{TranscriptionSequence, tokenize};

#[derive(Debug, Default)]
pub struct Session {
    navigator: Navigator,
    explorer: Explorer,
    events: Vec<EngineEvent>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize completed text and install it.
    pub fn load_text(&mut self, text: &str) {
        self.install(tokenize(text));
    }

    /// Replace the sequence, rewind the cursor and drop any open gesture.
    ///
    /// Always announces the new active cell, even if its pattern is unchanged.
    pub fn install(&mut self, sequence: TranscriptionSequence) {
        let cells = sequence.len();
        let pattern = self.navigator.install(sequence);
        self.explorer.on_gesture_end();
        debug!(cells, pattern = %pattern, "installed transcription");
        self.events.push(EngineEvent::CellChanged(pattern));
    }

    pub fn previous(&mut self) -> DotPattern {
        let movement = self.navigator.previous();
        self.after_navigation(movement)
    }

    pub fn next(&mut self) -> DotPattern {
        let movement = self.navigator.next();
        self.after_navigation(movement)
    }

    fn after_navigation(&mut self, movement: Movement) -> DotPattern {
        self.explorer.on_gesture_end();
        if movement.moved() {
            debug!(cursor = self.navigator.cursor(), pattern = %movement.pattern(), "cursor moved");
            self.events.push(EngineEvent::CellChanged(movement.pattern()));
        }
        movement.pattern()
    }

    #[must_use]
    pub fn current(&self) -> Cell {
        self.navigator.current()
    }

    /// Feed one pointer sample in cell coordinates.
    pub fn on_move(&mut self, x: f64, y: f64) -> Option<Dot> {
        let pattern = self.navigator.current().pattern;
        let dot = self.explorer.on_move(Point::new(x, y), pattern)?;
        debug!(dot = dot.get(), "dot confirmed");
        self.events.push(EngineEvent::DotConfirmed(dot));
        Some(dot)
    }

    pub fn on_gesture_end(&mut self) {
        self.explorer.on_gesture_end();
    }

    /// Take all pending events in emission order.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn exploration(&self) -> &ExplorationState {
        self.explorer.state()
    }
}
