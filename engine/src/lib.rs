//! Core engine for Braille exploration - transcription, navigation, touch validation.
//!
//! The pure pipeline is `tokenize` -> [`Navigator`] -> `resolve` -> [`Explorer`],
//! wrapped by [`Session`]. [`App`] adds the front-end state a terminal UI needs
//! without depending on any rendering crate.

use std::time::{Duration, Instant};

use tracing::{debug, info};

pub use braille_types::ui::{AnimPhase, DotPulse, UiOptions};
pub use braille_types::{
    CELL_COLS, CELL_ROWS, CellGeometry, Dot, DotAddress, DotPattern, EngineEvent, Point,
};

mod config;
mod explorer;
mod feed;
mod import;
pub mod lexicon;
mod navigator;
mod resolver;
mod session;
mod tokenizer;
mod touch;

pub use config::{
    AppConfig, BrailleConfig, ConfigError, HapticSettings, HapticsConfig, config_path, ui_options,
};
pub use explorer::{ExplorationState, Explorer};
pub use feed::{FEED_CAPACITY, FeedClosed, FeedMessage, TextFeed, TextFeedSender, TextOrigin, text_feed};
pub use import::{ImportError, MAX_IMPORT_BYTES, read_text_file, spawn_text_import};
pub use lexicon::ContractionWord;
pub use navigator::{Cell, Movement, Navigator};
pub use resolver::resolve;
pub use session::Session;
pub use tokenizer::{Token, TranscriptionSequence, normalize, tokenize};
pub use touch::TouchSurface;

/// Longest draft accepted in insert mode.
const MAX_DRAFT_CHARS: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing a sentence to transcribe.
    Insert,
}

/// Message shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

impl Status {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Status::Info(text) | Status::Error(text) => text,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error(_))
    }
}

pub struct App {
    session: Session,
    input_mode: InputMode,
    draft: String,
    status: Option<Status>,
    should_quit: bool,
    ui_options: UiOptions,
    haptics: HapticSettings,
    /// Active confirmation pulses, oldest first.
    pulses: Vec<DotPulse>,
    bell_pending: bool,
    last_frame: Instant,
    tick: usize,
    feed: TextFeed,
    feed_tx: TextFeedSender,
    touch_surface: Option<TouchSurface>,
}

impl App {
    #[must_use]
    pub fn new(config: Option<&BrailleConfig>) -> Self {
        let haptics = config
            .map(BrailleConfig::haptic_settings)
            .unwrap_or_default();
        Self::with_options(ui_options(config), haptics)
    }

    #[must_use]
    pub fn with_options(ui_options: UiOptions, haptics: HapticSettings) -> Self {
        let (feed_tx, feed) = text_feed();
        Self {
            session: Session::new(),
            input_mode: InputMode::Normal,
            draft: String::new(),
            status: None,
            should_quit: false,
            ui_options,
            haptics,
            pulses: Vec::new(),
            bell_pending: false,
            last_frame: Instant::now(),
            tick: 0,
            feed,
            feed_tx,
            touch_surface: None,
        }
    }

    /// Handle for background producers. Everything sent here is installed by
    /// [`App::process_feed`] on the owning thread.
    #[must_use]
    pub fn feed_sender(&self) -> TextFeedSender {
        self.feed_tx.clone()
    }

    pub fn load_text(&mut self, origin: &TextOrigin, text: &str) {
        self.session.load_text(text);
        let words = self.session.navigator().sequence().word_count();
        info!(origin = %origin, words, "loaded text");
        if words == 0 {
            self.set_status(format!("No words in {origin}"));
        } else {
            let cells = self.session.navigator().len();
            self.set_status(format!("{words} word(s), {cells} cell(s) from {origin}"));
        }
        self.absorb_events();
    }

    /// Install every completed text waiting in the feed, in arrival order.
    pub fn process_feed(&mut self) {
        while let Some(message) = self.feed.try_next() {
            match message {
                FeedMessage::Text { origin, text } => self.load_text(&origin, &text),
                FeedMessage::Failed { origin, reason } => {
                    debug!(origin = %origin, "feed reported failure");
                    self.set_error(format!("Import failed: {reason}"));
                }
            }
        }
    }

    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        let delta = self.frame_elapsed();
        for pulse in &mut self.pulses {
            pulse.advance(delta);
        }
        self.pulses.retain(|pulse| !pulse.is_finished());
    }

    fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    fn absorb_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                EngineEvent::CellChanged(_) => self.pulses.clear(),
                EngineEvent::DotConfirmed(dot) => {
                    if !self.ui_options.reduced_motion {
                        self.pulses.push(DotPulse::new(dot, self.haptics.pulse));
                    }
                    if self.haptics.bell {
                        self.bell_pending = true;
                    }
                }
            }
        }
    }

    pub fn previous(&mut self) {
        self.session.previous();
        self.absorb_events();
    }

    pub fn next(&mut self) {
        self.session.next();
        self.absorb_events();
    }

    pub fn set_touch_surface(&mut self, surface: TouchSurface) {
        self.touch_surface = Some(surface);
    }

    /// The grid is not on screen; pointer input is ignored until it is drawn again.
    pub fn clear_touch_surface(&mut self) {
        self.touch_surface = None;
    }

    #[must_use]
    pub fn touch_surface(&self) -> Option<TouchSurface> {
        self.touch_surface
    }

    /// Pointer pressed or dragged over terminal cell (`column`, `row`).
    pub fn touch(&mut self, column: u16, row: u16) {
        let Some(surface) = self.touch_surface else {
            return;
        };
        let point = surface.to_cell_point(column, row);
        self.session.on_move(point.x, point.y);
        self.absorb_events();
    }

    /// Pointer released: the gesture is over.
    pub fn release(&mut self) {
        self.session.on_gesture_end();
    }

    /// Touch one dot by number, as a complete gesture.
    pub fn tap_dot(&mut self, dot: Dot) {
        let point = CellGeometry::STANDARD.center_of(dot);
        self.session.on_move(point.x, point.y);
        self.session.on_gesture_end();
        self.absorb_events();
    }

    /// Whether a bell is owed since the last call.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn current_cell(&self) -> Cell {
        self.session.current()
    }

    /// Dots confirmed during the open gesture.
    #[must_use]
    pub fn confirmed(&self) -> DotPattern {
        self.session.exploration().visited()
    }

    #[must_use]
    pub fn pulses(&self) -> &[DotPulse] {
        &self.pulses
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn haptics(&self) -> HapticSettings {
        self.haptics
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(Status::text)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(Status::Info(message.into()));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(Status::Error(message.into()));
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn enter_insert_mode(&mut self) {
        self.input_mode = InputMode::Insert;
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn push_char(&mut self, c: char) {
        if self.draft.chars().count() < MAX_DRAFT_CHARS {
            self.draft.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    /// Transcribe the typed sentence and return to normal mode.
    ///
    /// A blank draft leaves the current text in place.
    pub fn submit_draft(&mut self) {
        let draft = std::mem::take(&mut self.draft);
        self.input_mode = InputMode::Normal;
        if draft.trim().is_empty() {
            self.set_status("Nothing to transcribe");
            return;
        }
        self.load_text(&TextOrigin::Typed, &draft);
    }
}
