//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use braille_engine::{
    App, CellGeometry, Dot, EngineEvent, HapticSettings, Point, Session, UiOptions,
};

pub fn dot(n: u8) -> Dot {
    Dot::new(n).expect("dot number in 1..=6")
}

/// Center of dot `n` in cell coordinates.
pub fn center(n: u8) -> Point {
    CellGeometry::STANDARD.center_of(dot(n))
}

/// Session with `text` installed and the install event already drained.
pub fn session_with(text: &str) -> Session {
    let mut session = Session::new();
    session.load_text(text);
    session.drain_events();
    session
}

/// Touch every dot center once, in numeric order, as one gesture.
pub fn sweep(session: &mut Session) -> Vec<u8> {
    let confirmed = (1..=6)
        .filter_map(|n| {
            let p = center(n);
            session.on_move(p.x, p.y)
        })
        .map(Dot::get)
        .collect();
    session.on_gesture_end();
    confirmed
}

pub fn confirmed_dots(events: &[EngineEvent]) -> Vec<u8> {
    events
        .iter()
        .filter_map(|event| match event {
            EngineEvent::DotConfirmed(dot) => Some(dot.get()),
            EngineEvent::CellChanged(_) => None,
        })
        .collect()
}

pub fn test_app() -> App {
    App::with_options(UiOptions::default(), HapticSettings::default())
}

pub fn write_text(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}
