//! Cursor movement and the events it produces.

use braille_engine::{Cell, DotPattern, EngineEvent, Session, Token};

use crate::common::session_with;

#[test]
fn previous_at_start_is_silent() {
    let mut session = session_with("hi");
    session.previous();
    session.previous();
    assert_eq!(session.navigator().cursor(), 0);
    assert!(session.drain_events().is_empty());
}

#[test]
fn walk_to_the_end_and_back() {
    // c, a, t, space
    let mut session = session_with("cat");
    for _ in 0..10 {
        session.next();
    }
    assert_eq!(session.navigator().cursor(), 3);
    assert_eq!(session.current().token, Token::SPACE);

    let events = session.drain_events();
    assert_eq!(
        events,
        vec![
            EngineEvent::CellChanged(DotPattern::from_dots(&[1])),
            EngineEvent::CellChanged(DotPattern::from_dots(&[2, 3, 4, 5])),
            EngineEvent::CellChanged(DotPattern::EMPTY),
        ]
    );

    for _ in 0..10 {
        session.previous();
    }
    assert_eq!(session.navigator().cursor(), 0);
    assert_eq!(session.drain_events().len(), 3);
}

#[test]
fn empty_text_shows_blank_placeholder() {
    let mut session = Session::new();
    session.load_text("");
    assert_eq!(session.current(), Cell::PLACEHOLDER);
    assert_eq!(session.next(), DotPattern::EMPTY);
    assert_eq!(session.previous(), DotPattern::EMPTY);
    assert_eq!(
        session.drain_events(),
        vec![EngineEvent::CellChanged(DotPattern::EMPTY)]
    );
}

#[test]
fn new_text_rewinds_and_announces() {
    let mut session = session_with("abc");
    session.next();
    session.next();
    session.drain_events();

    session.load_text("do");
    assert_eq!(session.navigator().cursor(), 0);
    assert_eq!(
        session.drain_events(),
        vec![EngineEvent::CellChanged(DotPattern::from_dots(&[1, 4, 5]))]
    );
    assert_eq!(session.current().token.label(), "do");
}

#[test]
fn previous_and_next_return_active_pattern() {
    let mut session = session_with("ab");
    assert_eq!(session.next(), DotPattern::from_dots(&[1, 2]));
    assert_eq!(session.previous(), DotPattern::from_dots(&[1]));
    assert_eq!(session.previous(), DotPattern::from_dots(&[1]));
}
