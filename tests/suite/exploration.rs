//! Pointer samples against the active cell.

use braille_engine::{EngineEvent, Session};

use crate::common::{confirmed_dots, dot, session_with, sweep};

#[test]
fn top_left_sample_confirms_dot_one() {
    let mut session = session_with("a");
    assert_eq!(session.on_move(50.0, 50.0), Some(dot(1)));
}

#[test]
fn lingering_on_a_dot_confirms_once() {
    let mut session = session_with("a");
    for offset in 0..20 {
        let jitter = f64::from(offset);
        session.on_move(40.0 + jitter, 60.0 - jitter);
    }
    session.on_gesture_end();
    assert_eq!(
        session.drain_events(),
        vec![EngineEvent::DotConfirmed(dot(1))]
    );
}

#[test]
fn sweep_confirms_exactly_the_raised_dots() {
    let cases = [
        ("the", vec![2, 3, 4, 6]),
        ("for", vec![1, 2, 3, 4, 5, 6]),
        ("x", vec![1, 3, 4, 6]),
        ("still", vec![3, 4]),
    ];
    for (text, expected) in cases {
        let mut session = session_with(text);
        assert_eq!(sweep(&mut session), expected, "{text}");
    }
}

#[test]
fn separator_cell_has_nothing_to_feel() {
    let mut session = session_with("a");
    session.next();
    session.drain_events();
    assert!(sweep(&mut session).is_empty());
    assert!(session.drain_events().is_empty());
}

#[test]
fn each_gesture_confirms_afresh() {
    let mut session = session_with("b");
    assert_eq!(sweep(&mut session), vec![1, 2]);
    assert_eq!(sweep(&mut session), vec![1, 2]);
    assert_eq!(confirmed_dots(&session.drain_events()), vec![1, 2, 1, 2]);
}

#[test]
fn samples_off_the_grid_do_nothing() {
    let mut session = session_with("for");
    let outside = [
        (-0.1, 50.0),
        (50.0, -0.1),
        (240.0, 50.0),
        (50.0, 360.0),
        (1e9, 1e9),
        (f64::INFINITY, 0.0),
    ];
    for (x, y) in outside {
        assert_eq!(session.on_move(x, y), None);
    }
    assert!(session.exploration().is_empty());
}

#[test]
fn moving_between_cells_resets_the_gesture() {
    let mut session = session_with("aa");
    assert_eq!(session.on_move(50.0, 50.0), Some(dot(1)));
    session.next();
    assert_eq!(session.on_move(50.0, 50.0), Some(dot(1)));
    let events = session.drain_events();
    assert_eq!(confirmed_dots(&events), vec![1, 1]);
}

#[test]
fn fresh_session_ignores_touches() {
    let mut session = Session::new();
    assert_eq!(session.on_move(50.0, 50.0), None);
}
