//! Event stream as seen by an external collaborator.

use serde_json::json;

use braille_engine::EngineEvent;

use crate::common::session_with;

#[test]
fn event_stream_serializes_in_order() {
    let mut session = session_with("ab");
    session.on_move(50.0, 50.0);
    session.next();
    session.on_move(170.0, 50.0);
    // dot 3 is flat on "b"
    session.on_move(50.0, 170.0);

    let events: Vec<EngineEvent> = session.drain_events();
    assert_eq!(
        serde_json::to_value(&events).unwrap(),
        json!([
            {"type": "dot_confirmed", "value": 1},
            {"type": "cell_changed", "value": 3},
            {"type": "dot_confirmed", "value": 2},
        ])
    );
}

#[test]
fn draining_empties_the_outbox() {
    let mut session = session_with("a");
    session.on_move(50.0, 50.0);
    assert!(session.has_pending_events());
    assert_eq!(session.drain_events().len(), 1);
    assert!(!session.has_pending_events());
    assert!(session.drain_events().is_empty());
}
