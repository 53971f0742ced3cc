//! Events the engine emits for rendering and haptic collaborators.

use serde::Serialize;

use crate::{Dot, DotPattern};

/// Output of the engine, drained by front ends in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum EngineEvent {
    /// The active cell was replaced (new text installed or cursor moved).
    CellChanged(DotPattern),
    /// A raised dot was touched for the first time in the current gesture.
    DotConfirmed(Dot),
}
