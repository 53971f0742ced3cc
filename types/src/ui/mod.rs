//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod options;
mod pulse;

pub use animation::AnimPhase;
pub use options::UiOptions;
pub use pulse::DotPulse;
