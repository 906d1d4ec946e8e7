//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::CameraAction`] and drains
//! the pending event queue once per tick. Movement is edge-triggered per
//! queued key event (terminal auto-repeat included), so effective movement
//! speed follows the host key-repeat rate. There is no held-key state.

pub mod drain;
pub mod map;

pub use tui_cube_types as types;

pub use drain::{drain_events, DrainedInput, MAX_ACTIONS_PER_TICK};
pub use map::{handle_key_event, should_quit};
