//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the view renders into a plain
//! character framebuffer, and a thin renderer flushes that buffer to the
//! terminal in a single write per frame.
//!
//! Goals:
//! - Keep the view pure (camera + viewport in, characters out) so it can be
//!   unit-tested without a terminal
//! - One blit per frame, no per-cell cursor movement, to minimize flicker

pub mod fb;
pub mod renderer;
pub mod scene_view;

pub use tui_cube_core as core;
pub use tui_cube_types as types;

pub use fb::FrameBuffer;
pub use renderer::TerminalRenderer;
pub use scene_view::{SceneView, Viewport};
