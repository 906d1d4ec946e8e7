//! TUI cube demo (workspace facade crate).
//!
//! This package keeps a stable `tui_cube::{core,engine,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_cube_core as core;
pub use tui_cube_engine as engine;
pub use tui_cube_input as input;
pub use tui_cube_term as term;
pub use tui_cube_types as types;
