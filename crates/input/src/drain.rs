//! Per-tick, non-blocking drain of the terminal event queue.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::CameraAction;

/// Cap on actions collected in a single tick. Events past the cap are read
/// (so the queue still empties) but their actions are dropped.
pub const MAX_ACTIONS_PER_TICK: usize = 64;

/// Everything gathered from one drain of the event queue.
#[derive(Debug, Default)]
pub struct DrainedInput {
    pub actions: ArrayVec<CameraAction, MAX_ACTIONS_PER_TICK>,
    pub quit: bool,
}

/// Drain all queued terminal events without blocking.
///
/// Press and Repeat key events each count once; Release events and non-key
/// events (resize, focus) are ignored. Resize needs no handling because the
/// renderer re-queries the terminal size every frame.
pub fn drain_events() -> io::Result<DrainedInput> {
    let mut drained = DrainedInput::default();

    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if should_quit(key) {
                drained.quit = true;
                continue;
            }
            if let Some(action) = handle_key_event(key) {
                let _ = drained.actions.try_push(action);
            }
        }
    }

    Ok(drained)
}
