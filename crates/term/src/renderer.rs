//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The demo draws in the alternate screen, so the startup banner stays on the
//! main screen and reappears (with the farewell after it) once the session
//! ends. Each frame is one cursor move plus one block print, flushed together.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::fb::FrameBuffer;

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Query the current terminal size in (columns, rows).
    pub fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or((80, 24))
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Blit a framebuffer: reposition to the top-left, write the whole block
    /// in one operation, flush.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let block = fb.to_block();
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.queue(Print(encode_block(&block)))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw mode does not translate `\n`, so rows are joined with `\r\n` on the
/// wire. The block itself carries no trailing newline.
fn encode_block(block: &str) -> String {
    block.replace('\n', "\r\n")
}
