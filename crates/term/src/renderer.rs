//! TerminalRenderer: flushes a framebuffer to the real terminal.
//!
//! Frames are flushed as diffs: cells identical to the previous frame
//! are skipped, changed cells are written as coalesced horizontal runs.
//! A size change forces a full redraw.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use tui_arcade_types::Rgb;

use crate::fb::FrameBuffer;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch the terminal into raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call after a failed run.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. on resize events).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame; the
    /// renderer diffs against the previous frame and swaps buffers so
    /// nothing is cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut prev = match self.last.take() {
            Some(prev) => prev,
            None => {
                // First frame (or invalidated): full redraw against a
                // deliberately mismatched buffer.
                FrameBuffer::new(0, 0)
            }
        };

        self.buf.clear();
        if prev.width() != fb.width() || prev.height() != fb.height() {
            self.encode_full(fb)?;
            prev.resize(fb.width(), fb.height());
        } else {
            self.encode_diff(&prev, fb)?;
        }
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn encode_full(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;

        let mut style: Option<(Rgb, Rgb)> = None;
        for y in 0..fb.height() {
            self.buf.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if style != Some((cell.fg, cell.bg)) {
                    self.buf.queue(SetForegroundColor(to_color(cell.fg)))?;
                    self.buf.queue(SetBackgroundColor(to_color(cell.bg)))?;
                    style = Some((cell.fg, cell.bg));
                }
                self.buf.queue(Print(cell.ch))?;
            }
        }

        self.buf.queue(ResetColor)?;
        Ok(())
    }

    fn encode_diff(&mut self, prev: &FrameBuffer, next: &FrameBuffer) -> Result<()> {
        let mut style: Option<(Rgb, Rgb)> = None;

        for (x, y, len) in changed_runs(prev, next) {
            self.buf.queue(cursor::MoveTo(x, y))?;
            for dx in 0..len {
                let cell = next.get(x + dx, y).unwrap_or_default();
                if style != Some((cell.fg, cell.bg)) {
                    self.buf.queue(SetForegroundColor(to_color(cell.fg)))?;
                    self.buf.queue(SetBackgroundColor(to_color(cell.bg)))?;
                    style = Some((cell.fg, cell.bg));
                }
                self.buf.queue(Print(cell.ch))?;
            }
        }

        self.buf.queue(ResetColor)?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Coalesced runs of cells that differ between two equal-sized buffers.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            runs.push((start, y, x - start));
        }
    }

    runs
}
