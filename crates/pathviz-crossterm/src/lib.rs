//! Crossterm terminal front end for pathviz.
//!
//! [`Terminal`] owns the raw-mode terminal session: it reads input through
//! [`input::translate`] and presents [`Canvas`] frames, writing only the
//! glyphs that changed since the previous one.

pub mod canvas;
pub mod input;
pub mod palette;
pub mod style;

pub use canvas::{CELL_COLUMNS, Canvas, FrameCell, Glyph, cell_at, diff};
pub use input::{Input, Key, MouseAction, translate};
pub use style::{Color, Style};

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor, event, execute, queue,
    style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

/// A raw-mode, alternate-screen terminal session.
pub struct Terminal {
    active: bool,
    last: Option<Canvas>,
}

impl Terminal {
    /// Create a new driver. Nothing touches the terminal until
    /// [`Terminal::init`].
    pub fn new() -> Self {
        Self {
            active: false,
            last: None,
        }
    }

    /// Enter raw mode and the alternate screen, capturing the mouse.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        log::debug!("terminal initialised");
        Ok(())
    }

    /// Wait up to `timeout` for input, then drain everything already
    /// queued. A resize invalidates the last presented frame.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Vec<Input>> {
        let mut inputs = Vec::new();
        if !event::poll(timeout)? {
            return Ok(inputs);
        }
        while event::poll(Duration::ZERO)? {
            if let Some(input) = input::translate(event::read()?) {
                if let Input::Resize { .. } = input {
                    self.invalidate();
                }
                inputs.push(input);
            }
        }
        Ok(inputs)
    }

    /// Draw `canvas`, writing only glyphs that differ from the previously
    /// presented frame.
    pub fn present(&mut self, canvas: &Canvas) -> io::Result<()> {
        let cells = canvas::diff(self.last.as_ref(), canvas);
        if cells.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        if self.last.is_none() {
            queue!(stdout, terminal::Clear(ClearType::All))?;
        }
        for fc in &cells {
            let style = fc.glyph.style;
            queue!(
                stdout,
                cursor::MoveTo(fc.x, fc.y),
                SetForegroundColor(style.fg.to_crossterm()),
                SetBackgroundColor(style.bg.to_crossterm())
            )?;
            if style.bold {
                queue!(stdout, SetAttribute(Attribute::Bold))?;
            }
            queue!(stdout, Print(fc.glyph.ch))?;
            if style.bold {
                queue!(stdout, SetAttribute(Attribute::Reset))?;
            }
        }
        stdout.flush()?;
        log::trace!("presented {} changed glyphs", cells.len());
        self.last = Some(canvas.clone());
        Ok(())
    }

    /// Forget the last frame so the next [`Terminal::present`] redraws
    /// everything.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            event::DisableMouseCapture,
            SetAttribute(Attribute::Reset),
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.close();
    }
}
