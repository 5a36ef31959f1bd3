use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Stdout, Write};

/// Owns the terminal modes the widget needs for its lifetime: raw input,
/// the alternate screen, and mouse and focus reporting.
///
/// Everything acquired in `start` is released exactly once, either through
/// `release` or when the guard is dropped, including during unwinding.
pub struct TerminalSession<W: Write = Stdout> {
    writer: W,
    raw_mode: bool,
    active: bool,
}

impl TerminalSession<Stdout> {
    pub fn start() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        match Self::acquire(io::stdout(), true) {
            Ok(session) => Ok(session),
            Err(e) => {
                let _ = disable_raw_mode();
                Err(e)
            }
        }
    }
}

impl<W: Write> TerminalSession<W> {
    /// Switch `writer` into widget mode. `raw_mode` records whether raw mode
    /// was enabled by the caller and must be disabled on release.
    pub fn acquire(mut writer: W, raw_mode: bool) -> Result<Self> {
        execute!(
            writer,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )
        .context("Failed to prepare terminal")?;

        Ok(Self {
            writer,
            raw_mode,
            active: true,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn release(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        if self.raw_mode {
            disable_raw_mode().context("Failed to disable raw mode")?;
        }
        execute!(
            self.writer,
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen,
            Show
        )
        .context("Failed to restore terminal")?;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            tracing::warn!(error = %e, "terminal restore failed");
        }
    }
}
