//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::io;

/// Keeps the terminal in raw mode for key-by-key input; restores it on drop.
pub struct RawModeGuard {
    restore: bool,
}

impl RawModeGuard {
    /// Enter raw mode. If raw mode was already on, the guard leaves it on when dropped.
    pub fn new() -> io::Result<Self> {
        let already = is_raw_mode_enabled().unwrap_or(false);
        if !already {
            enable_raw_mode()?;
        }
        Ok(Self { restore: !already })
    }

    pub fn release(&mut self) {
        if self.restore {
            let _ = disable_raw_mode();
            self.restore = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}
