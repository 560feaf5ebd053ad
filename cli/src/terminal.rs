use std::io::{self, Stdout};

use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Raw-mode, alternate-screen session on stdout, restored when dropped.
pub struct TerminalSession {
    out: Stdout,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, cursor::Hide) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        log::debug!("terminal in raw mode");
        Ok(Self { out })
    }

    pub fn out(&mut self) -> &mut Stdout {
        &mut self.out
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, cursor::Show, LeaveAlternateScreen) {
            log::warn!("could not leave alternate screen: {}", err);
        }
        if let Err(err) = disable_raw_mode() {
            log::warn!("could not restore terminal mode: {}", err);
        }
    }
}
