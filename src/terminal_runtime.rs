use std::io::{self, Stdout};
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, error};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::feedback::{Feedback, ring_bell};
use crate::game::{GameEvent, Snapshot};
use crate::renderer::{self, FrameInfo};

/// The game's hold on the terminal for one run.
///
/// Frames and bell output share the one backend writer. Raw mode, the
/// alternate screen and the cursor are restored when the session drops.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    bell: bool,
}

impl TerminalSession {
    /// Switches to raw mode and the alternate screen with the cursor hidden.
    ///
    /// `bell` selects whether [`Feedback`] events ring the terminal bell.
    pub fn enter(bell: bool) -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        let terminal = execute!(stdout, EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));
        match terminal {
            Ok(terminal) => {
                debug!("terminal session entered, bell {bell}");
                Ok(Self { terminal, bell })
            }
            Err(error) => {
                let _ = restore_terminal();
                Err(error)
            }
        }
    }

    /// Draws one game frame.
    pub fn draw(&mut self, snapshot: &Snapshot<'_>, info: &FrameInfo<'_>) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, snapshot, info))?;
        Ok(())
    }
}

impl Feedback for TerminalSession {
    fn notify(&mut self, event: &GameEvent) {
        if !self.bell {
            return;
        }
        // A missing bell never interrupts play.
        if let Err(error) = ring_bell(self.terminal.backend_mut(), event) {
            debug!("terminal bell failed: {error}");
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(error) = restore_terminal() {
            error!("failed to restore terminal: {error}");
        }
    }
}

/// Restores the terminal and logs the panic before the default hook prints it.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        error!("panic: {panic_info}");
        default_hook(panic_info);
    }));
}

fn restore_terminal() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}
