#![warn(rust_2018_idioms)]

pub mod utils {
    pub mod error;
    pub mod logging;
}
pub mod app;
pub mod canvas;
pub mod constants;
pub mod constraints;
pub mod event;
pub mod options;
pub mod script;
pub mod widgets;

use std::{
    io::{stdout, Stdout},
    panic::PanicHookInfo,
};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tui::{backend::CrosstermBackend, Terminal};

use utils::error;

pub type DesignerTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Put the terminal into the designer's full-screen, mouse-capturing mode.
pub fn init_terminal() -> error::Result<DesignerTerminal> {
    let mut stdout_val = stdout();
    execute!(stdout_val, EnterAlternateScreen, EnableMouseCapture)?;
    enable_raw_mode()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout_val))?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    Ok(terminal)
}

/// Restore the terminal the user had.
pub fn cleanup_terminal(terminal: &mut DesignerTerminal) -> error::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Based on https://github.com/Rigellute/spotify-tui/blob/master/src/main.rs
pub fn panic_hook(panic_info: &PanicHookInfo<'_>) {
    let mut stdout = stdout();

    let msg = match panic_info.payload().downcast_ref::<&'static str>() {
        Some(s) => *s,
        None => match panic_info.payload().downcast_ref::<String>() {
            Some(s) => &s[..],
            None => "Box<Any>",
        },
    };

    let _ = disable_raw_mode();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);

    // Print the message. Must be done after!
    let _ = execute!(
        stdout,
        Print(format!(
            "thread '<unnamed>' panicked at '{}', {}\n\r",
            msg,
            panic_info
                .location()
                .map(|location| location.to_string())
                .unwrap_or_default(),
        )),
    );
}
