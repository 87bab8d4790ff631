#![warn(rust_2018_idioms)]

use std::{panic, time::Duration};

use anyhow::{Context, Result};
use crossterm::event::{poll, read, Event};

use tuiforge::{
    app::App,
    canvas::{CanvasStyles, Painter},
    cleanup_terminal,
    constants::TICK_RATE_IN_MILLISECONDS,
    event::{handle_key_event_or_break, handle_mouse_event},
    init_terminal, options, panic_hook, DesignerTerminal,
};

fn main() -> Result<()> {
    let args = options::get_args();

    #[cfg(feature = "logging")]
    {
        tuiforge::utils::logging::init_logger(
            log::LevelFilter::Debug,
            std::ffi::OsStr::new("debug.log"),
        )?;
    }

    let config_path = options::get_config_path(args.general_args.config_location.as_deref());
    let config = options::create_or_get_config(&config_path)
        .context("Unable to properly parse or create the config file.")?;

    let theme = options::theme_name(&args, &config);
    let styles = CanvasStyles::new(theme.as_deref(), &config)
        .context("Found an issue while setting up the designer styles.")?;

    // A startup script is checked and loaded before the alternate screen, so
    // mistakes print to stderr rather than a dialog.
    let mut app = App::new();
    if let Some(file) = &args.general_args.file {
        options::validate_startup_file(file)
            .context("Found an issue with the given designer file.")?;
        app.load_from(file)
            .context("Unable to load the given designer file.")?;
    }

    let mut painter = Painter::init(styles);

    // Set panic hook
    panic::set_hook(Box::new(|info| panic_hook(info)));

    let mut terminal = init_terminal().context("Unable to set up the terminal.")?;

    let result = run_event_loop(&mut terminal, &mut app, &mut painter);
    cleanup_terminal(&mut terminal)?;

    result
}

/// The single-threaded event loop: poll for input, mutate the designer
/// state, redraw.
fn run_event_loop(
    terminal: &mut DesignerTerminal, app: &mut App, painter: &mut Painter,
) -> Result<()> {
    painter.draw_data(terminal, app)?;

    loop {
        if poll(Duration::from_millis(TICK_RATE_IN_MILLISECONDS))? {
            match read()? {
                Event::Key(event) => {
                    if handle_key_event_or_break(event, app) {
                        break;
                    }
                }
                Event::Mouse(event) => handle_mouse_event(event, app),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        painter.draw_data(terminal, app)?;
    }

    Ok(())
}
