//! Drawing the designer screen: a hint line, the toolbox / properties /
//! controls column, the design surface, the status bar, and whichever modal
//! dialog is open.

pub mod dialogs;
pub mod drawing_utils;
pub mod frames;
mod styling;
pub mod widgets;

use std::io::Stdout;

use tui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame, Terminal,
};

pub use styling::CanvasStyles;

use crate::{app::App, constants::HINT_TEXT, utils::error};

/// Handles the canvas' state.
pub struct Painter {
    pub styles: CanvasStyles,
}

impl Painter {
    pub fn init(styles: CanvasStyles) -> Self {
        Painter { styles }
    }

    pub fn draw_data(
        &mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App,
    ) -> error::Result<()> {
        terminal.draw(|f| {
            self.draw_frame(f, app);
        })?;

        Ok(())
    }

    fn draw_frame(&self, f: &mut Frame<'_>, app: &mut App) {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(f.area());

        self.draw_hint_line(f, vertical_chunks[0]);

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
            .split(vertical_chunks[1]);

        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Min(0),
            ])
            .split(body_chunks[0]);

        app.panel_rects.toolbox = left_chunks[0];
        app.panel_rects.properties = left_chunks[1];
        app.panel_rects.controls = left_chunks[2];

        self.draw_toolbox(f, app, left_chunks[0]);
        self.draw_properties(f, app, left_chunks[1]);
        self.draw_controls(f, app, left_chunks[2]);
        self.draw_surface(f, app, body_chunks[1]);
        self.draw_status_bar(f, app, vertical_chunks[2]);

        if app.current_dialog.is_some() {
            self.draw_dialog(f, app);
        }
    }

    fn draw_hint_line(&self, f: &mut Frame<'_>, draw_loc: Rect) {
        f.render_widget(
            Paragraph::new(HINT_TEXT).style(self.styles.hint_style),
            draw_loc,
        );
    }
}
