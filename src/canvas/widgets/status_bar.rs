use tui::{layout::{Alignment, Rect}, widgets::Paragraph, Frame};

use crate::{app::App, canvas::Painter};

impl Painter {
    /// The status line: the current file (or "Unsaved") with a trailing `*`
    /// while there are unsaved changes, and the version on the right.
    pub fn draw_status_bar(&self, f: &mut Frame<'_>, app: &App, draw_loc: Rect) {
        let mut status = match &app.file_name {
            Some(path) => path.display().to_string(),
            None => "Unsaved".to_owned(),
        };
        if app.is_dirty {
            status.push('*');
        }

        f.render_widget(
            Paragraph::new(format!(" {status}")).style(self.styles.hint_style),
            draw_loc,
        );
        f.render_widget(
            Paragraph::new(format!("tuiforge {} ", env!("CARGO_PKG_VERSION")))
                .style(self.styles.hint_style)
                .alignment(Alignment::Right),
            draw_loc,
        );
    }
}
