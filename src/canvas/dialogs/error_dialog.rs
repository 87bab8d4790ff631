use tui::{
    layout::{Constraint, Direction, Layout},
    text::Text,
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use crate::{
    app::dialogs::{DialogFocus, ErrorDialogState},
    canvas::{
        drawing_utils::{buttons_line, dialog_block, dialog_rect},
        Painter,
    },
};

impl Painter {
    /// The blocking error box; it carries the underlying message verbatim.
    pub fn draw_error_dialog(&self, f: &mut Frame<'_>, state: &ErrorDialogState) {
        let area = dialog_rect(f.area(), 54, 9);
        let block = dialog_block(&self.styles).title(format!(" {} ", state.title));
        let inner = block.inner(area);
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        f.render_widget(
            Paragraph::new(Text::from(state.message.clone()))
                .style(self.styles.text_style)
                .wrap(Wrap { trim: true }),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(buttons_line(DialogFocus::Ok, &self.styles)),
            chunks[1],
        );
    }
}
