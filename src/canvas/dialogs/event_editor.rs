use tui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::{
    app::dialogs::EventEditorState,
    canvas::{
        drawing_utils::{buttons_line, dialog_block, dialog_rect},
        Painter,
    },
};

impl Painter {
    /// The event editor placeholder. Confirming records that the binding was
    /// edited; handler code generation is not supported.
    pub fn draw_event_editor(&self, f: &mut Frame<'_>, state: &EventEditorState) {
        let area = dialog_rect(f.area(), 50, 7);
        let block = dialog_block(&self.styles).title(format!(" {} ", state.title));
        let inner = block.inner(area);
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " Event handlers are managed outside the designer.",
                self.styles.text_style,
            ))),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(buttons_line(state.focus, &self.styles)),
            chunks[1],
        );
    }
}
