use tui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::{
    app::dialogs::EnumEditorState,
    canvas::{
        drawing_utils::{buttons_line, dialog_block, dialog_rect, truncate_str},
        Painter,
    },
};

impl Painter {
    /// The enum editor: every symbolic value of the property as a list.
    pub fn draw_enum_editor(&self, f: &mut Frame<'_>, state: &EnumEditorState) {
        let area = dialog_rect(f.area(), 50, 15);
        let block = dialog_block(&self.styles).title(format!(" {} ", state.title));
        let inner = block.inner(area);
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let lines: Vec<Line<'_>> = state
            .choices
            .iter()
            .take(usize::from(chunks[0].height))
            .enumerate()
            .map(|(index, choice)| {
                let style = if index == state.index {
                    self.styles.selected_style
                } else {
                    self.styles.text_style
                };
                Line::from(Span::styled(
                    truncate_str(&format!(" {choice}"), chunks[0].width),
                    style,
                ))
            })
            .collect();
        f.render_widget(Paragraph::new(lines), chunks[0]);

        f.render_widget(
            Paragraph::new(buttons_line(state.focus, &self.styles)),
            chunks[1],
        );
    }
}
