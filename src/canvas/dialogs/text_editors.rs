use tui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::{
    app::dialogs::{StringListEditorState, TextEditorState},
    canvas::{
        drawing_utils::{buttons_line, dialog_block, dialog_rect, truncate_str},
        Painter,
    },
};

impl Painter {
    /// The single-line text / number editor.
    pub fn draw_text_editor(&self, f: &mut Frame<'_>, state: &TextEditorState) {
        let area = dialog_rect(f.area(), 50, 7);
        let block = dialog_block(&self.styles).title(format!(" {} ", state.title));
        let inner = block.inner(area);
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                truncate_str(&format!(" {}_", state.value), chunks[0].width),
                self.styles.text_style,
            ))),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(buttons_line(state.focus, &self.styles)),
            chunks[2],
        );
    }

    /// The string-list / multi-line-text editor: one entry per line. Enter
    /// adds a line; Tab reaches the buttons.
    pub fn draw_string_list_editor(&self, f: &mut Frame<'_>, state: &StringListEditorState) {
        let area = dialog_rect(f.area(), 50, 15);
        let block = dialog_block(&self.styles).title(format!(" {} ", state.title));
        let inner = block.inner(area);
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let mut lines: Vec<Line<'_>> = state
            .text
            .split('\n')
            .map(|line| {
                Line::from(Span::styled(
                    truncate_str(line, chunks[0].width),
                    self.styles.text_style,
                ))
            })
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled("_", self.styles.text_style));
        }
        let skip = lines.len().saturating_sub(usize::from(chunks[0].height));
        f.render_widget(
            Paragraph::new(lines.split_off(skip)),
            chunks[0],
        );

        f.render_widget(
            Paragraph::new(buttons_line(state.focus, &self.styles)),
            chunks[1],
        );
    }
}
