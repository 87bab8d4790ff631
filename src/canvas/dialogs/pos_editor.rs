use tui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::{
    app::dialogs::PosEditorState,
    canvas::{
        drawing_utils::{buttons_line, dialog_block, dialog_rect, truncate_str},
        Painter,
    },
    constraints::PosKind,
};

impl Painter {
    /// The position editor: a kind list on the left; on the right, a value
    /// field for `At` or a widget list for the edge-relative kinds. Switching
    /// kinds swaps which input is shown - that is presentation only, nothing
    /// is applied until Ok.
    pub fn draw_pos_editor(&self, f: &mut Frame<'_>, state: &PosEditorState) {
        let area = dialog_rect(f.area(), 50, 15);
        let block = dialog_block(&self.styles).title(" Edit Position ");
        let inner = block.inner(area);
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(14), Constraint::Min(0)])
            .split(chunks[0]);

        let mut kind_lines = vec![Line::from(Span::styled(
            "Type",
            self.styles.title_style,
        ))];
        for (index, kind) in PosKind::ALL.iter().enumerate() {
            let glyph = if index == state.kind_index {
                "(o)"
            } else {
                "( )"
            };
            let style = if index == state.kind_index {
                self.styles.selected_style
            } else {
                self.styles.text_style
            };
            kind_lines.push(Line::from(Span::styled(
                format!("{glyph} {}", kind.label()),
                style,
            )));
        }
        f.render_widget(Paragraph::new(kind_lines), columns[0]);

        let kind = state.kind();
        if kind.needs_value() {
            let lines = vec![
                Line::from(Span::styled("Value", self.styles.title_style)),
                Line::from(Span::styled(
                    truncate_str(&format!("{}_", state.value), columns[1].width),
                    self.styles.text_style,
                )),
            ];
            f.render_widget(Paragraph::new(lines), columns[1]);
        } else if kind.needs_target() {
            let mut lines = vec![Line::from(Span::styled(
                "Widget  (←/→)",
                self.styles.title_style,
            ))];
            for (index, id) in state
                .views
                .iter()
                .take(usize::from(columns[1].height.saturating_sub(1)))
                .enumerate()
            {
                let style = if index == state.view_index {
                    self.styles.selected_style
                } else {
                    self.styles.text_style
                };
                lines.push(Line::from(Span::styled(
                    truncate_str(id, columns[1].width),
                    style,
                )));
            }
            f.render_widget(Paragraph::new(lines), columns[1]);
        }

        f.render_widget(
            Paragraph::new(buttons_line(state.focus, &self.styles)),
            chunks[1],
        );
    }
}
