use tui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::{
    app::dialogs::DimEditorState,
    canvas::{
        drawing_utils::{buttons_line, dialog_block, dialog_rect, truncate_str},
        Painter,
    },
    constraints::DimKind,
};

impl Painter {
    /// The size editor: a horizontal kind radio, plus a value field hidden
    /// for Fill.
    pub fn draw_dim_editor(&self, f: &mut Frame<'_>, state: &DimEditorState) {
        let area = dialog_rect(f.area(), 50, 7);
        let block = dialog_block(&self.styles).title(" Edit Dimension ");
        let inner = block.inner(area);
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let mut spans = Vec::new();
        for (index, kind) in DimKind::ALL.iter().enumerate() {
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
            spans.push(Span::styled(format!("{glyph} {}  ", kind.label()), style));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

        if state.kind().needs_value() {
            f.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("Value ", self.styles.title_style),
                    Span::styled(
                        truncate_str(
                            &format!("{}_", state.value),
                            chunks[1].width.saturating_sub(6),
                        ),
                        self.styles.text_style,
                    ),
                ])),
                chunks[1],
            );
        }

        f.render_widget(
            Paragraph::new(buttons_line(state.focus, &self.styles)),
            chunks[3],
        );
    }
}
