use tui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::{
    app::dialogs::FileDialogState,
    canvas::{
        drawing_utils::{buttons_line, dialog_block, dialog_rect, truncate_str},
        Painter,
    },
    constants::FILE_EXTENSION,
};

impl Painter {
    /// The open/save picker: a path input plus the working directory's
    /// designer files.
    pub fn draw_file_dialog(&self, f: &mut Frame<'_>, state: &FileDialogState) {
        let area = dialog_rect(f.area(), 60, 16);
        let block = dialog_block(&self.styles).title(format!(" {} ", state.title()));
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

        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" File ", self.styles.title_style),
                Span::styled(
                    truncate_str(
                        &format!("{}_", state.input),
                        chunks[0].width.saturating_sub(6),
                    ),
                    self.styles.text_style,
                ),
            ])),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" .{FILE_EXTENSION} files in the current directory:"),
                self.styles.hint_style,
            ))),
            chunks[1],
        );

        let lines: Vec<Line<'_>> = state
            .entries
            .iter()
            .take(usize::from(chunks[2].height))
            .enumerate()
            .map(|(index, entry)| {
                let style = if index == state.entry_index {
                    self.styles.selected_style
                } else {
                    self.styles.text_style
                };
                Line::from(Span::styled(
                    truncate_str(&format!(" {entry}"), chunks[2].width),
                    style,
                ))
            })
            .collect();
        f.render_widget(Paragraph::new(lines), chunks[2]);

        f.render_widget(
            Paragraph::new(buttons_line(state.focus, &self.styles)),
            chunks[3],
        );
    }
}
