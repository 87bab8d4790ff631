use tui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    app::{App, Panel},
    canvas::{
        drawing_utils::{truncate_str, widget_block},
        Painter,
    },
};

const LABEL_WIDTH: usize = 13;

impl Painter {
    /// The selected widget's properties, one row each; empty when nothing is
    /// selected. Activating a row opens its editor (or toggles a flag).
    pub fn draw_properties(&self, f: &mut Frame<'_>, app: &App, draw_loc: Rect) {
        let is_focused = app.focused_panel == Panel::Properties;
        let block = widget_block(is_focused, &self.styles).title(" Properties ");
        let inner = block.inner(draw_loc);
        f.render_widget(block, draw_loc);

        let rows = app.property_rows();
        let lines: Vec<Line<'_>> = rows
            .iter()
            .take(usize::from(inner.height))
            .enumerate()
            .map(|(index, row)| {
                let style = if index == app.property_index {
                    self.styles.selected_style
                } else {
                    self.styles.text_style
                };
                let content = format!(" {:<LABEL_WIDTH$}{}", row.label, row.value);
                Line::from(Span::styled(truncate_str(&content, inner.width), style))
            })
            .collect();

        f.render_widget(Paragraph::new(lines), inner);
    }
}
