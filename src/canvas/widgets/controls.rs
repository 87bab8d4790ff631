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

impl Painter {
    /// The flat registry of placed widgets; activating a row selects it.
    pub fn draw_controls(&self, f: &mut Frame<'_>, app: &App, draw_loc: Rect) {
        let is_focused = app.focused_panel == Panel::Controls;
        let block = widget_block(is_focused, &self.styles).title(" Controls ");
        let inner = block.inner(draw_loc);
        f.render_widget(block, draw_loc);

        let lines: Vec<Line<'_>> = app
            .tree
            .registry()
            .into_iter()
            .take(usize::from(inner.height))
            .enumerate()
            .map(|(index, id)| {
                let style = if index == app.controls_index {
                    self.styles.selected_style
                } else {
                    self.styles.text_style
                };

                let marker = if app.selected.as_deref() == Some(id.as_str()) {
                    "▶"
                } else {
                    " "
                };
                let kind = app
                    .tree
                    .get(&id)
                    .map(|node| node.kind.name())
                    .unwrap_or_default();
                let content = format!("{marker}{id} ({kind})");
                Line::from(Span::styled(truncate_str(&content, inner.width), style))
            })
            .collect();

        f.render_widget(Paragraph::new(lines), inner);
    }
}
