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
    widgets::WidgetKind,
};

impl Painter {
    /// The widget catalog. Enter (or a second click) places the highlighted
    /// kind on the surface.
    pub fn draw_toolbox(&self, f: &mut Frame<'_>, app: &App, draw_loc: Rect) {
        let is_focused = app.focused_panel == Panel::Toolbox;
        let block = widget_block(is_focused, &self.styles).title(" Toolbox ");
        let inner = block.inner(draw_loc);
        f.render_widget(block, draw_loc);

        let lines: Vec<Line<'_>> = WidgetKind::ALL
            .iter()
            .take(usize::from(inner.height))
            .enumerate()
            .map(|(index, kind)| {
                let style = if index == app.toolbox_index {
                    self.styles.selected_style
                } else {
                    self.styles.text_style
                };
                Line::from(Span::styled(
                    truncate_str(&format!(" {}", kind.name()), inner.width),
                    style,
                ))
            })
            .collect();

        f.render_widget(Paragraph::new(lines), inner);
    }
}
