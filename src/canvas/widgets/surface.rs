use tui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

use crate::{
    app::{tree::WidgetNode, App, Panel},
    canvas::{
        drawing_utils::{truncate_str, widget_block},
        frames::resolve_frames,
        Painter,
    },
    widgets::{properties::PropertyValue, WidgetKind},
};

impl Painter {
    /// The design surface: every widget painted at its resolved frame. The
    /// resolved frames are stored back on the app for hit-testing and drag
    /// math.
    pub fn draw_surface(&self, f: &mut Frame<'_>, app: &mut App, draw_loc: Rect) {
        let is_focused = app.focused_panel == Panel::Surface;
        let title = match app
            .tree
            .get(app.tree.root_id())
            .and_then(|root| root.props.get("Title"))
        {
            Some(PropertyValue::Text(title)) => format!(" {title} "),
            _ => " Window ".to_owned(),
        };

        let block = widget_block(is_focused, &self.styles).title(title);
        let inner = block.inner(draw_loc);
        f.render_widget(block, draw_loc);
        app.panel_rects.surface = inner;

        let frames = resolve_frames(&app.tree, inner);
        for node in app.tree.widgets() {
            if app.tree.is_root(&node.id) {
                continue;
            }
            let Some(frame) = frames.get(&node.id) else {
                continue;
            };
            if frame.width == 0 || frame.height == 0 {
                continue;
            }

            let is_selected = app.selected.as_deref() == Some(node.id.as_str());
            self.draw_design_widget(f, node, *frame, is_selected);
        }

        app.widget_frames = frames;
    }

    fn draw_design_widget(&self, f: &mut Frame<'_>, node: &WidgetNode, frame: Rect, selected: bool) {
        let visible = !matches!(node.props.get("Visible"), Some(PropertyValue::Bool(false)));
        let style = if selected {
            self.styles.selected_style
        } else if visible {
            self.styles.widget_style
        } else {
            self.styles.disabled_style
        };

        match node.kind {
            WidgetKind::Button => {
                let label = format!("[ {} ]", text_prop(node, "Text"));
                f.render_widget(paragraph_for(&label, frame, style), frame);
            }
            WidgetKind::CheckBox => {
                let glyph = match node.props.get("Checked") {
                    Some(PropertyValue::Bool(true)) => "[x]",
                    _ => "[ ]",
                };
                let label = format!("{glyph} {}", text_prop(node, "Text"));
                f.render_widget(paragraph_for(&label, frame, style), frame);
            }
            WidgetKind::ComboBox => {
                let first = list_prop(node, "Items").first().cloned().unwrap_or_default();
                let label = format!("{first} ▼");
                f.render_widget(paragraph_for(&label, frame, style), frame);
            }
            WidgetKind::FrameView => {
                let block = Block::default()
                    .border_type(BorderType::Plain)
                    .borders(Borders::ALL)
                    .border_style(style)
                    .title(format!(" {} ", text_prop(node, "Title")));
                f.render_widget(block, frame);
            }
            WidgetKind::Label => {
                let alignment = match node
                    .props
                    .get("TextAlignment")
                    .and_then(|value| value.enum_symbol())
                {
                    Some("Right") => Alignment::Right,
                    Some("Centered") => Alignment::Center,
                    _ => Alignment::Left,
                };
                let label = text_prop(node, "Text");
                f.render_widget(
                    Paragraph::new(truncate_str(&label, frame.width))
                        .style(style)
                        .alignment(alignment),
                    frame,
                );
            }
            WidgetKind::ListView => {
                let lines = lines_for(&list_prop(node, "Items"), frame, style);
                f.render_widget(Paragraph::new(lines), frame);
            }
            WidgetKind::ProgressBar => {
                let fraction = match node.props.get("Fraction") {
                    Some(PropertyValue::Number(fraction)) => {
                        f64::from(*fraction).clamp(0.0, 1.0)
                    }
                    _ => 0.0,
                };
                f.render_widget(Gauge::default().gauge_style(style).ratio(fraction), frame);
            }
            WidgetKind::RadioGroup => {
                let labels = list_prop(node, "RadioLabels");
                let horizontal = node
                    .props
                    .get("DisplayMode")
                    .and_then(|value| value.enum_symbol())
                    == Some("Horizontal");

                if horizontal {
                    let mut content = String::new();
                    for (index, label) in labels.iter().enumerate() {
                        let glyph = if index == 0 { "(o)" } else { "( )" };
                        content.push_str(&format!("{glyph} {label}  "));
                    }
                    f.render_widget(paragraph_for(content.trim_end(), frame, style), frame);
                } else {
                    let rows: Vec<String> = labels
                        .iter()
                        .enumerate()
                        .map(|(index, label)| {
                            let glyph = if index == 0 { "(o)" } else { "( )" };
                            format!("{glyph} {label}")
                        })
                        .collect();
                    let lines = lines_for(&rows, frame, style);
                    f.render_widget(Paragraph::new(lines), frame);
                }
            }
            WidgetKind::TextField => {
                let text = text_prop(node, "Text");
                let shown = if matches!(node.props.get("Secret"), Some(PropertyValue::Bool(true)))
                {
                    "*".repeat(text.chars().count())
                } else {
                    text
                };
                let mut content = truncate_str(&shown, frame.width);
                while (content.chars().count() as u16) < frame.width {
                    content.push('_');
                }
                f.render_widget(Paragraph::new(content).style(style), frame);
            }
            WidgetKind::TextView => {
                let lines = lines_for(&list_prop(node, "Text"), frame, style);
                f.render_widget(Paragraph::new(lines), frame);
            }
        }
    }
}

fn text_prop(node: &WidgetNode, name: &str) -> String {
    match node.props.get(name) {
        Some(PropertyValue::Text(text)) => text.clone(),
        _ => String::new(),
    }
}

fn list_prop(node: &WidgetNode, name: &str) -> Vec<String> {
    match node.props.get(name) {
        Some(PropertyValue::StringList(lines) | PropertyValue::ItemList(lines)) => lines.clone(),
        _ => Vec::new(),
    }
}

fn paragraph_for<'a>(content: &str, frame: Rect, style: Style) -> Paragraph<'a> {
    Paragraph::new(truncate_str(content, frame.width)).style(style)
}

fn lines_for(rows: &[String], frame: Rect, style: Style) -> Vec<Line<'static>> {
    rows.iter()
        .take(usize::from(frame.height))
        .map(|row| Line::from(Span::styled(truncate_str(row, frame.width), style)))
        .collect()
}
