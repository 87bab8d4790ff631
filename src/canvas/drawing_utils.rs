use tui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};
use unicode_width::UnicodeWidthChar;

use crate::{app::dialogs::DialogFocus, canvas::CanvasStyles};

/// Return a panel block, with the border highlighted while the panel holds
/// focus.
pub fn widget_block<'a>(is_focused: bool, styles: &CanvasStyles) -> Block<'a> {
    let border_style = if is_focused {
        styles.selected_border_style
    } else {
        styles.border_style
    };

    Block::default()
        .border_type(BorderType::Plain)
        .borders(Borders::ALL)
        .border_style(border_style)
        .title_style(styles.title_style)
}

/// Return a dialog block.
pub fn dialog_block<'a>(styles: &CanvasStyles) -> Block<'a> {
    Block::default()
        .border_type(BorderType::Rounded)
        .borders(Borders::ALL)
        .border_style(styles.selected_border_style)
        .title_style(styles.title_style)
}

/// A rect of at most `width` x `height`, centered within `area`.
pub fn dialog_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// The Ok/Cancel button row every editor dialog ends with.
pub fn buttons_line(focus: DialogFocus, styles: &CanvasStyles) -> Line<'static> {
    let button = |label: &'static str, focused: bool| {
        if focused {
            Span::styled(label, styles.selected_style)
        } else {
            Span::styled(label, styles.text_style)
        }
    };

    Line::from(vec![
        Span::raw(" "),
        button("[ Ok ]", focus == DialogFocus::Ok),
        Span::raw("  "),
        button("[ Cancel ]", focus == DialogFocus::Cancel),
    ])
}

/// Truncate a string to the given displayed width.
pub fn truncate_str(content: &str, width: u16) -> String {
    let width = usize::from(width);
    let mut out = String::new();
    let mut used = 0;

    for c in content.chars() {
        let c_width = c.width().unwrap_or(0);
        if used + c_width > width {
            break;
        }
        out.push(c);
        used += c_width;
    }

    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn truncation_respects_character_width() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello", 3), "hel");
        // Wide characters count double.
        assert_eq!(truncate_str("日本語", 4), "日本");
        assert_eq!(truncate_str("日本語", 5), "日本");
    }

    #[test]
    fn dialog_rects_never_exceed_the_area() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = dialog_rect(area, 50, 15);
        assert_eq!(rect, area);

        let rect = dialog_rect(area, 20, 6);
        assert_eq!(rect, Rect::new(5, 2, 20, 6));
    }
}
