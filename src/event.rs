//! Some code around handling events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::App;

/// Handle a [`MouseEvent`].
pub fn handle_mouse_event(event: MouseEvent, app: &mut App) {
    match event.kind {
        MouseEventKind::Down(button) => {
            let (x, y) = (event.column, event.row);
            match button {
                crossterm::event::MouseButton::Left => {
                    app.on_left_mouse_down(x, y);
                }
                crossterm::event::MouseButton::Right => {}
                _ => {}
            }
        }
        MouseEventKind::Drag(crossterm::event::MouseButton::Left) => {
            app.on_mouse_drag(event.column, event.row);
        }
        MouseEventKind::Up(crossterm::event::MouseButton::Left) => {
            app.on_left_mouse_up();
        }
        _ => {}
    };
}

/// Handle a [`KeyEvent`], returning true if the designer should quit.
pub fn handle_key_event_or_break(event: KeyEvent, app: &mut App) -> bool {
    if event.modifiers.is_empty() {
        match event.code {
            KeyCode::Up => app.on_up_key(),
            KeyCode::Down => app.on_down_key(),
            KeyCode::Left => app.on_left_key(),
            KeyCode::Right => app.on_right_key(),
            KeyCode::Char(caught_char) => app.on_char(caught_char),
            KeyCode::Esc => app.on_esc(),
            KeyCode::Enter => app.on_enter(),
            KeyCode::Tab => app.on_tab(),
            KeyCode::Backspace => app.on_backspace(),
            KeyCode::Delete => app.on_delete_key(),
            _ => {}
        }
    } else {
        // Otherwise, track the modifier as well...
        if let KeyModifiers::CONTROL = event.modifiers {
            if event.code == KeyCode::Char('c') {
                return true;
            }

            match event.code {
                KeyCode::Char('q') => return true,
                KeyCode::Char('o') => app.request_open(),
                KeyCode::Char('s') => app.request_save(false),
                KeyCode::Char('a') => app.request_save(true),
                _ => {}
            }
        } else if let KeyModifiers::SHIFT = event.modifiers {
            if let KeyCode::Char(caught_char) = event.code {
                app.on_char(caught_char);
            }
        }
    }

    false
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{app::Panel, widgets::WidgetKind};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn ctrl_q_and_ctrl_c_quit() {
        let mut app = App::new();
        assert!(handle_key_event_or_break(ctrl('q'), &mut app));
        assert!(handle_key_event_or_break(ctrl('c'), &mut app));
        assert!(!handle_key_event_or_break(key(KeyCode::Char('q')), &mut app));
    }

    #[test]
    fn enter_in_the_toolbox_adds_a_widget() {
        let mut app = App::new();
        app.focused_panel = Panel::Toolbox;
        app.toolbox_index = 0;
        handle_key_event_or_break(key(KeyCode::Enter), &mut app);

        assert_eq!(app.tree.registry(), ["Window", "View0"]);
        assert_eq!(app.tree.get("View0").unwrap().kind, WidgetKind::Button);
    }

    #[test]
    fn arrows_on_the_surface_nudge_and_are_consumed() {
        let mut app = App::new();
        let node = app.create_widget(WidgetKind::Button);
        app.add_widget(node);
        app.select("View0");
        app.focused_panel = Panel::Surface;

        handle_key_event_or_break(key(KeyCode::Right), &mut app);
        handle_key_event_or_break(key(KeyCode::Down), &mut app);

        let node = app.tree.get("View0").unwrap();
        assert_eq!(node.x, crate::constraints::Pos::At(1));
        assert_eq!(node.y, crate::constraints::Pos::At(1));
        // The focus stayed on the surface; nothing fell through to panel
        // traversal.
        assert_eq!(app.focused_panel, Panel::Surface);
    }

    #[test]
    fn delete_with_root_selected_changes_nothing() {
        let mut app = App::new();
        let node = app.create_widget(WidgetKind::Button);
        app.add_widget(node);
        app.select("Window");

        handle_key_event_or_break(key(KeyCode::Delete), &mut app);
        assert_eq!(app.tree.len(), 2);
    }
}
