//! Round-tripping whole designer sessions through files on disk.

use tuiforge::{
    app::{dialogs::Dialog, App},
    constraints::{Dim, Pos},
    widgets::{properties::PropertyValue, WidgetKind},
};

#[test]
fn save_then_load_round_trips_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.tui");

    let mut app = App::new();
    let node = app.create_widget(WidgetKind::Button);
    app.add_widget(node);
    app.select("View0");
    app.move_selected(2, 3);

    let node = app.create_widget(WidgetKind::ListView);
    app.add_widget(node);
    app.tree.get_mut("View1").unwrap().width = Dim::Percent(0.25);
    app.tree.get_mut("View1").unwrap().height = Dim::Fill;

    app.file_name = Some(path.clone());
    assert!(app.is_dirty);
    app.attempt_save();
    assert!(!app.is_dirty, "a successful save clears the dirty flag");

    let mut other = App::new();
    other.load_from(&path).unwrap();

    assert_eq!(other.tree.registry(), ["Window", "View0", "View1"]);
    let button = other.tree.get("View0").unwrap();
    assert_eq!(button.kind, WidgetKind::Button);
    assert_eq!(button.x, Pos::At(2));
    assert_eq!(button.y, Pos::At(3));
    assert_eq!(button.width, Dim::Sized(10));
    assert_eq!(button.height, Dim::Sized(1));
    assert_eq!(
        button.props.get("Text"),
        Some(&PropertyValue::Text("Button".to_owned()))
    );
    assert_eq!(
        other.tree.get("View1").unwrap().width,
        Dim::Percent(0.25)
    );
    assert!(!other.is_dirty);
    assert_eq!(other.selected, None);
}

#[test]
fn loading_garbage_is_an_error_not_a_crash() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.tui");
    std::fs::write(&path, "this is not a designer script").unwrap();

    let mut app = App::new();
    assert!(app.load_from(&path).is_err());
    // The session is still usable afterwards.
    assert_eq!(app.tree.registry(), ["Window"]);
}

#[test]
fn confirming_the_open_dialog_surfaces_errors_as_a_dialog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.tui");
    std::fs::write(&path, "garbage").unwrap();

    let mut app = App::new();
    app.request_open();
    let Some(Dialog::File(state)) = &mut app.current_dialog else {
        panic!("expected the file dialog");
    };
    state.input = path.display().to_string();
    app.on_enter();

    match &app.current_dialog {
        Some(Dialog::Error(state)) => {
            assert!(state.message.starts_with("Failed to load Window:"));
        }
        other => panic!("expected an error dialog, got {other:?}"),
    }
}

#[test]
fn wrong_extensions_are_refused_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.txt");
    std::fs::write(&path, "Window = FrameView::new()\nWindow\n").unwrap();

    let mut app = App::new();
    let err = app.load_from(&path).unwrap_err();
    assert!(err.to_string().contains("designer file"));
}
