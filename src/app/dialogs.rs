//! Modal dialog state.
//!
//! At most one dialog is open at a time; while one is up it swallows all
//! input. Confirming applies exactly one change to the live widget and marks
//! the session dirty; cancelling never mutates anything. The pure
//! confirm-time conversions live here so they can be tested without a
//! terminal.

use std::path::PathBuf;

use crate::{
    constants::FILE_EXTENSION,
    constraints::{Dim, DimKind, Pos, PosKind},
};

/// Which property of the selected widget a dialog session is editing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropTarget {
    X,
    Y,
    Width,
    Height,
    Prop(&'static str),
}

/// Focus within a dialog, cycled with Tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogFocus {
    Body,
    Ok,
    Cancel,
}

impl DialogFocus {
    pub fn next(self) -> DialogFocus {
        match self {
            DialogFocus::Body => DialogFocus::Ok,
            DialogFocus::Ok => DialogFocus::Cancel,
            DialogFocus::Cancel => DialogFocus::Body,
        }
    }
}

/// The open dialog, if any.
#[derive(Clone, Debug)]
pub enum Dialog {
    PosEditor(PosEditorState),
    DimEditor(DimEditorState),
    EnumEditor(EnumEditorState),
    TextEditor(TextEditorState),
    StringListEditor(StringListEditorState),
    EventEditor(EventEditorState),
    File(FileDialogState),
    Error(ErrorDialogState),
}

/// State for the position editor: a kind list, a numeric value field shown
/// only for kinds that need a scalar, and a widget-reference list shown only
/// for the edge-relative kinds.
#[derive(Clone, Debug)]
pub struct PosEditorState {
    pub target: PropTarget,
    pub widget: String,
    pub kind_index: usize,
    pub value: String,
    pub views: Vec<String>,
    pub view_index: usize,
    pub focus: DialogFocus,
}

impl PosEditorState {
    pub fn new(target: PropTarget, widget: String, pos: &Pos, views: Vec<String>) -> Self {
        let kind = PosKind::of(pos);
        let kind_index = PosKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
        let value = match pos {
            Pos::At(value) => value.to_string(),
            _ => "0".to_owned(),
        };
        let view_index = match pos {
            Pos::Edge(_, target) => views.iter().position(|id| id == target).unwrap_or(0),
            _ => 0,
        };

        PosEditorState {
            target,
            widget,
            kind_index,
            value,
            views,
            view_index,
            focus: DialogFocus::Body,
        }
    }

    pub fn kind(&self) -> PosKind {
        PosKind::ALL[self.kind_index]
    }

    /// Encode the dialog's `{kind, value, target}` into a live constraint.
    /// A value field that fails to parse yields `None`, meaning "no change" -
    /// the value is checked before the kind, so this holds even for kinds
    /// that ignore it.
    pub fn make_pos(&self) -> Option<Pos> {
        let value: f32 = self.value.trim().parse().ok()?;
        let target = self.views.get(self.view_index).cloned().unwrap_or_default();

        Some(self.kind().encode(value as i32, &target))
    }
}

/// State for the size editor: Absolute / Fill / Percent plus a value field
/// hidden for Fill.
#[derive(Clone, Debug)]
pub struct DimEditorState {
    pub target: PropTarget,
    pub widget: String,
    pub kind_index: usize,
    pub value: String,
    pub focus: DialogFocus,
}

impl DimEditorState {
    pub fn new(target: PropTarget, widget: String, dim: &Dim) -> Self {
        let kind = DimKind::of(dim);
        let kind_index = DimKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
        let value = match dim {
            Dim::Sized(value) => value.to_string(),
            Dim::Percent(fraction) => fraction.to_string(),
            Dim::Fill => "0".to_owned(),
        };

        DimEditorState {
            target,
            widget,
            kind_index,
            value,
            focus: DialogFocus::Body,
        }
    }

    pub fn kind(&self) -> DimKind {
        DimKind::ALL[self.kind_index]
    }

    /// Encode the dialog's `{kind, value}` into a live constraint, or `None`
    /// ("no change") if the value does not parse.
    pub fn make_dim(&self) -> Option<Dim> {
        let value: f32 = self.value.trim().parse().ok()?;
        Some(self.kind().encode(value))
    }
}

/// State for the enum editor: the property's symbolic values as a list.
#[derive(Clone, Debug)]
pub struct EnumEditorState {
    pub target: PropTarget,
    pub widget: String,
    pub title: String,
    pub choices: &'static [&'static str],
    pub index: usize,
    pub focus: DialogFocus,
}

/// State for the single-line text editor.
#[derive(Clone, Debug)]
pub struct TextEditorState {
    pub target: PropTarget,
    pub widget: String,
    pub title: String,
    pub value: String,
    pub focus: DialogFocus,
}

/// State for the string-list / multi-line-text editor. Entries are edited one
/// per line; Enter inserts a line, Tab moves to the buttons.
#[derive(Clone, Debug)]
pub struct StringListEditorState {
    pub target: PropTarget,
    pub widget: String,
    pub title: String,
    pub text: String,
    pub focus: DialogFocus,
}

impl StringListEditorState {
    pub fn new(target: PropTarget, widget: String, title: String, values: &[String]) -> Self {
        StringListEditorState {
            target,
            widget,
            title,
            text: values.join("\n"),
            focus: DialogFocus::Body,
        }
    }

    /// Split the buffer into entries: one per line, trailing whitespace
    /// trimmed, empty lines discarded, order preserved.
    pub fn entries(&self) -> Vec<String> {
        self.text
            .split('\n')
            .map(|line| line.trim_end())
            .filter(|line| !line.is_empty())
            .map(|line| line.to_owned())
            .collect()
    }
}

/// Placeholder dialog for event bindings; confirming only marks the session
/// dirty, no handler code is generated.
#[derive(Clone, Debug)]
pub struct EventEditorState {
    pub title: String,
    pub focus: DialogFocus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileDialogMode {
    Open,
    Save,
}

/// State for the open/save picker: a path input plus the current directory's
/// designer files. Only the fixed extension is offered either way.
#[derive(Clone, Debug)]
pub struct FileDialogState {
    pub mode: FileDialogMode,
    pub input: String,
    pub entries: Vec<String>,
    pub entry_index: usize,
    pub focus: DialogFocus,
}

impl FileDialogState {
    pub fn new(mode: FileDialogMode, input: String) -> Self {
        let mut entries: Vec<String> = std::fs::read_dir(".")
            .map(|dir| {
                dir.filter_map(|entry| entry.ok())
                    .map(|entry| entry.path())
                    .filter(|path| {
                        path.extension().and_then(|ext| ext.to_str()) == Some(FILE_EXTENSION)
                    })
                    .filter_map(|path| path.file_name()?.to_str().map(|s| s.to_owned()))
                    .collect()
            })
            .unwrap_or_default();
        entries.sort();

        FileDialogState {
            mode,
            input,
            entries,
            entry_index: 0,
            focus: DialogFocus::Body,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FileDialogMode::Open => "Open designer file",
            FileDialogMode::Save => "Save designer file",
        }
    }

    /// The path the dialog resolves to, with the designer extension appended
    /// for saves that omit it.
    pub fn chosen_path(&self) -> PathBuf {
        let mut path = PathBuf::from(self.input.trim());
        if self.mode == FileDialogMode::Save
            && path.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXTENSION)
        {
            let file_name = format!(
                "{}.{FILE_EXTENSION}",
                path.file_name().and_then(|f| f.to_str()).unwrap_or_default()
            );
            path.set_file_name(file_name);
        }
        path
    }
}

/// A blocking message box carrying the underlying error text.
#[derive(Clone, Debug)]
pub struct ErrorDialogState {
    pub title: String,
    pub message: String,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constraints::Side;

    fn views() -> Vec<String> {
        vec!["Window".to_owned(), "View0".to_owned(), "View1".to_owned()]
    }

    #[test]
    fn pos_editor_seeds_from_the_current_constraint() {
        let state = PosEditorState::new(
            PropTarget::X,
            "View0".to_owned(),
            &Pos::Edge(Side::Bottom, "View1".to_owned()),
            views(),
        );

        assert_eq!(state.kind(), PosKind::Bottom);
        assert_eq!(state.view_index, 2);
        assert_eq!(
            state.make_pos(),
            Some(Pos::Edge(Side::Bottom, "View1".to_owned()))
        );
    }

    #[test]
    fn non_numeric_value_means_no_change() {
        let mut state = PosEditorState::new(PropTarget::X, "View0".to_owned(), &Pos::At(3), views());
        state.value = "three".to_owned();
        assert_eq!(state.make_pos(), None);

        // The value is parsed before the kind is looked at, so even kinds
        // that ignore it refuse the edit.
        state.kind_index = 0;
        assert_eq!(PosKind::ALL[state.kind_index], PosKind::AnchorEnd);
        assert_eq!(state.make_pos(), None);

        let mut state =
            DimEditorState::new(PropTarget::Width, "View0".to_owned(), &Dim::Sized(10));
        state.value = "wide".to_owned();
        assert_eq!(state.make_dim(), None);
    }

    #[test]
    fn dim_editor_encodes_each_kind() {
        let mut state = DimEditorState::new(PropTarget::Width, "View0".to_owned(), &Dim::Fill);
        assert_eq!(state.kind(), DimKind::Fill);
        assert_eq!(state.make_dim(), Some(Dim::Fill));

        state.kind_index = 0;
        state.value = "12".to_owned();
        assert_eq!(state.make_dim(), Some(Dim::Sized(12)));

        state.kind_index = 2;
        state.value = "0.5".to_owned();
        assert_eq!(state.make_dim(), Some(Dim::Percent(0.5)));
    }

    #[test]
    fn string_list_entries_are_trimmed_and_non_empty() {
        let state = StringListEditorState {
            target: PropTarget::Prop("RadioLabels"),
            widget: "View0".to_owned(),
            title: "RadioLabels".to_owned(),
            text: "One  \n\nTwo\n   \nThree\n".to_owned(),
            focus: DialogFocus::Body,
        };

        assert_eq!(state.entries(), ["One", "Two", "Three"]);
    }

    #[test]
    fn save_paths_get_the_designer_extension() {
        let state = FileDialogState {
            mode: FileDialogMode::Save,
            input: "layout".to_owned(),
            entries: vec![],
            entry_index: 0,
            focus: DialogFocus::Body,
        };
        assert_eq!(state.chosen_path(), PathBuf::from("layout.tui"));

        let state = FileDialogState {
            input: "layout.tui".to_owned(),
            ..state
        };
        assert_eq!(state.chosen_path(), PathBuf::from("layout.tui"));
    }
}
