//! The designer session state.
//!
//! [`App`] owns the single source of truth: the widget tree, the selection,
//! the dirty flag, the drag state, and the open dialog. Every other part of
//! the program reads this state or requests mutations through the operations
//! here; none of them mutate it directly.

pub mod dialogs;
pub mod tree;

use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use hashbrown::HashMap;
use tui::layout::Rect;

use crate::{
    constants::{FILE_EXTENSION, SKIPPED_PROPERTIES, TOOLBOX_DEBOUNCE_MILLISECONDS},
    constraints::Pos,
    script,
    utils::error::{DesignerError, Result},
    widgets::{
        properties::{PropertyKind, PropertyValue},
        WidgetKind,
    },
};

use dialogs::{
    Dialog, DialogFocus, DimEditorState, EnumEditorState, ErrorDialogState, EventEditorState,
    FileDialogMode, FileDialogState, PosEditorState, PropTarget, StringListEditorState,
    TextEditorState,
};
use tree::{WidgetNode, WidgetTree};

/// The four regions of the designer screen that can hold keyboard focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Toolbox,
    Properties,
    Controls,
    Surface,
}

impl Panel {
    pub fn next(self) -> Panel {
        match self {
            Panel::Toolbox => Panel::Properties,
            Panel::Properties => Panel::Controls,
            Panel::Controls => Panel::Surface,
            Panel::Surface => Panel::Toolbox,
        }
    }
}

/// A notification fired after each mutating operation. Dispatch is a single
/// synchronous function call; the panels derive everything else from state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateChange {
    Added(String),
    Removed(String),
    Selected(String),
    Dirty,
}

/// Screen rectangles of the panels, captured during each draw so input
/// handling can hit-test against what is actually on screen.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanelRects {
    pub toolbox: Rect,
    pub properties: Rect,
    pub controls: Rect,
    /// The design surface, already shrunk by its border inset.
    pub surface: Rect,
}

/// What activating a property panel row does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowAction {
    ReadOnly,
    Edit(PropTarget),
    Toggle(&'static str),
    Event(&'static str),
}

/// One row of the property panel.
#[derive(Clone, Debug)]
pub struct PropertyRow {
    pub label: String,
    pub value: String,
    pub action: RowAction,
}

pub struct App {
    pub tree: WidgetTree,
    pub selected: Option<String>,
    pub is_dirty: bool,
    pub file_name: Option<PathBuf>,
    pub current_dialog: Option<Dialog>,
    pub focused_panel: Panel,
    pub toolbox_index: usize,
    pub property_index: usize,
    pub controls_index: usize,
    pub panel_rects: PanelRects,
    /// Resolved screen frames of every widget, refreshed by the painter.
    pub widget_frames: HashMap<String, Rect>,
    dragging: bool,
    last_toolbox_add: Option<Instant>,
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

impl App {
    pub fn new() -> Self {
        App {
            tree: WidgetTree::new(),
            selected: None,
            is_dirty: false,
            file_name: None,
            current_dialog: None,
            focused_panel: Panel::Toolbox,
            toolbox_index: 0,
            property_index: 0,
            controls_index: 0,
            panel_rects: PanelRects::default(),
            widget_frames: HashMap::new(),
            dragging: false,
            last_toolbox_add: None,
        }
    }

    fn on_state_change(&mut self, change: StateChange) {
        match change {
            StateChange::Added(_) => {}
            StateChange::Removed(id) => {
                // The property panel empties whenever the widget it shows
                // goes away.
                if self.selected.as_deref() == Some(id.as_str()) {
                    self.selected = None;
                }
                self.property_index = 0;
                self.controls_index = 0;
            }
            StateChange::Selected(_) => {
                self.property_index = 0;
            }
            StateChange::Dirty => {}
        }
    }

    fn set_dirty(&mut self) {
        self.is_dirty = true;
        self.on_state_change(StateChange::Dirty);
    }

    /// Insert a widget under the root. A widget that is already registered is
    /// left alone.
    pub fn add_widget(&mut self, node: WidgetNode) {
        let id = node.id.clone();
        if self.tree.insert_under_root(node) {
            self.set_dirty();
            self.on_state_change(StateChange::Added(id));
        }
    }

    /// Remove a widget (and its subtree). Absent ids are a no-op.
    pub fn remove_widget(&mut self, id: &str) {
        if self.tree.remove(id) {
            self.set_dirty();
            self.on_state_change(StateChange::Removed(id.to_owned()));
        }
    }

    /// Select a widget. Ids not in the tree are ignored.
    pub fn select(&mut self, id: &str) {
        if self.tree.contains(id) {
            self.selected = Some(id.to_owned());
            self.on_state_change(StateChange::Selected(id.to_owned()));
        }
    }

    /// Move the selected widget to absolute coordinates, clamped at zero.
    /// Whatever constraint kinds the widget had before are overwritten with
    /// absolutes. The root never moves.
    pub fn move_selected(&mut self, x: i32, y: i32) {
        let Some(id) = self.selected.clone() else {
            return;
        };
        if self.tree.is_root(&id) {
            return;
        }

        let (x, y) = (x.max(0), y.max(0));
        if let Some(node) = self.tree.get_mut(&id) {
            node.x = Pos::At(x);
            node.y = Pos::At(y);
            self.set_dirty();
        }
    }

    /// Delete the selected widget and clear the selection. Deleting with the
    /// root selected is a no-op.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected.clone() else {
            return;
        };
        if self.tree.is_root(&id) {
            return;
        }

        self.remove_widget(&id);
        self.selected = None;
    }

    /// Create a widget of the given kind with its designer defaults and the
    /// next sequential id.
    pub fn create_widget(&mut self, kind: WidgetKind) -> WidgetNode {
        let id = self.tree.alloc_id();
        self.set_dirty();
        WidgetNode::with_defaults(id, kind)
    }

    // ------------------------------------------------------------------
    // Panel interactions
    // ------------------------------------------------------------------

    /// Place the toolbox's highlighted widget kind onto the surface. Repeated
    /// activations within the debounce window are dropped so a double-click
    /// adds one widget, not two.
    pub fn toolbox_activate(&mut self) {
        if let Some(last) = self.last_toolbox_add {
            if last.elapsed() < Duration::from_millis(TOOLBOX_DEBOUNCE_MILLISECONDS) {
                return;
            }
        }

        if let Some(kind) = WidgetKind::ALL.get(self.toolbox_index).copied() {
            let node = self.create_widget(kind);
            self.add_widget(node);
            self.last_toolbox_add = Some(Instant::now());
        }
    }

    /// Select the controls panel's highlighted widget.
    pub fn controls_activate(&mut self) {
        let registry = self.tree.registry();
        if let Some(id) = registry.get(self.controls_index) {
            self.select(&id.clone());
        }
    }

    /// The rows the property panel shows for the current selection.
    pub fn property_rows(&self) -> Vec<PropertyRow> {
        let Some(node) = self.selected.as_ref().and_then(|id| self.tree.get(id)) else {
            return Vec::new();
        };

        let mut rows = vec![
            PropertyRow {
                label: "Id".to_owned(),
                value: node.id.clone(),
                action: RowAction::ReadOnly,
            },
            PropertyRow {
                label: "X".to_owned(),
                value: node.x.to_string(),
                action: RowAction::Edit(PropTarget::X),
            },
            PropertyRow {
                label: "Y".to_owned(),
                value: node.y.to_string(),
                action: RowAction::Edit(PropTarget::Y),
            },
            PropertyRow {
                label: "Width".to_owned(),
                value: node.width.to_string(),
                action: RowAction::Edit(PropTarget::Width),
            },
            PropertyRow {
                label: "Height".to_owned(),
                value: node.height.to_string(),
                action: RowAction::Edit(PropTarget::Height),
            },
        ];

        for spec in node.specs() {
            if SKIPPED_PROPERTIES.contains(&spec.name) {
                continue;
            }
            let Some(value) = node.props.get(spec.name) else {
                continue;
            };

            let action = match spec.kind {
                PropertyKind::Bool => RowAction::Toggle(spec.name),
                _ => RowAction::Edit(PropTarget::Prop(spec.name)),
            };

            rows.push(PropertyRow {
                label: spec.name.to_owned(),
                value: value.display(),
                action,
            });
        }

        for event in node.kind.events() {
            rows.push(PropertyRow {
                label: (*event).to_owned(),
                value: "Edit...".to_owned(),
                action: RowAction::Event(event),
            });
        }

        rows
    }

    /// Activate the property panel's highlighted row: toggle a flag in place
    /// or open the matching modal editor.
    pub fn properties_activate(&mut self) {
        let rows = self.property_rows();
        let Some(row) = rows.get(self.property_index) else {
            return;
        };

        match row.action.clone() {
            RowAction::ReadOnly => {}
            RowAction::Toggle(name) => self.toggle_bool(name),
            RowAction::Edit(target) => self.open_editor(target),
            RowAction::Event(name) => {
                self.current_dialog = Some(Dialog::EventEditor(EventEditorState {
                    title: name.to_owned(),
                    focus: DialogFocus::Ok,
                }));
            }
        }
    }

    fn toggle_bool(&mut self, name: &'static str) {
        let Some(id) = self.selected.clone() else {
            return;
        };
        if let Some(PropertyValue::Bool(value)) =
            self.tree.get_mut(&id).and_then(|node| node.props.get_mut(name))
        {
            *value = !*value;
            self.set_dirty();
        }
    }

    /// Open the modal editor matching the property's kind. The mapping is
    /// static: position and size editors for the layout fields, and the
    /// text / enum / string-list editors per the schema.
    pub fn open_editor(&mut self, target: PropTarget) {
        let Some(id) = self.selected.clone() else {
            return;
        };
        let Some(node) = self.tree.get(&id) else {
            return;
        };

        let dialog = match &target {
            PropTarget::X => Dialog::PosEditor(PosEditorState::new(
                target.clone(),
                id.clone(),
                &node.x,
                self.tree.registry(),
            )),
            PropTarget::Y => Dialog::PosEditor(PosEditorState::new(
                target.clone(),
                id.clone(),
                &node.y,
                self.tree.registry(),
            )),
            PropTarget::Width => {
                Dialog::DimEditor(DimEditorState::new(target.clone(), id.clone(), &node.width))
            }
            PropTarget::Height => {
                Dialog::DimEditor(DimEditorState::new(target.clone(), id.clone(), &node.height))
            }
            PropTarget::Prop(name) => {
                let Some(spec) = node.kind.spec(name) else {
                    return;
                };
                let Some(value) = node.props.get(name) else {
                    return;
                };

                match (spec.kind, value) {
                    (PropertyKind::Text, PropertyValue::Text(text)) => {
                        Dialog::TextEditor(TextEditorState {
                            target: target.clone(),
                            widget: id.clone(),
                            title: (*name).to_owned(),
                            value: text.clone(),
                            focus: DialogFocus::Body,
                        })
                    }
                    (PropertyKind::Number, PropertyValue::Number(value)) => {
                        Dialog::TextEditor(TextEditorState {
                            target: target.clone(),
                            widget: id.clone(),
                            title: (*name).to_owned(),
                            value: value.to_string(),
                            focus: DialogFocus::Body,
                        })
                    }
                    (PropertyKind::Enum(choices), PropertyValue::Enum { index, .. }) => {
                        Dialog::EnumEditor(EnumEditorState {
                            target: target.clone(),
                            widget: id.clone(),
                            title: (*name).to_owned(),
                            choices,
                            index: *index,
                            focus: DialogFocus::Body,
                        })
                    }
                    (
                        PropertyKind::StringList | PropertyKind::ItemList,
                        PropertyValue::StringList(lines) | PropertyValue::ItemList(lines),
                    ) => Dialog::StringListEditor(StringListEditorState::new(
                        target.clone(),
                        id.clone(),
                        (*name).to_owned(),
                        lines,
                    )),
                    _ => return,
                }
            }
        };

        self.current_dialog = Some(dialog);
    }

    // ------------------------------------------------------------------
    // Pointer protocol
    // ------------------------------------------------------------------

    /// Handle a left press. A press inside the selected widget's frame starts
    /// a drag; a press on another widget selects it; presses on the side
    /// panels move their cursors.
    pub fn on_left_mouse_down(&mut self, x: u16, y: u16) {
        if self.current_dialog.is_some() {
            return;
        }

        let rects = self.panel_rects;
        if rect_contains(rects.toolbox, x, y) {
            self.focused_panel = Panel::Toolbox;
            if let Some(row) = row_in(rects.toolbox, y) {
                if row < WidgetKind::ALL.len() {
                    if self.toolbox_index == row {
                        self.toolbox_activate();
                    } else {
                        self.toolbox_index = row;
                    }
                }
            }
        } else if rect_contains(rects.properties, x, y) {
            self.focused_panel = Panel::Properties;
            if let Some(row) = row_in(rects.properties, y) {
                if row < self.property_rows().len() {
                    self.property_index = row;
                    self.properties_activate();
                }
            }
        } else if rect_contains(rects.controls, x, y) {
            self.focused_panel = Panel::Controls;
            if let Some(row) = row_in(rects.controls, y) {
                if row < self.tree.registry().len() {
                    self.controls_index = row;
                    self.controls_activate();
                }
            }
        } else if rect_contains(rects.surface, x, y) {
            self.focused_panel = Panel::Surface;

            let over_selected = self
                .selected
                .as_ref()
                .and_then(|id| self.widget_frames.get(id))
                .is_some_and(|frame| rect_contains(*frame, x, y));

            if over_selected && !self.selected_is_root() {
                self.dragging = true;
            } else if let Some(hit) = self.hit_test(x, y) {
                self.select(&hit);
            }
        }
    }

    /// Handle pointer movement while the button is held: reposition the
    /// selected widget under the cursor, in surface-relative coordinates.
    pub fn on_mouse_drag(&mut self, x: u16, y: u16) {
        if !self.dragging || self.current_dialog.is_some() {
            return;
        }

        let surface = self.panel_rects.surface;
        self.move_selected(
            i32::from(x) - i32::from(surface.x),
            i32::from(y) - i32::from(surface.y),
        );
    }

    pub fn on_left_mouse_up(&mut self) {
        self.dragging = false;
    }

    /// Topmost non-root widget whose frame contains the point.
    fn hit_test(&self, x: u16, y: u16) -> Option<String> {
        self.tree
            .registry()
            .into_iter()
            .rev()
            .filter(|id| !self.tree.is_root(id))
            .find(|id| {
                self.widget_frames
                    .get(id)
                    .is_some_and(|frame| rect_contains(*frame, x, y))
            })
    }

    fn selected_is_root(&self) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|id| self.tree.is_root(id))
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Nudge the selected widget by one cell. The root stays put.
    pub fn nudge_selected(&mut self, dx: i32, dy: i32) {
        let Some(id) = self.selected.clone() else {
            return;
        };
        if self.tree.is_root(&id) {
            return;
        }

        let surface = self.panel_rects.surface;
        let current = match self.widget_frames.get(&id) {
            Some(frame) => Some((
                i32::from(frame.x) - i32::from(surface.x),
                i32::from(frame.y) - i32::from(surface.y),
            )),
            None => {
                let node = self.tree.get(&id);
                match node.map(|node| (&node.x, &node.y)) {
                    Some((Pos::At(x), Pos::At(y))) => Some((*x, *y)),
                    _ => None,
                }
            }
        };

        if let Some((x, y)) = current {
            self.move_selected(x + dx, y + dy);
        }
    }

    // ------------------------------------------------------------------
    // File operations
    // ------------------------------------------------------------------

    /// Open the save dialog, or save straight to the current file.
    pub fn request_save(&mut self, save_as: bool) {
        if self.current_dialog.is_some() {
            return;
        }

        if self.file_name.is_none() || save_as {
            let input = self
                .file_name
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_default();
            self.current_dialog = Some(Dialog::File(FileDialogState::new(
                FileDialogMode::Save,
                input,
            )));
        } else {
            self.attempt_save();
        }
    }

    pub fn request_open(&mut self) {
        if self.current_dialog.is_some() {
            return;
        }

        self.current_dialog = Some(Dialog::File(FileDialogState::new(
            FileDialogMode::Open,
            String::new(),
        )));
    }

    /// Save to the current file name. On success the dirty flag clears; on
    /// failure it stays set and the error is shown in a dialog.
    pub fn attempt_save(&mut self) {
        match self.save_to_current() {
            Ok(()) => {
                self.is_dirty = false;
            }
            Err(err) => {
                self.show_error("Failed", format!("Failed to save. {err}"));
            }
        }
    }

    fn save_to_current(&self) -> Result<()> {
        let Some(path) = &self.file_name else {
            return Err(DesignerError::GenericError(
                "no file name has been chosen".to_owned(),
            ));
        };

        let contents = script::generate_script(&self.tree);
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Replace the whole session with the contents of a designer script. The
    /// prior tree, selection, and dirty state do not survive; this is a
    /// wholesale replacement, not a merge.
    pub fn load_from(&mut self, path: &Path) -> Result<()> {
        if path.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXTENSION) {
            return Err(DesignerError::GenericError(format!(
                "'{}' is not a .{FILE_EXTENSION} designer file",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path)?;
        let tree = script::load_script(&contents)?;

        self.tree = tree;
        self.selected = None;
        self.is_dirty = false;
        self.property_index = 0;
        self.controls_index = 0;
        self.widget_frames.clear();
        self.file_name = Some(path.to_owned());
        Ok(())
    }

    pub fn show_error(&mut self, title: &str, message: String) {
        self.current_dialog = Some(Dialog::Error(ErrorDialogState {
            title: title.to_owned(),
            message,
        }));
    }

    // ------------------------------------------------------------------
    // Key handling
    // ------------------------------------------------------------------

    pub fn on_up_key(&mut self) {
        if let Some(dialog) = &mut self.current_dialog {
            match dialog {
                Dialog::PosEditor(state) => {
                    state.kind_index = state.kind_index.saturating_sub(1);
                }
                Dialog::EnumEditor(state) => {
                    state.index = state.index.saturating_sub(1);
                }
                Dialog::File(state) => {
                    if !state.entries.is_empty() {
                        state.entry_index = state.entry_index.saturating_sub(1);
                        state.input = state.entries[state.entry_index].clone();
                    }
                }
                _ => {}
            }
            return;
        }

        match self.focused_panel {
            Panel::Toolbox => self.toolbox_index = self.toolbox_index.saturating_sub(1),
            Panel::Properties => self.property_index = self.property_index.saturating_sub(1),
            Panel::Controls => self.controls_index = self.controls_index.saturating_sub(1),
            Panel::Surface => self.nudge_selected(0, -1),
        }
    }

    pub fn on_down_key(&mut self) {
        if let Some(dialog) = &mut self.current_dialog {
            match dialog {
                Dialog::PosEditor(state) => {
                    state.kind_index = (state.kind_index + 1).min(crate::constraints::PosKind::ALL.len() - 1);
                }
                Dialog::EnumEditor(state) => {
                    state.index = (state.index + 1).min(state.choices.len().saturating_sub(1));
                }
                Dialog::File(state) => {
                    if !state.entries.is_empty() {
                        state.entry_index = (state.entry_index + 1).min(state.entries.len() - 1);
                        state.input = state.entries[state.entry_index].clone();
                    }
                }
                _ => {}
            }
            return;
        }

        match self.focused_panel {
            Panel::Toolbox => {
                self.toolbox_index = (self.toolbox_index + 1).min(WidgetKind::ALL.len() - 1);
            }
            Panel::Properties => {
                let rows = self.property_rows().len();
                self.property_index = (self.property_index + 1).min(rows.saturating_sub(1));
            }
            Panel::Controls => {
                let rows = self.tree.registry().len();
                self.controls_index = (self.controls_index + 1).min(rows.saturating_sub(1));
            }
            Panel::Surface => self.nudge_selected(0, 1),
        }
    }

    pub fn on_left_key(&mut self) {
        if let Some(dialog) = &mut self.current_dialog {
            match dialog {
                Dialog::DimEditor(state) => {
                    state.kind_index = state.kind_index.saturating_sub(1);
                }
                Dialog::PosEditor(state) => {
                    if state.kind().needs_target() {
                        state.view_index = state.view_index.saturating_sub(1);
                    }
                }
                _ => {}
            }
            return;
        }

        if self.focused_panel == Panel::Surface {
            self.nudge_selected(-1, 0);
        }
    }

    pub fn on_right_key(&mut self) {
        if let Some(dialog) = &mut self.current_dialog {
            match dialog {
                Dialog::DimEditor(state) => {
                    state.kind_index =
                        (state.kind_index + 1).min(crate::constraints::DimKind::ALL.len() - 1);
                }
                Dialog::PosEditor(state) => {
                    if state.kind().needs_target() {
                        state.view_index =
                            (state.view_index + 1).min(state.views.len().saturating_sub(1));
                    }
                }
                _ => {}
            }
            return;
        }

        if self.focused_panel == Panel::Surface {
            self.nudge_selected(1, 0);
        }
    }

    pub fn on_char(&mut self, caught_char: char) {
        let Some(dialog) = &mut self.current_dialog else {
            return;
        };

        match dialog {
            Dialog::PosEditor(state) => {
                if state.focus == DialogFocus::Body && state.kind().needs_value() {
                    state.value.push(caught_char);
                }
            }
            Dialog::DimEditor(state) => {
                if state.focus == DialogFocus::Body && state.kind().needs_value() {
                    state.value.push(caught_char);
                }
            }
            Dialog::TextEditor(state) => {
                if state.focus == DialogFocus::Body {
                    state.value.push(caught_char);
                }
            }
            Dialog::StringListEditor(state) => {
                if state.focus == DialogFocus::Body {
                    state.text.push(caught_char);
                }
            }
            Dialog::File(state) => {
                if state.focus == DialogFocus::Body {
                    state.input.push(caught_char);
                }
            }
            _ => {}
        }
    }

    pub fn on_backspace(&mut self) {
        let Some(dialog) = &mut self.current_dialog else {
            return;
        };

        match dialog {
            Dialog::PosEditor(state) => {
                state.value.pop();
            }
            Dialog::DimEditor(state) => {
                state.value.pop();
            }
            Dialog::TextEditor(state) => {
                state.value.pop();
            }
            Dialog::StringListEditor(state) => {
                state.text.pop();
            }
            Dialog::File(state) => {
                state.input.pop();
            }
            _ => {}
        }
    }

    pub fn on_tab(&mut self) {
        if let Some(dialog) = &mut self.current_dialog {
            if let Some(focus) = dialog_focus_mut(dialog) {
                *focus = focus.next();
            }
            return;
        }

        self.focused_panel = self.focused_panel.next();
    }

    pub fn on_esc(&mut self) {
        if self.current_dialog.is_some() {
            self.cancel_dialog();
        }
    }

    pub fn on_enter(&mut self) {
        if let Some(dialog) = &self.current_dialog {
            match dialog_focus(dialog) {
                DialogFocus::Cancel => self.cancel_dialog(),
                DialogFocus::Ok => self.confirm_dialog(),
                DialogFocus::Body => {
                    // In the multi-line editor Enter is a line break; reach Ok
                    // with Tab. Everywhere else Enter confirms directly.
                    if let Some(Dialog::StringListEditor(state)) = &mut self.current_dialog {
                        state.text.push('\n');
                    } else {
                        self.confirm_dialog();
                    }
                }
            }
            return;
        }

        match self.focused_panel {
            Panel::Toolbox => self.toolbox_activate(),
            Panel::Properties => self.properties_activate(),
            Panel::Controls => self.controls_activate(),
            Panel::Surface => {}
        }
    }

    pub fn on_delete_key(&mut self) {
        if self.current_dialog.is_none() {
            self.delete_selected();
        }
    }

    // ------------------------------------------------------------------
    // Dialog confirm/cancel
    // ------------------------------------------------------------------

    pub fn cancel_dialog(&mut self) {
        self.current_dialog = None;
    }

    /// Apply the open dialog's change and close it. Editors whose input fails
    /// to parse close without touching the widget.
    pub fn confirm_dialog(&mut self) {
        let Some(dialog) = self.current_dialog.take() else {
            return;
        };

        match dialog {
            Dialog::PosEditor(state) => {
                if let Some(pos) = state.make_pos() {
                    if let Some(node) = self.tree.get_mut(&state.widget) {
                        match state.target {
                            PropTarget::X => node.x = pos,
                            PropTarget::Y => node.y = pos,
                            _ => {}
                        }
                        self.set_dirty();
                    }
                }
            }
            Dialog::DimEditor(state) => {
                if let Some(dim) = state.make_dim() {
                    if let Some(node) = self.tree.get_mut(&state.widget) {
                        match state.target {
                            PropTarget::Width => node.width = dim,
                            PropTarget::Height => node.height = dim,
                            _ => {}
                        }
                        self.set_dirty();
                    }
                }
            }
            Dialog::EnumEditor(state) => {
                if let PropTarget::Prop(name) = state.target {
                    if let Some(node) = self.tree.get_mut(&state.widget) {
                        node.props.insert(
                            name,
                            PropertyValue::Enum {
                                choices: state.choices,
                                index: state.index,
                            },
                        );
                        self.set_dirty();
                    }
                }
            }
            Dialog::TextEditor(state) => {
                if let PropTarget::Prop(name) = state.target {
                    let Some(kind) = self
                        .tree
                        .get(&state.widget)
                        .and_then(|node| node.kind.spec(name))
                        .map(|spec| spec.kind)
                    else {
                        return;
                    };

                    let value = match kind {
                        PropertyKind::Text => Some(PropertyValue::Text(state.value.clone())),
                        // A numeric field that fails to parse refuses the
                        // edit rather than applying a default.
                        PropertyKind::Number => state
                            .value
                            .trim()
                            .parse::<f32>()
                            .ok()
                            .map(PropertyValue::Number),
                        _ => None,
                    };

                    if let Some(value) = value {
                        if let Some(node) = self.tree.get_mut(&state.widget) {
                            node.props.insert(name, value);
                            self.set_dirty();
                        }
                    }
                }
            }
            Dialog::StringListEditor(state) => {
                if let PropTarget::Prop(name) = state.target {
                    let Some(kind) = self
                        .tree
                        .get(&state.widget)
                        .and_then(|node| node.kind.spec(name))
                        .map(|spec| spec.kind)
                    else {
                        return;
                    };

                    let entries = state.entries();
                    let value = match kind {
                        PropertyKind::StringList => Some(PropertyValue::StringList(entries)),
                        PropertyKind::ItemList => Some(PropertyValue::ItemList(entries)),
                        _ => None,
                    };

                    if let Some(value) = value {
                        if let Some(node) = self.tree.get_mut(&state.widget) {
                            node.props.insert(name, value);
                            self.set_dirty();
                        }
                    }
                }
            }
            Dialog::EventEditor(_) => {
                self.set_dirty();
            }
            Dialog::File(state) => {
                let path = state.chosen_path();
                match state.mode {
                    FileDialogMode::Save => {
                        self.file_name = Some(path);
                        self.attempt_save();
                    }
                    FileDialogMode::Open => {
                        if let Err(err) = self.load_from(&path) {
                            self.show_error(
                                "Failed",
                                format!("Failed to load Window: {err}"),
                            );
                        }
                    }
                }
            }
            Dialog::Error(_) => {}
        }
    }
}

fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// The list row at screen row `y` inside a bordered panel, if any.
fn row_in(rect: Rect, y: u16) -> Option<usize> {
    (y > rect.y && y + 1 < rect.y + rect.height).then(|| usize::from(y - rect.y - 1))
}

fn dialog_focus(dialog: &Dialog) -> DialogFocus {
    match dialog {
        Dialog::PosEditor(state) => state.focus,
        Dialog::DimEditor(state) => state.focus,
        Dialog::EnumEditor(state) => state.focus,
        Dialog::TextEditor(state) => state.focus,
        Dialog::StringListEditor(state) => state.focus,
        Dialog::EventEditor(state) => state.focus,
        Dialog::File(state) => state.focus,
        Dialog::Error(_) => DialogFocus::Ok,
    }
}

fn dialog_focus_mut(dialog: &mut Dialog) -> Option<&mut DialogFocus> {
    match dialog {
        Dialog::PosEditor(state) => Some(&mut state.focus),
        Dialog::DimEditor(state) => Some(&mut state.focus),
        Dialog::EnumEditor(state) => Some(&mut state.focus),
        Dialog::TextEditor(state) => Some(&mut state.focus),
        Dialog::StringListEditor(state) => Some(&mut state.focus),
        Dialog::EventEditor(state) => Some(&mut state.focus),
        Dialog::File(state) => Some(&mut state.focus),
        Dialog::Error(_) => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constraints::Dim;

    fn app_with_button() -> App {
        let mut app = App::new();
        let node = app.create_widget(WidgetKind::Button);
        app.add_widget(node);
        app
    }

    #[test]
    fn dirty_flag_lifecycle() {
        let mut app = App::new();
        assert!(!app.is_dirty);

        let node = app.create_widget(WidgetKind::Button);
        assert!(app.is_dirty);

        app.is_dirty = false;
        app.add_widget(node);
        assert!(app.is_dirty);

        app.is_dirty = false;
        app.select("View0");
        assert!(!app.is_dirty, "selection alone is not a mutation");

        app.move_selected(4, 5);
        assert!(app.is_dirty);

        app.is_dirty = false;
        app.remove_widget("View0");
        assert!(app.is_dirty);
    }

    #[test]
    fn move_selected_clamps_to_zero() {
        let mut app = app_with_button();
        app.select("View0");
        app.move_selected(-5, -9);

        let node = app.tree.get("View0").unwrap();
        assert_eq!(node.x, Pos::At(0));
        assert_eq!(node.y, Pos::At(0));
    }

    #[test]
    fn move_selected_overwrites_constraint_kinds() {
        let mut app = app_with_button();
        app.tree.get_mut("View0").unwrap().x = Pos::AnchorEnd;
        app.select("View0");
        app.move_selected(7, 2);

        let node = app.tree.get("View0").unwrap();
        assert_eq!(node.x, Pos::At(7));
        assert_eq!(node.y, Pos::At(2));
    }

    #[test]
    fn root_is_never_moved_or_deleted() {
        let mut app = app_with_button();
        app.select("Window");
        app.move_selected(5, 5);
        assert_eq!(app.tree.get("Window").unwrap().x, Pos::At(0));

        app.delete_selected();
        assert_eq!(app.tree.len(), 2);
        assert_eq!(app.selected.as_deref(), Some("Window"));
    }

    #[test]
    fn deleting_selection_clears_it() {
        let mut app = app_with_button();
        app.select("View0");
        app.delete_selected();

        assert_eq!(app.selected, None);
        assert!(!app.tree.contains("View0"));
        assert_eq!(app.tree.registry(), vec!["Window".to_owned()]);
    }

    #[test]
    fn selecting_unknown_ids_is_ignored() {
        let mut app = app_with_button();
        app.select("View0");
        app.select("View99");
        assert_eq!(app.selected.as_deref(), Some("View0"));
    }

    #[test]
    fn confirming_pos_editor_applies_the_constraint() {
        let mut app = app_with_button();
        app.select("View0");
        app.open_editor(PropTarget::X);

        let Some(Dialog::PosEditor(state)) = &mut app.current_dialog else {
            panic!("expected the position editor");
        };
        state.value = "12".to_owned();
        app.is_dirty = false;
        app.confirm_dialog();

        assert_eq!(app.tree.get("View0").unwrap().x, Pos::At(12));
        assert!(app.is_dirty);
        assert!(app.current_dialog.is_none());
    }

    #[test]
    fn non_numeric_editor_input_leaves_the_widget_alone() {
        let mut app = app_with_button();
        app.select("View0");
        app.open_editor(PropTarget::Width);

        let Some(Dialog::DimEditor(state)) = &mut app.current_dialog else {
            panic!("expected the size editor");
        };
        state.value = "banana".to_owned();
        app.is_dirty = false;
        app.confirm_dialog();

        assert_eq!(app.tree.get("View0").unwrap().width, Dim::Sized(10));
        assert!(!app.is_dirty);
    }

    #[test]
    fn cancelling_never_mutates() {
        let mut app = app_with_button();
        app.select("View0");
        app.open_editor(PropTarget::X);
        app.is_dirty = false;
        app.cancel_dialog();

        assert_eq!(app.tree.get("View0").unwrap().x, Pos::At(0));
        assert!(!app.is_dirty);
        assert!(app.current_dialog.is_none());
    }

    #[test]
    fn event_editor_only_marks_dirty() {
        let mut app = app_with_button();
        app.select("View0");
        let before = app.tree.get("View0").cloned().unwrap();

        app.current_dialog = Some(Dialog::EventEditor(EventEditorState {
            title: "Clicked".to_owned(),
            focus: DialogFocus::Ok,
        }));
        app.is_dirty = false;
        app.confirm_dialog();

        assert!(app.is_dirty);
        assert_eq!(app.tree.get("View0").unwrap(), &before);
    }

    #[test]
    fn toggling_a_bool_row_flips_in_place() {
        let mut app = app_with_button();
        app.select("View0");

        let rows = app.property_rows();
        let visible_row = rows
            .iter()
            .position(|row| row.label == "Visible")
            .unwrap();
        app.property_index = visible_row;
        app.is_dirty = false;
        app.properties_activate();

        assert_eq!(
            app.tree.get("View0").unwrap().props.get("Visible"),
            Some(&PropertyValue::Bool(false))
        );
        assert!(app.is_dirty);
    }

    #[test]
    fn property_rows_start_with_layout_fields() {
        let mut app = app_with_button();
        app.select("View0");

        let rows = app.property_rows();
        let labels: Vec<&str> = rows.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(
            &labels[..5],
            &["Id", "X", "Y", "Width", "Height"],
            "layout fields lead the panel"
        );
        assert!(labels.contains(&"Text"));
        assert!(labels.contains(&"Clicked"));
    }

    #[test]
    fn nudges_move_one_cell_and_clamp() {
        let mut app = app_with_button();
        app.select("View0");
        app.nudge_selected(1, 0);
        assert_eq!(app.tree.get("View0").unwrap().x, Pos::At(1));

        app.nudge_selected(-1, 0);
        app.nudge_selected(-1, 0);
        assert_eq!(app.tree.get("View0").unwrap().x, Pos::At(0));
    }

    #[test]
    fn drag_protocol_moves_the_selected_widget() {
        let mut app = app_with_button();
        app.select("View0");
        app.focused_panel = Panel::Surface;
        app.panel_rects.surface = Rect::new(20, 2, 40, 20);
        app.widget_frames
            .insert("View0".to_owned(), Rect::new(22, 5, 10, 1));

        // A press inside the selected widget's frame begins the drag.
        app.on_left_mouse_down(25, 5);
        assert!(app.is_dragging());

        // Drag coordinates are surface-relative.
        app.on_mouse_drag(30, 8);
        let node = app.tree.get("View0").unwrap();
        assert_eq!(node.x, Pos::At(10));
        assert_eq!(node.y, Pos::At(6));

        app.on_left_mouse_up();
        assert!(!app.is_dragging());
    }

    #[test]
    fn pressing_an_unselected_widget_selects_instead_of_dragging() {
        let mut app = app_with_button();
        let node = app.create_widget(WidgetKind::Label);
        app.add_widget(node);
        app.select("View0");
        app.panel_rects.surface = Rect::new(20, 2, 40, 20);
        app.widget_frames
            .insert("View0".to_owned(), Rect::new(22, 5, 10, 1));
        app.widget_frames
            .insert("View1".to_owned(), Rect::new(22, 9, 5, 1));

        app.on_left_mouse_down(23, 9);
        assert!(!app.is_dragging());
        assert_eq!(app.selected.as_deref(), Some("View1"));
    }

    #[test]
    fn the_root_is_never_draggable() {
        let mut app = app_with_button();
        app.select("Window");
        app.panel_rects.surface = Rect::new(20, 2, 40, 20);
        app.widget_frames
            .insert("Window".to_owned(), Rect::new(20, 2, 40, 20));

        app.on_left_mouse_down(30, 10);
        assert!(!app.is_dragging());
    }

    #[test]
    fn failed_save_keeps_the_dirty_flag() {
        let mut app = app_with_button();
        app.file_name = Some(PathBuf::from("/definitely/not/a/real/dir/layout.tui"));
        assert!(app.is_dirty);
        app.attempt_save();

        assert!(app.is_dirty);
        assert!(matches!(app.current_dialog, Some(Dialog::Error(_))));
    }
}
