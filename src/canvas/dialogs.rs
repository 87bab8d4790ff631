pub mod dim_editor;
pub mod enum_editor;
pub mod error_dialog;
pub mod event_editor;
pub mod file_dialog;
pub mod pos_editor;
pub mod text_editors;

use tui::Frame;

use crate::{app::dialogs::Dialog, app::App, canvas::Painter};

impl Painter {
    /// Draw whichever modal dialog is open, over a cleared centered rect.
    pub fn draw_dialog(&self, f: &mut Frame<'_>, app: &App) {
        let Some(dialog) = &app.current_dialog else {
            return;
        };

        match dialog {
            Dialog::PosEditor(state) => self.draw_pos_editor(f, state),
            Dialog::DimEditor(state) => self.draw_dim_editor(f, state),
            Dialog::EnumEditor(state) => self.draw_enum_editor(f, state),
            Dialog::TextEditor(state) => self.draw_text_editor(f, state),
            Dialog::StringListEditor(state) => self.draw_string_list_editor(f, state),
            Dialog::EventEditor(state) => self.draw_event_editor(f, state),
            Dialog::File(state) => self.draw_file_dialog(f, state),
            Dialog::Error(state) => self.draw_error_dialog(f, state),
        }
    }
}
