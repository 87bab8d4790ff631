//! The widget catalog: every kind of widget the designer can place, its
//! defaults, its property schema, and its events.

pub mod properties;

use properties::{PropertyKind, PropertySpec};

/// Symbolic values for `Label::TextAlignment`.
pub const TEXT_ALIGNMENTS: &[&str] = &["Left", "Right", "Centered", "Justified"];

/// Symbolic values for `RadioGroup::DisplayMode`.
pub const DISPLAY_MODES: &[&str] = &["Vertical", "Horizontal"];

/// The closed set of widget kinds the designer knows how to place, configure,
/// and serialize. The root window is a [`WidgetKind::FrameView`] with the
/// reserved id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetKind {
    Button,
    CheckBox,
    ComboBox,
    FrameView,
    Label,
    ListView,
    ProgressBar,
    RadioGroup,
    TextField,
    TextView,
}

impl WidgetKind {
    /// Every kind, in the order the toolbox lists them.
    pub const ALL: [WidgetKind; 10] = [
        WidgetKind::Button,
        WidgetKind::CheckBox,
        WidgetKind::ComboBox,
        WidgetKind::FrameView,
        WidgetKind::Label,
        WidgetKind::ListView,
        WidgetKind::ProgressBar,
        WidgetKind::RadioGroup,
        WidgetKind::TextField,
        WidgetKind::TextView,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WidgetKind::Button => "Button",
            WidgetKind::CheckBox => "CheckBox",
            WidgetKind::ComboBox => "ComboBox",
            WidgetKind::FrameView => "FrameView",
            WidgetKind::Label => "Label",
            WidgetKind::ListView => "ListView",
            WidgetKind::ProgressBar => "ProgressBar",
            WidgetKind::RadioGroup => "RadioGroup",
            WidgetKind::TextField => "TextField",
            WidgetKind::TextView => "TextView",
        }
    }

    pub fn from_name(name: &str) -> Option<WidgetKind> {
        WidgetKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Container kinds may hold child widgets; everything else is a leaf.
    pub fn is_container(self) -> bool {
        matches!(self, WidgetKind::FrameView)
    }

    /// The static property schema for this kind. `X`/`Y`/`Width`/`Height` and
    /// `Id` are carried on the node itself and are not part of the schema.
    pub fn specs(self) -> &'static [PropertySpec] {
        const BUTTON: &[PropertySpec] = &[
            PropertySpec::new("Text", PropertyKind::Text),
            PropertySpec::new("Visible", PropertyKind::Bool),
        ];
        const CHECKBOX: &[PropertySpec] = &[
            PropertySpec::new("Text", PropertyKind::Text),
            PropertySpec::new("Checked", PropertyKind::Bool),
            PropertySpec::new("Visible", PropertyKind::Bool),
        ];
        const COMBOBOX: &[PropertySpec] = &[
            PropertySpec::new("Items", PropertyKind::ItemList),
            PropertySpec::new("Visible", PropertyKind::Bool),
        ];
        const FRAMEVIEW: &[PropertySpec] = &[
            PropertySpec::new("Title", PropertyKind::Text),
            PropertySpec::new("Visible", PropertyKind::Bool),
        ];
        const LABEL: &[PropertySpec] = &[
            PropertySpec::new("Text", PropertyKind::Text),
            PropertySpec::new("TextAlignment", PropertyKind::Enum(TEXT_ALIGNMENTS)),
            PropertySpec::new("Visible", PropertyKind::Bool),
        ];
        const LISTVIEW: &[PropertySpec] = &[
            PropertySpec::new("Items", PropertyKind::ItemList),
            PropertySpec::new("Visible", PropertyKind::Bool),
        ];
        const PROGRESSBAR: &[PropertySpec] = &[
            PropertySpec::new("Fraction", PropertyKind::Number),
            PropertySpec::new("Visible", PropertyKind::Bool),
        ];
        const RADIOGROUP: &[PropertySpec] = &[
            PropertySpec::new("RadioLabels", PropertyKind::StringList),
            PropertySpec::new("DisplayMode", PropertyKind::Enum(DISPLAY_MODES)),
            PropertySpec::new("Visible", PropertyKind::Bool),
        ];
        const TEXTFIELD: &[PropertySpec] = &[
            PropertySpec::new("Text", PropertyKind::Text),
            PropertySpec::new("Secret", PropertyKind::Bool),
            PropertySpec::new("Visible", PropertyKind::Bool),
        ];
        const TEXTVIEW: &[PropertySpec] = &[
            PropertySpec::new("Text", PropertyKind::StringList),
            PropertySpec::new("Visible", PropertyKind::Bool),
        ];
        match self {
            WidgetKind::Button => BUTTON,
            WidgetKind::CheckBox => CHECKBOX,
            WidgetKind::ComboBox => COMBOBOX,
            WidgetKind::FrameView => FRAMEVIEW,
            WidgetKind::Label => LABEL,
            WidgetKind::ListView => LISTVIEW,
            WidgetKind::ProgressBar => PROGRESSBAR,
            WidgetKind::RadioGroup => RADIOGROUP,
            WidgetKind::TextField => TEXTFIELD,
            WidgetKind::TextView => TEXTVIEW,
        }
    }

    pub fn spec(self, name: &str) -> Option<PropertySpec> {
        self.specs().iter().copied().find(|spec| spec.name == name)
    }

    /// The events the property panel offers an "Edit" placeholder for.
    pub fn events(self) -> &'static [&'static str] {
        match self {
            WidgetKind::Button => &["Clicked"],
            WidgetKind::CheckBox => &["Toggled"],
            WidgetKind::ComboBox => &["SelectedItemChanged"],
            WidgetKind::FrameView => &[],
            WidgetKind::Label => &["Clicked"],
            WidgetKind::ListView => &["SelectedItemChanged", "OpenSelectedItem"],
            WidgetKind::ProgressBar => &[],
            WidgetKind::RadioGroup => &["SelectedItemChanged"],
            WidgetKind::TextField => &["TextChanged"],
            WidgetKind::TextView => &["TextChanged"],
        }
    }
}
