//! The closed property model.
//!
//! Instead of reflecting over arbitrary widget fields, every editable property
//! belongs to one of a small set of kinds, and each widget kind declares a
//! static schema of `(name, kind)` pairs. The editor for a property is chosen
//! by its kind, never by runtime type inspection.

use itertools::Itertools;

/// The kind of a property, which decides both its script encoding and which
/// editor dialog opens for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    /// A single line of text, edited in place through the text dialog.
    Text,
    /// A flag, toggled directly from the property panel.
    Bool,
    /// One of a fixed set of symbols.
    Enum(&'static [&'static str]),
    /// An ordered list of lines (e.g. radio labels, multi-line text).
    StringList,
    /// The entries of a choice-style widget. Items are a property, never a
    /// child subtree.
    ItemList,
    /// A bare numeric value.
    Number,
}

/// A static property declaration on a widget kind.
#[derive(Clone, Copy, Debug)]
pub struct PropertySpec {
    pub name: &'static str,
    pub kind: PropertyKind,
}

impl PropertySpec {
    pub const fn new(name: &'static str, kind: PropertyKind) -> Self {
        PropertySpec { name, kind }
    }
}

/// A property value carried on a widget node.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Bool(bool),
    Enum {
        choices: &'static [&'static str],
        index: usize,
    },
    StringList(Vec<String>),
    ItemList(Vec<String>),
    Number(f32),
}

impl PropertyValue {
    /// The value as shown in the property panel.
    pub fn display(&self) -> String {
        match self {
            PropertyValue::Text(text) => text.clone(),
            PropertyValue::Bool(value) => {
                if *value {
                    "[x]".to_owned()
                } else {
                    "[ ]".to_owned()
                }
            }
            PropertyValue::Enum { choices, index } => {
                choices.get(*index).copied().unwrap_or_default().to_owned()
            }
            PropertyValue::StringList(lines) | PropertyValue::ItemList(lines) => {
                lines.iter().join(",")
            }
            PropertyValue::Number(value) => value.to_string(),
        }
    }

    /// The symbolic name of an enum value, if this is one.
    pub fn enum_symbol(&self) -> Option<&'static str> {
        match self {
            PropertyValue::Enum { choices, index } => choices.get(*index).copied(),
            _ => None,
        }
    }
}

/// Build an enum value from a symbol, validating it against the choices.
pub fn enum_from_symbol(
    choices: &'static [&'static str], symbol: &str,
) -> Option<PropertyValue> {
    choices
        .iter()
        .position(|choice| *choice == symbol)
        .map(|index| PropertyValue::Enum { choices, index })
}

#[cfg(test)]
mod test {
    use super::*;

    const ALIGNMENTS: &[&str] = &["Left", "Right", "Centered", "Justified"];

    #[test]
    fn enum_symbols_round_trip() {
        let value = enum_from_symbol(ALIGNMENTS, "Centered").unwrap();
        assert_eq!(value.enum_symbol(), Some("Centered"));
        assert_eq!(value.display(), "Centered");
    }

    #[test]
    fn unknown_enum_symbols_are_rejected() {
        assert_eq!(enum_from_symbol(ALIGNMENTS, "Sideways"), None);
    }

    #[test]
    fn list_display_is_comma_joined() {
        let value = PropertyValue::ItemList(vec!["Item1".to_owned(), "Item2".to_owned()]);
        assert_eq!(value.display(), "Item1,Item2");
    }
}
