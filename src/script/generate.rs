//! Turning the widget tree into a designer script.
//!
//! Generation is depth-first and pre-order: a widget's construction
//! statement, its `Id`, its layout constraints, its remaining writable
//! properties, then its children - each child followed by the `Add` that
//! attaches it. The script ends with a bare expression yielding the root.

use itertools::Itertools;

use crate::{
    app::tree::{WidgetNode, WidgetTree},
    constants::SKIPPED_PROPERTIES,
    widgets::properties::PropertyValue,
};

pub fn generate_script(tree: &WidgetTree) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# This file was generated by tuiforge {}\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Manually editing this file may result in issues with the designer\n");

    let Some(root) = tree.get(tree.root_id()) else {
        return out;
    };

    // The root always round-trips as a full-screen frame, whatever its
    // stored constraints say.
    let id = &root.id;
    let title = match root.props.get("Title") {
        Some(PropertyValue::Text(title)) => title.as_str(),
        _ => id.as_str(),
    };
    out.push_str(&format!("{id} = FrameView::new()\n"));
    out.push_str(&format!("{id}.Id = '{}'\n", escape(id)));
    out.push_str(&format!("{id}.Title = '{}'\n", escape(title)));
    out.push_str(&format!("{id}.X = Pos::At(0)\n"));
    out.push_str(&format!("{id}.Y = Pos::At(0)\n"));
    out.push_str(&format!("{id}.Width = Dim::Fill()\n"));
    out.push_str(&format!("{id}.Height = Dim::Fill()\n"));
    write_properties(root, &["Title"], &mut out);
    write_subviews(tree, root, &mut out);

    out.push_str(&format!("{id}\n"));
    out
}

fn write_view(tree: &WidgetTree, view: &WidgetNode, out: &mut String) {
    let id = &view.id;
    out.push_str(&format!("{id} = {}::new()\n", view.kind.name()));
    out.push_str(&format!("{id}.Id = '{}'\n", escape(id)));
    out.push_str(&format!("{id}.X = {}\n", view.x));
    out.push_str(&format!("{id}.Y = {}\n", view.y));
    out.push_str(&format!("{id}.Width = {}\n", view.width));
    out.push_str(&format!("{id}.Height = {}\n", view.height));
    write_properties(view, &[], out);
    write_subviews(tree, view, out);
}

fn write_subviews(tree: &WidgetTree, view: &WidgetNode, out: &mut String) {
    // Only containers serialize children; a choice list's entries are a
    // property, not a subtree.
    if !view.kind.is_container() {
        return;
    }

    for child_id in &view.children {
        if let Some(child) = tree.get(child_id) {
            write_view(tree, child, out);
            out.push_str(&format!("{}.Add({child_id})\n", view.id));
        }
    }
}

fn write_properties(view: &WidgetNode, also_skipped: &[&str], out: &mut String) {
    let left = &view.id;
    for spec in view.specs() {
        if SKIPPED_PROPERTIES.contains(&spec.name) || also_skipped.contains(&spec.name) {
            continue;
        }
        let Some(value) = view.props.get(spec.name) else {
            continue;
        };

        let encoded = match value {
            PropertyValue::Text(text) => format!("'{}'", escape(text)),
            PropertyValue::Bool(value) => value.to_string(),
            PropertyValue::Enum { .. } => {
                format!("'{}'", value.enum_symbol().unwrap_or_default())
            }
            PropertyValue::StringList(lines) | PropertyValue::ItemList(lines) => {
                format!(
                    "[{}]",
                    lines
                        .iter()
                        .map(|line| format!("'{}'", escape(line)))
                        .join(", ")
                )
            }
            PropertyValue::Number(value) => value.to_string(),
        };

        out.push_str(&format!("{left}.{} = {encoded}\n", spec.name));
    }
}

/// Escape a string for a single-quoted script literal.
pub(super) fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "\\n")
}
