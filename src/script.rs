//! The bidirectional mapping between the live widget tree and a designer
//! script: [`generate::generate_script`] walks the tree and emits one
//! statement per widget and property; [`load::load_script`] executes a script
//! and installs the result as the new tree.

pub mod generate;
pub mod load;

pub use generate::generate_script;
pub use load::load_script;

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        app::tree::{WidgetNode, WidgetTree},
        constraints::{Dim, Pos, Side},
        utils::error::DesignerError,
        widgets::{properties::PropertyValue, WidgetKind},
    };

    fn scenario_tree() -> WidgetTree {
        let mut tree = WidgetTree::new();

        let mut button = WidgetNode::with_defaults(tree.alloc_id(), WidgetKind::Button);
        button.x = Pos::At(2);
        button.y = Pos::At(3);
        button.width = Dim::Sized(10);
        button.height = Dim::Sized(1);
        tree.insert_under_root(button);

        let mut list = WidgetNode::with_defaults(tree.alloc_id(), WidgetKind::ListView);
        list.x = Pos::AnchorEnd;
        list.y = Pos::At(0);
        list.width = Dim::Percent(0.25);
        list.height = Dim::Fill;
        tree.insert_under_root(list);

        tree
    }

    #[test]
    fn save_then_load_reproduces_the_tree() {
        let tree = scenario_tree();
        let script = generate_script(&tree);
        let loaded = load_script(&script).unwrap();

        assert_eq!(loaded.registry(), ["Window", "View0", "View1"]);

        let button = loaded.get("View0").unwrap();
        assert_eq!(button.kind, WidgetKind::Button);
        assert_eq!(button.x, Pos::At(2));
        assert_eq!(button.y, Pos::At(3));
        assert_eq!(button.width, Dim::Sized(10));
        assert_eq!(button.height, Dim::Sized(1));
        assert_eq!(
            button.props.get("Text"),
            Some(&PropertyValue::Text("Button".to_owned()))
        );

        let list = loaded.get("View1").unwrap();
        assert_eq!(list.kind, WidgetKind::ListView);
        assert_eq!(list.x, Pos::AnchorEnd);
        assert_eq!(list.width, Dim::Percent(0.25));
        assert_eq!(list.height, Dim::Fill);
    }

    #[test]
    fn the_generated_script_has_the_expected_statements() {
        let script = generate_script(&scenario_tree());

        for expected in [
            "Window = FrameView::new()",
            "Window.Id = 'Window'",
            "Window.Title = 'Window'",
            "Window.Width = Dim::Fill()",
            "View0 = Button::new()",
            "View0.X = Pos::At(2)",
            "View0.Text = 'Button'",
            "Window.Add(View0)",
            "View1.Width = Dim::Percent(0.25)",
            "Window.Add(View1)",
        ] {
            assert!(
                script.lines().any(|line| line == expected),
                "missing '{expected}' in:\n{script}"
            );
        }

        assert_eq!(script.lines().last(), Some("Window"));
    }

    #[test]
    fn edge_relative_constraints_round_trip() {
        let mut tree = scenario_tree();
        tree.get_mut("View1").unwrap().x = Pos::Edge(Side::Right, "View0".to_owned());
        tree.get_mut("View1").unwrap().y = Pos::Edge(Side::Bottom, "View0".to_owned());

        let loaded = load_script(&generate_script(&tree)).unwrap();
        let list = loaded.get("View1").unwrap();
        assert_eq!(list.x, Pos::Edge(Side::Right, "View0".to_owned()));
        assert_eq!(list.y, Pos::Edge(Side::Bottom, "View0".to_owned()));
    }

    #[test]
    fn string_lists_and_enums_round_trip() {
        let mut tree = WidgetTree::new();
        let mut radios = WidgetNode::with_defaults(tree.alloc_id(), WidgetKind::RadioGroup);
        radios.props.insert(
            "RadioLabels",
            PropertyValue::StringList(vec!["Quote'd".to_owned(), "Two, too".to_owned()]),
        );
        let display_mode = crate::widgets::properties::enum_from_symbol(
            crate::widgets::DISPLAY_MODES,
            "Horizontal",
        )
        .unwrap();
        radios.props.insert("DisplayMode", display_mode);
        tree.insert_under_root(radios);

        let loaded = load_script(&generate_script(&tree)).unwrap();
        let radios = loaded.get("View0").unwrap();
        assert_eq!(
            radios.props.get("RadioLabels"),
            Some(&PropertyValue::StringList(vec![
                "Quote'd".to_owned(),
                "Two, too".to_owned()
            ]))
        );
        assert_eq!(
            radios.props.get("DisplayMode").unwrap().enum_symbol(),
            Some("Horizontal")
        );
    }

    #[test]
    fn nested_containers_round_trip_in_pre_order() {
        let mut tree = WidgetTree::new();
        let frame_id = tree.alloc_id();
        tree.insert_under_root(WidgetNode::with_defaults(frame_id, WidgetKind::FrameView));

        // Splice a label under the nested frame at the script level; the
        // loader has to rebuild the deeper structure itself.
        let script = generate_script(&tree).replace(
            "Window.Add(View0)",
            "View1 = Label::new()\nView1.Id = 'View1'\nView0.Add(View1)\nWindow.Add(View0)",
        );

        let loaded = load_script(&script).unwrap();
        assert_eq!(loaded.get("View0").unwrap().children, ["View1"]);
        assert_eq!(
            loaded.get("View1").unwrap().parent.as_deref(),
            Some("View0")
        );
        // The registry stays flat: the root and its direct children only.
        assert_eq!(loaded.registry(), ["Window", "View0"]);
    }

    #[test]
    fn dangling_edge_references_fail_to_load() {
        let mut tree = scenario_tree();
        tree.get_mut("View0").unwrap().x = Pos::Edge(Side::Left, "Ghost".to_owned());

        let err = load_script(&generate_script(&tree)).unwrap_err();
        assert_eq!(err, DesignerError::UnknownReference("Ghost".to_owned()));
    }

    #[test]
    fn errors_carry_the_line_number() {
        let err = load_script("Window = FrameView::new()\nWindow.Wat = 3\nWindow").unwrap_err();
        assert_eq!(
            err,
            DesignerError::script(2, "'Wat' is not a property of FrameView")
        );

        let err = load_script("View9 = Carousel::new()").unwrap_err();
        assert_eq!(
            err,
            DesignerError::script(1, "'Carousel' is not a known widget kind")
        );
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let script = "# a comment\n\nWindow = FrameView::new()\nWindow\n";
        assert!(load_script(script).is_ok());
    }

    #[test]
    fn bare_numbers_coerce_to_layout_constraints() {
        let script = "Window = FrameView::new()\nWindow.X = 0\nWindow.Width = 20\nWindow\n";
        let loaded = load_script(script).unwrap();
        let root = loaded.get("Window").unwrap();
        assert_eq!(root.x, Pos::At(0));
        assert_eq!(root.width, Dim::Sized(20));
    }

    #[test]
    fn a_script_without_a_root_expression_is_an_error() {
        let err = load_script("Window = FrameView::new()").unwrap_err();
        assert!(matches!(err, DesignerError::GenericError(_)));
    }

    #[test]
    fn next_id_continues_past_loaded_widgets() {
        let mut loaded = load_script(&generate_script(&scenario_tree())).unwrap();
        assert_eq!(loaded.alloc_id(), "View2");
    }
}
