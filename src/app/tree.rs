//! The widget tree: an arena of nodes addressed by stable string id, with
//! parent/child relationships stored as id references. The "flat registry"
//! the panels and pickers work from is a derived view (the root followed by
//! its direct children, in insertion order), so there is no second structure
//! to keep in sync.

use indexmap::IndexMap;

use crate::{
    constants::ROOT_ID,
    constraints::{Dim, Pos},
    widgets::{
        properties::{PropertyValue, PropertySpec},
        WidgetKind, DISPLAY_MODES, TEXT_ALIGNMENTS,
    },
};

/// One widget in the designer's tree.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetNode {
    pub id: String,
    pub kind: WidgetKind,
    pub x: Pos,
    pub y: Pos,
    pub width: Dim,
    pub height: Dim,
    pub props: IndexMap<&'static str, PropertyValue>,
    pub children: Vec<String>,
    pub parent: Option<String>,
}

impl WidgetNode {
    /// Build a node of the given kind with that kind's designer defaults
    /// applied (a text button starts out one line high with the text
    /// "Button", a choice list gets three sample entries, and so on).
    pub fn with_defaults(id: String, kind: WidgetKind) -> Self {
        let mut node = WidgetNode {
            id,
            kind,
            x: Pos::At(0),
            y: Pos::At(0),
            width: Dim::Sized(10),
            height: Dim::Sized(1),
            props: IndexMap::new(),
            children: Vec::new(),
            parent: None,
        };

        match kind {
            WidgetKind::Button => {
                node.set_text("Text", "Button");
            }
            WidgetKind::CheckBox => {
                node.set_text("Text", "CheckBox");
                node.props.insert("Checked", PropertyValue::Bool(false));
                node.width = Dim::Sized(12);
            }
            WidgetKind::ComboBox => {
                node.props
                    .insert("Items", PropertyValue::ItemList(sample_items()));
                node.width = Dim::Sized(15);
            }
            WidgetKind::FrameView => {
                node.set_text("Title", "FrameView");
                node.width = Dim::Sized(25);
                node.height = Dim::Sized(5);
            }
            WidgetKind::Label => {
                node.set_text("Text", "Label");
                node.props.insert(
                    "TextAlignment",
                    PropertyValue::Enum {
                        choices: TEXT_ALIGNMENTS,
                        index: 0,
                    },
                );
                node.width = Dim::Sized(5);
            }
            WidgetKind::ListView => {
                node.props
                    .insert("Items", PropertyValue::ItemList(sample_items()));
                node.width = Dim::Sized(20);
                node.height = Dim::Sized(4);
            }
            WidgetKind::ProgressBar => {
                node.props.insert("Fraction", PropertyValue::Number(0.5));
                node.width = Dim::Sized(25);
            }
            WidgetKind::RadioGroup => {
                node.props
                    .insert("RadioLabels", PropertyValue::StringList(sample_items()));
                node.props.insert(
                    "DisplayMode",
                    PropertyValue::Enum {
                        choices: DISPLAY_MODES,
                        index: 0,
                    },
                );
                node.height = Dim::Sized(3);
            }
            WidgetKind::TextField => {
                node.set_text("Text", "");
                node.props.insert("Secret", PropertyValue::Bool(false));
                node.width = Dim::Sized(15);
            }
            WidgetKind::TextView => {
                node.props.insert("Text", PropertyValue::StringList(vec![]));
                node.width = Dim::Sized(20);
                node.height = Dim::Sized(4);
            }
        }

        node.props.insert("Visible", PropertyValue::Bool(true));
        node
    }

    /// The node every fresh designer session starts from: a frame filling the
    /// whole surface, carrying the reserved root id.
    pub fn root() -> Self {
        let mut node = WidgetNode::with_defaults(ROOT_ID.to_owned(), WidgetKind::FrameView);
        node.set_text("Title", ROOT_ID);
        node.x = Pos::At(0);
        node.y = Pos::At(0);
        node.width = Dim::Fill;
        node.height = Dim::Fill;
        node
    }

    fn set_text(&mut self, name: &'static str, value: &str) {
        self.props
            .insert(name, PropertyValue::Text(value.to_owned()));
    }

    /// The property schema rows for this node, in declaration order.
    pub fn specs(&self) -> &'static [PropertySpec] {
        self.kind.specs()
    }
}

fn sample_items() -> Vec<String> {
    vec!["Item1".to_owned(), "Item2".to_owned(), "Item3".to_owned()]
}

/// The arena holding every widget of the current layout.
#[derive(Clone, Debug)]
pub struct WidgetTree {
    nodes: IndexMap<String, WidgetNode>,
    root: String,
    next_id: usize,
}

impl Default for WidgetTree {
    fn default() -> Self {
        WidgetTree::new()
    }
}

impl WidgetTree {
    /// A fresh tree holding only the root window.
    pub fn new() -> Self {
        let root = WidgetNode::root();
        let mut nodes = IndexMap::new();
        let root_id = root.id.clone();
        nodes.insert(root_id.clone(), root);

        WidgetTree {
            nodes,
            root: root_id,
            next_id: 0,
        }
    }

    /// Rebuild the tree wholesale from loaded nodes. The nodes must already be
    /// linked (root first, children after their parents); the id counter is
    /// re-derived so freshly created widgets never collide with loaded ones.
    pub fn from_loaded(root: String, nodes: IndexMap<String, WidgetNode>) -> Self {
        let next_id = nodes
            .keys()
            .filter_map(|id| id.strip_prefix("View"))
            .filter_map(|n| n.parse::<usize>().ok())
            .map(|n| n + 1)
            .max()
            .unwrap_or(0);

        WidgetTree {
            nodes,
            root,
            next_id,
        }
    }

    pub fn root_id(&self) -> &str {
        &self.root
    }

    pub fn is_root(&self, id: &str) -> bool {
        self.root == id
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&WidgetNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut WidgetNode> {
        self.nodes.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node in insertion order.
    pub fn widgets(&self) -> impl Iterator<Item = &WidgetNode> {
        self.nodes.values()
    }

    /// The flat registry: the root followed by its direct children. This is
    /// what the controls panel and the position editor's reference list show.
    /// Note that a removed-then-re-added widget lands at the end, not at its
    /// old position.
    pub fn registry(&self) -> Vec<String> {
        let mut ids = vec![self.root.clone()];
        if let Some(root) = self.nodes.get(&self.root) {
            ids.extend(root.children.iter().cloned());
        }
        ids
    }

    /// Allocate the next sequential `View{n}` id.
    pub fn alloc_id(&mut self) -> String {
        let id = format!("View{}", self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert a node under the root container. Returns false (a no-op) if a
    /// node with the same id is already registered.
    pub fn insert_under_root(&mut self, mut node: WidgetNode) -> bool {
        if self.nodes.contains_key(&node.id) {
            return false;
        }

        node.parent = Some(self.root.clone());
        let id = node.id.clone();
        self.nodes.insert(id.clone(), node);
        if let Some(root) = self.nodes.get_mut(&self.root.clone()) {
            root.children.push(id);
        }

        true
    }

    /// Remove a node and its entire subtree. Returns false (a no-op) if the
    /// id is absent. The root cannot be removed.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.root == id || !self.nodes.contains_key(id) {
            return false;
        }

        if let Some(parent_id) = self.nodes.get(id).and_then(|node| node.parent.clone()) {
            if let Some(parent) = self.nodes.get_mut(&parent_id) {
                parent.children.retain(|child| child != id);
            }
        }

        let mut doomed = vec![id.to_owned()];
        while let Some(current) = doomed.pop() {
            if let Some(node) = self.nodes.shift_remove(&current) {
                doomed.extend(node.children);
            }
        }

        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fresh_tree_has_only_the_root() {
        let tree = WidgetTree::new();
        assert_eq!(tree.registry(), vec!["Window".to_owned()]);
        assert!(tree.get("Window").is_some());
        assert_eq!(tree.get("Window").unwrap().kind, WidgetKind::FrameView);
    }

    #[test]
    fn ids_are_sequential() {
        let mut tree = WidgetTree::new();
        assert_eq!(tree.alloc_id(), "View0");
        assert_eq!(tree.alloc_id(), "View1");
        assert_eq!(tree.alloc_id(), "View2");
    }

    #[test]
    fn insert_is_a_noop_for_duplicates() {
        let mut tree = WidgetTree::new();
        let id = tree.alloc_id();
        let node = WidgetNode::with_defaults(id.clone(), WidgetKind::Button);

        assert!(tree.insert_under_root(node.clone()));
        assert!(!tree.insert_under_root(node));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn remove_is_a_noop_for_missing_or_root() {
        let mut tree = WidgetTree::new();
        assert!(!tree.remove("View0"));
        assert!(!tree.remove("Window"));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn remove_then_re_add_appends_at_the_end() {
        let mut tree = WidgetTree::new();
        for kind in [WidgetKind::Button, WidgetKind::Label, WidgetKind::CheckBox] {
            let id = tree.alloc_id();
            tree.insert_under_root(WidgetNode::with_defaults(id, kind));
        }
        assert_eq!(tree.registry(), ["Window", "View0", "View1", "View2"]);

        let view1 = tree.get("View1").cloned().unwrap();
        assert!(tree.remove("View1"));
        assert!(tree.insert_under_root(view1));

        // Prior position is not restored; this is documented behavior.
        assert_eq!(tree.registry(), ["Window", "View0", "View2", "View1"]);
    }

    #[test]
    fn removing_a_container_drops_its_subtree() {
        let mut tree = WidgetTree::new();
        let frame_id = tree.alloc_id();
        tree.insert_under_root(WidgetNode::with_defaults(
            frame_id.clone(),
            WidgetKind::FrameView,
        ));

        let child_id = tree.alloc_id();
        let mut child = WidgetNode::with_defaults(child_id.clone(), WidgetKind::Label);
        child.parent = Some(frame_id.clone());
        tree.get_mut(&frame_id).unwrap().children.push(child_id.clone());
        tree.nodes.insert(child_id.clone(), child);

        assert!(tree.remove(&frame_id));
        assert!(!tree.contains(&child_id));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn next_id_is_rederived_after_a_load() {
        let mut nodes = IndexMap::new();
        let mut root = WidgetNode::root();
        root.children.push("View7".to_owned());
        nodes.insert(root.id.clone(), root);
        let mut widget = WidgetNode::with_defaults("View7".to_owned(), WidgetKind::Button);
        widget.parent = Some("Window".to_owned());
        nodes.insert("View7".to_owned(), widget);

        let mut tree = WidgetTree::from_loaded("Window".to_owned(), nodes);
        assert_eq!(tree.alloc_id(), "View8");
    }
}
