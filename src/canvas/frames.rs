//! Resolving constraints into on-screen frames.
//!
//! Every widget's frame is computed against its parent's inner area:
//! absolute offsets directly, percentages against the parent's extent, fills
//! from the widget's origin to the parent's far edge, and edge-relative
//! positions from the referenced sibling's already-resolved frame. Resolution
//! runs twice so a widget may anchor to a sibling declared after it. A
//! reference orphaned by deletion degrades to the origin instead of failing.

use hashbrown::HashMap;
use tui::layout::Rect;

use crate::{
    app::tree::{WidgetNode, WidgetTree},
    constraints::{Dim, Pos, Side},
};

pub fn resolve_frames(tree: &WidgetTree, surface: Rect) -> HashMap<String, Rect> {
    let mut frames = HashMap::new();
    frames.insert(tree.root_id().to_owned(), surface);

    for _ in 0..2 {
        resolve_children(tree, tree.root_id(), surface, &mut frames);
    }

    frames
}

fn resolve_children(
    tree: &WidgetTree, parent_id: &str, parent_area: Rect, frames: &mut HashMap<String, Rect>,
) {
    let Some(parent) = tree.get(parent_id) else {
        return;
    };

    for child_id in &parent.children {
        let Some(child) = tree.get(child_id) else {
            continue;
        };

        let frame = resolve_node(child, parent_area, frames);
        frames.insert(child_id.clone(), frame);

        if child.kind.is_container() {
            resolve_children(tree, child_id, shrink(frame), frames);
        }
    }
}

fn resolve_node(node: &WidgetNode, parent: Rect, frames: &HashMap<String, Rect>) -> Rect {
    let width = resolve_dim(&node.width, parent.width);
    let height = resolve_dim(&node.height, parent.height);

    let x = resolve_pos(&node.x, width, parent, Axis::Horizontal, frames);
    let y = resolve_pos(&node.y, height, parent, Axis::Vertical, frames);

    let width = width
        .unwrap_or_else(|| parent.width.saturating_sub(x))
        .min(parent.width.saturating_sub(x));
    let height = height
        .unwrap_or_else(|| parent.height.saturating_sub(y))
        .min(parent.height.saturating_sub(y));

    Rect::new(parent.x + x, parent.y + y, width, height)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// A size, or `None` for fill-remaining (which needs the resolved origin).
fn resolve_dim(dim: &Dim, parent_len: u16) -> Option<u16> {
    match dim {
        Dim::Sized(n) => Some((*n).max(0) as u16),
        Dim::Percent(fraction) => Some((f32::from(parent_len) * fraction) as u16),
        Dim::Fill => None,
    }
}

/// The offset of a widget within its parent, clamped into the parent.
fn resolve_pos(
    pos: &Pos, span: Option<u16>, parent: Rect, axis: Axis, frames: &HashMap<String, Rect>,
) -> u16 {
    let parent_len = match axis {
        Axis::Horizontal => parent.width,
        Axis::Vertical => parent.height,
    };

    let value: i32 = match pos {
        Pos::At(n) => *n,
        Pos::AnchorEnd => i32::from(parent_len) - i32::from(span.unwrap_or(0)),
        Pos::Edge(side, target) => match frames.get(target) {
            Some(frame) => match side {
                Side::Left => i32::from(frame.x) - i32::from(parent.x),
                Side::Right => {
                    i32::from(frame.x) + i32::from(frame.width) - i32::from(parent.x)
                }
                Side::Top => i32::from(frame.y) - i32::from(parent.y),
                Side::Bottom => {
                    i32::from(frame.y) + i32::from(frame.height) - i32::from(parent.y)
                }
            },
            None => 0,
        },
    };

    value.clamp(0, i32::from(parent_len)) as u16
}

/// A container's inner area, inside its border.
fn shrink(rect: Rect) -> Rect {
    if rect.width >= 2 && rect.height >= 2 {
        Rect::new(rect.x + 1, rect.y + 1, rect.width - 2, rect.height - 2)
    } else {
        Rect::new(rect.x, rect.y, 0, 0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::widgets::WidgetKind;

    fn tree_with(nodes: Vec<WidgetNode>) -> WidgetTree {
        let mut tree = WidgetTree::new();
        for node in nodes {
            tree.insert_under_root(node);
        }
        tree
    }

    fn button(id: &str, x: Pos, y: Pos, width: Dim, height: Dim) -> WidgetNode {
        let mut node = WidgetNode::with_defaults(id.to_owned(), WidgetKind::Button);
        node.x = x;
        node.y = y;
        node.width = width;
        node.height = height;
        node
    }

    const SURFACE: Rect = Rect {
        x: 10,
        y: 5,
        width: 40,
        height: 20,
    };

    #[test]
    fn absolute_constraints_resolve_directly() {
        let tree = tree_with(vec![button(
            "View0",
            Pos::At(2),
            Pos::At(3),
            Dim::Sized(10),
            Dim::Sized(1),
        )]);

        let frames = resolve_frames(&tree, SURFACE);
        assert_eq!(frames["View0"], Rect::new(12, 8, 10, 1));
    }

    #[test]
    fn fill_takes_the_remaining_space() {
        let tree = tree_with(vec![button(
            "View0",
            Pos::At(30),
            Pos::At(0),
            Dim::Fill,
            Dim::Fill,
        )]);

        let frames = resolve_frames(&tree, SURFACE);
        assert_eq!(frames["View0"], Rect::new(40, 5, 10, 20));
    }

    #[test]
    fn percent_is_a_fraction_of_the_parent() {
        let tree = tree_with(vec![button(
            "View0",
            Pos::At(0),
            Pos::At(0),
            Dim::Percent(0.5),
            Dim::Percent(0.25),
        )]);

        let frames = resolve_frames(&tree, SURFACE);
        assert_eq!(frames["View0"], Rect::new(10, 5, 20, 5));
    }

    #[test]
    fn anchor_end_hugs_the_far_edge() {
        let tree = tree_with(vec![button(
            "View0",
            Pos::AnchorEnd,
            Pos::At(0),
            Dim::Sized(8),
            Dim::Sized(1),
        )]);

        let frames = resolve_frames(&tree, SURFACE);
        assert_eq!(frames["View0"], Rect::new(42, 5, 8, 1));
    }

    #[test]
    fn edge_relative_positions_follow_the_sibling() {
        let tree = tree_with(vec![
            button(
                "View0",
                Pos::At(4),
                Pos::At(2),
                Dim::Sized(10),
                Dim::Sized(3),
            ),
            button(
                "View1",
                Pos::Edge(Side::Right, "View0".to_owned()),
                Pos::Edge(Side::Bottom, "View0".to_owned()),
                Dim::Sized(5),
                Dim::Sized(1),
            ),
        ]);

        let frames = resolve_frames(&tree, SURFACE);
        assert_eq!(frames["View1"].x, 10 + 4 + 10);
        assert_eq!(frames["View1"].y, 5 + 2 + 3);
    }

    #[test]
    fn forward_references_resolve_on_the_second_pass() {
        let tree = tree_with(vec![
            button(
                "View0",
                Pos::Edge(Side::Right, "View1".to_owned()),
                Pos::At(0),
                Dim::Sized(5),
                Dim::Sized(1),
            ),
            button(
                "View1",
                Pos::At(3),
                Pos::At(0),
                Dim::Sized(6),
                Dim::Sized(1),
            ),
        ]);

        let frames = resolve_frames(&tree, SURFACE);
        assert_eq!(frames["View0"].x, 10 + 3 + 6);
    }

    #[test]
    fn dangling_references_degrade_to_the_origin() {
        let tree = tree_with(vec![button(
            "View0",
            Pos::Edge(Side::Left, "Ghost".to_owned()),
            Pos::At(1),
            Dim::Sized(5),
            Dim::Sized(1),
        )]);

        let frames = resolve_frames(&tree, SURFACE);
        assert_eq!(frames["View0"].x, 10);
    }

    #[test]
    fn frames_never_escape_the_parent() {
        let tree = tree_with(vec![button(
            "View0",
            Pos::At(100),
            Pos::At(-5),
            Dim::Sized(500),
            Dim::Sized(500),
        )]);

        let frames = resolve_frames(&tree, SURFACE);
        let frame = frames["View0"];
        assert!(frame.x <= SURFACE.x + SURFACE.width);
        assert_eq!(frame.width, 0);
        assert_eq!(frame.y, 5);
        assert_eq!(frame.height, 20);
    }
}
