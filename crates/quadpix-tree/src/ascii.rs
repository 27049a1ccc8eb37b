//! ASCII rendering of the tree structure
//!
//! Produces a box-drawing layout of the node hierarchy for terminal
//! display or logging. Mixed nodes expand their four quadrant slots in
//! the fixed traversal order, each under a slot-label header line.

use crate::node::{Classification, QuadNode, Quadrant};

fn class_label(c: Classification) -> &'static str {
    match c {
        Classification::Black => "Black",
        Classification::White => "White",
        Classification::Mixed => "Mixed",
    }
}

/// Render a tree as an ASCII structure diagram.
///
/// # Examples
///
/// ```
/// use quadpix_tree::{QuadtreeEngine, ascii_tree};
///
/// let mut engine = QuadtreeEngine::new();
/// engine.build_from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
/// let diagram = ascii_tree(engine.root().unwrap());
/// assert!(diagram.starts_with("└── Mixed"));
/// assert!(diagram.contains("├── TL:"));
/// ```
pub fn ascii_tree(root: &QuadNode) -> String {
    let mut out = String::new();
    write_node(root, &mut out, "", true);
    out
}

fn write_node(node: &QuadNode, out: &mut String, prefix: &str, is_last: bool) {
    let connector = if is_last { "└── " } else { "├── " };
    out.push_str(prefix);
    out.push_str(connector);
    out.push_str(class_label(node.classification()));
    out.push('\n');

    if let Some(children) = node.children() {
        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        for (i, quadrant) in Quadrant::ALL.iter().enumerate() {
            let last = i == 3;
            out.push_str(&child_prefix);
            out.push_str(if last { "└── " } else { "├── " });
            out.push_str(quadrant.label());
            out.push_str(":\n");
            let subtree_prefix =
                format!("{child_prefix}{}", if last { "    " } else { "│   " });
            write_node(&children[quadrant.index()], out, &subtree_prefix, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Cell;

    #[test]
    fn test_single_leaf() {
        assert_eq!(ascii_tree(&QuadNode::Leaf(Cell::White)), "└── White\n");
    }

    #[test]
    fn test_one_level_tree() {
        let root = QuadNode::Internal(Box::new([
            QuadNode::Leaf(Cell::Black),
            QuadNode::Leaf(Cell::White),
            QuadNode::Leaf(Cell::Black),
            QuadNode::Leaf(Cell::White),
        ]));
        let diagram = ascii_tree(&root);
        let expected = "\
└── Mixed
    ├── TL:
    │   └── Black
    ├── BL:
    │   └── White
    ├── BR:
    │   └── Black
    └── TR:
        └── White
";
        assert_eq!(diagram, expected);
    }

    #[test]
    fn test_nested_tree_indentation() {
        let inner = QuadNode::Internal(Box::new([
            QuadNode::Leaf(Cell::White),
            QuadNode::Leaf(Cell::Black),
            QuadNode::Leaf(Cell::Black),
            QuadNode::Leaf(Cell::Black),
        ]));
        let root = QuadNode::Internal(Box::new([
            inner,
            QuadNode::Leaf(Cell::Black),
            QuadNode::Leaf(Cell::Black),
            QuadNode::Leaf(Cell::Black),
        ]));
        let diagram = ascii_tree(&root);
        // The nested mixed node sits under the TL slot with deeper
        // indentation, and every line is newline-terminated.
        assert!(diagram.contains("    ├── TL:\n    │   └── Mixed\n"));
        assert!(diagram.ends_with('\n'));
        // root + 4 slot headers + 3 outer leaves + nested mixed node
        // with its own 4 headers and 4 leaves
        assert_eq!(diagram.lines().count(), 1 + 4 + 3 + 1 + 4 + 4);
    }
}
