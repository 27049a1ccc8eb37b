//! Quadtree node model
//!
//! A region quadtree over a binary image has two kinds of nodes: leaves,
//! covering a region where every cell has the same value, and internal
//! nodes, covering a mixed region split into four child quadrants. The
//! distinction is carried in the type: [`QuadNode::Leaf`] holds only its
//! color and [`QuadNode::Internal`] always owns exactly four children, so
//! a mixed node without children cannot be represented.
//!
//! # Quadrant order
//!
//! The four child slots follow a fixed order - top-left, bottom-left,
//! bottom-right, top-right - that construction, traversal and rendering
//! all share. The slot names are historical labels, not literal geometry:
//! slot 1 ("bottom-left") covers the region whose first coordinate is in
//! the upper half and slot 3 the converse. Treat the order as opaque;
//! what matters is that every consumer walks the slots identically.

use quadpix_core::Color;

/// Color of a uniform leaf region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// All cells in the region are 0
    Black,
    /// All cells in the region are 1
    White,
}

impl Cell {
    /// The matrix value this color encodes (0 or 1).
    pub fn value(self) -> u8 {
        match self {
            Cell::Black => 0,
            Cell::White => 1,
        }
    }

    /// The render color for this cell.
    pub fn color(self) -> Color {
        match self {
            Cell::Black => Color::BLACK,
            Cell::White => Color::WHITE,
        }
    }
}

/// Classification of a node's region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Uniform region of 0 cells
    Black,
    /// Uniform region of 1 cells
    White,
    /// Region containing both values; always has four children
    Mixed,
}

/// Child slot of an internal node, in construction order.
///
/// `index()` gives the slot position used everywhere the children are
/// walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    BottomLeft,
    BottomRight,
    TopRight,
}

impl Quadrant {
    /// All quadrants in construction/traversal order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
        Quadrant::TopRight,
    ];

    /// Slot index in the children array.
    pub fn index(self) -> usize {
        match self {
            Quadrant::TopLeft => 0,
            Quadrant::BottomLeft => 1,
            Quadrant::BottomRight => 2,
            Quadrant::TopRight => 3,
        }
    }

    /// Short label used in structural displays.
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "TL",
            Quadrant::BottomLeft => "BL",
            Quadrant::BottomRight => "BR",
            Quadrant::TopRight => "TR",
        }
    }
}

/// One node of a region quadtree.
///
/// Equality is structural: two nodes compare equal iff their
/// classifications match and, for internal nodes, all four children are
/// recursively equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuadNode {
    /// Uniform region
    Leaf(Cell),
    /// Mixed region with four child quadrants in [`Quadrant::ALL`] order
    Internal(Box<[QuadNode; 4]>),
}

impl QuadNode {
    /// Classification of this node's region.
    pub fn classification(&self) -> Classification {
        match self {
            QuadNode::Leaf(Cell::Black) => Classification::Black,
            QuadNode::Leaf(Cell::White) => Classification::White,
            QuadNode::Internal(_) => Classification::Mixed,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, QuadNode::Leaf(_))
    }

    /// The four children of an internal node, or `None` for a leaf.
    pub fn children(&self) -> Option<&[QuadNode; 4]> {
        match self {
            QuadNode::Leaf(_) => None,
            QuadNode::Internal(children) => Some(children),
        }
    }

    /// Child in the given quadrant slot, or `None` for a leaf.
    pub fn child(&self, quadrant: Quadrant) -> Option<&QuadNode> {
        self.children().map(|c| &c[quadrant.index()])
    }

    /// Total node count of this subtree (leaves plus internal nodes).
    pub fn count_nodes(&self) -> u64 {
        match self {
            QuadNode::Leaf(_) => 1,
            QuadNode::Internal(children) => {
                1 + children.iter().map(QuadNode::count_nodes).sum::<u64>()
            }
        }
    }

    /// Leaf count of this subtree.
    pub fn count_leaves(&self) -> u64 {
        match self {
            QuadNode::Leaf(_) => 1,
            QuadNode::Internal(children) => children.iter().map(QuadNode::count_leaves).sum(),
        }
    }

    /// Greatest number of internal-node hops from this node to any leaf.
    ///
    /// A leaf has depth 0.
    pub fn max_depth(&self) -> u32 {
        match self {
            QuadNode::Leaf(_) => 0,
            QuadNode::Internal(children) => {
                1 + children.iter().map(QuadNode::max_depth).max().unwrap_or(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard() -> QuadNode {
        QuadNode::Internal(Box::new([
            QuadNode::Leaf(Cell::Black),
            QuadNode::Leaf(Cell::White),
            QuadNode::Leaf(Cell::Black),
            QuadNode::Leaf(Cell::White),
        ]))
    }

    #[test]
    fn test_leaf_classification() {
        assert_eq!(
            QuadNode::Leaf(Cell::Black).classification(),
            Classification::Black
        );
        assert_eq!(
            QuadNode::Leaf(Cell::White).classification(),
            Classification::White
        );
        assert!(QuadNode::Leaf(Cell::Black).is_leaf());
        assert!(QuadNode::Leaf(Cell::Black).children().is_none());
    }

    #[test]
    fn test_internal_classification() {
        let node = checkerboard();
        assert_eq!(node.classification(), Classification::Mixed);
        assert!(!node.is_leaf());
        assert_eq!(node.children().unwrap().len(), 4);
        assert_eq!(
            node.child(Quadrant::BottomRight),
            Some(&QuadNode::Leaf(Cell::Black))
        );
    }

    #[test]
    fn test_counts() {
        let node = checkerboard();
        assert_eq!(node.count_nodes(), 5);
        assert_eq!(node.count_leaves(), 4);
        assert_eq!(node.max_depth(), 1);

        let leaf = QuadNode::Leaf(Cell::White);
        assert_eq!(leaf.count_nodes(), 1);
        assert_eq!(leaf.count_leaves(), 1);
        assert_eq!(leaf.max_depth(), 0);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(checkerboard(), checkerboard());
        assert_ne!(checkerboard(), QuadNode::Leaf(Cell::Black));

        let other = QuadNode::Internal(Box::new([
            QuadNode::Leaf(Cell::White),
            QuadNode::Leaf(Cell::Black),
            QuadNode::Leaf(Cell::White),
            QuadNode::Leaf(Cell::Black),
        ]));
        assert_ne!(checkerboard(), other);
    }

    #[test]
    fn test_quadrant_order() {
        let labels: Vec<&str> = Quadrant::ALL.iter().map(|q| q.label()).collect();
        assert_eq!(labels, vec!["TL", "BL", "BR", "TR"]);
        for (i, q) in Quadrant::ALL.iter().enumerate() {
            assert_eq!(q.index(), i);
        }
    }
}
