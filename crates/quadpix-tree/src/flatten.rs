//! Structural traversal - flattening the tree into region entries
//!
//! Nodes store no geometry; position and extent are recomputed during
//! traversal from the matrix side and the node's depth, halving the
//! extent at every level exactly as construction halves its regions. The
//! traversal is pre-order over the same fixed slot order construction
//! uses, so the k-th internal node seen here covers the k-th region the
//! builder split.

use crate::engine::QuadtreeEngine;
use crate::error::TreeResult;
use crate::node::{Classification, QuadNode};

/// One visited node with its absolute region geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionEntry {
    /// Region origin, first axis
    pub x: u32,
    /// Region origin, second axis
    pub y: u32,
    /// Region extent (side length)
    pub size: u32,
    /// Node classification
    pub classification: Classification,
}

impl RegionEntry {
    /// Region area in cells.
    pub fn area(&self) -> u64 {
        self.size as u64 * self.size as u64
    }
}

/// Flatten a tree rooted at `root` covering a `side × side` matrix.
pub fn flatten_tree(root: &QuadNode, side: u32) -> Vec<RegionEntry> {
    let mut entries = Vec::new();
    flatten_into(root, 0, 0, side, &mut entries);
    entries
}

fn flatten_into(node: &QuadNode, x: u32, y: u32, size: u32, out: &mut Vec<RegionEntry>) {
    out.push(RegionEntry {
        x,
        y,
        size,
        classification: node.classification(),
    });
    if let QuadNode::Internal(children) = node {
        let half = size / 2;
        // Child offsets in slot order: TL, BL, BR, TR
        flatten_into(&children[0], x, y, half, out);
        flatten_into(&children[1], x + half, y, half, out);
        flatten_into(&children[2], x + half, y + half, half, out);
        flatten_into(&children[3], x, y + half, half, out);
    }
}

impl QuadtreeEngine {
    /// Flatten the current tree into pre-order region entries.
    ///
    /// Both leaves and mixed internal nodes appear, in the order self,
    /// top-left, bottom-left, bottom-right, top-right.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotBuilt`](crate::TreeError::NotBuilt) before the
    /// first successful build.
    pub fn flatten(&self) -> TreeResult<Vec<RegionEntry>> {
        let built = self.built()?;
        Ok(flatten_tree(&built.root, built.matrix.side()))
    }
}
