//! Quadtree engine - construction and tree ownership
//!
//! [`QuadtreeEngine`] owns the source matrix and the tree built from it.
//! Construction classifies the full matrix region and recursively splits
//! mixed regions into four quadrants until every region is uniform; a
//! single cell is always uniform, so recursion terminates at area 1.
//!
//! Every build is a full rebuild: the new tree and matrix are constructed
//! completely before the previous state is replaced, so a failed input
//! never leaves a partial tree visible.
//!
//! The engine is synchronous and has no internal locking. One instance
//! must not be built and queried from multiple threads at the same time;
//! independent instances share nothing and may run in parallel.

use crate::error::{TreeError, TreeResult};
use crate::integral::IntegralImage;
use crate::node::{Cell, QuadNode};
use quadpix_core::BitMatrix;

/// Matrix, side length and root of one completed build.
#[derive(Debug, Clone)]
pub(crate) struct BuiltTree {
    pub(crate) matrix: BitMatrix,
    pub(crate) root: QuadNode,
}

/// Region-quadtree builder and query surface for binary matrices.
///
/// # Examples
///
/// ```
/// use quadpix_core::BitMatrix;
/// use quadpix_tree::QuadtreeEngine;
///
/// let matrix = BitMatrix::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
/// let mut engine = QuadtreeEngine::new();
/// engine.build(matrix);
///
/// assert_eq!(engine.count_nodes().unwrap(), 5);
/// assert_eq!(engine.count_leaves().unwrap(), 4);
/// assert_eq!(engine.max_depth().unwrap(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuadtreeEngine {
    built: Option<BuiltTree>,
}

impl QuadtreeEngine {
    /// Create an engine with no tree built yet.
    pub fn new() -> Self {
        Self { built: None }
    }

    /// Build the quadtree for a matrix, replacing any previous tree.
    ///
    /// The matrix type already guarantees a square, strictly binary
    /// input, so this cannot fail; shape and value violations are
    /// rejected when the [`BitMatrix`] is constructed. Side lengths that
    /// are not powers of two decompose without error, but the quadrant
    /// geometry is then unspecified.
    pub fn build(&mut self, matrix: BitMatrix) {
        let integral = IntegralImage::from_matrix(&matrix);
        let n = matrix.side();
        let root = build_region(&integral, 0, 0, n - 1, n - 1);
        self.built = Some(BuiltTree { matrix, root });
    }

    /// Validate raw rows and build in one step.
    ///
    /// # Errors
    ///
    /// Propagates the matrix validation errors of
    /// [`BitMatrix::from_rows`] (empty, non-square or non-binary input).
    /// On error the previous tree, if any, is left untouched.
    pub fn build_from_rows(&mut self, rows: &[Vec<u8>]) -> TreeResult<()> {
        let matrix = BitMatrix::from_rows(rows)?;
        self.build(matrix);
        Ok(())
    }

    /// Discard the current tree and matrix, if any.
    pub fn clear(&mut self) {
        self.built = None;
    }

    /// Whether a tree has been built.
    pub fn is_built(&self) -> bool {
        self.built.is_some()
    }

    pub(crate) fn built(&self) -> TreeResult<&BuiltTree> {
        self.built.as_ref().ok_or(TreeError::NotBuilt)
    }

    /// Root node of the current tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotBuilt`] before the first successful build.
    pub fn root(&self) -> TreeResult<&QuadNode> {
        Ok(&self.built()?.root)
    }

    /// The source matrix of the current tree.
    pub fn matrix(&self) -> TreeResult<&BitMatrix> {
        Ok(&self.built()?.matrix)
    }

    /// Side length N of the current tree's matrix.
    pub fn side(&self) -> TreeResult<u32> {
        Ok(self.built()?.matrix.side())
    }

    /// Total node count of the current tree.
    pub fn count_nodes(&self) -> TreeResult<u64> {
        Ok(self.root()?.count_nodes())
    }

    /// Leaf count of the current tree.
    pub fn count_leaves(&self) -> TreeResult<u64> {
        Ok(self.root()?.count_leaves())
    }

    /// Greatest mixed-node depth of the current tree; 0 for a single leaf.
    pub fn max_depth(&self) -> TreeResult<u32> {
        Ok(self.root()?.max_depth())
    }
}

/// Classify the inclusive region `[xi..xf] × [yi..yf]` and build its
/// subtree.
///
/// Mixed regions split at the floor midpoints and recurse into the four
/// quadrants in the fixed slot order top-left, bottom-left, bottom-right,
/// top-right. The order is load-bearing: flatten and render reconstruct
/// absolute positions from it.
fn build_region(integral: &IntegralImage, xi: u32, yi: u32, xf: u32, yf: u32) -> QuadNode {
    let w = xf - xi + 1;
    let h = yf - yi + 1;
    let area = w as u64 * h as u64;
    let sum = integral
        .sum_rect(xi, yi, w, h)
        .expect("region lies inside the matrix");

    if sum == 0 {
        return QuadNode::Leaf(Cell::Black);
    }
    if sum == area {
        return QuadNode::Leaf(Cell::White);
    }

    // Mixed region; a 1-cell region is always uniform, so w, h >= 2 here
    // on power-of-two sides and the split below never degenerates.
    let mx = (xi + xf) / 2;
    let my = (yi + yf) / 2;
    let children = Box::new([
        build_region(integral, xi, yi, mx, my),
        build_region(integral, mx + 1, yi, xf, my),
        build_region(integral, mx + 1, my + 1, xf, yf),
        build_region(integral, xi, my + 1, mx, yf),
    ]);
    QuadNode::Internal(children)
}
