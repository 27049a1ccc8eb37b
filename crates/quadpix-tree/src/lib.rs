//! quadpix-tree - Region quadtree construction, traversal and rendering
//!
//! This crate implements the quadtree engine over binary matrices:
//!
//! - **Construction** - recursive decomposition of an N×N binary matrix
//!   into uniform and mixed regions, with O(1) region sums via a
//!   summed-area table
//! - **Traversal** - pre-order flattening into absolute region entries
//! - **Statistics** - node, leaf, depth and per-classification counts
//! - **Rendering** - rasterizing the tree back to an RGB buffer, plain
//!   or with region-boundary overlays
//!
//! # Examples
//!
//! ```
//! use quadpix_core::Color;
//! use quadpix_tree::QuadtreeEngine;
//!
//! let mut engine = QuadtreeEngine::new();
//! engine
//!     .build_from_rows(&[
//!         vec![0, 0, 1, 1],
//!         vec![0, 0, 1, 1],
//!         vec![1, 1, 1, 1],
//!         vec![1, 1, 1, 1],
//!     ])
//!     .unwrap();
//!
//! assert_eq!(engine.count_leaves().unwrap(), 4);
//! let raster = engine.render_with_borders(256, 256, Color::RED, 2).unwrap();
//! assert_eq!(raster.width(), 256);
//! ```

pub mod ascii;
pub mod engine;
pub mod error;
pub mod flatten;
pub mod integral;
pub mod node;
pub mod render;
pub mod stats;

// Re-export core types
pub use quadpix_core;

// Re-export error types
pub use error::{TreeError, TreeResult};

// Re-export the engine and node model
pub use engine::QuadtreeEngine;
pub use node::{Cell, Classification, QuadNode, Quadrant};

// Re-export traversal and statistics types
pub use flatten::{RegionEntry, flatten_tree};
pub use integral::IntegralImage;
pub use stats::ClassTally;

// Re-export the ASCII display
pub use ascii::ascii_tree;
