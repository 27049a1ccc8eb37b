//! Quadpix - Region quadtree builder and renderer for binary images
//!
//! Quadpix decomposes an N×N binary matrix into a region quadtree:
//! uniform regions become black or white leaves, mixed regions split
//! into four quadrants until every region is homogeneous. The tree can
//! be queried for statistics, flattened into a region list, displayed
//! as ASCII, and rendered back into raster form with or without
//! region-boundary overlays.
//!
//! # Example
//!
//! ```
//! use quadpix::{Color, tree::QuadtreeEngine};
//!
//! let mut engine = QuadtreeEngine::new();
//! engine
//!     .build_from_rows(&[
//!         vec![0, 0, 1, 1],
//!         vec![0, 0, 1, 1],
//!         vec![1, 1, 0, 0],
//!         vec![1, 1, 0, 0],
//!     ])
//!     .unwrap();
//!
//! assert_eq!(engine.count_leaves().unwrap(), 4);
//! assert_eq!(engine.max_depth().unwrap(), 1);
//!
//! let raster = engine.render_with_borders(512, 512, Color::RED, 2).unwrap();
//! assert_eq!(raster.width(), 512);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use quadpix_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use quadpix_io as io;
pub use quadpix_tree as tree;
