//! quadpix-io - Export tooling for quadpix quadtree outputs
//!
//! The quadtree engine itself does no file I/O; this crate is the
//! collaborator that encodes its outputs:
//!
//! - [`write_raster_png`] / [`write_bitmatrix_png`] - PNG encoding of
//!   rendered rasters and source matrices
//! - [`write_stats_json`] - JSON report of statistics plus the flattened
//!   region structure
//!
//! # Examples
//!
//! ```
//! use quadpix_tree::QuadtreeEngine;
//! use quadpix_io::{write_raster_png, write_stats_json};
//!
//! let mut engine = QuadtreeEngine::new();
//! engine.build_from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
//!
//! let raster = engine.render(64, 64).unwrap();
//! let mut png = Vec::new();
//! write_raster_png(&mut png, &raster).unwrap();
//!
//! let mut json = Vec::new();
//! write_stats_json(&mut json, &engine).unwrap();
//! ```

pub mod error;
pub mod json;
pub mod png;

pub use error::{IoError, IoResult};
pub use json::{RegionRecord, StatsReport, TreeStats, report_from_engine, write_stats_json};
pub use png::{write_bitmatrix_png, write_raster_png};
