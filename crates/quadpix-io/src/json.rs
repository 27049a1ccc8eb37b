//! JSON export of tree statistics and region structure
//!
//! Serializes the scalar statistics and the flattened region sequence of
//! a built engine into a single report, for tabular tooling or archival
//! alongside exported images.

use crate::IoResult;
use quadpix_tree::{Classification, QuadtreeEngine, RegionEntry};
use serde::Serialize;
use std::io::Write;

/// Scalar statistics of one built tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub matrix_side: u32,
    pub total_nodes: u64,
    pub leaf_nodes: u64,
    pub internal_nodes: u64,
    pub black_nodes: u64,
    pub white_nodes: u64,
    pub mixed_nodes: u64,
    pub max_depth: u32,
}

/// One flattened region in export form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionRecord {
    pub x: u32,
    pub y: u32,
    pub size: u32,
    pub classification: &'static str,
}

impl From<RegionEntry> for RegionRecord {
    fn from(entry: RegionEntry) -> Self {
        let classification = match entry.classification {
            Classification::Black => "black",
            Classification::White => "white",
            Classification::Mixed => "mixed",
        };
        Self {
            x: entry.x,
            y: entry.y,
            size: entry.size,
            classification,
        }
    }
}

/// Full export report: statistics plus the pre-order region list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    pub stats: TreeStats,
    pub regions: Vec<RegionRecord>,
}

/// Assemble the report for a built engine.
///
/// # Errors
///
/// Propagates [`TreeError::NotBuilt`](quadpix_tree::TreeError::NotBuilt)
/// if no tree has been built.
pub fn report_from_engine(engine: &QuadtreeEngine) -> IoResult<StatsReport> {
    let entries = engine.flatten()?;
    let tally = engine.class_tally()?;
    let stats = TreeStats {
        matrix_side: engine.side()?,
        total_nodes: engine.count_nodes()?,
        leaf_nodes: engine.count_leaves()?,
        internal_nodes: tally.mixed,
        black_nodes: tally.black,
        white_nodes: tally.white,
        mixed_nodes: tally.mixed,
        max_depth: engine.max_depth()?,
    };
    Ok(StatsReport {
        stats,
        regions: entries.into_iter().map(RegionRecord::from).collect(),
    })
}

/// Write the report for a built engine as pretty-printed JSON.
pub fn write_stats_json<W: Write>(writer: W, engine: &QuadtreeEngine) -> IoResult<()> {
    let report = report_from_engine(engine)?;
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}
