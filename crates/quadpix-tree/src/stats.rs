//! Per-classification tallies over the flattened tree

use crate::engine::QuadtreeEngine;
use crate::error::TreeResult;
use crate::flatten::RegionEntry;
use crate::node::Classification;

/// Node counts per classification.
///
/// Over one tree, `black + white + mixed` equals the total node count and
/// `black + white` equals the leaf count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassTally {
    pub black: u64,
    pub white: u64,
    pub mixed: u64,
}

impl ClassTally {
    /// Tally a flattened region sequence.
    pub fn from_entries(entries: &[RegionEntry]) -> Self {
        let mut tally = ClassTally::default();
        for entry in entries {
            match entry.classification {
                Classification::Black => tally.black += 1,
                Classification::White => tally.white += 1,
                Classification::Mixed => tally.mixed += 1,
            }
        }
        tally
    }

    /// Total nodes counted.
    pub fn total(&self) -> u64 {
        self.black + self.white + self.mixed
    }

    /// Leaves counted (black plus white).
    pub fn leaves(&self) -> u64 {
        self.black + self.white
    }
}

impl QuadtreeEngine {
    /// Per-classification node tallies for the current tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotBuilt`](crate::TreeError::NotBuilt) before the
    /// first successful build.
    pub fn class_tally(&self) -> TreeResult<ClassTally> {
        Ok(ClassTally::from_entries(&self.flatten()?))
    }
}
