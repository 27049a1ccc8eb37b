//! BitMatrix - square binary source matrix
//!
//! The `BitMatrix` is the input type for quadtree construction: an N×N
//! grid of 0/1 cells, stored row-major with one byte per cell. Value 0 is
//! black, value 1 is white.
//!
//! Construction validates shape and cell values up front, so every live
//! `BitMatrix` is square and strictly binary. Power-of-two side length is
//! recommended for quadtree decomposition but not enforced here; behavior
//! of downstream consumers for other sides is unspecified.

use crate::error::{Error, Result};

/// Square N×N binary matrix, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    data: Vec<u8>,
    side: u32,
}

impl BitMatrix {
    /// Create an all-zero matrix with the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `side` is zero.
    pub fn new(side: u32) -> Result<Self> {
        if side == 0 {
            return Err(Error::InvalidDimension {
                width: side,
                height: side,
            });
        }
        Ok(Self {
            data: vec![0; (side as usize) * (side as usize)],
            side,
        })
    }

    /// Build a matrix from ordered rows of 0/1 values.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyMatrix`] if `rows` is empty
    /// - [`Error::NonSquare`] if any row length differs from the row count
    /// - [`Error::NonBinaryValue`] if any cell is not 0 or 1
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::EmptyMatrix);
        }
        let n = rows.len();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::NonSquare {
                    rows: n,
                    row: y,
                    cols: row.len(),
                });
            }
        }
        let mut data = Vec::with_capacity(n * n);
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value > 1 {
                    return Err(Error::NonBinaryValue {
                        x: x as u32,
                        y: y as u32,
                        value,
                    });
                }
                data.push(value);
            }
        }
        Ok(Self {
            data,
            side: n as u32,
        })
    }

    /// Side length N.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Total cell count N².
    pub fn area(&self) -> u64 {
        self.side as u64 * self.side as u64
    }

    /// Whether the side length is a power of two.
    pub fn side_is_power_of_two(&self) -> bool {
        self.side.is_power_of_two()
    }

    /// Get the cell value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.side || y >= self.side {
            return None;
        }
        Some(self.get_unchecked(x, y))
    }

    /// Get a cell value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= side` or `y >= side`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.side as usize + x as usize]
    }

    /// Set the cell at (x, y) to 0 or 1.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] if coordinates are out of bounds
    /// - [`Error::NonBinaryValue`] if `value` is not 0 or 1
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.side || y >= self.side {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.side,
                height: self.side,
            });
        }
        if value > 1 {
            return Err(Error::NonBinaryValue { x, y, value });
        }
        self.data[y as usize * self.side as usize + x as usize] = value;
        Ok(())
    }

    /// Iterate over rows as byte slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.side as usize)
    }

    /// Raw row-major cell data.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
