//! quadpix-core - Core data structures for the quadpix quadtree library
//!
//! This crate provides the two buffers everything else is built on:
//!
//! - [`BitMatrix`] - the square binary (0/1) source matrix handed to the
//!   quadtree builder
//! - [`Raster`] - the RGB pixel buffer that rendering writes into
//!
//! # Examples
//!
//! ```
//! use quadpix_core::{BitMatrix, Raster, Color};
//!
//! let matrix = BitMatrix::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
//! assert_eq!(matrix.side(), 2);
//!
//! let mut raster = Raster::new(64, 64, Color::WHITE).unwrap();
//! raster.fill_rect(0, 0, 32, 32, Color::BLACK);
//! assert_eq!(raster.get_pixel(0, 0), Some(Color::BLACK));
//! ```

pub mod bitmap;
pub mod error;
pub mod raster;

pub use bitmap::BitMatrix;
pub use error::{Error, Result};
pub use raster::{Color, Raster};
