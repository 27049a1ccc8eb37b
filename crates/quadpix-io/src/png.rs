//! PNG export for rasters and binary matrices

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Encoder};
use quadpix_core::{BitMatrix, Raster};
use std::io::Write;

/// Write a rendered raster as an 8-bit RGB PNG.
pub fn write_raster_png<W: Write>(writer: W, raster: &Raster) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::Encode(format!("PNG header error: {}", e)))?;
    png_writer
        .write_image_data(raster.as_bytes())
        .map_err(|e| IoError::Encode(format!("PNG encode error: {}", e)))?;
    Ok(())
}

/// Write a binary matrix as a 1-bit grayscale PNG (cell value 1 = white).
pub fn write_bitmatrix_png<W: Write>(writer: W, matrix: &BitMatrix) -> IoResult<()> {
    let side = matrix.side();
    let mut encoder = Encoder::new(writer, side, side);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::One);
    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::Encode(format!("PNG header error: {}", e)))?;

    // Pack each row MSB-first, padded to a byte boundary
    let bytes_per_row = side.div_ceil(8) as usize;
    let mut data = vec![0u8; bytes_per_row * side as usize];
    for (y, row) in matrix.rows().enumerate() {
        let row_start = y * bytes_per_row;
        for (x, &value) in row.iter().enumerate() {
            if value != 0 {
                data[row_start + x / 8] |= 0x80 >> (x % 8);
            }
        }
    }
    png_writer
        .write_image_data(&data)
        .map_err(|e| IoError::Encode(format!("PNG encode error: {}", e)))?;
    Ok(())
}
