//! Median hash: one bit per pixel, set when the pixel is at least the median.
//!
//! Unlike the average hash the comparison is `>=`, so a constant grid hashes
//! to all ones here and to all zeros there.

use super::{fill_msb_first, median_u8, validate_pixel_budget};
use crate::error::Result;
use crate::grid::GrayGrid;
use crate::hash::{Algorithm, PHash};

pub const DEFAULT_SIZE: u32 = 8;

pub fn validate(size: u32) -> Result<()> {
    validate_pixel_budget(Algorithm::Median, size)
}

/// Hash a `size × size` grid
pub fn median_hash(grid: &GrayGrid, size: u32) -> Result<PHash> {
    validate(size)?;
    grid.ensure_dimensions((size, size))?;

    let pixels = grid.pixels();
    let median = median_u8(pixels);
    fill_msb_first(Algorithm::Median, pixels.iter().map(|&p| p >= median))
}
