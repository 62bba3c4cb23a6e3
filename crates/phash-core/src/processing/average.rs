//! Average hash: one bit per pixel, set when the pixel is strictly brighter
//! than the mean intensity of the grid.

use super::{fill_msb_first, validate_pixel_budget};
use crate::error::Result;
use crate::grid::GrayGrid;
use crate::hash::{Algorithm, PHash};

pub const DEFAULT_SIZE: u32 = 8;

pub fn validate(size: u32) -> Result<()> {
    validate_pixel_budget(Algorithm::Average, size)
}

/// Hash a `size × size` grid
pub fn average_hash(grid: &GrayGrid, size: u32) -> Result<PHash> {
    validate(size)?;
    grid.ensure_dimensions((size, size))?;

    let pixels = grid.pixels();
    let count = pixels.len() as u64;
    let sum: u64 = pixels.iter().map(|&p| p as u64).sum();

    // p > sum / count, kept in integers so ties with the mean are exact
    fill_msb_first(
        Algorithm::Average,
        pixels.iter().map(|&p| p as u64 * count > sum),
    )
}
