//! Wavelet hash: 2-D Haar transform, then one bit per low-frequency
//! coefficient that lies strictly above the median coefficient.

use super::transform::{haar_2d, low_frequency_block, to_matrix};
use super::{fill_msb_first, median_f64};
use crate::error::{Error, Result};
use crate::grid::GrayGrid;
use crate::hash::{Algorithm, PHash};

pub const DEFAULT_SIZE: u32 = 8;

/// Edge of the low-frequency block the bits are taken from
const BLOCK: u32 = 8;

pub fn validate(size: u32) -> Result<()> {
    if !size.is_power_of_two() {
        return Err(Error::size(
            Algorithm::Wavelet,
            format!("size must be a power of two, got {}", size),
        ));
    }
    if size < BLOCK {
        return Err(Error::size(
            Algorithm::Wavelet,
            format!("size must be at least {}, got {}", BLOCK, size),
        ));
    }
    Ok(())
}

/// Hash a `size × size` grid
pub fn wavelet_hash(grid: &GrayGrid, size: u32) -> Result<PHash> {
    validate(size)?;
    grid.ensure_dimensions((size, size))?;

    let coefficients = haar_2d(&to_matrix(grid));
    let block = low_frequency_block(&coefficients, BLOCK as usize);
    let median = median_f64(&block);

    fill_msb_first(Algorithm::Wavelet, block.iter().map(|&c| c > median))
}
