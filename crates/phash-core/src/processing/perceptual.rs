//! Perceptual hash built on the discrete cosine transform.
//!
//! The 2-D DCT concentrates the structure of the image in its top-left
//! coefficients. The DC term at index 0 only measures overall brightness, so
//! it is left out of both the median and the bits.
//!
//! Bits are emitted for coefficient indices 1 through 64 of the flattened
//! 8×8 block. The block only has indices 0 through 63, so index 64 is skipped
//! and the lowest bit of every perceptual hash is always 0.

use super::transform::{dct_2d, low_frequency_block, to_matrix};
use super::{fill_msb_first, median_f64};
use crate::error::{Error, Result};
use crate::grid::GrayGrid;
use crate::hash::{Algorithm, PHash, HASH_BITS};

pub const DEFAULT_SIZE: u32 = 32;

/// Smallest grid that still has a full low-frequency block
pub const MIN_SIZE: u32 = 8;

const BLOCK: usize = 8;

pub fn validate(size: u32) -> Result<()> {
    if size < MIN_SIZE {
        return Err(Error::size(
            Algorithm::Perceptual,
            format!("size must be at least {}, got {}", MIN_SIZE, size),
        ));
    }
    Ok(())
}

/// Hash a `size × size` grid
pub fn perceptual_hash(grid: &GrayGrid, size: u32) -> Result<PHash> {
    validate(size)?;
    grid.ensure_dimensions((size, size))?;

    let coefficients = dct_2d(&to_matrix(grid));
    hash_low_frequency_block(&low_frequency_block(&coefficients, BLOCK))
}

/// Threshold a flattened 8×8 coefficient block whose index 0 is the DC term
pub(crate) fn hash_low_frequency_block(block: &[f64]) -> Result<PHash> {
    let median = median_f64(block.get(1..).unwrap_or_default());

    let bits = (1..=HASH_BITS)
        .filter_map(|index| block.get(index))
        .map(|&c| c > median);
    fill_msb_first(Algorithm::Perceptual, bits)
}
