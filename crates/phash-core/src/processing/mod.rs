//! # Hashing algorithms
//!
//! Five strategies turn a grayscale grid into a 64-bit [`PHash`]:
//!
//! 1. Average: one bit per pixel, set when the pixel is brighter than the mean
//! 2. Median: one bit per pixel, set when the pixel is at least the median
//! 3. Difference: one bit per neighbouring pixel pair, set when brightness increases
//! 4. Wavelet: Haar transform, bits from the low-frequency coefficients against their median
//! 5. Perceptual: DCT, bits from the low-frequency coefficients against their median (DC excluded)
//!
//! ## Hamming Distance Interpretation
//!
//! For hashes of the same algorithm:
//!
//! - 0-3: Nearly identical images (same image with minor modifications)
//! - 4-10: Similar images (same subject with moderate differences)
//! - >10-15: Different images
//!
//! Every algorithm writes its bits most-significant first, so the first
//! feature lands in bit 63.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::{GrayGrid, GridProvider};
use crate::hash::{Algorithm, PHash, HASH_BITS};

pub mod average;
pub mod difference;
pub mod file_processing;
pub mod median;
pub mod perceptual;
pub mod transform;
pub mod wavelet;

pub use file_processing::{phash_from_file, phash_from_img};

/// Which neighbouring pixels the difference hash compares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
    Both,
}

impl std::str::FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            "both" => Ok(Direction::Both),
            other => Err(Error::Format(format!("unknown direction '{}'", other))),
        }
    }
}

/// A hashing algorithm together with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hasher {
    Average { size: u32 },
    Median { size: u32 },
    Difference { size: u32, direction: Direction },
    Wavelet { size: u32 },
    Perceptual { size: u32 },
}

impl Hasher {
    /// The algorithm with its default parameters
    pub fn with_defaults(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Average => Hasher::Average {
                size: average::DEFAULT_SIZE,
            },
            Algorithm::Median => Hasher::Median {
                size: median::DEFAULT_SIZE,
            },
            Algorithm::Difference => Hasher::Difference {
                size: difference::DEFAULT_SIZE,
                direction: Direction::default(),
            },
            Algorithm::Wavelet => Hasher::Wavelet {
                size: wavelet::DEFAULT_SIZE,
            },
            Algorithm::Perceptual => Hasher::Perceptual {
                size: perceptual::DEFAULT_SIZE,
            },
        }
    }

    /// Build and validate a hasher; `size` falls back to the algorithm default
    pub fn new(algorithm: Algorithm, size: Option<u32>, direction: Direction) -> Result<Self> {
        let hasher = match (Hasher::with_defaults(algorithm), size) {
            (hasher, None) => hasher.with_direction(direction),
            (Hasher::Average { .. }, Some(size)) => Hasher::Average { size },
            (Hasher::Median { .. }, Some(size)) => Hasher::Median { size },
            (Hasher::Difference { .. }, Some(size)) => Hasher::Difference { size, direction },
            (Hasher::Wavelet { .. }, Some(size)) => Hasher::Wavelet { size },
            (Hasher::Perceptual { .. }, Some(size)) => Hasher::Perceptual { size },
        };
        hasher.validate()?;
        Ok(hasher)
    }

    fn with_direction(self, direction: Direction) -> Self {
        match self {
            Hasher::Difference { size, .. } => Hasher::Difference { size, direction },
            other => other,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Hasher::Average { .. } => Algorithm::Average,
            Hasher::Median { .. } => Algorithm::Median,
            Hasher::Difference { .. } => Algorithm::Difference,
            Hasher::Wavelet { .. } => Algorithm::Wavelet,
            Hasher::Perceptual { .. } => Algorithm::Perceptual,
        }
    }

    pub fn size(&self) -> u32 {
        match *self {
            Hasher::Average { size }
            | Hasher::Median { size }
            | Hasher::Difference { size, .. }
            | Hasher::Wavelet { size }
            | Hasher::Perceptual { size } => size,
        }
    }

    /// `(width, height)` of the grid this hasher consumes
    pub fn grid_dimensions(&self) -> (u32, u32) {
        match *self {
            Hasher::Difference { size, direction } => difference::grid_dimensions(size, direction),
            other => (other.size(), other.size()),
        }
    }

    /// Check the parameters before any transform runs
    pub fn validate(&self) -> Result<()> {
        match *self {
            Hasher::Average { size } => average::validate(size),
            Hasher::Median { size } => median::validate(size),
            Hasher::Difference { size, direction } => difference::validate(size, direction),
            Hasher::Wavelet { size } => wavelet::validate(size),
            Hasher::Perceptual { size } => perceptual::validate(size),
        }
    }

    /// Hash a grid that already has [`Hasher::grid_dimensions`]
    pub fn hash_grid(&self, grid: &GrayGrid) -> Result<PHash> {
        let hash = match *self {
            Hasher::Average { size } => average::average_hash(grid, size),
            Hasher::Median { size } => median::median_hash(grid, size),
            Hasher::Difference { size, direction } => {
                difference::difference_hash(grid, size, direction)
            }
            Hasher::Wavelet { size } => wavelet::wavelet_hash(grid, size),
            Hasher::Perceptual { size } => perceptual::perceptual_hash(grid, size),
        }?;
        debug!("Computed {} from {}x{} grid", hash, grid.width(), grid.height());
        Ok(hash)
    }

    /// Validate, request a grid of the right dimensions from `provider`, then hash it
    pub fn hash<P: GridProvider + ?Sized>(&self, provider: &P) -> Result<PHash> {
        self.validate()?;
        let (width, height) = self.grid_dimensions();
        let grid = provider.grid(width, height)?;
        self.hash_grid(&grid)
    }
}

/// Write up to 64 bits, the first one into bit 63; extra bits are dropped
pub(crate) fn fill_msb_first(
    algorithm: Algorithm,
    bits: impl IntoIterator<Item = bool>,
) -> Result<PHash> {
    let mut hash = PHash::new(algorithm);
    for (written, bit) in bits.into_iter().take(HASH_BITS).enumerate() {
        if bit {
            hash.set_bit(HASH_BITS - 1 - written)?;
        }
    }
    Ok(hash)
}

/// Shared check for algorithms that spend one bit per sampled pixel
pub(crate) fn validate_pixel_budget(algorithm: Algorithm, size: u32) -> Result<()> {
    if size == 0 {
        return Err(Error::size(algorithm, "size must be at least 1"));
    }
    let bits = size as u64 * size as u64;
    if bits > HASH_BITS as u64 {
        return Err(Error::size(
            algorithm,
            format!("{}x{} needs {} bits, budget is {}", size, size, bits, HASH_BITS),
        ));
    }
    Ok(())
}

/// Central value for odd counts, floor of the midpoint of the two central values otherwise
pub(crate) fn median_u8(values: &[u8]) -> u8 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.is_empty() {
        0
    } else if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        ((sorted[mid - 1] as u16 + sorted[mid] as u16) / 2) as u8
    }
}

/// Central value for odd counts, mean of the two central values otherwise
pub(crate) fn median_f64(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.is_empty() {
        0.0
    } else if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}
