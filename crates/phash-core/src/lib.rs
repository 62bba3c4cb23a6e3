//! Perceptual hashing of raster images.
//!
//! This library computes compact 64-bit fingerprints that stay close for
//! visually similar images:
//! - Bit-vector hash type with hex/byte encodings and Hamming comparison
//! - Average, median, difference, wavelet and DCT-based hashing algorithms
//! - Batch comparison of one hash against many
//! - Adapters that sample grayscale grids from decoded images
//!
//! ```
//! use phash_core::{Algorithm, GrayGrid, Hasher};
//!
//! let grid = GrayGrid::from_fn(8, 8, |x, y| (x * 30 + y) as u8);
//! let hash = Hasher::with_defaults(Algorithm::Average).hash_grid(&grid).unwrap();
//! assert_eq!(hash.distance(&hash).unwrap(), 0);
//! ```

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use compare::{
    batch_compare_distance, batch_compare_similarity, find_similar, par_batch_compare_distance,
    par_batch_compare_similarity, SimilarMatch,
};
pub use config::*;
pub use error::{Error, Result};
pub use grid::{GrayGrid, GridProvider, ImageGridProvider, ResizeFilter};
pub use hash::{Algorithm, PHash, DEFAULT_THRESHOLD, HASH_BITS};
pub use processing::{phash_from_file, phash_from_img, Direction, Hasher};

// -- Public Modules --
pub mod compare;
pub mod config;
pub mod grid;
pub mod hash;
pub mod logging;
pub mod processing;

// -- Test Modules --
#[cfg(test)]
pub mod test_utils;
