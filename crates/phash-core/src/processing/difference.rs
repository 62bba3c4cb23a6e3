//! Difference (gradient) hash.
//!
//! Each bit records whether brightness increases between two neighbouring
//! pixels. Horizontal comparisons walk rows, vertical comparisons walk
//! columns, and `Both` emits the horizontal bits followed by the vertical ones.

use log::warn;

use super::{fill_msb_first, Direction};
use crate::error::{Error, Result};
use crate::grid::GrayGrid;
use crate::hash::{Algorithm, PHash, HASH_BITS};

pub const DEFAULT_SIZE: u32 = 8;

/// Largest size accepted; any walk past 8 is already truncated to 64 bits
pub const MAX_SIZE: u32 = HASH_BITS as u32;

/// `(width, height)` of the grid for `size` and `direction`
pub fn grid_dimensions(size: u32, direction: Direction) -> (u32, u32) {
    match direction {
        Direction::Horizontal => (size + 1, size),
        Direction::Vertical => (size, size + 1),
        Direction::Both => (size, size),
    }
}

/// Number of comparisons the walk makes before truncation
pub fn comparison_count(size: u32, direction: Direction) -> u64 {
    let size = size as u64;
    match direction {
        Direction::Horizontal | Direction::Vertical => size * size,
        Direction::Both => 2 * size * size.saturating_sub(1),
    }
}

pub fn validate(size: u32, direction: Direction) -> Result<()> {
    if size == 0 {
        return Err(Error::size(Algorithm::Difference, "size must be at least 1"));
    }
    if size > MAX_SIZE {
        return Err(Error::size(
            Algorithm::Difference,
            format!("size must be at most {}, got {}", MAX_SIZE, size),
        ));
    }
    if direction == Direction::Both {
        if size < 2 {
            return Err(Error::size(
                Algorithm::Difference,
                "comparing in both directions needs size of at least 2",
            ));
        }
        let bits = comparison_count(size, direction);
        if bits > HASH_BITS as u64 {
            return Err(Error::size(
                Algorithm::Difference,
                format!(
                    "both directions at size {} need {} bits, budget is {}",
                    size, bits, HASH_BITS
                ),
            ));
        }
    }
    Ok(())
}

/// Hash a grid of [`grid_dimensions`]; bits past the 64th are dropped
pub fn difference_hash(grid: &GrayGrid, size: u32, direction: Direction) -> Result<PHash> {
    validate(size, direction)?;
    grid.ensure_dimensions(grid_dimensions(size, direction))?;

    let comparisons = comparison_count(size, direction);
    if comparisons > HASH_BITS as u64 {
        warn!(
            "Difference hash at size {} makes {} comparisons, keeping the first {}",
            size, comparisons, HASH_BITS
        );
    }

    match direction {
        Direction::Horizontal => fill_msb_first(Algorithm::Difference, horizontal(grid, size, size)),
        Direction::Vertical => fill_msb_first(Algorithm::Difference, vertical(grid, size, size)),
        Direction::Both => fill_msb_first(
            Algorithm::Difference,
            horizontal(grid, size, size - 1).chain(vertical(grid, size, size - 1)),
        ),
    }
}

/// `rows` rows of `columns` left-to-right comparisons
fn horizontal(grid: &GrayGrid, rows: u32, columns: u32) -> impl Iterator<Item = bool> + '_ {
    (0..rows).flat_map(move |y| (0..columns).map(move |x| grid.get(x, y) < grid.get(x + 1, y)))
}

/// `columns` columns of `rows` top-to-bottom comparisons, walked column by column
fn vertical(grid: &GrayGrid, columns: u32, rows: u32) -> impl Iterator<Item = bool> + '_ {
    (0..columns).flat_map(move |x| (0..rows).map(move |y| grid.get(x, y) < grid.get(x, y + 1)))
}
