use crate::grid::GrayGrid;

/// Deterministic noise in `[20, 220)` so tests can shift brightness without overflow
pub fn textured_grid(size: u32, seed: u64) -> GrayGrid {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    GrayGrid::from_fn(size, size, |_, _| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        20 + ((state >> 33) % 200) as u8
    })
}
