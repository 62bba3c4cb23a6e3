//! 1-D transform kernels and their separable 2-D application.
//!
//! Every row and column pass copies its samples into a fresh buffer, runs the
//! kernel on that buffer and writes the result back, so no pass ever reads
//! samples it has already overwritten.

use std::f64::consts::FRAC_1_SQRT_2;
use std::sync::Arc;

use ndarray::{s, Array1, Array2};
use rustdct::{DctPlanner, TransformType2And3};

use crate::grid::GrayGrid;

/// Orthonormal type-II DCT for one fixed length
pub struct DctKernel {
    dct: Arc<dyn TransformType2And3<f64>>,
    len: usize,
}

impl DctKernel {
    pub fn new(len: usize) -> Self {
        let mut planner = DctPlanner::new();
        Self {
            dct: planner.plan_dct2(len),
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `X[k] = sqrt(2/n) * c(k) * Σ x[i] cos(π (2i + 1) k / 2n)`, with `c(0) = 1/√2`
    pub fn apply(&self, samples: &[f64]) -> Vec<f64> {
        debug_assert_eq!(samples.len(), self.len, "DCT kernel length mismatch");
        let mut buffer = samples.to_vec();
        if buffer.is_empty() {
            return buffer;
        }
        self.dct.process_dct2(&mut buffer);

        let scale = (2.0 / self.len as f64).sqrt();
        for coefficient in buffer.iter_mut() {
            *coefficient *= scale;
        }
        buffer[0] *= FRAC_1_SQRT_2;
        buffer
    }
}

/// Orthonormal type-II DCT of `samples`
pub fn dct_1d(samples: &[f64]) -> Vec<f64> {
    if samples.is_empty() {
        return Vec::new();
    }
    DctKernel::new(samples.len()).apply(samples)
}

/// Recursive Haar wavelet transform.
///
/// Each level replaces the active range with pairwise averages `(a + b) / 2`
/// followed by pairwise differences `(a - b) / 2`, then recurses on the
/// averages until fewer than two samples remain. The length should be a power
/// of two; for other lengths the trailing sample of an odd level is carried
/// through unchanged.
pub fn haar_1d(samples: &[f64]) -> Vec<f64> {
    let mut current = samples.to_vec();
    let mut len = current.len();

    while len >= 2 {
        let half = len / 2;
        let mut level = current.clone();
        for i in 0..half {
            let a = current[2 * i];
            let b = current[2 * i + 1];
            level[i] = (a + b) / 2.0;
            level[half + i] = (a - b) / 2.0;
        }
        current = level;
        len = half;
    }

    current
}

/// Apply `row_kernel` to every row, then `column_kernel` to every column of the result
pub fn separable<R, C>(matrix: &Array2<f64>, row_kernel: R, column_kernel: C) -> Array2<f64>
where
    R: Fn(&[f64]) -> Vec<f64>,
    C: Fn(&[f64]) -> Vec<f64>,
{
    let mut out = matrix.clone();
    for mut row in out.rows_mut() {
        let transformed = row_kernel(&row.to_vec());
        row.assign(&Array1::from(transformed));
    }
    for mut column in out.columns_mut() {
        let transformed = column_kernel(&column.to_vec());
        column.assign(&Array1::from(transformed));
    }
    out
}

/// Separable 2-D orthonormal DCT
pub fn dct_2d(matrix: &Array2<f64>) -> Array2<f64> {
    let (rows, columns) = matrix.dim();
    let row_kernel = DctKernel::new(columns);
    let column_kernel = DctKernel::new(rows);
    separable(
        matrix,
        |row| row_kernel.apply(row),
        |column| column_kernel.apply(column),
    )
}

/// Separable 2-D Haar wavelet transform
pub fn haar_2d(matrix: &Array2<f64>) -> Array2<f64> {
    separable(matrix, haar_1d, haar_1d)
}

/// Grid intensities as a `height × width` matrix
pub fn to_matrix(grid: &GrayGrid) -> Array2<f64> {
    let (width, height) = grid.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        grid.get(x as u32, y as u32) as f64
    })
}

/// Top-left `n × n` block flattened row-major; index 0 is the 2-D DC term
pub fn low_frequency_block(matrix: &Array2<f64>, n: usize) -> Vec<f64> {
    let (rows, columns) = matrix.dim();
    let n_rows = n.min(rows);
    let n_columns = n.min(columns);
    matrix
        .slice(s![..n_rows, ..n_columns])
        .iter()
        .copied()
        .collect()
}
