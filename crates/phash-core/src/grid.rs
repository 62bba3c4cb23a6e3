//! Grayscale intensity grids and the provider that builds them from images.
//!
//! The hashing algorithms never decode or resize images. They consume a
//! [`GrayGrid`] of exactly the dimensions they ask for, and anything that can
//! produce such a grid implements [`GridProvider`].

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, GrayImage};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A `width × height` matrix of 8-bit intensities, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayGrid {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if data.len() != width as usize * height as usize {
            return Err(Error::Format(format!(
                "grid of {}x{} needs {} samples, got {}",
                width,
                height,
                width as usize * height as usize,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid by evaluating `f(x, y)` for every sample
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Intensity at column `x`, row `y`
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// All samples in row-major order
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn ensure_dimensions(&self, expected: (u32, u32)) -> Result<()> {
        if self.dimensions() != expected {
            return Err(Error::GridDimensions {
                expected,
                actual: self.dimensions(),
            });
        }
        Ok(())
    }
}

impl From<GrayImage> for GrayGrid {
    fn from(img: GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

/// Anything that can supply a grayscale grid at requested dimensions
pub trait GridProvider {
    fn grid(&self, width: u32, height: u32) -> Result<GrayGrid>;
}

/// Resampling filter used when shrinking an image to the hash grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeFilter {
    Nearest,
    /// Bilinear
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResizeFilter {
    pub fn filter_type(&self) -> FilterType {
        match self {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Convert to grayscale first, then resample to exactly `width × height`
pub fn grid_from_image(
    img: &DynamicImage,
    width: u32,
    height: u32,
    filter: ResizeFilter,
) -> Result<GrayGrid> {
    if width == 0 || height == 0 {
        return Err(Error::GridDimensions {
            expected: (width, height),
            actual: img.dimensions(),
        });
    }
    let gray = img.to_luma8();
    let resized = if gray.dimensions() == (width, height) {
        gray
    } else {
        imageops::resize(&gray, width, height, filter.filter_type())
    };
    Ok(GrayGrid::from(resized))
}

/// An image paired with the filter used to sample it
pub struct ImageGridProvider<'a> {
    image: &'a DynamicImage,
    filter: ResizeFilter,
}

impl<'a> ImageGridProvider<'a> {
    pub fn new(image: &'a DynamicImage, filter: ResizeFilter) -> Self {
        Self { image, filter }
    }
}

impl GridProvider for ImageGridProvider<'_> {
    fn grid(&self, width: u32, height: u32) -> Result<GrayGrid> {
        grid_from_image(self.image, width, height, self.filter)
    }
}

impl GridProvider for DynamicImage {
    fn grid(&self, width: u32, height: u32) -> Result<GrayGrid> {
        grid_from_image(self, width, height, ResizeFilter::default())
    }
}

impl GridProvider for GrayGrid {
    /// A grid only provides itself; it never resamples
    fn grid(&self, width: u32, height: u32) -> Result<GrayGrid> {
        self.ensure_dimensions((width, height))?;
        Ok(self.clone())
    }
}
