use image::DynamicImage;
use std::path::Path;

use super::Hasher;
use crate::error::Result;
use crate::grid::{ImageGridProvider, ResizeFilter};
use crate::hash::PHash;

/// Calculate a perceptual hash from an image in memory
pub fn phash_from_img(img: &DynamicImage, hasher: &Hasher, filter: ResizeFilter) -> Result<PHash> {
    hasher.hash(&ImageGridProvider::new(img, filter))
}

/// Calculate a perceptual hash from an image file
pub fn phash_from_file<P: AsRef<Path>>(
    path: P,
    hasher: &Hasher,
    filter: ResizeFilter,
) -> Result<PHash> {
    hasher.validate()?;
    let img = image::open(path)?;
    phash_from_img(&img, hasher, filter)
}
