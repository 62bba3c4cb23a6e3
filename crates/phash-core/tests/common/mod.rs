#![allow(dead_code)]

use image::{DynamicImage, ImageBuffer, Rgb};

/// Low-frequency gray pattern with distinct structure in both axes
pub fn smooth_image(width: u32, height: u32) -> DynamicImage {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let (fx, fy) = (x as f64, y as f64);
        let value = 128.0
            + 50.0 * (fx / 20.0).sin()
            + 40.0 * (fy / 31.0).cos()
            + 20.0 * ((fx + 2.0 * fy) / 13.0).sin();
        let v = value.round().clamp(0.0, 255.0) as u8;
        Rgb([v, v, v])
    });
    DynamicImage::ImageRgb8(img)
}

/// Deterministic gray noise in `[20, 220)`
pub fn noise_image(width: u32, height: u32, seed: u64) -> DynamicImage {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let img = ImageBuffer::from_fn(width, height, |_, _| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let v = 20 + ((state >> 33) % 200) as u8;
        Rgb([v, v, v])
    });
    DynamicImage::ImageRgb8(img)
}

/// Every channel raised by `amount`, saturating
pub fn brighten(img: &DynamicImage, amount: u8) -> DynamicImage {
    let mut rgb = img.to_rgb8();
    for pixel in rgb.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            *channel = channel.saturating_add(amount);
        }
    }
    DynamicImage::ImageRgb8(rgb)
}
