//! Per-pixel colour transforms: greyscale/sepia and red-channel removal.

use rgb::RGBA8;

use crate::buffer::Image;

/// Luma-like brightness `0.3 * r + 0.6 * g + 0.1 * b`.
///
/// Evaluated left to right in f64, so results can land a hair below the
/// exact decimal value (`(1, 1, 1)` gives `0.9999…`).
#[inline]
pub fn brightness(pixel: RGBA8) -> f64 {
    f64::from(pixel.r) * 0.3 + f64::from(pixel.g) * 0.6 + f64::from(pixel.b) * 0.1
}

/// Convert the image to greyscale, or to sepia tone when `sepia` is true.
///
/// Brightness is computed once per pixel from its original channels and
/// truncated toward zero, never rounded:
///
/// - greyscale: `r = g = b = brightness`
/// - sepia: `r = brightness`, `g = 0.6 * brightness`, `b = 0.4 * brightness`
///
/// Alpha is left alone. Always returns `true`.
pub fn mono(image: &mut Image, sepia: bool) -> bool {
    for row in image.rows_mut() {
        for pixel in row.iter_mut() {
            let level = brightness(*pixel);
            // `as u8` truncates toward zero and saturates.
            pixel.r = level as u8;
            if sepia {
                pixel.g = (0.6 * level) as u8;
                pixel.b = (0.4 * level) as u8;
            } else {
                pixel.g = level as u8;
                pixel.b = level as u8;
            }
        }
    }
    true
}

/// Zero the red channel of every pixel. Always returns `true`.
pub fn dered(image: &mut Image) -> bool {
    for row in image.rows_mut() {
        for pixel in row.iter_mut() {
            pixel.r = 0;
        }
    }
    true
}
