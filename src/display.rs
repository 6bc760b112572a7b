//! Diagnostic pretty-printing of image pixels.

use alloc::string::String;
use core::fmt::Write as _;

use rgb::RGBA8;

use crate::buffer::Image;

/// Text form of one pixel, `rgba(r,g,b,a)`.
pub fn pixel_text(pixel: &RGBA8) -> String {
    let mut text = String::with_capacity(21);
    // Writing to a String cannot fail.
    let _ = write!(text, "rgba({},{},{},{})", pixel.r, pixel.g, pixel.b, pixel.a);
    text
}

/// Render the image as a bracket-nested table, one pixel per line.
///
/// Output starts with an empty line. Each row opens with `[`, the whole
/// table with `[  [`; row ends are padded so their closing brackets line up:
///
/// ```text
///
/// [  [  rgba(1,2,3,4),
///       rgba(255,255,255,255) ],
///    [  rgba(0,0,0,0),
///       rgba(9,9,9,9)         ]  ]
/// ```
pub fn render(image: &Image) -> String {
    let (width, height) = (image.width(), image.height());
    let maxsize = image
        .rows()
        .flat_map(|row| row.iter())
        .map(|pixel| pixel_text(pixel).len())
        .max()
        .unwrap_or(0);

    let mut out = String::from("\n");
    for (y, row) in image.rows().enumerate() {
        for (x, pixel) in row.iter().enumerate() {
            let text = pixel_text(pixel);
            out.push_str(match (y, x) {
                (0, 0) => "[  [  ",
                (_, 0) => "   [  ",
                _ => "      ",
            });
            out.push_str(&text);
            if x + 1 == width {
                out.extend(core::iter::repeat_n(' ', maxsize - text.len()));
                out.push_str(if y + 1 == height { " ]  ]" } else { " ]," });
            } else {
                out.push(',');
            }
            out.push('\n');
        }
    }
    out
}

/// Print [`render`] to stdout.
///
/// Inspects without modifying, so always returns `false`.
#[cfg(feature = "std")]
pub fn display(image: &Image) -> bool {
    print!("{}", render(image));
    false
}
