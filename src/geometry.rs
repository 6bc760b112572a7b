//! Geometric transforms: flip, transpose and 90° rotation.
//!
//! Pixels are only relocated, never altered. `transpose` and `rotate` swap
//! width and height and replace the caller's image in place.

use alloc::vec::Vec;

use imgref::ImgVec;

use crate::buffer::Image;

/// Mirror the image left-right, or top-bottom when `vertical` is true.
///
/// Always returns `true`.
pub fn flip(image: &mut Image, vertical: bool) -> bool {
    if vertical {
        reverse_rows(image);
    } else {
        for row in image.rows_mut() {
            row.reverse();
        }
    }
    true
}

/// Swap rows and columns: an `R`×`C` image becomes `C`×`R` with
/// `new[i][j] == old[j][i]`.
///
/// The transposed table is built completely before it replaces `image`, so
/// no read observes a partial write. Always returns `true`.
pub fn transpose(image: &mut Image) -> bool {
    let (width, height) = (image.width(), image.height());
    // An image without pixels has no transposed counterpart with a valid stride.
    if width == 0 || height == 0 {
        return true;
    }

    let mut transposed = Vec::with_capacity(width * height);
    for x in 0..width {
        transposed.extend(image.rows().map(|row| row[x]));
    }
    *image = ImgVec::new(transposed, height, width);
    true
}

/// Rotate the image 90° left, or right when `right` is true.
///
/// Left is transpose followed by row reversal; right is row reversal
/// followed by transpose. The order decides the direction. Always returns
/// `true`.
pub fn rotate(image: &mut Image, right: bool) -> bool {
    if right {
        reverse_rows(image);
        transpose(image);
    } else {
        transpose(image);
        reverse_rows(image);
    }
    true
}

/// Reverse the order of rows, honouring the buffer's stride.
fn reverse_rows(image: &mut Image) {
    let (width, height, stride) = (image.width(), image.height(), image.stride());
    let buf = image.buf_mut();
    for top in 0..height / 2 {
        let bottom = height - 1 - top;
        let (head, tail) = buf.split_at_mut(bottom * stride);
        head[top * stride..top * stride + width].swap_with_slice(&mut tail[..width]);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::buffer::to_rows;
    use rgb::RGBA8;

    /// `rows`×`cols` image whose red channel numbers the pixels in reading order.
    fn numbered(cols: usize, rows: usize) -> Image {
        let buf = (0..cols * rows)
            .map(|i| RGBA8::new(i as u8, 0, 0, 255))
            .collect();
        ImgVec::new(buf, cols, rows)
    }

    fn reds(image: &Image) -> Vec<Vec<u8>> {
        image
            .rows()
            .map(|row| row.iter().map(|px| px.r).collect())
            .collect()
    }

    #[test]
    fn flip_horizontal_reverses_each_row() {
        let mut image = numbered(3, 2);
        assert!(flip(&mut image, false));
        assert_eq!(reds(&image), vec![vec![2, 1, 0], vec![5, 4, 3]]);
    }

    #[test]
    fn flip_vertical_reverses_row_order() {
        let mut image = numbered(2, 3);
        assert!(flip(&mut image, true));
        assert_eq!(reds(&image), vec![vec![4, 5], vec![2, 3], vec![0, 1]]);
    }

    #[test]
    fn flip_vertical_with_padded_stride() {
        let px = |v: u8| RGBA8::new(v, 0, 0, 255);
        let buf = vec![
            px(1), px(2), px(99), px(3), px(4), px(99), px(5), px(6), px(99),
        ];
        let mut image = ImgVec::new_stride(buf, 2, 3, 3);
        flip(&mut image, true);
        assert_eq!(reds(&image), vec![vec![5, 6], vec![3, 4], vec![1, 2]]);
    }

    #[test]
    fn transpose_swaps_shape() {
        let mut image = numbered(3, 2);
        assert!(transpose(&mut image));
        assert_eq!((image.width(), image.height()), (2, 3));
        assert_eq!(reds(&image), vec![vec![0, 3], vec![1, 4], vec![2, 5]]);
    }

    #[test]
    fn transpose_single_row_and_column() {
        let mut image = numbered(4, 1);
        transpose(&mut image);
        assert_eq!(reds(&image), vec![vec![0], vec![1], vec![2], vec![3]]);
        transpose(&mut image);
        assert_eq!(reds(&image), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn rotate_left() {
        // 0 1 2        2 5
        // 3 4 5   ->   1 4
        //              0 3
        let mut image = numbered(3, 2);
        assert!(rotate(&mut image, false));
        assert_eq!(reds(&image), vec![vec![2, 5], vec![1, 4], vec![0, 3]]);
    }

    #[test]
    fn rotate_right() {
        // 0 1 2        3 0
        // 3 4 5   ->   4 1
        //              5 2
        let mut image = numbered(3, 2);
        assert!(rotate(&mut image, true));
        assert_eq!(reds(&image), vec![vec![3, 0], vec![4, 1], vec![5, 2]]);
    }

    #[test]
    fn rotate_keeps_all_channels() {
        let mut image = ImgVec::new(
            vec![RGBA8::new(1, 2, 3, 4), RGBA8::new(5, 6, 7, 8)],
            2,
            1,
        );
        rotate(&mut image, false);
        assert_eq!(
            to_rows(&image),
            vec![vec![RGBA8::new(5, 6, 7, 8)], vec![RGBA8::new(1, 2, 3, 4)]]
        );
    }
}
