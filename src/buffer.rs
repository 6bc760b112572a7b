use alloc::vec::Vec;

use imgref::ImgVec;
use rgb::RGBA8;

use crate::error::PictoolError;
use crate::limits::Limits;

/// The image buffer every transform operates on.
///
/// Row-major table of RGBA pixels. `height()` is the row count and
/// `width()` the length of every row; the container keeps the table
/// rectangular.
pub type Image = ImgVec<RGBA8>;

/// Pack a table of rows into an [`Image`].
///
/// Fails with [`PictoolError::EmptyImage`] when there are no rows or the
/// rows have no pixels, and with [`PictoolError::RaggedRow`] when a row's
/// length differs from the first row's.
pub fn from_rows<R: AsRef<[RGBA8]>>(rows: &[R]) -> Result<Image, PictoolError> {
    from_rows_with_limits(rows, &Limits::default())
}

/// Like [`from_rows`], additionally checking the dimensions against `limits`
/// before the packed buffer is allocated.
pub fn from_rows_with_limits<R: AsRef<[RGBA8]>>(
    rows: &[R],
    limits: &Limits,
) -> Result<Image, PictoolError> {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.as_ref().len());
    if width == 0 {
        return Err(PictoolError::EmptyImage);
    }
    for (row, pixels) in rows.iter().enumerate() {
        let actual = pixels.as_ref().len();
        if actual != width {
            return Err(PictoolError::RaggedRow {
                row,
                expected: width,
                actual,
            });
        }
    }
    limits.check(width, height)?;

    let mut buf = Vec::with_capacity(width * height);
    for row in rows {
        buf.extend_from_slice(row.as_ref());
    }
    Ok(ImgVec::new(buf, width, height))
}

/// Unpack an [`Image`] into one `Vec` per row, dropping any stride padding.
pub fn to_rows(image: &Image) -> Vec<Vec<RGBA8>> {
    image.rows().map(<[RGBA8]>::to_vec).collect()
}
