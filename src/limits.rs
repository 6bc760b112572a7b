/// Size limits applied when a row table is packed into an [`Image`](crate::Image).
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
}

impl Limits {
    /// Check dimensions against limits. Returns Ok(()) or LimitExceeded error.
    pub(crate) fn check(&self, width: usize, height: usize) -> Result<(), crate::PictoolError> {
        let (width, height) = (width as u64, height as u64);
        if let Some(max_w) = self.max_width {
            if width > max_w {
                return Err(crate::PictoolError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if height > max_h {
                return Err(crate::PictoolError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = width.saturating_mul(height);
            if pixels > max_px {
                return Err(crate::PictoolError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PictoolError;

    #[test]
    fn default_is_unlimited() {
        assert!(Limits::default().check(usize::MAX, usize::MAX).is_ok());
    }

    #[test]
    fn width_and_height_are_checked_separately() {
        let limits = Limits {
            max_width: Some(4),
            max_height: Some(2),
            ..Default::default()
        };
        assert!(limits.check(4, 2).is_ok());
        assert!(matches!(
            limits.check(5, 1),
            Err(PictoolError::LimitExceeded(_))
        ));
        assert!(matches!(
            limits.check(1, 3),
            Err(PictoolError::LimitExceeded(_))
        ));
    }

    #[test]
    fn pixel_count() {
        let limits = Limits {
            max_pixels: Some(6),
            ..Default::default()
        };
        assert!(limits.check(3, 2).is_ok());
        assert!(limits.check(7, 1).is_err());
    }
}
