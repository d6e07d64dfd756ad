use crate::errors::BrowseError;

/// Source and target dimensions of an image scaled into a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FittedImage {
    pub source_width: u32,
    pub source_height: u32,
    pub target_width: u32,
    pub target_height: u32,
}

impl FittedImage {
    /// A zero-size placeholder used when the image cannot be shown.
    pub fn placeholder() -> Self {
        FittedImage {
            source_width: 0,
            source_height: 0,
            target_width: 0,
            target_height: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.target_width == 0 || self.target_height == 0
    }
}

/// Scale `source` to the largest size fitting in `box`, keeping the aspect
/// ratio. Upscaling is allowed.
pub fn fit(
    source_width: u32,
    source_height: u32,
    box_width: u32,
    box_height: u32,
) -> Result<FittedImage, BrowseError> {
    if source_width == 0 || source_height == 0 {
        return Err(BrowseError::InvalidImage {
            width: source_width,
            height: source_height,
        });
    }

    let sw = source_width as f64;
    let sh = source_height as f64;
    let scale = (box_width as f64 / sw).min(box_height as f64 / sh);

    // The min() absorbs float error on the binding axis.
    let target_width = ((sw * scale).round() as u32).min(box_width);
    let target_height = ((sh * scale).round() as u32).min(box_height);

    Ok(FittedImage {
        source_width,
        source_height,
        target_width,
        target_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wide_image_into_square_box() {
        let f = fit(1000, 500, 40, 40).unwrap();
        assert_eq!((f.target_width, f.target_height), (40, 20));
    }

    #[test]
    fn small_image_is_upscaled() {
        let f = fit(10, 20, 100, 100).unwrap();
        assert_eq!((f.target_width, f.target_height), (50, 100));
    }

    #[test]
    fn zero_dimension_is_invalid() {
        assert!(matches!(fit(0, 10, 5, 5), Err(BrowseError::InvalidImage { .. })));
        assert!(matches!(fit(10, 0, 5, 5), Err(BrowseError::InvalidImage { .. })));
    }

    #[test]
    fn zero_box_collapses() {
        let f = fit(300, 200, 0, 50).unwrap();
        assert!(f.is_empty());
        assert!(FittedImage::placeholder().is_empty());
    }

    proptest! {
        #[test]
        fn stays_in_box_and_keeps_ratio(
            sw in 1u32..5000,
            sh in 1u32..5000,
            bw in 0u32..1000,
            bh in 0u32..1000,
        ) {
            let f = fit(sw, sh, bw, bh).unwrap();
            prop_assert!(f.target_width <= bw);
            prop_assert!(f.target_height <= bh);
            let skew = (f.target_width as i64 * sh as i64 - f.target_height as i64 * sw as i64).abs();
            prop_assert!(skew <= sw.max(sh) as i64, "skew {} for {:?}", skew, f);
        }
    }
}
