use crate::gray::is_grayish;
use crate::image::{ImageRgb, ImageView};
use serde::{Deserialize, Serialize};

/// Coarse statistics of an image, reported before and after a pipeline run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSummary {
    pub width: usize,
    pub height: usize,
    pub pixel_count: usize,
    pub grayish_pixels: usize,
    /// Per-channel mean in `[r, g, b]` order; zeros for an empty image.
    pub mean_color: [f64; 3],
}

impl ImageSummary {
    pub fn from_image(image: &ImageRgb) -> Self {
        let mut sums = [0u64; 3];
        let mut grayish_pixels = 0usize;
        for px in image.pixels() {
            sums[0] += px.r as u64;
            sums[1] += px.g as u64;
            sums[2] += px.b as u64;
            grayish_pixels += is_grayish(px) as usize;
        }
        let pixel_count = image.pixel_count();
        let denom = pixel_count.max(1) as f64;
        Self {
            width: image.width(),
            height: image.height(),
            pixel_count,
            grayish_pixels,
            mean_color: sums.map(|s| s as f64 / denom),
        }
    }

    pub fn grayish_ratio(&self) -> f64 {
        if self.pixel_count == 0 {
            return 1.0;
        }
        self.grayish_pixels as f64 / self.pixel_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Color;

    #[test]
    fn counts_grayish_and_means() {
        let img = ImageRgb::from_fn(2, 1, |x, _| if x == 0 { Color::RED } else { Color::GRAY });
        let s = ImageSummary::from_image(&img);
        assert_eq!(s.pixel_count, 2);
        assert_eq!(s.grayish_pixels, 1);
        assert_eq!(s.mean_color, [191.5, 64.0, 64.0]);
        assert_eq!(s.grayish_ratio(), 0.5);
    }

    #[test]
    fn empty_image_has_zero_means() {
        let s = ImageSummary::from_image(&ImageRgb::new(0, 3));
        assert_eq!(s.pixel_count, 0);
        assert_eq!(s.mean_color, [0.0; 3]);
        assert_eq!(s.grayish_ratio(), 1.0);
    }
}
