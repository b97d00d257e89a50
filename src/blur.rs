//! 3×3 box blur with border-aware normalisation.
//!
//! Neighbors outside the image are skipped rather than clamped, and the sum
//! is divided by the number of samples actually taken: 4 at corners, 6 along
//! edges, 9 in the interior.
use crate::image::{Color, ImageRgb};
use crate::map::map_coord;
use log::debug;

/// In-bounds coordinates of the 3×3 neighborhood centered at `(x, y)`,
/// in column-major order. Empty for an empty image or a center more than
/// one pixel outside it.
pub fn neighborhood(image: &ImageRgb, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
    let x_lo = x.saturating_sub(1);
    let y_lo = y.saturating_sub(1);
    // Exclusive ends so a zero extent yields an empty range.
    let x_end = x.saturating_add(2).min(image.w);
    let y_end = y.saturating_add(2).min(image.h);
    (x_lo..x_end).flat_map(move |i| (y_lo..y_end).map(move |j| (i, j)))
}

/// Per-channel floored mean over the valid 3×3 neighborhood of `(x, y)`.
///
/// Panics if `(x, y)` is outside the image.
pub fn pixel_blur(image: &ImageRgb, x: usize, y: usize) -> Color {
    assert!(
        image.contains(x, y),
        "blur center ({x}, {y}) out of bounds for {}x{} image",
        image.w,
        image.h
    );
    let mut acc = [0u32; 3];
    let mut count = 0u32;
    for (i, j) in neighborhood(image, x, y) {
        let px = image.get_pixel(i, j);
        acc[0] += px.r as u32;
        acc[1] += px.g as u32;
        acc[2] += px.b as u32;
        count += 1;
    }
    // count >= 1: the center itself is always in bounds.
    Color::new(
        (acc[0] / count) as u8,
        (acc[1] / count) as u8,
        (acc[2] / count) as u8,
    )
}

/// Blur every pixel, always sampling from the unblurred input.
pub fn image_blur(image: &ImageRgb) -> ImageRgb {
    debug!("image_blur {}x{}", image.w, image.h);
    map_coord(image, pixel_blur)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighborhood_sizes() {
        let img = ImageRgb::new(5, 4);
        assert_eq!(neighborhood(&img, 0, 0).count(), 4);
        assert_eq!(neighborhood(&img, 4, 3).count(), 4);
        assert_eq!(neighborhood(&img, 2, 0).count(), 6);
        assert_eq!(neighborhood(&img, 0, 2).count(), 6);
        assert_eq!(neighborhood(&img, 2, 2).count(), 9);
    }

    #[test]
    fn thin_images_shrink_neighborhood() {
        let row = ImageRgb::new(3, 1);
        assert_eq!(neighborhood(&row, 0, 0).count(), 2);
        assert_eq!(neighborhood(&row, 1, 0).count(), 3);
        let single = ImageRgb::new(1, 1);
        assert_eq!(neighborhood(&single, 0, 0).collect::<Vec<_>>(), vec![(0, 0)]);
    }

    #[test]
    fn empty_images_have_no_neighbors() {
        assert_eq!(neighborhood(&ImageRgb::new(0, 0), 0, 0).count(), 0);
        assert_eq!(neighborhood(&ImageRgb::new(0, 4), 0, 1).count(), 0);
        assert_eq!(neighborhood(&ImageRgb::new(4, 0), 1, 0).count(), 0);
    }

    #[test]
    fn neighbors_always_inside_image() {
        let img = ImageRgb::new(3, 2);
        for (x, y) in [(0, 0), (2, 1), (3, 1), (4, 0), (9, 9)] {
            for (i, j) in neighborhood(&img, x, y) {
                assert!(img.contains(i, j), "({i}, {j}) from center ({x}, {y})");
            }
        }
        assert_eq!(neighborhood(&img, 9, 9).count(), 0);
        assert_eq!(neighborhood(&img, usize::MAX, 0).count(), 0);
    }

    #[test]
    fn corner_averages_four_samples() {
        // Only (0, 0) is bright; corner divisor 4 gives 100 / 4.
        let img = ImageRgb::from_fn(3, 3, |x, y| {
            if (x, y) == (0, 0) {
                Color::splat(100)
            } else {
                Color::BLACK
            }
        });
        assert_eq!(pixel_blur(&img, 0, 0), Color::splat(25));
        assert_eq!(pixel_blur(&img, 1, 0), Color::splat(16));
        assert_eq!(pixel_blur(&img, 1, 1), Color::splat(11));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn center_outside_panics() {
        let img = ImageRgb::new(2, 2);
        let _ = pixel_blur(&img, 5, 0);
    }
}
