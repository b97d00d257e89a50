//! Higher-order pixel mapping.
//!
//! Every mapper reads from the borrowed source image and writes into a fresh
//! copy, so callbacks always observe original pixel values regardless of the
//! order in which coordinates are visited. Visiting order is column-major
//! (x outer, y inner).

pub mod window;

pub use window::{Interval, Window};

use crate::image::{Color, ImageRgb};
use log::warn;

/// Build a new image whose pixel `(x, y)` is `f(image, x, y)`.
pub fn map_coord<F>(image: &ImageRgb, mut f: F) -> ImageRgb
where
    F: FnMut(&ImageRgb, usize, usize) -> Color,
{
    let mut out = image.clone();
    for x in 0..image.w {
        for y in 0..image.h {
            out.set_pixel(x, y, f(image, x, y));
        }
    }
    out
}

/// Apply `transform` to the pixels where `cond` holds, copying the rest.
pub fn map_if<C, T>(image: &ImageRgb, mut cond: C, mut transform: T) -> ImageRgb
where
    C: FnMut(&ImageRgb, usize, usize) -> bool,
    T: FnMut(Color) -> Color,
{
    map_coord(image, |src, x, y| {
        let px = src.get_pixel(x, y);
        if cond(src, x, y) {
            transform(px)
        } else {
            px
        }
    })
}

/// Apply `transform` to the pixels inside `window`.
///
/// The window is not clipped or validated: parts outside the image and
/// reversed intervals simply match no pixels.
pub fn map_window<T>(image: &ImageRgb, window: Window, transform: T) -> ImageRgb
where
    T: FnMut(Color) -> Color,
{
    if window.is_empty() {
        warn!("map_window called with empty window {window:?}; image is copied unchanged");
    }
    map_if(image, |_, x, y| window.contains(x, y), transform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_sees_original_pixels() {
        // Each output pixel copies its left neighbour; reading from the output
        // would smear column 0 across the whole row.
        let img = ImageRgb::from_fn(4, 1, |x, _| Color::splat(x as u8 * 10));
        let out = map_coord(&img, |src, x, y| src.get_pixel(x.saturating_sub(1), y));
        let row: Vec<u8> = (0..4).map(|x| out.get_pixel(x, 0).r).collect();
        assert_eq!(row, vec![0, 0, 10, 20]);
    }

    #[test]
    fn visits_every_coordinate_once_x_outer() {
        let img = ImageRgb::new(3, 2);
        let mut visited = Vec::new();
        map_coord(&img, |src, x, y| {
            visited.push((x, y));
            src.get_pixel(x, y)
        });
        assert_eq!(visited, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn map_if_leaves_unmatched_pixels() {
        let img = ImageRgb::from_fn(4, 4, |x, _| if x < 2 { Color::RED } else { Color::BLUE });
        let out = map_if(
            &img,
            |src, x, y| src.get_pixel(x, y) == Color::RED,
            |_| Color::new(43, 88, 52),
        );
        assert_eq!(out.get_pixel(1, 3), Color::new(43, 88, 52));
        assert_eq!(out.get_pixel(2, 3), Color::BLUE);
    }

    #[test]
    fn window_beyond_image_is_noop() {
        let img = ImageRgb::filled(3, 3, Color::WHITE);
        let out = map_window(&img, Window::new([5, 9], [0, 2]), |_| Color::BLACK);
        assert_eq!(out, img);
    }
}
