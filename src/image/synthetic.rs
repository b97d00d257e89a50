//! Synthetic canvases for demos and tests.
use super::{Color, ImageRgb, ImageViewMut};

/// Paint every other `cell × cell` square of `image` with `color`, leaving
/// the square at the origin untouched.
pub fn overlay_checker(mut image: ImageRgb, cell: usize, color: Color) -> ImageRgb {
    assert!(cell > 0, "cell size must be positive");

    for y in 0..image.h {
        let row = image.row_mut(y);
        for (x, px) in row.iter_mut().enumerate() {
            if (x / cell + y / cell) & 1 == 1 {
                *px = color;
            }
        }
    }
    image
}

/// Horizontal red ramp over a vertical blue ramp; green stays fixed.
pub fn gradient(width: usize, height: usize, green: u8) -> ImageRgb {
    let ramp = |i: usize, n: usize| -> u8 {
        if n <= 1 {
            0
        } else {
            (i * 255 / (n - 1)) as u8
        }
    };
    ImageRgb::from_fn(width, height, |x, y| {
        Color::new(ramp(x, width), green, ramp(y, height))
    })
}
