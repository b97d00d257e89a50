use image_hof::image::{Color, ImageRgb};

/// Deterministic pseudo-random colors, different at every coordinate.
pub fn scrambled_rgb(width: usize, height: usize) -> ImageRgb {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    ImageRgb::from_fn(width, height, |x, y| {
        let seed = (x * 73 + y * 151) as u32;
        Color::new(
            (seed.wrapping_mul(37) % 256) as u8,
            (seed.wrapping_mul(101) % 256) as u8,
            (seed.wrapping_mul(13) % 256) as u8,
        )
    })
}

/// Left half `left`, right half `right`.
pub fn split_rgb(width: usize, height: usize, left: Color, right: Color) -> ImageRgb {
    ImageRgb::from_fn(width, height, |x, _| if x < width / 2 { left } else { right })
}
