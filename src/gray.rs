//! Grayness test and channel-averaging grayscale conversion.
//!
//! A color counts as grayish when its channel spread (max minus min) is at
//! most [`GRAYISH_THRESHOLD`], a third of the 8-bit range. Conversion only
//! touches pixels that fail this test, replacing them with the floored mean of
//! their channels, so an already converted image is a fixed point.
use crate::image::{Color, ImageRgb};
use crate::map::map_if;
use log::debug;

/// Largest channel spread still considered gray.
pub const GRAYISH_THRESHOLD: u8 = 85;

#[inline]
pub fn is_grayish(c: Color) -> bool {
    c.spread() <= GRAYISH_THRESHOLD
}

/// All channels set to `floor((r + g + b) / 3)`.
#[inline]
pub fn average_channels(c: Color) -> Color {
    let sum = c.r as u16 + c.g as u16 + c.b as u16;
    Color::splat((sum / 3) as u8)
}

/// Average the channels of every pixel that is not grayish.
pub fn make_grayish(image: &ImageRgb) -> ImageRgb {
    let mut converted = 0usize;
    let out = map_if(
        image,
        |src, x, y| {
            let colorful = !is_grayish(src.get_pixel(x, y));
            converted += colorful as usize;
            colorful
        },
        average_channels,
    );
    debug!(
        "make_grayish {}x{} -> averaged {} of {} pixels",
        image.w,
        image.h,
        converted,
        image.pixel_count()
    );
    out
}
