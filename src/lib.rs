#![doc = include_str!("../README.md")]

// Core mapping surface.
pub mod blur;
pub mod gray;
pub mod image;
pub mod map;

// Demo plumbing: configurable pipelines, reports and JSON output.
pub mod config;
pub mod diagnostics;
pub mod io;
pub mod pipeline;

// --- High-level re-exports -------------------------------------------------

pub use crate::blur::{image_blur, pixel_blur};
pub use crate::gray::{is_grayish, make_grayish};
pub use crate::image::{Color, ImageRgb};
pub use crate::map::{map_coord, map_if, map_window, Window};
pub use crate::pipeline::{Operation, Pipeline};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use image_hof::prelude::*;
///
/// let img = ImageRgb::filled(4, 4, Color::new(10, 5, 100));
/// let gray = make_grayish(&img);
/// assert_eq!(gray.get_pixel(0, 0), Color::splat(38));
///
/// let marked = map_window(&gray, Window::pixel(2, 2), |_| Color::RED);
/// assert_eq!(marked.get_pixel(2, 2), Color::RED);
/// assert_eq!(marked.get_pixel(1, 2), Color::splat(38));
/// ```
pub mod prelude {
    pub use crate::image::{Color, ImageRgb, ImageView};
    pub use crate::{
        image_blur, is_grayish, make_grayish, map_coord, map_if, map_window, pixel_blur, Window,
    };
}
