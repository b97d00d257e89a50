pub mod color;
pub mod rgb;
pub mod synthetic;
pub mod traits;

pub use self::color::Color;
pub use self::rgb::ImageRgb;
pub use self::traits::{ImageView, ImageViewMut, Pixels, Rows};
