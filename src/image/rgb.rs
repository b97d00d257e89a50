//! Owned RGB image in row-major layout (stride == width).
//!
//! The grid every mapping function reads from and allocates. Out-of-range
//! `get_pixel`/`set_pixel` panic through slice indexing; use
//! [`ImageRgb::pixel_checked`] when the coordinate may fall outside.
use super::Color;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRgb {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<Color>,
}

impl ImageRgb {
    /// Construct a black image of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, Color::BLACK)
    }

    /// Construct an image of size `w × h` with every pixel set to `fill`.
    pub fn filled(w: usize, h: usize, fill: Color) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![fill; w * h],
        }
    }

    /// Construct an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(w: usize, h: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Color,
    {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.w && y < self.h
    }

    #[inline]
    /// Get the pixel at (x, y).
    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        assert!(
            self.contains(x, y),
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.w,
            self.h
        );
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel at (x, y).
    pub fn set_pixel(&mut self, x: usize, y: usize, c: Color) {
        assert!(
            self.contains(x, y),
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.w,
            self.h
        );
        let i = self.idx(x, y);
        self.data[i] = c;
    }

    /// Get the pixel at (x, y), or `None` outside the image.
    pub fn pixel_checked(&self, x: usize, y: usize) -> Option<Color> {
        self.contains(x, y).then(|| self.data[self.idx(x, y)])
    }

    pub fn pixel_count(&self) -> usize {
        self.w * self.h
    }
}

impl crate::image::traits::ImageView for ImageRgb {
    type Pixel = Color;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[Color] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageRgb {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Color] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{ImageView, ImageViewMut};

    #[test]
    fn from_fn_is_row_major() {
        let img = ImageRgb::from_fn(3, 2, |x, y| Color::new(x as u8, y as u8, 0));
        assert_eq!(img.row(1)[2], Color::new(2, 1, 0));
        assert_eq!(img.get_pixel(2, 1), Color::new(2, 1, 0));
        assert_eq!(img.rows().count(), 2);
    }

    #[test]
    fn clone_has_independent_storage() {
        let original = ImageRgb::filled(4, 4, Color::WHITE);
        let mut copy = original.clone();
        copy.set_pixel(1, 1, Color::RED);
        copy.row_mut(3)[0] = Color::BLUE;
        assert_eq!(original.get_pixel(1, 1), Color::WHITE);
        assert_eq!(original.get_pixel(0, 3), Color::WHITE);
        assert_ne!(original, copy);
    }

    #[test]
    fn checked_access_outside_is_none() {
        let img = ImageRgb::new(2, 3);
        assert_eq!(img.pixel_checked(1, 2), Some(Color::BLACK));
        assert_eq!(img.pixel_checked(2, 0), None);
        assert_eq!(img.pixel_checked(0, 3), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_outside_panics() {
        let img = ImageRgb::new(2, 2);
        let _ = img.get_pixel(0, 2);
    }
}
