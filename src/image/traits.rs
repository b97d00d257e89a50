/// Read-only access to a row-major pixel grid.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    /// Iterate all pixels in row-major order.
    fn pixels(&self) -> Pixels<'_, Self>
    where
        Self: Sized,
    {
        Pixels {
            rows: self.rows(),
            current: Default::default(),
        }
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}

pub struct Pixels<'a, I: ImageView> {
    rows: Rows<'a, I>,
    current: std::slice::Iter<'a, I::Pixel>,
}

impl<'a, I: ImageView> Iterator for Pixels<'a, I> {
    type Item = I::Pixel;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(px) = self.current.next() {
                return Some(*px);
            }
            self.current = self.rows.next()?.iter();
        }
    }
}
