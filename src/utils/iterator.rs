/// Raster-order walk over a `width` x `height` grid yielding
/// `(x, y, pixel_idx)` tuples: left to right, then top to bottom.
///
/// A grid with a zero dimension yields nothing.
#[derive(Debug, Clone, Copy)]
pub struct GridIterator {
    width: usize,
    len: usize,
    x: usize,
    y: usize,
    pixel_idx: usize,
}

impl GridIterator {
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            len: width * height,
            x: 0,
            y: 0,
            pixel_idx: 0,
        }
    }
}

impl Iterator for GridIterator {
    type Item = (usize, usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pixel_idx >= self.len {
            return None;
        }

        let result = (self.x, self.y, self.pixel_idx);

        self.pixel_idx += 1;
        self.x += 1;

        if self.x >= self.width {
            self.x = 0;
            self.y += 1;
        }

        Some(result)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pixel_idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIterator {}
