use crate::dithering::calibration::coefficients;

/// Accumulated quantization error for one scan.
///
/// Holds one extra row and column past the image so right/down terms of the
/// last column and row land in padding that is never read back.
#[derive(Debug, Clone)]
pub struct ErrorBuffer {
    stride: usize,
    rows: usize,
    cells: Vec<f32>,
}

impl ErrorBuffer {
    /// Zeroed buffer for an image of `width` x `height` pixels.
    pub fn new(width: usize, height: usize) -> Self {
        let stride = width + 1;
        let rows = height + 1;
        Self {
            stride,
            rows,
            cells: vec![0.0; stride * rows],
        }
    }

    /// Error diffused into `(x, y)` so far.
    #[inline(always)]
    pub fn pending(&self, x: usize, y: usize) -> f32 {
        self.cells[y * self.stride + x]
    }

    /// Spread `diff` from `(x, y)` into its right, down-left and down
    /// neighbours using the weights of the original intensity `level`.
    ///
    /// Targets outside the buffer are dropped, nothing wraps or reflects.
    #[inline(always)]
    pub fn distribute(&mut self, diff: f32, x: usize, y: usize, level: u8) {
        let [right, down_left, down] = coefficients(level).split(diff);
        let idx = y * self.stride + x;

        if x + 1 < self.stride {
            self.cells[idx + 1] += right;
        }
        if y + 1 < self.rows {
            let below = idx + self.stride;
            if x > 0 {
                self.cells[below - 1] += down_left;
            }
            self.cells[below] += down;
        }
    }

    /// Buffer extent, padding included.
    pub fn shape(&self) -> (usize, usize) {
        (self.stride, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sum of every cell inside the `width` x `height` image area.
    fn image_total(buffer: &ErrorBuffer, width: usize, height: usize) -> f32 {
        let mut total = 0.0;
        for y in 0..height {
            for x in 0..width {
                total += buffer.pending(x, y);
            }
        }
        total
    }

    #[test]
    fn test_buffer_is_padded_and_zeroed() {
        let buffer = ErrorBuffer::new(4, 3);
        assert_eq!(buffer.shape(), (5, 4));
        for y in 0..4 {
            for x in 0..5 {
                assert_eq!(buffer.pending(x, y), 0.0);
            }
        }
    }

    #[test]
    fn test_interior_pixel_reaches_three_neighbours() {
        let mut buffer = ErrorBuffer::new(3, 3);
        // level 0 weights: 13 / 0 / 5 over 18
        buffer.distribute(36.0, 1, 1, 0);

        assert_eq!(buffer.pending(2, 1), 26.0);
        assert_eq!(buffer.pending(0, 2), 0.0);
        assert_eq!(buffer.pending(1, 2), 10.0);
        assert_eq!(image_total(&buffer, 3, 3), 36.0);
    }

    #[test]
    fn test_down_left_weight_lands_below_left() {
        let mut buffer = ErrorBuffer::new(3, 3);
        // level 10 has a non-zero down-left weight
        let [right, down_left, down] = coefficients(10).split(100.0);
        buffer.distribute(100.0, 1, 0, 10);

        assert_eq!(buffer.pending(2, 0), right);
        assert_eq!(buffer.pending(0, 1), down_left);
        assert_eq!(buffer.pending(1, 1), down);
    }

    #[test]
    fn test_first_column_drops_down_left_term() {
        let mut buffer = ErrorBuffer::new(3, 3);
        let [right, _, down] = coefficients(10).split(100.0);
        buffer.distribute(100.0, 0, 0, 10);

        assert_eq!(buffer.pending(1, 0), right);
        assert_eq!(buffer.pending(0, 1), down);
        assert_eq!(image_total(&buffer, 3, 3), right + down);
    }

    #[test]
    fn test_last_column_never_feeds_right_term_into_image() {
        let mut buffer = ErrorBuffer::new(3, 3);
        let [_, down_left, down] = coefficients(10).split(100.0);
        buffer.distribute(100.0, 2, 0, 10);

        assert_eq!(buffer.pending(1, 1), down_left);
        assert_eq!(buffer.pending(2, 1), down);
        assert_eq!(image_total(&buffer, 3, 3), down_left + down);
    }

    #[test]
    fn test_last_row_never_feeds_down_terms_into_image() {
        let mut buffer = ErrorBuffer::new(3, 3);
        let [right, _, _] = coefficients(10).split(100.0);
        buffer.distribute(100.0, 1, 2, 10);

        assert_eq!(buffer.pending(2, 2), right);
        assert_eq!(image_total(&buffer, 3, 3), right);
    }

    #[test]
    fn test_contributions_accumulate() {
        let mut buffer = ErrorBuffer::new(3, 2);
        // (1, 1) collects the down term of (1, 0) and the right term of (0, 1)
        buffer.distribute(18.0, 0, 0, 0);
        buffer.distribute(18.0, 1, 0, 0);
        assert_eq!(buffer.pending(1, 0), 13.0);
        assert_eq!(buffer.pending(1, 1), 5.0);

        buffer.distribute(-18.0, 0, 1, 0);
        assert_eq!(buffer.pending(1, 1), -8.0);
    }

    #[test]
    fn test_single_pixel_buffer_keeps_image_cell_clean() {
        let mut buffer = ErrorBuffer::new(1, 1);
        buffer.distribute(-200.0, 0, 0, 128);
        assert_eq!(buffer.pending(0, 0), 0.0);
    }
}
