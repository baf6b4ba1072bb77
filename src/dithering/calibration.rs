//! Static calibration data for threshold-modulated variable-coefficient
//! error diffusion.
//!
//! Both tables are indexed by the original 8-bit intensity of a pixel and are
//! reproduced verbatim from the published calibration. They are symmetric
//! around mid-gray: entry `k` equals entry `255 - k`.

mod tables;

pub use tables::{COEFFICIENTS, MODULATION_STRENGTH};

/// Relative diffusion weights for one intensity level.
///
/// Weights are ratios over `sum`, never absolute magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coefficients {
    /// same row, next column
    pub right: u32,
    /// next row, previous column
    pub down_left: u32,
    /// next row, same column
    pub down: u32,
    /// normalization sum, `>= right + down_left + down`
    pub sum: u32,
}

impl Coefficients {
    pub const fn new(right: u32, down_left: u32, down: u32, sum: u32) -> Self {
        Self {
            right,
            down_left,
            down,
            sum,
        }
    }

    /// Split a quantization residual into `[right, down_left, down]` terms.
    ///
    /// Ratios are evaluated in double precision, the terms are narrowed to the
    /// precision of the error buffer.
    #[inline]
    pub fn split(&self, diff: f32) -> [f32; 3] {
        let diff = f64::from(diff);
        let sum = f64::from(self.sum);
        [
            (diff * f64::from(self.right) / sum) as f32,
            (diff * f64::from(self.down_left) / sum) as f32,
            (diff * f64::from(self.down) / sum) as f32,
        ]
    }
}

/// Diffusion weights selected by the original (uncorrected) intensity.
#[inline(always)]
pub fn coefficients(level: u8) -> &'static Coefficients {
    &COEFFICIENTS[level as usize]
}

/// Modulation strength for a clamped, floored intensity level.
#[inline(always)]
pub fn modulation_strength(level: u8) -> f32 {
    MODULATION_STRENGTH[level as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficient_rows_are_normalizable() {
        for (level, row) in COEFFICIENTS.iter().enumerate() {
            assert!(row.sum > 0, "level {level} has an empty normalization sum");
            assert!(
                row.sum >= row.right + row.down_left + row.down,
                "level {level} weights exceed their sum: {row:?}"
            );
        }
    }

    #[test]
    fn test_modulation_strength_in_unit_range() {
        for (level, strength) in MODULATION_STRENGTH.iter().enumerate() {
            assert!(
                (0.0..=1.0).contains(strength),
                "level {level} modulation out of range: {strength}"
            );
        }
    }

    #[test]
    fn test_tables_mirror_around_mid_gray() {
        for level in 0..=255u8 {
            let mirrored = 255 - level;
            assert_eq!(coefficients(level), coefficients(mirrored));
            assert_eq!(modulation_strength(level), modulation_strength(mirrored));
        }
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(*coefficients(0), Coefficients::new(13, 0, 5, 18));
        assert_eq!(*coefficients(255), Coefficients::new(13, 0, 5, 18));
        assert_eq!(
            *coefficients(128),
            Coefficients::new(35269, 36066, 28664, 99999)
        );
        assert_eq!(modulation_strength(0), 0.0);
        assert_eq!(modulation_strength(50), 0.34);
        assert_eq!(modulation_strength(90), 1.0);
        assert_eq!(modulation_strength(127), 1.0);
        assert_eq!(modulation_strength(200), 0.34);
    }

    #[test]
    fn test_black_level_conserves_error() {
        let row = coefficients(0);
        assert_eq!(row.split(18.0), [13.0, 0.0, 5.0]);

        for diff in [-127.5_f32, -3.25, 0.5, 42.0, 255.0] {
            let total: f32 = row.split(diff).iter().sum();
            assert!(
                (total - diff).abs() <= diff.abs() * 1e-6,
                "diff {diff} diffused as {total}"
            );
        }
    }
}
