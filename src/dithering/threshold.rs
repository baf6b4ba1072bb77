use crate::dithering::calibration::modulation_strength;

/// Output level for pixels below the modulated threshold.
pub const BLACK: u8 = 0;
/// Output level for pixels at or above the modulated threshold.
pub const WHITE: u8 = 255;

/// Base binarization threshold before modulation.
pub const BASE_THRESHOLD: f32 = 128.0;

/// Binarize a corrected level against a noise-modulated threshold.
///
/// The level is clamped into `[0, 255]` and floored only to select the
/// modulation strength, the decision itself compares the corrected level.
/// Total over every `f32`: a NaN level selects index 0 and resolves to [BLACK].
#[inline(always)]
pub fn threshold(corrected_level: f32, noise: u8) -> u8 {
    // `as` saturates, NaN maps to 0
    let index = corrected_level.clamp(0.0, 255.0).floor() as u8;
    let modulation = f32::from(noise % 128) * modulation_strength(index);

    if corrected_level >= BASE_THRESHOLD + modulation {
        WHITE
    } else {
        BLACK
    }
}
