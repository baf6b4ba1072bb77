//! Threshold-modulated variable-coefficient error diffusion.
//!
//! [calibration] holds the two per-intensity tables, [threshold] the per-pixel
//! binarization, [error_diffusion] the residual spreading and [scan] the
//! raster-order driver tying them together with a [noise] field.

pub mod calibration;
pub mod error_diffusion;
pub mod noise;
pub mod scan;
pub mod threshold;

pub use noise::{NoiseField, NoiseSeed, NoiseStrategy};
pub use scan::{ModulatedDiffusion, dither, dither_batch, dither_with_noise};
