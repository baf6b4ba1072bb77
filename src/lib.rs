//! Binary halftoning of grayscale images by error diffusion with
//! intensity-dependent diffusion weights and noise-modulated thresholds.

use crate::{
    config::ProcessConfig,
    texture::{Texture, TextureRef},
    transform::TextureTransform,
};

pub mod config;
pub mod dithering;
pub mod error;
pub mod texture;
pub mod transform;
pub mod utils;


pub mod prelude {
    pub use crate::dithering::{ModulatedDiffusion, NoiseField, NoiseSeed, NoiseStrategy};
    pub use crate::error::{ModHalftoneError, Result};
    pub use crate::texture::prelude::*;
    pub use crate::transform::prelude::*;
}

/// Halftone one decoded grayscale texture as configured.
pub fn run(config: &ProcessConfig, input: &Texture<u8>) -> Texture<u8> {
    let mut output = Texture::new(input.width(), input.height());
    config
        .transform()
        .once(input.as_texture_slice(), output.as_texture_mut_slice());
    output
}
