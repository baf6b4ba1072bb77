use modhalftone_macros::simd_targets;
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

use crate::{
    dithering::{
        error_diffusion::ErrorBuffer,
        noise::{NoiseField, NoiseSeed, NoiseStrategy},
        threshold::threshold,
    },
    texture::{Texture, TextureMut, TextureMutSlice, TextureRef, TextureShape, TextureSlice},
    transform::TextureTransform,
    utils::iterator::GridIterator,
};

/// Threshold-modulated variable-coefficient error diffusion.
///
/// Every [TextureTransform::apply] is one independent invocation: it draws a
/// fresh noise field from the configured [NoiseSeed] and owns its own error
/// buffer, so a fixed seed replays the same output for the same input.
#[derive(Debug, Clone, Default)]
pub struct ModulatedDiffusion {
    seed: NoiseSeed,
    strategy: Option<NoiseStrategy>,
}

impl ModulatedDiffusion {
    pub fn new(seed: NoiseSeed) -> Self {
        Self {
            seed,
            strategy: None,
        }
    }

    /// Pin the noise generation strategy instead of picking it per shape.
    pub fn with_strategy(mut self, strategy: NoiseStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn seed(&self) -> NoiseSeed {
        self.seed
    }
}

impl TextureTransform for ModulatedDiffusion {
    type Input = u8;
    type Output = u8;

    fn apply<'i, 'o>(
        &mut self,
        input: TextureSlice<'i, Self::Input>,
        mut output: TextureMutSlice<'o, Self::Output>,
    ) -> (
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    ) {
        let strategy = self
            .strategy
            .unwrap_or_else(|| NoiseStrategy::auto(input.shape()));
        let noise = NoiseField::generate_with(strategy, input.width(), input.height(), self.seed);
        dither_with_noise(&input, &noise, &mut output);
        (input, output)
    }

    fn prepare(&mut self, in_shape: TextureShape, out_shape: TextureShape) {
        assert_eq!(in_shape, out_shape, "input and output shapes don't match");
        if self.strategy.is_none() {
            self.strategy = Some(NoiseStrategy::auto(in_shape));
        }
    }
}

/// Halftone `input` into `output` with an explicit noise field.
///
/// Cells are visited once in raster order, output cells are exactly 0 or 255.
/// Empty textures are a no-op.
///
/// # Panics
///
/// Panics if `input`, `noise` and `output` differ in shape.
pub fn dither_with_noise<I, O>(input: &I, noise: &NoiseField, output: &mut O)
where
    I: TextureRef<Inner = u8>,
    O: TextureMut<Inner = u8>,
{
    assert_eq!(
        input.shape(),
        output.shape(),
        "input and output shapes don't match"
    );
    assert_eq!(
        input.shape(),
        noise.shape(),
        "noise field doesn't match the input shape"
    );

    let (width, height) = input.shape();
    log::debug!("scanning {width}x{height} texture");

    let mut errors = ErrorBuffer::new(width, height);
    scan(
        input.as_ref(),
        noise.as_ref(),
        output.as_mut(),
        &mut errors,
        width,
        height,
    );
}

/// Halftone a whole texture with noise drawn from `seed`.
pub fn dither(input: &Texture<u8>, seed: NoiseSeed) -> Texture<u8> {
    let mut output = Texture::new(input.width(), input.height());
    ModulatedDiffusion::new(seed).once(input.as_texture_slice(), output.as_texture_mut_slice());
    output
}

/// Halftone independent textures concurrently.
///
/// Each texture is its own invocation with its own error buffer and noise
/// field. A fixed seed `s` gives texture `i` the seed `s + i`.
pub fn dither_batch(inputs: &[Texture<u8>], seed: NoiseSeed) -> Vec<Texture<u8>> {
    log::debug!("dithering batch of {} textures", inputs.len());
    inputs
        .par_iter()
        .enumerate()
        .map(|(idx, input)| dither(input, seed.offset(idx as u64)))
        .collect()
}

#[simd_targets]
fn scan(
    input: &[u8],
    noise: &[u8],
    output: &mut [u8],
    errors: &mut ErrorBuffer,
    width: usize,
    height: usize,
) {
    for (x, y, idx) in GridIterator::new(width, height) {
        let level = input[idx];
        let corrected = f32::from(level) + errors.pending(x, y);
        let decision = threshold(corrected, noise[idx]);

        errors.distribute(corrected - f32::from(decision), x, y, level);
        output[idx] = decision;
    }
}
