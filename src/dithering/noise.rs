use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::{iter::IndexedParallelIterator, iter::ParallelIterator, slice::ParallelSliceMut};

use crate::{
    error::{ModHalftoneError, Result},
    texture::{Texture, TextureRef, TextureShape},
};

/// Largest value a noise cell may hold.
pub const NOISE_MAX: u8 = 254;

/// Where the per-pixel noise comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoiseSeed {
    /// Fresh OS-seeded randomness on every invocation. Output is not
    /// reproducible across runs.
    #[default]
    Entropy,
    /// Deterministic noise derived from a user seed, one stream per row.
    Fixed(u64),
}

impl NoiseSeed {
    /// Seed for the `offset`-th independent invocation sharing this source.
    pub fn offset(self, offset: u64) -> Self {
        match self {
            NoiseSeed::Entropy => NoiseSeed::Entropy,
            NoiseSeed::Fixed(seed) => NoiseSeed::Fixed(seed.wrapping_add(offset)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseStrategy {
    Seq,
    Par,
}

impl NoiseStrategy {
    pub fn auto(shape_hint: TextureShape) -> Self {
        let (width, height) = shape_hint;
        let count = width * height;

        if width < 450 || count < 202500 {
            return NoiseStrategy::Seq;
        }
        NoiseStrategy::Par
    }
}

/// Per-pixel threshold noise, each cell uniform in `[0, NOISE_MAX]`.
///
/// Generated once per dithering invocation and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField {
    texture: Texture<u8>,
}

impl NoiseField {
    pub fn generate(width: u32, height: u32, seed: NoiseSeed) -> Self {
        let strategy = NoiseStrategy::auto((width as usize, height as usize));
        Self::generate_with(strategy, width, height, seed)
    }

    /// With [NoiseSeed::Fixed] both strategies produce the same field.
    pub fn generate_with(
        strategy: NoiseStrategy,
        width: u32,
        height: u32,
        seed: NoiseSeed,
    ) -> Self {
        log::debug!("generating {width}x{height} noise field ({strategy:?}, {seed:?})");

        let mut texture = Texture::<u8>::new(width, height);
        if texture.is_empty() {
            return Self { texture };
        }

        let row_len = width as usize;
        let cells = texture.as_mut();
        match (strategy, seed) {
            (NoiseStrategy::Seq, NoiseSeed::Entropy) => fill_row(cells, &mut rand::rng()),
            (NoiseStrategy::Par, NoiseSeed::Entropy) => cells
                .par_chunks_mut(row_len)
                .for_each_init(rand::rng, |rng, row| fill_row(row, rng)),
            (NoiseStrategy::Seq, NoiseSeed::Fixed(seed)) => cells
                .chunks_mut(row_len)
                .enumerate()
                .for_each(|(y, row)| fill_row(row, &mut row_rng(seed, y))),
            (NoiseStrategy::Par, NoiseSeed::Fixed(seed)) => cells
                .par_chunks_mut(row_len)
                .enumerate()
                .for_each(|(y, row)| fill_row(row, &mut row_rng(seed, y))),
        }

        Self { texture }
    }

    /// Wrap a caller-provided field, rejecting values above [NOISE_MAX].
    pub fn from_texture(texture: Texture<u8>) -> Result<Self> {
        if let Some((index, &value)) = texture
            .as_ref()
            .iter()
            .enumerate()
            .find(|(_, value)| **value > NOISE_MAX)
        {
            return Err(ModHalftoneError::InvalidNoise { index, value });
        }
        Ok(Self { texture })
    }

    #[inline]
    pub fn texture(&self) -> &Texture<u8> {
        &self.texture
    }

    #[inline]
    pub fn shape(&self) -> TextureShape {
        self.texture.shape()
    }
}

impl AsRef<[u8]> for NoiseField {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.texture.as_ref()
    }
}

#[inline]
fn fill_row<R: Rng + ?Sized>(row: &mut [u8], rng: &mut R) {
    for cell in row {
        *cell = rng.random_range(0..=NOISE_MAX);
    }
}

/// Independent stream per row so the fill order does not matter.
#[inline]
fn row_rng(seed: u64, row: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_range(field: &NoiseField) {
        for (idx, value) in field.as_ref().iter().enumerate() {
            assert!(*value <= NOISE_MAX, "noise {value} at {idx} out of range");
        }
    }

    #[test]
    fn test_entropy_noise_in_range() {
        for strategy in [NoiseStrategy::Seq, NoiseStrategy::Par] {
            let field = NoiseField::generate_with(strategy, 64, 48, NoiseSeed::Entropy);
            assert_eq!(field.shape(), (64, 48));
            assert_in_range(&field);
        }
    }

    #[test]
    fn test_noise_covers_whole_range() {
        let field = NoiseField::generate(255, 200, NoiseSeed::Fixed(7));
        let mut seen = [false; 256];
        for value in field.as_ref() {
            seen[*value as usize] = true;
        }
        assert!(seen[..=NOISE_MAX as usize].iter().all(|s| *s));
        assert!(!seen[255]);
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let a = NoiseField::generate(40, 30, NoiseSeed::Fixed(42));
        let b = NoiseField::generate(40, 30, NoiseSeed::Fixed(42));
        let c = NoiseField::generate(40, 30, NoiseSeed::Fixed(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_fixed_seed_rows_differ() {
        let field = NoiseField::generate(64, 2, NoiseSeed::Fixed(0));
        let (first, second) = field.as_ref().split_at(64);
        assert_ne!(first, second);
    }

    #[test]
    fn test_empty_field() {
        let field = NoiseField::generate_with(NoiseStrategy::Par, 0, 10, NoiseSeed::Entropy);
        assert!(field.as_ref().is_empty());
        assert_eq!(field.shape(), (0, 10));
    }

    #[test]
    fn test_from_texture_rejects_out_of_range() {
        let texture = Texture::from_slice(2, 2, &[0u8, 254, 255, 3]);
        match NoiseField::from_texture(texture) {
            Err(ModHalftoneError::InvalidNoise { index, value }) => {
                assert_eq!(index, 2);
                assert_eq!(value, 255);
            }
            other => panic!("expected InvalidNoise, got {other:?}"),
        }
    }

    #[test]
    fn test_strategy_auto_threshold() {
        assert_eq!(NoiseStrategy::auto((100, 100)), NoiseStrategy::Seq);
        assert_eq!(NoiseStrategy::auto((449, 10_000)), NoiseStrategy::Seq);
        assert_eq!(NoiseStrategy::auto((1920, 1080)), NoiseStrategy::Par);
    }

    #[test]
    fn test_seed_offset() {
        assert_eq!(NoiseSeed::Fixed(10).offset(3), NoiseSeed::Fixed(13));
        assert_eq!(NoiseSeed::Fixed(u64::MAX).offset(1), NoiseSeed::Fixed(0));
        assert_eq!(NoiseSeed::Entropy.offset(3), NoiseSeed::Entropy);
    }
}
