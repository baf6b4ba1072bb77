use itertools::Itertools;
use modhalftone::{
    dithering::{NoiseField, NoiseSeed},
    texture::Texture,
};
use rand::Rng;

pub const BENCH_SEED: u64 = 0x5eed;

/// Horizontal ramp with a little per-pixel jitter, closer to a photo than
/// a flat fill.
pub fn bench_texture(width: u32, height: u32) -> Texture<u8> {
    let mut rng = rand::rng();
    let pixels = (0..height)
        .cartesian_product(0..width)
        .map(|(_, x)| {
            let base = (x * 255 / width.saturating_sub(1).max(1)) as i32;
            (base + rng.random_range(-8..=8)).clamp(0, 255) as u8
        })
        .collect_vec();
    std::hint::black_box(Texture::from_vec(width, height, pixels))
}

/// Owned input, output and a fixed noise field of the same shape
pub fn scan_data(size: u32) -> (Texture<u8>, NoiseField, Texture<u8>) {
    (
        bench_texture(size, size),
        std::hint::black_box(NoiseField::generate(size, size, NoiseSeed::Fixed(BENCH_SEED))),
        std::hint::black_box(Texture::new(size, size)),
    )
}
