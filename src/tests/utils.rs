use itertools::Itertools;
use rand::Rng;

use crate::{
    dithering::noise::{NOISE_MAX, NoiseField},
    texture::Texture,
};

pub const TEST_IMAGE_SIZE: u32 = 64;

pub fn gen_random_texture(width: u32, height: u32) -> Texture<u8> {
    let mut rng = rand::rng();
    let pixels = (0..width * height).map(|_| rng.random::<u8>()).collect_vec();
    Texture::from_vec(width, height, pixels)
}

pub fn gen_random_noise(width: u32, height: u32) -> NoiseField {
    let mut rng = rand::rng();
    let cells = (0..width * height)
        .map(|_| rng.random_range(0..=NOISE_MAX))
        .collect_vec();
    NoiseField::from_texture(Texture::from_vec(width, height, cells)).unwrap()
}

pub fn constant_noise(width: u32, height: u32, value: u8) -> NoiseField {
    NoiseField::from_texture(Texture::filled(width, height, value)).unwrap()
}

/// Horizontal ramp from black to white, one row repeated `height` times.
pub fn gradient_texture(width: u32, height: u32) -> Texture<u8> {
    let row = (0..width)
        .map(|x| (x * 255 / (width - 1).max(1)) as u8)
        .collect_vec();
    let pixels = (0..height).flat_map(|_| row.iter().copied()).collect_vec();
    Texture::from_vec(width, height, pixels)
}

pub fn assert_binary(texture: &Texture<u8>) {
    for (idx, value) in texture.as_ref().iter().enumerate() {
        assert!(
            *value == 0 || *value == 255,
            "non-binary output {value} at index {idx}"
        );
    }
}

pub fn white_fraction(texture: &Texture<u8>) -> f64 {
    let pixels = texture.as_ref();
    pixels.iter().filter(|p| **p == 255).count() as f64 / pixels.len() as f64
}
