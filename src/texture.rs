use image::{GrayImage, ImageBuffer, ImageFormat, Luma};
use std::path::Path;

use crate::error::ModHalftoneError;

/// (width, height)
pub type TextureShape = (usize, usize);

/// Trait defining ops available on Textures with
/// lendable inner buffer
pub trait TextureRef: AsRef<[Self::Inner]> {
    type Inner;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    #[inline]
    fn shape(&self) -> TextureShape {
        (self.width() as usize, self.height() as usize)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Trait defining ops available on mutable
/// Textures
pub trait TextureMut: TextureRef + AsMut<[Self::Inner]> {}

/// Texture with owned buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture<T> {
    width: u32,
    height: u32,
    buffer: Vec<T>,
}

impl<T> AsRef<[T]> for Texture<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.buffer
    }
}

impl<T> AsMut<[T]> for Texture<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.buffer
    }
}

impl<T> TextureRef for Texture<T> {
    type Inner = T;

    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }
}

impl<T> TextureMut for Texture<T> {}

impl<T> Texture<T> {
    /// # Panics
    ///
    /// Panics if the buffer length does not match `width * height`.
    pub fn from_vec(width: u32, height: u32, buffer: Vec<T>) -> Self {
        assert_eq!(
            buffer.len(),
            width as usize * height as usize,
            "buffers don't match sizes"
        );
        Self {
            width,
            height,
            buffer,
        }
    }

    pub fn as_texture_slice(&self) -> TextureSlice<'_, T> {
        TextureSlice {
            width: self.width,
            height: self.height,
            buffer: &self.buffer,
        }
    }

    pub fn as_texture_mut_slice(&mut self) -> TextureMutSlice<'_, T> {
        TextureMutSlice {
            width: self.width,
            height: self.height,
            buffer: &mut self.buffer,
        }
    }
}

impl<T: Clone> Texture<T> {
    pub fn from_slice(width: u32, height: u32, slice: &[T]) -> Self {
        Self::from_vec(width, height, slice.to_owned())
    }

    pub fn filled(width: u32, height: u32, value: T) -> Self {
        Self {
            width,
            height,
            buffer: vec![value; width as usize * height as usize],
        }
    }
}

impl<T: Default + Copy> Texture<T> {
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, T::default())
    }
}

impl<T: Copy> Texture<T> {
    /// # Panics
    /// This function will panic if `(x, y)` is outside the texture.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> T {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.buffer[y as usize * self.width as usize + x as usize]
    }
}

impl Texture<u8> {
    /// Decode any format `image` understands and reduce it to 8-bit luma.
    pub fn from_luma8_image<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        // color input is converted with the image crate's Rec. 709 luma weights
        let image = image::ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(ModHalftoneError::ImageDecode)?
            .to_luma8();
        Ok(image.into())
    }

    /// Encode as a single channel image. Without an explicit `format` the
    /// encoder is picked from the path extension.
    pub fn write_luma8_image<P: AsRef<Path>>(
        &self,
        path: P,
        format: Option<ImageFormat>,
    ) -> crate::error::Result {
        let image: ImageBuffer<Luma<u8>, &[u8]> =
            ImageBuffer::from_raw(self.width, self.height, self.buffer.as_slice())
                .expect("image buffers don't match");
        match format {
            Some(format) => image.save_with_format(path, format),
            None => image.save(path),
        }
        .map_err(ModHalftoneError::ImageEncode)
    }
}

impl From<GrayImage> for Texture<u8> {
    fn from(value: GrayImage) -> Self {
        let (width, height) = value.dimensions();
        Texture::from_vec(width, height, value.into_raw())
    }
}

impl From<Texture<u8>> for GrayImage {
    fn from(value: Texture<u8>) -> Self {
        GrayImage::from_raw(value.width, value.height, value.buffer)
            .expect("image buffers don't match")
    }
}

/// Texture with borrowed internal buffer
#[derive(Debug, Copy, Clone)]
pub struct TextureSlice<'a, T> {
    width: u32,
    height: u32,
    buffer: &'a [T],
}

impl<T> AsRef<[T]> for TextureSlice<'_, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.buffer
    }
}

impl<T> TextureRef for TextureSlice<'_, T> {
    type Inner = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl<'a, T> TextureSlice<'a, T> {
    pub fn new(width: u32, height: u32, buffer: &'a [T]) -> Self {
        assert_eq!(
            buffer.len(),
            width as usize * height as usize,
            "buffers don't match sizes"
        );
        Self {
            width,
            height,
            buffer,
        }
    }
}

#[derive(Debug)]
pub struct TextureMutSlice<'a, T> {
    width: u32,
    height: u32,
    buffer: &'a mut [T],
}

impl<T> AsRef<[T]> for TextureMutSlice<'_, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.buffer
    }
}

impl<T> AsMut<[T]> for TextureMutSlice<'_, T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.buffer
    }
}

impl<T> TextureRef for TextureMutSlice<'_, T> {
    type Inner = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl<T> TextureMut for TextureMutSlice<'_, T> {}

impl<'a, T> TextureMutSlice<'a, T> {
    pub fn new(width: u32, height: u32, buffer: &'a mut [T]) -> Self {
        assert_eq!(
            buffer.len(),
            width as usize * height as usize,
            "buffers don't match sizes"
        );
        Self {
            width,
            height,
            buffer,
        }
    }
}

pub mod prelude {
    pub use super::{
        Texture, TextureMut, TextureMutSlice, TextureRef, TextureShape, TextureSlice,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_row_major_access() {
        let texture = Texture::from_slice(3, 2, &[0u8, 1, 2, 3, 4, 5]);
        assert_eq!(texture.shape(), (3, 2));
        assert_eq!(texture.get(2, 0), 2);
        assert_eq!(texture.get(0, 1), 3);
        assert_eq!(texture.get(2, 1), 5);
    }

    #[test]
    fn test_empty_textures() {
        assert!(Texture::<u8>::new(0, 5).is_empty());
        assert!(Texture::<u8>::new(5, 0).is_empty());
        assert!(!Texture::<u8>::new(1, 1).is_empty());
    }

    #[test]
    fn test_borrowed_views_share_shape() {
        let mut pixels = vec![7u8; 6];
        let view = TextureSlice::new(2, 3, &pixels);
        assert_eq!(view.shape(), (2, 3));
        assert_eq!(view.as_ref(), &[7u8; 6]);

        let mut view = TextureMutSlice::new(3, 2, &mut pixels);
        view.as_mut()[5] = 0;
        assert_eq!(view.shape(), (3, 2));
        assert_eq!(pixels[5], 0);
    }

    #[test]
    #[should_panic(expected = "buffers don't match sizes")]
    fn test_mismatched_buffer_panics() {
        let _ = Texture::from_slice(2, 2, &[0u8; 3]);
    }

    #[test]
    fn test_gray_image_conversion_keeps_layout() {
        let image = GrayImage::from_fn(4, 3, |x, y| Luma([(y * 4 + x) as u8]));
        let texture: Texture<u8> = image.clone().into();
        assert_eq!(texture.as_ref(), image.as_raw().as_slice());

        let back: GrayImage = texture.into();
        assert_eq!(back, image);
    }
}
