mod traits;

pub use traits::TextureTransform;

pub mod prelude {
    pub use super::TextureTransform;
}
