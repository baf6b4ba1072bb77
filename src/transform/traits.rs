use crate::texture::{TextureMutSlice, TextureRef, TextureShape, TextureSlice};

/// A whole-texture pass reading one texture and writing another of the same
/// shape, such as the halftoning scan.
///
/// Lifetimes are method-local: the borrowed views are handed back after the
/// pass so callers can keep using them.
pub trait TextureTransform: Sized {
    type Input;
    type Output;

    /// Run one pass from `input` into `output`.
    fn apply<'i, 'o>(
        &mut self,
        input: TextureSlice<'i, Self::Input>,
        output: TextureMutSlice<'o, Self::Output>,
    ) -> (
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    );

    /// Inspect shapes before the first pass. Implementations panic on shapes
    /// they cannot handle.
    fn prepare(&mut self, in_shape: TextureShape, out_shape: TextureShape);

    /// Apply once. Alias for [TextureTransform::prepare] followed by [TextureTransform::apply].
    fn once<'i, 'o>(
        mut self,
        input: TextureSlice<'i, Self::Input>,
        output: TextureMutSlice<'o, Self::Output>,
    ) -> (
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    ) {
        self.prepare(input.shape(), output.shape());
        self.apply(input, output)
    }
}
