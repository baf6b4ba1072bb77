use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemFn, parse_macro_input};

/// Compiles the annotated function for the SIMD targets modhalftone cares about
/// and dispatches to the best one at runtime.
///
/// This macro expands to `#[multiversion(targets(...))]`, so the crate using it
/// must depend on `multiversion` as well.
///
/// # Example
///
/// ```ignore
/// use modhalftone_macros::simd_targets;
///
/// #[simd_targets]
/// fn accumulate(errors: &mut [f32], diff: f32) {
///     errors.iter_mut().for_each(|e| *e += diff);
/// }
/// ```
#[proc_macro_attribute]
pub fn simd_targets(_attr: TokenStream, input: TokenStream) -> TokenStream {
    let func = parse_macro_input!(input as ItemFn);

    // debug builds only need a baseline per arch
    #[cfg(debug_assertions)]
    let expanded = quote! {
        #[multiversion::multiversion(targets(
            "x86_64+sse2",
            "aarch64+neon",
        ))]
        #func
    };

    #[cfg(not(debug_assertions))]
    let expanded = quote! {
        #[multiversion::multiversion(targets(
            "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
            "x86_64+avx2+fma",
            "x86_64+sse4.2",
            "x86_64+sse2",
            "aarch64+neon",
        ))]
        #func
    };

    TokenStream::from(expanded)
}
