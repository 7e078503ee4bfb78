//! Pixel source abstraction.
//!
//! The engine never decodes images itself. A host supplies a
//! [`PixelSource`] that answers "what color is at `(x, y)`?" in the same
//! coordinate space the sampler draws from (usually display pixels).

use std::sync::Arc;

use crate::color::Rgb;

/// Something that can report the color at a point of an image.
pub trait PixelSource {
    /// Color at `(x, y)`. Implementations decide how to map fractional
    /// coordinates to pixels and how to treat points outside the image.
    fn color_at(&self, x: f64, y: f64) -> Rgb;
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    #[inline]
    fn color_at(&self, x: f64, y: f64) -> Rgb {
        (**self).color_at(x, y)
    }
}

impl<T: PixelSource + ?Sized> PixelSource for Arc<T> {
    #[inline]
    fn color_at(&self, x: f64, y: f64) -> Rgb {
        (**self).color_at(x, y)
    }
}

impl<T: PixelSource + ?Sized> PixelSource for Box<T> {
    #[inline]
    fn color_at(&self, x: f64, y: f64) -> Rgb {
        (**self).color_at(x, y)
    }
}

/// A [`PixelSource`] backed by a closure. Created by [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnSource<F>(F);

impl<F> PixelSource for FnSource<F>
where
    F: Fn(f64, f64) -> Rgb,
{
    #[inline]
    fn color_at(&self, x: f64, y: f64) -> Rgb {
        (self.0)(x, y)
    }
}

/// Wrap a closure as a [`PixelSource`].
///
/// # Example
///
/// ```
/// use swatch_engine::{from_fn, PixelSource, Rgb};
///
/// let gradient = from_fn(|x, _y| Rgb::new(x.clamp(0.0, 255.0) as u8, 0, 0));
/// assert_eq!(gradient.color_at(10.0, 3.0), Rgb::new(10, 0, 0));
/// ```
pub fn from_fn<F>(f: F) -> FnSource<F>
where
    F: Fn(f64, f64) -> Rgb,
{
    FnSource(f)
}
