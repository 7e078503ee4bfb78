//! Decoded images as pixel sources.
//!
//! Callers sample in display coordinates (the size the image is shown at),
//! while colors come from the full-resolution raster. [`RasterSource`]
//! bridges the two: `raster = floor(display / display_size * natural_size)`,
//! clamped into the raster so edge and out-of-range points read the
//! nearest border pixel.

use base64::Engine as _;
use image::RgbImage;
use std::path::Path;
use swatch_engine::{PixelSource, Rgb};

use crate::error::ImageError;

/// Upper bound on decoded image area.
pub const MAX_IMAGE_PIXELS: u64 = 40_000_000;

/// A decoded RGB raster with a display size for coordinate mapping.
#[derive(Debug, Clone)]
pub struct RasterSource {
    pixels: RgbImage,
    display_width: f64,
    display_height: f64,
}

impl RasterSource {
    /// Wrap an already decoded raster. The display size defaults to the
    /// natural size.
    pub fn from_image(pixels: RgbImage) -> Result<Self, ImageError> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(ImageError::Empty);
        }
        if width as u64 * height as u64 > MAX_IMAGE_PIXELS {
            return Err(ImageError::TooLarge {
                width,
                height,
                max: MAX_IMAGE_PIXELS,
            });
        }
        Ok(Self {
            pixels,
            display_width: width as f64,
            display_height: height as f64,
        })
    }

    /// Decode PNG, JPEG, GIF, BMP or WebP bytes. Alpha is dropped.
    pub fn decode(bytes: &[u8]) -> Result<Self, ImageError> {
        let reader = image::ImageReader::new(std::io::Cursor::new(bytes)).with_guessed_format()?;
        let (width, height) = reader.into_dimensions()?;
        if width as u64 * height as u64 > MAX_IMAGE_PIXELS {
            return Err(ImageError::TooLarge {
                width,
                height,
                max: MAX_IMAGE_PIXELS,
            });
        }
        let decoded = image::load_from_memory(bytes)?;
        Self::from_image(decoded.to_rgb8())
    }

    /// Decode a base64 string, with or without a `data:` URL prefix.
    pub fn decode_base64(data: &str) -> Result<Self, ImageError> {
        let payload = match data.split_once(";base64,") {
            Some((prefix, payload)) if prefix.starts_with("data:") => payload,
            _ => data,
        };
        let bytes = base64::engine::general_purpose::STANDARD.decode(payload.trim())?;
        Self::decode(&bytes)
    }

    /// Read and decode an image file.
    pub fn open(path: &Path) -> Result<Self, ImageError> {
        let bytes = std::fs::read(path)?;
        Self::decode(&bytes)
    }

    /// Set the size the image is displayed at. Non-positive values keep
    /// the natural size for that axis.
    pub fn with_display_size(mut self, width: f64, height: f64) -> Self {
        if width > 0.0 {
            self.display_width = width;
        }
        if height > 0.0 {
            self.display_height = height;
        }
        self
    }

    /// Raster dimensions in pixels.
    #[inline]
    pub fn natural_size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Display dimensions used for coordinate mapping.
    #[inline]
    pub fn display_size(&self) -> (f64, f64) {
        (self.display_width, self.display_height)
    }

    /// Map a display coordinate to a raster pixel.
    pub fn to_raster(&self, x: f64, y: f64) -> (u32, u32) {
        let (nw, nh) = self.pixels.dimensions();
        (
            scale_axis(x, self.display_width, nw),
            scale_axis(y, self.display_height, nh),
        )
    }
}

fn scale_axis(value: f64, display: f64, natural: u32) -> u32 {
    let max = natural.saturating_sub(1) as f64;
    // NaN survives clamp and then casts to 0.
    (value / display * natural as f64).floor().clamp(0.0, max) as u32
}

impl PixelSource for RasterSource {
    fn color_at(&self, x: f64, y: f64) -> Rgb {
        let (px, py) = self.to_raster(x, y);
        let [r, g, b] = self.pixels.get_pixel(px, py).0;
        Rgb::new(r, g, b)
    }
}
