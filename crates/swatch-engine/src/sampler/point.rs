//! Sample point value type.

use crate::color::{Lab, Rgb};

/// A sample point placed on the image.
///
/// `id` is unique within one working set and survives reordering. The
/// color fields are whatever the pixel source reported at `(x, y)` when the
/// point was placed or last moved.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePoint {
    /// Stable identifier within the owning working set
    pub id: u32,
    /// Horizontal position in source coordinates
    pub x: f64,
    /// Vertical position in source coordinates
    pub y: f64,
    /// Sampled color
    pub rgb: Rgb,
    /// Uppercase `#RRGGBB` form of `rgb`
    pub hex: String,
}

impl SamplePoint {
    /// Create a point; `hex` is derived from `rgb`.
    pub fn new(id: u32, x: f64, y: f64, rgb: Rgb) -> Self {
        Self {
            id,
            x,
            y,
            rgb,
            hex: rgb.to_hex(),
        }
    }

    /// The point's color in Lab space.
    #[inline]
    pub fn lab(&self) -> Lab {
        Lab::from(self.rgb)
    }

    /// Move the point and take the color found at the new position.
    pub fn relocate(&mut self, x: f64, y: f64, rgb: Rgb) {
        self.x = x;
        self.y = y;
        self.rgb = rgb;
        self.hex = rgb.to_hex();
    }
}
