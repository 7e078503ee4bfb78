//! CIE 1976 L\*a\*b\* color space (D65)
//!
//! Lab is used for every perceptual comparison in the engine: the sampler's
//! diversity check and the reference palette lookup both measure ΔE76,
//! the Euclidean distance between two Lab triples.
//!
//! # Conversion pipeline
//!
//! ```text
//! sRGB u8 --(/255, gamma decode)--> linear RGB
//!         --(sRGB D65 matrix, x100)--> XYZ
//!         --(/white point, f(t))-----> Lab
//! ```
//!
//! The conversion is deterministic: the same [`Rgb`] always produces the
//! bit-identical [`Lab`].

use super::rgb::{hex_to_rgb, Rgb};

/// D65 reference white (X, Y, Z) on the 0..100 scale.
pub const D65_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

/// Linear sRGB to XYZ (D65).
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ (D65) to linear sRGB.
const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

const EPSILON: f64 = 0.008856;
const KAPPA_SLOPE: f64 = 7.787;
const F_OFFSET: f64 = 16.0 / 116.0;

/// A color in CIE L\*a\*b\* space with a D65 white point.
///
/// # Components
///
/// - `l`: Lightness, 0 (black) to 100 (white)
/// - `a`: Green-red axis (negative = green)
/// - `b`: Blue-yellow axis (negative = blue)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a Lab color from its components.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// CIE76 color difference: Euclidean distance in Lab.
    ///
    /// # Example
    ///
    /// ```
    /// use swatch_engine::{Lab, Rgb};
    ///
    /// let black = Lab::from(Rgb::new(0, 0, 0));
    /// let white = Lab::from(Rgb::new(255, 255, 255));
    /// assert!((black.delta_e76(white) - 100.0).abs() < 0.5);
    /// ```
    #[inline]
    pub fn delta_e76(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// sRGB gamma decode for one channel in 0..=1.
#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode for one linear channel in 0..=1.
#[inline]
fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + F_OFFSET
    }
}

#[inline]
fn lab_f_inv(f: f64) -> f64 {
    let cubed = f * f * f;
    if cubed > EPSILON {
        cubed
    } else {
        (f - F_OFFSET) / KAPPA_SLOPE
    }
}

#[inline]
fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        let linear = [
            srgb_to_linear(rgb.r as f64 / 255.0),
            srgb_to_linear(rgb.g as f64 / 255.0),
            srgb_to_linear(rgb.b as f64 / 255.0),
        ];
        let xyz = mul(&SRGB_TO_XYZ, linear);

        let fx = lab_f(xyz[0] * 100.0 / D65_WHITE[0]);
        let fy = lab_f(xyz[1] * 100.0 / D65_WHITE[1]);
        let fz = lab_f(xyz[2] * 100.0 / D65_WHITE[2]);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Lab> for Rgb {
    /// Inverse conversion, rounded and clamped into the 8-bit gamut.
    fn from(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;

        let xyz = [
            lab_f_inv(fx) * D65_WHITE[0] / 100.0,
            lab_f_inv(fy) * D65_WHITE[1] / 100.0,
            lab_f_inv(fz) * D65_WHITE[2] / 100.0,
        ];
        let linear = mul(&XYZ_TO_SRGB, xyz);

        let encode = |c: f64| (linear_to_srgb(c.clamp(0.0, 1.0)) * 255.0).round() as u8;
        Rgb::new(encode(linear[0]), encode(linear[1]), encode(linear[2]))
    }
}

/// Convert a hex string to Lab, or `None` if the hex is malformed.
#[inline]
pub fn hex_to_lab(hex: &str) -> Option<Lab> {
    hex_to_rgb(hex).map(Lab::from)
}

/// Convert a Lab color back to its nearest `#RRGGBB` hex string.
#[inline]
pub fn lab_to_hex(lab: Lab) -> String {
    Rgb::from(lab).to_hex()
}

/// ΔE76 between two hex colors, or `None` if either is malformed.
pub fn delta_e76_hex(hex_a: &str, hex_b: &str) -> Option<f64> {
    Some(hex_to_lab(hex_a)?.delta_e76(hex_to_lab(hex_b)?))
}
