//! Test fixtures: generated images and library files.

use base64::Engine as _;
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Quadrant colors of [`quadrant_png`], clockwise from top left.
pub const QUADRANT_COLORS: [[u8; 3]; 4] = [
    [230, 30, 30],
    [30, 200, 40],
    [245, 245, 245],
    [20, 40, 220],
];

/// A `size × size` PNG split into four flat quadrants.
pub fn quadrant_png(size: u32) -> Vec<u8> {
    let half = size / 2;
    let img = RgbImage::from_fn(size, size, |x, y| {
        let index = match (x < half, y < half) {
            (true, true) => 0,
            (false, true) => 1,
            (false, false) => 2,
            (true, false) => 3,
        };
        Rgb(QUADRANT_COLORS[index])
    });
    encode_png(&img)
}

/// A flat single-color PNG.
pub fn solid_png(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    encode_png(&RgbImage::from_pixel(width, height, Rgb(color)))
}

/// A smooth two-axis gradient PNG.
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
        ])
    });
    encode_png(&img)
}

pub fn encode_png(img: &RgbImage) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .expect("PNG encoding failed");
    out.into_inner()
}

pub fn to_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// A three-entry library in YAML.
pub const SMALL_LIBRARY_YAML: &str = r##"- id: 10
  hex: "#ff0000"
- id: 20
  hex: "#00FF00"
- id: 30
  hex: "#0000ff"
"##;
