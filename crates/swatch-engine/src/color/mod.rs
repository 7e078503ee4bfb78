//! Color types and conversion utilities
//!
//! - [`Rgb`]: 8-bit sRGB as read from image data; hex `#RRGGBB` identity
//! - [`Lab`]: CIE L\*a\*b\* (D65) for perceptual distance (ΔE76)
//!
//! # Example
//!
//! ```
//! use swatch_engine::{Lab, Rgb};
//!
//! let rgb: Rgb = "#3C85D5".parse().unwrap();
//! let lab = Lab::from(rgb);
//! assert!(lab.l > 0.0 && lab.l < 100.0);
//! assert_eq!(Lab::from(rgb), lab);
//! ```

mod error;
mod lab;
mod rgb;

pub use error::ParseColorError;
pub use lab::{delta_e76_hex, hex_to_lab, lab_to_hex, Lab, D65_WHITE};
pub use rgb::{average_pairwise_distance, color_distance, hex_to_rgb, Rgb};
