//! 8-bit sRGB color type
//!
//! [`Rgb`] is the only representation that touches image data. Its hex form
//! (`#RRGGBB`, uppercase) is the externally visible identity of a color.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// A color as three gamma-encoded 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as an uppercase `#RRGGBB` string.
    ///
    /// # Example
    /// ```
    /// use swatch_engine::Rgb;
    /// assert_eq!(Rgb::new(255, 128, 0).to_hex(), "#FF8000");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Euclidean distance between two colors in raw RGB space.
    ///
    /// This is the cheap spread metric used to score whole sample sets; it
    /// is not perceptual. Use [`Lab::delta_e76`](crate::Lab::delta_e76) for
    /// perceptual differences.
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB` or `RRGGBB` in either case. Leading and trailing
    /// whitespace is trimmed. Shorthand `#RGB` is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch_engine::Rgb;
    ///
    /// let orange: Rgb = "#ff8000".parse().unwrap();
    /// assert_eq!(orange, Rgb::new(255, 128, 0));
    ///
    /// assert!("#F00".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // Checked up front so that slicing below stays on char boundaries
        // and `from_str_radix` never sees a sign character.
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidCharacter(bad));
        }
        if s.len() != 6 {
            return Err(ParseColorError::InvalidLength);
        }

        let r = u8::from_str_radix(&s[0..2], 16)?;
        let g = u8::from_str_radix(&s[2..4], 16)?;
        let b = u8::from_str_radix(&s[4..6], 16)?;
        Ok(Self::new(r, g, b))
    }
}

/// Parse a hex string, returning `None` for malformed input.
#[inline]
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    hex.parse().ok()
}

/// RGB Euclidean distance between two hex colors.
///
/// Returns `None` if either string is not a valid hex color.
pub fn color_distance(hex_a: &str, hex_b: &str) -> Option<f64> {
    Some(hex_to_rgb(hex_a)?.distance(hex_to_rgb(hex_b)?))
}

/// Mean RGB distance over all unordered pairs of colors.
///
/// Returns `0.0` for fewer than two colors.
pub fn average_pairwise_distance(colors: &[Rgb]) -> f64 {
    if colors.len() < 2 {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut pairs = 0usize;
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            sum += a.distance(*b);
            pairs += 1;
        }
    }
    sum / pairs as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_is_uppercase_and_padded() {
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::new(10, 171, 255).to_hex(), "#0AABFF");
        assert_eq!(Rgb::new(10, 171, 255).to_string(), "#0AABFF");
    }

    #[test]
    fn test_parse_accepts_common_forms() {
        let expected = Rgb::new(0x12, 0xAB, 0xEF);
        assert_eq!("#12ABEF".parse::<Rgb>().unwrap(), expected);
        assert_eq!("12abef".parse::<Rgb>().unwrap(), expected);
        assert_eq!("  #12AbEf \n".parse::<Rgb>().unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!("#FFF".parse::<Rgb>(), Err(ParseColorError::InvalidLength));
        assert_eq!("".parse::<Rgb>(), Err(ParseColorError::InvalidLength));
        assert_eq!("#".parse::<Rgb>(), Err(ParseColorError::InvalidLength));
        assert_eq!(
            "#FFFFFFF".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        );
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert_eq!(
            "#GG0000".parse::<Rgb>(),
            Err(ParseColorError::InvalidCharacter('G'))
        );
        // A sign would be accepted by from_str_radix on its own
        assert!("#+1+1+1".parse::<Rgb>().is_err());
        // Multi-byte characters must not panic on slicing
        assert!("#ééé".parse::<Rgb>().is_err());
        assert!(hex_to_rgb("not a color").is_none());
    }

    #[test]
    fn test_distance() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert_eq!(black.distance(black), 0.0);
        assert!((black.distance(white) - (3.0f64 * 255.0 * 255.0).sqrt()).abs() < 1e-9);
        assert_eq!(black.distance(white), white.distance(black));
    }

    #[test]
    fn test_color_distance_hex() {
        assert_eq!(color_distance("#000000", "#000300"), Some(3.0));
        assert_eq!(color_distance("#000000", "bogus"), None);
    }

    #[test]
    fn test_average_pairwise_distance() {
        assert_eq!(average_pairwise_distance(&[]), 0.0);
        assert_eq!(average_pairwise_distance(&[Rgb::new(1, 2, 3)]), 0.0);

        // Pairs: (0,3)=3, (0,4)=4, (3,4)=5 along distinct axes
        let colors = [Rgb::new(0, 0, 0), Rgb::new(3, 0, 0), Rgb::new(0, 4, 0)];
        let avg = average_pairwise_distance(&colors);
        assert!((avg - (3.0 + 4.0 + 5.0) / 3.0).abs() < 1e-9);
    }
}
