//! Text exports of sampled colors.

/// Colors as a pretty-printed JSON array (2-space indent), ready to paste.
///
/// ```
/// let text = swatchpick::export::format_color_array(&["#FF0000", "#00FF00"]);
/// assert_eq!(text, "[\n  \"#FF0000\",\n  \"#00FF00\"\n]");
/// ```
pub fn format_color_array<S: AsRef<str>>(colors: &[S]) -> String {
    let colors: Vec<&str> = colors.iter().map(AsRef::as_ref).collect();
    // Serializing strings into a Vec cannot fail.
    serde_json::to_string_pretty(&colors).unwrap_or_default()
}

/// Matched library ids as a compact JSON array.
pub fn format_id_array(ids: &[u32]) -> String {
    serde_json::to_string(ids).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_arrays() {
        let none: [&str; 0] = [];
        assert_eq!(format_color_array(&none), "[]");
        assert_eq!(format_id_array(&[]), "[]");
    }

    #[test]
    fn test_ids() {
        assert_eq!(format_id_array(&[501, 12, 502]), "[501,12,502]");
    }

    #[test]
    fn test_owned_strings() {
        let colors = vec!["#ABCDEF".to_string()];
        assert_eq!(format_color_array(&colors), "[\n  \"#ABCDEF\"\n]");
    }
}
