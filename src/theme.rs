/// Scroll offset after which the header picks up its `scrolled` class.
pub const SCROLL_THRESHOLD: f64 = 100.0;

/// Visibility ratio a section must reach before it is reported as current.
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.45;

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Converts `#rrggbb` to a CSS `rgba(r, g, b, a)` string. Anything that is
/// not six hex digits fails closed to `None`; callers then render the
/// neutral header style instead of guessing at channels.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Option<String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    let r = (value >> 16) & 255;
    let g = (value >> 8) & 255;
    let b = value & 255;
    Some(format!("rgba({}, {}, {}, {})", r, g, b, alpha))
}

/// Inline style for the header while a colored section is active: a low-alpha
/// background tint plus a soft shadow derived from the same color. `None`
/// (no accent, or a malformed one) yields the empty string so the header
/// falls back to its stylesheet defaults.
pub fn header_accent_style(color: Option<&str>) -> String {
    let Some(color) = color else {
        return String::new();
    };
    match hex_to_rgba(color, 0.12) {
        Some(shadow) => format!(
            "--active-color: {color}; background-color: {color}22; box-shadow: 0 6px 20px {shadow};"
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_at_low_alpha() {
        assert_eq!(
            hex_to_rgba("#000000", 0.12).as_deref(),
            Some("rgba(0, 0, 0, 0.12)")
        );
    }

    #[test]
    fn white_at_full_alpha() {
        assert_eq!(
            hex_to_rgba("#ffffff", 1.0).as_deref(),
            Some("rgba(255, 255, 255, 1)")
        );
    }

    #[test]
    fn channels_are_split_correctly() {
        assert_eq!(
            hex_to_rgba("#2563eb", 0.5).as_deref(),
            Some("rgba(37, 99, 235, 0.5)")
        );
    }

    #[test]
    fn malformed_hex_fails_closed() {
        assert_eq!(hex_to_rgba("", 1.0), None);
        assert_eq!(hex_to_rgba("#fff", 1.0), None);
        assert_eq!(hex_to_rgba("#gggggg", 1.0), None);
        assert_eq!(hex_to_rgba("#2563eb00", 1.0), None);
    }

    #[test]
    fn accent_style_tints_and_shadows() {
        let style = header_accent_style(Some("#2563eb"));
        assert!(style.contains("background-color: #2563eb22;"));
        assert!(style.contains("box-shadow: 0 6px 20px rgba(37, 99, 235, 0.12);"));
    }

    #[test]
    fn missing_or_malformed_accent_clears_styling() {
        assert_eq!(header_accent_style(None), "");
        assert_eq!(header_accent_style(Some("not-a-color")), "");
    }

    #[test]
    fn scroll_threshold_is_exclusive() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(100.0));
        assert!(header_scrolled(101.0));
    }
}
