use ratatui::style::Color;

use crate::palette::ColorRole;

pub fn clamp_name(value: &str, width: usize) -> String {
    let value_len = value.chars().count();
    if value_len <= width {
        return format!("{value:<width$}", width = width);
    }
    let trimmed = value
        .chars()
        .take(width.saturating_sub(2))
        .collect::<String>();
    format!("{trimmed}..")
}

pub fn hex_to_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarGlyph {
    Full,
    Half,
    Empty,
}

/// Glyph and palette role per `StarGlyph`, in declaration order.
const STAR_STYLES: [(&str, ColorRole); 3] = [
    ("★", ColorRole::RatingStar),
    ("⯪", ColorRole::RatingStar),
    ("☆", ColorRole::RatingStarEmpty),
];

impl StarGlyph {
    pub fn symbol(self) -> &'static str {
        STAR_STYLES[self as usize].0
    }

    pub fn role(self) -> ColorRole {
        STAR_STYLES[self as usize].1
    }
}

/// Five glyphs for a rating out of five, rounded to the nearest half star.
pub fn rating_stars(rating: f32) -> [StarGlyph; 5] {
    let halves = (rating.clamp(0.0, 5.0) * 2.0).round() as usize;
    std::array::from_fn(|index| match halves.saturating_sub(index * 2) {
        0 => StarGlyph::Empty,
        1 => StarGlyph::Half,
        _ => StarGlyph::Full,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use StarGlyph::{Empty, Full, Half};

    #[test]
    fn stars_round_to_half_steps() {
        assert_eq!(rating_stars(5.0), [Full; 5]);
        assert_eq!(rating_stars(0.0), [Empty; 5]);
        assert_eq!(rating_stars(3.5), [Full, Full, Full, Half, Empty]);
        assert_eq!(rating_stars(3.2), [Full, Full, Full, Empty, Empty]);
        assert_eq!(rating_stars(4.8), [Full; 5]);
        assert_eq!(rating_stars(1.3), [Full, Half, Empty, Empty, Empty]);
    }

    #[test]
    fn glyph_lookup_matches_variant() {
        assert_eq!(Full.symbol(), "★");
        assert_eq!(Empty.role(), ColorRole::RatingStarEmpty);
        assert_eq!(Half.role(), ColorRole::RatingStar);
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(hex_to_color("#0A0B0C"), Some(Color::Rgb(10, 11, 12)));
        assert_eq!(hex_to_color("0a0b0c"), Some(Color::Rgb(10, 11, 12)));
        assert_eq!(hex_to_color("#0A0B"), None);
        assert_eq!(hex_to_color("#ZZ0000"), None);
    }

    #[test]
    fn clamp_pads_or_truncates() {
        assert_eq!(clamp_name("abc", 5), "abc  ");
        assert_eq!(clamp_name("abcdefgh", 5), "abc..");
    }
}
