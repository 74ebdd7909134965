/// Color utilities for avatars and palette checks.
use rand::RngExt;

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Pick a random avatar color from a predefined set.
pub fn random_color() -> String {
    const AVATARS: &[&str] = &[
        "#FF5733", "#33B864", "#3357FF", "#B833FF", "#1FB5AD", "#E0A800", "#FF33A8",
        "#7A4DFF", "#2FA36B", "#FF8C33", "#D6336C", "#4D7CFF",
    ];
    let mut rng = rand::rng();
    AVATARS[rng.random_range(0..AVATARS.len())].to_string()
}
