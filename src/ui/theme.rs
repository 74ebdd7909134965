use ratatui::style::Color;

use super::helpers::hex_to_color;
use crate::palette::{ColorRole, Palette};

/// Ratatui colors for the palette currently in effect.
#[derive(Clone, Copy)]
pub struct Theme {
    palette: &'static Palette,
}

impl Theme {
    pub fn new(palette: &'static Palette) -> Self {
        Self { palette }
    }

    pub fn color(&self, role: ColorRole) -> Color {
        hex_to_color(self.palette.color(role)).unwrap_or(Color::Reset)
    }

    /// Screen background
    pub fn background(&self) -> Color {
        self.color(ColorRole::PrimaryBg)
    }

    /// Primary branding color
    pub fn primary(&self) -> Color {
        self.color(ColorRole::BrandAccentColor)
    }

    /// Text drawn on top of the brand color
    pub fn on_primary(&self) -> Color {
        self.color(ColorRole::InvertedText)
    }

    /// Borders and frames
    pub fn secondary(&self) -> Color {
        self.color(ColorRole::Border)
    }

    pub fn success(&self) -> Color {
        self.color(ColorRole::Success)
    }

    pub fn warn(&self) -> Color {
        self.color(ColorRole::Warning)
    }

    /// Selection/highlight
    pub fn highlight(&self) -> Color {
        self.color(ColorRole::TabActive)
    }

    /// Selection marker/arrow
    pub fn selection_marker(&self) -> Color {
        self.color(ColorRole::Success)
    }

    /// Dimmed/inactive text
    pub fn dim(&self) -> Color {
        self.color(ColorRole::MutedText)
    }

    /// Normal text
    pub fn text(&self) -> Color {
        self.color(ColorRole::PrimaryText)
    }

    pub fn text_secondary(&self) -> Color {
        self.color(ColorRole::SecondaryText)
    }

    /// Accent for numbers/counts
    pub fn accent(&self) -> Color {
        self.color(ColorRole::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::get_palette;
    use crate::types::ColorScheme;

    #[test]
    fn every_role_maps_to_an_rgb_color() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let theme = Theme::new(get_palette(scheme));
            for role in ColorRole::ALL {
                assert!(matches!(theme.color(role), Color::Rgb(..)), "{scheme} {role:?}");
            }
        }
    }

    #[test]
    fn light_and_dark_backgrounds_differ() {
        let light = Theme::new(get_palette(ColorScheme::Light));
        let dark = Theme::new(get_palette(ColorScheme::Dark));
        assert_ne!(light.background(), dark.background());
        assert_eq!(light.background(), Color::Rgb(0xFF, 0xFF, 0xFF));
    }
}
