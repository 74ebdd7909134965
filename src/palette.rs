/// Light and dark palettes, and resolution of which one is in effect.
use std::env;

use crate::types::{ColorScheme, ThemePreference};

/// Semantic color roles. Both palettes define every role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    PrimaryBg,
    SecondaryBg,
    TertiaryBg,
    CardBg,
    PrimaryText,
    SecondaryText,
    MutedText,
    InvertedText,
    BrandAccentColor,
    BrandAccentMuted,
    Border,
    Divider,
    InputBg,
    InputBorder,
    Placeholder,
    Icon,
    IconMuted,
    Success,
    Warning,
    Error,
    Info,
    RatingStar,
    RatingStarEmpty,
    Link,
    BadgeBg,
    BadgeText,
    Overlay,
    Shadow,
    TabActive,
    TabInactive,
}

impl ColorRole {
    pub const COUNT: usize = 30;

    pub const ALL: [ColorRole; Self::COUNT] = [
        Self::PrimaryBg,
        Self::SecondaryBg,
        Self::TertiaryBg,
        Self::CardBg,
        Self::PrimaryText,
        Self::SecondaryText,
        Self::MutedText,
        Self::InvertedText,
        Self::BrandAccentColor,
        Self::BrandAccentMuted,
        Self::Border,
        Self::Divider,
        Self::InputBg,
        Self::InputBorder,
        Self::Placeholder,
        Self::Icon,
        Self::IconMuted,
        Self::Success,
        Self::Warning,
        Self::Error,
        Self::Info,
        Self::RatingStar,
        Self::RatingStarEmpty,
        Self::Link,
        Self::BadgeBg,
        Self::BadgeText,
        Self::Overlay,
        Self::Shadow,
        Self::TabActive,
        Self::TabInactive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::PrimaryBg => "primaryBG",
            Self::SecondaryBg => "secondaryBG",
            Self::TertiaryBg => "tertiaryBG",
            Self::CardBg => "cardBG",
            Self::PrimaryText => "primaryText",
            Self::SecondaryText => "secondaryText",
            Self::MutedText => "mutedText",
            Self::InvertedText => "invertedText",
            Self::BrandAccentColor => "brandAccentColor",
            Self::BrandAccentMuted => "brandAccentMuted",
            Self::Border => "border",
            Self::Divider => "divider",
            Self::InputBg => "inputBG",
            Self::InputBorder => "inputBorder",
            Self::Placeholder => "placeholder",
            Self::Icon => "icon",
            Self::IconMuted => "iconMuted",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
            Self::RatingStar => "ratingStar",
            Self::RatingStarEmpty => "ratingStarEmpty",
            Self::Link => "link",
            Self::BadgeBg => "badgeBG",
            Self::BadgeText => "badgeText",
            Self::Overlay => "overlay",
            Self::Shadow => "shadow",
            Self::TabActive => "tabActive",
            Self::TabInactive => "tabInactive",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }
}

/// A resolved palette: one `#RRGGBB` value per role, indexed by role.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    scheme: ColorScheme,
    colors: [&'static str; ColorRole::COUNT],
}

// Order follows `ColorRole::ALL`.
static LIGHT: Palette = Palette {
    scheme: ColorScheme::Light,
    colors: [
        "#FFFFFF", // primaryBG
        "#F5F6F8", // secondaryBG
        "#E9EBEF", // tertiaryBG
        "#FFFFFF", // cardBG
        "#1A1C20", // primaryText
        "#4A4F59", // secondaryText
        "#8A909C", // mutedText
        "#FFFFFF", // invertedText
        "#E2553D", // brandAccentColor
        "#F6C3B9", // brandAccentMuted
        "#D3D7DE", // border
        "#E4E7EC", // divider
        "#F1F3F6", // inputBG
        "#C4C9D2", // inputBorder
        "#9AA0AB", // placeholder
        "#2E3138", // icon
        "#A3A8B2", // iconMuted
        "#2E9E5B", // success
        "#D99A1E", // warning
        "#D0342C", // error
        "#2F74C0", // info
        "#F2B705", // ratingStar
        "#D5D8DD", // ratingStarEmpty
        "#1F6FD1", // link
        "#E2553D", // badgeBG
        "#FFFFFF", // badgeText
        "#1A1C20", // overlay
        "#C9CDD4", // shadow
        "#E2553D", // tabActive
        "#8A909C", // tabInactive
    ],
};

static DARK: Palette = Palette {
    scheme: ColorScheme::Dark,
    colors: [
        "#121316", // primaryBG
        "#1B1D21", // secondaryBG
        "#25282D", // tertiaryBG
        "#1E2024", // cardBG
        "#ECEEF1", // primaryText
        "#B8BDC6", // secondaryText
        "#7C828D", // mutedText
        "#121316", // invertedText
        "#FF6F54", // brandAccentColor
        "#6B3328", // brandAccentMuted
        "#363A41", // border
        "#2B2E34", // divider
        "#1F2226", // inputBG
        "#41464E", // inputBorder
        "#6C727D", // placeholder
        "#D9DCE1", // icon
        "#6C727D", // iconMuted
        "#4CC383", // success
        "#F0B64A", // warning
        "#FF5A52", // error
        "#5FA3F0", // info
        "#FFC83D", // ratingStar
        "#4A4E55", // ratingStarEmpty
        "#6EA8FF", // link
        "#FF6F54", // badgeBG
        "#121316", // badgeText
        "#000000", // overlay
        "#000000", // shadow
        "#FF6F54", // tabActive
        "#7C828D", // tabInactive
    ],
};

impl Palette {
    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn color(&self, role: ColorRole) -> &'static str {
        self.colors[role as usize]
    }

    /// `(role name, value)` pairs in role order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        ColorRole::ALL
            .into_iter()
            .map(move |role| (role.name(), self.color(role)))
    }
}

/// The scheme in effect: the terminal's when the user chose `system`,
/// otherwise the user's choice. An unreported terminal scheme counts as light.
pub fn resolve_actual_theme(
    preference: ThemePreference,
    system_scheme: Option<ColorScheme>,
) -> ColorScheme {
    match preference {
        ThemePreference::System => system_scheme.unwrap_or(ColorScheme::Light),
        ThemePreference::Light => ColorScheme::Light,
        ThemePreference::Dark => ColorScheme::Dark,
    }
}

pub fn get_palette(scheme: ColorScheme) -> &'static Palette {
    match scheme {
        ColorScheme::Light => &LIGHT,
        ColorScheme::Dark => &DARK,
    }
}

/// Reads the terminal's scheme from `COLORFGBG` ("fg;bg" or "fg;default;bg").
pub fn system_color_scheme() -> Option<ColorScheme> {
    env::var("COLORFGBG")
        .ok()
        .and_then(|value| scheme_from_colorfgbg(&value))
}

fn scheme_from_colorfgbg(value: &str) -> Option<ColorScheme> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match background {
        7 | 15 => Some(ColorScheme::Light),
        _ => Some(ColorScheme::Dark),
    }
}
