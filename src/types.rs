use std::fmt;
use std::str::FromStr;

use crate::error::PreferenceError;

/// The theme the user asked for. `System` defers to the terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [Self::System, Self::Light, Self::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Settings-screen toggle order: system -> light -> dark -> system.
    pub fn next(self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PreferenceError::Malformed {
                key: crate::settings::THEME_KEY,
                value: other.to_string(),
            }),
        }
    }
}

/// A concrete scheme, what the palette is actually built from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl FromStr for ColorScheme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PreferenceError::Malformed {
                key: "scheme",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated feed entry.
#[derive(Clone, Debug, PartialEq)]
pub struct DummyPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub images: Vec<&'static str>,
    pub rating: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    Electronics,
    Restaurants,
    Beauty,
    Travel,
    HomeServices,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 5] = [
        Self::Electronics,
        Self::Restaurants,
        Self::Beauty,
        Self::Travel,
        Self::HomeServices,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Restaurants => "Restaurants",
            Self::Beauty => "Beauty",
            Self::Travel => "Travel",
            Self::HomeServices => "Home Services",
        }
    }

    /// Translation key for the category label.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Electronics => "category.electronics",
            Self::Restaurants => "category.restaurants",
            Self::Beauty => "category.beauty",
            Self::Travel => "category.travel",
            Self::HomeServices => "category.home_services",
        }
    }
}

/// A generated product or service listing.
#[derive(Clone, Debug, PartialEq)]
pub struct DummyProduct {
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    /// One decimal, e.g. `"4.3"`.
    pub rating: String,
    pub number_of_ratings: u32,
    pub image: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DummyReview {
    pub id: String,
    pub product_id: String,
    pub author: String,
    /// `#RRGGBB` badge color for the author.
    pub avatar_color: String,
    pub stars: u8,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Like,
    Comment,
    Follow,
    Review,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [Self::Like, Self::Comment, Self::Follow, Self::Review];
}

#[derive(Clone, Debug, PartialEq)]
pub struct DummyNotification {
    pub id: String,
    pub kind: NotificationKind,
    pub actor: String,
    pub read: bool,
}
