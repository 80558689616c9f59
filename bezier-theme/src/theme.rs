//! # Color and Component Themes
//!
//! [ColorTheme] is the light/dark display mode that selects which pressed-color
//! branch applies and which half of a semantic color is shown.
//! [ComponentTheme] lets a single component invert the ambient mode, e.g. a
//! dark toast shown inside a light screen.
//!
//! ```rust
//! use bezier_theme::theme::{ColorTheme, ComponentTheme};
//!
//! assert_eq!(ComponentTheme::Inverted.effective(ColorTheme::Light), ColorTheme::Dark);
//! assert_eq!("dark".parse::<ColorTheme>().unwrap(), ColorTheme::Dark);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Light or dark display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl ColorTheme {
    /// The other mode.
    pub fn opposite(self) -> Self {
        match self {
            ColorTheme::Light => ColorTheme::Dark,
            ColorTheme::Dark => ColorTheme::Light,
        }
    }

    /// Lowercase name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorTheme::Light => "light",
            ColorTheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorTheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ColorTheme::Light),
            "dark" => Ok(ColorTheme::Dark),
            _ => Err(ThemeError::UnknownTheme(s.to_string())),
        }
    }
}

/// Per-component relation to the ambient [ColorTheme].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentTheme {
    /// Follow the ambient mode.
    #[default]
    Normal,
    /// Show the opposite of the ambient mode.
    Inverted,
}

impl ComponentTheme {
    /// The mode a component with this setting actually renders in.
    pub fn effective(self, color_theme: ColorTheme) -> ColorTheme {
        match self {
            ComponentTheme::Normal => color_theme,
            ComponentTheme::Inverted => color_theme.opposite(),
        }
    }

    /// Lowercase name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentTheme::Normal => "normal",
            ComponentTheme::Inverted => "inverted",
        }
    }
}

impl fmt::Display for ComponentTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentTheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(ComponentTheme::Normal),
            "inverted" => Ok(ComponentTheme::Inverted),
            _ => Err(ThemeError::UnknownTheme(s.to_string())),
        }
    }
}
