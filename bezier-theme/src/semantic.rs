//! # Semantic Colors
//!
//! A semantic color is one design token expressed twice: once for the light
//! appearance and once for the dark appearance. Components never pick a half
//! themselves; they hand the ambient [ColorTheme] (and their own
//! [ComponentTheme]) to [SemanticColor::resolve].
//!
//! The pressed variant of a token is another semantic color, derived half by
//! half with [pressed_color](crate::color_utils::pressed_color) under the
//! matching theme.

use serde::{Deserialize, Serialize};

use crate::color::ColorComponents;
use crate::color_utils::pressed_color;
use crate::theme::{ColorTheme, ComponentTheme};

/// A light/dark pair of colors for one design token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SemanticColor {
    /// Color shown in the light appearance.
    #[serde(with = "crate::serde_color")]
    pub light: ColorComponents,
    /// Color shown in the dark appearance.
    #[serde(with = "crate::serde_color")]
    pub dark: ColorComponents,
}

impl SemanticColor {
    /// Create a semantic color from its two halves.
    pub fn new(light: ColorComponents, dark: ColorComponents) -> Self {
        Self { light, dark }
    }

    /// The same color in both appearances.
    pub fn uniform(color: ColorComponents) -> Self {
        Self::new(color, color)
    }

    /// The half for the given appearance.
    pub fn color(&self, theme: ColorTheme) -> ColorComponents {
        match theme {
            ColorTheme::Light => self.light,
            ColorTheme::Dark => self.dark,
        }
    }

    /// Resolve the color a component should display.
    pub fn resolve(&self, color_theme: ColorTheme, component_theme: ComponentTheme) -> ColorComponents {
        self.color(component_theme.effective(color_theme))
    }

    /// Resolve with a plain inversion flag instead of a [ComponentTheme].
    pub fn palette(&self, color_theme: ColorTheme, inverted: bool) -> ColorComponents {
        let component_theme = if inverted {
            ComponentTheme::Inverted
        } else {
            ComponentTheme::Normal
        };
        self.resolve(color_theme, component_theme)
    }

    /// The pressed-state variant of this token.
    pub fn pressed(&self) -> SemanticColor {
        SemanticColor {
            light: pressed_color(self.light, ColorTheme::Light),
            dark: pressed_color(self.dark, ColorTheme::Dark),
        }
    }
}
