#![warn(missing_docs)]

//! Color tokens and pressed-state colors for the bezier design system.

pub use bezier_theme as theme;

/// A "prelude" for users of the bezier design system.
///
/// Importing this module brings into scope the types needed to resolve
/// token colors and their pressed variants.
///
/// ```rust
/// use bezier::prelude::*;
///
/// let gray = ColorComponents::rgb(128.0, 128.0, 128.0).with_alpha(0.0);
/// assert_eq!(pressed_color(gray, ColorTheme::Dark).alpha(), 0.05);
///
/// let red = ColorComponents::rgb(255.0, 0.0, 0.0).with_alpha(0.0);
/// assert_eq!(pressed_color(red, ColorTheme::Dark).alpha(), 0.1);
/// ```
pub mod prelude {
    pub use crate::theme::color::{ColorComponents, Hsl};
    pub use crate::theme::color_utils::{hsl_to_rgb, pressed_color, rgb_to_hsl};
    pub use crate::theme::config::ThemeConfig;
    pub use crate::theme::error::{ThemeError, ThemeResult};
    pub use crate::theme::rendering::{button_visual, ButtonVisual, InteractionState};
    pub use crate::theme::semantic::SemanticColor;
    pub use crate::theme::theme::{ColorTheme, ComponentTheme};
    pub use crate::theme::tokens::ColorTokenSet;
}

/// Load the theme configuration from the environment together with its
/// color tokens.
///
/// A token file that fails to load is logged and replaced by an empty set,
/// so the caller always gets a usable configuration.
pub fn load_from_env() -> (theme::config::ThemeConfig, theme::tokens::ColorTokenSet) {
    let config = theme::config::ThemeConfig::from_env_or_default();
    let tokens = match config.load_tokens() {
        Ok(tokens) => tokens,
        Err(e) => {
            log::warn!("Failed to load color tokens: {}", e);
            theme::tokens::ColorTokenSet::new()
        }
    };
    (config, tokens)
}
