#![warn(missing_docs)]

//! # Bezier Theming System
//!
//! Color tokens and pressed-state color derivation for the bezier design
//! system.
//!
//! ## Overview
//!
//! - **[ColorComponents](color::ColorComponents)**: RGBA value type
//! - **[pressed_color](color_utils::pressed_color)**: derives the pressed
//!   variant of a color through HSL space
//! - **[SemanticColor](semantic::SemanticColor)**: a light/dark pair for one
//!   design token
//! - **[ColorTokenSet](tokens::ColorTokenSet)**: named tokens loaded from TOML
//!   or JSON
//! - **[ThemeConfig](config::ThemeConfig)**: theme selection from environment
//!   variables and files
//!
//! ## Quick Start
//!
//! ```rust
//! use bezier_theme::color::ColorComponents;
//! use bezier_theme::color_utils::pressed_color;
//! use bezier_theme::theme::ColorTheme;
//!
//! let blue = ColorComponents::rgb(59.0, 130.0, 246.0);
//! let pressed = pressed_color(blue, ColorTheme::Light);
//!
//! // Light theme darkens mid-lightness colors and leaves opaque alpha alone.
//! assert!(pressed.hsl().lightness < blue.hsl().lightness);
//! assert_eq!(pressed.alpha(), 1.0);
//! ```
//!
//! ## Tokens and Themes
//!
//! ```rust
//! use bezier_theme::tokens::ColorTokenSet;
//! use bezier_theme::theme::{ColorTheme, ComponentTheme};
//!
//! let tokens = ColorTokenSet::from_toml(r##"
//! [primary-bg-normal]
//! light = "#3b82f6"
//! dark = "#60a5fa"
//! "##).unwrap();
//!
//! let primary = tokens.require("primary-bg-normal").unwrap();
//! let shown = primary.resolve(ColorTheme::Light, ComponentTheme::Inverted);
//! assert_eq!(shown, primary.dark);
//! ```
//!
//! ## Thread Safety
//!
//! Every type here is a plain value and `Send + Sync`. The color engine keeps
//! no state, so it can be called from any thread without locking.

/// Contains the [color::ColorComponents] value type.
pub mod color;
/// Contains the pressed color engine and HSL conversions.
pub mod color_utils;
/// Contains the [config::ThemeConfig] struct for theme configuration.
pub mod config;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains component state color selection.
pub mod rendering;
/// Contains the [semantic::SemanticColor] light/dark pair.
pub mod semantic;
/// Hex string serde helpers for colors.
pub mod serde_color;
/// Contains the [theme::ColorTheme] and [theme::ComponentTheme] enums.
pub mod theme;
/// Contains the [tokens::ColorTokenSet] registry.
pub mod tokens;

pub use color::{ColorComponents, Hsl};
pub use color_utils::pressed_color;
pub use error::{ThemeError, ThemeResult};
pub use semantic::SemanticColor;
pub use theme::{ColorTheme, ComponentTheme};
