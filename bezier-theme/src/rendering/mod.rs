//! # Interaction Rendering
//!
//! Picks the colors a component paints for its current interaction state.
//! Drawing itself belongs to the UI layer; this module only answers "which
//! color".
//!
//! ```rust
//! use bezier_theme::color::ColorComponents;
//! use bezier_theme::rendering::{button_visual, InteractionState};
//! use bezier_theme::semantic::SemanticColor;
//! use bezier_theme::theme::{ColorTheme, ComponentTheme};
//!
//! let fill = SemanticColor::uniform(ColorComponents::rgb(59.0, 130.0, 246.0));
//! let pressed = button_visual(&fill, ColorTheme::Light, ComponentTheme::Normal, InteractionState::Pressed);
//! assert_ne!(pressed.background, fill.light);
//! ```

pub mod components;
mod state;

pub use components::button::{button_visual, ButtonVisual};
pub use state::InteractionState;
