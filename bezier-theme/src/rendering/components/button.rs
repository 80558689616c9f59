use crate::color::ColorComponents;
use crate::color_utils::pressed_color;
use crate::semantic::SemanticColor;
use crate::theme::{ColorTheme, ComponentTheme};

use super::super::state::InteractionState;

/// Aggregated styling information required to paint a button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonVisual {
    /// Fill color for the control background.
    pub background: ColorComponents,
    /// The theme the background was resolved for.
    pub theme: ColorTheme,
}

impl ButtonVisual {
    /// Construct a new [ButtonVisual] with explicit styling values.
    pub fn new(background: ColorComponents, theme: ColorTheme) -> Self {
        Self { background, theme }
    }
}

/// Build a [ButtonVisual] for a button filled with `background`.
///
/// The base color is shown at rest and while disabled; while pressed, the
/// resolved color is run through [pressed_color] under the same effective
/// theme it was resolved for.
pub fn button_visual(
    background: &SemanticColor,
    color_theme: ColorTheme,
    component_theme: ComponentTheme,
    state: InteractionState,
) -> ButtonVisual {
    let theme = component_theme.effective(color_theme);
    let base = background.color(theme);
    let fill = if state.is_pressed() {
        pressed_color(base, theme)
    } else {
        base
    };

    ButtonVisual::new(fill, theme)
}
