/// The interaction state of a component, as far as color selection cares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// At rest, or hovered.
    #[default]
    Idle,
    /// Held down by a pointer or touch.
    Pressed,
    /// Not interactive.
    Disabled,
}

impl InteractionState {
    /// Whether the pressed color should be shown.
    pub fn is_pressed(&self) -> bool {
        matches!(self, InteractionState::Pressed)
    }

    /// Whether the component ignores input.
    pub fn is_disabled(&self) -> bool {
        matches!(self, InteractionState::Disabled)
    }

    /// Derive the state from the flags a UI layer usually tracks.
    pub fn from_flags(is_pressed: bool, is_enabled: bool) -> Self {
        match (is_enabled, is_pressed) {
            (false, _) => InteractionState::Disabled,
            (true, true) => InteractionState::Pressed,
            (true, false) => InteractionState::Idle,
        }
    }
}
