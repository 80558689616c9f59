//! Widget-specific helpers used to compose visuals.

/// Helpers for button visuals.
pub mod button;
