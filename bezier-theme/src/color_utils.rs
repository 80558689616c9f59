//! # Pressed Color Engine
//!
//! Derives the pressed-state variant of a color by moving it through HSL
//! space. The rules depend on the color theme, the color's lightness and its
//! alpha:
//!
//! - **Alpha**: a fully transparent color becomes 10% opaque (5% when
//!   achromatic) and keeps its RGB untouched; alpha at or below 20% is
//!   multiplied by 1.5; anything above stays as is.
//! - **Saturation**: only moved while strictly between 10% and 90%.
//! - **Light theme**: dark colors (lightness <= 17%) get brighter, everything
//!   else (or alpha <= 20%) gets darker.
//! - **Dark theme**: colors below 83% lightness get brighter, everything else
//!   (or alpha <= 20%) gets darker.
//!
//! Every function here is pure and allocation-free.
//!
//! ```rust
//! use bezier_theme::color::ColorComponents;
//! use bezier_theme::color_utils::pressed_color;
//! use bezier_theme::theme::ColorTheme;
//!
//! let gray = ColorComponents::new(128.0, 128.0, 128.0, 0.0);
//! let pressed = pressed_color(gray, ColorTheme::Light);
//! assert_eq!(pressed, ColorComponents::new(128.0, 128.0, 128.0, 0.05));
//! ```

use crate::color::{ColorComponents, Hsl};
use crate::theme::ColorTheme;

/// Alpha given to a fully transparent chromatic color when pressed.
const TRANSPARENT_PRESSED_ALPHA: f64 = 0.10;
/// Alpha given to a fully transparent achromatic color when pressed.
const TRANSPARENT_ACHROMATIC_PRESSED_ALPHA: f64 = 0.05;
/// Alpha at or below this is boosted, and forces the darker branch.
const LOW_ALPHA_THRESHOLD: f64 = 0.20;
const LOW_ALPHA_BOOST: f64 = 1.5;

/// Saturation is only adjusted strictly inside this open interval.
const SATURATION_GATE: (f64, f64) = (0.10, 0.90);
const SATURATION_RAISE: f64 = 0.05;
const SATURATION_LOWER: f64 = 0.03;

/// Light theme brightens at or below this lightness.
const LIGHT_BRIGHTEN_MAX_LIGHTNESS: f64 = 0.17;
/// Dark theme brightens strictly below this lightness.
const DARK_BRIGHTEN_MAX_LIGHTNESS: f64 = 0.83;

/// Which way the pressed adjustment moves lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shift {
    Brighter,
    Darker,
}

/// Convert RGB channels (`0.0..=255.0`) to integer HSL.
///
/// Lightness and saturation are rounded to whole percent and hue to whole
/// degrees, so converting back with [hsl_to_rgb] is only exact up to that
/// rounding.
pub fn rgb_to_hsl(red: f64, green: f64, blue: f64) -> Hsl {
    let r = red / 255.0;
    let g = green / 255.0;
    let b = blue / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let lightness = (l * 100.0).round() as i32;

    if delta == 0.0 {
        return Hsl {
            hue: 0,
            saturation: 0,
            lightness,
        };
    }

    let saturation = ((delta / (1.0 - (2.0 * l - 1.0).abs())) * 100.0).round() as i32;

    let mut hue = if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    Hsl {
        hue: hue.round() as i32 % 360,
        saturation,
        lightness,
    }
}

/// Convert HSL back to RGB channels in `0.0..=255.0`.
///
/// `hue` is in degrees and may lie outside `0..360`; `saturation` and `lightness` are fractions in
/// `0.0..=1.0`, not the integer percentages returned by [rgb_to_hsl].
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    let (red, green, blue) = if saturation == 0.0 {
        (lightness, lightness, lightness)
    } else {
        let max = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let min = 2.0 * lightness - max;
        let hue = hue / 360.0;

        (
            hue_to_channel(min, max, hue + 1.0 / 3.0),
            hue_to_channel(min, max, hue),
            hue_to_channel(min, max, hue - 1.0 / 3.0),
        )
    };

    (red * 255.0, green * 255.0, blue * 255.0)
}

/// Evaluate one RGB channel at a normalized hue offset.
fn hue_to_channel(min: f64, max: f64, offset: f64) -> f64 {
    let offset = offset.rem_euclid(1.0);

    let range = max - min;
    if offset < 1.0 / 6.0 {
        min + range * 6.0 * offset
    } else if offset < 1.0 / 2.0 {
        max
    } else if offset < 2.0 / 3.0 {
        min + range * (2.0 / 3.0 - offset) * 6.0
    } else {
        min
    }
}

/// Compute the pressed-state color for `original` under `theme`.
///
/// Channels outside their declared range (or NaN) are clamped first, see
/// [ColorComponents::sanitized]. The input is not retained.
pub fn pressed_color(original: ColorComponents, theme: ColorTheme) -> ColorComponents {
    let original = if original.is_sanitized() {
        original
    } else {
        let clean = original.sanitized();
        log::debug!(
            "pressed_color: clamped out-of-range input {:?} to {:?}",
            original,
            clean
        );
        clean
    };

    let hsl = original.hsl();
    let is_achromatic = hsl.is_achromatic();
    let original_alpha = original.alpha();

    if original_alpha == 0.0 {
        let alpha = if is_achromatic {
            TRANSPARENT_ACHROMATIC_PRESSED_ALPHA
        } else {
            TRANSPARENT_PRESSED_ALPHA
        };
        return original.with_alpha(alpha);
    }

    let alpha = if original_alpha <= LOW_ALPHA_THRESHOLD {
        (original_alpha * LOW_ALPHA_BOOST).min(1.0)
    } else {
        original_alpha
    };

    let hue = f64::from(hsl.hue);
    let mut saturation = f64::from(hsl.saturation) / 100.0;
    let mut lightness = f64::from(hsl.lightness) / 100.0;

    let adjust_saturation = saturation > SATURATION_GATE.0 && saturation < SATURATION_GATE.1;
    let opaque_enough = original_alpha > LOW_ALPHA_THRESHOLD;

    let shift = match theme {
        ColorTheme::Light if lightness <= LIGHT_BRIGHTEN_MAX_LIGHTNESS && opaque_enough => {
            Shift::Brighter
        }
        ColorTheme::Dark if lightness < DARK_BRIGHTEN_MAX_LIGHTNESS && opaque_enough => {
            Shift::Brighter
        }
        _ => Shift::Darker,
    };

    lightness = match (theme, shift) {
        (ColorTheme::Light, Shift::Brighter) if is_achromatic => (lightness + 0.10) * 1.1,
        (ColorTheme::Light, Shift::Brighter) => (lightness + 0.07) * 1.1,
        (ColorTheme::Light, Shift::Darker) => lightness * 0.93,
        (ColorTheme::Dark, Shift::Brighter) => (lightness + 0.04) * 1.005,
        (ColorTheme::Dark, Shift::Darker) if is_achromatic => (lightness - 0.04) * 0.97,
        (ColorTheme::Dark, Shift::Darker) => (lightness - 0.2) * 0.98,
    };

    if adjust_saturation {
        saturation += match shift {
            Shift::Brighter => SATURATION_RAISE,
            Shift::Darker => -SATURATION_LOWER,
        };
    }

    let saturation = saturation.clamp(0.0, 1.0);
    let lightness = lightness.clamp(0.0, 1.0);

    let (red, green, blue) = hsl_to_rgb(hue, saturation, lightness);
    ColorComponents::new(red, green, blue, alpha)
}
