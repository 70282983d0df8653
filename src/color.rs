// Simple HSL color struct, resolved once per particle and rendered as a css string

use crate::random::RandomSource;
use crate::theme::Theme;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Color {
    pub const HUE_BAND: f64 = 60.0;

    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Color {
        Color {
            hue,
            saturation,
            lightness,
        }
    }

    // Picks a hue from the theme's 60 degree band, saturation and lightness
    // are fixed per theme
    pub fn for_theme<R: RandomSource>(theme: Theme, rng: &mut R) -> Color {
        let (hue_start, saturation, lightness) = match theme {
            Theme::Dark => (200.0, 100.0, 70.0),
            Theme::Light => (10.0, 100.0, 60.0),
        };
        Color::hsl(
            rng.next_unit() * Color::HUE_BAND + hue_start,
            saturation,
            lightness,
        )
    }

    pub fn to_css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}
