//! Static drawing style of the diagram: colors, dash pattern and font sizes.

use crate::color::FillScheme;
use crate::config::{RgbColor, StyleConfig};
use crate::diagram::primitives::FontClass;

pub const WHITE: RgbColor = RgbColor { r: 255, g: 255, b: 255 };
pub const BLACK: RgbColor = RgbColor { r: 0, g: 0, b: 0 };

/// Dashed rings: 3 units drawn, 4 units skipped.
pub const DASH_PATTERN: [f64; 2] = [3.0, 4.0];

/// Everything a renderer needs to turn primitives into pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramStyle {
    pub background: RgbColor,
    pub ink: RgbColor,
    pub label_background: RgbColor,
    pub fill: FillScheme,
    /// Overrides `fill` with a flat color when set
    pub fill_color: Option<RgbColor>,
    pub dash: [f64; 2],
    /// Bitmap font scale for compass labels (8 px glyphs times this)
    pub legend_scale: usize,
    /// Bitmap font scale for ring labels
    pub small_scale: usize,
}

pub const DEFAULT_STYLE: DiagramStyle = DiagramStyle {
    background: WHITE,
    ink: BLACK,
    label_background: WHITE,
    fill: FillScheme::Sky,
    fill_color: None,
    dash: DASH_PATTERN,
    legend_scale: 2,
    small_scale: 1,
};

impl Default for DiagramStyle {
    fn default() -> Self {
        DEFAULT_STYLE
    }
}

impl DiagramStyle {
    pub fn from_config(config: &StyleConfig) -> Self {
        Self {
            fill: config.fill,
            fill_color: config.fill_color,
            ink: config.ink.unwrap_or(BLACK),
            background: config.background.unwrap_or(WHITE),
            ..DEFAULT_STYLE
        }
    }

    pub fn font_scale(&self, font: FontClass) -> usize {
        match font {
            FontClass::Legend => self.legend_scale,
            FontClass::Small => self.small_scale,
        }
    }

    /// Bar fill for a sector at `position` around the dial with relative length `intensity`.
    pub fn bar_color(&self, position: f32, intensity: f32) -> (u8, u8, u8) {
        match self.fill_color {
            Some(c) => (c.r, c.g, c.b),
            None => self.fill.get_color(position, intensity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::SKY_BLUE;

    #[test]
    fn test_flat_override_wins() {
        let mut style = DEFAULT_STYLE;
        assert_eq!(style.bar_color(0.5, 0.5), SKY_BLUE);
        style.fill_color = Some(RgbColor { r: 1, g: 2, b: 3 });
        assert_eq!(style.bar_color(0.5, 0.5), (1, 2, 3));
    }

    #[test]
    fn test_font_scales() {
        assert!(
            DEFAULT_STYLE.font_scale(FontClass::Legend) > DEFAULT_STYLE.font_scale(FontClass::Small)
        );
    }
}
