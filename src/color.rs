use clap::ValueEnum;
use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fill used for the sector bars.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, ValueEnum, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum FillScheme {
    /// Flat sky blue
    #[default]
    Sky,
    Spectrum,
    Rainbow,
    Ocean,
    Fire,
    Monochrome,
}

/// Flat bar fill of the classic diagram.
pub const SKY_BLUE: (u8, u8, u8) = (166, 202, 240);

impl FromStr for FillScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sky" | "skyblue" => Ok(Self::Sky),
            "spectrum" => Ok(Self::Spectrum),
            "rainbow" => Ok(Self::Rainbow),
            "ocean" => Ok(Self::Ocean),
            "fire" => Ok(Self::Fire),
            "mono" | "monochrome" => Ok(Self::Monochrome),
            _ => Err(format!("Unknown fill scheme: {}", s)),
        }
    }
}

impl FillScheme {
    /// Color for a bar at `position` around the dial (0.0 to 1.0) whose
    /// length is `intensity` of the longest bar (0.0 to 1.0).
    pub fn get_color(&self, position: f32, intensity: f32) -> (u8, u8, u8) {
        let (h, s, l) = match self {
            FillScheme::Sky => return SKY_BLUE,
            FillScheme::Spectrum => {
                // purple -> blue -> cyan -> green -> yellow -> red
                let hue = 270.0 - (position * 270.0);
                (hue, 0.8, 0.75 - intensity * 0.25)
            }
            FillScheme::Rainbow => (position * 360.0, 0.75, 0.75 - intensity * 0.2),
            FillScheme::Ocean => (180.0 + position * 60.0, 0.7, 0.8 - intensity * 0.35),
            FillScheme::Fire => (position * 60.0, 0.9, 0.8 - intensity * 0.35),
            FillScheme::Monochrome => (0.0, 0.0, 0.85 - intensity * 0.5),
        };

        let hsl = Hsl::new(h, s, l);
        let rgb: Srgb = hsl.into_color();

        (
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }

    pub fn all() -> &'static [FillScheme] {
        &[
            FillScheme::Sky,
            FillScheme::Spectrum,
            FillScheme::Rainbow,
            FillScheme::Ocean,
            FillScheme::Fire,
            FillScheme::Monochrome,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            FillScheme::Sky => "sky",
            FillScheme::Spectrum => "spectrum",
            FillScheme::Rainbow => "rainbow",
            FillScheme::Ocean => "ocean",
            FillScheme::Fire => "fire",
            FillScheme::Monochrome => "monochrome",
        }
    }
}
