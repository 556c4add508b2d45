use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::cli::Args;
use crate::color::FillScheme;
use crate::diagram::{
    resolve, AxisMode, DiagramOptions, RangeConvention, RotationSense, ZeroReference,
    DEFAULT_SECTOR_COUNT,
};
use crate::display::DisplayMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub diagram: DiagramConfig,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiagramConfig {
    pub rotation: RotationSense,
    pub range: RangeConvention,
    pub zero: ZeroReference,
    /// Mode letter (A-P); takes precedence over rotation/range/zero when set
    pub mode: Option<String>,
    pub sectors: usize,
    /// Value of the outermost ring; automatic when unset or negative
    pub scale_max: Option<f64>,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            rotation: RotationSense::default(),
            range: RangeConvention::default(),
            zero: ZeroReference::default(),
            mode: None,
            sectors: DEFAULT_SECTOR_COUNT,
            scale_max: None,
        }
    }
}

impl DiagramConfig {
    pub fn axis_mode(&self) -> Result<AxisMode> {
        match &self.mode {
            Some(letter) => Ok(letter.parse::<AxisMode>()?),
            None => Ok(resolve(self.rotation, self.range, self.zero)),
        }
    }

    pub fn options(&self) -> Result<DiagramOptions> {
        Ok(DiagramOptions {
            mode: self.axis_mode()?,
            sector_count: self.sectors,
            scale_max: self.scale_max.filter(|v| v.is_finite() && *v >= 0.0),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct StyleConfig {
    pub fill: FillScheme,
    pub fill_color: Option<RgbColor>,
    pub ink: Option<RgbColor>,
    pub background: Option<RgbColor>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub view: DisplayMode,
    /// Print sector counts alongside the statistics in summary view
    pub show_sectors: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            view: DisplayMode::Summary,
            show_sectors: true,
        }
    }
}

/// RGB color representation for configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// Parse from hex string like "#A6CAF0" or "A6CAF0"
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Get the default XDG config path (~/.config/rosette/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rosette").join("config.toml"))
    }

    /// Load config from the default XDG path if it exists.
    /// Returns None if the file doesn't exist, logs a warning on parse errors.
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return None;
        }
        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("{:#}. Using defaults.", e);
                None
            }
        }
    }

    /// Write the commented template to the default XDG path, returns the path
    pub fn init_default_config() -> Result<PathBuf> {
        let path = Self::default_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::write_template(&path)?;
        Ok(path)
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, Self::generate_config_template())
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Generate a commented TOML config template
    pub fn generate_config_template() -> String {
        r#"# Rosette Configuration
# This file is auto-generated. Edit as needed.

[diagram]
# Direction in which angles increase: "counter-clockwise" or "clockwise"
rotation = "counter-clockwise"
# Angle range: "0-360" or "symmetric" (-180 to 180)
range = "0-360"
# Compass direction of 0 degrees: "north", "east", "south", "west"
zero = "north"
# Mode letter A-P, overrides the three settings above when present
# mode = "A"
# Number of sectors (bars) around the circle
sectors = 24
# Value of the outermost ring (omit for automatic scaling)
# scale_max = 10.0

[style]
# Bar fill: "sky", "spectrum", "rainbow", "ocean", "fire", "monochrome"
fill = "sky"
# Flat bar color, overrides the fill scheme
# fill_color = { r = 166, g = 202, b = 240 }
# Line and text color
# ink = { r = 0, g = 0, b = 0 }
# Canvas background
# background = { r = 255, g = 255, b = 255 }

[display]
# Output view: "summary" (text) or "terminal" (diagram preview)
view = "summary"
# List per-sector counts in the summary
show_sectors = true
"#
        .to_string()
    }

    /// Merge CLI arguments into config (CLI takes priority)
    pub fn merge_args(&mut self, args: &Args) -> Result<()> {
        // A --mode letter replaces all three settings; otherwise a letter from
        // the file is the base that individual flags adjust.
        let base = match &args.mode {
            Some(letter) => Some(letter.parse::<AxisMode>()?),
            None if args.rotation.is_some() || args.range.is_some() || args.zero.is_some() => {
                self.diagram.mode.as_deref().map(str::parse::<AxisMode>).transpose()?
            }
            None => None,
        };
        if let Some(mode) = base {
            let (rotation, range, zero) = mode.decompose();
            self.diagram.rotation = rotation;
            self.diagram.range = range;
            self.diagram.zero = zero;
            self.diagram.mode = None;
        }
        if let Some(rotation) = args.rotation {
            self.diagram.rotation = rotation;
        }
        if let Some(range) = args.range {
            self.diagram.range = range;
        }
        if let Some(zero) = args.zero {
            self.diagram.zero = zero;
        }
        if let Some(sectors) = args.sectors {
            self.diagram.sectors = sectors;
        }
        if let Some(scale_max) = args.scale_max {
            if !scale_max.is_finite() {
                anyhow::bail!("Invalid scale maximum '{}'", scale_max);
            }
            self.diagram.scale_max = Some(scale_max);
        }

        if let Some(fill) = args.fill {
            self.style.fill = fill;
        }
        if let Some(ref color) = args.fill_color {
            self.style.fill_color = Some(
                RgbColor::from_hex(color)
                    .ok_or_else(|| anyhow::anyhow!("Invalid fill color '{}'", color))?,
            );
        }

        if let Some(view) = args.view {
            self.display.view = view;
        }
        if args.no_sectors {
            self.display.show_sectors = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = toml::from_str(&Config::generate_config_template()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[diagram]\nrotation = \"clockwise\"\nrange = \"symmetric\"\nzero = \"west\"\n\
             sectors = 12\n\n[style]\nfill_color = {{ r = 1, g = 2, b = 3 }}"
        )
        .unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.diagram.axis_mode().unwrap().id, 'P');
        assert_eq!(config.diagram.sectors, 12);
        assert_eq!(config.style.fill_color, Some(RgbColor { r: 1, g: 2, b: 3 }));
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_bad_mode_letter_in_file() {
        let config: Config = toml::from_str("[diagram]\nmode = \"Z\"").unwrap();
        assert!(config.diagram.axis_mode().is_err());
    }

    #[test]
    fn test_write_template_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        Config::write_template(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = Config::default();
        config.diagram.mode = Some("K".to_string());
        let args = Args::parse_from([
            "rosette", "--rotation", "clockwise", "--sectors", "36", "--scale-max", "5",
            "--fill-color", "#102030", "1", "2",
        ]);
        config.merge_args(&args).unwrap();
        assert_eq!(config.diagram.mode, None);
        // Range and zero still come from the mode letter in the file.
        assert_eq!(config.diagram.axis_mode().unwrap().id, 'O');
        let options = config.diagram.options().unwrap();
        assert_eq!(options.sector_count, 36);
        assert_eq!(options.scale_max, Some(5.0));
        assert_eq!(config.style.fill_color, Some(RgbColor { r: 0x10, g: 0x20, b: 0x30 }));
    }

    #[test]
    fn test_mode_letter_flag() {
        let mut config = Config::default();
        let args = Args::parse_from(["rosette", "--mode", "n"]);
        config.merge_args(&args).unwrap();
        assert_eq!(config.diagram.axis_mode().unwrap().id, 'N');

        let args = Args::parse_from(["rosette", "--mode", "x"]);
        assert!(Config::default().merge_args(&args).is_err());
    }

    #[test]
    fn test_negative_scale_max_is_automatic() {
        let config: Config = toml::from_str("[diagram]\nscale_max = -1.0").unwrap();
        assert_eq!(config.diagram.options().unwrap().scale_max, None);

        let mut config = Config::default();
        config.diagram.scale_max = Some(f64::INFINITY);
        assert_eq!(config.diagram.options().unwrap().scale_max, None);
    }

    #[test]
    fn test_non_finite_scale_max_flag_rejected() {
        let args = Args::parse_from(["rosette", "--scale-max", "inf", "1"]);
        assert!(Config::default().merge_args(&args).is_err());
        let args = Args::parse_from(["rosette", "--scale-max", "NaN", "1"]);
        assert!(Config::default().merge_args(&args).is_err());
    }

    #[test]
    fn test_file_mode_survives_partial_override() {
        let mut config: Config = toml::from_str("[diagram]\nmode = \"K\"").unwrap();
        let args = Args::parse_from(["rosette", "--zero", "east", "1"]);
        config.merge_args(&args).unwrap();
        // K is counter-clockwise, symmetric; only the zero moves.
        assert_eq!(config.diagram.axis_mode().unwrap().id, 'J');

        // Flags that do not touch the axis leave the letter alone.
        let mut config: Config = toml::from_str("[diagram]\nmode = \"K\"").unwrap();
        config.merge_args(&Args::parse_from(["rosette", "--sectors", "8", "1"])).unwrap();
        assert_eq!(config.diagram.mode.as_deref(), Some("K"));
        assert_eq!(config.diagram.axis_mode().unwrap().id, 'K');
    }

    #[test]
    fn test_bad_file_mode_with_axis_flag() {
        let mut config: Config = toml::from_str("[diagram]\nmode = \"Z\"").unwrap();
        let args = Args::parse_from(["rosette", "--rotation", "clockwise", "1"]);
        assert!(config.merge_args(&args).is_err());
    }

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(RgbColor::from_hex("#A6CAF0"), Some(RgbColor { r: 166, g: 202, b: 240 }));
        assert_eq!(RgbColor::from_hex("A6CAF"), None);
        assert_eq!(RgbColor::from_hex("zzzzzz"), None);
    }
}
