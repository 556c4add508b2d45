use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

use crate::color::FillScheme;
use crate::diagram::{RangeConvention, RotationSense, ZeroReference};
use crate::display::DisplayMode;

#[derive(Parser, Debug)]
#[command(name = "rosette")]
#[command(author, version, about = "Rose diagrams of directional data")]
pub struct Args {
    /// Angles in degrees; invalid tokens are skipped
    #[arg(allow_negative_numbers = true)]
    pub angles: Vec<String>,

    /// Read angles from a file ("-" for stdin)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Config file path (default: ~/.config/rosette/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Direction in which angles increase
    #[arg(short, long)]
    pub rotation: Option<RotationSense>,

    /// Angle range of the input
    #[arg(long)]
    pub range: Option<RangeConvention>,

    /// Compass direction of 0 degrees
    #[arg(short, long)]
    pub zero: Option<ZeroReference>,

    /// Axis mode letter A-P (shortcut for rotation/range/zero)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Number of sectors around the circle
    #[arg(short, long)]
    pub sectors: Option<usize>,

    /// Value of the outermost ring (negative for automatic)
    #[arg(long, allow_negative_numbers = true)]
    pub scale_max: Option<f64>,

    /// Bar fill scheme
    #[arg(long)]
    pub fill: Option<FillScheme>,

    /// Flat bar color as hex, e.g. "#A6CAF0"
    #[arg(long)]
    pub fill_color: Option<String>,

    /// Output view
    #[arg(short, long)]
    pub view: Option<DisplayMode>,

    /// Leave per-sector counts out of the summary
    #[arg(long)]
    pub no_sectors: bool,

    /// Write a commented config template to the default path and exit
    #[arg(long)]
    pub init_config: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_negative_angles_are_positional() {
        let args = Args::parse_from(["rosette", "-90", "45", "--range", "symmetric"]);
        assert_eq!(args.angles, vec!["-90", "45"]);
        assert_eq!(args.range, Some(RangeConvention::Symmetric));
    }
}
