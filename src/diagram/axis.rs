//! Axis conventions.
//!
//! Every diagram is drawn under one of 16 axis modes: the cross product of
//! rotation sense, angle range and the compass direction that reads 0°.
//! All of them live in [`AXIS_MODES`]; the binner and the layout engine read
//! their facts from the resolved table row instead of re-deriving them.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RoseError;

/// Direction in which angle values increase around the dial.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, ValueEnum, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RotationSense {
    #[default]
    CounterClockwise = 0,
    Clockwise = 1,
}

/// Native numeric range of angle values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, ValueEnum, PartialEq, Eq, Hash)]
pub enum RangeConvention {
    /// 0 to 360 degrees, sectors closed on the left
    #[default]
    #[serde(rename = "0-360")]
    #[value(name = "0-360", alias = "360")]
    ZeroTo360 = 0,
    /// -180 to 180 degrees, sectors closed on the right
    #[serde(rename = "symmetric")]
    #[value(name = "symmetric", alias = "180")]
    Symmetric = 1,
}

/// Compass direction of the 0° axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, ValueEnum, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ZeroReference {
    #[default]
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl RotationSense {
    pub fn all() -> &'static [RotationSense] {
        &[RotationSense::CounterClockwise, RotationSense::Clockwise]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RotationSense::CounterClockwise => "counter-clockwise",
            RotationSense::Clockwise => "clockwise",
        }
    }

    /// +1 when values grow counter-clockwise on the canvas, -1 otherwise.
    pub fn sign(&self) -> f64 {
        match self {
            RotationSense::CounterClockwise => 1.0,
            RotationSense::Clockwise => -1.0,
        }
    }
}

impl RangeConvention {
    pub fn all() -> &'static [RangeConvention] {
        &[RangeConvention::ZeroTo360, RangeConvention::Symmetric]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RangeConvention::ZeroTo360 => "0-360",
            RangeConvention::Symmetric => "symmetric",
        }
    }

    /// Lowest value of the native range.
    pub fn start(&self) -> f64 {
        match self {
            RangeConvention::ZeroTo360 => 0.0,
            RangeConvention::Symmetric => -180.0,
        }
    }

    /// Fold an angle into the native range: `[0, 360)` or `(-180, 180]`.
    pub fn normalize(&self, degrees: f64) -> f64 {
        let wrapped = degrees.rem_euclid(360.0);
        match self {
            RangeConvention::ZeroTo360 => wrapped,
            RangeConvention::Symmetric if wrapped > 180.0 => wrapped - 360.0,
            RangeConvention::Symmetric => wrapped,
        }
    }
}

impl ZeroReference {
    pub fn all() -> &'static [ZeroReference] {
        &[
            ZeroReference::North,
            ZeroReference::East,
            ZeroReference::South,
            ZeroReference::West,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ZeroReference::North => "north",
            ZeroReference::East => "east",
            ZeroReference::South => "south",
            ZeroReference::West => "west",
        }
    }

    /// Canvas angle of this compass point (counter-clockwise from due east).
    pub fn canvas_angle(&self) -> f64 {
        match self {
            ZeroReference::North => 90.0,
            ZeroReference::East => 0.0,
            ZeroReference::South => 270.0,
            ZeroReference::West => 180.0,
        }
    }
}

impl FromStr for RotationSense {
    type Err = RoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ccw" | "counter-clockwise" | "counterclockwise" => Ok(Self::CounterClockwise),
            "cw" | "clockwise" => Ok(Self::Clockwise),
            _ => Err(RoseError::MalformedMode(format!("unknown rotation sense '{}'", s))),
        }
    }
}

impl FromStr for RangeConvention {
    type Err = RoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0-360" | "360" | "0 to 360 degrees" => Ok(Self::ZeroTo360),
            "symmetric" | "180" | "-180-180" | "-180 to 180 degrees" => Ok(Self::Symmetric),
            _ => Err(RoseError::MalformedMode(format!("unknown angle range '{}'", s))),
        }
    }
}

impl FromStr for ZeroReference {
    type Err = RoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" => Ok(Self::North),
            "e" | "east" => Ok(Self::East),
            "s" | "south" => Ok(Self::South),
            "w" | "west" => Ok(Self::West),
            _ => Err(RoseError::MalformedMode(format!("unknown zero direction '{}'", s))),
        }
    }
}

/// One of the 16 axis conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisMode {
    pub id: char,
    pub rotation: RotationSense,
    pub range: RangeConvention,
    pub zero: ZeroReference,
}

use RangeConvention::{Symmetric, ZeroTo360};
use RotationSense::{Clockwise, CounterClockwise};
use ZeroReference::{East, North, South, West};

/// Canonical mode table, indexed by `range * 8 + rotation * 4 + zero`.
pub static AXIS_MODES: [AxisMode; 16] = [
    AxisMode::new('A', CounterClockwise, ZeroTo360, North),
    AxisMode::new('B', CounterClockwise, ZeroTo360, East),
    AxisMode::new('C', CounterClockwise, ZeroTo360, South),
    AxisMode::new('D', CounterClockwise, ZeroTo360, West),
    AxisMode::new('E', Clockwise, ZeroTo360, North),
    AxisMode::new('F', Clockwise, ZeroTo360, East),
    AxisMode::new('G', Clockwise, ZeroTo360, South),
    AxisMode::new('H', Clockwise, ZeroTo360, West),
    AxisMode::new('I', CounterClockwise, Symmetric, North),
    AxisMode::new('J', CounterClockwise, Symmetric, East),
    AxisMode::new('K', CounterClockwise, Symmetric, South),
    AxisMode::new('L', CounterClockwise, Symmetric, West),
    AxisMode::new('M', Clockwise, Symmetric, North),
    AxisMode::new('N', Clockwise, Symmetric, East),
    AxisMode::new('O', Clockwise, Symmetric, South),
    AxisMode::new('P', Clockwise, Symmetric, West),
];

/// Look up the mode for a (rotation, range, zero) choice.
pub fn resolve(rotation: RotationSense, range: RangeConvention, zero: ZeroReference) -> AxisMode {
    AXIS_MODES[range as usize * 8 + rotation as usize * 4 + zero as usize]
}

impl AxisMode {
    const fn new(
        id: char,
        rotation: RotationSense,
        range: RangeConvention,
        zero: ZeroReference,
    ) -> Self {
        Self { id, rotation, range, zero }
    }

    /// Find a mode by its letter (`A`..`P`, case-insensitive).
    pub fn from_id(id: char) -> Result<Self, RoseError> {
        let upper = id.to_ascii_uppercase();
        AXIS_MODES
            .iter()
            .find(|mode| mode.id == upper)
            .copied()
            .ok_or_else(|| RoseError::MalformedMode(format!("no axis mode '{}'", id)))
    }

    pub fn decompose(&self) -> (RotationSense, RangeConvention, ZeroReference) {
        (self.rotation, self.range, self.zero)
    }

    pub fn is_clockwise(&self) -> bool {
        self.rotation == RotationSense::Clockwise
    }

    /// Canvas angle at which sector 0 begins.
    pub fn bar_origin(&self) -> f64 {
        let offset = self.zero.canvas_angle();
        match self.range {
            RangeConvention::ZeroTo360 => offset,
            RangeConvention::Symmetric => offset + 180.0,
        }
    }

    /// Signed canvas sweep of one sector.
    pub fn sector_step(&self, sector_count: usize) -> f64 {
        self.rotation.sign() * 360.0 / sector_count as f64
    }

    /// Offset applied when moving a mean angle onto the canvas.
    /// Clockwise modes negate it; east stays at zero either way.
    pub fn marker_offset(&self) -> f64 {
        let offset = self.zero.canvas_angle();
        if self.is_clockwise() && offset > 0.0 {
            -offset
        } else {
            offset
        }
    }

    /// Canvas angle (degrees in `[0, 360)`) of a mean direction.
    pub fn mean_to_canvas(&self, mean_deg: f64) -> f64 {
        let offset = self.marker_offset();
        let canvas = if self.is_clockwise() {
            360.0 - (mean_deg + offset)
        } else {
            mean_deg + offset
        };
        canvas.rem_euclid(360.0)
    }

    /// Angle value this mode assigns to a canvas direction.
    pub fn value_at_canvas(&self, canvas_deg: f64) -> f64 {
        let relative = canvas_deg - self.zero.canvas_angle();
        self.range.normalize(self.rotation.sign() * relative)
    }

    /// Compass labels, clockwise from north (north, east, south, west).
    pub fn compass_labels(&self) -> [String; 4] {
        [90.0, 0.0, 270.0, 180.0].map(|canvas| format!("{}", self.value_at_canvas(canvas) as i64))
    }
}

impl Default for AxisMode {
    fn default() -> Self {
        AXIS_MODES[0]
    }
}

impl fmt::Display for AxisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, zero {})",
            self.id,
            self.rotation.name(),
            self.range.name(),
            self.zero.name()
        )
    }
}

impl FromStr for AxisMode {
    type Err = RoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(id), None) => Self::from_id(id),
            _ => Err(RoseError::MalformedMode(format!("no axis mode '{}'", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resolver_is_bijection() {
        let mut ids = HashSet::new();
        for &rotation in RotationSense::all() {
            for &range in RangeConvention::all() {
                for &zero in ZeroReference::all() {
                    let mode = resolve(rotation, range, zero);
                    assert_eq!(mode.decompose(), (rotation, range, zero));
                    assert_eq!(AxisMode::from_id(mode.id).unwrap(), mode);
                    ids.insert(mode.id);
                }
            }
        }
        assert_eq!(ids.len(), 16);
    }

    #[test]
    fn test_table_matches_lettering() {
        let b = resolve(CounterClockwise, ZeroTo360, East);
        assert_eq!(b.id, 'B');
        let g = resolve(Clockwise, ZeroTo360, South);
        assert_eq!(g.id, 'G');
        let l = resolve(CounterClockwise, Symmetric, West);
        assert_eq!(l.id, 'L');
        let m = resolve(Clockwise, Symmetric, North);
        assert_eq!(m.id, 'M');
    }

    #[test]
    fn test_unknown_mode_fails_loudly() {
        assert!(matches!(AxisMode::from_id('Q'), Err(RoseError::MalformedMode(_))));
        assert!(matches!("AB".parse::<AxisMode>(), Err(RoseError::MalformedMode(_))));
        assert!(matches!("up".parse::<ZeroReference>(), Err(RoseError::MalformedMode(_))));
        assert_eq!("p".parse::<AxisMode>().unwrap().id, 'P');
    }

    #[test]
    fn test_compass_labels_for_every_mode() {
        let expected: [(char, [&str; 4]); 16] = [
            ('A', ["0", "270", "180", "90"]),
            ('B', ["90", "0", "270", "180"]),
            ('C', ["180", "90", "0", "270"]),
            ('D', ["270", "180", "90", "0"]),
            ('E', ["0", "90", "180", "270"]),
            ('F', ["270", "0", "90", "180"]),
            ('G', ["180", "270", "0", "90"]),
            ('H', ["90", "180", "270", "0"]),
            ('I', ["0", "-90", "180", "90"]),
            ('J', ["90", "0", "-90", "180"]),
            ('K', ["180", "90", "0", "-90"]),
            ('L', ["-90", "180", "90", "0"]),
            ('M', ["0", "90", "180", "-90"]),
            ('N', ["-90", "0", "90", "180"]),
            ('O', ["180", "-90", "0", "90"]),
            ('P', ["90", "180", "-90", "0"]),
        ];
        for (id, labels) in expected {
            let mode = AxisMode::from_id(id).unwrap();
            assert_eq!(mode.compass_labels(), labels.map(String::from), "mode {}", id);
        }
    }

    #[test]
    fn test_bar_origin_and_step() {
        let a = AxisMode::from_id('A').unwrap();
        assert_eq!(a.bar_origin(), 90.0);
        assert_eq!(a.sector_step(24), 15.0);

        let o = AxisMode::from_id('O').unwrap();
        assert_eq!(o.bar_origin(), 450.0);
        assert_eq!(o.sector_step(24), -15.0);
    }

    #[test]
    fn test_mean_to_canvas_points_at_labelled_direction() {
        // A mean equal to a compass label must land on that compass point.
        for mode in AXIS_MODES.iter() {
            let labels = mode.compass_labels();
            for (label, canvas) in labels.iter().zip([90.0, 0.0, 270.0, 180.0]) {
                let value: f64 = label.parse().unwrap();
                let got = mode.mean_to_canvas(value.rem_euclid(360.0));
                assert!((got - canvas).abs() < 1e-9, "mode {} label {}", mode.id, label);
            }
        }
    }

    #[test]
    fn test_east_offset_is_not_negated() {
        let f = AxisMode::from_id('F').unwrap();
        assert_eq!(f.marker_offset(), 0.0);
        assert_eq!(f.mean_to_canvas(90.0), 270.0);
        let e = AxisMode::from_id('E').unwrap();
        assert_eq!(e.marker_offset(), -90.0);
    }
}
