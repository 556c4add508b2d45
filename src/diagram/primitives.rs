//! Drawing primitives handed to a [`Renderer`](crate::renderer::Renderer).
//!
//! Angles are canvas degrees: counter-clockwise from due east with screen
//! "up" at 90°. A negative sweep runs clockwise.

use super::geometry::{Point, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontClass {
    /// Compass labels
    Legend,
    /// Ring value labels
    Small,
}

/// Horizontal placement of a label relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Center,
    /// Text ends at the position
    End,
}

/// Open circular arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
}

impl Arc {
    pub fn start_point(&self) -> Point {
        Point::polar(self.center, self.start_deg, self.radius)
    }

    pub fn end_point(&self) -> Point {
        Point::polar(self.center, self.start_deg + self.sweep_deg, self.radius)
    }

    pub fn midpoint(&self) -> Point {
        Point::polar(self.center, self.start_deg + self.sweep_deg / 2.0, self.radius)
    }
}

/// Flag-shaped mean direction indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct MeanMarker {
    /// Canvas angle the marker points at, `[0, 360)`
    pub canvas_deg: f64,
    pub arc: Arc,
    /// Centre to arc midpoint
    pub spoke: (Point, Point),
    /// Short radial ticks at both arc ends
    pub ticks: [(Point, Point); 2],
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Ring {
        center: Point,
        radius: f64,
        stroke: Stroke,
    },
    Line {
        from: Point,
        to: Point,
        width: f64,
    },
    Label {
        position: Point,
        text: String,
        font: FontClass,
        anchor: TextAnchor,
    },
    /// Pie slice of one sector, inscribed in `bounds`.
    Wedge {
        bounds: Square,
        start_deg: f64,
        sweep_deg: f64,
        sector: usize,
        sector_count: usize,
        count: usize,
    },
    MeanMarker(MeanMarker),
}
