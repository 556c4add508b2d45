//! Fixed canvas geometry every diagram is laid out against.
//!
//! The label position tables below are measured for a 600×600 canvas with
//! the diagram centred at (300, 300) and an outer ring of radius 250.

pub const CANVAS_SIZE: usize = 600;
pub const CENTER: Point = Point::new(300.0, 300.0);
pub const OUTER_RADIUS: f64 = 250.0;

/// Radius of each grid ring, innermost first.
pub const RING_RADII: [f64; 5] = [50.0, 100.0, 150.0, 200.0, 250.0];

/// Crosshair end points (vertical, horizontal).
pub const CROSSHAIRS: [(Point, Point); 2] = [
    (Point::new(300.0, 40.0), Point::new(300.0, 560.0)),
    (Point::new(40.0, 300.0), Point::new(560.0, 300.0)),
];

/// Compass label anchors: north, east, south, west.
pub const COMPASS_LABEL_POSITIONS: [Point; 4] = [
    Point::new(300.0, 15.0),
    Point::new(575.0, 290.0),
    Point::new(300.0, 570.0),
    Point::new(20.0, 290.0),
];

/// Ring label anchors, per ring (innermost first) and quadrant (N, E, S, W).
pub const SCALE_LABEL_POSITIONS: [[Point; 4]; 5] = [
    [
        Point::new(300.0, 243.0),
        Point::new(350.0, 293.0),
        Point::new(300.0, 343.0),
        Point::new(250.0, 293.0),
    ],
    [
        Point::new(300.0, 193.0),
        Point::new(400.0, 293.0),
        Point::new(300.0, 393.0),
        Point::new(200.0, 293.0),
    ],
    [
        Point::new(300.0, 143.0),
        Point::new(450.0, 293.0),
        Point::new(300.0, 443.0),
        Point::new(150.0, 293.0),
    ],
    [
        Point::new(300.0, 93.0),
        Point::new(500.0, 293.0),
        Point::new(300.0, 493.0),
        Point::new(100.0, 293.0),
    ],
    [
        Point::new(300.0, 51.0),
        Point::new(550.0, 293.0),
        Point::new(300.0, 535.0),
        Point::new(59.0, 293.0),
    ],
];

/// Bars scale within this square side (the outer ring's diameter).
pub const BAR_EXTENT: i32 = 500;
/// Top-left corner of the full-size bar square.
pub const BAR_ORIGIN: i32 = 50;

/// Mean marker arc radius and the radii its end ticks span.
pub const MARKER_RADIUS: f64 = 260.0;
pub const MARKER_TICK_OUTER: f64 = 265.0;
pub const MARKER_TICK_INNER: f64 = 255.0;
/// Half the angular span of the mean marker arc, in degrees.
pub const MARKER_HALF_SPAN: f64 = 7.5;
pub const MARKER_STROKE: f64 = 3.0;

/// Canvas coordinate, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `center` along a canvas angle
    /// (degrees, counter-clockwise from due east, screen up at 90°).
    #[inline]
    pub fn polar(center: Point, angle_deg: f64, radius: f64) -> Self {
        let rad = angle_deg.to_radians();
        Self::new(center.x + rad.cos() * radius, center.y - rad.sin() * radius)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned square given by its top-left corner and side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub x: i32,
    pub y: i32,
    pub side: i32,
}

impl Square {
    pub fn center(&self) -> Point {
        let half = self.side as f64 / 2.0;
        Point::new(self.x as f64 + half, self.y as f64 + half)
    }

    pub fn radius(&self) -> f64 {
        self.side as f64 / 2.0
    }
}
