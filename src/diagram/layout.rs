//! Polar layout: turns counts, scale and mean direction into primitives.

use tracing::debug;

use super::axis::AxisMode;
use super::binning::Sector;
use super::geometry::{
    Point, Square, BAR_EXTENT, BAR_ORIGIN, CENTER, COMPASS_LABEL_POSITIONS, CROSSHAIRS,
    MARKER_HALF_SPAN, MARKER_RADIUS, MARKER_STROKE, MARKER_TICK_INNER, MARKER_TICK_OUTER,
    RING_RADII, SCALE_LABEL_POSITIONS,
};
use super::primitives::{Arc, FontClass, MeanMarker, Primitive, Stroke, TextAnchor};
use super::scale::RadialScale;

const DEGREE_SIGN: char = '\u{00B0}';

/// Concentric rings (inner ones dashed) and the two crosshairs.
pub fn layout_grid() -> Vec<Primitive> {
    let last = RING_RADII.len() - 1;
    let rings = RING_RADII.iter().enumerate().map(|(i, &radius)| Primitive::Ring {
        center: CENTER,
        radius,
        stroke: if i == last { Stroke::Solid } else { Stroke::Dashed },
    });
    let crosshairs = CROSSHAIRS.iter().map(|&(from, to)| Primitive::Line { from, to, width: 1.0 });
    rings.chain(crosshairs).collect()
}

/// Compass labels naming the angle value at north, east, south and west.
pub fn layout_direction_labels(mode: &AxisMode) -> Vec<Primitive> {
    mode.compass_labels()
        .into_iter()
        .zip(COMPASS_LABEL_POSITIONS)
        .map(|(value, position)| Primitive::Label {
            position,
            text: format!("{}{}", value, DEGREE_SIGN),
            font: FontClass::Legend,
            anchor: TextAnchor::Center,
        })
        .collect()
}

/// Ring values, repeated on all four axes.
pub fn layout_scale_labels(scale: &RadialScale) -> Vec<Primitive> {
    let labels = scale.labels();
    let mut primitives = Vec::with_capacity(labels.len() * 4);
    for (ring, text) in labels.iter().enumerate() {
        for (quadrant, &position) in SCALE_LABEL_POSITIONS[ring].iter().enumerate() {
            // The outermost east label would cross the ring if centred.
            let anchor = if ring == labels.len() - 1 && quadrant == 1 {
                TextAnchor::End
            } else {
                TextAnchor::Center
            };
            primitives.push(Primitive::Label {
                position,
                text: text.clone(),
                font: FontClass::Small,
                anchor,
            });
        }
    }
    primitives
}

/// One wedge per non-empty sector, walking sectors in index order.
///
/// Wedge size is proportional to `count / max_count`; the start angle begins
/// at the mode's bar origin and advances by the signed sector step.
pub fn layout_bars(sectors: &[Sector], mode: &AxisMode, max_count: usize) -> Vec<Primitive> {
    if sectors.is_empty() || max_count == 0 {
        return Vec::new();
    }

    let sector_count = sectors.len();
    let step = mode.sector_step(sector_count);
    debug!(
        "Laying out {} sectors for mode {}: origin {}°, step {}°",
        sector_count,
        mode.id,
        mode.bar_origin(),
        step
    );

    sectors
        .iter()
        .scan(mode.bar_origin(), |start, sector| {
            let this = *start;
            *start += step;
            Some((this, sector))
        })
        .filter(|(_, sector)| sector.count > 0 && sector.count <= max_count)
        .map(|(start_deg, sector)| {
            let fraction = sector.count as f64 / max_count as f64;
            let side = ((BAR_EXTENT as f64 * fraction) as i32).min(BAR_EXTENT);
            let corner = BAR_ORIGIN + (BAR_EXTENT - side) / 2;
            Primitive::Wedge {
                bounds: Square { x: corner, y: corner, side },
                start_deg,
                sweep_deg: step,
                sector: sector.index,
                sector_count,
                count: sector.count,
            }
        })
        .collect()
}

/// Flag marking the mean direction just outside the outer ring.
pub fn layout_mean_marker(mean_deg: f64, mode: &AxisMode) -> Primitive {
    let canvas_deg = mode.mean_to_canvas(mean_deg);
    let arc = Arc {
        center: CENTER,
        radius: MARKER_RADIUS,
        start_deg: canvas_deg - MARKER_HALF_SPAN,
        sweep_deg: 2.0 * MARKER_HALF_SPAN,
    };
    let tick = |angle: f64| {
        (
            Point::polar(CENTER, angle, MARKER_TICK_OUTER),
            Point::polar(CENTER, angle, MARKER_TICK_INNER),
        )
    };

    Primitive::MeanMarker(MeanMarker {
        canvas_deg,
        arc,
        spoke: (CENTER, arc.midpoint()),
        ticks: [tick(arc.start_deg), tick(arc.start_deg + arc.sweep_deg)],
        width: MARKER_STROKE,
    })
}
