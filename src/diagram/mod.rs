//! Rose diagram computation.
//!
//! Raw angles and an axis mode go in; sector counts, a ring scale, the
//! circular mean and a list of drawing primitives come out. Nothing here
//! holds state between calls.

pub mod axis;
pub mod binning;
pub mod geometry;
pub mod layout;
pub mod primitives;
pub mod scale;
pub mod stats;

pub use axis::{resolve, AxisMode, RangeConvention, RotationSense, ZeroReference, AXIS_MODES};
pub use binning::{bin_angles, largest_count, Sector};
pub use primitives::Primitive;
pub use scale::RadialScale;
pub use stats::{mean_and_dispersion, MeanDirection};

use tracing::{debug, warn};

use crate::error::{Result, RoseError};

pub const DEFAULT_SECTOR_COUNT: usize = 24;

/// Inputs besides the angles themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramOptions {
    pub mode: AxisMode,
    pub sector_count: usize,
    /// Fixed value for the outer ring; automatic when `None`
    pub scale_max: Option<f64>,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            mode: AxisMode::default(),
            sector_count: DEFAULT_SECTOR_COUNT,
            scale_max: None,
        }
    }
}

/// Outcome of the mean direction computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeanEstimate {
    Defined(MeanDirection),
    /// Sample vectors cancel; there is no mean direction to draw.
    Indeterminate { resultant_length: f64 },
}

impl MeanEstimate {
    pub fn direction(&self) -> Option<&MeanDirection> {
        match self {
            MeanEstimate::Defined(direction) => Some(direction),
            MeanEstimate::Indeterminate { .. } => None,
        }
    }
}

/// A fully computed diagram, ready for a renderer or a text summary.
#[derive(Debug, Clone, PartialEq)]
pub struct RoseDiagram {
    pub mode: AxisMode,
    pub sample_count: usize,
    pub sectors: Vec<Sector>,
    pub max_count: usize,
    pub scale: RadialScale,
    pub mean: MeanEstimate,
}

impl RoseDiagram {
    pub fn build(angles: &[f64], options: &DiagramOptions) -> Result<Self> {
        let mode = options.mode;
        let sectors = bin_angles(angles, options.sector_count, &mode)?;
        let max_count = largest_count(&sectors);
        let scale = RadialScale::new(max_count, options.scale_max);

        let mean = match mean_and_dispersion(angles) {
            Ok(direction) => MeanEstimate::Defined(direction),
            Err(RoseError::IndeterminateDirection { resultant_length }) => {
                warn!(
                    "Mean direction is indeterminate (resultant length {:e}), no marker drawn",
                    resultant_length
                );
                MeanEstimate::Indeterminate { resultant_length }
            }
            Err(e) => return Err(e),
        };

        debug!(
            "Built diagram for {} angles in mode {}: largest sector {}, outer ring {}",
            angles.len(),
            mode.id,
            max_count,
            scale.outer_value
        );

        Ok(Self {
            mode,
            sample_count: angles.len(),
            sectors,
            max_count,
            scale,
            mean,
        })
    }

    /// Number of samples that landed in a sector.
    pub fn counted(&self) -> usize {
        self.sectors.iter().map(|s| s.count).sum()
    }

    /// Every primitive of the diagram in paint order: grid, compass labels,
    /// ring labels, bars, mean marker.
    pub fn primitives(&self) -> Vec<Primitive> {
        let mut primitives = layout::layout_grid();
        primitives.extend(layout::layout_direction_labels(&self.mode));
        primitives.extend(layout::layout_scale_labels(&self.scale));
        primitives.extend(layout::layout_bars(&self.sectors, &self.mode, self.max_count));
        if let Some(direction) = self.mean.direction() {
            primitives.push(layout::layout_mean_marker(direction.mean_deg, &self.mode));
        }
        primitives
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indeterminate_mean_is_flagged() {
        let diagram = RoseDiagram::build(&[0.0, 180.0], &DiagramOptions::default()).unwrap();
        assert!(matches!(diagram.mean, MeanEstimate::Indeterminate { .. }));
        assert_eq!(diagram.max_count, 1);
        assert!(!diagram
            .primitives()
            .iter()
            .any(|p| matches!(p, Primitive::MeanMarker(_))));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            RoseDiagram::build(&[], &DiagramOptions::default()),
            Err(RoseError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_paint_order() {
        let diagram = RoseDiagram::build(&[10.0, 20.0], &DiagramOptions::default()).unwrap();
        let primitives = diagram.primitives();
        // 7 grid + 4 compass + 20 ring labels + 2 wedges + marker
        assert_eq!(primitives.len(), 34);
        assert!(matches!(primitives[0], Primitive::Ring { .. }));
        assert!(matches!(primitives[31], Primitive::Wedge { .. }));
        assert!(matches!(primitives[33], Primitive::MeanMarker(_)));
    }

    #[test]
    fn test_dropped_angles_not_counted() {
        let diagram = RoseDiagram::build(&[-45.0, 45.0], &DiagramOptions::default()).unwrap();
        assert_eq!(diagram.sample_count, 2);
        assert_eq!(diagram.counted(), 1);
    }
}
