//! Grouping of raw angles into equal-width sectors.

use tracing::debug;

use super::axis::{AxisMode, RangeConvention};
use crate::error::{Result, RoseError};

/// One angular bin of the diagram, in the mode's native range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub index: usize,
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl Sector {
    /// Membership test: `[lower, upper)` for 0..360, `(lower, upper]` for -180..180.
    pub fn contains(&self, angle: f64, range: RangeConvention) -> bool {
        match range {
            RangeConvention::ZeroTo360 => self.lower <= angle && angle < self.upper,
            RangeConvention::Symmetric => self.lower < angle && angle <= self.upper,
        }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Sector boundary `i` of `sector_count`, shared exactly by neighbouring sectors.
fn boundary(range: RangeConvention, i: usize, sector_count: usize) -> f64 {
    range.start() + 360.0 * i as f64 / sector_count as f64
}

/// Empty sectors covering the full circle for a mode.
pub fn empty_sectors(sector_count: usize, mode: &AxisMode) -> Result<Vec<Sector>> {
    if sector_count == 0 {
        return Err(RoseError::InvalidInput(
            "sector count must be at least 1".to_string(),
        ));
    }
    Ok((0..sector_count)
        .map(|index| Sector {
            index,
            lower: boundary(mode.range, index, sector_count),
            upper: boundary(mode.range, index + 1, sector_count),
            count: 0,
        })
        .collect())
}

/// Count angles per sector.
///
/// Angles outside the native range of the mode (for example negative values
/// under 0..360) match no sector and are left out of every count.
pub fn bin_angles(angles: &[f64], sector_count: usize, mode: &AxisMode) -> Result<Vec<Sector>> {
    let empty = empty_sectors(sector_count, mode)?;
    let range = mode.range;

    let (sectors, dropped) = angles.iter().fold((empty, 0usize), |(mut sectors, dropped), &angle| {
        match sectors.iter_mut().find(|s| s.contains(angle, range)) {
            Some(sector) => {
                sector.count += 1;
                (sectors, dropped)
            }
            None => (sectors, dropped + 1),
        }
    });

    if dropped > 0 {
        debug!(
            "{} of {} angles fall outside the {} range of mode {} and were not counted",
            dropped,
            angles.len(),
            range.name(),
            mode.id
        );
    }

    Ok(sectors)
}

/// Largest sector count, 0 when no angle was counted.
pub fn largest_count(sectors: &[Sector]) -> usize {
    sectors.iter().map(|s| s.count).max().unwrap_or(0)
}
