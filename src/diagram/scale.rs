//! Radial grid scale: the values printed on the five concentric rings.

/// Number of concentric rings on the diagram.
pub const RING_COUNT: usize = 5;

/// Sector counts at or above this get integer ring labels and an outer ring
/// rounded up to a multiple of five.
const LARGE_COUNT: usize = 25;

#[derive(Debug, Clone, PartialEq)]
pub struct RadialScale {
    /// Value of the outermost ring
    pub outer_value: f64,
    /// Ring values from the innermost outwards, rounded to two decimals
    pub rings: [f64; RING_COUNT],
    /// Whether ring values are printed as integers
    pub integer_labels: bool,
}

impl RadialScale {
    /// Derive the scale from the largest sector count, unless a finite, non-negative
    /// `override_max` is given.
    pub fn new(max_count: usize, override_max: Option<f64>) -> Self {
        let outer_value = match override_max.filter(|v| v.is_finite() && *v >= 0.0) {
            Some(v) => v,
            None if max_count < LARGE_COUNT => max_count as f64,
            None => max_count.next_multiple_of(5) as f64,
        };

        let innermost = outer_value / RING_COUNT as f64;
        let rings = std::array::from_fn(|k| round2(innermost * (k + 1) as f64));
        let integer_labels = max_count >= LARGE_COUNT || innermost.fract() == 0.0;

        Self {
            outer_value,
            rings,
            integer_labels,
        }
    }

    /// Ring label strings, innermost first.
    pub fn labels(&self) -> [String; RING_COUNT] {
        self.rings.map(|value| {
            if self.integer_labels {
                format!("{}", value.trunc() as i64)
            } else {
                format_decimal(value)
            }
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Up to two decimals, keeping at least one: `0.4`, `1.25`, `2.0`.
fn format_decimal(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}
