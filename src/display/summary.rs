//! Plain text report of a diagram.

use std::fmt::Write;

use crate::diagram::{MeanEstimate, RangeConvention, RoseDiagram, Sector};

/// Degrees with at most two decimals and no trailing zeros.
fn fmt_deg(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn sector_interval(sector: &Sector, range: RangeConvention) -> String {
    match range {
        RangeConvention::ZeroTo360 => {
            format!("[{}, {})", fmt_deg(sector.lower), fmt_deg(sector.upper))
        }
        RangeConvention::Symmetric => {
            format!("({}, {}]", fmt_deg(sector.lower), fmt_deg(sector.upper))
        }
    }
}

pub fn format_summary(diagram: &RoseDiagram, show_sectors: bool) -> String {
    let mode = &diagram.mode;
    let mut out = String::new();

    let _ = writeln!(out, "Rose diagram, mode {}", mode);
    let dropped = diagram.sample_count - diagram.counted();
    let _ = writeln!(
        out,
        "Samples: {} ({} outside the {} range)",
        diagram.sample_count,
        dropped,
        mode.range.name()
    );
    let _ = writeln!(
        out,
        "Sectors: {} x {}\u{00B0}",
        diagram.sectors.len(),
        fmt_deg(360.0 / diagram.sectors.len().max(1) as f64)
    );
    let _ = writeln!(out, "Largest sector: {}", diagram.max_count);
    let _ = writeln!(out, "Ring labels: {}", diagram.scale.labels().join(" "));

    let [n, e, s, w] = mode.compass_labels();
    let _ = writeln!(
        out,
        "Compass: N {}\u{00B0}  E {}\u{00B0}  S {}\u{00B0}  W {}\u{00B0}",
        n, e, s, w
    );

    match &diagram.mean {
        MeanEstimate::Defined(direction) => {
            let _ = writeln!(out, "Mean direction: {}\u{00B0}", fmt_deg(direction.mean_deg));
            let _ = writeln!(out, "Resultant length: {:.4}", direction.resultant_length);
            let _ = writeln!(out, "Circular variance: {:.4}", direction.circular_variance);
            let _ = writeln!(
                out,
                "Circular std dev: {:.4} rad ({}\u{00B0})",
                direction.circular_std_dev,
                fmt_deg(direction.circular_std_dev.to_degrees())
            );
        }
        MeanEstimate::Indeterminate { resultant_length } => {
            let _ = writeln!(
                out,
                "Mean direction: indeterminate (resultant length {:e})",
                resultant_length
            );
        }
    }

    if show_sectors {
        let _ = writeln!(out);
        let _ = writeln!(out, "{:<18} {:>6}", "Sector", "Count");
        for sector in &diagram.sectors {
            let _ = writeln!(
                out,
                "{:<18} {:>6}",
                sector_interval(sector, mode.range),
                sector.count
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::{AxisMode, DiagramOptions};

    #[test]
    fn test_fmt_deg() {
        assert_eq!(fmt_deg(15.0), "15");
        assert_eq!(fmt_deg(51.428571), "51.43");
        assert_eq!(fmt_deg(-180.0), "-180");
        assert_eq!(fmt_deg(-0.001), "0");
    }

    #[test]
    fn test_summary_lists_sectors() {
        let angles = [16.0, 31.0, 46.0, 66.0, 66.0];
        let diagram = RoseDiagram::build(&angles, &DiagramOptions::default()).unwrap();
        let text = format_summary(&diagram, true);
        assert!(text.contains("Largest sector: 2"));
        assert!(text.contains("Ring labels: 0.4 0.8 1.2 1.6 2.0"));
        assert!(text.contains("Compass: N 0\u{00B0}  E 270\u{00B0}  S 180\u{00B0}  W 90\u{00B0}"));
        assert!(text.lines().any(|l| l.starts_with("[60, 75)") && l.ends_with(" 2")));
    }

    #[test]
    fn test_summary_flags_indeterminate_mean() {
        let options = DiagramOptions {
            mode: AxisMode::from_id('I').unwrap(),
            ..DiagramOptions::default()
        };
        let diagram = RoseDiagram::build(&[90.0, -90.0], &options).unwrap();
        let text = format_summary(&diagram, false);
        assert!(text.contains("Mean direction: indeterminate"));
        assert!(!text.contains("Sector "));
    }
}
