use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Parse whitespace separated angle tokens. Commas also separate values.
/// Tokens that are not finite numbers are skipped with a warning.
pub fn parse_angles(text: &str) -> Vec<f64> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                warn!("Skipping invalid angle \"{}\"", token);
                None
            }
        })
        .collect()
}

/// Read angles from a file, or from stdin when the path is `-`.
pub fn read_angles(path: &Path) -> Result<Vec<f64>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read angles from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read angles from {}", path.display()))?
    };
    Ok(parse_angles(&content))
}
