pub mod summary;
pub mod terminal;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Statistics and sector counts as text
    #[default]
    Summary,
    /// Diagram preview drawn with half-block cells
    Terminal,
}
