//! Rose diagrams of directional data: sector counts, the circular mean,
//! and the drawing primitives that lay them out on a fixed canvas.

pub mod cli;
pub mod color;
pub mod config;
pub mod diagram;
pub mod display;
pub mod error;
pub mod input;
pub mod renderer;

pub use diagram::{DiagramOptions, RoseDiagram};
pub use error::{Result, RoseError};
