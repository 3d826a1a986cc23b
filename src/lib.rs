#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod pipeline;
pub mod types;

// Stage modules – public so each transform can be exercised on its own,
// but the pipeline entry points above are the intended surface.
pub mod color;
pub mod config;
pub mod grid;
pub mod hash;
pub mod io;
pub mod pixels;
pub mod raster;

// --- High-level re-exports -------------------------------------------------

// Main entry points: full pipeline + the staged record types.
pub use crate::pipeline::{
    generate, save, ColoredImage, GriddedImage, HashedInput, MappedImage, RenderedIdenticon,
};

pub use crate::diagnostics::PipelineTrace;
pub use crate::error::IdenticonError;
pub use crate::types::{Cell, Point, Rect, Rgb};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use identicon::prelude::*;
/// use std::path::Path;
///
/// # fn main() {
/// let rendered = generate("example").unwrap();
/// println!(
///     "painted {} of 25 cells, {} PNG bytes",
///     rendered.grid.len(),
///     rendered.png_bytes().len()
/// );
/// rendered.save(Path::new("out"), "example").unwrap();
/// # }
/// ```
pub mod prelude {
    pub use crate::pipeline::{generate, save, RenderedIdenticon};
    pub use crate::types::{Cell, Point, Rect, Rgb};
}
