//! The staged identicon pipeline.
//!
//! Each stage consumes the previous record and returns a new immutable one
//! with the freshly computed field, so required data is never optional and
//! no stage can observe a half-built image:
//!
//! `HashedInput` → `ColoredImage` → `GriddedImage` → (filtered)
//! `GriddedImage` → `MappedImage` → `RenderedIdenticon`
//!
//! [`generate`] runs the whole chain in memory; [`save`] additionally
//! persists the PNG. Both are pure functions of the input string up to the
//! final write.
use crate::color::pick_color;
use crate::error::IdenticonError;
use crate::grid::{build_grid, filter_even};
use crate::hash::{digest16, DIGEST_LEN};
use crate::io::save_png;
use crate::pixels::map_pixels;
use crate::raster::render_png;
use crate::types::{Cell, Rect, Rgb};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Stage 1 output: the input reduced to its 16-byte digest.
#[derive(Clone, Debug, Serialize)]
pub struct HashedInput {
    pub hex: [u8; DIGEST_LEN],
}

/// Stage 2 output: digest plus the derived fill color.
#[derive(Clone, Debug, Serialize)]
pub struct ColoredImage {
    pub hex: [u8; DIGEST_LEN],
    pub color: Rgb,
}

/// Stage 3/4 output: the mirrored cell grid, before or after filtering.
#[derive(Clone, Debug, Serialize)]
pub struct GriddedImage {
    pub hex: [u8; DIGEST_LEN],
    pub color: Rgb,
    pub grid: Vec<Cell>,
}

/// Stage 5 output: one pixel rectangle per surviving cell.
#[derive(Clone, Debug, Serialize)]
pub struct MappedImage {
    pub hex: [u8; DIGEST_LEN],
    pub color: Rgb,
    pub grid: Vec<Cell>,
    pub pixel_map: Vec<Rect>,
}

/// Final record: every intermediate field plus the encoded PNG.
#[derive(Clone, Debug, Serialize)]
pub struct RenderedIdenticon {
    pub hex: [u8; DIGEST_LEN],
    pub color: Rgb,
    pub grid: Vec<Cell>,
    pub pixel_map: Vec<Rect>,
    #[serde(skip)]
    png: Vec<u8>,
}

impl HashedInput {
    /// Hash the raw input string (UTF-8 bytes) into the pipeline's digest.
    pub fn from_input(input: &str) -> Self {
        Self {
            hex: digest16(input.as_bytes()),
        }
    }

    pub fn pick_color(self) -> Result<ColoredImage, IdenticonError> {
        let color = pick_color(&self.hex)?;
        Ok(ColoredImage {
            hex: self.hex,
            color,
        })
    }
}

impl ColoredImage {
    pub fn build_grid(self) -> GriddedImage {
        GriddedImage {
            grid: build_grid(&self.hex),
            hex: self.hex,
            color: self.color,
        }
    }
}

impl GriddedImage {
    /// Narrow the grid to even-valued cells. Indices keep referring to the
    /// original 5×5 layout.
    pub fn filter_even(self) -> GriddedImage {
        GriddedImage {
            grid: filter_even(self.grid),
            hex: self.hex,
            color: self.color,
        }
    }

    pub fn map_pixels(self) -> MappedImage {
        let pixel_map = map_pixels(&self.grid);
        MappedImage {
            hex: self.hex,
            color: self.color,
            grid: self.grid,
            pixel_map,
        }
    }
}

impl MappedImage {
    pub fn render(self) -> Result<RenderedIdenticon, IdenticonError> {
        let png = render_png(self.color, &self.pixel_map)?;
        Ok(RenderedIdenticon {
            hex: self.hex,
            color: self.color,
            grid: self.grid,
            pixel_map: self.pixel_map,
            png,
        })
    }
}

impl RenderedIdenticon {
    /// Encoded PNG bytes, ready to be written to disk or served as-is.
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn into_png(self) -> Vec<u8> {
        self.png
    }

    /// Persist the PNG as `<dir>/<name>.png` and return the path written.
    pub fn save(&self, dir: &Path, name: &str) -> Result<PathBuf, IdenticonError> {
        save_png(&self.png, dir, name)
    }
}

/// Run the full in-memory pipeline on `input`. No I/O happens here.
pub fn generate(input: &str) -> Result<RenderedIdenticon, IdenticonError> {
    HashedInput::from_input(input)
        .pick_color()?
        .build_grid()
        .filter_even()
        .map_pixels()
        .render()
}

/// Run the full pipeline and persist the result as `<dir>/<name>.png`.
pub fn save(input: &str, dir: &Path, name: &str) -> Result<PathBuf, IdenticonError> {
    generate(input)?.save(dir, name)
}
