//! Serializable per-stage trace of one pipeline run, for demo and debug
//! output. The trace snapshots every intermediate field so a JSON dump is
//! enough to compare runs across implementations.
use crate::error::IdenticonError;
use crate::grid::GRID_SIDE;
use crate::hash::DIGEST_LEN;
use crate::pipeline::{generate, RenderedIdenticon};
use crate::pixels::CANVAS_SIDE;
use crate::types::{Cell, Rect, Rgb};
use serde::Serialize;
use std::time::Instant;

#[derive(Clone, Debug, Serialize)]
pub struct PipelineTrace {
    pub input: String,
    pub hex: [u8; DIGEST_LEN],
    pub color: Rgb,
    /// Cell count before filtering (25 for the 16-byte digest).
    pub cells_total: usize,
    /// Cell count after the even-value filter; equals `grid.len()`.
    pub cells_painted: usize,
    pub grid: Vec<Cell>,
    pub pixel_map: Vec<Rect>,
    pub canvas_side: u32,
    pub png_bytes: usize,
    pub elapsed_ms: f64,
}

impl PipelineTrace {
    /// Run the pipeline on `input` and capture both the rendered identicon
    /// and the trace of how it was derived.
    pub fn capture(input: &str) -> Result<(RenderedIdenticon, PipelineTrace), IdenticonError> {
        let t0 = Instant::now();
        let rendered = generate(input)?;
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
        let cells_total = rendered.hex.len() / 3 * GRID_SIDE;
        let trace = PipelineTrace {
            input: input.to_string(),
            hex: rendered.hex,
            color: rendered.color,
            cells_total,
            cells_painted: rendered.grid.len(),
            grid: rendered.grid.clone(),
            pixel_map: rendered.pixel_map.clone(),
            canvas_side: CANVAS_SIDE,
            png_bytes: rendered.png_bytes().len(),
            elapsed_ms,
        };
        Ok((rendered, trace))
    }
}

#[cfg(test)]
mod tests {
    use super::PipelineTrace;

    #[test]
    fn trace_counts_are_consistent() {
        let (rendered, trace) = PipelineTrace::capture("example").unwrap();
        assert_eq!(trace.cells_total, 25);
        assert_eq!(trace.cells_painted, rendered.grid.len());
        assert_eq!(trace.pixel_map.len(), trace.grid.len());
        assert_eq!(trace.canvas_side, 250);
        assert!(trace.png_bytes > 0);
    }

    #[test]
    fn trace_serializes_to_json() {
        let (_, trace) = PipelineTrace::capture("example").unwrap();
        let json = serde_json::to_string_pretty(&trace).unwrap();
        assert!(json.contains("\"cells_painted\""));
        assert!(json.contains("\"canvas_side\": 250"));
    }
}
