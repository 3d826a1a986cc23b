//! Mirrored 5×5 grid construction and the even-value cell filter.
//!
//! The digest is chunked into groups of three; each group `[a, b, c]`
//! becomes the palindromic row `[a, b, c, b, a]`, which is what makes the
//! final image horizontally symmetric. Flat row-major indices are assigned
//! once here and never recomputed, so filtered cells still point at their
//! original layout position.
use crate::types::Cell;
use log::debug;

/// Cells per row and rows per grid.
pub const GRID_SIDE: usize = 5;

/// Digest bytes consumed per mirrored row.
const GROUP_LEN: usize = 3;

/// Build the mirrored grid from the digest bytes.
///
/// Trailing bytes that do not complete a group of three are discarded; with
/// the 16-byte digest exactly one byte is dropped and 25 cells come out.
/// Fewer than three input bytes yield an empty grid, which every downstream
/// stage tolerates.
pub fn build_grid(hex: &[u8]) -> Vec<Cell> {
    let rows = hex.len() / GROUP_LEN;
    let mut values = Vec::with_capacity(rows * GRID_SIDE);
    for group in hex.chunks_exact(GROUP_LEN) {
        let (a, b, c) = (group[0], group[1], group[2]);
        values.extend_from_slice(&[a, b, c, b, a]);
    }
    let grid: Vec<Cell> = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| Cell { value, index })
        .collect();
    debug!(
        "build_grid: {} digest bytes -> {} cells ({} discarded)",
        hex.len(),
        grid.len(),
        hex.len() - rows * GROUP_LEN
    );
    grid
}

/// Keep only even-valued cells, preserving relative order and the original
/// row-major indices.
pub fn filter_even(grid: Vec<Cell>) -> Vec<Cell> {
    let total = grid.len();
    let kept: Vec<Cell> = grid.into_iter().filter(|c| c.value % 2 == 0).collect();
    debug!("filter_even: kept {}/{} cells", kept.len(), total);
    kept
}
