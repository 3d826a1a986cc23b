use crate::error::IdenticonError;
use crate::types::Rgb;

/// Pick the fill color: the first three digest bytes, in order, as
/// (red, green, blue).
///
/// The 16-byte hasher always satisfies the length requirement; the guard
/// exists for swapped-in digests and fails fast instead of panicking.
pub fn pick_color(hex: &[u8]) -> Result<Rgb, IdenticonError> {
    match hex {
        [r, g, b, ..] => Ok(Rgb {
            r: *r,
            g: *g,
            b: *b,
        }),
        _ => Err(IdenticonError::InsufficientData {
            needed: 3,
            got: hex.len(),
        }),
    }
}
