//! Rasterization: fills the computed rectangles into a PNG-encoded canvas.
//!
//! The stages before this one decide *what* to draw; this module only owns
//! the pixel buffer and delegates encoding to the `image` crate.
use crate::error::IdenticonError;
use crate::pixels::CANVAS_SIDE;
use crate::types::{Rect, Rgb};
use image::{ImageFormat, Rgb as ImageRgb, RgbImage};
use std::io::Cursor;

/// Unpainted canvas regions stay white.
const BACKGROUND: ImageRgb<u8> = ImageRgb([255, 255, 255]);

/// Render the rectangles in `color` onto a white 250×250 canvas and encode
/// it as PNG bytes in memory.
///
/// Rectangles are filled half-open (`top_left` inclusive, `bottom_right`
/// exclusive) so adjacent cells tile the canvas without overlap. An empty
/// rectangle list produces a blank canvas, not an error.
pub fn render_png(color: Rgb, rects: &[Rect]) -> Result<Vec<u8>, IdenticonError> {
    let mut canvas = RgbImage::from_pixel(CANVAS_SIDE, CANVAS_SIDE, BACKGROUND);
    let fill = ImageRgb([color.r, color.g, color.b]);
    for rect in rects {
        let x1 = rect.bottom_right.x.min(CANVAS_SIDE);
        let y1 = rect.bottom_right.y.min(CANVAS_SIDE);
        for y in rect.top_left.y..y1 {
            for x in rect.top_left.x..x1 {
                canvas.put_pixel(x, y, fill);
            }
        }
    }
    let mut png = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}
