use serde::Serialize;

/// Solid fill color of the identicon, taken from the digest head.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// One grid cell: the digest-derived value plus its stable row-major
/// position in the 5×5 layout. The index survives filtering unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub value: u8,
    pub index: usize,
}

/// Canvas coordinate in pixels, origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// Axis-aligned fill region: `top_left` inclusive, `bottom_right` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
}
