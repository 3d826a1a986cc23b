//! Cell-to-pixel geometry: maps surviving grid cells onto canvas rectangles.
use crate::grid::GRID_SIDE;
use crate::types::{Cell, Point, Rect};

/// Side length of one grid cell, in pixels.
pub const CELL: u32 = 50;

/// Side length of the full canvas, in pixels.
pub const CANVAS_SIDE: u32 = CELL * GRID_SIDE as u32;

/// Compute one pixel rectangle per surviving cell, in cell order.
///
/// The cell's row-major index alone determines its rectangle, so filtering
/// leaves the surviving cells exactly where the full grid would put them.
pub fn map_pixels(grid: &[Cell]) -> Vec<Rect> {
    grid.iter().map(|cell| rect_for_index(cell.index)).collect()
}

fn rect_for_index(index: usize) -> Rect {
    let column = (index % GRID_SIDE) as u32;
    let row = (index / GRID_SIDE) as u32;
    let top_left = Point {
        x: column * CELL,
        y: row * CELL,
    };
    let bottom_right = Point {
        x: top_left.x + CELL,
        y: top_left.y + CELL,
    };
    Rect {
        top_left,
        bottom_right,
    }
}

#[cfg(test)]
mod tests {
    use super::{map_pixels, rect_for_index, CANVAS_SIDE, CELL};
    use crate::types::{Cell, Point, Rect};

    fn rect(x0: u32, y0: u32, x1: u32, y1: u32) -> Rect {
        Rect {
            top_left: Point { x: x0, y: y0 },
            bottom_right: Point { x: x1, y: y1 },
        }
    }

    #[test]
    fn one_rect_per_cell_in_order() {
        let cells = vec![
            Cell { value: 26, index: 0 },
            Cell { value: 164, index: 2 },
            Cell { value: 26, index: 4 },
            Cell { value: 214, index: 5 },
        ];
        let rects = map_pixels(&cells);
        assert_eq!(rects.len(), cells.len());
        assert_eq!(rects[0], rect(0, 0, 50, 50));
        assert_eq!(rects[1], rect(100, 0, 150, 50));
        assert_eq!(rects[2], rect(200, 0, 250, 50));
        assert_eq!(rects[3], rect(0, 50, 50, 100));
    }

    #[test]
    fn all_indices_stay_inside_the_canvas() {
        for index in 0..25 {
            let r = rect_for_index(index);
            assert!(r.bottom_right.x <= CANVAS_SIDE);
            assert!(r.bottom_right.y <= CANVAS_SIDE);
            assert_eq!(r.bottom_right.x - r.top_left.x, CELL);
            assert_eq!(r.bottom_right.y - r.top_left.y, CELL);
        }
    }

    #[test]
    fn last_cell_touches_the_bottom_right_corner() {
        assert_eq!(rect_for_index(24), rect(200, 200, 250, 250));
    }

    #[test]
    fn empty_grid_yields_empty_map() {
        assert!(map_pixels(&[]).is_empty());
    }
}
