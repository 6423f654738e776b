/// Book-and-lightbulb logo rasterization
///
/// The logo is authored on a 32-unit design grid and scaled to the target
/// icon size, so the same geometry tables serve every output resolution.
use crate::constants::icon::DESIGN_GRID;
use crate::constants::palette;
use crate::raster::{self, PixelGrid};

/// Horizontal strokes suggesting lines of text on the open book page,
/// as (x1, y1, x2, y2) in design-grid units.
const PAGE_STROKES: [(i32, i32, i32, i32); 3] = [
    (7, 10, 18, 10),
    (7, 14, 16, 14),
    (7, 18, 14, 18),
];

/// Lightbulb center in design-grid units.
const BULB_CENTER: (f64, f64) = (22.0, 13.0);

/// Outer glow and inner core radii of the bulb, in design-grid units.
/// The core is painted over the glow, leaving a ring.
const BULB_GLOW_RADIUS: f64 = 4.5;
const BULB_CORE_RADIUS: f64 = 3.5;

/// Short rays emanating from the bulb: top, top-right, right, top-left.
const BULB_RAYS: [(i32, i32, i32, i32); 4] = [
    (22, 8, 22, 6),
    (26, 10, 28, 8),
    (27, 14, 30, 14),
    (18, 10, 16, 8),
];

/// Rasterize the logo at `size` x `size` pixels.
///
/// Valid for any size >= 1. At very small sizes the stroke thickness and
/// bulb radii truncate to zero and the shapes degrade to single-pixel
/// marks, which is acceptable for the degenerate cases.
pub fn draw_icon(size: usize) -> PixelGrid {
    let mut grid = PixelGrid::filled(size, size, palette::BACKDROP);

    raster::fill_gradient_disc(&mut grid, palette::DISC_START, palette::DISC_END);

    let s = size as f64 / DESIGN_GRID;
    let thickness = ((s * 0.7) as i32 - 1).max(0);

    for &(x1, y1, x2, y2) in &PAGE_STROKES {
        raster::draw_line(
            &mut grid,
            scaled(x1, s),
            scaled(y1, s),
            scaled(x2, s),
            scaled(y2, s),
            palette::PAGE_TEXT,
            thickness,
        );
    }

    let bx = (BULB_CENTER.0 * s) as i32;
    let by = (BULB_CENTER.1 * s) as i32;
    raster::fill_circle(
        &mut grid,
        bx,
        by,
        (BULB_GLOW_RADIUS * s) as i32,
        palette::BULB_GLOW,
    );
    raster::fill_circle(
        &mut grid,
        bx,
        by,
        (BULB_CORE_RADIUS * s) as i32,
        palette::BULB_CORE,
    );

    for &(x1, y1, x2, y2) in &BULB_RAYS {
        raster::draw_line(
            &mut grid,
            scaled(x1, s),
            scaled(y1, s),
            scaled(x2, s),
            scaled(y2, s),
            palette::BULB_CORE,
            thickness,
        );
    }

    grid
}

/// Scale a design-grid coordinate to pixel space, truncating to integer.
fn scaled(v: i32, s: f64) -> i32 {
    (v as f64 * s) as i32
}
