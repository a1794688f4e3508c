// src/line.rs

//! Bresenham line drawing.
//!
//! Depth-agnostic: plots through [`crate::primitives::draw_pixel`], one
//! pixel per step along the major axis. Integer arithmetic only.

use crate::color::RasterColor;
use crate::primitives::draw_pixel;
use crate::surface::Surface;

/// Draws a line from (x, y) along the signed delta (dx, dy), endpoints
/// inclusive.
///
/// Exactly one pixel is plotted per step along the major axis: for
/// |dx| >= |dy| that is |dx| + 1 pixels with strictly consecutive x
/// coordinates, and symmetrically for steep lines. The caller must ensure
/// both endpoints (and hence the whole line) lie within the surface.
pub fn draw_line(surface: &mut Surface, x: i32, y: i32, dx: i32, dy: i32, color: RasterColor) {
    if color.is_no_color() {
        return;
    }

    // Normalize so the run always advances in +x.
    let (x0, y0, dx, dy) = if dx < 0 {
        (x + dx, y + dy, -dx, -dy)
    } else {
        (x, y, dx, dy)
    };
    let sy = if dy < 0 { -1 } else { 1 };
    let ady = dy.abs();

    if dx >= ady {
        // Shallow: iterate x, step y when the error crosses the threshold.
        let mut yy = y0;
        let mut err = 2 * ady - dx;
        for i in 0..=dx {
            draw_pixel(surface, (x0 + i) as usize, yy as usize, color);
            if err > 0 {
                yy += sy;
                err -= 2 * dx;
            }
            err += 2 * ady;
        }
    } else {
        // Steep: iterate y, step x when the error crosses the threshold.
        let mut xx = x0;
        let mut err = 2 * dx - ady;
        for i in 0..=ady {
            draw_pixel(surface, xx as usize, (y0 + i * sy) as usize, color);
            if err > 0 {
                xx += 1;
                err -= 2 * ady;
            }
            err += 2 * dx;
        }
    }
}
