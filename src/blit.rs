// src/blit.rs

//! Block copy (bitblt) engine.
//!
//! Two entry points: [`blit`] copies between two distinct surfaces (the
//! borrow checker rules out aliasing), and [`blit_within`] copies inside a
//! single surface with full overlap safety.
//!
//! The operation argument is a packed [`RasterColor`]: its tag selects the
//! combination rule, and for the IMAGE (color-keyed) operation its value
//! bits carry the transparency key, matching how callers encode the key
//! into the packed integer.
//!
//! Overlap safety: every source row is staged into a temporary row buffer
//! before any destination pixel of that row is written, so horizontal
//! aliasing inside a row can never corrupt the copy, whatever the sx/dx
//! relationship. Vertically, rows are walked bottom-to-top when the
//! destination sits at or below the source (`sy <= dy`), top-to-bottom
//! otherwise, so no source row is overwritten before it is staged. The net
//! effect equals copying through a full off-surface snapshot.

use log::warn;

use crate::color::{RasterColor, RasterOp};
use crate::surface::Surface;

/// Copies a `w x h` region from `src` at (sx, sy) to `dst` at (dx, dy).
///
/// The surfaces must share a depth; a mismatched request is refused with a
/// warning and the destination is left untouched. A zero-size region is a
/// no-op. WRITE copies whole rows with a bulk byte copy; the other
/// operations combine per pixel.
#[allow(clippy::too_many_arguments)]
pub fn blit(
    dst: &mut Surface,
    dx: usize,
    dy: usize,
    src: &Surface,
    sx: usize,
    sy: usize,
    w: usize,
    h: usize,
    op: RasterColor,
) {
    if w == 0 || h == 0 {
        return;
    }
    if dst.depth() != src.depth() {
        warn!(
            "blit refused: depth mismatch ({:?} destination, {:?} source)",
            dst.depth(),
            src.depth()
        );
        return;
    }

    match op.op() {
        RasterOp::Write => {
            let bpp = dst.depth().bytes_per_pixel();
            for row in 0..h {
                let s_off = src.pixel_offset(sx, sy + row);
                let d_off = dst.pixel_offset(dx, dy + row);
                let n = w * bpp;
                dst.data_mut()[d_off..d_off + n].copy_from_slice(&src.data()[s_off..s_off + n]);
            }
        }
        rop => {
            let key = op.value() & dst.depth().value_mask();
            for row in 0..h {
                for col in 0..w {
                    let s = src.read_pixel(sx + col, sy + row);
                    if rop == RasterOp::Image && s == key {
                        continue;
                    }
                    let d = dst.read_pixel(dx + col, dy + row);
                    dst.write_pixel_raw(dx + col, dy + row, rop.apply(d, s));
                }
            }
        }
    }
}

/// Copies a `w x h` region within one surface; source and destination may
/// overlap arbitrarily.
///
/// Guarantee: the final contents equal those of a copy staged through a
/// full off-surface snapshot of the source region. A zero-size region is a
/// no-op.
#[allow(clippy::too_many_arguments)]
pub fn blit_within(
    surface: &mut Surface,
    dx: usize,
    dy: usize,
    sx: usize,
    sy: usize,
    w: usize,
    h: usize,
    op: RasterColor,
) {
    if w == 0 || h == 0 {
        return;
    }
    let mut stage: Vec<u32> = Vec::with_capacity(w);

    // Destination at or below the source: walk rows bottom-to-top so a
    // source row is always staged before anything overwrites it.
    if sy <= dy {
        for row in (0..h).rev() {
            copy_row_staged(surface, dx, dy + row, sx, sy + row, w, op, &mut stage);
        }
    } else {
        for row in 0..h {
            copy_row_staged(surface, dx, dy + row, sx, sy + row, w, op, &mut stage);
        }
    }
}

/// Stages one source row, then writes it to the destination row with the
/// operation applied. Staging first makes horizontal aliasing harmless.
#[allow(clippy::too_many_arguments)]
fn copy_row_staged(
    surface: &mut Surface,
    dx: usize,
    dy: usize,
    sx: usize,
    sy: usize,
    w: usize,
    op: RasterColor,
    stage: &mut Vec<u32>,
) {
    stage.clear();
    for col in 0..w {
        stage.push(surface.read_pixel(sx + col, sy));
    }
    match op.op() {
        RasterOp::Write => {
            for col in 0..w {
                surface.write_pixel_raw(dx + col, dy, stage[col]);
            }
        }
        RasterOp::Image => {
            let key = op.value() & surface.depth().value_mask();
            for col in 0..w {
                if stage[col] != key {
                    surface.write_pixel_raw(dx + col, dy, stage[col]);
                }
            }
        }
        rop => {
            for col in 0..w {
                let d = surface.read_pixel(dx + col, dy);
                surface.write_pixel_raw(dx + col, dy, rop.apply(d, stage[col]));
            }
        }
    }
}
