// src/ops.rs

//! Depth-independent operations layered on the scanline and blit
//! primitives: rectangle scrolling and mirroring.
//!
//! These are the in-crate consumers of Get/Put-Scanline and the
//! overlap-safe block copy; widget, font, and stretch layers above build
//! on the same primitives the same way.

use anyhow::{Context, Result};
use bitflags::bitflags;

use crate::blit::blit_within;
use crate::color::{RasterColor, RasterOp};
use crate::scanline::{get_scanline, put_scanline, ScratchPool};
use crate::surface::Surface;

bitflags! {
    /// Axes along which [`mirror`] flips a rectangle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MirrorAxes: u8 {
        /// Flip left-right (reverse each row).
        const HORIZONTAL = 1 << 0;
        /// Flip top-bottom (swap rows).
        const VERTICAL = 1 << 1;
    }
}

/// Scrolls the `w x h` rectangle at (x, y) vertically by `rows` (positive
/// is down). The rows uncovered by the move keep their old contents; the
/// caller clears or repaints them.
///
/// Built on the overlap-safe block copy, so the moved region is always
/// read-before-written. A shift of zero, a zero-size rectangle, or a shift
/// of the whole height or more is a no-op.
pub fn scroll(surface: &mut Surface, x: usize, y: usize, w: usize, h: usize, rows: i32) {
    if w == 0 || h == 0 || rows == 0 {
        return;
    }
    let shift = rows.unsigned_abs() as usize;
    if shift >= h {
        return;
    }
    let op = RasterColor::from_op(RasterOp::Write);
    if rows > 0 {
        blit_within(surface, x, y + shift, x, y, w, h - shift, op);
    } else {
        blit_within(surface, x, y, x, y + shift, w, h - shift, op);
    }
}

/// Mirrors the `w x h` rectangle at (x, y) along the given axes.
///
/// Rows are staged through the scratch pool; if staging cannot be
/// satisfied the surface is left unmodified and an error is returned.
pub fn mirror(
    surface: &mut Surface,
    x: usize,
    y: usize,
    w: usize,
    h: usize,
    axes: MirrorAxes,
    pool: &mut ScratchPool,
) -> Result<()> {
    if w == 0 || h == 0 || axes.is_empty() {
        return Ok(());
    }
    // Probe the pool before touching any pixels so failure leaves the
    // rectangle intact.
    let probe = pool
        .checkout(w)
        .context("scanline scratch exhausted for mirror")?;
    pool.recycle(probe);

    let write = RasterColor::from_op(RasterOp::Write);

    if axes.contains(MirrorAxes::HORIZONTAL) {
        for row in 0..h {
            let mut buf = get_scanline(surface, x, y + row, w, pool)
                .context("scanline scratch exhausted for mirror")?;
            buf.reverse();
            put_scanline(surface, x, y + row, w, &buf, write);
            pool.recycle(buf);
        }
    }

    if axes.contains(MirrorAxes::VERTICAL) {
        for row in 0..h / 2 {
            let top = get_scanline(surface, x, y + row, w, pool)
                .context("scanline scratch exhausted for mirror")?;
            let bottom = get_scanline(surface, x, y + h - 1 - row, w, pool)
                .context("scanline scratch exhausted for mirror")?;
            put_scanline(surface, x, y + row, w, &bottom, write);
            put_scanline(surface, x, y + h - 1 - row, w, &top, write);
            pool.recycle(top);
            pool.recycle(bottom);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Depth;

    fn numbered_surface() -> Surface {
        let mut s = Surface::new(8, 8, Depth::Bpp8).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                s.write_pixel_raw(x, y, (y * 8 + x) as u32);
            }
        }
        s
    }

    #[test]
    fn scroll_down_moves_rows() {
        let mut s = numbered_surface();
        scroll(&mut s, 0, 0, 8, 8, 3);
        // Rows 3..8 now hold what rows 0..5 held.
        for y in 3..8 {
            for x in 0..8 {
                assert_eq!(s.read_pixel(x, y), ((y - 3) * 8 + x) as u32);
            }
        }
        // Uncovered rows keep their old contents.
        for y in 0..3 {
            for x in 0..8 {
                assert_eq!(s.read_pixel(x, y), (y * 8 + x) as u32);
            }
        }
    }

    #[test]
    fn scroll_up_moves_rows() {
        let mut s = numbered_surface();
        scroll(&mut s, 0, 0, 8, 8, -2);
        for y in 0..6 {
            for x in 0..8 {
                assert_eq!(s.read_pixel(x, y), ((y + 2) * 8 + x) as u32);
            }
        }
    }

    #[test]
    fn whole_height_scroll_is_a_no_op() {
        let mut s = numbered_surface();
        let before = s.data().to_vec();
        scroll(&mut s, 0, 0, 8, 8, 8);
        scroll(&mut s, 0, 0, 8, 8, -9);
        scroll(&mut s, 0, 0, 8, 8, 0);
        assert_eq!(s.data(), &before[..]);
    }

    #[test]
    fn horizontal_mirror_reverses_rows() {
        let mut s = numbered_surface();
        let mut pool = ScratchPool::new(32);
        mirror(&mut s, 2, 1, 4, 2, MirrorAxes::HORIZONTAL, &mut pool).unwrap();
        // Row 1, columns 2..6 were 10,11,12,13; now 13,12,11,10.
        let row: Vec<u32> = (2..6).map(|x| s.read_pixel(x, 1)).collect();
        assert_eq!(row, vec![13, 12, 11, 10]);
        // Outside the rectangle untouched.
        assert_eq!(s.read_pixel(1, 1), 9);
        assert_eq!(s.read_pixel(6, 1), 14);
    }

    #[test]
    fn vertical_mirror_swaps_rows() {
        let mut s = numbered_surface();
        let mut pool = ScratchPool::new(32);
        mirror(&mut s, 0, 0, 8, 5, MirrorAxes::VERTICAL, &mut pool).unwrap();
        for x in 0..8 {
            assert_eq!(s.read_pixel(x, 0), (4 * 8 + x) as u32);
            assert_eq!(s.read_pixel(x, 4), x as u32);
            // Middle row of an odd-height flip stays put.
            assert_eq!(s.read_pixel(x, 2), (2 * 8 + x) as u32);
        }
    }

    #[test]
    fn double_mirror_restores_the_rectangle() {
        // Contract: mirroring twice along the same axes is the identity.
        let mut s = numbered_surface();
        let before = s.data().to_vec();
        let mut pool = ScratchPool::new(32);
        let both = MirrorAxes::HORIZONTAL | MirrorAxes::VERTICAL;
        mirror(&mut s, 1, 1, 6, 6, both, &mut pool).unwrap();
        assert_ne!(s.data(), &before[..]);
        mirror(&mut s, 1, 1, 6, 6, both, &mut pool).unwrap();
        assert_eq!(s.data(), &before[..]);
    }

    #[test]
    fn mirror_fails_cleanly_on_exhausted_pool() {
        let mut s = numbered_surface();
        let before = s.data().to_vec();
        let mut pool = ScratchPool::new(4);
        let err = mirror(&mut s, 0, 0, 8, 8, MirrorAxes::HORIZONTAL, &mut pool);
        assert!(err.is_err());
        assert_eq!(s.data(), &before[..]);
    }
}
