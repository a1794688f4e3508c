// src/scanline.rs

//! Scanline get/put and the scratch-buffer pool.
//!
//! Get-Scanline reads a row segment into a depth-independent buffer of
//! color values; Put-Scanline writes such a buffer back through the
//! raster-operation dispatcher. These two primitives are what generic
//! higher-level operations (scaling, mirroring, scrolling) are built on.
//!
//! Buffers come from a [`ScratchPool`]: short-lived, recycled, and capped
//! by configuration. Exhaustion (a request beyond the cap) is the one
//! recoverable failure in the engine and is reported as `None`; callers
//! must abort the enclosing operation. Buffers are owned by the caller for
//! the duration of one operation and should be handed back via
//! [`ScratchPool::recycle`].

use log::warn;

use crate::color::{RasterColor, RasterOp};
use crate::config::EngineConfig;
use crate::surface::Surface;

/// Pool of short-lived scanline buffers.
///
/// Single-threaded by design, like the rest of the engine: one pool serves
/// one drawing context.
#[derive(Debug)]
pub struct ScratchPool {
    free: Vec<Vec<u32>>,
    max_pixels: usize,
    retained: usize,
}

impl ScratchPool {
    /// A pool handing out buffers of at most `max_pixels` elements.
    pub fn new(max_pixels: usize) -> Self {
        ScratchPool {
            free: Vec::new(),
            max_pixels,
            retained: 4,
        }
    }

    /// A pool sized from an engine configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        ScratchPool {
            free: Vec::new(),
            max_pixels: config.scratch.max_scanline_pixels,
            retained: config.scratch.retained_buffers,
        }
    }

    /// Checks out an empty buffer with room for `pixels` elements, or
    /// `None` if the request exceeds the pool's cap.
    pub fn checkout(&mut self, pixels: usize) -> Option<Vec<u32>> {
        if pixels > self.max_pixels {
            warn!(
                "scanline scratch request of {} pixels exceeds pool cap {}",
                pixels, self.max_pixels
            );
            return None;
        }
        let mut buf = self.free.pop().unwrap_or_default();
        buf.clear();
        buf.reserve(pixels);
        Some(buf)
    }

    /// Returns a buffer to the pool for reuse.
    pub fn recycle(&mut self, buf: Vec<u32>) {
        if self.free.len() < self.retained {
            self.free.push(buf);
        }
    }
}

/// Reads `w` pixels starting at (x, y) into a pooled buffer of color
/// values.
///
/// Returns `None` if the scratch allocation cannot be satisfied; the
/// caller must abort the enclosing operation. Hand the buffer back with
/// [`ScratchPool::recycle`] when done.
pub fn get_scanline(
    surface: &Surface,
    x: usize,
    y: usize,
    w: usize,
    pool: &mut ScratchPool,
) -> Option<Vec<u32>> {
    let mut buf = pool.checkout(w)?;
    for col in 0..w {
        buf.push(surface.read_pixel(x + col, y));
    }
    Some(buf)
}

/// Writes `w` color values back starting at (x, y), applying the
/// operation carried by `op` per pixel.
///
/// For the IMAGE operation, `op`'s value bits are the transparency key:
/// source elements equal to the key are skipped.
pub fn put_scanline(
    surface: &mut Surface,
    x: usize,
    y: usize,
    w: usize,
    colors: &[u32],
    op: RasterColor,
) {
    debug_assert!(colors.len() >= w, "scanline buffer shorter than run");
    let mask = surface.depth().value_mask();
    match op.op() {
        RasterOp::Write => {
            for col in 0..w {
                surface.write_pixel_raw(x + col, y, colors[col]);
            }
        }
        RasterOp::Image => {
            let key = op.value() & mask;
            for col in 0..w {
                if colors[col] & mask != key {
                    surface.write_pixel_raw(x + col, y, colors[col]);
                }
            }
        }
        rop => {
            for col in 0..w {
                let d = surface.read_pixel(x + col, y);
                surface.write_pixel_raw(x + col, y, rop.apply(d, colors[col]));
            }
        }
    }
}
