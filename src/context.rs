// src/context.rs

//! The drawing context: an explicit "current surface" plus the scratch
//! pool serving it.
//!
//! The engine's primitives are free functions over an explicit `&mut
//! Surface`; `DrawContext` is the compatibility shim for call sites that
//! want the classic implicit-destination style. Save/restore is a swap
//! discipline: [`DrawContext::set_surface`] installs a new target and
//! returns the old one for the caller to hold and restore later.
//!
//! A context is single-threaded; it neither locks nor shares its scratch
//! pool. Use one context per thread (or provide external serialization).

use crate::bitmap;
use crate::blit;
use crate::color::RasterColor;
use crate::config::{default_config, EngineConfig};
use crate::line;
use crate::ops::{self, MirrorAxes};
use crate::primitives;
use crate::scanline::{self, ScratchPool};
use crate::surface::Surface;

/// Owns the current destination surface and the scratch pool used by the
/// scanline paths.
#[derive(Debug)]
pub struct DrawContext {
    surface: Surface,
    scratch: ScratchPool,
}

impl DrawContext {
    /// A context targeting `surface`, with the process-default
    /// configuration.
    pub fn new(surface: Surface) -> Self {
        DrawContext::with_config(surface, default_config())
    }

    /// A context with an explicit configuration.
    pub fn with_config(surface: Surface, config: &EngineConfig) -> Self {
        DrawContext {
            surface,
            scratch: ScratchPool::from_config(config),
        }
    }

    /// Installs a new destination surface, returning the previous one
    /// (save/restore discipline).
    pub fn set_surface(&mut self, surface: Surface) -> Surface {
        std::mem::replace(&mut self.surface, surface)
    }

    /// The current destination surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The current destination surface, mutable.
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Consumes the context, returning its surface.
    pub fn into_surface(self) -> Surface {
        self.surface
    }

    pub fn draw_pixel(&mut self, x: usize, y: usize, color: RasterColor) {
        primitives::draw_pixel(&mut self.surface, x, y, color);
    }

    pub fn draw_hline(&mut self, x: usize, y: usize, w: usize, color: RasterColor) {
        primitives::draw_hline(&mut self.surface, x, y, w, color);
    }

    pub fn draw_vline(&mut self, x: usize, y: usize, h: usize, color: RasterColor) {
        primitives::draw_vline(&mut self.surface, x, y, h, color);
    }

    pub fn draw_block(&mut self, x: usize, y: usize, w: usize, h: usize, color: RasterColor) {
        primitives::draw_block(&mut self.surface, x, y, w, h, color);
    }

    pub fn draw_line(&mut self, x: i32, y: i32, dx: i32, dy: i32, color: RasterColor) {
        line::draw_line(&mut self.surface, x, y, dx, dy, color);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_bitmap(
        &mut self,
        x: usize,
        y: usize,
        w: usize,
        h: usize,
        bits: &[u8],
        pitch: usize,
        start_bit: usize,
        fg: RasterColor,
        bg: RasterColor,
    ) {
        bitmap::draw_bitmap(&mut self.surface, x, y, w, h, bits, pitch, start_bit, fg, bg);
    }

    pub fn draw_pattern(
        &mut self,
        x: usize,
        y: usize,
        w: usize,
        pattern: u8,
        fg: RasterColor,
        bg: RasterColor,
    ) {
        bitmap::draw_pattern(&mut self.surface, x, y, w, pattern, fg, bg);
    }

    /// Blits from another surface into the current one.
    #[allow(clippy::too_many_arguments)]
    pub fn blit_from(
        &mut self,
        dx: usize,
        dy: usize,
        src: &Surface,
        sx: usize,
        sy: usize,
        w: usize,
        h: usize,
        op: RasterColor,
    ) {
        blit::blit(&mut self.surface, dx, dy, src, sx, sy, w, h, op);
    }

    /// Overlap-safe blit within the current surface.
    #[allow(clippy::too_many_arguments)]
    pub fn blit_within(
        &mut self,
        dx: usize,
        dy: usize,
        sx: usize,
        sy: usize,
        w: usize,
        h: usize,
        op: RasterColor,
    ) {
        blit::blit_within(&mut self.surface, dx, dy, sx, sy, w, h, op);
    }

    /// Reads a scanline through the context's scratch pool. `None` on
    /// scratch exhaustion; return the buffer with
    /// [`DrawContext::recycle_scanline`].
    pub fn get_scanline(&mut self, x: usize, y: usize, w: usize) -> Option<Vec<u32>> {
        scanline::get_scanline(&self.surface, x, y, w, &mut self.scratch)
    }

    pub fn put_scanline(&mut self, x: usize, y: usize, w: usize, colors: &[u32], op: RasterColor) {
        scanline::put_scanline(&mut self.surface, x, y, w, colors, op);
    }

    /// Hands a scanline buffer back to the pool.
    pub fn recycle_scanline(&mut self, buf: Vec<u32>) {
        self.scratch.recycle(buf);
    }

    pub fn scroll(&mut self, x: usize, y: usize, w: usize, h: usize, rows: i32) {
        ops::scroll(&mut self.surface, x, y, w, h, rows);
    }

    pub fn mirror(
        &mut self,
        x: usize,
        y: usize,
        w: usize,
        h: usize,
        axes: MirrorAxes,
    ) -> anyhow::Result<()> {
        ops::mirror(&mut self.surface, x, y, w, h, axes, &mut self.scratch)
    }
}
