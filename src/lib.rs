// src/lib.rs

//! `softraster` — a software 2D raster engine.
//!
//! Frame-buffer drawing primitives over packed 8/16/24/32-bpp surfaces:
//! pixels, runs, and blocks; Bresenham lines; 1-bpp bitmap (glyph)
//! expansion; pattern fills; overlap-safe block copies; and scanline
//! get/put for depth-independent layers above.
//!
//! Every pixel write goes through a packed [`color::RasterColor`], which
//! carries both the color payload and the raster operation (WRITE, XOR,
//! OR, AND, or color-keyed IMAGE copy) in one integer, plus a
//! [`color::RasterColor::NO_COLOR`] sentinel that skips pixels entirely.
//!
//! Clipping is the caller's job: the primitives assume validated
//! coordinates and perform no bounds checks of their own beyond debug
//! assertions (out-of-range input is a precondition violation, not a
//! reported fault). The one recoverable failure is scanline scratch
//! exhaustion, reported as an absent result.
//!
//! The engine is single-threaded by design: a [`context::DrawContext`]
//! bundles the current destination surface with its scratch pool and must
//! not be shared across threads without external serialization. All
//! primitives are also available as free functions over an explicit
//! `&mut Surface`.
//!
//! ```
//! use softraster::color::RasterColor;
//! use softraster::context::DrawContext;
//! use softraster::surface::{Depth, Surface};
//!
//! let surface = Surface::new(64, 64, Depth::Bpp16)?;
//! let mut ctx = DrawContext::new(surface);
//! ctx.draw_block(0, 0, 64, 64, RasterColor::write(0x001F));
//! ctx.draw_line(0, 0, 63, 31, RasterColor::write(0xFFFF));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod bitmap;
pub mod blit;
pub mod color;
pub mod config;
pub mod context;
pub mod line;
pub mod ops;
pub mod primitives;
pub mod scanline;
pub mod surface;

pub use bitmap::{draw_bitmap, draw_pattern};
pub use blit::{blit, blit_within};
pub use color::{RasterColor, RasterOp};
pub use config::EngineConfig;
pub use context::DrawContext;
pub use line::draw_line;
pub use ops::{mirror, scroll, MirrorAxes};
pub use primitives::{draw_block, draw_hline, draw_pixel, draw_vline};
pub use scanline::{get_scanline, put_scanline, ScratchPool};
pub use surface::{Depth, Surface};
