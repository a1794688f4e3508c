// src/color.rs

//! Packed color values and the raster-operation dispatcher.
//!
//! A `RasterColor` is a single integer carrying both a color payload and the
//! raster operation to apply when the pixel is written. The layout is fixed
//! and exposed to callers (font and pattern layers build these values
//! directly):
//!
//! ```text
//! bit 31         bits 26..24       bits 23..0
//! NO_COLOR       operation tag     color payload
//! ```
//!
//! The payload is masked further per surface depth at draw time. 32-bpp
//! surfaces carry 24 significant color bits, so the tag bits are outside the
//! valid color range at every depth and tag/value extraction can never
//! corrupt either half.

use log::warn;
use serde::{Deserialize, Serialize};

/// Mask selecting the color payload bits of a packed value.
pub const COLOR_VALUE_MASK: u32 = 0x00FF_FFFF;

/// Mask selecting the operation tag bits.
pub const COLOR_OP_MASK: u32 = 0x0700_0000;

/// Bit marking the "no color" sentinel (skip the pixel entirely).
pub const NO_COLOR_BIT: u32 = 0x8000_0000;

const OP_SHIFT: u32 = 24;

/// Per-pixel combination rule applied when a color is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RasterOp {
    /// Replace the destination pixel unconditionally.
    Write = 0,
    /// Bitwise XOR with the destination.
    Xor = 1,
    /// Bitwise OR with the destination.
    Or = 2,
    /// Bitwise AND with the destination.
    And = 3,
    /// Color-keyed copy: the source pixel is copied unless it equals the
    /// designated transparent key, in which case the destination is left
    /// unchanged. Only meaningful in the scanline/blit copy paths.
    Image = 4,
}

impl RasterOp {
    /// Decodes an operation tag from the raw tag bits (already shifted down).
    ///
    /// Unknown tags fall back to `Write` with a warning rather than failing;
    /// the tag space has room for growth and old callers must keep drawing.
    pub fn from_tag(tag: u32) -> Self {
        match tag {
            0 => RasterOp::Write,
            1 => RasterOp::Xor,
            2 => RasterOp::Or,
            3 => RasterOp::And,
            4 => RasterOp::Image,
            other => {
                warn!("unknown raster operation tag {}; treating as WRITE", other);
                RasterOp::Write
            }
        }
    }

    /// Combines a source color into a destination pixel value.
    ///
    /// `Image` returns the source unchanged here; its transparency keying is
    /// a skip decision made by the copy paths before any write happens, not
    /// a value transformation.
    #[inline]
    pub fn apply(self, dst: u32, src: u32) -> u32 {
        match self {
            RasterOp::Write | RasterOp::Image => src,
            RasterOp::Xor => dst ^ src,
            RasterOp::Or => dst | src,
            RasterOp::And => dst & src,
        }
    }
}

/// A packed color value: payload + operation tag + optional no-op sentinel.
///
/// The packed `u32` encoding is part of the external interface and is
/// preserved bit-exactly through `bits`/`from_bits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RasterColor(u32);

impl RasterColor {
    /// The "no color" sentinel: every drawing primitive skips the pixel.
    /// Used for transparent glyph backgrounds.
    pub const NO_COLOR: RasterColor = RasterColor(NO_COLOR_BIT);

    /// Packs a color payload with an operation tag.
    pub const fn new(value: u32, op: RasterOp) -> Self {
        RasterColor((value & COLOR_VALUE_MASK) | ((op as u32) << OP_SHIFT))
    }

    /// A plain opaque WRITE color.
    pub const fn write(value: u32) -> Self {
        RasterColor::new(value, RasterOp::Write)
    }

    /// An operation with no payload of its own (blit/put-scanline operation
    /// arguments where only the tag matters, e.g. a WRITE or XOR copy).
    pub const fn from_op(op: RasterOp) -> Self {
        RasterColor::new(0, op)
    }

    /// Reconstructs a packed value received from a caller.
    pub const fn from_bits(bits: u32) -> Self {
        RasterColor(bits)
    }

    /// The raw packed encoding.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The color payload (24 significant bits; masked per depth at draw time).
    #[inline]
    pub const fn value(self) -> u32 {
        self.0 & COLOR_VALUE_MASK
    }

    /// The operation tag.
    #[inline]
    pub fn op(self) -> RasterOp {
        RasterOp::from_tag((self.0 & COLOR_OP_MASK) >> OP_SHIFT)
    }

    /// Whether this is the skip-pixel sentinel.
    #[inline]
    pub const fn is_no_color(self) -> bool {
        self.0 & NO_COLOR_BIT != 0
    }
}

impl From<u32> for RasterColor {
    fn from(bits: u32) -> Self {
        RasterColor::from_bits(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_and_value_are_separable() {
        // Contract: extracting either half never corrupts the other.
        let c = RasterColor::new(0x00AB_CDEF, RasterOp::Xor);
        assert_eq!(c.value(), 0x00AB_CDEF);
        assert_eq!(c.op(), RasterOp::Xor);

        // Payload bits above the color mask are discarded at pack time.
        let c = RasterColor::new(0xFFFF_FFFF, RasterOp::And);
        assert_eq!(c.value(), COLOR_VALUE_MASK);
        assert_eq!(c.op(), RasterOp::And);
    }

    #[test]
    fn packed_encoding_round_trips() {
        // Contract: bits/from_bits preserve the caller's encoding bit-exactly.
        for op in [
            RasterOp::Write,
            RasterOp::Xor,
            RasterOp::Or,
            RasterOp::And,
            RasterOp::Image,
        ] {
            let c = RasterColor::new(0x123456, op);
            assert_eq!(RasterColor::from_bits(c.bits()), c);
        }
    }

    #[test]
    fn no_color_sentinel() {
        assert!(RasterColor::NO_COLOR.is_no_color());
        assert!(!RasterColor::write(0).is_no_color());
    }

    #[test]
    fn write_is_idempotent() {
        // Contract: applying WRITE twice with the same color equals applying
        // it once.
        let once = RasterOp::Write.apply(0x55, 0xAA);
        let twice = RasterOp::Write.apply(once, 0xAA);
        assert_eq!(once, twice);
        assert_eq!(twice, 0xAA);
    }

    #[test]
    fn xor_is_an_involution() {
        // Contract: XOR applied twice with the same color restores the
        // original destination value.
        let dst = 0x00C0FFEE;
        let src = 0x00BADA55;
        let after = RasterOp::Xor.apply(RasterOp::Xor.apply(dst, src), src);
        assert_eq!(after, dst);
    }

    #[test]
    fn unknown_tag_falls_back_to_write() {
        let c = RasterColor::from_bits(7 << 24 | 0x42);
        assert_eq!(c.op(), RasterOp::Write);
        assert_eq!(c.value(), 0x42);
    }
}
