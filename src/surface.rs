// src/surface.rs

//! Surface descriptors and depth-aware pixel addressing.
//!
//! A `Surface` describes a rectangular raster buffer: backing bytes, line
//! stride, pixel depth, and bounds. Construction validates the descriptor
//! once; after that the addressing and raw pixel accessors are hot paths
//! that perform no bounds checking of their own (callers clip — see the
//! crate docs). Out-of-range coordinates are a precondition violation and
//! trip debug assertions (and, past them, slice panics) rather than being
//! reported as runtime errors.
//!
//! Only single-plane packed formats are supported; pixels are stored
//! little-endian, with 24-bpp pixels as 3-byte triads.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::color::COLOR_VALUE_MASK;

/// Pixel depth in bits per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Depth {
    Bpp8,
    Bpp16,
    Bpp24,
    Bpp32,
}

impl Depth {
    /// Bits per pixel.
    pub const fn bits(self) -> u32 {
        match self {
            Depth::Bpp8 => 8,
            Depth::Bpp16 => 16,
            Depth::Bpp24 => 24,
            Depth::Bpp32 => 32,
        }
    }

    /// Bytes per pixel.
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Depth::Bpp8 => 1,
            Depth::Bpp16 => 2,
            Depth::Bpp24 => 3,
            Depth::Bpp32 => 4,
        }
    }

    /// Mask of significant color bits for this depth.
    ///
    /// 32-bpp pixels carry 24 significant color bits so the operation tag
    /// of a packed [`crate::color::RasterColor`] stays outside the color
    /// range at every depth; the top destination byte is written as zero.
    #[inline]
    pub const fn value_mask(self) -> u32 {
        match self {
            Depth::Bpp8 => 0xFF,
            Depth::Bpp16 => 0xFFFF,
            Depth::Bpp24 | Depth::Bpp32 => COLOR_VALUE_MASK,
        }
    }

    /// Parses a bit count (8/16/24/32) into a depth.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(Depth::Bpp8),
            16 => Ok(Depth::Bpp16),
            24 => Ok(Depth::Bpp24),
            32 => Ok(Depth::Bpp32),
            other => bail!("unsupported pixel depth: {} bits", other),
        }
    }

    /// Minimum legal stride for a row of `width` pixels.
    pub const fn min_stride(self, width: usize) -> usize {
        width * self.bytes_per_pixel()
    }
}

/// A rectangular pixel buffer: backing bytes plus the descriptor needed to
/// address pixels in it.
///
/// The drawing routines in this crate never allocate or free surface
/// storage; only the constructors here do, on behalf of the caller's
/// context layer.
#[derive(Debug, Clone)]
pub struct Surface {
    data: Vec<u8>,
    width: usize,
    height: usize,
    stride: usize,
    depth: Depth,
}

impl Surface {
    /// Allocates a zero-filled surface with the minimum stride.
    pub fn new(width: usize, height: usize, depth: Depth) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("surface dimensions must be non-zero ({}x{})", width, height);
        }
        let stride = depth.min_stride(width);
        Ok(Surface {
            data: vec![0u8; stride * height],
            width,
            height,
            stride,
            depth,
        })
    }

    /// Wraps existing pixel data in a surface descriptor.
    ///
    /// `stride` may exceed the minimum (row padding); the buffer must hold
    /// `stride * height` bytes.
    pub fn from_vec(
        data: Vec<u8>,
        width: usize,
        height: usize,
        stride: usize,
        depth: Depth,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("surface dimensions must be non-zero ({}x{})", width, height);
        }
        if stride < depth.min_stride(width) {
            bail!(
                "stride {} below minimum {} for {} pixels at {} bpp",
                stride,
                depth.min_stride(width),
                width,
                depth.bits()
            );
        }
        if data.len() < stride * height {
            bail!(
                "buffer holds {} bytes, descriptor needs {}",
                data.len(),
                stride * height
            );
        }
        Ok(Surface {
            data,
            width,
            height,
            stride,
            depth,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Raw backing bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Raw backing bytes, mutable.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the surface, returning the backing buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of pixel (x, y). Hot path: no bounds checking beyond
    /// debug assertions; callers must have clipped.
    #[inline]
    pub fn pixel_offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width, "x={} out of bounds (width {})", x, self.width);
        debug_assert!(y < self.height, "y={} out of bounds (height {})", y, self.height);
        y * self.stride + x * self.depth.bytes_per_pixel()
    }

    /// Reads the pixel at (x, y) as a depth-masked color value.
    #[inline]
    pub fn read_pixel(&self, x: usize, y: usize) -> u32 {
        let off = self.pixel_offset(x, y);
        let d = &self.data;
        match self.depth {
            Depth::Bpp8 => d[off] as u32,
            Depth::Bpp16 => u16::from_le_bytes([d[off], d[off + 1]]) as u32,
            Depth::Bpp24 => u32::from_le_bytes([d[off], d[off + 1], d[off + 2], 0]),
            Depth::Bpp32 => {
                u32::from_le_bytes([d[off], d[off + 1], d[off + 2], d[off + 3]])
                    & self.depth.value_mask()
            }
        }
    }

    /// Writes a raw (already combined) color value at (x, y).
    ///
    /// The value is masked to the depth's significant bits; no raster
    /// operation is applied here.
    #[inline]
    pub fn write_pixel_raw(&mut self, x: usize, y: usize, value: u32) {
        let off = self.pixel_offset(x, y);
        let value = value & self.depth.value_mask();
        let bytes = value.to_le_bytes();
        match self.depth {
            Depth::Bpp8 => self.data[off] = bytes[0],
            Depth::Bpp16 => self.data[off..off + 2].copy_from_slice(&bytes[..2]),
            Depth::Bpp24 => self.data[off..off + 3].copy_from_slice(&bytes[..3]),
            Depth::Bpp32 => self.data[off..off + 4].copy_from_slice(&bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_DEPTHS: [Depth; 4] = [Depth::Bpp8, Depth::Bpp16, Depth::Bpp24, Depth::Bpp32];

    #[test]
    fn addressing_is_monotonic_per_axis() {
        // Contract: offset increases by exactly `stride` in y and by exactly
        // bytes-per-pixel in x, for all depths.
        for depth in ALL_DEPTHS {
            let s = Surface::new(13, 7, depth).unwrap();
            for y in 0..6 {
                for x in 0..12 {
                    let here = s.pixel_offset(x, y);
                    assert_eq!(s.pixel_offset(x + 1, y), here + depth.bytes_per_pixel());
                    assert_eq!(s.pixel_offset(x, y + 1), here + s.stride());
                }
            }
        }
    }

    #[test]
    fn pixel_round_trip_all_depths() {
        // Contract: write_pixel_raw then read_pixel returns the depth-masked
        // value, including the 3-byte 24-bpp triad.
        for depth in ALL_DEPTHS {
            let mut s = Surface::new(4, 4, depth).unwrap();
            let value = 0x00CA_FE42 & depth.value_mask();
            s.write_pixel_raw(2, 3, 0x00CA_FE42);
            assert_eq!(s.read_pixel(2, 3), value, "depth {:?}", depth);
            // Neighbors untouched.
            assert_eq!(s.read_pixel(1, 3), 0);
            assert_eq!(s.read_pixel(3, 3), 0);
        }
    }

    #[test]
    fn padded_stride_is_respected() {
        let data = vec![0u8; 20 * 5];
        let mut s = Surface::from_vec(data, 8, 5, 20, Depth::Bpp16).unwrap();
        s.write_pixel_raw(0, 1, 0xABCD);
        // Row 1 starts at byte 20, not at 16.
        assert_eq!(&s.data()[20..22], &0xABCDu16.to_le_bytes()[..]);
    }

    #[test]
    fn from_vec_rejects_bad_descriptors() {
        assert!(Surface::from_vec(vec![0; 16], 4, 4, 3, Depth::Bpp8).is_err());
        assert!(Surface::from_vec(vec![0; 15], 4, 4, 4, Depth::Bpp8).is_err());
        assert!(Surface::from_vec(vec![0; 16], 0, 4, 4, Depth::Bpp8).is_err());
        assert!(Surface::from_vec(vec![0; 64], 4, 4, 4, Depth::Bpp8).is_ok());
    }

    #[test]
    fn depth_from_bits() {
        assert_eq!(Depth::from_bits(16).unwrap(), Depth::Bpp16);
        assert!(Depth::from_bits(15).is_err());
    }
}
