// src/bitmap.rs

//! Monochrome bitmap expansion and pattern fills.
//!
//! `draw_bitmap` is the glyph path: it expands a packed 1-bpp source into
//! foreground/background colors on the destination. Glyph runs inside a
//! shared font bitmap are not necessarily byte-aligned, hence the start-bit
//! offset, and rows are `pitch` bytes apart regardless of the logical
//! width. `draw_pattern` fills a run from a repeating 8-bit mask, the
//! building block for dashed and stippled lines.

use crate::color::RasterColor;
use crate::primitives::draw_pixel;
use crate::surface::Surface;

/// Expands a 1-bpp bitmap of `w x h` pixels onto the destination at (x, y).
///
/// Bit 7 of the first fetched byte is the leftmost pixel of a row. Each row
/// starts at byte `start_bit / 8` within its `pitch`-byte slot, with the
/// mask preset to `0x80 >> (start_bit % 8)`; the next source byte is
/// fetched when the mask underflows. Set bits draw `fg`, clear bits `bg`;
/// either may be [`RasterColor::NO_COLOR`] to leave those pixels untouched
/// (transparent glyph backgrounds). Exactly `w` bits are consumed per row,
/// independent of `pitch`.
#[allow(clippy::too_many_arguments)]
pub fn draw_bitmap(
    surface: &mut Surface,
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
    if w == 0 || h == 0 {
        return;
    }
    let first_byte = start_bit / 8;
    let first_mask = 0x80u8 >> (start_bit % 8);

    for row in 0..h {
        let mut idx = row * pitch + first_byte;
        let mut mask = first_mask;
        let mut cur = bits[idx];
        for col in 0..w {
            let color = if cur & mask != 0 { fg } else { bg };
            draw_pixel(surface, x + col, y + row, color);
            mask >>= 1;
            if mask == 0 && col + 1 < w {
                mask = 0x80;
                idx += 1;
                cur = bits[idx];
            }
        }
    }
}

/// Fills a horizontal run of `w` pixels from a repeating 8-bit pattern.
///
/// Bit 7 of `pattern` maps to the first pixel; the mask cycles every 8
/// pixels. Set bits draw `fg`, clear bits `bg`, with the usual
/// [`RasterColor::NO_COLOR`] skip.
pub fn draw_pattern(
    surface: &mut Surface,
    x: usize,
    y: usize,
    w: usize,
    pattern: u8,
    fg: RasterColor,
    bg: RasterColor,
) {
    let mut mask = 0x80u8;
    for col in 0..w {
        let color = if pattern & mask != 0 { fg } else { bg };
        draw_pixel(surface, x + col, y, color);
        mask >>= 1;
        if mask == 0 {
            mask = 0x80;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Depth;

    fn row_values(s: &Surface, y: usize) -> Vec<u32> {
        (0..s.width()).map(|x| s.read_pixel(x, y)).collect()
    }

    #[test]
    fn known_byte_expands_in_msb_order() {
        // Contract: 0b10110010 at width 8, pitch 1, start_bit 0, fg=1/bg=0
        // yields [1,0,1,1,0,0,1,0].
        let mut s = Surface::new(8, 1, Depth::Bpp8).unwrap();
        draw_bitmap(
            &mut s,
            0,
            0,
            8,
            1,
            &[0b1011_0010],
            1,
            0,
            RasterColor::write(1),
            RasterColor::write(0),
        );
        assert_eq!(row_values(&s, 0), vec![1, 0, 1, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn start_bit_offsets_into_the_first_byte() {
        // Row bits: 11111111 00001111; starting at bit 4, width 8 should
        // read 1111_0000.
        let bits = [0xFFu8, 0x0F];
        let mut s = Surface::new(8, 1, Depth::Bpp8).unwrap();
        draw_bitmap(
            &mut s,
            0,
            0,
            8,
            1,
            &bits,
            2,
            4,
            RasterColor::write(9),
            RasterColor::write(2),
        );
        assert_eq!(row_values(&s, 0), vec![9, 9, 9, 9, 2, 2, 2, 2]);
    }

    #[test]
    fn pitch_advances_rows_independently_of_width() {
        // Contract: rows are pitch bytes apart; width-3 rows consume 3 bits
        // each but advance 2 bytes. Padding bytes must never be read as
        // pixels.
        let bits = [
            0b1010_0000, 0xFF, // row 0: 1,0,1
            0b0110_0000, 0xFF, // row 1: 0,1,1
        ];
        let mut s = Surface::new(3, 2, Depth::Bpp8).unwrap();
        draw_bitmap(
            &mut s,
            0,
            0,
            3,
            2,
            &bits,
            2,
            0,
            RasterColor::write(1),
            RasterColor::write(0),
        );
        assert_eq!(row_values(&s, 0), vec![1, 0, 1]);
        assert_eq!(row_values(&s, 1), vec![0, 1, 1]);
    }

    #[test]
    fn wide_row_refetches_on_mask_underflow() {
        // 12-pixel row spanning two source bytes.
        let bits = [0b1100_1100, 0b1111_0000];
        let mut s = Surface::new(12, 1, Depth::Bpp8).unwrap();
        draw_bitmap(
            &mut s,
            0,
            0,
            12,
            1,
            &bits,
            2,
            0,
            RasterColor::write(1),
            RasterColor::write(0),
        );
        assert_eq!(
            row_values(&s, 0),
            vec![1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 1, 1]
        );
    }

    #[test]
    fn no_color_background_is_transparent() {
        // Contract: NO_COLOR background leaves destination pixels intact.
        let mut s = Surface::new(8, 1, Depth::Bpp8).unwrap();
        for x in 0..8 {
            s.write_pixel_raw(x, 0, 0x33);
        }
        draw_bitmap(
            &mut s,
            0,
            0,
            8,
            1,
            &[0b1011_0010],
            1,
            0,
            RasterColor::write(0x7F),
            RasterColor::NO_COLOR,
        );
        assert_eq!(
            row_values(&s, 0),
            vec![0x7F, 0x33, 0x7F, 0x7F, 0x33, 0x33, 0x7F, 0x33]
        );
    }

    #[test]
    fn pattern_repeats_every_eight_pixels() {
        // Contract: for w=20 and pattern 0b10101010, pixel i equals
        // pixel i % 8.
        let mut s = Surface::new(20, 1, Depth::Bpp8).unwrap();
        draw_pattern(
            &mut s,
            0,
            0,
            20,
            0b1010_1010,
            RasterColor::write(5),
            RasterColor::write(0),
        );
        let row = row_values(&s, 0);
        for i in 8..20 {
            assert_eq!(row[i], row[i % 8], "pixel {} vs {}", i, i % 8);
        }
        assert_eq!(&row[..8], &[5, 0, 5, 0, 5, 0, 5, 0]);
    }
}
