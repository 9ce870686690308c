//! Deterministic color palette and rank-based block coloring.

use std::collections::HashMap;

use image::Rgb;

use crate::chunk::Block;
use crate::error::EcbScopeError;

/// One raster color, RGB with 8 bits per channel.
pub type Color = Rgb<u8>;

/// Color reserved for the most frequent block (palette entry 0).
pub const TOP_COLOR: Color = Rgb([255, 255, 255]);

/// Overflow color shared by every block ranked beyond the palette.
pub const OVERFLOW_COLOR: Color = Rgb([0, 0, 0]);

/// Build the fixed palette: the white sentinel, then formula colors, then
/// the black overflow sentinel — exactly `max_colors` entries.
///
/// Middle entries come from three independent channel generators over the
/// entry index i: `(i*50 mod 256, i*80 mod 256, i*110 mod 256)`. The
/// constants are chosen for visual spread, not cryptographic meaning; the
/// whole palette is a pure function of `max_colors`.
pub fn build_palette(max_colors: usize) -> Result<Vec<Color>, EcbScopeError> {
    if max_colors < 2 {
        return Err(EcbScopeError::Config(format!(
            "max_colors must be at least 2, got {max_colors}"
        )));
    }
    let mut palette = Vec::with_capacity(max_colors);
    palette.push(TOP_COLOR);
    for i in 1..max_colors - 1 {
        palette.push(formula_color(i));
    }
    palette.push(OVERFLOW_COLOR);
    Ok(palette)
}

/// Middle-entry generator. Truncating the wrapped product to `u8` is the
/// mod-256 reduction of each channel.
fn formula_color(i: usize) -> Color {
    Rgb([
        i.wrapping_mul(50) as u8,
        i.wrapping_mul(80) as u8,
        i.wrapping_mul(110) as u8,
    ])
}

/// Map each ranked block to its palette entry: the i-th ranked block gets
/// entry i while one sits above the overflow slot; every later rank shares
/// the overflow color. Every distinct block receives exactly one color, and
/// the result is a pure function of (ranking, palette).
pub fn assign_colors<'a>(
    ranking: &[(Block<'a>, usize)],
    palette: &[Color],
) -> HashMap<Block<'a>, Color> {
    let overflow = palette.last().copied().unwrap_or(OVERFLOW_COLOR);
    let mut map = HashMap::with_capacity(ranking.len());
    for (rank, &(block, _)) in ranking.iter().enumerate() {
        let color = if rank + 1 < palette.len() {
            palette[rank]
        } else {
            overflow
        };
        map.insert(block, color);
    }
    map
}
