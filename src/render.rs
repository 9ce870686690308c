//! Pixel expansion, raster layout, and PNG output.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use tempfile::NamedTempFile;

use crate::chunk::Block;
use crate::error::EcbScopeError;
use crate::palette::{Color, OVERFLOW_COLOR};

/// Expand every block, in original input order, into its run of pixels.
///
/// Each block contributes `block_size / pixels_per_block` copies of its
/// assigned color; `Config::validate` rejects non-dividing factors, so the
/// division is exact. Input order is preserved deliberately — the whole
/// point is positional visualization of repeated ciphertext. Blocks missing
/// from the map (cannot happen when the map was built from this block list)
/// fall back to the overflow color.
pub fn expand_pixels<'a>(
    blocks: &[Block<'a>],
    colors: &HashMap<Block<'a>, Color>,
    block_size: usize,
    pixels_per_block: usize,
) -> Vec<Color> {
    let run = block_size / pixels_per_block;
    let mut pixels = Vec::with_capacity(blocks.len() * run);
    for block in blocks {
        let color = colors.get(*block).copied().unwrap_or(OVERFLOW_COLOR);
        for _ in 0..run {
            pixels.push(color);
        }
    }
    pixels
}

/// Near-square raster dimensions for `pixel_count` pixels: width is the
/// integer square root, height rounds up to cover the remainder. Zero
/// pixels give (0, 0).
pub fn raster_dimensions(pixel_count: usize) -> (usize, usize) {
    if pixel_count == 0 {
        return (0, 0);
    }
    let width = pixel_count.isqrt();
    (width, pixel_count.div_ceil(width))
}

/// Lay the pixel sequence into the raster.
///
/// Pixel k lands at `(k % width, k / width)`; with `flip` the y coordinate
/// is mirrored to `height - y - 1`. Cells the sequence does not reach stay
/// at the zeroed background (black); a y that falls outside the raster is
/// skipped rather than an error.
pub fn render_image(pixels: &[Color], flip: bool) -> Result<RgbImage, EcbScopeError> {
    let (width, height) = raster_dimensions(pixels.len());
    if width == 0 {
        return Err(EcbScopeError::EmptyInput(
            "pixel sequence is empty, nothing to render".into(),
        ));
    }
    let mut image = RgbImage::new(to_dim(width)?, to_dim(height)?);
    for (k, &color) in pixels.iter().enumerate() {
        let x = k % width;
        let y = k / width;
        let y = if flip { height - y - 1 } else { y };
        if y < height {
            image.put_pixel(x as u32, y as u32, color);
        }
    }
    Ok(image)
}

fn to_dim(value: usize) -> Result<u32, EcbScopeError> {
    u32::try_from(value).map_err(|_| {
        EcbScopeError::Render(format!(
            "raster dimension {value} exceeds the PNG limit"
        ))
    })
}

/// Default output location: the input path with `_image.png` appended to
/// the whole file name (`cipher.bin` becomes `cipher.bin_image.png`).
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push("_image.png");
    PathBuf::from(name)
}

/// Encode the raster as PNG and move it into place atomically.
///
/// The bytes go to a named temp file in the destination directory first and
/// a rename puts them on the final path, so a failed run leaves no partial
/// file behind.
pub fn write_png(image: &RgbImage, path: &Path) -> Result<(), EcbScopeError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    image.write_to(&mut tmp, ImageFormat::Png)?;
    tmp.persist(path).map_err(|e| EcbScopeError::Io(e.error))?;
    Ok(())
}
