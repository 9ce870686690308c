//! Core logic for the ecbscope block-pattern visualizer.
//!
//! The pipeline splits raw bytes into fixed-size blocks, ranks the blocks
//! by frequency, maps ranks onto a deterministic palette and lays the
//! colors out as a near-square PNG raster. Identical blocks always share a
//! color, so ECB-encrypted data shows its repeated structure at a glance
//! while well-randomized data renders as noise.

pub mod chunk;
pub mod config;
pub mod error;
pub mod freq;
pub mod io_utils;
pub mod palette;
pub mod render;
pub mod report;

use std::collections::HashMap;

use image::RgbImage;

pub use chunk::{split_blocks, truncate_to_blocks, Block};
pub use config::Config;
pub use error::EcbScopeError;
pub use freq::{count_blocks, FrequencyTable};
pub use palette::{assign_colors, build_palette, Color, OVERFLOW_COLOR, TOP_COLOR};
pub use render::{default_output_path, raster_dimensions, render_image, write_png};
pub use report::{block_records, BlockRecord};

/// Everything one run produces: the raster plus the analysis it was built
/// from, kept around so reports and callers can inspect the ranking.
#[derive(Debug)]
pub struct Visualization<'a> {
    /// Bytes that made it into complete blocks.
    pub kept_bytes: usize,
    /// Trailing bytes dropped by truncation.
    pub dropped_bytes: usize,
    pub block_count: usize,
    pub distinct_blocks: usize,
    /// Blocks ordered most frequent first, ties in first-seen order.
    pub ranking: Vec<(Block<'a>, usize)>,
    pub palette: Vec<Color>,
    pub colors: HashMap<Block<'a>, Color>,
    pub image: RgbImage,
}

/// Run the full pipeline over raw input bytes.
///
/// Validates the configuration first so bad parameters fail before any
/// work happens, then chunks, counts, ranks, colors and renders. Input too
/// short for a single block is an error: there would be nothing to draw.
pub fn visualize<'a>(data: &'a [u8], config: &Config) -> Result<Visualization<'a>, EcbScopeError> {
    config.validate()?;

    let blocks = split_blocks(data, config.block_size);
    if blocks.is_empty() {
        return Err(EcbScopeError::EmptyInput(format!(
            "{} byte(s) is shorter than one {}-byte block",
            data.len(),
            config.block_size
        )));
    }

    let table = count_blocks(&blocks);
    let ranking = table.ranking();
    let palette = build_palette(config.max_colors)?;
    let colors = assign_colors(&ranking, &palette);
    let pixels = render::expand_pixels(&blocks, &colors, config.block_size, config.pixels_per_block);
    let image = render_image(&pixels, config.flip)?;

    let kept_bytes = blocks.len() * config.block_size;
    Ok(Visualization {
        kept_bytes,
        dropped_bytes: data.len() - kept_bytes,
        block_count: blocks.len(),
        distinct_blocks: table.distinct(),
        ranking,
        palette,
        colors,
        image,
    })
}
