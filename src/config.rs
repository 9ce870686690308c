use crate::error::EcbScopeError;

/// Runtime options for one visualization run.
///
/// The record is immutable once built; every pipeline stage takes it by
/// shared reference. Field semantics match the CLI flags one to one.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cipher block size in bytes.
    pub block_size: usize,
    /// Palette capacity, including the white and black sentinel entries.
    pub max_colors: usize,
    /// Mirror the raster vertically.
    pub flip: bool,
    /// Expansion divisor: each block renders as
    /// `block_size / pixels_per_block` pixels.
    pub pixels_per_block: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            block_size: 16,
            max_colors: 254,
            flip: true,
            pixels_per_block: 16,
        }
    }
}

impl Config {
    /// Check every parameter. Runs before any I/O so a bad flag never
    /// touches the filesystem.
    pub fn validate(&self) -> Result<(), EcbScopeError> {
        if self.block_size == 0 {
            return Err(EcbScopeError::Config(
                "block_size must be positive".into(),
            ));
        }
        if self.max_colors < 2 {
            return Err(EcbScopeError::Config(format!(
                "max_colors must be at least 2 (white and black sentinels), got {}",
                self.max_colors
            )));
        }
        if self.pixels_per_block == 0 {
            return Err(EcbScopeError::Config(
                "pixels_per_block must be positive".into(),
            ));
        }
        if self.block_size % self.pixels_per_block != 0 {
            return Err(EcbScopeError::Config(format!(
                "pixels_per_block ({}) must divide block_size ({}) evenly",
                self.pixels_per_block, self.block_size
            )));
        }
        Ok(())
    }
}
