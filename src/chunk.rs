//! Fixed-size block chunking of the raw ciphertext buffer.

/// A single ciphertext block, borrowed from the input buffer.
///
/// Blocks are compared and hashed by value. Within one run every block has
/// the same length, so a plain byte-slice key is enough for the frequency
/// table and the color map.
pub type Block<'a> = &'a [u8];

/// Drop the trailing partial block so the buffer length is an exact
/// multiple of `block_size`.
///
/// The remainder bytes are never referenced again; losing up to
/// `block_size - 1` tail bytes is deliberate, not an error.
///
/// Panics if `block_size` is zero; callers validate sizes up front.
pub fn truncate_to_blocks(data: &[u8], block_size: usize) -> &[u8] {
    assert!(block_size > 0, "block size must be non-zero");
    &data[..data.len() - data.len() % block_size]
}

/// Split the buffer into non-overlapping `block_size` strides from offset 0.
///
/// An input shorter than one block yields an empty vector.
///
/// Panics if `block_size` is zero; callers validate sizes up front.
pub fn split_blocks(data: &[u8], block_size: usize) -> Vec<Block<'_>> {
    truncate_to_blocks(data, block_size)
        .chunks_exact(block_size)
        .collect()
}
