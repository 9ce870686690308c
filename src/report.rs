//! Frequency reports over the ranked blocks.
//!
//! The image answers "where do repeats sit"; these reports answer "which
//! blocks repeat, and how often". Records carry the same rank order the
//! palette assignment uses, so `#ffffff` in a report is the same block
//! that renders white.

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::chunk::Block;
use crate::error::EcbScopeError;
use crate::palette::{Color, OVERFLOW_COLOR};

/// One ranked block, ready for CSV or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct BlockRecord {
    /// 1-based frequency rank.
    pub rank: usize,
    /// Block bytes as lowercase hex.
    pub block: String,
    pub count: usize,
    /// Fraction of all blocks this block accounts for.
    pub share: f64,
    /// Assigned palette color as `#rrggbb`.
    pub color: String,
}

/// Build records for the `top` highest ranks (all of them when `None`).
pub fn block_records<'a>(
    ranking: &[(Block<'a>, usize)],
    colors: &HashMap<Block<'a>, Color>,
    block_count: usize,
    top: Option<usize>,
) -> Vec<BlockRecord> {
    let limit = top.unwrap_or(ranking.len());
    ranking
        .iter()
        .take(limit)
        .enumerate()
        .map(|(idx, &(block, count))| {
            let color = colors.get(block).copied().unwrap_or(OVERFLOW_COLOR);
            let share = if block_count == 0 {
                0.0
            } else {
                count as f64 / block_count as f64
            };
            BlockRecord {
                rank: idx + 1,
                block: hex::encode(block),
                count,
                share,
                color: hex_color(color),
            }
        })
        .collect()
}

fn hex_color(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color[0], color[1], color[2])
}

/// Print a human-readable table to stdout.
///
/// The repeated-block share is the leakage signal: 0% means every block
/// was unique, anything above it means structure survived encryption.
pub fn print_summary(records: &[BlockRecord], block_count: usize, distinct: usize) {
    let repeated = block_count - distinct;
    println!("#blocks: {block_count}");
    println!("#distinct: {distinct}");
    println!(
        "#repeated: {} ({:.1}%)",
        repeated,
        100.0 * repeated as f64 / block_count.max(1) as f64
    );
    for r in records {
        println!(
            "{:>4}  {:>8}  {:>7.4}  {}  {}",
            r.rank, r.count, r.share, r.color, r.block
        );
    }
}

/// Write the records as CSV with a header row.
pub fn write_csv(path: &Path, records: &[BlockRecord]) -> Result<(), EcbScopeError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["rank", "block", "count", "share", "color"])?;
    for r in records {
        writer.write_record([
            r.rank.to_string(),
            r.block.clone(),
            r.count.to_string(),
            format!("{:.4}", r.share),
            r.color.clone(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the records as pretty-printed JSON.
pub fn write_json(path: &Path, records: &[BlockRecord]) -> Result<(), EcbScopeError> {
    let mut file = File::create(path)?;
    serde_json::to_writer_pretty(&mut file, records)?;
    file.write_all(b"\n")?;
    Ok(())
}
