use std::fs;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use ecbscope::io_utils::{ecbscope_cli_error, io_cli_error, output_cli_error};
use ecbscope::render::{default_output_path, write_png};
use ecbscope::{block_records, report, visualize, Config};

/// Render repeated blocks in a raw ciphertext file as a PNG raster.
#[derive(Parser)]
struct Args {
    /// Input file to analyze
    input: PathBuf,
    /// Block size in bytes
    #[arg(long, alias = "block_size", default_value_t = 16)]
    block_size: usize,
    /// Palette capacity, white top rank and black overflow included
    #[arg(long, alias = "max_colors", default_value_t = 254)]
    max_colors: usize,
    /// Mirror the raster vertically (pass false for top-down order)
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    flip: bool,
    /// Pixels-per-block divisor: each block becomes block-size / this many pixels
    #[arg(long, alias = "pixels_per_block", default_value_t = 16)]
    pixels_per_block: usize,
    /// Output PNG path (defaults to the input path with `_image.png` appended)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print a frequency summary to stdout
    #[arg(long)]
    summary: bool,
    /// Limit reports to the N most frequent blocks
    #[arg(long)]
    top: Option<usize>,
    /// Optional CSV output path for the ranked blocks
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Optional JSON output path for the ranked blocks
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = Config {
        block_size: args.block_size,
        max_colors: args.max_colors,
        flip: args.flip,
        pixels_per_block: args.pixels_per_block,
    };
    config
        .validate()
        .map_err(|e| ecbscope_cli_error("invalid arguments", e))?;

    let data = fs::read(&args.input)
        .map_err(|e| io_cli_error("reading input file", &args.input, e))?;

    let vis = visualize(&data, &config).map_err(|e| ecbscope_cli_error("analyzing input", e))?;

    let out_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    write_png(&vis.image, &out_path)
        .map_err(|e| output_cli_error("writing output image", &out_path, e))?;

    if args.summary || args.csv.is_some() || args.json.is_some() {
        let records = block_records(&vis.ranking, &vis.colors, vis.block_count, args.top);
        if args.summary {
            println!("#bytes kept: {}", vis.kept_bytes);
            println!("#bytes dropped: {}", vis.dropped_bytes);
            report::print_summary(&records, vis.block_count, vis.distinct_blocks);
        }
        if let Some(path) = &args.csv {
            report::write_csv(path, &records)
                .map_err(|e| output_cli_error("writing csv report", path, e))?;
        }
        if let Some(path) = &args.json {
            report::write_json(path, &records)
                .map_err(|e| output_cli_error("writing json report", path, e))?;
        }
    }

    println!("Image saved to {}", out_path.display());
    Ok(())
}
