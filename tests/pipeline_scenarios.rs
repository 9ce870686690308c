use ecbscope::{visualize, Config, EcbScopeError, OVERFLOW_COLOR, TOP_COLOR};
use image::Rgb;

#[test]
fn identical_blocks_all_render_white() {
    // two identical zero blocks share rank 0
    let data = vec![0u8; 32];
    let config = Config::default();
    let vis = visualize(&data, &config).unwrap();
    assert_eq!(vis.block_count, 2);
    assert_eq!(vis.distinct_blocks, 1);
    assert_eq!(vis.image.dimensions(), (1, 2));
    assert!(vis.image.pixels().all(|p| *p == TOP_COLOR));
}

#[test]
fn tied_counts_rank_by_first_appearance() {
    let mut data = vec![0xAA; 16];
    data.extend(vec![0xBB; 16]);
    let vis = visualize(&data, &Config::default()).unwrap();
    assert_eq!(vis.ranking.len(), 2);
    assert_eq!(vis.ranking[0], (&data[..16], 1));
    assert_eq!(vis.colors[&data[..16]], TOP_COLOR);
    assert_eq!(vis.colors[&data[16..]], Rgb([50, 80, 110]));
}

#[test]
fn overflow_ranks_share_black() {
    // three distinct blocks against a palette with room for one real rank
    let mut data = Vec::new();
    for _ in 0..3 {
        data.extend([0x01; 8]);
    }
    for _ in 0..2 {
        data.extend([0x02; 8]);
    }
    data.extend([0x03; 8]);
    let config = Config {
        block_size: 8,
        max_colors: 2,
        pixels_per_block: 8,
        ..Config::default()
    };
    let vis = visualize(&data, &config).unwrap();
    assert_eq!(vis.palette.len(), 2);
    assert_eq!(vis.colors[&[0x01u8; 8][..]], TOP_COLOR);
    assert_eq!(vis.colors[&[0x02u8; 8][..]], OVERFLOW_COLOR);
    assert_eq!(vis.colors[&[0x03u8; 8][..]], OVERFLOW_COLOR);
}

#[test]
fn trailing_partial_block_is_dropped() {
    let data = vec![0x5A; 20];
    let vis = visualize(&data, &Config::default()).unwrap();
    assert_eq!(vis.block_count, 1);
    assert_eq!(vis.kept_bytes, 16);
    assert_eq!(vis.dropped_bytes, 4);
    assert_eq!(vis.image.dimensions(), (1, 1));
}

#[test]
fn expansion_divisor_grows_the_raster() {
    // one pixel per byte instead of one per block
    let data = vec![0u8; 32];
    let config = Config {
        pixels_per_block: 1,
        ..Config::default()
    };
    let vis = visualize(&data, &config).unwrap();
    // 32 pixels: isqrt gives width 5, height rounds up to 7
    assert_eq!(vis.image.dimensions(), (5, 7));
    // every input byte became a white pixel, the 3 spare cells stay black
    let white = vis.image.pixels().filter(|p| **p == TOP_COLOR).count();
    assert_eq!(white, 32);
    assert_eq!(*vis.image.get_pixel(4, 0), Rgb([0, 0, 0]));
}

#[test]
fn input_shorter_than_a_block_is_rejected() {
    let err = visualize(&[0u8; 10], &Config::default()).unwrap_err();
    assert!(matches!(err, EcbScopeError::EmptyInput(_)));
    assert!(err.to_string().contains("shorter than one"));
}

#[test]
fn empty_input_is_rejected() {
    let err = visualize(&[], &Config::default()).unwrap_err();
    assert!(matches!(err, EcbScopeError::EmptyInput(_)));
}

#[test]
fn bad_parameters_fail_before_chunking() {
    let config = Config {
        block_size: 0,
        ..Config::default()
    };
    let err = visualize(&[0u8; 64], &config).unwrap_err();
    assert!(matches!(err, EcbScopeError::Config(_)));

    let config = Config {
        pixels_per_block: 5,
        ..Config::default()
    };
    let err = visualize(&[0u8; 64], &config).unwrap_err();
    assert!(err.to_string().contains("must divide"));
}
