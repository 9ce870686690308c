use ecbscope::{count_blocks, split_blocks};
use quickcheck::quickcheck;

quickcheck! {
    fn counts_cover_every_block(data: Vec<u8>, bs: u8) -> bool {
        let bs = (bs as usize % 8) + 1;
        let blocks = split_blocks(&data, bs);
        let table = count_blocks(&blocks);
        let ranking = table.ranking();
        let total: usize = ranking.iter().map(|&(_, c)| c).sum();
        total == blocks.len() && ranking.len() == table.distinct()
    }

    fn ranking_never_increases(data: Vec<u8>, bs: u8) -> bool {
        let bs = (bs as usize % 8) + 1;
        let blocks = split_blocks(&data, bs);
        let ranking = count_blocks(&blocks).ranking();
        ranking.windows(2).all(|pair| pair[0].1 >= pair[1].1)
    }

    fn every_ranked_block_appears_in_input(data: Vec<u8>, bs: u8) -> bool {
        let bs = (bs as usize % 8) + 1;
        let blocks = split_blocks(&data, bs);
        let table = count_blocks(&blocks);
        table
            .ranking()
            .iter()
            .all(|&(block, count)| count >= 1 && blocks.contains(&block))
    }
}
