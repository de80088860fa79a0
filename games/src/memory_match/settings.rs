pub const CARD_SYMBOLS: [char; 8] = ['A', 'W', 'T', 'Y', 'U', 'I', 'O', 'H'];
pub const PAIR_COUNT: usize = CARD_SYMBOLS.len();
pub const DECK_SIZE: usize = PAIR_COUNT * 2;
pub const GRID_WIDTH: usize = 4;
pub const MISMATCH_DELAY_MS: u64 = 1000;
