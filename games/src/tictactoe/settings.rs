pub const FIELD_WIDTH: usize = 3;
pub const FIELD_CELLS: usize = FIELD_WIDTH * FIELD_WIDTH;
pub const MAX_MARKS_PER_PLAYER: usize = 3;
