use super::settings::FIELD_CELLS;
use super::types::Mark;

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Mark; FIELD_CELLS]) -> Option<Mark> {
    for [a, b, c] in WINNING_LINES {
        let mark = cells[a];
        if mark != Mark::Empty && cells[b] == mark && cells[c] == mark {
            return Some(mark);
        }
    }
    None
}
