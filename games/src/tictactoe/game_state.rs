use std::collections::VecDeque;

use super::settings::{FIELD_CELLS, MAX_MARKS_PER_PLAYER};
use super::types::{GameStatus, Mark};
use super::win_detector::check_win;

#[derive(Clone, Debug)]
pub struct TicTacToeGameState {
    board: [Mark; FIELD_CELLS],
    current_mark: Mark,
    status: GameStatus,
    moves_x: VecDeque<usize>,
    moves_o: VecDeque<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: [Mark::Empty; FIELD_CELLS],
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            moves_x: VecDeque::new(),
            moves_o: VecDeque::new(),
        }
    }

    pub fn board(&self) -> &[Mark; FIELD_CELLS] {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            GameStatus::InProgress => None,
        }
    }

    pub fn marks_placed(&self, mark: Mark) -> usize {
        match mark {
            Mark::X => self.moves_x.len(),
            Mark::O => self.moves_o.len(),
            Mark::Empty => 0,
        }
    }

    pub fn vanishing_cell(&self) -> Option<usize> {
        if !self.is_active() {
            return None;
        }
        let moves = self.moves_for(self.current_mark);
        if moves.len() >= MAX_MARKS_PER_PLAYER {
            moves.front().copied()
        } else {
            None
        }
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.is_active() && index < FIELD_CELLS && self.board[index] == Mark::Empty
    }

    pub(crate) fn place_current_mark(&mut self, index: usize) -> bool {
        if !self.is_valid_move(index) {
            return false;
        }
        let mark = self.current_mark;
        self.board[index] = mark;
        self.moves_for_mut(mark).push_back(index);
        true
    }

    pub(crate) fn check_game_over(&mut self) -> Option<Mark> {
        let winner = check_win(&self.board)?;
        self.status = match winner {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty => unreachable!(),
        };
        Some(winner)
    }

    pub(crate) fn vanish_overflow(&mut self) -> Option<usize> {
        let mark = self.current_mark;
        let moves = self.moves_for_mut(mark);
        if moves.len() <= MAX_MARKS_PER_PLAYER {
            return None;
        }
        let cleared = moves.pop_front()?;
        self.board[cleared] = Mark::Empty;
        Some(cleared)
    }

    pub(crate) fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    fn moves_for(&self, mark: Mark) -> &VecDeque<usize> {
        if mark == Mark::X {
            &self.moves_x
        } else {
            &self.moves_o
        }
    }

    fn moves_for_mut(&mut self, mark: Mark) -> &mut VecDeque<usize> {
        if mark == Mark::X {
            &mut self.moves_x
        } else {
            &mut self.moves_o
        }
    }
}
